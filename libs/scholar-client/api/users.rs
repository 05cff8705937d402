//! User administration methods for ScholarApi

use super::ScholarApi;
use crate::core::request::ApiRequest;
use crate::models::{Page, User, UserQuery, UserUpdate};
use crate::traits::error::{ClientError, Result};

impl ScholarApi {
    pub async fn list_users(&self, query: &UserQuery) -> Result<Page<User>> {
        query.page.validate()?;
        let url = self.url_with_query(&["admin", "users"], &query.to_query_params())?;
        self.fetch(ApiRequest::get(url).authenticated(), "Failed to fetch users")
            .await
    }

    pub async fn get_user(&self, id: &str) -> Result<User> {
        let url = self.url(&["admin", "users", id])?;
        self.fetch(ApiRequest::get(url).authenticated(), "Failed to fetch user")
            .await
    }

    /// Change a user's admin or active flag
    pub async fn update_user(&self, id: &str, update: &UserUpdate) -> Result<User> {
        if update.is_empty() {
            return Err(ClientError::InvalidRequest(
                "user update sets no fields".to_string(),
            ));
        }
        let request = ApiRequest::put(self.url(&["admin", "users", id])?)
            .authenticated()
            .with_json(update)?;
        self.fetch(request, "Failed to update user").await
    }

    pub async fn delete_user(&self, id: &str) -> Result<()> {
        let request = ApiRequest::delete(self.url(&["admin", "users", id])?).authenticated();
        self.execute_discarding(request, "Failed to delete user")
            .await
    }
}
