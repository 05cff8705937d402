//! Identity methods for ScholarApi

use super::ScholarApi;
use crate::core::request::ApiRequest;
use crate::models::{Identity, IdentityRequest, ListResponse};
use crate::traits::error::Result;

impl ScholarApi {
    pub async fn list_identities(&self) -> Result<ListResponse<Identity>> {
        let url = self.url(&["identities"])?;
        self.fetch(ApiRequest::get(url), "Failed to fetch identities")
            .await
    }

    pub async fn admin_list_identities(&self) -> Result<ListResponse<Identity>> {
        let url = self.url(&["admin", "identities"])?;
        self.fetch(
            ApiRequest::get(url).authenticated(),
            "Failed to fetch identities",
        )
        .await
    }

    pub async fn admin_get_identity(&self, id: &str) -> Result<Identity> {
        let url = self.url(&["admin", "identities", id])?;
        self.fetch(
            ApiRequest::get(url).authenticated(),
            "Failed to fetch identity",
        )
        .await
    }

    pub async fn create_identity(&self, identity: &IdentityRequest) -> Result<Identity> {
        let request = ApiRequest::post(self.url(&["admin", "identities"])?)
            .authenticated()
            .with_json(identity)?;
        self.fetch(request, "Failed to create identity").await
    }

    pub async fn update_identity(&self, id: &str, identity: &IdentityRequest) -> Result<Identity> {
        let request = ApiRequest::put(self.url(&["admin", "identities", id])?)
            .authenticated()
            .with_json(identity)?;
        self.fetch(request, "Failed to update identity").await
    }

    pub async fn delete_identity(&self, id: &str) -> Result<()> {
        let request = ApiRequest::delete(self.url(&["admin", "identities", id])?).authenticated();
        self.execute_discarding(request, "Failed to delete identity")
            .await
    }
}
