//! Scholar methods for ScholarApi

use super::ScholarApi;
use crate::core::request::ApiRequest;
use crate::models::{History, Page, PageParams, Scholar, ScholarListItem, ScholarQuery, ScholarRequest};
use crate::traits::error::Result;
use tracing::debug;

impl ScholarApi {
    /// Visible scholars, filtered and paged
    pub async fn list_scholars(&self, query: &ScholarQuery) -> Result<Page<ScholarListItem>> {
        query.page.validate()?;
        let url = self.url_with_query(&["scholars"], &query.to_query_params())?;

        debug!("Fetching scholars from {}", url);

        let page: Page<ScholarListItem> = self
            .fetch(ApiRequest::get(url), "Failed to fetch scholars")
            .await?;

        debug!("Fetched {} of {} scholars", page.data.len(), page.pagination.total);
        Ok(page)
    }

    pub async fn get_scholar(&self, id: &str) -> Result<Scholar> {
        let url = self.url(&["scholars", id])?;
        self.fetch(ApiRequest::get(url), "Failed to fetch scholar")
            .await
    }

    /// All scholars, including hidden ones
    pub async fn admin_list_scholars(&self, query: &ScholarQuery) -> Result<Page<ScholarListItem>> {
        query.page.validate()?;
        let url = self.url_with_query(&["admin", "scholars"], &query.to_query_params())?;
        self.fetch(
            ApiRequest::get(url).authenticated(),
            "Failed to fetch all scholars",
        )
        .await
    }

    pub async fn admin_get_scholar(&self, id: &str) -> Result<Scholar> {
        let url = self.url(&["admin", "scholars", id])?;
        self.fetch(ApiRequest::get(url).authenticated(), "Failed to fetch scholar")
            .await
    }

    pub async fn create_scholar(&self, scholar: &ScholarRequest) -> Result<Scholar> {
        let request = ApiRequest::post(self.url(&["admin", "scholars"])?)
            .authenticated()
            .with_json(scholar)?;
        self.fetch(request, "Failed to create scholar").await
    }

    /// Update a scholar; `scholar.version` must be the version last read
    pub async fn update_scholar(&self, id: &str, scholar: &ScholarRequest) -> Result<Scholar> {
        let request = ApiRequest::put(self.url(&["admin", "scholars", id])?)
            .authenticated()
            .with_json(scholar)?;
        self.fetch(request, "Failed to update scholar").await
    }

    pub async fn delete_scholar(&self, id: &str) -> Result<()> {
        let request = ApiRequest::delete(self.url(&["admin", "scholars", id])?).authenticated();
        self.execute_discarding(request, "Failed to delete scholar")
            .await
    }

    /// Release the edit lock this user holds on a scholar
    pub async fn unlock_scholar(&self, id: &str) -> Result<serde_json::Value> {
        let request =
            ApiRequest::post(self.url(&["admin", "scholars", id, "unlock"])?).authenticated();
        self.fetch(request, "Failed to unlock scholar").await
    }

    /// Release an edit lock held by anyone
    pub async fn force_unlock_scholar(&self, id: &str) -> Result<serde_json::Value> {
        let request =
            ApiRequest::post(self.url(&["admin", "scholars", id, "force-unlock"])?).authenticated();
        self.fetch(request, "Failed to force unlock scholar").await
    }

    pub async fn scholar_history(&self, id: &str, page: &PageParams) -> Result<Page<History>> {
        page.validate()?;
        let url = self.url_with_query(&["admin", "scholars", id, "history"], &page.to_query_params())?;
        self.fetch(
            ApiRequest::get(url).authenticated(),
            "Failed to fetch scholar history",
        )
        .await
    }
}
