//! Tag methods for ScholarApi

use super::ScholarApi;
use crate::core::request::ApiRequest;
use crate::models::{ListResponse, PageParams, TagDetail, TagListQuery, TagRequest, TagWithScholars};
use crate::traits::error::Result;

impl ScholarApi {
    pub async fn list_tags(&self, query: &TagListQuery) -> Result<ListResponse<TagWithScholars>> {
        let url = self.url_with_query(&["tags"], &query.to_query_params())?;
        self.fetch(ApiRequest::get(url), "Failed to fetch tags")
            .await
    }

    /// Tag with one page of the scholars carrying it
    pub async fn get_tag(&self, id: &str, page: &PageParams) -> Result<TagDetail> {
        page.validate()?;
        let url = self.url_with_query(&["tags", id], &page.to_query_params())?;
        self.fetch(ApiRequest::get(url), "Failed to fetch tag")
            .await
    }

    pub async fn admin_list_tags(&self) -> Result<ListResponse<TagWithScholars>> {
        let url = self.url(&["admin", "tags"])?;
        self.fetch(ApiRequest::get(url).authenticated(), "Failed to fetch tags")
            .await
    }

    pub async fn admin_get_tag(&self, id: &str) -> Result<TagDetail> {
        let url = self.url(&["admin", "tags", id])?;
        self.fetch(ApiRequest::get(url).authenticated(), "Failed to fetch tag")
            .await
    }

    pub async fn create_tag(&self, tag: &TagRequest) -> Result<TagWithScholars> {
        tag.validate()?;
        let request = ApiRequest::post(self.url(&["admin", "tags"])?)
            .authenticated()
            .with_json(tag)?;
        self.fetch(request, "Failed to create tag").await
    }

    pub async fn update_tag(&self, id: &str, tag: &TagRequest) -> Result<TagWithScholars> {
        tag.validate()?;
        let request = ApiRequest::put(self.url(&["admin", "tags", id])?)
            .authenticated()
            .with_json(tag)?;
        self.fetch(request, "Failed to update tag").await
    }

    pub async fn delete_tag(&self, id: &str) -> Result<()> {
        let request = ApiRequest::delete(self.url(&["admin", "tags", id])?).authenticated();
        self.execute_discarding(request, "Failed to delete tag")
            .await
    }
}
