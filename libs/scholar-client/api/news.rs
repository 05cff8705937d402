//! News methods for ScholarApi

use super::ScholarApi;
use crate::core::request::ApiRequest;
use crate::models::{NewsItem, NewsQuery, NewsRequest, Page};
use crate::traits::error::Result;

impl ScholarApi {
    pub async fn list_news(&self, query: &NewsQuery) -> Result<Page<NewsItem>> {
        query.page.validate()?;
        let url = self.url_with_query(&["news"], &query.to_query_params())?;
        self.fetch(ApiRequest::get(url), "Failed to fetch news")
            .await
    }

    pub async fn get_news(&self, id: &str) -> Result<NewsItem> {
        let url = self.url(&["news", id])?;
        self.fetch(ApiRequest::get(url), "Failed to fetch news item")
            .await
    }

    pub async fn admin_list_news(&self, query: &NewsQuery) -> Result<Page<NewsItem>> {
        query.page.validate()?;
        let url = self.url_with_query(&["admin", "news"], &query.to_query_params())?;
        self.fetch(ApiRequest::get(url).authenticated(), "Failed to fetch news")
            .await
    }

    pub async fn admin_get_news(&self, id: &str) -> Result<NewsItem> {
        let url = self.url(&["admin", "news", id])?;
        self.fetch(
            ApiRequest::get(url).authenticated(),
            "Failed to fetch news item",
        )
        .await
    }

    pub async fn create_news(&self, news: &NewsRequest) -> Result<NewsItem> {
        let request = ApiRequest::post(self.url(&["admin", "news"])?)
            .authenticated()
            .with_json(news)?;
        self.fetch(request, "Failed to create news").await
    }

    pub async fn update_news(&self, id: &str, news: &NewsRequest) -> Result<NewsItem> {
        let request = ApiRequest::put(self.url(&["admin", "news", id])?)
            .authenticated()
            .with_json(news)?;
        self.fetch(request, "Failed to update news").await
    }

    pub async fn delete_news(&self, id: &str) -> Result<()> {
        let request = ApiRequest::delete(self.url(&["admin", "news", id])?).authenticated();
        self.execute_discarding(request, "Failed to delete news")
            .await
    }
}
