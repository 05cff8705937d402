//! Search console methods for ScholarApi

use super::ScholarApi;
use crate::core::request::ApiRequest;
use crate::models::{ChatOptions, RagChatResponse, RagSearchResponse, SearchOptions};
use crate::traits::error::{ClientError, Result};
use tracing::debug;

impl ScholarApi {
    /// Semantic search over scholar profiles
    pub async fn rag_search(&self, options: &SearchOptions) -> Result<RagSearchResponse> {
        if options.query.trim().is_empty() {
            return Err(ClientError::InvalidRequest(
                "search query is empty".to_string(),
            ));
        }

        let request = ApiRequest::post(self.url(&["admin", "rag", "search"])?)
            .authenticated()
            .with_json(options)?;
        let response: RagSearchResponse = self.fetch(request, "Search failed").await?;

        debug!(
            "Search {:?} matched {} scholars",
            options.query,
            response.retrieved_scholars.len()
        );
        Ok(response)
    }

    /// One chat turn; `options.messages` carries the whole conversation
    pub async fn rag_chat(&self, options: &ChatOptions) -> Result<RagChatResponse> {
        if options.messages.is_empty() {
            return Err(ClientError::InvalidRequest(
                "chat needs at least one message".to_string(),
            ));
        }

        let request = ApiRequest::post(self.url(&["admin", "rag", "chat"])?)
            .authenticated()
            .with_json(options)?;
        self.fetch(request, "Chat failed").await
    }
}
