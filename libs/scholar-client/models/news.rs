use super::common::PageParams;
use super::scholar::ScholarInfo;
use crate::core::query::QueryParams;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct News {
    pub id: String,
    pub title: String,
    pub source: String,
    pub url: String,
    #[serde(rename = "publishDate")]
    pub publish_date: DateTime<Utc>,
    #[serde(rename = "archivedAt", default)]
    pub archived_at: Option<DateTime<Utc>>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// News article with the scholars it mentions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    #[serde(flatten)]
    pub news: News,
    #[serde(rename = "scholarIds", default)]
    pub scholar_ids: Vec<String>,
    /// Resolved scholars, when the server expands them
    #[serde(default)]
    pub scholars: Vec<ScholarInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsRequest {
    pub title: String,
    pub source: String,
    pub url: String,
    #[serde(rename = "publishDate")]
    pub publish_date: DateTime<Utc>,
    #[serde(rename = "scholarIds")]
    pub scholar_ids: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NewsQuery {
    pub page: PageParams,
    pub scholar_id: Option<String>,
}

impl NewsQuery {
    pub fn to_query_params(&self) -> QueryParams {
        let mut params = self.page.to_query_params();
        params.push_opt("scholar_id", self.scholar_id.as_deref());
        params
    }
}
