use super::common::{Gender, PageParams};
use super::identity::Identity;
use super::news::News;
use super::tag::{Tag, TagListItem};
use crate::core::query::QueryParams;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Scholar detail, with its identity, tags and news resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scholar {
    pub id: String,
    pub name: String,
    pub gender: Gender,
    #[serde(rename = "fieldOfResearch")]
    pub field_of_research: String,
    #[serde(rename = "yearOfBirth")]
    pub year_of_birth: i32,
    pub image: Option<String>,
    #[serde(rename = "imageFilename", default)]
    pub image_filename: Option<String>,
    pub introduction: String,
    #[serde(rename = "socialInfluence")]
    pub social_influence: String,
    pub featured: bool,
    pub visible: bool,
    pub deleted: bool,
    pub version: i32,
    pub identity: Identity,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub news: Vec<News>,
    #[serde(rename = "archivedAt", default)]
    pub archived_at: Option<DateTime<Utc>>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Scholar row in list responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScholarListItem {
    pub id: String,
    pub name: String,
    pub gender: Gender,
    #[serde(rename = "fieldOfResearch")]
    pub field_of_research: String,
    #[serde(rename = "yearOfBirth")]
    pub year_of_birth: i32,
    pub image: Option<String>,
    #[serde(rename = "imageFilename", default)]
    pub image_filename: Option<String>,
    pub featured: bool,
    pub visible: bool,
    pub deleted: bool,
    /// Identity id
    pub identity: String,
    pub version: i32,
    #[serde(default)]
    pub tags: Vec<TagListItem>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Minimal scholar reference embedded in tag responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScholarInfo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image_filename: Option<String>,
}

/// Create/update payload
///
/// `version` must echo the version last read; the server rejects stale
/// updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScholarRequest {
    pub name: String,
    pub gender: Gender,
    #[serde(rename = "fieldOfResearch")]
    pub field_of_research: String,
    #[serde(rename = "yearOfBirth")]
    pub year_of_birth: i32,
    pub image: Option<String>,
    pub introduction: String,
    #[serde(rename = "socialInfluence")]
    pub social_influence: String,
    /// Identity id
    pub identity: String,
    pub featured: bool,
    pub visible: bool,
    #[serde(rename = "tagIds", default)]
    pub tag_ids: Vec<String>,
    pub version: i32,
}

/// Filters for scholar listings
#[derive(Debug, Clone, Default)]
pub struct ScholarQuery {
    pub page: PageParams,
    pub tags: Vec<String>,
    pub identities: Vec<String>,
    pub years_of_birth: Vec<i32>,
    pub gender: Option<Gender>,
    pub news: Vec<String>,
    pub featured: Option<bool>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

impl ScholarQuery {
    pub fn to_query_params(&self) -> QueryParams {
        let mut params = self.page.to_query_params();
        params
            .push_list("tags", &self.tags)
            .push_list("identities", &self.identities)
            .push_list("yearsOfBirth", &self.years_of_birth)
            .push_opt("gender", self.gender)
            .push_list("news", &self.news)
            .push_opt("featured", self.featured)
            .push_opt("sort", self.sort.as_deref())
            .push_opt("order", self.order.as_deref());
        params
    }
}
