use super::common::Pagination;
use super::scholar::ScholarInfo;
use crate::core::query::QueryParams;
use crate::traits::error::{ClientError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const MAX_TAG_NAME_LEN: usize = 255;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub featured: bool,
    #[serde(rename = "displayOrder")]
    pub display_order: i32,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "archivedAt", default)]
    pub archived_at: Option<DateTime<Utc>>,
}

/// Tag summary embedded in scholar rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagListItem {
    pub id: String,
    pub name: String,
    pub color: Option<String>,
    pub featured: bool,
    #[serde(rename = "displayOrder")]
    pub display_order: i32,
}

/// Tag listing entry, with the scholars carrying it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagWithScholars {
    #[serde(flatten)]
    pub tag: Tag,
    #[serde(default)]
    pub scholars: Vec<ScholarInfo>,
}

/// Tag detail with a page of its scholars
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagDetail {
    #[serde(flatten)]
    pub tag: Tag,
    #[serde(default)]
    pub scholars: Vec<ScholarInfo>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagRequest {
    pub name: String,
    pub description: Option<String>,
    /// `#RRGGBB` when set
    pub color: Option<String>,
    pub featured: bool,
    #[serde(rename = "displayOrder", skip_serializing_if = "Option::is_none")]
    pub display_order: Option<i32>,
}

impl TagRequest {
    /// Check the constraints the server enforces on tags
    pub fn validate(&self) -> Result<()> {
        let name_len = self.name.chars().count();
        if name_len == 0 || name_len > MAX_TAG_NAME_LEN {
            return Err(ClientError::InvalidRequest(format!(
                "tag name must be 1 to {} characters",
                MAX_TAG_NAME_LEN
            )));
        }
        if let Some(color) = self.color.as_deref().filter(|c| !is_hex_color(c)) {
            return Err(ClientError::InvalidRequest(format!(
                "tag color must look like #RRGGBB, got {:?}",
                color
            )));
        }
        Ok(())
    }
}

fn is_hex_color(color: &str) -> bool {
    color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Filters for tag listings
#[derive(Debug, Clone, Copy, Default)]
pub struct TagListQuery {
    pub featured: Option<bool>,
}

impl TagListQuery {
    pub fn to_query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push_opt("featured", self.featured);
        params
    }
}
