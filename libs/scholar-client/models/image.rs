use super::common::PageParams;
use crate::core::query::QueryParams;
use crate::traits::error::{ClientError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Uploaded image metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub id: String,
    pub filename: String,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    #[serde(rename = "sizeBytes")]
    pub size_bytes: i64,
    #[serde(rename = "uploadedBy", default)]
    pub uploaded_by: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Raw image bytes as served by the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBlob {
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

impl ImageBlob {
    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .map(|ct| ct.contains("application/json"))
            .unwrap_or(false)
    }

    /// Decode the body as image metadata, for servers that answer with JSON
    pub fn metadata(&self) -> Result<Image> {
        if !self.is_json() {
            return Err(ClientError::DeserializeFailed(format!(
                "image body is {}, not JSON",
                self.content_type.as_deref().unwrap_or("untyped")
            )));
        }
        serde_json::from_slice(&self.data).map_err(|e| ClientError::DeserializeFailed(e.to_string()))
    }
}

#[derive(Debug, Clone, Default)]
pub struct ImageQuery {
    pub page: PageParams,
}

impl ImageQuery {
    pub fn to_query_params(&self) -> QueryParams {
        self.page.to_query_params()
    }
}
