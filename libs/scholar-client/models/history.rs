use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One saved revision of a scholar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct History {
    pub id: String,
    /// Scholar id
    pub scholar: String,
    pub version: i32,
    /// Snapshot of the scholar fields at this version
    pub values: serde_json::Value,
    #[serde(rename = "updatedBy", default)]
    pub updated_by: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revision_without_editor_decodes() {
        let history: History = serde_json::from_value(serde_json::json!({
            "id": "h1",
            "scholar": "s1",
            "version": 3,
            "values": {"name": "Ada"},
            "updatedBy": null,
            "updatedAt": "2024-02-01T12:00:00Z"
        }))
        .unwrap();
        assert_eq!(history.updated_by, None);
        assert_eq!(history.values["name"], "Ada");
    }
}
