use super::common::PageParams;
use crate::core::query::QueryParams;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub admin: bool,
    pub active: bool,
    #[serde(rename = "lastLogin", default)]
    pub last_login: Option<DateTime<Utc>>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Partial update; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl UserUpdate {
    pub fn is_empty(&self) -> bool {
        self.admin.is_none() && self.active.is_none()
    }
}

#[derive(Debug, Clone, Default)]
pub struct UserQuery {
    pub page: PageParams,
    pub admin: Option<bool>,
    pub active: Option<bool>,
}

impl UserQuery {
    pub fn to_query_params(&self) -> QueryParams {
        let mut params = self.page.to_query_params();
        params
            .push_opt("admin", self.admin)
            .push_opt("active", self.active);
        params
    }
}
