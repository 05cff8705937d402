use crate::core::query::QueryParams;
use crate::traits::error::{ClientError, Result};
use serde::{Deserialize, Serialize};

/// Largest page the API serves
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    M,
    F,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::M => write!(f, "M"),
            Gender::F => write!(f, "F"),
        }
    }
}

/// Pagination block returned with every paged list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: i64,
    #[serde(rename = "pageSize")]
    pub page_size: i64,
    pub total: i64,
    #[serde(rename = "totalPages")]
    pub total_pages: i64,
}

impl Pagination {
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Paged list response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

/// Unpaged list response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
}

/// Requested page; both fields optional so the server defaults apply
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageParams {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl PageParams {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: Some(page),
            page_size: Some(page_size),
        }
    }

    /// Reject pages the server would refuse
    pub fn validate(&self) -> Result<()> {
        if self.page == Some(0) {
            return Err(ClientError::InvalidRequest(
                "page must be at least 1".to_string(),
            ));
        }
        if let Some(size) = self.page_size {
            if size == 0 || size > MAX_PAGE_SIZE {
                return Err(ClientError::InvalidRequest(format!(
                    "page_size must be between 1 and {}",
                    MAX_PAGE_SIZE
                )));
            }
        }
        Ok(())
    }

    pub fn append_to(&self, params: &mut QueryParams) {
        params
            .push_opt("page", self.page)
            .push_opt("page_size", self.page_size);
    }

    pub fn to_query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        self.append_to(&mut params);
        params
    }
}
