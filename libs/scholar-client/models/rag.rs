//! Semantic search and chat over scholar profiles
//!
//! These endpoints use snake_case JSON, unlike the rest of the API.

use serde::{Deserialize, Serialize};

fn default_limit() -> u32 {
    5
}

/// Search request; defaults match the server's
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOptions {
    pub query: String,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub threshold: f64,
    #[serde(default)]
    pub include_hidden: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identities: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl SearchOptions {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: default_limit(),
            threshold: 0.0,
            include_hidden: false,
            identities: Vec::new(),
            tags: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// `user` or `assistant`
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatOptions {
    pub messages: Vec<ChatMessage>,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub include_hidden: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identities: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl ChatOptions {
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            limit: default_limit(),
            include_hidden: false,
            identities: Vec::new(),
            tags: Vec::new(),
        }
    }
}

/// Scholar matched by a search, with its similarity score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RagScholarResult {
    pub id: String,
    pub name: String,
    pub field_of_research: String,
    pub introduction: String,
    pub social_influence: String,
    pub similarity_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RagSearchResponse {
    pub query: String,
    pub retrieved_scholars: Vec<RagScholarResult>,
    pub response: String,
    pub context_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RagChatResponse {
    pub message: String,
    #[serde(default)]
    pub context_scholars: Vec<RagScholarResult>,
    pub context_count: usize,
}
