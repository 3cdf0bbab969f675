//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_API_BASE_URL, DEFAULT_API_TIMEOUT_SECONDS, DEFAULT_COMMENT_MAX_LENGTH};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub comments: CommentsConfig,
}

/// Remote API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    #[serde(skip_serializing)]
    pub token: Option<String>,
}

/// Comment thread configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentsConfig {
    pub max_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: DEFAULT_API_BASE_URL.to_string(),
                timeout_seconds: DEFAULT_API_TIMEOUT_SECONDS,
                token: None,
            },
            comments: CommentsConfig {
                max_length: DEFAULT_COMMENT_MAX_LENGTH,
            },
        }
    }
}
