// Chat request/response payloads

use serde::{Deserialize, Serialize};

use crate::buckets::BucketScores;

/// Bucket label reported when nothing matched
pub const NO_BUCKET_LABEL: &str = "None";

/// Incoming chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Accepted for client compatibility; no session state is kept
    #[serde(default)]
    pub session_id: Option<String>,
    pub message: String,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            session_id: None,
            message: message.into(),
        }
    }
}

/// Classification result returned to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub bucket: String,
    pub response: String,
    /// Crisis phrase that triggered the safety response
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched: Option<String>,
    /// Keyword scores behind the classification, for diagnostics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scores: Option<BucketScores>,
}

impl ChatResponse {
    pub fn is_crisis(&self) -> bool {
        self.matched.is_some()
    }
}
