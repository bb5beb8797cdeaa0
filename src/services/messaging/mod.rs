pub mod messagebird;

use async_trait::async_trait;
use serde::Serialize;

/// Result of a successful number lookup, in the provider's own terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberInfo {
    pub normalized_number: String,
    pub line_type: String,
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("unrecognized phone number format")]
    UnknownFormat,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[async_trait]
pub trait NumberLookup: Send + Sync {
    async fn lookup(&self, number: &str, country_code: &str) -> Result<NumberInfo, LookupError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledMessage {
    pub originator: String,
    pub recipients: Vec<String>,
    pub scheduled_datetime: String,
    pub body: String,
}

#[async_trait]
pub trait MessagingProvider: Send + Sync {
    /// Queue `message` for delivery at its scheduled time. Returns the provider's message id
    /// when one is reported.
    async fn schedule_message(&self, message: &ScheduledMessage) -> anyhow::Result<Option<String>>;
}
