//! Client-side copy of the last saved draft header returned by the server

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The last server response for a saved draft (order, return, transfer, ...).
///
/// Held for reuse across steps. Never reconciled with the server; if the
/// server record changes elsewhere this copy silently goes stale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerDraft {
    pub id: u64,
    /// Human-facing document number (e.g. `ORD-000123`)
    pub number: String,
    #[serde(default)]
    pub status: Option<String>,
    /// Raw response body
    #[serde(default)]
    pub payload: serde_json::Value,
    pub received_at: DateTime<Utc>,
}

impl ServerDraft {
    pub fn new(id: u64, number: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            id,
            number: number.into(),
            status: None,
            payload,
            received_at: Utc::now(),
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// One-line description for summaries
    pub fn describe(&self) -> String {
        match &self.status {
            Some(status) => format!("{} (#{}, {})", self.number, self.id, status),
            None => format!("{} (#{})", self.number, self.id),
        }
    }
}
