use super::call_log::CallLogEntry;
use super::status::Status;
use chrono::{DateTime, Local};
use serde::Serialize;

/// Mutable status fact for one client. Created implicitly on the first
/// status update or logged call, never deleted.
#[derive(Debug, Clone, Serialize)]
pub struct StatusRecord {
    pub client_id: String,
    pub status: Status,
    pub last_contacted: Option<DateTime<Local>>,
}

/// Operator-supplied industry label that supersedes the classifier output.
/// At most one per client, last write wins.
#[derive(Debug, Clone, Serialize)]
pub struct IndustryOverride {
    pub client_id: String,
    pub industry: String,
}

/// Full snapshot of the override store, read in one shot for reconciliation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OverrideSnapshot {
    pub statuses: Vec<StatusRecord>,
    /// Newest-first.
    pub call_log: Vec<CallLogEntry>,
    pub industry_overrides: Vec<IndustryOverride>,
}

impl OverrideSnapshot {
    pub fn status_for(&self, client_id: &str) -> Option<&StatusRecord> {
        self.statuses.iter().find(|s| s.client_id == client_id)
    }

    pub fn industry_for(&self, client_id: &str) -> Option<&IndustryOverride> {
        self.industry_overrides
            .iter()
            .find(|o| o.client_id == client_id)
    }
}
