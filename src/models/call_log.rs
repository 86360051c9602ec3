use chrono::{DateTime, Local};
use serde::Serialize;

/// Append-only contact note. Immutable once written.
#[derive(Debug, Clone, Serialize)]
pub struct CallLogEntry {
    pub id: i64,                      // ⇔ logs.id (AUTOINCREMENT)
    pub client_id: String,            // ⇔ logs.client_id
    pub note: String,                 // ⇔ logs.note
    pub timestamp: DateTime<Local>,   // ⇔ logs.timestamp (TEXT, RFC 3339)
}

impl CallLogEntry {
    pub fn timestamp_str(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M").to_string()
    }
}
