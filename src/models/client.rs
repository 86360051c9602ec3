use super::status::Status;
use chrono::{DateTime, Local};
use serde::Serialize;

/// Derive the client identity from its name + company pair.
/// The id is never stored in the roster file; it is recomputed on every load.
pub fn client_id(name: &str, company: &str) -> String {
    format!("{} @ {}", name.trim(), company.trim())
}

/// One row of the base roster, as read from the people file.
#[derive(Debug, Clone, Serialize)]
pub struct ClientBase {
    pub name: String,
    pub company: String,
    pub title: Option<String>,        // ⇔ people.Title (may be blank)
    pub industry: Option<String>,     // ⇔ people.Industry (classifier output)
    pub status: Status,               // ⇔ people.Status, blank → open
}

impl ClientBase {
    pub fn new(name: &str, company: &str, title: Option<String>, industry: Option<String>) -> Self {
        Self {
            name: name.trim().to_string(),
            company: company.trim().to_string(),
            title,
            industry,
            status: Status::Open,
        }
    }

    pub fn client_id(&self) -> String {
        client_id(&self.name, &self.company)
    }
}

/// One row of the reconciled view: roster base fields plus every override
/// fact applied, plus derived fields.
#[derive(Debug, Clone, Serialize)]
pub struct ClientRecord {
    pub client_id: String,
    pub name: String,
    pub company: String,
    pub title: Option<String>,
    pub industry: Option<String>,
    pub status: Status,
    pub last_contacted: Option<DateTime<Local>>,
    /// Sum of company revenues in this client's industry, None when the
    /// industry matches no company.
    pub industry_revenue: Option<f64>,
}

impl ClientRecord {
    pub fn last_contacted_str(&self) -> String {
        self.last_contacted
            .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default()
    }
}
