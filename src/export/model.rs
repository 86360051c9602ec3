// src/export/model.rs

use crate::models::client::ClientRecord;
use serde::Serialize;

/// Flat row for exports of the reconciled view.
#[derive(Serialize, Clone, Debug)]
pub struct ClientExport {
    pub client_id: String,
    pub name: String,
    pub company: String,
    pub title: String,
    pub industry: String,
    pub status: String,
    pub last_contacted: String,
    pub industry_revenue: String,
}

impl From<&ClientRecord> for ClientExport {
    fn from(r: &ClientRecord) -> Self {
        Self {
            client_id: r.client_id.clone(),
            name: r.name.clone(),
            company: r.company.clone(),
            title: r.title.clone().unwrap_or_default(),
            industry: r.industry.clone().unwrap_or_default(),
            status: r.status.to_db_str().to_string(),
            last_contacted: r.last_contacted_str(),
            industry_revenue: r
                .industry_revenue
                .map(|v| format!("{:.2}", v))
                .unwrap_or_default(),
        }
    }
}

/// Header per CSV / JSON / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "client_id",
        "name",
        "company",
        "title",
        "industry",
        "status",
        "last_contacted",
        "industry_revenue",
    ]
}

pub(crate) fn client_to_row(c: &ClientExport) -> Vec<String> {
    vec![
        c.client_id.clone(),
        c.name.clone(),
        c.company.clone(),
        c.title.clone(),
        c.industry.clone(),
        c.status.clone(),
        c.last_contacted.clone(),
        c.industry_revenue.clone(),
    ]
}
