use serde::Serialize;

/// One row of the companies file. Clients reference a company by name only,
/// the link is not enforced anywhere.
#[derive(Debug, Clone, Serialize)]
pub struct Company {
    pub name: String,
    pub industry: String,
    pub revenue: f64, // millions
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Company {
    pub fn new(name: &str, industry: &str, revenue: f64) -> Self {
        Self {
            name: name.trim().to_string(),
            industry: industry.trim().to_string(),
            revenue,
            address: None,
            latitude: None,
            longitude: None,
        }
    }
}
