use serde::Serialize;

/// Pipeline status of a client relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    Open,
    Contacted,
    Engaged,
    Negotiation,
    Won,
    Lost,
    OnHold,
}

impl Status {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Status::Open => "open",
            Status::Contacted => "contacted",
            Status::Engaged => "engaged",
            Status::Negotiation => "negotiation",
            Status::Won => "won",
            Status::Lost => "lost",
            Status::OnHold => "on-hold",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "open" => Some(Status::Open),
            "contacted" => Some(Status::Contacted),
            "engaged" => Some(Status::Engaged),
            "negotiation" => Some(Status::Negotiation),
            "won" => Some(Status::Won),
            "lost" => Some(Status::Lost),
            "on-hold" => Some(Status::OnHold),
            _ => None,
        }
    }

    /// Helper: parse user input from the CLI (case-insensitive).
    pub fn from_input(s: &str) -> Option<Self> {
        Status::from_db_str(&s.trim().to_lowercase())
    }

    pub fn all() -> [Status; 7] {
        [
            Status::Open,
            Status::Contacted,
            Status::Engaged,
            Status::Negotiation,
            Status::Won,
            Status::Lost,
            Status::OnHold,
        ]
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, Status::Won | Status::Lost)
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Open
    }
}
