use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::client::ClientBase;
use crate::models::company::Company;
use crate::models::status::Status;
use csv::StringRecord;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Column indices resolved once per file. Headers are matched
/// case-insensitively and a few legacy spellings are folded into the
/// canonical name ("Revenue (in Millions)" → "Revenue",
/// "LLM Industry" → "Industry").
struct HeaderMap {
    idx: Vec<(String, usize)>,
}

impl HeaderMap {
    fn new(headers: &StringRecord) -> Self {
        let idx = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (normalize_header(h), i))
            .collect();
        Self { idx }
    }

    fn find(&self, names: &[&str]) -> Option<usize> {
        for name in names {
            let needle = normalize_header(name);
            if let Some((_, i)) = self.idx.iter().find(|(h, _)| *h == needle) {
                return Some(*i);
            }
        }
        None
    }

    /// Resolve a required column or fail with the canonical name.
    fn require(&self, names: &[&str]) -> AppResult<usize> {
        self.find(names)
            .ok_or_else(|| AppError::SchemaError(names[0].to_string()))
    }
}

fn normalize_header(h: &str) -> String {
    let h = h.trim().to_lowercase().replace('_', " ");
    match h.as_str() {
        "revenue (in millions)" => "revenue".to_string(),
        "llm industry" => "industry".to_string(),
        "company name" => "company".to_string(),
        other => other.to_string(),
    }
}

fn cell(record: &StringRecord, idx: usize) -> Option<String> {
    record
        .get(idx)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Pick the people source: the updated-roster artifact wins over the
/// original ingestion file when both exist.
pub fn people_source(cfg: &Config) -> AppResult<PathBuf> {
    let updated = PathBuf::from(&cfg.updated_people_file);
    if updated.exists() {
        return Ok(updated);
    }

    let original = PathBuf::from(&cfg.people_file);
    if original.exists() {
        return Ok(original);
    }

    Err(AppError::DataUnavailable(format!(
        "neither {} nor {} exists",
        cfg.updated_people_file, cfg.people_file
    )))
}

/// Load the base people roster.
/// Rows are deduplicated by client id, first occurrence in read order wins.
pub fn load_people(cfg: &Config) -> AppResult<Vec<ClientBase>> {
    let path = people_source(cfg)?;
    read_people(&path)
}

pub fn read_people(path: &Path) -> AppResult<Vec<ClientBase>> {
    let mut rdr = csv::Reader::from_path(path)?;

    let map = HeaderMap::new(rdr.headers()?);
    let name_i = map.require(&["Name"])?;
    let company_i = map.require(&["Company"])?;
    let title_i = map.require(&["Title"])?;
    let industry_i = map.find(&["Industry"]);
    let status_i = map.find(&["Status"]);

    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::new();

    for record in rdr.records() {
        let record = record?;

        let name = cell(&record, name_i).unwrap_or_default();
        let company = cell(&record, company_i).unwrap_or_default();
        if name.is_empty() && company.is_empty() {
            continue; // blank filler row
        }

        let mut row = ClientBase::new(
            &name,
            &company,
            cell(&record, title_i),
            industry_i.and_then(|i| cell(&record, i)),
        );

        // Blank or missing Status column defaults to open.
        if let Some(i) = status_i
            && let Some(raw) = cell(&record, i)
        {
            row.status = Status::from_input(&raw).unwrap_or(Status::Open);
        }

        if seen.insert(row.client_id()) {
            out.push(row);
        }
    }

    Ok(out)
}

/// Load the companies table.
pub fn load_companies(cfg: &Config) -> AppResult<Vec<Company>> {
    let path = PathBuf::from(&cfg.companies_file);
    if !path.exists() {
        return Err(AppError::DataUnavailable(format!(
            "{} does not exist",
            cfg.companies_file
        )));
    }
    read_companies(&path)
}

pub fn read_companies(path: &Path) -> AppResult<Vec<Company>> {
    let mut rdr = csv::Reader::from_path(path)?;

    let map = HeaderMap::new(rdr.headers()?);
    let name_i = map.require(&["Company Name", "Name"])?;
    let industry_i = map.require(&["Industry"])?;
    let revenue_i = map.require(&["Revenue"])?;
    let address_i = map.find(&["Address"]);
    let lat_i = map.find(&["Latitude"]);
    let lon_i = map.find(&["Longitude"]);

    let mut out = Vec::new();

    for record in rdr.records() {
        let record = record?;

        let name = match cell(&record, name_i) {
            Some(n) => n,
            None => continue,
        };
        let industry = cell(&record, industry_i).unwrap_or_default();

        let revenue = cell(&record, revenue_i)
            .and_then(|v| v.replace(',', "").parse::<f64>().ok())
            .unwrap_or(0.0);

        let mut company = Company::new(&name, &industry, revenue);
        company.address = address_i.and_then(|i| cell(&record, i));
        company.latitude = lat_i.and_then(|i| cell(&record, i)).and_then(|v| v.parse().ok());
        company.longitude = lon_i.and_then(|i| cell(&record, i)).and_then(|v| v.parse().ok());

        out.push(company);
    }

    Ok(out)
}
