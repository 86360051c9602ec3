use crate::models::client::{ClientBase, ClientRecord};
use crate::models::company::Company;
use crate::models::overrides::OverrideSnapshot;
use crate::models::status::Status;
use std::collections::HashMap;

/// Per-industry revenue rollup: group companies by industry label, sum
/// revenue, round to 2 decimals. Keys are lowercased so the classifier
/// labels join against hand-edited company files.
pub fn industry_revenue_rollup(companies: &[Company]) -> HashMap<String, f64> {
    let mut totals: HashMap<String, f64> = HashMap::new();

    for c in companies {
        let key = c.industry.trim().to_lowercase();
        if key.is_empty() {
            continue;
        }
        *totals.entry(key).or_insert(0.0) += c.revenue;
    }

    for v in totals.values_mut() {
        *v = (*v * 100.0).round() / 100.0;
    }

    totals
}

/// Merge the base roster with the override store into the reconciled view.
///
/// Pure function of its three inputs: same inputs, same rows, same order.
/// Row order is the roster insertion order (the roster loader already
/// deduplicated by client id, first occurrence wins).
///
/// Merge rules:
/// - industry override wins unconditionally over the base label
/// - a status record replaces status and last-contacted; no record means
///   status `open`, not an absent value
/// - industry revenue is left-joined from the rollup, None when unmatched
///   (an empty companies table is not an error, every row gets None)
pub fn build_view(
    people: &[ClientBase],
    companies: &[Company],
    overrides: &OverrideSnapshot,
) -> Vec<ClientRecord> {
    let rollup = industry_revenue_rollup(companies);

    let status_by_id: HashMap<&str, _> = overrides
        .statuses
        .iter()
        .map(|s| (s.client_id.as_str(), s))
        .collect();

    let industry_by_id: HashMap<&str, &str> = overrides
        .industry_overrides
        .iter()
        .map(|o| (o.client_id.as_str(), o.industry.as_str()))
        .collect();

    let mut view = Vec::with_capacity(people.len());

    for person in people {
        let client_id = person.client_id();

        let industry = match industry_by_id.get(client_id.as_str()) {
            Some(label) => Some(label.to_string()),
            None => person.industry.clone(),
        };

        let industry_revenue = industry
            .as_deref()
            .and_then(|label| rollup.get(&label.trim().to_lowercase()))
            .copied();

        let (status, last_contacted) = match status_by_id.get(client_id.as_str()) {
            Some(rec) => (rec.status, rec.last_contacted),
            None => (person.status, None),
        };

        view.push(ClientRecord {
            client_id,
            name: person.name.clone(),
            company: person.company.clone(),
            title: person.title.clone(),
            industry,
            status,
            last_contacted,
            industry_revenue,
        });
    }

    view
}

/// Count of view rows per status, in the fixed enum order.
pub fn status_breakdown(view: &[ClientRecord]) -> Vec<(Status, usize)> {
    Status::all()
        .iter()
        .map(|s| (*s, view.iter().filter(|r| r.status == *s).count()))
        .filter(|(_, n)| *n > 0)
        .collect()
}
