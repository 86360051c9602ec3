use crate::models::call_log::CallLogEntry;
use crate::models::client::ClientRecord;
use chrono::{DateTime, Duration, Local};
use std::collections::HashMap;

/// Count how many of `client_ids` have their latest call-log entry inside
/// `[today - days, today]`. A client with no entries never counts,
/// regardless of the window.
pub fn count_contacted_within(
    entries: &[CallLogEntry],
    client_ids: &[String],
    days: i64,
    today: DateTime<Local>,
) -> usize {
    let floor = today - Duration::days(days);

    let mut latest: HashMap<&str, DateTime<Local>> = HashMap::new();
    for e in entries {
        latest
            .entry(e.client_id.as_str())
            .and_modify(|ts| {
                if e.timestamp > *ts {
                    *ts = e.timestamp;
                }
            })
            .or_insert(e.timestamp);
    }

    client_ids
        .iter()
        .filter(|id| {
            latest
                .get(id.as_str())
                .is_some_and(|ts| *ts >= floor && *ts <= today)
        })
        .count()
}

/// Rows per company, first-seen order. Deterministic given deterministic
/// input order; no sorting is applied.
pub fn personnel_per_company(view: &[ClientRecord]) -> Vec<(String, usize)> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for row in view {
        if !counts.contains_key(&row.company) {
            order.push(row.company.clone());
        }
        *counts.entry(row.company.clone()).or_insert(0) += 1;
    }

    order
        .into_iter()
        .map(|c| {
            let n = counts[&c];
            (c, n)
        })
        .collect()
}

/// Headline number shown above the client table. Takes company names
/// directly so filtered listings don't have to clone rows to count.
pub fn unique_companies<'a, I>(names: I) -> usize
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen: Vec<&str> = names.into_iter().collect();
    seen.sort_unstable();
    seen.dedup();
    seen.len()
}
