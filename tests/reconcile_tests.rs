use chrono::{Duration, Local, TimeZone};
use clienttrack::core::metrics::{count_contacted_within, personnel_per_company, unique_companies};
use clienttrack::core::reconcile::{build_view, industry_revenue_rollup};
use clienttrack::models::call_log::CallLogEntry;
use clienttrack::models::client::{ClientBase, client_id};
use clienttrack::models::company::Company;
use clienttrack::models::overrides::{IndustryOverride, OverrideSnapshot, StatusRecord};
use clienttrack::models::status::Status;

fn people() -> Vec<ClientBase> {
    vec![
        ClientBase::new(
            "Alice",
            "Acme",
            Some("Engineer".into()),
            Some("technology".into()),
        ),
        ClientBase::new("Bob", "Beta", Some("Nurse".into()), Some("healthcare".into())),
        ClientBase::new("Carol", "Acme", None, None),
    ]
}

fn companies() -> Vec<Company> {
    vec![
        Company::new("Acme", "tech", 10.0),
        Company::new("Initech", "tech", 5.0),
        Company::new("Beta", "health", 3.0),
    ]
}

#[test]
fn client_id_is_trimmed_and_deterministic() {
    assert_eq!(client_id(" Alice ", " Acme "), "Alice @ Acme");
    assert_eq!(client_id("Alice", "Acme"), client_id(" Alice", "Acme "));
}

#[test]
fn rollup_groups_and_rounds() {
    let rollup = industry_revenue_rollup(&companies());

    assert_eq!(rollup.get("tech"), Some(&15.0));
    assert_eq!(rollup.get("health"), Some(&3.0));
    assert_eq!(rollup.len(), 2);
}

#[test]
fn rollup_rounds_to_two_decimals() {
    let companies = vec![
        Company::new("A", "tech", 0.105),
        Company::new("B", "tech", 0.10),
    ];

    let rollup = industry_revenue_rollup(&companies);
    assert_eq!(rollup.get("tech"), Some(&0.21));
}

#[test]
fn build_view_is_pure() {
    let people = people();
    let companies = companies();
    let snapshot = OverrideSnapshot::default();

    let a = build_view(&people, &companies, &snapshot);
    let b = build_view(&people, &companies, &snapshot);

    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(b.iter()) {
        assert_eq!(x.client_id, y.client_id);
        assert_eq!(x.status, y.status);
        assert_eq!(x.industry, y.industry);
        assert_eq!(x.industry_revenue, y.industry_revenue);
    }
}

#[test]
fn view_preserves_roster_order() {
    let view = build_view(&people(), &companies(), &OverrideSnapshot::default());

    let ids: Vec<&str> = view.iter().map(|r| r.client_id.as_str()).collect();
    assert_eq!(ids, ["Alice @ Acme", "Bob @ Beta", "Carol @ Acme"]);
}

#[test]
fn industry_override_always_wins() {
    let snapshot = OverrideSnapshot {
        industry_overrides: vec![IndustryOverride {
            client_id: "Alice @ Acme".into(),
            industry: "energy".into(),
        }],
        ..Default::default()
    };

    let view = build_view(&people(), &companies(), &snapshot);

    assert_eq!(view[0].industry.as_deref(), Some("energy"));
    // The other rows keep their auto-assigned labels
    assert_eq!(view[1].industry.as_deref(), Some("healthcare"));
}

#[test]
fn status_record_applies_and_defaults_to_open() {
    let ts = Local.with_ymd_and_hms(2026, 8, 20, 10, 0, 0).unwrap();
    let snapshot = OverrideSnapshot {
        statuses: vec![StatusRecord {
            client_id: "Alice @ Acme".into(),
            status: Status::Won,
            last_contacted: Some(ts),
        }],
        ..Default::default()
    };

    let view = build_view(&people(), &companies(), &snapshot);

    assert_eq!(view[0].status, Status::Won);
    assert_eq!(view[0].last_contacted, Some(ts));

    // No status record → open, not absent
    assert_eq!(view[2].status, Status::Open);
    assert_eq!(view[2].last_contacted, None);
}

#[test]
fn unmatched_industry_gets_no_revenue() {
    // Bob's "healthcare" label has no matching company industry ("health")
    let view = build_view(&people(), &companies(), &OverrideSnapshot::default());

    assert_eq!(view[1].industry_revenue, None);
    // Carol has no industry at all
    assert_eq!(view[2].industry_revenue, None);
}

#[test]
fn empty_companies_is_not_an_error() {
    let view = build_view(&people(), &[], &OverrideSnapshot::default());

    assert_eq!(view.len(), 3);
    assert!(view.iter().all(|r| r.industry_revenue.is_none()));
}

#[test]
fn recent_contact_counts_latest_entry_only() {
    let now = Local::now();
    let entry = |id: &str, days_ago: i64, log_id: i64| CallLogEntry {
        id: log_id,
        client_id: id.into(),
        note: "call".into(),
        timestamp: now - Duration::days(days_ago),
    };

    // A was contacted 2 days ago, B 10 days ago, C never
    let entries = vec![
        entry("A", 30, 1),
        entry("A", 2, 2),
        entry("B", 10, 3),
    ];
    let ids = vec!["A".to_string(), "B".to_string(), "C".to_string()];

    assert_eq!(count_contacted_within(&entries, &ids, 7, now), 1);
    assert_eq!(count_contacted_within(&entries, &ids, 15, now), 2);
    // C has no entries and never counts
    assert_eq!(count_contacted_within(&entries, &ids, 10_000, now), 2);
}

#[test]
fn unique_companies_counts_over_borrowed_names() {
    let view = build_view(&people(), &companies(), &OverrideSnapshot::default());

    // Two Acme rows and one Beta row, no cloning required to count
    assert_eq!(
        unique_companies(view.iter().map(|r| r.company.as_str())),
        2
    );
    assert_eq!(unique_companies(std::iter::empty::<&str>()), 0);
}

#[test]
fn personnel_per_company_is_first_seen_order() {
    let view = build_view(&people(), &companies(), &OverrideSnapshot::default());

    let counts = personnel_per_company(&view);
    assert_eq!(
        counts,
        vec![("Acme".to_string(), 2), ("Beta".to_string(), 1)]
    );
}
