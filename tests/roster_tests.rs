use clienttrack::core::classify::{
    INDUSTRY_LABELS, IndustryClassifier, KeywordClassifier, UNCLASSIFIED, classify_people,
};
use clienttrack::errors::{AppError, AppResult};
use clienttrack::models::client::ClientBase;
use clienttrack::models::status::Status;
use clienttrack::roster::load::{read_companies, read_people};
use clienttrack::roster::save::save_people_base;
use std::env;
use std::fs;
use std::path::PathBuf;

fn fixture(name: &str, content: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("{}_clienttrack_fixture.csv", name));
    fs::write(&path, content).expect("write fixture");
    path
}

#[test]
fn read_people_dedups_first_wins() {
    let path = fixture(
        "dedup",
        "Name,Company,Title,Status\n\
         Alice , Acme ,Engineer,\n\
         Alice,Acme,Other Title,won\n\
         Bob,Beta,Nurse,contacted\n",
    );

    let people = read_people(&path).unwrap();

    assert_eq!(people.len(), 2);
    assert_eq!(people[0].client_id(), "Alice @ Acme");
    assert_eq!(people[0].title.as_deref(), Some("Engineer"));
    // Blank status defaults to open; the duplicate's "won" never applies
    assert_eq!(people[0].status, Status::Open);
    assert_eq!(people[1].status, Status::Contacted);
}

#[test]
fn read_people_requires_core_columns() {
    let path = fixture("nocol", "Name,Title\nAlice,Engineer\n");

    let err = read_people(&path).unwrap_err();
    match err {
        AppError::SchemaError(col) => assert_eq!(col, "Company"),
        other => panic!("expected SchemaError, got {other}"),
    }
}

#[test]
fn read_people_accepts_llm_industry_header() {
    let path = fixture(
        "llmcol",
        "Name,Company,Title,LLM_Industry\nAlice,Acme,Engineer,technology\n",
    );

    let people = read_people(&path).unwrap();
    assert_eq!(people[0].industry.as_deref(), Some("technology"));
}

#[test]
fn read_companies_normalizes_revenue_header() {
    let path = fixture(
        "revcol",
        "Company Name,Industry,Revenue (in Millions),Address,Latitude,Longitude\n\
         Acme,technology,\"1,250.5\",1 Acme Way,45.07,7.69\n",
    );

    let companies = read_companies(&path).unwrap();

    assert_eq!(companies.len(), 1);
    assert_eq!(companies[0].name, "Acme");
    assert_eq!(companies[0].revenue, 1250.5);
    assert_eq!(companies[0].latitude, Some(45.07));
    assert_eq!(companies[0].longitude, Some(7.69));
}

#[test]
fn save_then_read_reproduces_client_id_set() {
    let rows = vec![
        ClientBase::new("Alice", "Acme", Some("Engineer".into()), Some("technology".into())),
        ClientBase::new("Bob", "Beta", None, None),
    ];

    let mut path = env::temp_dir();
    path.push("round_trip_clienttrack_people.csv");
    save_people_base(&path, &rows).unwrap();

    let loaded = read_people(&path).unwrap();

    let saved_ids: Vec<String> = rows.iter().map(|r| r.client_id()).collect();
    let loaded_ids: Vec<String> = loaded.iter().map(|r| r.client_id()).collect();
    assert_eq!(saved_ids, loaded_ids);
}

#[test]
fn keyword_classifier_uses_fixed_label_set() {
    let c = KeywordClassifier;

    assert_eq!(c.classify("Senior Software Engineer").unwrap(), "technology");
    assert_eq!(c.classify("Registered Nurse").unwrap(), "healthcare");
    assert_eq!(c.classify("Chief Vibes Officer").unwrap(), UNCLASSIFIED);

    for title in ["Bank Analyst", "Truck Driver", "Hotel Manager"] {
        let label = c.classify(title).unwrap();
        assert!(INDUSTRY_LABELS.contains(&label.as_str()), "{label}");
    }
}

#[test]
fn classify_people_fills_only_missing_labels() {
    let mut rows = vec![
        ClientBase::new("Alice", "Acme", Some("Engineer".into()), Some("finance".into())),
        ClientBase::new("Bob", "Beta", Some("Nurse".into()), None),
        ClientBase::new("Carol", "Gamma", None, None),
    ];

    let (classified, failed) = classify_people(&mut rows, &KeywordClassifier);

    assert_eq!(classified, 2);
    assert_eq!(failed, 0);
    // Pre-existing labels are untouched
    assert_eq!(rows[0].industry.as_deref(), Some("finance"));
    assert_eq!(rows[1].industry.as_deref(), Some("healthcare"));
    // No title → unclassified
    assert_eq!(rows[2].industry.as_deref(), Some(UNCLASSIFIED));
}

struct FailingClassifier;

impl IndustryClassifier for FailingClassifier {
    fn classify(&self, _title: &str) -> AppResult<String> {
        Err(AppError::ClassificationUnavailable("service down".into()))
    }
}

#[test]
fn classifier_failure_marks_unclassified_and_continues() {
    let mut rows = vec![
        ClientBase::new("Alice", "Acme", Some("Engineer".into()), None),
        ClientBase::new("Bob", "Beta", Some("Nurse".into()), None),
    ];

    let (classified, failed) = classify_people(&mut rows, &FailingClassifier);

    assert_eq!(classified, 2);
    assert_eq!(failed, 2);
    assert!(rows.iter().all(|r| r.industry.as_deref() == Some(UNCLASSIFIED)));
}
