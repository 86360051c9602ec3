use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{TestEnv, ctk};

#[test]
fn test_init_creates_schema() {
    let env = TestEnv::new("init_schema");

    // Re-running migrations must be a no-op
    ctk()
        .args(env.args(&["db", "--migrate"]))
        .assert()
        .success();

    ctk()
        .args(env.args(&["db", "--check"]))
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));
}

#[test]
fn test_list_shows_deduplicated_roster() {
    let env = TestEnv::new("list_dedup");

    // Fixture has 4 rows, one a duplicate of Alice @ Acme → 3 clients
    ctk()
        .args(env.args(&["list"]))
        .assert()
        .success()
        .stdout(contains("Alice @ Acme"))
        .stdout(contains("Bob @ Beta"))
        .stdout(contains("Carol @ Gamma Corp"))
        .stdout(contains("Total clients:    3"));
}

#[test]
fn test_first_occurrence_wins_on_duplicate() {
    let env = TestEnv::new("list_first_wins");

    // The duplicate Alice row carries title "Duplicate Row"; it must lose.
    ctk()
        .args(env.args(&["list"]))
        .assert()
        .success()
        .stdout(contains("Software Engineer"))
        .stdout(contains("Duplicate Row").not());
}

#[test]
fn test_set_status_then_list() {
    let env = TestEnv::new("status_won");

    ctk()
        .args(env.args(&["status", "Alice @ Acme", "won"]))
        .assert()
        .success();

    ctk()
        .args(env.args(&["list", "--status", "won"]))
        .assert()
        .success()
        .stdout(contains("Alice @ Acme"))
        .stdout(contains("Bob @ Beta").not());
}

#[test]
fn test_status_defaults_to_open() {
    let env = TestEnv::new("status_default");

    // Carol has no status record and a blank Status cell in the roster
    ctk()
        .args(env.args(&["list", "--status", "open"]))
        .assert()
        .success()
        .stdout(contains("Carol @ Gamma Corp"));
}

#[test]
fn test_invalid_status_rejected() {
    let env = TestEnv::new("status_invalid");

    ctk()
        .args(env.args(&["status", "Alice @ Acme", "wonnn"]))
        .assert()
        .failure()
        .stderr(contains("Invalid status"));
}

#[test]
fn test_log_call_bumps_last_contacted() {
    let env = TestEnv::new("call_bump");

    ctk()
        .args(env.args(&[
            "call",
            "Bob @ Beta",
            "Discussed pricing",
            "--at",
            "2026-08-20 10:30",
        ]))
        .assert()
        .success();

    ctk()
        .args(env.args(&["calls", "--client", "Bob @ Beta"]))
        .assert()
        .success()
        .stdout(contains("Discussed pricing"))
        .stdout(contains("2026-08-20 10:30"));

    ctk()
        .args(env.args(&["list", "--company", "Beta"]))
        .assert()
        .success()
        .stdout(contains("2026-08-20 10:30"));
}

#[test]
fn test_calls_truncates_long_multibyte_note() {
    let env = TestEnv::new("call_multibyte");

    // 80 chars, 160 bytes: crosses the default 60-char column cap in the
    // middle of multi-byte text.
    let note = "é".repeat(80);
    ctk()
        .args(env.args(&["call", "Bob @ Beta", &note, "--at", "2026-08-20 10:30"]))
        .assert()
        .success();

    ctk()
        .args(env.args(&["calls"]))
        .assert()
        .success()
        .stdout(contains(format!("{}…", "é".repeat(59))))
        .stdout(contains(note).not());
}

#[test]
fn test_empty_note_rejected() {
    let env = TestEnv::new("call_empty");

    ctk()
        .args(env.args(&["call", "Bob @ Beta", "   "]))
        .assert()
        .failure()
        .stderr(contains("Call note is empty"));

    // Nothing must have been written
    ctk()
        .args(env.args(&["calls"]))
        .assert()
        .success()
        .stdout(contains("No call notes logged"));
}

#[test]
fn test_industry_override_wins() {
    let env = TestEnv::new("industry_override");

    // Alice is auto-classified "technology"; the operator knows better.
    ctk()
        .args(env.args(&["industry", "Alice @ Acme", "energy"]))
        .assert()
        .success();

    ctk()
        .args(env.args(&["list", "--industry", "energy"]))
        .assert()
        .success()
        .stdout(contains("Alice @ Acme"));

    ctk()
        .args(env.args(&["list", "--industry", "technology"]))
        .assert()
        .success()
        .stdout(contains("Alice @ Acme").not());
}

#[test]
fn test_empty_industry_override_rejected() {
    let env = TestEnv::new("industry_empty");

    ctk()
        .args(env.args(&["industry", "Alice @ Acme", "  "]))
        .assert()
        .failure()
        .stderr(contains("Invalid input"));
}

#[test]
fn test_industry_revenue_rollup_in_view() {
    let env = TestEnv::new("revenue_rollup");

    // technology = Acme 10 + Initech 5 = 15.00, healthcare = Beta 3.00
    ctk()
        .args(env.args(&["list", "--company", "Acme"]))
        .assert()
        .success()
        .stdout(contains("15.00"));

    ctk()
        .args(env.args(&["list", "--company", "Beta"]))
        .assert()
        .success()
        .stdout(contains("3.00"));
}

#[test]
fn test_metrics_counts() {
    let env = TestEnv::new("metrics_counts");

    ctk()
        .args(env.args(&["metrics", "--days", "7"]))
        .assert()
        .success()
        .stdout(contains("Total clients: 3"))
        .stdout(contains("Unique companies: 3"))
        .stdout(contains("Contacted in last 7 days: 0"));
}

#[test]
fn test_db_migrations_leave_config_file_untouched() {
    let env = TestEnv::new("config_untouched");

    // Point HOME at a scratch dir holding a minimal config file.
    let home = std::env::temp_dir().join("config_untouched_home");
    std::fs::remove_dir_all(&home).ok();
    let conf_dir = home.join(".clienttrack");
    std::fs::create_dir_all(&conf_dir).unwrap();
    let conf = conf_dir.join("clienttrack.conf");
    let original = "database: /tmp/ct.sqlite\n\
                    people_file: /tmp/people.csv\n\
                    companies_file: /tmp/companies.csv\n";
    std::fs::write(&conf, original).unwrap();

    // DB migrations must never rewrite the config file.
    ctk()
        .env("HOME", &home)
        .args(env.args(&["db", "--migrate"]))
        .assert()
        .success();
    assert_eq!(std::fs::read_to_string(&conf).unwrap(), original);

    // Only the explicit config migration fills in missing keys.
    ctk()
        .env("HOME", &home)
        .args(env.args(&["config", "--migrate"]))
        .assert()
        .success();
    let migrated = std::fs::read_to_string(&conf).unwrap();
    assert!(migrated.contains("recent_contact_days"));
    assert!(migrated.contains("updated_people_file"));
}

#[test]
fn test_missing_roster_files() {
    let env = TestEnv::new("missing_roster");
    std::fs::remove_file(&env.people).ok();

    ctk()
        .args(env.args(&["list"]))
        .assert()
        .failure()
        .stderr(contains("Roster data unavailable"));
}

#[test]
fn test_missing_required_column() {
    let env = TestEnv::new("schema_error");
    // Rewrite the people file without the Title column
    std::fs::write(&env.people, "Name,Company,Status\nAlice,Acme,open\n").unwrap();

    ctk()
        .args(env.args(&["list"]))
        .assert()
        .failure()
        .stderr(contains("missing column 'Title'"));
}

#[test]
fn test_save_then_load_round_trip() {
    let env = TestEnv::new("save_round_trip");

    ctk()
        .args(env.args(&["status", "Alice @ Acme", "engaged"]))
        .assert()
        .success();

    ctk().args(env.args(&["save"])).assert().success();

    // The updated artifact now takes precedence; the client id set and the
    // persisted status must survive the round trip.
    ctk()
        .args(env.args(&["list"]))
        .assert()
        .success()
        .stdout(contains("Alice @ Acme"))
        .stdout(contains("Bob @ Beta"))
        .stdout(contains("Carol @ Gamma Corp"))
        .stdout(contains("engaged"))
        .stdout(contains("Total clients:    3"));
}

#[test]
fn test_ingest_classifies_missing_industries() {
    let env = TestEnv::new("ingest_classify");
    // A person with no industry and no title → unclassified;
    // one with a classifiable title → technology.
    std::fs::write(
        &env.people,
        "Name,Company,Title\nDave,Delta,Software Developer\nEve,Epsilon,\n",
    )
    .unwrap();

    ctk()
        .args(env.args(&["ingest", "--save"]))
        .assert()
        .success();

    ctk()
        .args(env.args(&["list", "--industry", "technology"]))
        .assert()
        .success()
        .stdout(contains("Dave @ Delta"));

    ctk()
        .args(env.args(&["list", "--industry", "unclassified"]))
        .assert()
        .success()
        .stdout(contains("Eve @ Epsilon"));
}
