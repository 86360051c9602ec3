#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ctk() -> Command {
    cargo_bin_cmd!("clienttrack")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_clienttrack.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write the standard people fixture (contains one duplicate row for
/// Alice @ Acme that must collapse on load) and return its path.
pub fn write_people_csv(name: &str) -> String {
    let p = temp_out(&format!("{}_people", name), "csv");
    fs::write(
        &p,
        "Name,Company,Title,LLM Industry,Status\n\
         Alice,Acme,Software Engineer,technology,\n\
         Bob,Beta,Nurse,healthcare,contacted\n\
         Alice,Acme,Duplicate Row,retail,won\n\
         Carol,Gamma Corp,Accountant,finance,\n",
    )
    .expect("write people fixture");
    p
}

/// Write the standard companies fixture (legacy revenue header on purpose).
pub fn write_companies_csv(name: &str) -> String {
    let p = temp_out(&format!("{}_companies", name), "csv");
    fs::write(
        &p,
        "Company Name,Industry,Revenue (in Millions),Address\n\
         Acme,technology,10,1 Acme Way\n\
         Initech,technology,5,2 Tech Blvd\n\
         Beta,healthcare,3,3 Care St\n",
    )
    .expect("write companies fixture");
    p
}

/// Path for the updated-roster artifact; removed so tests start from the
/// original ingestion file.
pub fn updated_path(name: &str) -> String {
    let p = temp_out(&format!("{}_updated", name), "csv");
    fs::remove_file(&p).ok();
    p
}

/// Base args shared by every invocation: test mode plus all path overrides.
pub fn base_args(db: &str, people: &str, companies: &str, updated: &str) -> Vec<String> {
    vec![
        "--test".to_string(),
        "--db".to_string(),
        db.to_string(),
        "--people-file".to_string(),
        people.to_string(),
        "--companies-file".to_string(),
        companies.to_string(),
        "--updated-file".to_string(),
        updated.to_string(),
    ]
}

/// Full environment for one test: init'ed DB plus roster fixtures.
pub struct TestEnv {
    pub db: String,
    pub people: String,
    pub companies: String,
    pub updated: String,
}

impl TestEnv {
    pub fn new(name: &str) -> Self {
        let env = Self {
            db: setup_test_db(name),
            people: write_people_csv(name),
            companies: write_companies_csv(name),
            updated: updated_path(name),
        };

        ctk()
            .args(env.args(&["init"]))
            .assert()
            .success();

        env
    }

    /// Build a full arg list: base overrides + the command itself.
    pub fn args(&self, cmd: &[&str]) -> Vec<String> {
        let mut out = base_args(&self.db, &self.people, &self.companies, &self.updated);
        out.extend(cmd.iter().map(|s| s.to_string()));
        out
    }
}
