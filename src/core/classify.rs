use crate::errors::AppResult;
use crate::models::client::ClientBase;
use crate::ui::messages::warning;

/// Label used when no title is available or the classifier cannot decide.
pub const UNCLASSIFIED: &str = "unclassified";

/// The fixed label set the external collaborator is asked to pick from.
pub const INDUSTRY_LABELS: [&str; 10] = [
    "technology",
    "healthcare",
    "education",
    "transportation",
    "finance",
    "construction",
    "retail",
    "hospitality",
    "energy",
    "manufacturing",
];

/// Narrow seam around the external text-classification collaborator:
/// given a free-text job title, return one industry label. Injected into
/// the ingestion pipeline so tests can swap in a stub.
pub trait IndustryClassifier {
    fn classify(&self, title: &str) -> AppResult<String>;
}

/// Built-in offline classifier: maps title keywords onto the fixed label
/// set, `unclassified` when nothing matches.
pub struct KeywordClassifier;

const KEYWORDS: &[(&str, &str)] = &[
    ("software", "technology"),
    ("developer", "technology"),
    ("engineer", "technology"),
    ("data", "technology"),
    ("it ", "technology"),
    ("nurse", "healthcare"),
    ("doctor", "healthcare"),
    ("physician", "healthcare"),
    ("medical", "healthcare"),
    ("teacher", "education"),
    ("professor", "education"),
    ("tutor", "education"),
    ("driver", "transportation"),
    ("pilot", "transportation"),
    ("logistics", "transportation"),
    ("accountant", "finance"),
    ("banker", "finance"),
    ("financial", "finance"),
    ("analyst", "finance"),
    ("architect", "construction"),
    ("builder", "construction"),
    ("contractor", "construction"),
    ("sales", "retail"),
    ("cashier", "retail"),
    ("merchandis", "retail"),
    ("chef", "hospitality"),
    ("hotel", "hospitality"),
    ("waiter", "hospitality"),
    ("energy", "energy"),
    ("utilities", "energy"),
    ("petroleum", "energy"),
    ("manufactur", "manufacturing"),
    ("assembler", "manufacturing"),
    ("machinist", "manufacturing"),
];

impl IndustryClassifier for KeywordClassifier {
    fn classify(&self, title: &str) -> AppResult<String> {
        let t = title.to_lowercase();

        for (kw, label) in KEYWORDS {
            if t.contains(kw) {
                return Ok((*label).to_string());
            }
        }

        Ok(UNCLASSIFIED.to_string())
    }
}

/// Fill the industry label for every roster row that is still missing one.
///
/// A row without a title gets `unclassified`. A classifier failure marks
/// the row `unclassified` and the batch keeps going; it never aborts the
/// ingestion. Returns (classified, failed) counts.
pub fn classify_people(
    rows: &mut [ClientBase],
    classifier: &dyn IndustryClassifier,
) -> (usize, usize) {
    let mut classified = 0;
    let mut failed = 0;

    for row in rows.iter_mut() {
        if row.industry.is_some() {
            continue;
        }

        let label = match &row.title {
            None => UNCLASSIFIED.to_string(),
            Some(title) => match classifier.classify(title) {
                Ok(label) => label,
                Err(e) => {
                    warning(format!(
                        "Classification failed for '{}': {} — marked {}",
                        row.client_id(),
                        e,
                        UNCLASSIFIED
                    ));
                    failed += 1;
                    UNCLASSIFIED.to_string()
                }
            },
        };

        row.industry = Some(label);
        classified += 1;
    }

    (classified, failed)
}
