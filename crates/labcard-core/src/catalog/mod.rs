pub mod builtin;

use crate::error::LabcardError;
use crate::model::{Category, Report, TestResult};
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Read-only set of test results keyed by id.
///
/// Built once from a validated [`Report`]; lookups never mutate it.
#[derive(Debug, Clone)]
pub struct Catalog {
    report: Report,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Validate a report and index its results by id.
    pub fn new(report: Report) -> Result<Self, LabcardError> {
        validate_report(&report)?;
        let index = report
            .results
            .iter()
            .enumerate()
            .map(|(i, r)| (r.id.clone(), i))
            .collect();
        Ok(Self { report, index })
    }

    /// Find the result for `id`. Exact, case-sensitive match.
    pub fn lookup(&self, id: &str) -> Result<&TestResult, LabcardError> {
        match self.index.get(id) {
            Some(&i) => Ok(&self.report.results[i]),
            None => {
                log::debug!("lookup miss for id '{id}'");
                Err(LabcardError::NotFound { id: id.to_string() })
            }
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All results in display order.
    pub fn results(&self) -> &[TestResult] {
        &self.report.results
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &TestResult> {
        self.report
            .results
            .iter()
            .filter(move |r| r.category == category)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.report.results.iter().map(|r| r.id.as_str())
    }

    pub fn report(&self) -> &Report {
        &self.report
    }

    pub fn len(&self) -> usize {
        self.report.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.report.results.is_empty()
    }
}

/// Load a catalog from a report JSON file.
pub fn load_catalog(path: &Path) -> Result<Catalog, LabcardError> {
    log::info!("loading catalog from {}", path.display());
    let content = std::fs::read_to_string(path).map_err(|e| LabcardError::CatalogLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_catalog(&content, path)
}

/// Parse a catalog from a JSON string, reporting errors against `source`.
pub fn parse_catalog(json: &str, source: &Path) -> Result<Catalog, LabcardError> {
    let report: Report = serde_json::from_str(json).map_err(|e| LabcardError::CatalogLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    Catalog::new(report)
}

/// Parse a catalog from a JSON string (no file path context).
pub fn parse_catalog_str(json: &str) -> Result<Catalog, LabcardError> {
    let report: Report = serde_json::from_str(json).map_err(LabcardError::Json)?;
    Catalog::new(report)
}

/// Check the authoring invariants of a report.
///
/// Optional fields must be absent or non-empty. `key_facts` may be empty.
pub fn validate_report(report: &Report) -> Result<(), LabcardError> {
    if report.results.is_empty() {
        return Err(LabcardError::CatalogInvalid(
            "results must not be empty".into(),
        ));
    }

    let mut seen = HashSet::new();
    for result in &report.results {
        if result.id.trim().is_empty() {
            return Err(LabcardError::CatalogInvalid(
                "result id must not be empty".into(),
            ));
        }

        if !seen.insert(result.id.as_str()) {
            return Err(LabcardError::CatalogInvalid(format!(
                "duplicate result id '{}'",
                result.id
            )));
        }

        for (field, text) in [
            ("name", &result.name),
            ("value", &result.value),
            ("status", &result.status),
        ] {
            if text.trim().is_empty() {
                return Err(LabcardError::CatalogInvalid(format!(
                    "result '{}' has an empty {}",
                    result.id, field
                )));
            }
        }

        if let Some(ref symptoms) = result.symptoms {
            if symptoms.is_empty() {
                return Err(LabcardError::CatalogInvalid(format!(
                    "result '{}' has an empty symptoms list (omit the field instead)",
                    result.id
                )));
            }
            if symptoms.iter().any(|s| s.trim().is_empty()) {
                return Err(LabcardError::CatalogInvalid(format!(
                    "result '{}' has a blank symptom entry",
                    result.id
                )));
            }
        }

        for (field, text) in [
            ("urgent_action", &result.urgent_action),
            ("monitoring", &result.monitoring),
        ] {
            if text.as_deref().is_some_and(|t| t.trim().is_empty()) {
                return Err(LabcardError::CatalogInvalid(format!(
                    "result '{}' has an empty {} (omit the field instead)",
                    result.id, field
                )));
            }
        }
    }

    Ok(())
}
