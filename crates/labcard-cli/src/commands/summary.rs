use labcard_core::error::LabcardError;
use std::path::Path;

use super::resolve_catalog;

pub fn run(catalog_path: Option<&Path>, date: Option<&str>) -> Result<(), LabcardError> {
    let catalog = resolve_catalog(catalog_path)?;
    let generated = generated_date(date);
    println!(
        "{}",
        labcard_core::summary::summarize(catalog.report(), Some(&generated))
    );
    Ok(())
}

/// The `Generated:` date: the `--date` value, or today in local time.
fn generated_date(date: Option<&str>) -> String {
    match date {
        Some(d) => d.to_string(),
        None => chrono::Local::now().format("%Y-%m-%d").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_date_kept() {
        assert_eq!(generated_date(Some("19/10/2026")), "19/10/2026");
    }

    #[test]
    fn test_defaults_to_today() {
        let date = generated_date(None);
        assert_eq!(date.len(), 10);
        assert!(chrono::NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_ok());

        let text = labcard_core::summary::summarize(
            labcard_core::builtin_catalog().report(),
            Some(&date),
        );
        assert!(text.ends_with(&format!("Generated: {date}")));
    }
}
