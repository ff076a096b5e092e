use labcard_core::error::LabcardError;
use labcard_core::model::Category;
use labcard_core::view::classify;
use std::path::Path;

use super::resolve_catalog;

pub fn list(catalog_path: Option<&Path>) -> Result<(), LabcardError> {
    let catalog = resolve_catalog(catalog_path)?;
    let report = catalog.report();

    println!("{} ({})\n", report.title, report.subject);

    // Find max id length for alignment
    let max_id_len = catalog.ids().map(str::len).max().unwrap_or(10);

    for category in Category::ALL {
        let results: Vec<_> = catalog.by_category(category).collect();
        if results.is_empty() {
            continue;
        }

        println!("{}:", category.heading());
        for r in results {
            let severity = classify(&r.status);
            println!(
                "  {} {:<width$}  {:<36} {:<16} {}",
                severity.marker(),
                r.id,
                r.name,
                r.value,
                r.status,
                width = max_id_len
            );
        }
        println!();
    }

    Ok(())
}

pub fn validate(file: &Path) -> Result<(), LabcardError> {
    let catalog = labcard_core::catalog::load_catalog(file)?;
    let report = catalog.report();

    println!("Report '{}' is valid.", report.title);
    for category in Category::ALL {
        println!(
            "  {}: {} results",
            category.heading(),
            catalog.by_category(category).count()
        );
    }

    // Potential issues (warnings, not errors)
    let mut warnings = Vec::new();
    for r in catalog.results() {
        if r.key_facts.is_empty() {
            warnings.push(format!("result '{}' has no key facts", r.id));
        }
        if classify(&r.status) == labcard_core::view::Severity::Info {
            warnings.push(format!(
                "result '{}' has unrecognized status '{}' (shown as info)",
                r.id, r.status
            ));
        }
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}
