use crate::model::{Category, Report, TestResult};
use crate::view::{classify, Severity};

/// Build the plain-text report summary used for copy/paste sharing.
///
/// `generated` is printed verbatim on the last line when given; the core never
/// reads the clock.
pub fn summarize(report: &Report, generated: Option<&str>) -> String {
    let mut out = String::new();

    out.push_str(&format!("{} SUMMARY\n", report.title.to_uppercase()));
    out.push_str(&format!("{} - Test Results\n", report.subject));

    for category in Category::ALL {
        let results: Vec<&TestResult> = report
            .results
            .iter()
            .filter(|r| r.category == category)
            .collect();
        if results.is_empty() {
            continue;
        }

        out.push_str(&format!("\n{}:\n", category.heading().to_uppercase()));
        for r in results {
            out.push_str(&format!("{}\n", summary_line(r)));
        }
    }

    if !report.key_findings.is_empty() {
        out.push_str("\nKEY FINDINGS:\n");
        for finding in &report.key_findings {
            out.push_str(&format!("• {finding}\n"));
        }
    }

    if !report.priority_actions.is_empty() {
        out.push_str("\nPRIORITY ACTIONS:\n");
        for action in &report.priority_actions {
            out.push_str(&format!("{} {}\n", action.kind.marker(), action.text));
        }
    }

    if let Some(date) = generated {
        out.push_str(&format!("\nGenerated: {date}\n"));
    }

    out.trim_end().to_string()
}

/// One line per result: marker, label, value, status and interpretation.
pub fn summary_line(result: &TestResult) -> String {
    let severity = classify(&result.status);
    let status = match severity {
        Severity::Error => result.status.to_uppercase(),
        _ => result.status.clone(),
    };
    format!(
        "{} {}: {} ({} - {})",
        severity.marker(),
        result.display_name(),
        result.value,
        status,
        result.interpretation
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin::builtin_catalog;
    use crate::model::{ActionKind, PriorityAction};

    #[test]
    fn test_builtin_summary_sections() {
        let text = summarize(builtin_catalog().report(), Some("2026-10-19"));
        assert!(text.starts_with("PERSONAL HEALTH REPORT SUMMARY\n28-Year-Old Female - Test Results"));
        let hormones = text.find("HORMONE PROFILE:").unwrap();
        let nutrients = text.find("NUTRITIONAL STATUS:").unwrap();
        assert!(hormones < nutrients);
        assert!(text.contains("✓ FSH: 6.6 IU/L (Normal - Good ovarian reserve and function)"));
        assert!(text.contains(
            "⚠️ Ferritin: 7 μg/L (CRITICAL - Severe iron deficiency requiring immediate treatment)"
        ));
        assert!(text.contains("⚠️ Vitamin B12: 118 ng/L (Borderline - "));
        assert!(text.contains("🚨 Start prescribed iron supplements"));
        assert!(text.ends_with("Generated: 2026-10-19"));
    }

    #[test]
    fn test_every_result_listed_once() {
        let report = builtin_catalog().report();
        let text = summarize(report, None);
        for r in &report.results {
            let line = summary_line(r);
            assert_eq!(text.matches(&line).count(), 1, "{line}");
        }
    }

    #[test]
    fn test_results_follow_catalog_order() {
        let report = builtin_catalog().report();
        let text = summarize(report, None);
        let positions: Vec<usize> = report
            .results
            .iter()
            .map(|r| text.find(&summary_line(r)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(text.find("Prolactin:").unwrap() < text.find("TSH:").unwrap());
    }

    #[test]
    fn test_empty_sections_omitted() {
        let mut report = builtin_catalog().report().clone();
        report.results.retain(|r| r.category == Category::Hormone);
        report.key_findings.clear();
        report.priority_actions = vec![PriorityAction {
            kind: ActionKind::Monitor,
            text: "Recheck yearly".into(),
        }];
        let text = summarize(&report, None);
        assert!(!text.contains("NUTRITIONAL STATUS"));
        assert!(!text.contains("KEY FINDINGS"));
        assert!(!text.contains("Generated:"));
        assert!(text.ends_with("📊 Recheck yearly"));
    }

    #[test]
    fn test_unknown_status_uses_info_marker() {
        let mut r = builtin_catalog().lookup("lh").unwrap().clone();
        r.status = "Pending".into();
        assert!(summary_line(&r).starts_with("• LH: 5.8 IU/L (Pending - "));
    }
}
