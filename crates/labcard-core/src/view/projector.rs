use super::render_model::{Block, DefinitionBlock, FactRow, RenderModel};
use super::severity::{classify, Severity};
use crate::model::TestResult;

/// Project a test result into its detail view.
///
/// Block order is fixed: urgent action, patient summary, range explanation,
/// key facts, symptoms, monitoring. Optional blocks are included only when
/// the source field is present and non-empty. Text is copied unmodified.
pub fn project(result: &TestResult) -> RenderModel {
    let severity = classify(&result.status);

    let facts = [
        FactRow {
            label: "Your Result".into(),
            value: result.value.clone(),
            severity: None,
            highlight: severity == Severity::Error,
        },
        FactRow {
            label: "Reference Range".into(),
            value: result.reference_range.clone(),
            severity: None,
            highlight: false,
        },
        FactRow {
            label: "Status".into(),
            value: result.status.clone(),
            severity: Some(severity),
            highlight: false,
        },
    ];

    let mut blocks = Vec::with_capacity(6);

    if let Some(text) = non_empty_text(&result.urgent_action) {
        blocks.push(Block::UrgentAction { text });
    }
    blocks.push(Block::PatientSummary {
        text: result.patient_summary.clone(),
    });
    blocks.push(Block::RangeExplanation {
        text: result.range_explanation.clone(),
    });
    blocks.push(Block::KeyFacts {
        items: result.key_facts.clone(),
    });
    if let Some(items) = result.symptoms.as_ref().filter(|s| !s.is_empty()) {
        blocks.push(Block::Symptoms {
            items: items.clone(),
        });
    }
    if let Some(text) = non_empty_text(&result.monitoring) {
        blocks.push(Block::Monitoring { text });
    }

    RenderModel {
        id: result.id.clone(),
        title: result.name.clone(),
        category: result.category,
        severity,
        definition: DefinitionBlock {
            heading: format!("What is {}?", result.name),
            body: result.definition.clone(),
        },
        facts,
        blocks,
    }
}

fn non_empty_text(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    fn sample() -> TestResult {
        TestResult {
            id: "vitd".into(),
            name: "Vitamin D".into(),
            short_name: None,
            category: Category::Nutrient,
            value: "40 nmol/L".into(),
            reference_range: "50-125 nmol/L".into(),
            status: "Borderline".into(),
            interpretation: "Slightly low".into(),
            definition: "Vitamin D supports bone health.".into(),
            key_facts: vec!["Made in skin".into(), "Stored in fat".into()],
            patient_summary: "A little low.".into(),
            range_explanation: "Below 50 is insufficient.".into(),
            symptoms: None,
            urgent_action: None,
            monitoring: None,
        }
    }

    #[test]
    fn test_required_blocks_only() {
        let model = project(&sample());
        assert_eq!(
            model.block_kinds(),
            vec!["patient_summary", "range_explanation", "key_facts"]
        );
        assert_eq!(model.title, "Vitamin D");
        assert_eq!(model.definition.heading, "What is Vitamin D?");
    }

    #[test]
    fn test_fact_table_rows() {
        let model = project(&sample());
        let labels: Vec<&str> = model.facts.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, vec!["Your Result", "Reference Range", "Status"]);
        assert_eq!(model.facts[0].value, "40 nmol/L");
        assert_eq!(model.facts[1].value, "50-125 nmol/L");
        assert_eq!(model.status_row().value, "Borderline");
        assert_eq!(model.status_row().severity, Some(Severity::Warning));
        assert!(!model.facts[0].highlight);
    }

    #[test]
    fn test_all_optional_blocks_in_fixed_order() {
        let mut r = sample();
        r.monitoring = Some("Recheck in 3 months.".into());
        r.symptoms = Some(vec!["Bone pain".into()]);
        r.urgent_action = Some("See a doctor.".into());
        let model = project(&r);
        assert_eq!(
            model.block_kinds(),
            vec![
                "urgent_action",
                "patient_summary",
                "range_explanation",
                "key_facts",
                "symptoms",
                "monitoring"
            ]
        );
    }

    #[test]
    fn test_optional_text_copied_unmodified() {
        let mut r = sample();
        r.urgent_action = Some("  Call <today> & rest.  ".into());
        let model = project(&r);
        assert_eq!(model.urgent_action(), Some("  Call <today> & rest.  "));
        assert_eq!(
            model
                .blocks
                .iter()
                .filter(|b| matches!(b, Block::UrgentAction { .. }))
                .count(),
            1
        );
    }

    #[test]
    fn test_present_but_empty_optional_fields_skipped() {
        let mut r = sample();
        r.symptoms = Some(vec![]);
        r.monitoring = Some(String::new());
        r.urgent_action = Some("   ".into());
        let model = project(&r);
        assert!(model.symptoms().is_none());
        assert!(model.monitoring().is_none());
        assert!(model.urgent_action().is_none());
    }

    #[test]
    fn test_empty_key_facts_render_empty_list() {
        let mut r = sample();
        r.key_facts.clear();
        let model = project(&r);
        assert_eq!(model.key_facts(), Some(&[][..]));
    }

    #[test]
    fn test_critical_value_highlighted() {
        let mut r = sample();
        r.status = "CRITICAL".into();
        let model = project(&r);
        assert_eq!(model.severity, Severity::Error);
        assert!(model.facts[0].highlight);
    }

    #[test]
    fn test_classification_ignores_category() {
        let mut hormone = sample();
        hormone.category = Category::Hormone;
        let nutrient = sample();
        assert_eq!(project(&hormone).severity, project(&nutrient).severity);
    }

    #[test]
    fn test_deterministic() {
        let r = sample();
        assert_eq!(project(&r), project(&r.clone()));
    }
}
