use labcard_core::view::{Block, RenderModel};

/// Format a detail view for the terminal.
pub fn format_detail(model: &RenderModel) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", model.title));
    out.push_str(&format!("{}\n\n", "=".repeat(model.title.chars().count())));

    out.push_str(&format!("{}\n", model.definition.heading));
    out.push_str(&format!("  {}\n\n", model.definition.body));

    let max_label = model
        .facts
        .iter()
        .map(|f| f.label.len() + 1)
        .max()
        .unwrap_or(16);
    for fact in &model.facts {
        let label = format!("{}:", fact.label);
        let mut value = fact.value.clone();
        if let Some(severity) = fact.severity {
            value.push_str(&format!(" [{severity}]"));
        }
        if fact.highlight {
            value.push_str(" (!)");
        }
        out.push_str(&format!("  {:<width$}  {}\n", label, value, width = max_label));
    }

    for block in &model.blocks {
        out.push('\n');
        match block.icon() {
            Some(icon) => {
                out.push_str(&format!("{} {}:\n", icon, block.heading()));
            }
            None => {
                out.push_str(&format!("{}:\n", block.heading()));
            }
        }
        match block {
            Block::KeyFacts { items } | Block::Symptoms { items } => {
                for item in items {
                    out.push_str(&format!("  - {item}\n"));
                }
            }
            Block::UrgentAction { text }
            | Block::PatientSummary { text }
            | Block::RangeExplanation { text }
            | Block::Monitoring { text } => {
                out.push_str(&format!("  {text}\n"));
            }
        }
    }

    out
}
