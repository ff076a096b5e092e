use super::severity::Severity;
use crate::model::Category;
use serde::{Deserialize, Serialize};

/// "What is X?" block shown at the top of a detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionBlock {
    pub heading: String,
    pub body: String,
}

/// One row of the value / reference range / status table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactRow {
    pub label: String,
    pub value: String,
    /// Style class for the value, set on the status row.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    /// Emphasize the value (critical results).
    #[serde(default)]
    pub highlight: bool,
}

/// A section of the detail view below the fact table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    UrgentAction { text: String },
    PatientSummary { text: String },
    RangeExplanation { text: String },
    KeyFacts { items: Vec<String> },
    Symptoms { items: Vec<String> },
    Monitoring { text: String },
}

impl Block {
    pub fn heading(&self) -> &'static str {
        match self {
            Block::UrgentAction { .. } => "Urgent Action Needed",
            Block::PatientSummary { .. } => "What This Means for You",
            Block::RangeExplanation { .. } => "Understanding the Range",
            Block::KeyFacts { .. } => "Key Functions",
            Block::Symptoms { .. } => "Possible Symptoms",
            Block::Monitoring { .. } => "Monitoring Recommendation",
        }
    }

    /// Icon shown before the heading of alert-style blocks.
    pub fn icon(&self) -> Option<&'static str> {
        match self {
            Block::UrgentAction { .. } => Some("⚠️"),
            Block::Monitoring { .. } => Some("📊"),
            _ => None,
        }
    }

    /// Alert blocks are styled with a severity accent.
    pub fn accent(&self) -> Option<Severity> {
        match self {
            Block::UrgentAction { .. } => Some(Severity::Error),
            Block::Monitoring { .. } => Some(Severity::Warning),
            _ => None,
        }
    }

    /// Stable kind name, matching the serialized tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Block::UrgentAction { .. } => "urgent_action",
            Block::PatientSummary { .. } => "patient_summary",
            Block::RangeExplanation { .. } => "range_explanation",
            Block::KeyFacts { .. } => "key_facts",
            Block::Symptoms { .. } => "symptoms",
            Block::Monitoring { .. } => "monitoring",
        }
    }
}

/// Display-ready projection of one test result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderModel {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub severity: Severity,
    pub definition: DefinitionBlock,
    /// Your Result, Reference Range, Status, in that order.
    pub facts: [FactRow; 3],
    pub blocks: Vec<Block>,
}

impl RenderModel {
    pub fn status_row(&self) -> &FactRow {
        &self.facts[2]
    }

    pub fn urgent_action(&self) -> Option<&str> {
        self.blocks.iter().find_map(|b| match b {
            Block::UrgentAction { text } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn monitoring(&self) -> Option<&str> {
        self.blocks.iter().find_map(|b| match b {
            Block::Monitoring { text } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn symptoms(&self) -> Option<&[String]> {
        self.blocks.iter().find_map(|b| match b {
            Block::Symptoms { items } => Some(items.as_slice()),
            _ => None,
        })
    }

    pub fn key_facts(&self) -> Option<&[String]> {
        self.blocks.iter().find_map(|b| match b {
            Block::KeyFacts { items } => Some(items.as_slice()),
            _ => None,
        })
    }

    pub fn block_kinds(&self) -> Vec<&'static str> {
        self.blocks.iter().map(Block::kind).collect()
    }
}
