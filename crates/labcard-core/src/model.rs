use serde::{Deserialize, Serialize};
use std::fmt;

/// Report section a result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Hormone,
    Nutrient,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Hormone, Category::Nutrient];

    /// Section heading used in summaries and pages.
    pub fn heading(&self) -> &'static str {
        match self {
            Category::Hormone => "Hormone Profile",
            Category::Nutrient => "Nutritional Status",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Hormone => write!(f, "hormone"),
            Category::Nutrient => write!(f, "nutrient"),
        }
    }
}

/// A single lab result with its explanatory text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    pub id: String,
    pub name: String,
    /// Compact label for one-line summaries (e.g. "FSH").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    pub category: Category,
    /// Measured value as printed on the report, unit included ("<1.39 nmol/L").
    pub value: String,
    pub reference_range: String,
    pub status: String,
    pub interpretation: String,
    pub definition: String,
    #[serde(default)]
    pub key_facts: Vec<String>,
    pub patient_summary: String,
    pub range_explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symptoms: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgent_action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitoring: Option<String>,
}

impl TestResult {
    pub fn display_name(&self) -> &str {
        self.short_name.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Urgent,
    Ongoing,
    Monitor,
}

impl ActionKind {
    pub fn marker(&self) -> &'static str {
        match self {
            ActionKind::Urgent => "🚨",
            ActionKind::Ongoing => "🔄",
            ActionKind::Monitor => "📊",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityAction {
    pub kind: ActionKind,
    pub text: String,
}

/// The catalog document: results in display order plus summary metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub title: String,
    pub subject: String,
    pub results: Vec<TestResult>,
    #[serde(default)]
    pub key_findings: Vec<String>,
    #[serde(default)]
    pub priority_actions: Vec<PriorityAction>,
}
