use serde::{Deserialize, Serialize};
use std::fmt;

/// Style class for a status value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Success,
    Info,
}

impl Severity {
    /// CSS class used by the HTML shell.
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Error => "status--error",
            Severity::Warning => "status--warning",
            Severity::Success => "status--success",
            Severity::Info => "status--info",
        }
    }

    /// Marker for plain-text listings.
    pub fn marker(&self) -> &'static str {
        match self {
            Severity::Error | Severity::Warning => "⚠️",
            Severity::Success => "✓",
            Severity::Info => "•",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Success => write!(f, "success"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// Map a status label to its severity. Case-insensitive; unknown labels are `Info`.
pub fn classify(status: &str) -> Severity {
    match status.trim().to_lowercase().as_str() {
        "critical" => Severity::Error,
        "borderline" => Severity::Warning,
        "normal" | "excellent" | "optimal" => Severity::Success,
        _ => Severity::Info,
    }
}
