use super::Catalog;
use crate::model::Report;
use std::sync::LazyLock;

const REPORT_JSON: &str = include_str!("../../../../data/report.json");

static BUILTIN_CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    let report: Report =
        serde_json::from_str(REPORT_JSON).expect("embedded report.json is valid");
    Catalog::new(report).expect("embedded report.json passes validation")
});

/// The catalog compiled into the binary.
pub fn builtin_catalog() -> &'static Catalog {
    &BUILTIN_CATALOG
}
