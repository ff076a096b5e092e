use labcard_core::catalog::Catalog;
use labcard_core::error::LabcardError;
use std::path::Path;

use super::resolve_catalog;
use crate::output;

pub fn run(catalog_path: Option<&Path>, id: &str, output_format: &str) -> Result<(), LabcardError> {
    let catalog = resolve_catalog(catalog_path)?;

    match render_detail(&catalog, id, output_format)? {
        Some(text) => println!("{text}"),
        None => log::warn!("no result with id '{id}'"),
    }

    Ok(())
}

/// Render the detail view for `id`; unknown ids render nothing.
pub fn render_detail(
    catalog: &Catalog,
    id: &str,
    output_format: &str,
) -> Result<Option<String>, LabcardError> {
    let Some(model) = labcard_core::open_detail(catalog, id) else {
        return Ok(None);
    };

    let rendered = match output_format {
        "json" => serde_json::to_string_pretty(&model)?,
        _ => output::text::format_detail(&model).trim_end().to_string(),
    };
    Ok(Some(rendered))
}
