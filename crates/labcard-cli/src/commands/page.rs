use labcard_core::error::LabcardError;
use std::path::{Path, PathBuf};

use super::resolve_catalog;
use crate::output;

pub fn run(catalog_path: Option<&Path>, out: Option<PathBuf>) -> Result<(), LabcardError> {
    let catalog = resolve_catalog(catalog_path)?;
    let html = output::html::render_page(&catalog);

    match out {
        Some(path) => {
            std::fs::write(&path, html)?;
            log::info!("wrote {} results to {}", catalog.len(), path.display());
            eprintln!("Page written to {}", path.display());
        }
        None => println!("{html}"),
    }

    Ok(())
}
