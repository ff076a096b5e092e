pub mod catalog;
pub mod page;
pub mod show;
pub mod summary;

use labcard_core::catalog::{load_catalog, Catalog};
use labcard_core::error::LabcardError;
use std::borrow::Cow;
use std::path::Path;

/// The catalog named by `--catalog`, or the built-in one.
pub fn resolve_catalog(path: Option<&Path>) -> Result<Cow<'static, Catalog>, LabcardError> {
    match path {
        Some(p) => Ok(Cow::Owned(load_catalog(p)?)),
        None => Ok(Cow::Borrowed(labcard_core::builtin_catalog())),
    }
}
