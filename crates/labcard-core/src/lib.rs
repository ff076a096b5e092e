pub mod catalog;
pub mod error;
pub mod model;
pub mod summary;
pub mod view;

use catalog::Catalog;
use error::LabcardError;
use model::TestResult;
use view::RenderModel;

pub use catalog::builtin::builtin_catalog;

/// Look up a result in the built-in catalog.
pub fn lookup(id: &str) -> Result<&'static TestResult, LabcardError> {
    builtin_catalog().lookup(id)
}

/// Project a result into its detail view. Never fails.
pub fn project(result: &TestResult) -> RenderModel {
    view::project(result)
}

/// Resolve `id` and project it, the way a UI shell opens a detail view.
///
/// Unknown ids yield `None`; the caller should render nothing.
pub fn open_detail(catalog: &Catalog, id: &str) -> Option<RenderModel> {
    match catalog.lookup(id) {
        Ok(result) => Some(view::project(result)),
        Err(e) => {
            log::debug!("not opening detail view: {e}");
            None
        }
    }
}
