pub mod projector;
pub mod render_model;
pub mod severity;

pub use projector::project;
pub use render_model::{Block, DefinitionBlock, FactRow, RenderModel};
pub use severity::{classify, Severity};
