//! Rendering module: Markdown parse events to LaTeX fragments.

mod latex;
mod options;
mod wrapper;

pub use latex::{to_latex_body, LatexRenderer};
pub use options::RenderOptions;
pub use wrapper::wrap_document;
