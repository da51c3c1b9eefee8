//! Rendering module for converting classified blocks to a paginated PDF.
//!
//! The block sequence is transpiled to Typst markup and compiled by the
//! Typst engine, which owns pagination, font metrics, and page-break logic.
//! Any conforming paginated-document backend could be substituted behind
//! the "ordered sequence of styled blocks" contract.

mod options;
mod pdf;
mod typst;

pub use options::RenderOptions;
pub use pdf::compile;
pub use typst::transpile;

use crate::error::Result;
use crate::model::DocumentBlock;

/// Render a block sequence to PDF bytes.
pub fn to_pdf(blocks: &[DocumentBlock], options: &RenderOptions) -> Result<Vec<u8>> {
    let markup = typst::transpile(blocks, options);
    pdf::compile(&markup)
}
