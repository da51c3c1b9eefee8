//! # kbpress
//!
//! Offline tooling for the File Easy marketing workflow: assemble the
//! service knowledge base into a dated markdown document, then render that
//! document into a paginated A4 PDF with the fixed house styling.
//!
//! ## Quick Start
//!
//! ```no_run
//! use kbpress::{render_file, RenderOptions};
//!
//! fn main() -> kbpress::Result<()> {
//!     let options = RenderOptions::default();
//!     let bytes = render_file("knowledge_base.md", "knowledge_base.pdf", &options)?;
//!     println!("wrote {} bytes", bytes);
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - **Assembly**: service manifest + hardcoded narrative → ordered text
//!   document with section markers ([`assemble`])
//! - **Classification**: one typed block per source line, first-match-wins
//!   rule table ([`classify`])
//! - **Rendering**: blocks + stylesheet → Typst markup → PDF bytes
//!   ([`render`])
//!
//! Classification is total: every line falls through to the paragraph rule,
//! so a malformed line cannot fail the run.

pub mod assemble;
pub mod classify;
pub mod discover;
pub mod error;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use assemble::{load_manifest, AssembleReport, ServiceRecord};
pub use classify::{InlineTranslator, LineClassifier, BULLET_GLYPH};
pub use error::{Error, Result};
pub use model::{Alignment, BlockKind, DocumentBlock, Span, StyleProfile, StyleSheet};
pub use render::RenderOptions;

use std::path::Path;

/// Classify a source document into an ordered block sequence.
pub fn classify_str(text: &str) -> Vec<DocumentBlock> {
    LineClassifier::new().classify(text)
}

/// Render a source document string to PDF bytes.
pub fn render_str(text: &str, options: &RenderOptions) -> Result<Vec<u8>> {
    let blocks = classify_str(text);
    render::to_pdf(&blocks, options)
}

/// Render a source document file to a PDF file.
///
/// Returns the number of bytes written.
pub fn render_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    options: &RenderOptions,
) -> Result<u64> {
    let text = std::fs::read_to_string(input)?;
    let pdf = render_str(&text, options)?;
    std::fs::write(output, &pdf)?;
    Ok(pdf.len() as u64)
}
