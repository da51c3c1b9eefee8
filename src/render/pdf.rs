//! Typst markup to PDF compilation.
//!
//! The Typst engine is the external paginated-document builder: it lays the
//! transpiled blocks out top-to-bottom on fixed A4 pages and starts a new
//! page on overflow.

use crate::error::{Error, Result};
use log::warn;
use typst_as_lib::TypstEngine;

/// Compile Typst markup to PDF bytes.
pub fn compile(markup: &str) -> Result<Vec<u8>> {
    let engine = TypstEngine::builder()
        .main_file(markup.to_string())
        .build();

    let compiled = engine.compile();

    for warning in &compiled.warnings {
        warn!("typst: {:?}", warning);
    }

    let document = compiled
        .output
        .map_err(|e| Error::Compile(format!("{:?}", e)))?;

    let options = typst_pdf::PdfOptions::default();
    let pdf_bytes = typst_pdf::pdf(&document, &options)
        .map_err(|e| Error::Export(format!("{:?}", e)))?;

    Ok(pdf_bytes.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_simple() {
        let markup = "#set page(paper: \"a4\", margin: 72pt)\nHello world.";
        let result = compile(markup);

        assert!(result.is_ok(), "compilation failed: {:?}", result.err());

        let pdf = result.unwrap();
        assert!(
            pdf.starts_with(b"%PDF"),
            "output doesn't start with PDF header"
        );
    }

    #[test]
    fn test_compile_with_styling() {
        let markup = r##"
#set page(paper: "a4", margin: 72pt)
#block(above: 0pt, below: 42pt)[#align(center)[#text(size: 24pt, fill: rgb("#E2551C"), weight: "bold")[Title]]]
#par(justify: true, leading: 4pt)[#text(size: 10pt, fill: rgb("#333333"))[Body with #strong[bold] and #link("https://example.com/")[#underline[a link]].]]
"##;
        let result = compile(markup);
        assert!(result.is_ok(), "compilation failed: {:?}", result.err());
    }

    #[test]
    fn test_compile_invalid_markup() {
        let markup = "#invalid_function_that_doesnt_exist()";
        let result = compile(markup);
        assert!(matches!(result, Err(Error::Compile(_))));
    }
}
