//! Block sequence to Typst markup transpilation.
//!
//! Every emitted construct is driven by the block's [`StyleProfile`]; the
//! transpiler holds no styling knowledge of its own.

use crate::model::{Alignment, BlockKind, DocumentBlock, Span, StyleProfile, LINK_COLOR};
use crate::render::RenderOptions;

/// Transpile a block sequence to a complete Typst document.
pub fn transpile(blocks: &[DocumentBlock], options: &RenderOptions) -> String {
    let mut output = String::new();

    let title = options.title.clone().or_else(|| {
        blocks
            .iter()
            .find(|b| b.kind == BlockKind::Title)
            .map(DocumentBlock::plain_text)
    });
    if let Some(title) = title {
        output.push_str(&format!(
            "#set document(title: \"{}\")\n",
            escape_string(&title)
        ));
    }

    output.push_str(&format!(
        "#set page(paper: \"{}\", margin: {}pt)\n",
        options.paper, options.margin
    ));

    let body = &options.stylesheet.paragraph;
    output.push_str(&format!(
        "#set text(size: {}pt, fill: rgb(\"{}\"))\n\n",
        body.size, body.color
    ));

    for block in blocks {
        let profile = options.stylesheet.profile(block.kind);
        output.push_str(&block_markup(block, profile));
    }

    output
}

/// Markup for one block.
fn block_markup(block: &DocumentBlock, profile: &StyleProfile) -> String {
    if block.kind == BlockKind::Spacer {
        return format!("#v({}pt)\n", profile.space_after);
    }

    let weight = if profile.bold { ", weight: \"bold\"" } else { "" };
    let mut inner = format!(
        "#text(size: {}pt, fill: rgb(\"{}\"){})[{}]",
        profile.size,
        profile.color,
        weight,
        spans_markup(&block.spans)
    );

    // Line height and justification are paragraph-level in Typst.
    if profile.leading.is_some() || profile.alignment == Alignment::Justify {
        let justify = profile.alignment == Alignment::Justify;
        let leading = profile
            .leading
            .map(|l| (l - profile.size).max(0.0))
            .unwrap_or(0.0);
        inner = format!("#par(justify: {}, leading: {}pt)[{}]", justify, leading, inner);
    }

    if profile.indent > 0.0 {
        inner = format!("#pad(left: {}pt)[{}]", profile.indent, inner);
    }

    if profile.alignment == Alignment::Center {
        inner = format!("#align(center)[{}]", inner);
    }

    format!(
        "#block(above: {}pt, below: {}pt)[{}]\n",
        profile.space_before, profile.space_after, inner
    )
}

/// Markup for a span list.
fn spans_markup(spans: &[Span]) -> String {
    let mut out = String::new();
    for span in spans {
        match span {
            Span::Text(text) => out.push_str(&escape_markup(text)),
            Span::Bold(text) => {
                out.push_str(&format!("#strong[{}]", escape_markup(text)));
            }
            Span::Link { label, url } => {
                out.push_str(&format!(
                    "#link(\"{}\")[#underline[#text(fill: rgb(\"{}\"))[{}]]]",
                    escape_string(url),
                    LINK_COLOR,
                    escape_markup(label)
                ));
            }
            Span::Code(text) => {
                out.push_str(&format!("#raw(\"{}\")", escape_string(text)));
            }
        }
    }
    out
}

/// Escape characters with syntactic meaning in Typst markup.
fn escape_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '#' | '*' | '_' | '`' | '$' | '=' | '<' | '>' | '@' | '[' | ']' | '~' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

/// Escape special characters inside Typst string literals.
fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
