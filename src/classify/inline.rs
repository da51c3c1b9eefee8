//! Inline markup translation.
//!
//! Transforms a raw text payload into styled spans. Patterns are applied in
//! a fixed order (bold, then links, then inline code) and each pass only
//! rescans the plain-text segments left by earlier passes, so later patterns
//! never corrupt earlier spans.

use crate::model::{BlockKind, Span};
use regex::Regex;

/// Glyph prefixed to bullet and numbered list items.
pub const BULLET_GLYPH: &str = "• ";

/// Translator for bold, hyperlink, and inline-code markup.
pub struct InlineTranslator {
    bold: Regex,
    link: Regex,
    code: Regex,
}

impl InlineTranslator {
    /// Create a translator with compiled patterns.
    pub fn new() -> Self {
        Self {
            // Non-greedy: the shortest span between two ** pairs wins.
            bold: Regex::new(r"\*\*(.+?)\*\*").unwrap(),
            link: Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap(),
            code: Regex::new(r"`([^`]+)`").unwrap(),
        }
    }

    /// Translate a payload into spans according to the block kind's policy.
    ///
    /// Inline code is recognized in paragraphs only; list items translate
    /// bold and links. Kinds that do not translate inline markup get a
    /// single plain-text span.
    pub fn translate(&self, text: &str, kind: BlockKind) -> Vec<Span> {
        if !kind.translates_inline() {
            return vec![Span::Text(text.to_string())];
        }

        let mut spans = vec![Span::Text(text.to_string())];
        spans = apply(spans, &self.bold, |caps| Span::Bold(caps[1].to_string()));
        spans = apply(spans, &self.link, |caps| Span::Link {
            label: caps[1].to_string(),
            url: caps[2].to_string(),
        });
        if kind == BlockKind::Paragraph {
            spans = apply(spans, &self.code, |caps| Span::Code(caps[1].to_string()));
        }
        spans.retain(|s| !s.is_empty());
        spans
    }
}

/// Run one pattern over the plain-text segments of `spans`, replacing each
/// match with the span produced by `make`.
fn apply<F>(spans: Vec<Span>, pattern: &Regex, make: F) -> Vec<Span>
where
    F: Fn(&regex::Captures) -> Span,
{
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        match span {
            Span::Text(text) => {
                let mut last = 0;
                for caps in pattern.captures_iter(&text) {
                    let m = caps.get(0).unwrap();
                    if m.start() > last {
                        out.push(Span::Text(text[last..m.start()].to_string()));
                    }
                    out.push(make(&caps));
                    last = m.end();
                }
                if last < text.len() {
                    out.push(Span::Text(text[last..].to_string()));
                }
            }
            other => out.push(other),
        }
    }
    out
}

impl Default for InlineTranslator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translate_paragraph(text: &str) -> Vec<Span> {
        InlineTranslator::new().translate(text, BlockKind::Paragraph)
    }

    #[test]
    fn test_bold_roundtrip() {
        let spans = translate_paragraph("Based in **Kent** since 2025");
        assert_eq!(
            spans,
            vec![
                Span::Text("Based in ".to_string()),
                Span::Bold("Kent".to_string()),
                Span::Text(" since 2025".to_string()),
            ]
        );
    }

    #[test]
    fn test_bold_non_greedy() {
        let spans = translate_paragraph("**a** and **b**");
        assert_eq!(
            spans,
            vec![
                Span::Bold("a".to_string()),
                Span::Text(" and ".to_string()),
                Span::Bold("b".to_string()),
            ]
        );
    }

    #[test]
    fn test_unmatched_bold_left_literal() {
        let spans = translate_paragraph("a ** b");
        assert_eq!(spans, vec![Span::Text("a ** b".to_string())]);
    }

    #[test]
    fn test_link_preserves_label_and_target() {
        let spans = translate_paragraph("[Pricing](https://example.com/pricing/)");
        assert_eq!(
            spans,
            vec![Span::Link {
                label: "Pricing".to_string(),
                url: "https://example.com/pricing/".to_string(),
            }]
        );
    }

    #[test]
    fn test_code_in_paragraph_only() {
        let para = translate_paragraph("run `cargo test` now");
        assert_eq!(
            para,
            vec![
                Span::Text("run ".to_string()),
                Span::Code("cargo test".to_string()),
                Span::Text(" now".to_string()),
            ]
        );

        let bullet = InlineTranslator::new().translate("run `cargo test` now", BlockKind::Bullet);
        assert_eq!(bullet, vec![Span::Text("run `cargo test` now".to_string())]);
    }

    #[test]
    fn test_heading_passes_through() {
        let spans = InlineTranslator::new().translate("**not** translated", BlockKind::Heading1);
        assert_eq!(spans, vec![Span::Text("**not** translated".to_string())]);
    }

    #[test]
    fn test_bold_then_link_order() {
        let spans = translate_paragraph("**Xero** setup: [guide](https://example.com/xero/)");
        assert_eq!(
            spans,
            vec![
                Span::Bold("Xero".to_string()),
                Span::Text(" setup: ".to_string()),
                Span::Link {
                    label: "guide".to_string(),
                    url: "https://example.com/xero/".to_string(),
                },
            ]
        );
    }
}
