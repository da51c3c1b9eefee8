//! Line classification.
//!
//! Each source line is matched against an ordered rule table; the first
//! matching rule decides the block kind and payload. The fallback paragraph
//! rule makes classification total: no line is ever rejected.

mod inline;

pub use inline::{InlineTranslator, BULLET_GLYPH};

use crate::model::{BlockKind, DocumentBlock, Span};
use log::debug;
use regex::Regex;

/// Literal prefix that marks the document title line.
const TITLE_PREFIX: &str = "# FILE EASY";

/// Minimum number of `=` characters for a heading payload to count as a
/// visual separator row.
const SEPARATOR_MIN_EQUALS: usize = 11;

/// What a rule does with a matched line.
enum Outcome {
    /// Emit a block
    Emit(DocumentBlock),
    /// Consume the line without emitting anything
    Skip,
}

/// One entry of the classification table.
struct Rule {
    name: &'static str,
    matches: fn(&LineClassifier, &str) -> bool,
    emit: fn(&LineClassifier, &str) -> Outcome,
}

/// The ordered rule table. First match wins; the final paragraph rule
/// matches everything.
const RULES: &[Rule] = &[
    Rule {
        name: "spacer",
        matches: |_, line| line.is_empty(),
        emit: |_, _| Outcome::Emit(DocumentBlock::spacer()),
    },
    Rule {
        name: "title",
        matches: |_, line| line.starts_with(TITLE_PREFIX),
        emit: |_, line| {
            Outcome::Emit(DocumentBlock::plain(BlockKind::Title, strip_heading(line)))
        },
    },
    Rule {
        name: "heading1",
        matches: |_, line| line.starts_with("# "),
        emit: |_, line| {
            let payload = strip_heading(line);
            if payload.matches('=').count() >= SEPARATOR_MIN_EQUALS {
                Outcome::Skip
            } else {
                Outcome::Emit(DocumentBlock::plain(BlockKind::Heading1, payload))
            }
        },
    },
    Rule {
        name: "heading2",
        matches: |_, line| line.starts_with("## "),
        emit: |_, line| {
            Outcome::Emit(DocumentBlock::plain(BlockKind::Heading2, strip_heading(line)))
        },
    },
    Rule {
        name: "heading3",
        matches: |_, line| line.starts_with("### "),
        emit: |_, line| {
            Outcome::Emit(DocumentBlock::plain(BlockKind::Heading3, strip_heading(line)))
        },
    },
    Rule {
        name: "bullet",
        matches: |_, line| line.starts_with("- "),
        emit: |classifier, line| {
            let payload = line.trim_start_matches('-').trim_start();
            Outcome::Emit(classifier.list_item(BlockKind::Bullet, payload))
        },
    },
    Rule {
        name: "numbered",
        matches: |classifier, line| classifier.numbered.is_match(line),
        emit: |classifier, line| {
            let payload = classifier.numbered.replace(line, "");
            Outcome::Emit(classifier.list_item(BlockKind::NumberedItem, &payload))
        },
    },
    Rule {
        name: "separator",
        matches: |_, line| {
            !line.is_empty() && line.chars().all(|c| c == '=' || c == ' ')
        },
        emit: |_, _| Outcome::Skip,
    },
    Rule {
        name: "paragraph",
        matches: |_, _| true,
        emit: |classifier, line| {
            let spans = classifier.translator.translate(line, BlockKind::Paragraph);
            let block = DocumentBlock::new(BlockKind::Paragraph, line, spans);
            if block.is_empty() {
                Outcome::Skip
            } else {
                Outcome::Emit(block)
            }
        },
    },
];

/// Strip leading `#` markers and surrounding whitespace from a heading line.
fn strip_heading(line: &str) -> String {
    line.trim_start_matches('#').trim().to_string()
}

/// Classifier for knowledge-base source lines.
pub struct LineClassifier {
    numbered: Regex,
    translator: InlineTranslator,
}

impl LineClassifier {
    /// Create a classifier with compiled patterns.
    pub fn new() -> Self {
        Self {
            numbered: Regex::new(r"^\d+\.\s").unwrap(),
            translator: InlineTranslator::new(),
        }
    }

    /// Classify one source line.
    ///
    /// The line is trimmed of surrounding whitespace before matching.
    /// Returns `None` for lines that are consumed without emitting a block
    /// (separator rows, whitespace-only paragraph residue).
    pub fn classify_line(&self, line: &str) -> Option<DocumentBlock> {
        let line = line.trim();
        for rule in RULES {
            if (rule.matches)(self, line) {
                return match (rule.emit)(self, line) {
                    Outcome::Emit(block) => Some(block),
                    Outcome::Skip => {
                        debug!("rule {:?} consumed line without a block", rule.name);
                        None
                    }
                };
            }
        }
        unreachable!("the paragraph rule matches every line");
    }

    /// Classify a whole document into an ordered block sequence.
    pub fn classify(&self, text: &str) -> Vec<DocumentBlock> {
        text.lines()
            .filter_map(|line| self.classify_line(line))
            .collect()
    }

    /// Build a list-item block: translate the payload, then prefix the
    /// bullet glyph. Numbered items render identically to bullets.
    fn list_item(&self, kind: BlockKind, payload: &str) -> DocumentBlock {
        let mut spans = self.translator.translate(payload, kind);
        spans.insert(0, Span::Text(BULLET_GLYPH.to_string()));
        DocumentBlock::new(kind, payload, spans)
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new()
    }
}
