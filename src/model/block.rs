//! Block-level and span-level types.

use serde::{Deserialize, Serialize};

/// The kind of a classified source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// The document title line
    Title,
    /// Top-level section heading
    Heading1,
    /// Second-level heading
    Heading2,
    /// Third-level heading
    Heading3,
    /// Bulleted list item
    Bullet,
    /// Numbered list item (rendered like a bullet)
    NumberedItem,
    /// Body text
    Paragraph,
    /// Vertical gap produced by a blank source line
    Spacer,
}

impl BlockKind {
    /// Check if this kind is a heading (title included).
    pub fn is_heading(self) -> bool {
        matches!(
            self,
            BlockKind::Title | BlockKind::Heading1 | BlockKind::Heading2 | BlockKind::Heading3
        )
    }

    /// Get the heading level, or `None` for non-heading kinds.
    ///
    /// The title counts as level 0.
    pub fn heading_level(self) -> Option<u8> {
        match self {
            BlockKind::Title => Some(0),
            BlockKind::Heading1 => Some(1),
            BlockKind::Heading2 => Some(2),
            BlockKind::Heading3 => Some(3),
            _ => None,
        }
    }

    /// Check if this kind is a list item.
    pub fn is_list_item(self) -> bool {
        matches!(self, BlockKind::Bullet | BlockKind::NumberedItem)
    }

    /// Check if payloads of this kind receive inline markup translation.
    ///
    /// Headings pass through with marker stripping only.
    pub fn translates_inline(self) -> bool {
        matches!(
            self,
            BlockKind::Bullet | BlockKind::NumberedItem | BlockKind::Paragraph
        )
    }
}

/// A styled region of rendered text.
///
/// Spans are the opaque style directives consumed by the layout stage;
/// the enclosed text is preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Span {
    /// Unstyled text
    Text(String),

    /// Bold text
    Bold(String),

    /// A clickable hyperlink
    Link {
        /// Visible label
        label: String,
        /// Link destination
        url: String,
    },

    /// Monospace inline code
    Code(String),
}

impl Span {
    /// The visible text of the span (the label for links).
    pub fn visible_text(&self) -> &str {
        match self {
            Span::Text(t) | Span::Bold(t) | Span::Code(t) => t,
            Span::Link { label, .. } => label,
        }
    }

    /// Check if the span carries no visible text.
    pub fn is_empty(&self) -> bool {
        self.visible_text().is_empty()
    }
}

/// One classified block of the source document.
///
/// Blocks are created once during classification and consumed once by the
/// layout stage; they are not mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentBlock {
    /// The classified kind
    pub kind: BlockKind,

    /// Payload text before inline markup translation
    pub raw: String,

    /// Styled spans after inline markup translation
    pub spans: Vec<Span>,
}

impl DocumentBlock {
    /// Create a block from a kind, raw payload, and translated spans.
    pub fn new(kind: BlockKind, raw: impl Into<String>, spans: Vec<Span>) -> Self {
        Self {
            kind,
            raw: raw.into(),
            spans,
        }
    }

    /// Create a block whose payload is a single plain-text span.
    pub fn plain(kind: BlockKind, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            kind,
            raw: text.clone(),
            spans: vec![Span::Text(text)],
        }
    }

    /// Create a spacer block.
    pub fn spacer() -> Self {
        Self {
            kind: BlockKind::Spacer,
            raw: String::new(),
            spans: Vec::new(),
        }
    }

    /// Concatenated visible text across all spans.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(Span::visible_text).collect()
    }

    /// Check if the block has no visible text.
    pub fn is_empty(&self) -> bool {
        self.plain_text().trim().is_empty()
    }
}
