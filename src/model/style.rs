//! Fixed styling profiles for each block kind.
//!
//! The stylesheet is an immutable configuration struct passed into the
//! renderer; nothing here is derived from document content.

use super::BlockKind;
use serde::{Deserialize, Serialize};

/// Display color for hyperlink labels.
pub const LINK_COLOR: &str = "#0000FF";

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Justified alignment
    Justify,
}

/// Visual attributes for one block kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleProfile {
    /// Font size in points
    pub size: f32,

    /// Text color as an RGB hex string, e.g. `"#333333"`
    pub color: String,

    /// Bold weight
    pub bold: bool,

    /// Horizontal alignment
    pub alignment: Alignment,

    /// Vertical space before the block in points
    pub space_before: f32,

    /// Vertical space after the block in points
    pub space_after: f32,

    /// Left indentation in points
    pub indent: f32,

    /// Line height in points; `None` uses the engine default
    pub leading: Option<f32>,
}

impl StyleProfile {
    /// A plain body-text profile at the given size.
    pub fn body(size: f32) -> Self {
        Self {
            size,
            color: "#333333".to_string(),
            bold: false,
            alignment: Alignment::Left,
            space_before: 0.0,
            space_after: 0.0,
            indent: 0.0,
            leading: None,
        }
    }
}

/// The complete kind-to-profile mapping handed to the renderer.
///
/// Invariant: every [`BlockKind`] maps to exactly one profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleSheet {
    /// Title profile
    pub title: StyleProfile,
    /// Top-level heading profile
    pub heading1: StyleProfile,
    /// Second-level heading profile
    pub heading2: StyleProfile,
    /// Third-level heading profile
    pub heading3: StyleProfile,
    /// Bullet item profile
    pub bullet: StyleProfile,
    /// Numbered item profile
    pub numbered: StyleProfile,
    /// Body paragraph profile
    pub paragraph: StyleProfile,
    /// Spacer profile; only `space_after` is meaningful
    pub spacer: StyleProfile,
}

impl StyleSheet {
    /// Look up the profile for a block kind.
    pub fn profile(&self, kind: BlockKind) -> &StyleProfile {
        match kind {
            BlockKind::Title => &self.title,
            BlockKind::Heading1 => &self.heading1,
            BlockKind::Heading2 => &self.heading2,
            BlockKind::Heading3 => &self.heading3,
            BlockKind::Bullet => &self.bullet,
            BlockKind::NumberedItem => &self.numbered,
            BlockKind::Paragraph => &self.paragraph,
            BlockKind::Spacer => &self.spacer,
        }
    }
}

impl Default for StyleSheet {
    /// The fixed house style: brand-orange headings, dark grey justified
    /// body text, indented bullets. Heading `space_after` values fold in
    /// the extra gap the layout emits beneath each heading.
    fn default() -> Self {
        let accent = "#E2551C".to_string();
        Self {
            title: StyleProfile {
                size: 24.0,
                color: accent.clone(),
                bold: true,
                alignment: Alignment::Center,
                space_before: 0.0,
                space_after: 42.0,
                indent: 0.0,
                leading: None,
            },
            heading1: StyleProfile {
                size: 18.0,
                color: accent.clone(),
                bold: true,
                alignment: Alignment::Left,
                space_before: 12.0,
                space_after: 24.0,
                indent: 0.0,
                leading: None,
            },
            heading2: StyleProfile {
                size: 14.0,
                color: accent,
                bold: true,
                alignment: Alignment::Left,
                space_before: 8.0,
                space_after: 16.0,
                indent: 0.0,
                leading: None,
            },
            heading3: StyleProfile {
                size: 12.0,
                color: "#333333".to_string(),
                bold: true,
                alignment: Alignment::Left,
                space_before: 6.0,
                space_after: 12.0,
                indent: 0.0,
                leading: None,
            },
            bullet: StyleProfile {
                size: 10.0,
                space_after: 4.0,
                indent: 20.0,
                leading: Some(14.0),
                ..StyleProfile::body(10.0)
            },
            numbered: StyleProfile {
                size: 10.0,
                space_after: 4.0,
                indent: 20.0,
                leading: Some(14.0),
                ..StyleProfile::body(10.0)
            },
            paragraph: StyleProfile {
                size: 10.0,
                alignment: Alignment::Justify,
                space_after: 6.0,
                leading: Some(14.0),
                ..StyleProfile::body(10.0)
            },
            spacer: StyleProfile {
                size: 0.0,
                space_after: 6.0,
                ..StyleProfile::body(0.0)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_a_profile() {
        let sheet = StyleSheet::default();
        for kind in [
            BlockKind::Title,
            BlockKind::Heading1,
            BlockKind::Heading2,
            BlockKind::Heading3,
            BlockKind::Bullet,
            BlockKind::NumberedItem,
            BlockKind::Paragraph,
            BlockKind::Spacer,
        ] {
            let profile = sheet.profile(kind);
            assert!(profile.size >= 0.0);
        }
    }

    #[test]
    fn test_default_constants() {
        let sheet = StyleSheet::default();
        assert_eq!(sheet.title.size, 24.0);
        assert_eq!(sheet.title.alignment, Alignment::Center);
        assert_eq!(sheet.title.color, "#E2551C");
        assert_eq!(sheet.paragraph.alignment, Alignment::Justify);
        assert_eq!(sheet.paragraph.leading, Some(14.0));
        assert_eq!(sheet.bullet.indent, 20.0);
        assert_eq!(sheet.spacer.space_after, 6.0);
    }

    #[test]
    fn test_numbered_matches_bullet() {
        let sheet = StyleSheet::default();
        assert_eq!(sheet.numbered, sheet.bullet);
    }
}
