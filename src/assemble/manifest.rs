//! Service manifest loading.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One entry of the static service catalog.
///
/// Supplied externally as an ordered collection; records are never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceRecord {
    /// Service title
    pub title: String,

    /// Category slug, e.g. `"bookkeeping"`
    #[serde(default = "default_category")]
    pub category: String,

    /// Site-relative page path, e.g. `"/services/tax/"`
    #[serde(default)]
    pub url: String,

    /// Short marketing excerpt
    #[serde(default)]
    pub excerpt: Option<String>,

    /// Longer description; some manifest entries carry this instead of an
    /// excerpt
    #[serde(default)]
    pub description: Option<String>,
}

fn default_category() -> String {
    "other".to_string()
}

impl ServiceRecord {
    /// Text for the per-category service listing. Prefers the description,
    /// falling back to the excerpt.
    pub fn short_description(&self) -> &str {
        self.description
            .as_deref()
            .or(self.excerpt.as_deref())
            .unwrap_or("N/A")
    }

    /// Text for the detailed service section. Prefers the excerpt, falling
    /// back to the description.
    pub fn long_description(&self) -> &str {
        self.excerpt
            .as_deref()
            .or(self.description.as_deref())
            .unwrap_or("N/A")
    }

    /// The service page URL resolved against the site base.
    pub fn absolute_url(&self, base: &str) -> String {
        format!("{}{}", base, self.url)
    }
}

/// Load the ordered service catalog from a JSON manifest file.
pub fn load_manifest(path: impl AsRef<Path>) -> Result<Vec<ServiceRecord>> {
    let raw = std::fs::read_to_string(path)?;
    let services: Vec<ServiceRecord> = serde_json::from_str(&raw)?;
    Ok(services)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_record() {
        let json = r#"{
            "title": "Quarterly VAT Returns",
            "category": "core",
            "url": "/services/core/quarterly-vat-returns/",
            "excerpt": "VAT returns prepared and filed on time."
        }"#;
        let record: ServiceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.title, "Quarterly VAT Returns");
        assert_eq!(record.category, "core");
        assert_eq!(
            record.long_description(),
            "VAT returns prepared and filed on time."
        );
        assert_eq!(
            record.absolute_url("https://fileeasyaccountancy.co.uk"),
            "https://fileeasyaccountancy.co.uk/services/core/quarterly-vat-returns/"
        );
    }

    #[test]
    fn test_missing_category_defaults() {
        let json = r#"{"title": "Odd One Out", "url": "/misc/"}"#;
        let record: ServiceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.category, "other");
        assert_eq!(record.short_description(), "N/A");
    }

    #[test]
    fn test_description_fallbacks() {
        let json = r#"{"title": "X", "url": "/x/", "description": "Long form."}"#;
        let record: ServiceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.short_description(), "Long form.");
        assert_eq!(record.long_description(), "Long form.");
    }
}
