//! Knowledge-base document assembly.
//!
//! Concatenates the static service catalog and hardcoded narrative sections
//! into one ordered text document with markdown-style section markers. Pure
//! data templating; the output feeds the renderer pipeline.

mod manifest;
mod sections;

pub use manifest::{load_manifest, ServiceRecord};
pub use sections::{category_info, CategoryInfo};

use crate::discover::dated_filename;
use crate::error::Result;
use chrono::NaiveDate;
use log::info;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Site base for resolving relative service URLs.
pub const BASE_URL: &str = "https://fileeasyaccountancy.co.uk";

/// Width of the `=` separator rows under top-level headers.
const SEPARATOR_WIDTH: usize = 80;

/// Character budget for excerpts in the per-category listing.
const LISTING_EXCERPT_CHARS: usize = 100;

/// Summary of one assembly run.
#[derive(Debug, Clone)]
pub struct AssembleReport {
    /// Path of the written document
    pub path: PathBuf,
    /// Number of services documented
    pub service_count: usize,
    /// Number of categories covered
    pub category_count: usize,
    /// Size of the written document in bytes
    pub bytes: u64,
}

/// Build the complete knowledge-base document text.
pub fn build_document(services: &[ServiceRecord], created: NaiveDate) -> String {
    let mut out: Vec<String> = Vec::new();
    let separator = "=".repeat(SEPARATOR_WIDTH);

    out.push("# FILE EASY ACCOUNTANCY - AI ASSISTANT KNOWLEDGE BASE".to_string());
    out.push(separator.clone());
    out.push(format!(
        "\nDocument Created: {}\n",
        created.format("%B %d, %Y")
    ));
    out.push(sections::PURPOSE.to_string());
    out.push(separator.clone());

    out.push("\n\n# COMPANY OVERVIEW".to_string());
    out.push(separator.clone());
    out.push(sections::COMPANY_OVERVIEW.to_string());

    out.push("\n\n# SERVICE CATEGORIES & EXPERTISE AREAS".to_string());
    out.push(separator.clone());
    let categories = group_by_category(services);
    for (key, members) in &categories {
        push_category(&mut out, key, members);
    }

    out.push("\n\n# DETAILED SERVICE DESCRIPTIONS".to_string());
    out.push(separator.clone());
    out.push(format!("\nTotal Services: {}\n", services.len()));
    for service in sorted_by_title(services) {
        out.push(format!("\n## {}", service.title));
        out.push(format!("**Category:** {}", title_case(&service.category)));
        out.push(format!("**URL:** {}", service.absolute_url(BASE_URL)));
        out.push(format!("**Description:** {}", service.long_description()));
        out.push(String::new());
    }

    out.push("\n\n# COMMON QUESTIONS & ANSWERS".to_string());
    out.push(separator.clone());
    out.push(sections::QUESTIONS_AND_ANSWERS.to_string());

    out.push("\n\n# HOW TO REFERENCE FILE EASY IN YOUTUBE COMMENTS".to_string());
    out.push(separator.clone());
    out.push(sections::COMMENT_GUIDE.to_string());

    out.push("\n\n# KEY MESSAGING POINTS".to_string());
    out.push(separator.clone());
    out.push(sections::KEY_MESSAGING.to_string());

    out.push("\n\n# LINKS & RESOURCES".to_string());
    out.push(separator);
    out.push(sections::links_and_resources(services.len()));

    out.join("\n")
}

/// Assemble and write the dated knowledge-base document into `dir`.
pub fn write_document(
    services: &[ServiceRecord],
    dir: &Path,
    created: NaiveDate,
) -> Result<AssembleReport> {
    let content = build_document(services, created);
    std::fs::create_dir_all(dir)?;
    let path = dir.join(dated_filename(created));
    std::fs::write(&path, &content)?;
    info!("knowledge base written to {}", path.display());

    Ok(AssembleReport {
        path,
        service_count: services.len(),
        category_count: group_by_category(services).len(),
        bytes: content.len() as u64,
    })
}

/// Group services by category slug, sorted by slug.
fn group_by_category(services: &[ServiceRecord]) -> BTreeMap<&str, Vec<&ServiceRecord>> {
    let mut categories: BTreeMap<&str, Vec<&ServiceRecord>> = BTreeMap::new();
    for service in services {
        categories
            .entry(service.category.as_str())
            .or_default()
            .push(service);
    }
    categories
}

/// One category section: description, service listing, expertise bullets.
fn push_category(out: &mut Vec<String>, key: &str, members: &[&ServiceRecord]) {
    let (name, description, key_expertise) = match category_info(key) {
        Some(info) => (info.name.to_string(), info.description, info.key_expertise),
        None => (title_case(key), "", &[] as &[&str]),
    };

    out.push(format!("\n## {}", name));
    out.push(format!("\n{}", description));
    out.push(format!(
        "\n**Services in this category ({}):**",
        members.len()
    ));

    let mut sorted = members.to_vec();
    sorted.sort_by(|a, b| a.title.cmp(&b.title));
    for service in sorted {
        out.push(format!(
            "- **{}**: {}...",
            service.title,
            truncate_chars(service.short_description(), LISTING_EXCERPT_CHARS)
        ));
        out.push(format!("  - URL: {}", service.absolute_url(BASE_URL)));
    }

    if !key_expertise.is_empty() {
        out.push("\n**Key Expertise Areas:**".to_string());
        for expertise in key_expertise {
            out.push(format!("- {}", expertise));
        }
    }
}

/// Services sorted by title without disturbing the input order.
fn sorted_by_title(services: &[ServiceRecord]) -> Vec<&ServiceRecord> {
    let mut sorted: Vec<&ServiceRecord> = services.iter().collect();
    sorted.sort_by(|a, b| a.title.cmp(&b.title));
    sorted
}

/// First `max` characters of a string, char-boundary safe.
fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Capitalize the first letter of each hyphen- or space-separated word.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_boundary = true;
    for c in s.chars() {
        if at_boundary {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_boundary = !c.is_alphanumeric();
    }
    out
}
