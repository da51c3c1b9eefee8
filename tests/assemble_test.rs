//! Integration tests for knowledge-base assembly.

use chrono::NaiveDate;
use kbpress::assemble::{build_document, write_document, BASE_URL};
use kbpress::{load_manifest, Error, ServiceRecord};

fn manifest_json() -> &'static str {
    r#"[
        {
            "title": "Monthly Bookkeeping",
            "category": "bookkeeping",
            "url": "/services/bookkeeping/monthly-bookkeeping-bank-reconciliation/",
            "excerpt": "Accurate monthly records with bank reconciliation and cloud software."
        },
        {
            "title": "Quarterly VAT Returns",
            "category": "core",
            "url": "/services/core/quarterly-vat-returns/",
            "excerpt": "VAT returns prepared and filed on time, every quarter."
        },
        {
            "title": "Self Assessment for Sole Traders",
            "category": "tax",
            "url": "/services/tax/self-assessment-sole-traders/",
            "description": "Self Assessment returns for sole traders with full HMRC correspondence handling."
        }
    ]"#
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, 3).unwrap()
}

#[test]
fn test_load_manifest_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("services.manifest.json");
    std::fs::write(&path, manifest_json()).unwrap();

    let services = load_manifest(&path).unwrap();
    assert_eq!(services.len(), 3);
    assert_eq!(services[0].title, "Monthly Bookkeeping");
    assert_eq!(services[2].category, "tax");
}

#[test]
fn test_load_manifest_missing_file() {
    let result = load_manifest("/nonexistent/services.manifest.json");
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_load_manifest_invalid_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("services.manifest.json");
    std::fs::write(&path, "{not json").unwrap();

    let result = load_manifest(&path);
    assert!(matches!(result, Err(Error::Manifest(_))));
}

#[test]
fn test_document_covers_every_service() {
    let services: Vec<ServiceRecord> = serde_json::from_str(manifest_json()).unwrap();
    let doc = build_document(&services, date());

    for service in &services {
        assert!(doc.contains(&format!("\n## {}", service.title)));
        assert!(doc.contains(&service.absolute_url(BASE_URL)));
    }
    assert!(doc.contains("Total Services: 3"));
}

#[test]
fn test_document_renders_to_pdf() {
    // Full pipeline: manifest -> document -> blocks -> PDF bytes.
    let services: Vec<ServiceRecord> = serde_json::from_str(manifest_json()).unwrap();
    let doc = build_document(&services, date());

    let pdf = kbpress::render_str(&doc, &kbpress::RenderOptions::default()).unwrap();
    assert!(pdf.starts_with(b"%PDF"));
}

#[test]
fn test_write_then_discover() {
    // The assembler's output must be discoverable by the renderer's
    // date-convention lookup.
    let dir = tempfile::tempdir().unwrap();
    let services: Vec<ServiceRecord> = serde_json::from_str(manifest_json()).unwrap();

    let report = write_document(&services, dir.path(), date()).unwrap();
    let found = kbpress::discover::find_input(dir.path(), date()).unwrap();

    assert_eq!(found, report.path);
}
