//! Tests for knowledge base loading

#![allow(clippy::expect_used)]

use crate::error::InjectError;
use crate::knowledge::{KNOWLEDGE_FILES, KnowledgeBase};
use std::fs;
use tempfile::TempDir;

const ASSUMPTIONS: &str = "\
## How to Use This File
Guide text that must not leak.

### Implementation Patterns
Email validation: use a regex pattern to check email format
";

#[tokio::test]
async fn test_load_requires_assumptions_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("architecture.md"), "# Arch").expect("write");

    let result = KnowledgeBase::load(temp_dir.path()).await;

    assert!(matches!(result, Err(InjectError::NoKnowledgeBase(_))));
}

#[tokio::test]
async fn test_load_missing_directory_is_no_knowledge() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let result = KnowledgeBase::load(&temp_dir.path().join("absent")).await;

    assert!(matches!(result, Err(InjectError::NoKnowledgeBase(_))));
}

#[tokio::test]
async fn test_load_empty_assumptions_satisfies_presence() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("assumptions.md"), "").expect("write");

    let base = KnowledgeBase::load(temp_dir.path()).await.expect("load");

    assert_eq!(base.documents().len(), 1);
    assert_eq!(base.get("assumptions"), Some(""));
    assert!(!base.has_meaningful_content());
}

#[tokio::test]
async fn test_load_filters_assumptions_and_keeps_others_verbatim() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("assumptions.md"), ASSUMPTIONS).expect("write");
    fs::write(temp_dir.path().join("api-docs.md"), "# API\nGET /products lists products\n")
        .expect("write");

    let base = KnowledgeBase::load(temp_dir.path()).await.expect("load");

    assert_eq!(
        base.get("assumptions"),
        Some("Email validation: use a regex pattern to check email format")
    );
    assert_eq!(
        base.get("api-docs"),
        Some("# API\nGET /products lists products\n")
    );
    assert!(base.has_meaningful_content());
}

#[tokio::test]
async fn test_load_ignores_files_outside_whitelist() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("assumptions.md"), ASSUMPTIONS).expect("write");
    fs::write(temp_dir.path().join("ai-quick-start.md"), "guide").expect("write");

    let base = KnowledgeBase::load(temp_dir.path()).await.expect("load");

    assert!(base.get("ai-quick-start").is_none());
}

#[tokio::test]
async fn test_load_preserves_whitelist_order() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("constraints.md"), "constraints").expect("write");
    fs::write(temp_dir.path().join("patterns.md"), "patterns").expect("write");
    fs::write(temp_dir.path().join("assumptions.md"), ASSUMPTIONS).expect("write");

    let base = KnowledgeBase::load(temp_dir.path()).await.expect("load");
    let names: Vec<_> = base.documents().iter().map(|d| d.name.as_str()).collect();

    assert_eq!(names, vec!["assumptions", "patterns", "constraints"]);
    assert!(base.combined_text().ends_with("patterns\nconstraints"));
}

#[tokio::test]
async fn test_survey_reports_every_whitelisted_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("assumptions.md"), ASSUMPTIONS).expect("write");

    let statuses = KnowledgeBase::survey(temp_dir.path()).await;

    assert_eq!(statuses.len(), KNOWLEDGE_FILES.len());
    assert!(statuses[0].present);
    assert!(statuses.iter().skip(1).all(|s| !s.present));
}

#[test]
fn test_meaningful_content_threshold() {
    let short = KnowledgeBase::default().with_document("assumptions", "x".repeat(50));
    let long = KnowledgeBase::default().with_document("assumptions", "x".repeat(51));
    let padded = KnowledgeBase::default()
        .with_document("assumptions", format!("   {}   ", "x".repeat(50)));

    assert!(!short.has_meaningful_content());
    assert!(long.has_meaningful_content());
    assert!(!padded.has_meaningful_content());
}
