//! Tests for the dry-run preview

#![allow(clippy::expect_used)]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::extract::{CodeElement, ElementKind};
use crate::pipeline::{FileResult, InjectOptions, run};
use crate::report::render;
use crate::scanner::{Language, compute_hash};
use crate::synth::DocumentationBlock;

fn sample_result() -> FileResult {
    FileResult {
        file: PathBuf::from("src/utils.js"),
        language: Language::JavaScript,
        original_content: "function validateEmail(x){}".to_string(),
        original_hash: compute_hash(b"function validateEmail(x){}"),
        documentation: vec![DocumentationBlock {
            element: CodeElement::new(ElementKind::Function, "validateEmail", 1),
            text: "/**\n * Validates email\n * @returns {boolean} ok\n */".to_string(),
        }],
        new_content: String::new(),
    }
}

#[test]
fn test_render_lists_files_and_blocks() {
    let preview = render(&[sample_result()]);

    assert_eq!(
        preview,
        "Proposed changes:\n\
         \n\
         1. src/utils.js (javascript)\n   \
         1 documentation blocks to add\n\
         \n   \
         1. function: validateEmail (line 1)\n      \
         Validates email\n\
         \n\
         Run without --dry-run to apply these changes"
    );
}

#[test]
fn test_render_empty() {
    let preview = render(&[]);

    assert!(preview.starts_with("Proposed changes:"));
    assert!(preview.ends_with("Run without --dry-run to apply these changes"));
}

#[tokio::test]
async fn test_preview_leaves_files_untouched() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let knowledge = temp_dir.path().join(".project");
    fs::create_dir_all(&knowledge).expect("create dirs");
    fs::write(knowledge.join("assumptions.md"), "").expect("write");
    let source = temp_dir.path().join("app.js");
    fs::write(&source, "function formatPrice(p) {\n  return p;\n}\n").expect("write");
    let before = compute_hash(&fs::read(&source).expect("read"));

    let options = InjectOptions::new(temp_dir.path()).with_dry_run(true);
    let outcome = run(&options).await.expect("run succeeds");
    let preview = render(&outcome.results);

    assert!(preview.contains("formatPrice"));
    assert_eq!(compute_hash(&fs::read(&source).expect("read")), before);
}
