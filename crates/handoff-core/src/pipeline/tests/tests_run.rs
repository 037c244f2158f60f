//! Tests for a full pipeline run against on-disk fixtures

#![allow(clippy::expect_used)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use crate::error::InjectError;
use crate::pipeline::{InjectOptions, run};
use crate::scanner::Language;

const ASSUMPTIONS: &str = "\
## How to Use This File
Guide text.

### Implementation Patterns
Email validation: use a regex pattern to check email format
";

const VALIDATE_EMAIL: &str = "function validateEmail(x){\n  return /@/.test(x);\n}\n";

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create dirs");
    }
    fs::write(path, content).expect("write fixture");
}

fn project(files: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write(temp_dir.path(), ".project/assumptions.md", ASSUMPTIONS);
    for (relative, content) in files {
        write(temp_dir.path(), relative, content);
    }
    temp_dir
}

#[tokio::test]
async fn test_knowledge_driven_block_for_validate_email() {
    let temp_dir = project(&[("src/utils.js", VALIDATE_EMAIL)]);

    let outcome = run(&InjectOptions::new(temp_dir.path()))
        .await
        .expect("run succeeds");

    assert_eq!(outcome.results.len(), 1);
    let result = &outcome.results[0];
    assert_eq!(result.language, Language::JavaScript);
    assert_eq!(result.original_content, VALIDATE_EMAIL);

    let summary = result.documentation[0].summary_line().to_lowercase();
    assert!(summary.contains("email"));
    assert!(summary.contains("valid") || summary.contains("format"));
    assert!(result.new_content.starts_with(
        "/**\n * Email validation: use a regex pattern\n * @returns {boolean} "
    ));
    assert!(result.new_content.ends_with(VALIDATE_EMAIL));

    let on_disk = fs::read_to_string(temp_dir.path().join("src/utils.js")).expect("read");
    assert_eq!(on_disk, VALIDATE_EMAIL);
}

#[tokio::test]
async fn test_missing_knowledge_base_is_fatal() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write(temp_dir.path(), "src/utils.js", VALIDATE_EMAIL);

    let result = run(&InjectOptions::new(temp_dir.path())).await;

    assert!(matches!(result, Err(InjectError::NoKnowledgeBase(_))));
}

#[tokio::test]
async fn test_pattern_without_matches_is_fatal() {
    let temp_dir = project(&[("src/utils.js", VALIDATE_EMAIL)]);

    let result = run(&InjectOptions::new(temp_dir.path()).with_pattern("**/*.kt")).await;

    assert!(matches!(result, Err(InjectError::NoSourceFiles)));
}

#[tokio::test]
async fn test_only_unsaved_files_is_fatal() {
    let temp_dir = project(&[(
        "src/notes.js",
        "This file only holds a long comment without any declarations in it",
    )]);

    let result = run(&InjectOptions::new(temp_dir.path())).await;

    match result {
        Err(InjectError::AllFilesUnprocessable { unsaved }) => {
            assert_eq!(unsaved, vec![temp_dir.path().join("src/notes.js")]);
        }
        other => panic!("expected AllFilesUnprocessable, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unsaved_files_are_reported_next_to_results() {
    let temp_dir = project(&[("src/empty.js", "  \n"), ("src/utils.js", VALIDATE_EMAIL)]);

    let outcome = run(&InjectOptions::new(temp_dir.path()))
        .await
        .expect("run succeeds");

    assert_eq!(outcome.results.len(), 1);
    assert_eq!(outcome.unsaved, vec![temp_dir.path().join("src/empty.js")]);
}

#[tokio::test]
async fn test_documented_project_yields_no_results() {
    let temp_dir = project(&[(
        "src/utils.js",
        "/**\n * Checks an address\n */\nfunction validateEmail(x){}\n",
    )]);

    let outcome = run(&InjectOptions::new(temp_dir.path()))
        .await
        .expect("run succeeds");

    assert!(outcome.is_empty());
    assert_eq!(outcome.block_count(), 0);
}

#[tokio::test]
async fn test_structural_description_without_meaningful_knowledge() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write(temp_dir.path(), ".project/assumptions.md", "");
    write(temp_dir.path(), "src/utils.js", VALIDATE_EMAIL);

    let outcome = run(&InjectOptions::new(temp_dir.path()))
        .await
        .expect("run succeeds");

    assert_eq!(
        outcome.results[0].documentation[0].summary_line(),
        "Validates email addresses using regex pattern"
    );
}

#[tokio::test]
async fn test_python_docstring_above_def() {
    let temp_dir = project(&[("app/ready.py", "def is_ready(flag):\n    return flag\n")]);

    let outcome = run(&InjectOptions::new(temp_dir.path()))
        .await
        .expect("run succeeds");

    let result = &outcome.results[0];
    assert_eq!(result.language, Language::Python);
    assert!(
        result
            .new_content
            .starts_with("\"\"\"is_ready - function implementation\n")
    );
    assert!(
        result
            .new_content
            .contains("        bool: True if validation passes, False otherwise\n    \"\"\"\ndef is_ready(flag):")
    );
}

#[tokio::test]
async fn test_language_override_does_not_change_extraction() {
    let temp_dir = project(&[("src/utils.js", VALIDATE_EMAIL)]);

    let outcome = run(&InjectOptions::new(temp_dir.path()).with_language("python"))
        .await
        .expect("run succeeds");

    assert_eq!(outcome.results[0].language, Language::JavaScript);
}

#[tokio::test]
async fn test_results_keep_scan_order_under_concurrency() {
    let temp_dir = project(&[
        ("src/a.js", "function alpha() {}\n"),
        ("src/b.js", "function beta() {}\n"),
        ("src/c.js", "function gamma() {}\n"),
        ("src/d.js", "function delta() {}\n"),
    ]);

    let outcome = run(&InjectOptions::new(temp_dir.path()).with_concurrency(2))
        .await
        .expect("run succeeds");

    let files: Vec<_> = outcome.results.iter().map(|r| r.file.clone()).collect();
    let expected: Vec<_> = ["a", "b", "c", "d"]
        .iter()
        .map(|name| temp_dir.path().join(format!("src/{name}.js")))
        .collect();
    assert_eq!(files, expected);
}

#[tokio::test]
async fn test_custom_knowledge_directory_is_not_scanned() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write(temp_dir.path(), "docs/kb/assumptions.md", ASSUMPTIONS);
    write(temp_dir.path(), "docs/kb/snippet.js", "function snippet() {}\n");
    write(temp_dir.path(), "src/utils.js", VALIDATE_EMAIL);

    let options =
        InjectOptions::new(temp_dir.path()).with_knowledge_dir(temp_dir.path().join("docs/kb"));
    let outcome = run(&options).await.expect("run succeeds");

    assert_eq!(outcome.results.len(), 1);
    assert_eq!(outcome.results[0].file, temp_dir.path().join("src/utils.js"));
}

#[tokio::test]
async fn test_every_declaration_on_a_shared_line_is_documented() {
    let content = "function alpha() {} function beta() {}\n";
    let temp_dir = project(&[("min.js", content)]);

    let outcome = run(&InjectOptions::new(temp_dir.path()))
        .await
        .expect("run succeeds");

    let result = &outcome.results[0];
    let documented: Vec<&str> = result
        .documentation
        .iter()
        .map(|block| block.element.name.as_str())
        .collect();
    assert_eq!(documented, vec!["alpha", "beta"]);
    assert_eq!(result.new_content.matches("/**").count(), 2);
    assert!(result.new_content.ends_with(content));

    fs::write(temp_dir.path().join("min.js"), &result.new_content).expect("write");
    let rerun = run(&InjectOptions::new(temp_dir.path()))
        .await
        .expect("rerun succeeds");
    assert!(rerun.results.is_empty());
}

#[tokio::test]
async fn test_absolute_pattern_selects_files_under_root() {
    let temp_dir = project(&[("a.js", VALIDATE_EMAIL)]);
    let pattern = format!("{}/*.js", temp_dir.path().display());

    let outcome = run(&InjectOptions::new(temp_dir.path()).with_pattern(pattern))
        .await
        .expect("run succeeds");

    assert_eq!(outcome.results.len(), 1);
    assert_eq!(outcome.results[0].file, temp_dir.path().join("a.js"));
}
