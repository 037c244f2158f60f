//! Knowledge command: Report the state of the knowledge base

use std::path::Path;

use anyhow::Result;
use handoff_core::{InjectError, KnowledgeBase};

use super::types::KnowledgeArgs;

/// Describe which documents exist in `dir` and whether they say anything
///
/// # Errors
/// Returns an error if a present document cannot be read.
pub async fn status_report(dir: &Path) -> Result<String> {
    let mut lines = vec![format!("Knowledge base: {}", dir.display())];

    for status in KnowledgeBase::survey(dir).await {
        let mark = if status.present { "x" } else { " " };
        lines.push(format!("  [{mark}] {}", status.file));
    }

    let summary = match KnowledgeBase::load(dir).await {
        Ok(base) if base.has_meaningful_content() => {
            format!("Ready: {} documents loaded", base.documents().len())
        }
        Ok(_) => "Present but empty: structural descriptions will be used".to_string(),
        Err(InjectError::NoKnowledgeBase(_)) => {
            format!("Missing: create {}", dir.join("assumptions.md").display())
        }
        Err(e) => return Err(e.into()),
    };
    lines.push(summary);

    Ok(lines.join("\n"))
}

/// Run the knowledge command
///
/// # Errors
/// Returns an error if a present document cannot be read.
pub async fn run(args: &KnowledgeArgs) -> Result<()> {
    println!("{}", status_report(&args.knowledge_dir()).await?);
    Ok(())
}
