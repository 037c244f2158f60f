use crate::pipeline::FileResult;

/// Human-readable preview of the planned rewrites; touches nothing on disk
#[must_use]
pub fn render(results: &[FileResult]) -> String {
    let mut lines = vec!["Proposed changes:".to_string(), String::new()];

    for (index, result) in results.iter().enumerate() {
        lines.push(format!(
            "{}. {} ({})",
            index + 1,
            result.file.display(),
            result.language
        ));
        lines.push(format!(
            "   {} documentation blocks to add",
            result.documentation.len()
        ));
        lines.push(String::new());

        for (block_index, block) in result.documentation.iter().enumerate() {
            let element = &block.element;
            lines.push(format!(
                "   {}. {}: {} (line {})",
                block_index + 1,
                element.kind,
                element.name,
                element.line
            ));
            lines.push(format!("      {}", block.summary_line()));
            lines.push(String::new());
        }
    }

    lines.push("Run without --dry-run to apply these changes".to_string());
    lines.join("\n")
}
