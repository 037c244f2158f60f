//! Inject module: Splice documentation blocks into file text
//!
//! Blocks are applied bottom-up so that pending line numbers stay valid,
//! each indented like the declaration it documents. Elements that already
//! carry a doc comment are left alone, which makes a second run a no-op.
//! Several elements declared on one line each get a block, stacked above it.

mod existing;

use std::cmp::Reverse;

use tracing::debug;

use crate::synth::{DocStyle, DocumentationBlock};

pub use existing::has_existing_doc;

/// Result of injecting blocks into one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Injection {
    pub content: String,
    /// Blocks actually inserted, in the order they were given
    pub inserted: Vec<DocumentationBlock>,
}

impl Injection {
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.inserted.is_empty()
    }
}

/// Leading spaces and tabs of a line
#[must_use]
pub fn indentation(line: &str) -> &str {
    let end = line
        .find(|c: char| c != ' ' && c != '\t')
        .unwrap_or(line.len());
    &line[..end]
}

fn indent_block(block: &str, indent: &str, line_ending: &str) -> Vec<String> {
    block
        .split('\n')
        .map(|line| {
            if line.is_empty() {
                line_ending.to_string()
            } else {
                format!("{indent}{line}{line_ending}")
            }
        })
        .collect()
}

/// Insert `blocks` above their elements' lines in `content`
#[must_use]
pub fn inject(content: &str, blocks: Vec<DocumentationBlock>, style: DocStyle) -> Injection {
    let mut lines: Vec<String> = content.split('\n').map(ToString::to_string).collect();

    // Bottom-up; blocks sharing a line are spliced last-first so they
    // stack in their given order
    let mut order: Vec<usize> = (0..blocks.len()).collect();
    order.sort_by_key(|position| Reverse((blocks[*position].element.line, *position)));

    let mut kept = vec![false; blocks.len()];
    for position in order {
        let block = &blocks[position];
        let Some(index) = block.element.line.checked_sub(1) else {
            continue;
        };
        if index >= lines.len() {
            continue;
        }
        if has_existing_doc(lines.as_slice(), index, style) {
            debug!(
                "{} at line {} is already documented",
                block.element.name, block.element.line
            );
            continue;
        }

        let target = &lines[index];
        let line_ending = if target.ends_with('\r') { "\r" } else { "" };
        let inserted = indent_block(&block.text, indentation(target), line_ending);
        lines.splice(index..index, inserted);
        kept[position] = true;
    }

    let inserted = blocks
        .into_iter()
        .zip(kept)
        .filter_map(|(block, kept)| kept.then_some(block))
        .collect();

    Injection {
        content: lines.join("\n"),
        inserted,
    }
}

#[cfg(test)]
mod tests;
