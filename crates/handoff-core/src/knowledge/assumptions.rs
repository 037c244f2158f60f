//! Assumptions document filtering
//!
//! The assumptions file ships with guide and template text. Only lines
//! under the recognized section headers carry project knowledge.

/// Section headers whose content is kept
pub const SECTION_HEADERS: &[&str] = &[
    "### Architecture Decisions",
    "### Design Principles",
    "### API Behaviors",
    "### Implementation Patterns",
    "### Current Assumptions",
];

/// Markers of template boilerplate; matching lines are dropped outright
const BOILERPLATE_MARKERS: &[&str] = &[
    "How to Use This File",
    "Assumption Template",
    "Review Status",
    "*No assumptions recorded yet*",
];

/// Keep only trimmed, non-empty lines that follow a recognized section
/// header, up to the next heading or code fence.
///
/// Fenced blocks are skipped entirely, so headers quoted inside a
/// template example do not open a section.
#[must_use]
pub fn extract_meaningful(content: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();
    let mut in_section = false;
    let mut in_fence = false;

    for line in content.lines() {
        if BOILERPLATE_MARKERS.iter().any(|marker| line.contains(marker)) {
            continue;
        }

        let trimmed = line.trim();
        if trimmed.contains("```") {
            in_fence = !in_fence;
            in_section = false;
            continue;
        }
        if in_fence {
            continue;
        }

        if SECTION_HEADERS.iter().any(|header| line.contains(header)) {
            in_section = true;
            continue;
        }

        if trimmed.starts_with('#') {
            in_section = false;
            continue;
        }

        if in_section && !trimmed.is_empty() {
            kept.push(trimmed);
        }
    }

    kept.join("\n")
}
