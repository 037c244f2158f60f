//! Detection of documentation already sitting above a declaration

use crate::synth::DocStyle;

/// Whether the line above `index` already closes a doc comment of `style`
#[must_use]
pub fn has_existing_doc<S: AsRef<str>>(lines: &[S], index: usize, style: DocStyle) -> bool {
    if index == 0 || index > lines.len() {
        return false;
    }
    let previous = lines[index - 1].as_ref().trim();

    match style {
        DocStyle::JsDoc | DocStyle::JavaDoc => {
            previous.starts_with("/**")
                || (previous.ends_with("*/") && opens_above(&lines[..index - 1]))
        }
        DocStyle::Docstring => previous.starts_with("\"\"\"") || previous.ends_with("\"\"\""),
        DocStyle::Block => previous.starts_with("/*") || previous.ends_with("*/"),
    }
}

/// Walk upward through comment continuation lines looking for `/**`
fn opens_above<S: AsRef<str>>(lines: &[S]) -> bool {
    for line in lines.iter().rev() {
        let line = line.as_ref().trim();
        if line.starts_with("/**") {
            return true;
        }
        if !line.is_empty() && !line.starts_with('*') {
            return false;
        }
    }
    false
}
