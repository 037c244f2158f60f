//! Tests for existing documentation detection

use rstest::rstest;

use crate::inject::has_existing_doc;
use crate::synth::DocStyle;

#[rstest]
#[case(&["/**", " * Existing", " */", "function a() {}"], 3, true)]
#[case(&["/** One liner */", "function a() {}"], 1, true)]
#[case(&["/**", "", " * Gap", " */", "function a() {}"], 4, true)]
#[case(&["// line comment", "function a() {}"], 1, false)]
#[case(&["let y = 2;", "/* tail */", "function f() {}"], 2, false)]
#[case(&["function a() {}"], 0, false)]
fn test_jsdoc_detection(#[case] lines: &[&str], #[case] index: usize, #[case] expected: bool) {
    assert_eq!(has_existing_doc(lines, index, DocStyle::JsDoc), expected);
}

#[test]
fn test_plain_block_counts_for_block_style() {
    let lines = ["let y = 2;", "/* tail */", "fn f() {}"];

    assert!(has_existing_doc(&lines, 2, DocStyle::Block));
    assert!(!has_existing_doc(&lines, 1, DocStyle::Block));
}

#[rstest]
#[case(&["    \"\"\"Runs", "    \"\"\"", "def run():"], 2, true)]
#[case(&["\"\"\"Single line\"\"\"", "def run():"], 1, true)]
#[case(&["# comment", "def run():"], 1, false)]
fn test_docstring_detection(#[case] lines: &[&str], #[case] index: usize, #[case] expected: bool) {
    assert_eq!(has_existing_doc(lines, index, DocStyle::Docstring), expected);
}
