//! Tests for description extraction and the structural fallback

use rstest::rstest;

use crate::extract::{CodeElement, ElementKind};
use crate::synth::{
    clean_markdown, describe_from_context, describe_structurally, infer_keywords,
    is_sentence_relevant,
};

fn function(name: &str) -> CodeElement {
    CodeElement::new(ElementKind::Function, name, 1)
}

#[test]
fn test_clean_markdown_strips_markup_and_list_markers() {
    assert_eq!(
        clean_markdown("## 1. **Email**   - check [docs]"),
        "Email check docs"
    );
}

#[test]
fn test_curated_extraction_takes_tight_phrase() {
    let description = describe_from_context(
        &function("validateEmail"),
        "Email validation: use a regex pattern to check email format",
    );

    assert_eq!(
        description.as_deref(),
        Some("Email validation: use a regex pattern")
    );
}

#[test]
fn test_relevant_clause_is_selected() {
    let description = describe_from_context(
        &function("getUserName"),
        "Notes: getUserName returns the display name of a user. Other stuff",
    );

    assert_eq!(
        description.as_deref(),
        Some("getUserName returns the display name of a user")
    );
}

#[test]
fn test_generic_context_yields_nothing() {
    let description = describe_from_context(
        &function("doThing"),
        "We value separation of concerns everywhere",
    );

    assert_eq!(description, None);
}

#[test]
fn test_short_unrelated_context_yields_nothing() {
    assert_eq!(describe_from_context(&function("parseConfig"), "Use tabs"), None);
}

#[test]
fn test_long_unrelated_context_yields_nothing() {
    let context = "The team meets weekly to review progress and plan the next sprint. \
                   Releases ship every second Tuesday after the demo.";

    assert_eq!(describe_from_context(&function("parseConfig"), context), None);
}

#[rstest]
#[case("hashPassword", "Passwords are hashed with bcrypt", true)]
#[case("hashPassword", "Always hash passwords, validate inputs", false)]
#[case("hashPassword", "The password field is required", false)]
#[case("validateEmail", "Email format is checked with a regex", true)]
#[case("validateEmail", "Signup requires email, password and a name", false)]
#[case("getProductById", "Call get product by id for lookups", true)]
#[case("getProductById", "Architecture decisions for get product by id", false)]
#[case("parseConfig", "Nothing to see here", false)]
fn test_sentence_relevance(#[case] name: &str, #[case] sentence: &str, #[case] expected: bool) {
    assert_eq!(is_sentence_relevant(name, sentence), expected);
}

#[rstest]
#[case("validateEmail", "Validates email addresses using regex pattern")]
#[case("validate_email", "Validates email addresses using regex pattern")]
#[case("getAllOrders", "Retrieves all items with optional filtering")]
#[case("fetchOrderById", "Retrieves specific item by ID")]
#[case("removeItem", "Deletes specified resource")]
#[case("startWorker", "Starts specified service or process")]
#[case("hashToken", "Hashes data for secure storage")]
fn test_structural_description_from_name(#[case] name: &str, #[case] expected: &str) {
    assert_eq!(describe_structurally(&function(name), ""), expected);
}

#[test]
fn test_structural_description_from_source_keywords() {
    let source = "function sendMail(to) {\n  if (!to.includes('@')) return;";

    assert_eq!(
        describe_structurally(&function("sendMail"), source),
        "Handles email operations"
    );
}

#[test]
fn test_structural_description_catch_all() {
    let element = CodeElement::new(ElementKind::Class, "Renderer", 3);

    assert_eq!(
        describe_structurally(&element, "class Renderer {}"),
        "Renderer - class implementation"
    );
}

#[test]
fn test_infer_keywords_combines_name_and_source() {
    let keywords = infer_keywords("updateTotal", "const price = total * rate;");

    assert_eq!(
        keywords,
        vec!["update", "modify", "change", "price", "money", "format"]
    );
}
