//! Identifier normalization shared by the scorer and synthesizer

/// Lookup key for curated tables: lowercase with underscores removed,
/// so `validateEmail` and `validate_email` share an entry.
#[must_use]
pub fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Split a camelCase or snake_case identifier into lowercase words
/// joined by single spaces (`getProductById` -> `get product by id`).
#[must_use]
pub fn words(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;

    for c in name.chars() {
        if c == '_' || c == '-' {
            if !out.is_empty() && !out.ends_with(' ') {
                out.push(' ');
            }
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower && !out.ends_with(' ') {
            out.push(' ');
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
        out.extend(c.to_lowercase());
    }

    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("validateEmail"), "validateemail");
        assert_eq!(normalize("validate_email"), "validateemail");
        assert_eq!(normalize("HTTPServer"), "httpserver");
    }

    #[test]
    fn test_words() {
        assert_eq!(words("getProductById"), "get product by id");
        assert_eq!(words("hash_password"), "hash password");
        assert_eq!(words("UserService"), "user service");
        assert_eq!(words("parseJSON"), "parse json");
        assert_eq!(words("simple"), "simple");
    }
}
