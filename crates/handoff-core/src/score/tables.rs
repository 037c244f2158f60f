//! Keyword tables for relevance scoring

/// Curated keyword phrases for well-known element names, keyed by
/// normalized name
pub const SPECIFIC_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "validateemail",
        &["email validation", "validate email", "email format"],
    ),
    (
        "hashpassword",
        &["password hash", "bcrypt", "salt rounds", "password security"],
    ),
    (
        "calculatediscount",
        &["discount calculation", "percentage-based discount", "discount percent"],
    ),
    (
        "formatprice",
        &["price format", "currency format", "intl.numberformat", "usd display"],
    ),
    (
        "generaterandomid",
        &["random string", "unique identifier", "id generation", "base36"],
    ),
    (
        "authenticatetoken",
        &["jwt token", "token verification", "authentication middleware"],
    ),
    (
        "generatetoken",
        &["jwt token", "token creation", "token generation"],
    ),
    (
        "loginuser",
        &["user login", "authentication", "email password"],
    ),
    (
        "registeruser",
        &["user registration", "new account", "signup"],
    ),
    (
        "getallproducts",
        &["product listing", "get products", "product filter"],
    ),
    (
        "getproductbyid",
        &["product by id", "specific product", "find product"],
    ),
    (
        "createproduct",
        &["create product", "new product", "add product"],
    ),
    (
        "updateproduct",
        &["update product", "modify product", "product update"],
    ),
    (
        "startserver",
        &["server startup", "express server", "server listen"],
    ),
];

/// Name-prefix convention mapped to weighted search keywords
#[derive(Debug)]
pub struct PrefixRule {
    pub prefixes: &'static [&'static str],
    pub keywords: &'static [(&'static str, u32)],
}

/// Generic prefix conventions; every rule whose prefix matches contributes
pub const GENERIC_PREFIX_RULES: &[PrefixRule] = &[
    PrefixRule {
        prefixes: &["get", "fetch", "retrieve"],
        keywords: &[("retrieve", 5), ("get", 4), ("fetch", 4)],
    },
    PrefixRule {
        prefixes: &["create", "add", "insert"],
        keywords: &[("create", 5), ("add", 4), ("new", 3)],
    },
    PrefixRule {
        prefixes: &["update", "modify", "change"],
        keywords: &[("update", 5), ("modify", 4), ("change", 3)],
    },
    PrefixRule {
        prefixes: &["delete", "remove"],
        keywords: &[("delete", 5), ("remove", 4)],
    },
    PrefixRule {
        prefixes: &["validate", "check"],
        keywords: &[("validation", 5), ("validate", 4)],
    },
    PrefixRule {
        prefixes: &["format", "display"],
        keywords: &[("format", 5), ("display", 4)],
    },
    PrefixRule {
        prefixes: &["generate", "create"],
        keywords: &[("generate", 5), ("create", 4)],
    },
    PrefixRule {
        prefixes: &["hash", "encrypt"],
        keywords: &[("hash", 5), ("encrypt", 4), ("security", 3)],
    },
    PrefixRule {
        prefixes: &["auth", "login"],
        keywords: &[("authentication", 5), ("auth", 4), ("login", 3)],
    },
    PrefixRule {
        prefixes: &["calculate", "compute"],
        keywords: &[("calculate", 5), ("compute", 4)],
    },
];

/// Curated phrases for a normalized element name
#[must_use]
pub fn specific_keywords(normalized: &str) -> &'static [&'static str] {
    match SPECIFIC_KEYWORDS.iter().find(|(name, _)| *name == normalized) {
        Some((_, keywords)) => keywords,
        None => &[],
    }
}

/// Weighted keywords for every prefix rule the name satisfies
#[must_use]
pub fn generic_keywords(normalized: &str) -> Vec<(&'static str, u32)> {
    GENERIC_PREFIX_RULES
        .iter()
        .filter(|rule| rule.prefixes.iter().any(|p| normalized.starts_with(p)))
        .flat_map(|rule| rule.keywords.iter().copied())
        .collect()
}
