//! Curated lookup tables for documentation synthesis
//!
//! All keys and triggers operate on normalized names (lowercase, no
//! underscores). Precedence is applied by the callers: curated entry,
//! domain predicate, prefix heuristic, catch-all.

/// How a heuristic recognizes a name
#[derive(Debug, Clone, Copy)]
pub enum Trigger {
    Prefix(&'static [&'static str]),
    Contains(&'static [&'static str]),
}

impl Trigger {
    #[must_use]
    pub fn matches(self, normalized: &str) -> bool {
        match self {
            Self::Prefix(prefixes) => prefixes.iter().any(|p| normalized.starts_with(p)),
            Self::Contains(parts) => parts.iter().any(|p| normalized.contains(p)),
        }
    }
}

/// Wording of one return description per doc dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReturnText {
    pub script: &'static str,
    pub python: &'static str,
    pub java: &'static str,
}

/// Name-based description heuristic with optional refinements
#[derive(Debug)]
pub struct DescriptionRule {
    pub trigger: Trigger,
    pub refinements: &'static [(&'static [&'static str], &'static str)],
    pub default: &'static str,
}

/// Name-based return heuristic with optional refinements
#[derive(Debug)]
pub struct ReturnRule {
    pub trigger: Trigger,
    pub refinements: &'static [(&'static [&'static str], ReturnText)],
    pub default: ReturnText,
}

/// Sentence predicate for a family of element names
#[derive(Debug)]
pub struct DomainRule {
    /// Every part must appear in the name
    pub name_all: &'static [&'static str],
    /// At least one part must appear in the name (ignored when empty)
    pub name_any: &'static [&'static str],
    /// Every term must appear in the sentence
    pub required: &'static [&'static str],
    /// At least one term must appear in the sentence (ignored when empty)
    pub any_of: &'static [&'static str],
    /// Sentences containing this phrase are rejected
    pub reject: &'static str,
}

fn contains_all(haystack: &str, parts: &[&str]) -> bool {
    parts.iter().all(|p| haystack.contains(p))
}

fn contains_any_or_empty(haystack: &str, parts: &[&str]) -> bool {
    parts.is_empty() || parts.iter().any(|p| haystack.contains(p))
}

impl DomainRule {
    #[must_use]
    pub fn applies_to(&self, normalized: &str) -> bool {
        contains_all(normalized, self.name_all) && contains_any_or_empty(normalized, self.name_any)
    }

    #[must_use]
    pub fn accepts(&self, lowered_sentence: &str) -> bool {
        contains_all(lowered_sentence, self.required)
            && contains_any_or_empty(lowered_sentence, self.any_of)
            && !lowered_sentence.contains(self.reject)
    }
}

/// Tight phrase extraction for well-known names, case-insensitive
pub const EXTRACTION_PATTERNS: &[(&str, &str)] = &[
    ("validateemail", r"email validation.*?regex pattern"),
    ("hashpassword", r"password.*?bcrypt.*?salt rounds"),
    ("calculatediscount", r"discount calculation.*?percentage.*?validation"),
    ("formatprice", r"price format.*?currency.*?intl\.numberformat"),
    ("generaterandomid", r"random.*?string.*?base36"),
    ("authenticatetoken", r"jwt token.*?verification"),
    ("generatetoken", r"jwt token.*?creation"),
    ("loginuser", r"user login.*?authentication.*?email.*?password"),
    ("registeruser", r"user registration.*?new account.*?validation"),
    ("getallproducts", r"product listing.*?optional.*?filtering"),
    ("getproductbyid", r"product.*?by id.*?error handling"),
    ("createproduct", r"create.*?product.*?validation"),
    ("updateproduct", r"update.*?product.*?validation"),
    ("startserver", r"server.*?startup.*?express.*?port"),
];

/// Phrases marking a whole context as too generic to describe anything
pub const GENERIC_PHRASES: &[&str] = &[
    "separation of concerns",
    "error handling",
    "product management",
    "requires authentication",
    "consistent json",
    "routes, middleware",
    "all database",
];

/// Phrases marking a sentence as section boilerplate
pub const IRRELEVANT_PHRASES: &[&str] = &[
    "architecture decisions",
    "design principles",
    "api behaviors",
    "error responses",
    "requires authentication",
    "separation of concerns",
    "async operations",
    "all database",
    "routes, middleware",
];

pub const DOMAIN_RULES: &[DomainRule] = &[
    DomainRule {
        name_all: &["validate", "email"],
        name_any: &[],
        required: &["email"],
        any_of: &["valid", "format", "check", "regex"],
        reject: "requires email, password",
    },
    DomainRule {
        name_all: &["hash", "password"],
        name_any: &[],
        required: &["password"],
        any_of: &["hash", "bcrypt", "security", "salt"],
        reject: "always hash passwords, validate inputs",
    },
    DomainRule {
        name_all: &["format", "price"],
        name_any: &[],
        required: &[],
        any_of: &["price", "currency", "money", "format"],
        reject: "standard format { error",
    },
    DomainRule {
        name_all: &["calculate", "discount"],
        name_any: &[],
        required: &["discount"],
        any_of: &["calculate", "percentage"],
        reject: "requires authentication",
    },
    DomainRule {
        name_all: &["generate"],
        name_any: &["id", "random"],
        required: &[],
        any_of: &["id", "random", "generate", "unique"],
        reject: "user id and email",
    },
];

pub const CURATED_DESCRIPTIONS: &[(&str, &str)] = &[
    ("validateemail", "Validates email addresses using regex pattern"),
    ("hashpassword", "Securely hashes passwords using bcrypt with salt rounds"),
    ("calculatediscount", "Calculates price discount based on percentage with validation"),
    ("formatprice", "Formats numeric price as USD currency string"),
    ("generaterandomid", "Generates random unique identifier using base36 encoding"),
    ("authenticatetoken", "Verifies JWT authentication token"),
    ("generatetoken", "Creates JWT token for user authentication"),
    ("loginuser", "Authenticates user credentials and returns token"),
    ("registeruser", "Creates new user account with validation and password hashing"),
    ("getallproducts", "Retrieves products with optional category and price filtering"),
    ("getproductbyid", "Retrieves specific product by ID with error handling"),
    ("createproduct", "Creates new product with required field validation"),
    ("updateproduct", "Updates existing product data with validation"),
    ("startserver", "Starts Express server on specified port"),
];

pub const DESCRIPTION_RULES: &[DescriptionRule] = &[
    DescriptionRule {
        trigger: Trigger::Contains(&["validate"]),
        refinements: &[(&["email"], "Validates email addresses using regex pattern")],
        default: "Validates input data according to specified rules",
    },
    DescriptionRule {
        trigger: Trigger::Contains(&["hash"]),
        refinements: &[(&["password"], "Securely hashes passwords using bcrypt")],
        default: "Hashes data for secure storage",
    },
    DescriptionRule {
        trigger: Trigger::Contains(&["calculate"]),
        refinements: &[(&["discount"], "Calculates price discount based on percentage")],
        default: "Calculates and returns computed value",
    },
    DescriptionRule {
        trigger: Trigger::Contains(&["format"]),
        refinements: &[(&["price"], "Formats numeric price as currency string")],
        default: "Formats data for display presentation",
    },
    DescriptionRule {
        trigger: Trigger::Contains(&["generate"]),
        refinements: &[
            (&["id", "random"], "Generates random unique identifier"),
            (&["token"], "Generates authentication token"),
        ],
        default: "Generates new value or resource",
    },
    DescriptionRule {
        trigger: Trigger::Contains(&["auth"]),
        refinements: &[(&["token"], "Verifies authentication token")],
        default: "Authenticates user credentials",
    },
    DescriptionRule {
        trigger: Trigger::Contains(&["login"]),
        refinements: &[],
        default: "Authenticates user credentials and returns token",
    },
    DescriptionRule {
        trigger: Trigger::Contains(&["register"]),
        refinements: &[],
        default: "Creates new user account with validation",
    },
    DescriptionRule {
        trigger: Trigger::Prefix(&["get", "fetch"]),
        refinements: &[
            (&["all"], "Retrieves all items with optional filtering"),
            (&["byid"], "Retrieves specific item by ID"),
        ],
        default: "Retrieves data from storage",
    },
    DescriptionRule {
        trigger: Trigger::Prefix(&["create", "add"]),
        refinements: &[],
        default: "Creates new resource with validation",
    },
    DescriptionRule {
        trigger: Trigger::Prefix(&["update", "modify"]),
        refinements: &[],
        default: "Updates existing resource data",
    },
    DescriptionRule {
        trigger: Trigger::Prefix(&["delete", "remove"]),
        refinements: &[],
        default: "Deletes specified resource",
    },
    DescriptionRule {
        trigger: Trigger::Prefix(&["start"]),
        refinements: &[(&["server"], "Starts server on specified port")],
        default: "Starts specified service or process",
    },
];

/// Keywords inferred from a name fragment
pub const NAME_KEYWORDS: &[(&str, &[&str])] = &[
    ("validate", &["validation", "validate", "check"]),
    ("hash", &["hash", "encrypt", "security"]),
    ("calculate", &["calculate", "compute", "math"]),
    ("format", &["format", "display", "string"]),
    ("generate", &["generate", "create", "random"]),
    ("authenticate", &["auth", "login", "security"]),
    ("register", &["register", "signup", "user"]),
    ("get", &["retrieve", "fetch", "get"]),
    ("create", &["create", "add", "new"]),
    ("update", &["update", "modify", "change"]),
    ("delete", &["delete", "remove", "destroy"]),
];

/// Keywords inferred from tokens in the element's source
pub const CODE_KEYWORDS: &[(&[&str], &[&str])] = &[
    (&["bcrypt", "hash"], &["password", "hash", "security"]),
    (&["email", "@"], &["email", "validation"]),
    (&["jwt", "token"], &["authentication", "token", "security"]),
    (&["price", "currency"], &["price", "money", "format"]),
    (&["math.random", "random"], &["random", "generate", "id"]),
];

/// Description for the primary inferred keyword
pub const KEYWORD_DESCRIPTIONS: &[(&str, &str)] = &[
    ("validation", "Validates input data"),
    ("validate", "Validates input data"),
    ("hash", "Hashes data for secure storage"),
    ("encrypt", "Encrypts data for security"),
    ("calculate", "Calculates and returns computed value"),
    ("format", "Formats data for display"),
    ("generate", "Generates new value"),
    ("authenticate", "Authenticates user credentials"),
    ("register", "Registers new user account"),
    ("retrieve", "Retrieves data from storage"),
    ("create", "Creates new resource"),
    ("update", "Updates existing resource"),
    ("delete", "Deletes specified resource"),
];

const fn text(script: &'static str, python: &'static str, java: &'static str) -> ReturnText {
    ReturnText {
        script,
        python,
        java,
    }
}

pub const CURATED_RETURNS: &[(&str, ReturnText)] = &[
    (
        "validateemail",
        text(
            "{boolean} True if email format is valid, false otherwise",
            "bool: True if email format is valid, False otherwise",
            "boolean True if email format is valid, false otherwise",
        ),
    ),
    (
        "hashpassword",
        text(
            "{Promise<string>} Promise resolving to bcrypt hashed password",
            "str: Bcrypt hashed password string",
            "String Bcrypt hashed password string",
        ),
    ),
    (
        "calculatediscount",
        text(
            "{number} Final price after discount is applied",
            "float: Final price after discount is applied",
            "double Final price after discount is applied",
        ),
    ),
    (
        "formatprice",
        text(
            "{string} Formatted price string in USD currency format",
            "str: Formatted price string in USD currency format",
            "String Formatted price string in USD currency format",
        ),
    ),
    (
        "generaterandomid",
        text(
            "{string} Random alphanumeric identifier string",
            "str: Random alphanumeric identifier string",
            "String Random alphanumeric identifier string",
        ),
    ),
    (
        "authenticatetoken",
        text(
            "{void} Calls next() if valid, sends 401/403 response if invalid",
            "None: Calls next function or sends error response",
            "void Calls next function or sends error response",
        ),
    ),
    (
        "generatetoken",
        text(
            "{string} Signed JWT token string",
            "str: Signed JWT token string",
            "String Signed JWT token string",
        ),
    ),
    (
        "loginuser",
        text(
            "{void} Sends JSON response with token or error",
            "None: Sends JSON response with token or error",
            "void Sends JSON response with token or error",
        ),
    ),
    (
        "registeruser",
        text(
            "{void} Sends JSON response with user data and token or error",
            "None: Sends JSON response with user data and token or error",
            "void Sends JSON response with user data and token or error",
        ),
    ),
    (
        "getallproducts",
        text(
            "{void} Sends JSON response with filtered products array",
            "None: Sends JSON response with filtered products array",
            "void Sends JSON response with filtered products array",
        ),
    ),
    (
        "getproductbyid",
        text(
            "{void} Sends JSON response with product object or 404 error",
            "None: Sends JSON response with product object or 404 error",
            "void Sends JSON response with product object or 404 error",
        ),
    ),
    (
        "createproduct",
        text(
            "{void} Sends JSON response with created product or validation error",
            "None: Sends JSON response with created product or validation error",
            "void Sends JSON response with created product or validation error",
        ),
    ),
    (
        "updateproduct",
        text(
            "{void} Sends JSON response with updated product or error",
            "None: Sends JSON response with updated product or error",
            "void Sends JSON response with updated product or error",
        ),
    ),
    (
        "startserver",
        text(
            "{void} Starts Express server and logs port information",
            "None: Starts server and logs port information",
            "void Starts server and logs port information",
        ),
    ),
];

pub const RETURN_RULES: &[ReturnRule] = &[
    ReturnRule {
        trigger: Trigger::Prefix(&["validate", "check", "is"]),
        refinements: &[],
        default: text(
            "{boolean} True if validation passes, false otherwise",
            "bool: True if validation passes, False otherwise",
            "boolean True if validation passes, false otherwise",
        ),
    },
    ReturnRule {
        trigger: Trigger::Prefix(&["get", "fetch", "find"]),
        refinements: &[(
            &["all", "list"],
            text(
                "{Array} Array of retrieved items",
                "list: List of retrieved items",
                "Array Array of retrieved items",
            ),
        )],
        default: text(
            "{Object|null} Retrieved item or null if not found",
            "object|None: Retrieved item or None if not found",
            "Object Retrieved item or null if not found",
        ),
    },
    ReturnRule {
        trigger: Trigger::Prefix(&["create", "add", "insert"]),
        refinements: &[],
        default: text(
            "{Object} Created item object",
            "object: Created item object",
            "Object Created item object",
        ),
    },
    ReturnRule {
        trigger: Trigger::Prefix(&["update", "modify", "edit"]),
        refinements: &[],
        default: text(
            "{Object} Updated item object",
            "object: Updated item object",
            "Object Updated item object",
        ),
    },
    ReturnRule {
        trigger: Trigger::Prefix(&["delete", "remove"]),
        refinements: &[],
        default: text(
            "{boolean} True if deletion successful",
            "bool: True if deletion successful",
            "boolean True if deletion successful",
        ),
    },
    ReturnRule {
        trigger: Trigger::Prefix(&["calculate", "compute"]),
        refinements: &[],
        default: text(
            "{number} Calculated result",
            "float: Calculated result",
            "double Calculated result",
        ),
    },
    ReturnRule {
        trigger: Trigger::Prefix(&["format", "stringify"]),
        refinements: &[],
        default: text(
            "{string} Formatted string",
            "str: Formatted string",
            "String Formatted string",
        ),
    },
    ReturnRule {
        trigger: Trigger::Prefix(&["generate", "build"]),
        refinements: &[],
        default: text(
            "{string} Generated value",
            "str: Generated value",
            "String Generated value",
        ),
    },
    ReturnRule {
        trigger: Trigger::Contains(&["hash", "encrypt"]),
        refinements: &[],
        default: text(
            "{string} Hashed/encrypted string",
            "str: Hashed/encrypted string",
            "String Hashed/encrypted string",
        ),
    },
    ReturnRule {
        trigger: Trigger::Contains(&["middleware", "auth", "handler"]),
        refinements: &[],
        default: text(
            "{void} Middleware function with side effects",
            "None: Function with side effects",
            "void Function with side effects",
        ),
    },
    ReturnRule {
        trigger: Trigger::Contains(&["start", "init", "setup"]),
        refinements: &[],
        default: text(
            "{void} Initializes and starts service",
            "None: Initializes and starts service",
            "void Initializes and starts service",
        ),
    },
];

pub const GENERIC_RETURN: ReturnText = text(
    "{*} Function return value",
    "Return value of the function",
    "Function return value",
);

/// Look up a curated entry by normalized name
#[must_use]
pub fn lookup<T: Copy>(table: &[(&str, T)], normalized: &str) -> Option<T> {
    table
        .iter()
        .find(|(name, _)| *name == normalized)
        .map(|(_, value)| *value)
}

/// First refinement whose parts appear in the name, else the default
#[must_use]
pub fn refine<T: Copy>(refinements: &[(&[&str], T)], default: T, normalized: &str) -> T {
    refinements
        .iter()
        .find(|(parts, _)| parts.iter().any(|p| normalized.contains(p)))
        .map_or(default, |(_, value)| *value)
}
