//! Fixed phrase lists and the sender domain registry
//!
//! All phrases are lowercase; callers lower-case content before matching.

/// Phrases that hint at phishing intent. Each one found costs
/// [`SUSPICIOUS_WORD_PENALTY`] plus [`SUSPICIOUS_COUNT_PENALTY`].
pub const SUSPICIOUS_WORDS: &[&str] = &[
    "free",
    "urgent",
    "limited time",
    "act now",
    "winner",
    "money",
    "cash prize",
    "click here",
    "unsecured",
    "bank account",
    "confirm",
    "account suspended",
    "win",
    "exclusive offer",
    "risk-free",
    "urgent action",
    "guaranteed",
    "don't miss",
    "limited offer",
    "act fast",
    "immediate response",
    "verify your identity",
    "account locked",
    "security breach",
    "password",
    "social security number",
    "sensitive information",
    "bank details",
    "update account",
];

/// Pressure language
pub const URGENT_PHRASES: &[&str] = &[
    "act fast",
    "hurry",
    "limited time",
    "now",
    "don't miss",
    "immediate",
    "last chance",
    "expires soon",
];

/// Requests for credentials or financial details
pub const SENSITIVE_INFO_PHRASES: &[&str] = &[
    "password",
    "bank account",
    "social security",
    "credit card",
    "account number",
    "login credentials",
];

/// Company name to official sending domain
pub const VALID_DOMAINS: &[(&str, &str)] = &[
    ("microsoft", "microsoft.com"),
    ("google", "google.com"),
    ("apple", "apple.com"),
    ("amazon", "amazon.com"),
    ("facebook", "facebook.com"),
    ("tesla", "tesla.com"),
];

/// Substrings that mark content as carrying a link
pub const LINK_MARKERS: &[&str] = &["http", "www"];

/// First `local@domain` run; group 1 is the domain.
///
/// Word characters are letters, any numeric character (so `²` counts) and
/// `_`. Combining marks end the run.
pub const SENDER_PATTERN: &str = r"[\p{L}\p{N}_.-]+@([\p{L}\p{N}_.-]+)";

/// Score before any deduction
pub const STARTING_SCORE: i32 = 100;
/// Per suspicious phrase found
pub const SUSPICIOUS_WORD_PENALTY: i32 = 25;
/// Any urgent phrase
pub const URGENT_TONE_PENALTY: i32 = 30;
/// Any link marker, charged once
pub const LINK_PENALTY: i32 = 40;
/// More than [`MAX_CAPS_WORDS`] uppercase tokens
pub const EXCESSIVE_CAPS_PENALTY: i32 = 50;
/// Any sensitive-info phrase
pub const SENSITIVE_INFO_PENALTY: i32 = 60;
/// Missing sender or domain outside [`VALID_DOMAINS`]
pub const UNVERIFIED_SENDER_PENALTY: i32 = 20;
/// Extra charge per suspicious phrase, applied after all other checks
pub const SUSPICIOUS_COUNT_PENALTY: i32 = 10;

/// Uppercase tokens tolerated before the caps penalty applies
pub const MAX_CAPS_WORDS: usize = 5;
