//! Boolean content checks used by the scorer
//!
//! Every check is a plain substring or token test over already
//! lower-cased content.

use super::rules::{
    LINK_MARKERS, MAX_CAPS_WORDS, SENSITIVE_INFO_PHRASES, SUSPICIOUS_WORDS, URGENT_PHRASES,
    VALID_DOMAINS,
};

/// Suspicious phrases present in the content, in list order
pub fn matched_suspicious_words(content: &str) -> Vec<&'static str> {
    SUSPICIOUS_WORDS
        .iter()
        .copied()
        .filter(|word| content.contains(word))
        .collect()
}

/// Content uses pressure language
pub fn has_urgent_tone(content: &str) -> bool {
    URGENT_PHRASES.iter().any(|phrase| content.contains(phrase))
}

/// Content carries something that looks like a link
pub fn has_links(content: &str) -> bool {
    LINK_MARKERS.iter().any(|marker| content.contains(marker))
}

/// More than [`MAX_CAPS_WORDS`] whitespace-separated tokens are uppercase
pub fn has_excessive_caps(content: &str) -> bool {
    content
        .split_whitespace()
        .filter(|token| is_uppercase_token(token))
        .count()
        > MAX_CAPS_WORDS
}

/// Content asks for credentials or financial details
pub fn requests_sensitive_info(content: &str) -> bool {
    SENSITIVE_INFO_PHRASES
        .iter()
        .any(|phrase| content.contains(phrase))
}

/// Domain equals one of the registered company domains, ignoring case
pub fn is_verified_domain(domain: &str) -> bool {
    let domain = domain.to_lowercase();
    VALID_DOMAINS
        .iter()
        .any(|(_, valid)| domain == valid.to_lowercase())
}

/// At least one cased character and no lowercase ones, so "WIN!" and
/// "ACT2" count while "123" does not.
fn is_uppercase_token(token: &str) -> bool {
    token.chars().any(char::is_uppercase) && !token.chars().any(char::is_lowercase)
}
