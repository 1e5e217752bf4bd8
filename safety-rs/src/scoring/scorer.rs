//! Email safety scoring engine
//!
//! Starts every message at 100 and subtracts a fixed number of points for
//! each heuristic that fires. Deductions are independent and additive, and
//! the result is clamped at 0.

use regex::Regex;

use super::checks;
use super::rules::*;
use super::types::*;

/// Phishing heuristics scorer
///
/// Holds no per-request state; one instance can be shared across threads.
pub struct SafetyScorer {
    sender_pattern: Regex,
}

impl SafetyScorer {
    /// Create a new scorer
    pub fn new() -> Self {
        Self {
            sender_pattern: Regex::new(SENDER_PATTERN).expect("sender pattern is a valid regex"),
        }
    }

    /// Score lower-cased email content
    pub fn score(&self, content: &str) -> ScoreResult {
        self.assess(content).into()
    }

    /// Score lower-cased email content and keep every deduction
    pub fn assess(&self, content: &str) -> Assessment {
        let mut deductions = Vec::new();

        let suspicious_words = checks::matched_suspicious_words(content);
        for word in &suspicious_words {
            deductions.push(Deduction::new(
                "SUSPICIOUS_WORD",
                SUSPICIOUS_WORD_PENALTY,
                format!("Contains suspicious phrase '{}'", word),
            ));
        }

        if checks::has_urgent_tone(content) {
            deductions.push(Deduction::new(
                "URGENT_TONE",
                URGENT_TONE_PENALTY,
                "Uses urgent or pressuring language",
            ));
        }

        if checks::has_links(content) {
            deductions.push(Deduction::new(
                "CONTAINS_LINK",
                LINK_PENALTY,
                "Contains a link",
            ));
        }

        if checks::has_excessive_caps(content) {
            deductions.push(Deduction::new(
                "EXCESSIVE_CAPS",
                EXCESSIVE_CAPS_PENALTY,
                format!("More than {} words in capitals", MAX_CAPS_WORDS),
            ));
        }

        if checks::requests_sensitive_info(content) {
            deductions.push(Deduction::new(
                "SENSITIVE_INFO_REQUEST",
                SENSITIVE_INFO_PENALTY,
                "Asks for credentials or financial details",
            ));
        }

        let sender_domain = self.sender_domain(content);
        let verified_sender = sender_domain.is_some_and(checks::is_verified_domain);
        if !verified_sender {
            let description = match sender_domain {
                Some(domain) => format!("Sender domain '{}' is not a known company domain", domain),
                None => "No sender address found".to_string(),
            };
            deductions.push(Deduction::new(
                "UNVERIFIED_SENDER",
                UNVERIFIED_SENDER_PENALTY,
                description,
            ));
        }

        if !suspicious_words.is_empty() {
            let count = suspicious_words.len() as i32;
            deductions.push(Deduction::new(
                "SUSPICIOUS_WORD_COUNT",
                count * SUSPICIOUS_COUNT_PENALTY,
                format!("{} suspicious phrases found", count),
            ));
        }

        let total: i32 = deductions.iter().map(|d| d.points).sum();
        let score = (STARTING_SCORE - total).clamp(0, STARTING_SCORE) as u8;

        Assessment {
            score,
            band: SafetyBand::from_score(score),
            suspicious_words: suspicious_words.into_iter().map(str::to_string).collect(),
            sender_domain: sender_domain.map(str::to_string),
            verified_sender,
            deductions,
        }
    }

    /// Domain of the first `local@domain` substring
    pub fn sender_domain<'a>(&self, content: &'a str) -> Option<&'a str> {
        self.sender_pattern
            .captures(content)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

impl Default for SafetyScorer {
    fn default() -> Self {
        Self::new()
    }
}
