//! Scoring types and data structures

use serde::Serialize;

/// Score and advisory message returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    /// Safety score, 0 (phishing) to 100 (safe)
    pub safety_score: u8,
    /// Advisory message for the score band
    pub result_message: String,
}

/// Score ranges, each with a fixed advisory message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SafetyBand {
    /// Below 20
    CriticalDanger,
    /// 20 to 39
    ExtremeWarning,
    /// 40 to 59
    Warning,
    /// 60 to 79
    Caution,
    /// 80 and above
    AppearsSafe,
}

impl SafetyBand {
    /// Band for a clamped score
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=19 => SafetyBand::CriticalDanger,
            20..=39 => SafetyBand::ExtremeWarning,
            40..=59 => SafetyBand::Warning,
            60..=79 => SafetyBand::Caution,
            _ => SafetyBand::AppearsSafe,
        }
    }

    /// Advisory message shown to the user
    pub fn message(&self) -> &'static str {
        match self {
            SafetyBand::CriticalDanger => {
                "Critical Danger: this email is almost certainly a phishing attempt; do not engage."
            }
            SafetyBand::ExtremeWarning => {
                "Extreme Warning: highly suspicious, likely phishing; proceed with caution."
            }
            SafetyBand::Warning => {
                "Warning: contains significant suspicious elements; might be phishing."
            }
            SafetyBand::Caution => {
                "Caution: some suspicious elements; be wary of links and personal-info requests."
            }
            SafetyBand::AppearsSafe => "Appears safe, but always verify the source.",
        }
    }
}

/// A single point deduction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deduction {
    /// Rule name
    pub rule: String,
    /// Points subtracted
    pub points: i32,
    /// Description
    pub description: String,
}

impl Deduction {
    pub(crate) fn new(rule: &str, points: i32, description: impl Into<String>) -> Self {
        Self {
            rule: rule.to_string(),
            points,
            description: description.into(),
        }
    }
}

/// Full breakdown of how a score was reached
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assessment {
    /// Final clamped score
    pub score: u8,
    /// Band for the final score
    pub band: SafetyBand,
    /// Suspicious phrases found, in list order
    pub suspicious_words: Vec<String>,
    /// Domain of the first email-like substring, if any
    pub sender_domain: Option<String>,
    /// Sender domain matched the registry
    pub verified_sender: bool,
    /// Deductions in the order they were applied
    pub deductions: Vec<Deduction>,
}

impl Assessment {
    /// Sum of all deductions before clamping
    pub fn total_deducted(&self) -> i32 {
        self.deductions.iter().map(|d| d.points).sum()
    }
}

impl From<Assessment> for ScoreResult {
    fn from(assessment: Assessment) -> Self {
        Self {
            safety_score: assessment.score,
            result_message: assessment.band.message().to_string(),
        }
    }
}
