//! Email safety scoring module
//!
//! Rule-based phishing heuristics over lower-cased email content.

pub mod checks;
pub mod rules;
pub mod scorer;
pub mod types;

pub use scorer::SafetyScorer;
pub use types::*;
