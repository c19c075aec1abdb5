//! Name normalization and validation.
//!
//! Both halves are pure: [`rules`] maps a raw name to a candidate clean name,
//! [`validate`](validate::validate) decides whether that candidate may reach
//! the filesystem. [`Candidate`] bundles the two results for one file.
pub mod rules;
pub mod validate;

pub use rules::{Rule, RuleSet, normalize};
pub use validate::{OffendingRune, Rejection, Verdict, invalid_substrings, validate};

/// A proposed rename for one dirty file, with its verdict.
///
/// Produced once per file per run and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    original: String,
    cleaned: String,
    verdict: Verdict,
}

impl Candidate {
    /// Normalize and validate `original` with the standard rule set.
    #[must_use]
    pub fn new(original: &str) -> Self {
        Self::from_cleaned(original, normalize(original))
    }

    /// Normalize and validate `original` with a custom rule set.
    #[must_use]
    pub fn with_rules(original: &str, rules: &RuleSet) -> Self {
        Self::from_cleaned(original, rules.normalize(original))
    }

    fn from_cleaned(original: &str, cleaned: String) -> Self {
        let verdict = validate(original, &cleaned);
        Self {
            original: original.to_string(),
            cleaned,
            verdict,
        }
    }

    /// The name as found on disk.
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The name after normalization.
    #[must_use]
    pub fn cleaned(&self) -> &str {
        &self.cleaned
    }

    /// The validator's verdict on [`cleaned`](Self::cleaned).
    #[must_use]
    pub const fn verdict(&self) -> &Verdict {
        &self.verdict
    }

    /// Returns `true` when the clean name may be written.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        self.verdict.is_accepted()
    }
}
