//! Ordered rule table that turns a dirty file name into a clean one.
use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Whitespace look-alikes replaced by an ordinary space.
const SPACE_VARIANTS: &[&str] = &["\u{a0}", "\u{202f}", "\u{2007}", "\t"];

/// Download-source annotations, removed case-sensitively.
///
/// The spaced spellings come first so the separating space goes with them.
const MARKERS: &[&str] = &[" (z-lib.org)", " (Z-Library)", "(z-lib.org)", "(Z-Library)"];

/// Dash-like characters normalized to an ASCII hyphen.
const DASH_VARIANTS: &[&str] = &[
    "\u{2014}", // em dash
    "\u{2e3a}", // two-em dash
    "\u{2e3b}", // three-em dash
    "\u{fe58}", // small em dash
    "\u{2013}", // en dash
    "\u{2012}", // figure dash
];

/// The standard rule set, compiled once.
static STANDARD: LazyLock<RuleSet> = LazyLock::new(RuleSet::standard);

/// A single normalization step.
#[derive(Debug, Clone)]
pub enum Rule {
    /// Replace every occurrence of each pattern, in order, with `replacement`.
    Substitute {
        /// Short rule name, used in debug output.
        name: &'static str,
        /// Literal patterns, applied one after the other.
        patterns: &'static [&'static str],
        /// Replacement text for every pattern.
        replacement: &'static str,
    },
    /// Collapse every run matched by `pattern` into its first capture group.
    Collapse {
        /// Short rule name, used in debug output.
        name: &'static str,
        /// Pattern with exactly one capture group holding the kept character.
        pattern: Regex,
    },
}

impl Rule {
    /// Rule name as shown in debug output and snapshots.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Substitute { name, .. } | Self::Collapse { name, .. } => name,
        }
    }

    /// Apply this rule to `input`, borrowing when nothing changes.
    #[must_use]
    pub fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
        match self {
            Self::Substitute {
                patterns,
                replacement,
                ..
            } => {
                let mut out = Cow::Borrowed(input);
                for pattern in *patterns {
                    if out.contains(pattern) {
                        out = Cow::Owned(out.replace(pattern, replacement));
                    }
                }
                out
            }
            Self::Collapse { pattern, .. } => pattern.replace_all(input, "$1"),
        }
    }
}

/// An ordered list of [`Rule`]s; later rules see the output of earlier ones.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// The rule set used for every cleanup run.
    ///
    /// 1. `spaces`: no-break and figure spaces, tabs → space
    /// 2. `markers`: strip `(z-lib.org)` / `(Z-Library)` annotations
    /// 3. `dashes`: dash look-alikes → `-`
    /// 4. `whitespace-runs`: collapse repeated whitespace
    /// 5. `period-runs`: collapse repeated periods
    #[must_use]
    #[allow(clippy::expect_used)] // literal patterns
    pub fn standard() -> Self {
        Self::new()
            .with_rule(Rule::Substitute {
                name: "spaces",
                patterns: SPACE_VARIANTS,
                replacement: " ",
            })
            .with_rule(Rule::Substitute {
                name: "markers",
                patterns: MARKERS,
                replacement: "",
            })
            .with_rule(Rule::Substitute {
                name: "dashes",
                patterns: DASH_VARIANTS,
                replacement: "-",
            })
            .with_rule(Rule::Collapse {
                name: "whitespace-runs",
                pattern: Regex::new(r"(\s)\s+").expect("valid whitespace pattern"),
            })
            .with_rule(Rule::Collapse {
                name: "period-runs",
                pattern: Regex::new(r"(\.)\.+").expect("valid period pattern"),
            })
    }

    /// An empty rule set.
    #[must_use]
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append `rule` after the existing rules.
    #[must_use]
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// The rules in application order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Run every rule over `raw` in order.
    #[must_use]
    pub fn normalize(&self, raw: &str) -> String {
        self.rules
            .iter()
            .fold(raw.to_string(), |name, rule| rule.apply(&name).into_owned())
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}

/// Normalize `raw` with the standard rule set.
///
/// Pure, deterministic and total.
///
/// # Examples
///
/// ```
/// use zl_cleanup::naming::normalize;
///
/// assert_eq!(
///     normalize("Handbook of Graph Grammars \u{2014} (Z-Library).pdf"),
///     "Handbook of Graph Grammars -.pdf"
/// );
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    STANDARD.normalize(raw)
}
