//! Accept/reject verdicts for a proposed clean name.
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Any character outside the allow-list: ASCII printable, the bullet, the
/// right single quotation mark, and Unicode letters, numbers, punctuation and
/// non-spacing marks.
#[allow(clippy::expect_used)] // literal pattern
static UNSUPPORTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\x20-\x7E\x{2022}\x{2019}\p{L}\p{N}\p{P}\p{Mn}]")
        .expect("valid unsupported-character pattern")
});

/// One character the validator refuses, with its exact position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffendingRune {
    /// Offset of the character in bytes (UTF-8).
    pub byte_offset: usize,
    /// Offset of the character in chars.
    pub char_offset: usize,
    /// The offending text.
    pub value: String,
}

impl fmt::Display for OffendingRune {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code_points: Vec<String> = self
            .value
            .chars()
            .map(|c| format!("U+{:04X}", u32::from(c)))
            .collect();
        write!(f, "{}: {}", self.byte_offset, code_points.join(" "))
    }
}

/// Why a candidate name was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The rules did not change the name, so it was not recognized as dirty.
    Unchanged,
    /// Nothing usable is left: the clean name is blank, `.` or `..`.
    Empty,
    /// The clean name still holds characters outside the allow-list.
    UnsupportedCharacters(Vec<OffendingRune>),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unchanged => write!(f, "normalization made no change"),
            Self::Empty => write!(f, "normalization left no usable name"),
            Self::UnsupportedCharacters(runes) => {
                let positions: Vec<String> = runes.iter().map(ToString::to_string).collect();
                write!(
                    f,
                    "contains unsupported characters at [{}]",
                    positions.join(", ")
                )
            }
        }
    }
}

/// Outcome of [`validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The clean name may be written to disk.
    Accepted,
    /// The clean name must not reach the filesystem.
    Rejected(Rejection),
}

impl Verdict {
    /// Returns `true` for [`Verdict::Accepted`].
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Find every character of `name` outside the allow-list.
///
/// # Examples
///
/// ```
/// use zl_cleanup::naming::invalid_substrings;
///
/// let found = invalid_substrings("9781101152140\u{a0}\u{2022}\u{a0}Drive");
/// let offsets: Vec<usize> = found.iter().map(|r| r.byte_offset).collect();
/// assert_eq!(offsets, vec![13, 18]);
/// ```
#[must_use]
pub fn invalid_substrings(name: &str) -> Vec<OffendingRune> {
    UNSUPPORTED
        .find_iter(name)
        .map(|m| OffendingRune {
            byte_offset: m.start(),
            char_offset: name.get(..m.start()).map_or(0, |head| head.chars().count()),
            value: m.as_str().to_string(),
        })
        .collect()
}

/// Classify a `(raw, cleaned)` pair. The first matching rule wins:
/// an unchanged name, then a name that cannot stand as a file name, then
/// unsupported characters.
#[must_use]
pub fn validate(raw: &str, cleaned: &str) -> Verdict {
    if raw == cleaned {
        return Verdict::Rejected(Rejection::Unchanged);
    }
    if matches!(cleaned.trim(), "" | "." | "..") {
        return Verdict::Rejected(Rejection::Empty);
    }
    let offending = invalid_substrings(cleaned);
    if offending.is_empty() {
        Verdict::Accepted
    } else {
        Verdict::Rejected(Rejection::UnsupportedCharacters(offending))
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing, clippy::panic)]
mod tests {
    use super::*;

    fn byte_offsets(name: &str) -> Vec<usize> {
        invalid_substrings(name)
            .iter()
            .map(|r| r.byte_offset)
            .collect()
    }

    #[test]
    fn marker_only_names_leave_nothing_usable() {
        for (raw, cleaned) in [
            ("(Z-Library)", ""),
            ("(z-lib.org)", ""),
            ("..(z-lib.org)", "."),
            ("... (z-lib.org)", ". "),
        ] {
            assert_eq!(
                validate(raw, cleaned),
                Verdict::Rejected(Rejection::Empty),
                "{raw:?} -> {cleaned:?}"
            );
        }
        assert_eq!(
            Rejection::Empty.to_string(),
            "normalization left no usable name"
        );
    }

    #[test]
    fn unchanged_wins_over_empty() {
        assert_eq!(validate(".", "."), Verdict::Rejected(Rejection::Unchanged));
    }

    #[test]
    fn dotted_names_are_still_accepted() {
        assert_eq!(validate("a (z-lib.org)..pdf", "a.pdf"), Verdict::Accepted);
        assert_eq!(validate(".hidden (z-lib.org)", ".hidden"), Verdict::Accepted);
    }

    #[test]
    fn letters_with_diacritics_are_allowed() {
        assert!(invalid_substrings("Grønbaek").is_empty());
        assert!(invalid_substrings("Café Müller – naïve").is_empty());
    }

    #[test]
    fn bullet_and_apostrophe_are_allowed() {
        assert!(
            invalid_substrings("Mastering VS Code A Beginner\u{2019}s Guide \u{2022} CRC Press")
                .is_empty()
        );
    }

    #[test]
    fn ascii_symbols_are_allowed() {
        assert!(invalid_substrings("C++ & Go = $5 + ~`|<>^").is_empty());
    }

    #[test]
    fn no_break_space_offsets_are_exact() {
        let found = invalid_substrings("9781101152140\u{a0}\u{2022}\u{a0}Drive");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].byte_offset, 13);
        assert_eq!(found[0].char_offset, 13);
        assert_eq!(found[0].value, "\u{a0}");
        assert_eq!(found[1].byte_offset, 18);
        assert_eq!(found[1].char_offset, 15);
        assert_eq!(found[1].value, "\u{a0}");
    }

    #[test]
    fn offsets_match_original_fixture() {
        let name = "9781101152140 \u{2022}\u{a0}Drive \u{2022} by\u{a0}Daniel H. Pink \u{2022}\u{a0}Riverhead Books (z-lib.org)";
        assert_eq!(byte_offsets(name), vec![17, 31, 51]);
    }

    #[test]
    fn clean_name_has_no_offenders() {
        assert!(
            invalid_substrings("9781101152140 \u{2022} Drive \u{2022} by Daniel H. Pink")
                .is_empty()
        );
    }

    #[test]
    fn control_characters_and_replacement_char_are_rejected() {
        assert_eq!(byte_offsets("a\u{7}b"), vec![1]);
        assert_eq!(byte_offsets("a\u{fffd}b"), vec![1]);
        assert_eq!(byte_offsets("tab\there"), vec![3]);
    }

    #[test]
    fn unchanged_name_is_rejected_first() {
        // Even a name with bad characters reports the no-op first.
        assert_eq!(
            validate("a\u{a0}b", "a\u{a0}b"),
            Verdict::Rejected(Rejection::Unchanged)
        );
    }

    #[test]
    fn changed_clean_name_is_accepted() {
        assert!(validate("Book (z-lib.org).pdf", "Book.pdf").is_accepted());
    }

    #[test]
    fn changed_name_with_offenders_is_rejected() {
        let verdict = validate("Book\u{3000}x (z-lib.org)", "Book\u{3000}x");
        let Verdict::Rejected(Rejection::UnsupportedCharacters(runes)) = verdict else {
            panic!("expected unsupported characters, got {verdict:?}");
        };
        assert_eq!(runes.len(), 1);
        assert_eq!(runes[0].byte_offset, 4);
    }

    #[test]
    fn rejection_messages() {
        assert_eq!(
            Rejection::Unchanged.to_string(),
            "normalization made no change"
        );
        let rejection = Rejection::UnsupportedCharacters(invalid_substrings("x\u{a0}y\u{2028}"));
        assert_eq!(
            rejection.to_string(),
            "contains unsupported characters at [1: U+00A0, 4: U+2028]"
        );
    }
}
