#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::indexing_slicing,
    clippy::panic
)]
//! Integration tests for the public naming API.
//!
//! These run the standard rule set and the validator together, the way the
//! cleanup loop and the `check` command use them.

use zl_cleanup::naming::{Candidate, Rejection, Verdict, invalid_substrings, normalize, validate};

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// The marker and the dash are removed in one pass.
#[test]
fn marker_and_dash_are_cleaned() {
    assert_eq!(
        normalize("Handbook of Graph Grammars \u{2014} (Z-Library).pdf"),
        "Handbook of Graph Grammars -.pdf"
    );
}

/// Look-alike spaces and repeated separators collapse to one.
#[test]
fn spacing_and_periods_collapse() {
    assert_eq!(
        normalize("Deep\u{a0}\u{a0}Work (z-lib.org)..epub"),
        "Deep Work.epub"
    );
}

/// Normalizing a clean name is a no-op.
#[test]
fn normalize_is_idempotent() {
    let once = normalize("A\u{2013}B\tC (z-lib.org).pdf");
    assert_eq!(normalize(&once), once);
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Offsets point at each refused character.
#[test]
fn offending_characters_are_located() {
    let found = invalid_substrings("Song \u{266b} and \u{1f4d6}.pdf");
    let located: Vec<(usize, usize, &str)> = found
        .iter()
        .map(|r| (r.byte_offset, r.char_offset, r.value.as_str()))
        .collect();
    assert_eq!(located, vec![(5, 5, "\u{266b}"), (13, 11, "\u{1f4d6}")]);
    assert_eq!(found[1].to_string(), "13: U+1F4D6");
}

/// An unchanged name wins over unsupported characters.
#[test]
fn unchanged_is_checked_first() {
    assert_eq!(
        validate("\u{266b}.pdf", "\u{266b}.pdf"),
        Verdict::Rejected(Rejection::Unchanged)
    );
}

// ---------------------------------------------------------------------------
// Candidate
// ---------------------------------------------------------------------------

/// A symbol that survives normalization rejects the candidate.
#[test]
fn candidate_with_symbol_is_rejected() {
    let candidate = Candidate::new("Music \u{266b} (z-lib.org).pdf");
    assert_eq!(candidate.cleaned(), "Music \u{266b}.pdf");
    let Verdict::Rejected(rejection) = candidate.verdict() else {
        panic!("expected a rejection");
    };
    assert_eq!(
        rejection.to_string(),
        "contains unsupported characters at [6: U+266B]"
    );
}

/// Bullets and typographic apostrophes are kept.
#[test]
fn candidate_keeps_allowed_punctuation() {
    let candidate = Candidate::new("A Beginner\u{2019}s Guide \u{2022} CRC (z-lib.org).pdf");
    assert!(candidate.is_accepted());
    assert_eq!(
        candidate.cleaned(),
        "A Beginner\u{2019}s Guide \u{2022} CRC.pdf"
    );
}

/// A name made only of the marker leaves nothing to link.
#[test]
fn candidate_without_a_name_is_rejected() {
    let candidate = Candidate::new("(Z-Library)");
    assert_eq!(candidate.cleaned(), "");
    assert_eq!(candidate.verdict(), &Verdict::Rejected(Rejection::Empty));
}
