//! Release ordering for dotted-numeric versions with pre-release qualifiers
//!
//! Versions are normalized into dot-separated tokens, padded with `"0"` and
//! compared token by token:
//!
//! - "9.0.0-RC1" -> ["9", "0", "0", "", "RC", "1"]
//! - "8RC1" -> ["8", "RC", "1"]
//!
//! Numeric tokens compare numerically. Known qualifiers rank by their position
//! in [`PRE_RELEASE_ORDER`] and sort below everything else. The empty token a
//! hyphen leaves in front of a qualifier sorts below any number, which is what
//! makes "9.0.0" newer than both "9.0.0-RC1" and "9.0.0-SNAPSHOT".

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;

/// Pre-release qualifiers from least to most mature, matched case-insensitively
pub const PRE_RELEASE_ORDER: &[&str] = &["alpha", "beta", "RC", "M"];

static ALPHA_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]+").expect("alphabetic run pattern is valid"));

/// A classified version token
///
/// Variant order is significant: qualifiers < empty < numbers < text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    Qualifier(usize),
    Empty,
    /// Digits with leading zeros removed
    Number(&'a str),
    Text(&'a str),
}

impl<'a> Segment<'a> {
    fn classify(token: &'a str) -> Self {
        if token.is_empty() {
            return Segment::Empty;
        }
        if token.bytes().all(|b| b.is_ascii_digit()) {
            return Segment::Number(token.trim_start_matches('0'));
        }

        let stripped: String = token.chars().filter(|c| !c.is_ascii_digit()).collect();
        match PRE_RELEASE_ORDER
            .iter()
            .position(|q| q.eq_ignore_ascii_case(&stripped))
        {
            Some(rank) => Segment::Qualifier(rank),
            None => Segment::Text(token),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Segment::Qualifier(_) => 0,
            Segment::Empty => 1,
            Segment::Number(_) => 2,
            Segment::Text(_) => 3,
        }
    }
}

impl Ord for Segment<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Segment::Qualifier(a), Segment::Qualifier(b)) => a.cmp(b),
            // Arbitrary precision: longer digit strings are larger
            (Segment::Number(a), Segment::Number(b)) => {
                a.len().cmp(&b.len()).then_with(|| a.cmp(b))
            }
            (Segment::Text(a), Segment::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for Segment<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Normalize a version into dot-separated tokens
///
/// Hyphens become dots and every run of letters is isolated into its own
/// segment. Adjacent boundaries leave empty segments behind, and those are
/// kept: "1.0-RC1" and "1.0RC1" are different releases.
///
/// # Examples
/// - "9.0.0-beta1" -> "9.0.0..beta.1"
/// - "8RC1" -> "8.RC.1"
pub fn normalize(version: &str) -> String {
    let dotted = version.replace('-', ".");
    ALPHA_RUN.replace_all(&dotted, ".$0.").into_owned()
}

/// Split a normalized version into tokens
///
/// Interior empty tokens are kept. Trailing ones are dropped so that
/// "1.0-RC" and "1.0-RC.0" pad to the same sequence.
pub fn tokenize(normalized: &str) -> Vec<&str> {
    let mut tokens: Vec<&str> = normalized.split('.').collect();
    while tokens.last().is_some_and(|t| t.is_empty()) {
        tokens.pop();
    }
    tokens
}

/// Compare two versions by maturity
///
/// Returns `Ordering::Greater` when `a` is the newer release.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let a = normalize(a);
    let b = normalize(b);
    let a_tokens = tokenize(&a);
    let b_tokens = tokenize(&b);
    let len = a_tokens.len().max(b_tokens.len());

    (0..len)
        .map(|i| {
            let left = Segment::classify(a_tokens.get(i).copied().unwrap_or("0"));
            let right = Segment::classify(b_tokens.get(i).copied().unwrap_or("0"));
            left.cmp(&right)
        })
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Sort key for newest-first lists
pub fn newest_first(a: &str, b: &str) -> Ordering {
    compare_versions(b, a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("9.0.0-beta1", "9.0.0..beta.1")]
    #[case("8RC1", "8.RC.1")]
    #[case("1.0-beta-2", "1.0..beta..2")]
    #[case("10.2.0", "10.2.0")]
    fn normalize_isolates_letters_and_hyphens(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize(input), expected);
    }

    #[rstest]
    #[case("9.0.0-RC1", &["9", "0", "0", "", "RC", "1"])]
    #[case("1.0-SNAPSHOT", &["1", "0", "", "SNAPSHOT"])]
    #[case("8RC1", &["8", "RC", "1"])]
    #[case("1.0+build", &["1", "0+", "build"])]
    fn tokenize_keeps_interior_empty_segments(#[case] version: &str, #[case] expected: &[&str]) {
        assert_eq!(tokenize(&normalize(version)), expected);
    }

    #[rstest]
    #[case("10.0.0", "9.0.0")] // numeric, not lexical
    #[case("9.0.0-beta1", "9.0.0-alpha1")]
    #[case("9.0.0-RC1", "9.0.0-beta1")]
    #[case("9.0.0-M1", "9.0.0-RC1")]
    #[case("9.0.0", "9.0.0-RC1")] // release beats pre-release
    #[case("9.0.0", "9.0.0-M5")]
    #[case("9.0.0-M2", "9.0.0-M1")]
    #[case("9.0.0-RC10", "9.0.0-RC9")]
    #[case("9.0.0-rc1", "9.0.0-BETA1")] // qualifiers are case-insensitive
    #[case("1.5.1", "1.5")]
    #[case("1.0-beta-2", "1.0-beta-1")]
    #[case("1.0-RC-1", "1.0-beta-2")]
    #[case("6.0.0-beta1", "1.5-RC7")]
    #[case("1.0", "1.0-SNAPSHOT")] // "0" beats the empty token before the qualifier
    #[case("1.0", "1.0-Final")]
    #[case("1.0-SNAPSHOT", "1.0-RC1")] // unknown qualifiers rank after known ones
    #[case("1.0-RC1", "1.0RC1")] // hyphenated qualifier beats a glued one
    #[case("8-RC-1", "8RC1")]
    #[case("1.0-ea", "1.0-alpha")]
    #[case("1.0-zeta", "1.0-eta")] // neither known: lexical
    #[case("1.0+build", "1.0")] // "0+" is plain text and ranks after any number
    #[case("100000000000000000000.0", "99999999999999999999.0")]
    fn compare_versions_orders_newer_first(#[case] newer: &str, #[case] older: &str) {
        assert_eq!(compare_versions(newer, older), Ordering::Greater);
        assert_eq!(compare_versions(older, newer), Ordering::Less);
        assert_eq!(newest_first(newer, older), Ordering::Less);
    }

    #[rstest]
    #[case("1.0", "1.0.0")]
    #[case("1.0.0", "1.0.0.0")]
    #[case("01.2", "1.02")]
    #[case("9.0.0-RC1", "9.0.0.RC1")]
    #[case("1.0-RC", "1.0-RC.0")]
    fn compare_versions_treats_padded_and_equivalent_forms_as_equal(
        #[case] a: &str,
        #[case] b: &str,
    ) {
        assert_eq!(compare_versions(a, b), Ordering::Equal);
    }

    #[test]
    fn compare_versions_is_a_total_order() {
        let samples = [
            "10.0.0",
            "10.0.0-M1",
            "9.0.0",
            "9.0.0-RC1",
            "9.0.0-RC2",
            "9.0.0-M1",
            "9.0.0-beta1",
            "9.0.0-alpha1",
            "9.0",
            "9.0.0.0",
            "8.16.0",
            "8RC1",
            "1.0-SNAPSHOT",
            "1.0-Final",
            "1.0",
            "1.0-RC1",
            "1.0RC1",
            "8-RC-1",
            "1.0+build",
            "1.0-beta-2",
            "1.0-zeta",
            "1.4-rc1",
            "1.3.0-beta3",
        ];

        for a in samples {
            assert_eq!(compare_versions(a, a), Ordering::Equal, "reflexive: {a}");
            for b in samples {
                let ab = compare_versions(a, b);
                assert_eq!(ab, compare_versions(b, a).reverse(), "antisymmetric: {a} {b}");
                for c in samples {
                    let bc = compare_versions(b, c);
                    if ab == bc {
                        assert_eq!(compare_versions(a, c), ab, "transitive: {a} {b} {c}");
                    }
                }
            }
        }
    }
}
