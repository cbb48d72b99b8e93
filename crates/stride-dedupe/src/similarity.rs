//! Name similarity scoring.

/// Exclusive lower bound for grouping: two names match only when their
/// similarity is strictly greater than 0.7.
pub const SIMILARITY_THRESHOLD: f64 = 0.7;

/// Normalized Levenshtein similarity in `[0, 1]`, where 1 means identical:
/// `1 - distance / max(len(a), len(b))`. Two empty strings score 1.
///
/// Callers pass lower-cased names; this function does no normalization of
/// its own. O(len(a) × len(b)) — fine for human names, not for long text.
pub fn name_similarity(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b)
}

/// Whether similarity is strictly greater than [`SIMILARITY_THRESHOLD`].
///
/// Evaluated in integer arithmetic (`10·(n − d) > 7·n`), because the
/// floating-point rendering of `1 - d/n` can land a hair above 0.7 when the
/// true ratio is exactly 0.7, and the bound is exclusive.
pub fn exceeds_threshold(a: &str, b: &str) -> bool {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        // Both empty: similarity 1, over any threshold below 1.
        return true;
    }
    let distance = strsim::levenshtein(a, b);
    10 * (max_len - distance) > 7 * max_len
}

#[cfg(test)]
mod tests {
    use super::{exceeds_threshold, name_similarity};

    #[test]
    fn identical_strings_score_one() {
        assert_eq!(name_similarity("john smith", "john smith"), 1.0);
    }

    #[test]
    fn both_empty_score_one() {
        assert_eq!(name_similarity("", ""), 1.0);
        assert!(exceeds_threshold("", ""));
    }

    #[test]
    fn symmetric() {
        let ab = name_similarity("john smith", "jon smith");
        let ba = name_similarity("jon smith", "john smith");
        assert_eq!(ab, ba);
    }

    #[test]
    fn one_deletion_in_ten_chars_scores_point_nine() {
        // "john smith" (10 chars) vs "jon smith" (9 chars): distance 1.
        assert!((name_similarity("john smith", "jon smith") - 0.9).abs() < 1e-12);
    }

    #[test]
    fn exactly_seventy_percent_does_not_exceed_the_exclusive_bound() {
        // 10 chars, distance 3: similarity is exactly 0.7.
        assert!(!exceeds_threshold("abcdefghij", "abcdefgxyz"));
        // 10 chars, distance 2: similarity 0.8.
        assert!(exceeds_threshold("abcdefghij", "abcdefghxy"));
    }

    #[test]
    fn disjoint_names_score_low() {
        assert!(name_similarity("alice jones", "bob lee") < 0.3);
        assert!(!exceeds_threshold("alice jones", "bob lee"));
    }
}
