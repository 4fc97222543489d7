//! Unit tests for similarity scoring.

use super::*;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

mod ratio_tests {
    use super::*;

    #[test]
    fn identical_strings_score_one() {
        assert_close(ratio("Warboss", "Warboss"), 1.0);
    }

    #[test]
    fn empty_strings_score_one() {
        assert_close(ratio("", ""), 1.0);
    }

    #[test]
    fn disjoint_strings_score_zero() {
        assert_close(ratio("abc", "xyz"), 0.0);
        assert_close(ratio("", "xyz"), 0.0);
    }

    #[test]
    fn single_typo() {
        // "Boy" matches: 2 * 3 / 8
        assert_close(ratio("Boyz", "Boys"), 0.75);
    }

    #[test]
    fn is_not_symmetric() {
        assert_close(ratio("tide", "diet"), 0.25);
        assert_close(ratio("diet", "tide"), 0.5);
    }

    #[test]
    fn counts_blocks_on_both_sides_of_longest_match() {
        // "ab" + "cd": 2 * 4 / 9
        assert_close(ratio("abxcd", "abcd"), 8.0 / 9.0);
    }

    #[test]
    fn is_case_sensitive() {
        assert_close(ratio("orks", "ORKS"), 0.0);
    }

    #[test]
    fn handles_multibyte_characters() {
        assert_close(ratio("Drükhari", "Drukhari"), 14.0 / 16.0);
    }

    #[test]
    fn long_strings_still_match_fully() {
        let long = "a".repeat(300);
        assert_close(ratio(&long, &long), 1.0);
    }
}

mod close_matches_tests {
    use super::*;

    #[test]
    fn returns_best_first() {
        let candidates = ["Warboss", "Boyz", "Gretchin"];
        let matches = close_matches("Boys", candidates, 3, 0.0);
        assert_eq!(matches[0], "Boyz");
        assert_eq!(matches.len(), 3);
    }

    #[test]
    fn limits_to_n() {
        let candidates = ["Warboss", "Boyz", "Gretchin"];
        assert_eq!(close_matches("Boys", candidates, 1, 0.0), vec!["Boyz"]);
    }

    #[test]
    fn zero_cutoff_always_returns_something() {
        let candidates = ["abc"];
        assert_eq!(close_matches("xyz", candidates, 1, 0.0), vec!["abc"]);
    }

    #[test]
    fn cutoff_filters_weak_matches() {
        let candidates = ["abc", "Boyz"];
        assert_eq!(close_matches("Boys", candidates, 5, 0.7), vec!["Boyz"]);
    }

    #[test]
    fn empty_candidates_yield_nothing() {
        let candidates: [&str; 0] = [];
        assert!(close_matches("Boyz", candidates, 1, 0.0).is_empty());
    }

    #[test]
    fn ties_prefer_greater_name() {
        // Both score 2 * 1 / 3
        assert_eq!(close_matches("a", ["ab", "ac"], 1, 0.0), vec!["ac"]);
        assert_eq!(close_matches("a", ["ac", "ab"], 1, 0.0), vec!["ac"]);
    }

    #[test]
    fn best_match_picks_top_candidate() {
        let candidates = ["Orks", "Necrons", "Tyranids"];
        assert_eq!(best_match("Orkz", candidates, 0.0), Some("Orks"));
        assert_eq!(best_match("Orkz", candidates, 0.9), None);
    }
}
