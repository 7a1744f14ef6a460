//! Guess normalization and answer checking.
//!
//! Only the player's guess is stripped of punctuation. The canonical answer
//! is lower-cased and split into words but otherwise taken literally, so an
//! answer like "Lake Victoria." only matches the token "victoria." as written.

/// Characters removed from a guess before comparison.
pub const GUESS_PUNCTUATION: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_', '`', '~',
    '(', ')',
];

/// Normalize a raw guess into a comparable token.
///
/// Strips [`GUESS_PUNCTUATION`], lower-cases, then trims surrounding
/// whitespace.
pub fn normalize(raw: &str) -> String {
    let stripped: String = raw
        .chars()
        .filter(|c| !GUESS_PUNCTUATION.contains(c))
        .collect();
    stripped.to_lowercase().trim().to_string()
}

/// Decide whether `guess` is a correct answer to `canonical`.
///
/// A guess is correct when, after [`normalize`], it equals one of the
/// whitespace-separated words of the lower-cased canonical answer, or the
/// whole canonical answer once all whitespace is removed from both sides.
pub fn is_correct(guess: &str, canonical: &str) -> bool {
    let guess = normalize(guess);
    if guess.is_empty() {
        return false;
    }

    let canonical = canonical.to_lowercase();
    if canonical.split_whitespace().any(|token| token == guess) {
        return true;
    }

    let compact_canonical = compact(&canonical);
    !compact_canonical.is_empty() && compact(&guess) == compact_canonical
}

fn compact(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_punctuation_case_and_whitespace() {
        assert_eq!(normalize("  Tom-Cruise! "), "tomcruise");
        assert_eq!(normalize("(Apollo 13)"), "apollo 13");
        assert_eq!(normalize("{a}=b_c`~"), "abc");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("..."), "");
    }

    #[test]
    fn normalize_keeps_unlisted_symbols() {
        assert_eq!(normalize("O'Brien?"), "o'brien?");
        assert_eq!(normalize("AC+DC"), "ac+dc");
    }

    #[test]
    fn full_answer_is_correct() {
        assert!(is_correct("Tom Cruise", "Tom Cruise"));
    }

    #[test]
    fn punctuation_and_case_are_tolerated() {
        assert!(is_correct("tom-cruise!", "Tom Cruise"));
        assert!(is_correct("CRUISE.", "Tom Cruise"));
    }

    #[test]
    fn single_token_is_correct() {
        assert!(is_correct("Cruise", "Tom Cruise"));
        assert!(is_correct("tom", "Tom Cruise"));
    }

    #[test]
    fn empty_canonical_never_matches() {
        assert!(!is_correct("Tom Cruise", ""));
        assert!(!is_correct("", ""));
        assert!(!is_correct("   ", "   "));
    }

    #[test]
    fn empty_guess_is_wrong() {
        assert!(!is_correct("", "Tom Cruise"));
        assert!(!is_correct("!!!", "Tom Cruise"));
    }

    #[test]
    fn canonical_punctuation_is_literal() {
        // The answer's own trailing period stays part of its token.
        assert!(!is_correct("Victoria", "Lake Victoria."));
        assert!(is_correct("lake", "Lake Victoria."));
    }

    #[test]
    fn whole_answer_ignores_spacing() {
        // Whitespace is dropped from both sides before the whole-answer check.
        assert!(is_correct("T om Cr uise", "Tom Cruise"));
        assert!(is_correct("tomcruise", "Tom Cruise"));
        assert!(is_correct("Edward  Scissor hands", "Edward Scissorhands"));
        assert!(!is_correct("T om", "Tom Cruise"));
    }

    #[test]
    fn partial_words_do_not_match() {
        assert!(!is_correct("Cru", "Tom Cruise"));
        assert!(!is_correct("Tom Hanks", "Tom Cruise"));
    }
}
