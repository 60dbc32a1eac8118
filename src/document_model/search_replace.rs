use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplaceError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// Literal find-and-replace over a flat string.
///
/// Patterns are matched as plain text; no character in either the pattern
/// or the replacement has special meaning.
pub struct SearchReplace;

impl SearchReplace {
    /// Replace every non-overlapping occurrence of `pattern` in `text`,
    /// scanning left to right. Text produced by a replacement is never
    /// scanned again. Returns the number of replacements made.
    pub fn replace_all(
        text: &mut String,
        pattern: &str,
        replacement: &str,
    ) -> Result<usize, ReplaceError> {
        if pattern.is_empty() {
            return Err(ReplaceError::InvalidArgument("search pattern must not be empty"));
        }

        let replacements = text.match_indices(pattern).count();
        if replacements > 0 {
            *text = text.replace(pattern, replacement);
        }

        log::debug!("replaced {replacements} occurrence(s) of {pattern:?} with {replacement:?}");
        Ok(replacements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replaced(text: &str, pattern: &str, replacement: &str) -> (String, usize) {
        let mut text = text.to_string();
        let count = SearchReplace::replace_all(&mut text, pattern, replacement).unwrap();
        (text, count)
    }

    #[test]
    fn test_replace_all_occurrences() {
        assert_eq!(replaced("aXbXcX", "X", "YZ"), ("aYZbYZcYZ".to_string(), 3));
    }

    #[test]
    fn test_replacement_is_not_rescanned() {
        assert_eq!(replaced("aXbX", "X", "X2"), ("aX2bX2".to_string(), 2));
        assert_eq!(replaced("ab", "a", "aa"), ("aab".to_string(), 1));
    }

    #[test]
    fn test_non_overlapping_left_to_right() {
        assert_eq!(replaced("aaa", "aa", "b"), ("ba".to_string(), 1));
        assert_eq!(replaced("aaaa", "aa", "b"), ("bb".to_string(), 2));
    }

    #[test]
    fn test_no_match_leaves_text() {
        assert_eq!(replaced("hello", "xyz", "abc"), ("hello".to_string(), 0));
        assert_eq!(replaced("", "x", "y"), (String::new(), 0));
    }

    #[test]
    fn test_empty_replacement_deletes() {
        assert_eq!(replaced("foo bar foo", "foo", ""), (" bar ".to_string(), 2));
    }

    #[test]
    fn test_metacharacters_are_literal() {
        assert_eq!(replaced("a.b.c", ".", "-"), ("a-b-c".to_string(), 2));
        assert_eq!(replaced("x*y", "*", "$1"), ("x$1y".to_string(), 1));
        assert_eq!(replaced("(a)", "(a)", "[b]"), ("[b]".to_string(), 1));
    }

    #[test]
    fn test_long_pattern_is_matched() {
        let pattern = "ab".repeat(200_000);
        let text = format!("x{pattern}y{pattern}");
        assert_eq!(replaced(&text, &pattern, "-"), ("x-y-".to_string(), 2));
    }

    #[test]
    fn test_empty_pattern_is_rejected() {
        let mut text = "abc".to_string();
        let result = SearchReplace::replace_all(&mut text, "", "x");
        assert!(matches!(result, Err(ReplaceError::InvalidArgument(_))));
        assert_eq!(text, "abc");
    }
}
