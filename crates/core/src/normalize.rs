//! Whitespace normalization for extracted text.
//!
//! Extracted content, HTML pages especially, arrives full of indentation,
//! blank lines, and column-aligned runs of spaces. [`normalize`] collapses
//! all of it into single-spaced prose.

/// Collapses whitespace artifacts into clean single-spaced prose.
///
/// Each line is trimmed and split on double-space runs; the surviving
/// fragments are trimmed again, empties dropped, and everything joined with
/// single spaces. Left-to-right order is preserved and the function is
/// idempotent: normalizing already-normalized text returns it unchanged.
///
/// # Example
///
/// ```rust
/// use restyle_core::normalize;
///
/// assert_eq!(normalize("  Hello   world \n\n again  "), "Hello world again");
/// ```
pub fn normalize(text: &str) -> String {
    let mut fragments: Vec<&str> = Vec::new();

    for line in text.lines() {
        for fragment in line.trim().split("  ") {
            let fragment = fragment.trim();
            if !fragment.is_empty() {
                fragments.push(fragment);
            }
        }
    }

    fragments.join(" ")
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Hello  world\n", "Hello world")]
    #[case("  leading and trailing  ", "leading and trailing")]
    #[case("one\ntwo\nthree", "one two three")]
    #[case("a    b", "a b")]
    #[case("a   b", "a b")]
    #[case("\n\n\n", "")]
    #[case("", "")]
    #[case("already normal", "already normal")]
    #[case("tab\tseparated", "tab\tseparated")]
    fn test_normalize_cases(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize(input), expected);
    }

    #[rstest]
    #[case("Hello  world\n")]
    #[case("  a\n b   c\n\n  d  ")]
    #[case("plain sentence")]
    #[case("")]
    fn test_normalize_idempotent(#[case] input: &str) {
        let once = normalize(input);
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_normalize_never_leaves_double_spaces() {
        let inputs = [
            "a  b   c    d",
            "  x  \n  y  ",
            "word",
            "   ",
            "a \n  \n b",
        ];
        for input in inputs {
            let out = normalize(input);
            assert!(!out.contains("  "), "double space in {:?}", out);
            assert_eq!(out, out.trim());
        }
    }

    #[test]
    fn test_normalize_preserves_order() {
        assert_eq!(normalize("first  second\nthird"), "first second third");
    }
}
