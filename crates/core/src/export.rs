//! Reporting helpers: word counts and export naming.

/// Counts whitespace-delimited words.
///
/// Used by the front end to show the size delta between the source and the
/// rewritten article.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Derives the filename the rewritten article is exported under.
///
/// The original identifier's file stem is prefixed with `rewritten_` and the
/// extension is forced to `.txt`. URL inputs and unnamed documents fall back
/// to `rewritten_article.txt`.
///
/// # Example
///
/// ```rust
/// use restyle_core::export_filename;
///
/// assert_eq!(export_filename(Some("report.docx")), "rewritten_report.txt");
/// assert_eq!(export_filename(None), "rewritten_article.txt");
/// ```
pub fn export_filename(origin: Option<&str>) -> String {
    let stem = origin
        .map(|name| {
            // Keep only the final path segment of file-like identifiers.
            let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
            match base.rsplit_once('.') {
                Some((stem, _)) if !stem.is_empty() => stem,
                _ => base,
            }
        })
        .filter(|stem| !stem.is_empty())
        .unwrap_or("article");

    format!("rewritten_{}.txt", stem)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("", 0)]
    #[case("one", 1)]
    #[case("The cat sat.", 3)]
    #[case("  spaced   out\nwords\t here ", 4)]
    fn test_word_count(#[case] text: &str, #[case] expected: usize) {
        assert_eq!(word_count(text), expected);
    }

    #[rstest]
    #[case(Some("article.txt"), "rewritten_article.txt")]
    #[case(Some("report.docx"), "rewritten_report.txt")]
    #[case(Some("paper.final.pdf"), "rewritten_paper.final.txt")]
    #[case(Some("uploads/post.md"), "rewritten_post.txt")]
    #[case(Some("noext"), "rewritten_noext.txt")]
    #[case(None, "rewritten_article.txt")]
    fn test_export_filename(#[case] origin: Option<&str>, #[case] expected: &str) {
        assert_eq!(export_filename(origin), expected);
    }
}
