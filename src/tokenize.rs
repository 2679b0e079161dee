use memchr::memchr;

/// Splits `text` on `'\n'` into the lines the diff operates on.
///
/// The separator is not part of the line, everything else is: a trailing
/// `'\r'` stays in the line content, so a `\r\n` versus `\n` change is
/// visible to the diff. Splitting the empty string yields a single empty
/// line, mirroring how an empty document still renders as one blank row.
pub(crate) fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    while let Some(newline) = memchr(b'\n', &bytes[start..]) {
        lines.push(&text[start..start + newline]);
        start += newline + 1;
    }
    lines.push(&text[start..]);
    lines
}

/// Splits a line into the words the intra-line diff aligns.
///
/// Characters accumulate into the current word; every non-alphanumeric
/// character closes the word and is included in it, so `"foo bar"` becomes
/// `["foo ", "bar"]` and punctuation travels with the word it terminates.
pub(crate) fn split_words(line: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start = 0;
    for (i, c) in line.char_indices() {
        if !c.is_alphanumeric() {
            let end = i + c.len_utf8();
            words.push(&line[start..end]);
            start = end;
        }
    }
    if start < line.len() {
        words.push(&line[start..]);
    }
    words
}

#[cfg(test)]
mod tests {
    use super::{split_lines, split_words};

    #[test]
    fn lines_keep_carriage_returns() {
        assert_eq!(split_lines("a\r\nb"), ["a\r", "b"]);
    }

    #[test]
    fn empty_text_is_one_empty_line() {
        assert_eq!(split_lines(""), [""]);
    }

    #[test]
    fn trailing_newline_adds_an_empty_line() {
        assert_eq!(split_lines("a\nb\n"), ["a", "b", ""]);
    }

    #[test]
    fn words_include_their_delimiter() {
        assert_eq!(split_words("foo bar"), ["foo ", "bar"]);
        assert_eq!(split_words("a+b-c"), ["a+", "b-", "c"]);
        assert_eq!(split_words("x(y, z)"), ["x(", "y,", " ", "z)"]);
    }

    #[test]
    fn consecutive_delimiters_are_single_words() {
        assert_eq!(split_words("++"), ["+", "+"]);
        assert_eq!(split_words("  "), [" ", " "]);
    }

    #[test]
    fn empty_line_has_no_words() {
        assert!(split_words("").is_empty());
    }

    #[test]
    fn multibyte_words() {
        assert_eq!(split_words("héllo wörld"), ["héllo ", "wörld"]);
    }
}
