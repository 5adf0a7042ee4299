const ILLEGAL: &str = ",.;:!?+*/=()[]{}_^°&§~%#@<\">\\";

/// Decides whether a line can stand as a section heading, returning its
/// trimmed text when it can.
///
/// A heading is at least two characters, starts with an uppercase letter,
/// ends with a letter or digit, and contains no sentence punctuation. An
/// apostrophe is allowed only in a possessive `'s`. The caller has already
/// checked the positional requirements (preceded and followed by a blank
/// line, next non-blank line unindented).
pub fn heading(line: &str) -> Option<&str> {
    let line = line.trim();

    // A lone letter between list paragraphs is content, not a heading.
    if line.chars().count() < 2 {
        return None;
    }
    let first = line.chars().next()?;
    if !first.is_alphabetic() || !first.is_uppercase() {
        return None;
    }
    let last = line.chars().next_back()?;
    if !last.is_alphanumeric() {
        return None;
    }
    if line.chars().any(|c| ILLEGAL.contains(c)) {
        return None;
    }

    // Allow "'" only as a possessive: "Peter's Friends", not "don't".
    let mut rest = line;
    while let Some(i) = rest.find('\'') {
        if !rest[i..].starts_with("'s") {
            return None;
        }
        rest = &rest[i + 2..];
        if !rest.is_empty() && !rest.starts_with(' ') {
            return None;
        }
    }

    Some(line)
}
