//! First-sentence extraction for the `synopsis` template variable.

/// Returns the first sentence of the documentation text: everything up to
/// the first period that is followed by whitespace or end of text, with
/// runs of whitespace collapsed to single spaces.
///
/// Single-letter abbreviations ("J. Smith") are kept inside the sentence;
/// anything longer ends it.
pub fn synopsis(doc: &str) -> String {
    let flat: String = doc.split_whitespace().collect::<Vec<_>>().join(" ");

    let chars: Vec<char> = flat.chars().collect();
    for (i, &c) in chars.iter().enumerate() {
        if c != '.' {
            continue;
        }
        let at_end = i + 1 == chars.len();
        let followed_by_space = !at_end && chars[i + 1] == ' ';
        if !(at_end || followed_by_space) {
            continue;
        }
        // "J." style initial: single uppercase letter before the period.
        let initial = i >= 1
            && chars[i - 1].is_uppercase()
            && (i == 1 || chars[i - 2] == ' ');
        if !initial {
            return chars[..=i].iter().collect();
        }
    }
    flat
}
