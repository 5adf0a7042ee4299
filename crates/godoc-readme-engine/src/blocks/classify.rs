/// Local facts about a single source line.
///
/// This is phase 1 of segmentation: each line is classified on its own,
/// without reference to surrounding context. Line terminators are kept so
/// that flattening the final document reproduces them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass {
    /// The line text, including its trailing newline when present.
    pub text: String,
    /// Whether the line is empty or whitespace only.
    pub is_blank: bool,
    /// Byte length of the leading space/tab run.
    pub indent_len: usize,
}

impl LineClass {
    /// Whether the line starts with an indentation marker (preformatted
    /// convention: a tab or at least one space).
    pub fn is_indented(&self) -> bool {
        self.indent_len > 0
    }
}

/// Classifies individual lines of godoc comment text.
pub struct DocLineClassifier;

impl DocLineClassifier {
    pub fn classify(&self, line: &str) -> LineClass {
        let trimmed = line.trim_end_matches(['\r', '\n']);
        LineClass {
            text: line.to_string(),
            is_blank: trimmed.trim().is_empty(),
            indent_len: indent_len(trimmed),
        }
    }
}

fn indent_len(line: &str) -> usize {
    line.len() - line.trim_start_matches([' ', '\t']).len()
}

/// Strips the maximal common whitespace prefix of the non-blank lines.
///
/// Applied to one preformatted run at a time so code samples keep only
/// their relative indentation.
pub fn unindent(lines: &mut [LineClass]) {
    let Some(first) = lines.iter().find(|l| !l.is_blank) else {
        return;
    };

    let mut prefix = &first.text[..first.indent_len];
    for line in lines.iter().filter(|l| !l.is_blank) {
        prefix = common_prefix(prefix, &line.text[..line.indent_len]);
    }
    let n = prefix.len();
    if n == 0 {
        return;
    }

    for line in lines.iter_mut().filter(|l| !l.is_blank) {
        line.text.drain(..n);
        line.indent_len -= n;
    }
}

fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let end = a
        .bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x == y)
        .count();
    &a[..end]
}
