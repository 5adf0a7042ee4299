//! Generic language scorer: tokenize the snippet, count keyword hits per
//! language profile, and return the best guess if it clears a confidence
//! threshold.

use logos::Logos;

/// Tokens the scorer cares about. Anything else lexes as an error and is
/// skipped; the scorer only looks at identifier-shaped words plus a leading
/// shebang.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Interpreter line, e.g. `#!/usr/bin/env python3`.
    #[regex(r"#![^\n]*")]
    Shebang,

    /// An identifier or keyword.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Word,
}

/// Minimum fraction of words that must be profile keywords before a guess
/// is trusted. Below this the fence stays untagged.
const MIN_CONFIDENCE: f64 = 0.15;

struct Profile {
    name: &'static str,
    /// Keywords are matched as whole words, case-sensitively unless
    /// `ignore_case` is set.
    keywords: &'static [&'static str],
    ignore_case: bool,
}

/// Ordered by how commonly each language shows up in documentation
/// snippets; on a score tie the earlier profile wins.
const PROFILES: &[Profile] = &[
    Profile {
        name: "shell",
        keywords: &[
            "echo", "export", "cd", "fi", "esac", "done", "sudo", "grep", "curl", "mkdir", "then",
            "elif", "git", "install",
        ],
        ignore_case: false,
    },
    Profile {
        name: "python",
        keywords: &[
            "def", "import", "from", "class", "self", "lambda", "None", "True", "False", "print",
            "return", "yield", "pass",
        ],
        ignore_case: false,
    },
    Profile {
        name: "javascript",
        keywords: &[
            "function", "const", "let", "var", "console", "require", "document", "undefined",
            "null", "async", "await", "new", "return",
        ],
        ignore_case: false,
    },
    Profile {
        name: "rust",
        keywords: &[
            "fn", "let", "mut", "impl", "pub", "struct", "enum", "match", "crate", "use", "trait",
            "self",
        ],
        ignore_case: false,
    },
    Profile {
        name: "c",
        keywords: &[
            "int", "char", "void", "printf", "include", "sizeof", "struct", "return", "malloc",
            "free", "NULL",
        ],
        ignore_case: false,
    },
    Profile {
        name: "ruby",
        keywords: &[
            "def", "end", "puts", "require", "module", "nil", "attr_accessor", "do", "unless",
        ],
        ignore_case: false,
    },
    Profile {
        name: "java",
        keywords: &[
            "public", "static", "void", "class", "extends", "implements", "final", "System",
            "new", "import",
        ],
        ignore_case: false,
    },
    Profile {
        name: "sql",
        keywords: &[
            "select", "from", "where", "insert", "update", "delete", "create", "table", "join",
            "group", "order",
        ],
        ignore_case: true,
    },
];

/// Returns the best-guess language tag for a snippet, or `None` when no
/// profile clears [`MIN_CONFIDENCE`].
pub fn best_guess(code: &str) -> Option<&'static str> {
    if let Some(tag) = from_shebang(code) {
        return Some(tag);
    }

    let words: Vec<&str> = TokenKind::lexer(code)
        .spanned()
        .filter_map(|(tok, span)| match tok {
            Ok(TokenKind::Word) => Some(&code[span]),
            _ => None,
        })
        .collect();
    if words.is_empty() {
        return None;
    }

    let mut best: Option<(&'static str, f64)> = None;
    for profile in PROFILES {
        let hits = words.iter().filter(|w| profile.matches(w)).count();
        let score = hits as f64 / words.len() as f64;
        if score >= MIN_CONFIDENCE && best.is_none_or(|(_, s)| score > s) {
            best = Some((profile.name, score));
        }
    }
    best.map(|(name, _)| name)
}

impl Profile {
    fn matches(&self, word: &str) -> bool {
        if self.ignore_case {
            self.keywords
                .iter()
                .any(|k| k.eq_ignore_ascii_case(word))
        } else {
            self.keywords.contains(&word)
        }
    }
}

fn from_shebang(code: &str) -> Option<&'static str> {
    if !code.starts_with("#!") {
        return None;
    }
    let line = code.lines().next()?;
    if line.contains("python") {
        Some("python")
    } else if line.contains("ruby") {
        Some("ruby")
    } else if line.contains("node") {
        Some("javascript")
    } else if line.contains("sh") {
        // sh, bash, zsh, dash...
        Some("shell")
    } else {
        None
    }
}
