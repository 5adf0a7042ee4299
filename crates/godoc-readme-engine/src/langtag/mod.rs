//! # Fence Language Tags
//!
//! Best-effort language identification for preformatted blocks, so that
//! GitHub's syntax highlighting picks the right lexer. Tags are lowercase
//! linguist-style identifiers.
//!
//! Go is checked first with a handful of substring hints, before the
//! generic analyzer runs. The generic token scorer is tuned for arbitrary
//! text and reads short Go snippets poorly, while Go is by far the most
//! common language in godoc comments. The cost is a false positive on
//! deliberately Go-shaped snippets of other languages; the ordering is
//! deliberate and should stay manual-check-first.

pub mod analyze;

/// Substrings that mark a snippet as Go: the package clause, an anonymous
/// function literal, a short variable declaration, the ubiquitous fmt
/// qualifier, and a var declaration.
const GO_HINTS: [&str; 5] = ["package ", "func(", " := ", "fmt.", "var "];

/// Picks a fence language tag for a code snippet, or `None` for a plain
/// untagged fence.
pub fn detect(code: &str) -> Option<&'static str> {
    if GO_HINTS.iter().any(|hint| code.contains(hint)) {
        return Some("go");
    }
    analyze::best_guess(code)
}
