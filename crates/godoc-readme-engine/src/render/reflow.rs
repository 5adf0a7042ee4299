use std::sync::LazyLock;

use regex::Regex;

/// One indentation unit for list continuation paragraphs.
pub const INDENT_UNIT: &str = "    ";

/// A paragraph whose first line looks like "1." / "42." opens an ordered
/// list item.
static NUMBERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.").expect("numbered item pattern"));

/// Layout decision for one paragraph of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Emit the paragraph as-is.
    Plain,
    /// Emit every line prefixed by one [`INDENT_UNIT`], nesting the
    /// paragraph under the preceding list item.
    Indented,
    /// List terminator ("..." alone): emit a blank line in its place.
    Elided,
}

/// Assigns a [`Layout`] to each paragraph of one section.
///
/// A section is the run of paragraphs between two headings. Once a
/// paragraph opens a list item (numbered or "* " bullet), every following
/// paragraph of the section is a continuation of that item until the next
/// item, a terminator, or the section's end. List state never crosses
/// sections.
///
/// A leading digit or asterisk on an ordinary paragraph is indistinguishable
/// from a list marker here; that false positive is inherent to the source
/// convention and accepted.
pub fn layout_section(paragraphs: &[&[String]]) -> Vec<Layout> {
    let mut in_list = false;
    paragraphs
        .iter()
        .map(|par| {
            let leadin = par[0].as_str();
            if par.len() == 1 && is_terminator(leadin) {
                in_list = false;
                Layout::Elided
            } else if NUMBERED_ITEM.is_match(leadin) || leadin.starts_with("* ") {
                in_list = true;
                Layout::Plain
            } else if in_list {
                Layout::Indented
            } else {
                Layout::Plain
            }
        })
        .collect()
}

fn is_terminator(line: &str) -> bool {
    line.trim_end_matches(['\r', '\n']) == "..."
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn section(pars: &[&[&str]]) -> Vec<Vec<String>> {
        pars.iter()
            .map(|p| p.iter().map(|l| l.to_string()).collect())
            .collect()
    }

    fn layout(pars: &[Vec<String>]) -> Vec<Layout> {
        let slices: Vec<&[String]> = pars.iter().map(Vec::as_slice).collect();
        layout_section(&slices)
    }

    #[test]
    fn plain_paragraphs_stay_plain() {
        let pars = section(&[&["One.\n"], &["Two.\n"]]);
        assert_eq!(layout(&pars), vec![Layout::Plain, Layout::Plain]);
    }

    #[test]
    fn numbered_item_indents_followers() {
        let pars = section(&[&["1. Apple\n"], &["Good fruit.\n"], &["2. Pear\n"], &["Also.\n"]]);
        assert_eq!(
            layout(&pars),
            vec![Layout::Plain, Layout::Indented, Layout::Plain, Layout::Indented]
        );
    }

    #[test]
    fn bullet_item_indents_followers() {
        let pars = section(&[&["* First\n"], &["Detail.\n"]]);
        assert_eq!(layout(&pars), vec![Layout::Plain, Layout::Indented]);
    }

    #[test]
    fn terminator_resets_list_state() {
        let pars = section(&[&["1. X\n"], &["Y\n"], &["...\n"], &["Z\n"]]);
        assert_eq!(
            layout(&pars),
            vec![Layout::Plain, Layout::Indented, Layout::Elided, Layout::Plain]
        );
    }

    #[test]
    fn multiline_ellipsis_paragraph_is_not_a_terminator() {
        let pars = section(&[&["1. X\n"], &["...\n", "more\n"]]);
        assert_eq!(layout(&pars), vec![Layout::Plain, Layout::Indented]);
    }

    #[test]
    fn asterisk_without_space_is_not_a_bullet() {
        let pars = section(&[&["*emphasis* only\n"], &["Next.\n"]]);
        assert_eq!(layout(&pars), vec![Layout::Plain, Layout::Plain]);
    }

    #[test]
    fn terminator_without_list_is_still_elided() {
        let pars = section(&[&["...\n"], &["Z\n"]]);
        assert_eq!(layout(&pars), vec![Layout::Elided, Layout::Plain]);
    }
}
