//! # Markdown Rendering
//!
//! Walks the segmented blocks and emits the final Markdown text.
//!
//! Rendering is three bounded passes:
//!
//! 1. **Collection**: blocks become output items. Headings and fenced code
//!    are fixed text; paragraphs are recorded in the current section and
//!    left pending. A heading closes the current section.
//! 2. **Reflow** (`reflow`): each section's paragraphs get a layout
//!    decision (plain, indented continuation, or elided terminator).
//! 3. **Flattening**: items and their layouts are joined into one string.
//!
//! The renderer never fails. Unterminated constructs at end of input were
//! already closed by the segmenter, and heuristic misreads (a paragraph
//! taken for a heading, a leading digit taken for a list marker) are
//! rendered as decided, not reported.

pub mod reflow;

use crate::blocks::{BlockKind, segment};
use crate::langtag;

use reflow::{INDENT_UNIT, Layout, layout_section};

/// Renders godoc-convention documentation text as Markdown.
///
/// Headings become `## ` headings, indented runs become fenced code blocks
/// tagged by [`langtag::detect`], and paragraphs are reflowed per section so
/// that implicit ordered/bulleted lists nest their continuation paragraphs.
pub fn render_markdown(text: &str) -> String {
    let mut items: Vec<Item> = vec![];
    // Paragraph positions (indices into `items`) per section; a heading
    // closes the current section.
    let mut sections: Vec<Vec<usize>> = vec![];
    let mut current: Vec<usize> = vec![];

    for block in segment(text) {
        match block.kind {
            BlockKind::Heading => {
                sections.push(std::mem::take(&mut current));
                items.push(Item::Verbatim(format!("## {}\n\n", block.lines[0])));
            }
            BlockKind::Preformatted => {
                items.push(Item::Verbatim(fence(&block.lines)));
            }
            BlockKind::Paragraph => {
                current.push(items.len());
                items.push(Item::Paragraph(block.lines));
            }
        }
    }
    sections.push(current);

    let mut layouts = vec![Layout::Plain; items.len()];
    for section in &sections {
        let paragraphs: Vec<&[String]> = section
            .iter()
            .filter_map(|&i| match &items[i] {
                Item::Paragraph(lines) => Some(lines.as_slice()),
                Item::Verbatim(_) => None,
            })
            .collect();
        for (&i, layout) in section.iter().zip(layout_section(&paragraphs)) {
            layouts[i] = layout;
        }
    }

    flatten(&items, &layouts)
}

/// One output unit awaiting flattening.
#[derive(Debug)]
enum Item {
    /// Finished text: a heading or a fenced code block, blank line included.
    Verbatim(String),
    /// A paragraph pending its section's layout decision.
    Paragraph(Vec<String>),
}

fn flatten(items: &[Item], layouts: &[Layout]) -> String {
    let mut out = String::new();
    for (item, layout) in items.iter().zip(layouts) {
        match item {
            Item::Verbatim(text) => out.push_str(text),
            Item::Paragraph(lines) => {
                match layout {
                    Layout::Plain => {
                        for line in lines {
                            out.push_str(line);
                        }
                    }
                    Layout::Indented => {
                        for line in lines {
                            out.push_str(INDENT_UNIT);
                            out.push_str(line);
                        }
                    }
                    Layout::Elided => out.push('\n'),
                }
                // Blank separator after every paragraph. When the last line
                // had no terminator this doubles as it.
                out.push('\n');
            }
        }
    }
    out
}

fn fence(lines: &[String]) -> String {
    let code: String = lines.concat();
    let tag = langtag::detect(&code).unwrap_or("");

    let mut out = format!("```{tag}\n");
    out.push_str(&code);
    if !code.ends_with('\n') {
        out.push('\n');
    }
    out.push_str("```\n\n");
    out
}
