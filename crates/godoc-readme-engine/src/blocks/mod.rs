//! # Block Segmentation
//!
//! Two-phase segmentation of godoc comment text.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified
//!    independently into a [`LineClass`] holding local facts (blank status,
//!    indentation length, text).
//!
//! 2. **Block Construction** (`builder`): a [`BlockBuilder`] walks the
//!    classified lines with bounded lookahead and emits [`Block`]s.
//!
//! ## Conventions
//!
//! - A blank line always closes the current paragraph.
//! - A run of indented-or-blank lines forms one preformatted block
//!   (trailing blank lines are pushed back out of the run).
//! - An unindented single line surrounded by blanks, whose next non-blank
//!   line is also unindented, is a heading candidate; see `heading`.
//!
//! Heading detection is a heuristic inherited from the godoc comment
//! convention. A short ordinary paragraph can be taken for a heading; that
//! ambiguity is accepted, not resolved.

pub mod builder;
pub mod classify;
pub mod heading;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{DocLineClassifier, LineClass};
pub use types::{Block, BlockKind};

/// Segments raw documentation text into an ordered block sequence.
///
/// Indentation is significant as received: a document whose every line is
/// indented is one preformatted block. Dedenting happens per preformatted
/// run inside the builder, never across the whole document.
pub fn segment(text: &str) -> Vec<Block> {
    let classifier = DocLineClassifier;
    let lines: Vec<LineClass> = text
        .split_inclusive('\n')
        .map(|l| classifier.classify(l))
        .collect();
    BlockBuilder::new(&lines).build()
}
