//! Converts godoc-convention documentation text into GitHub-flavored
//! Markdown.
//!
//! The pipeline has two stages: [`blocks::segment`] splits raw comment text
//! into typed blocks (paragraphs, headings, preformatted runs), and
//! [`render::render_markdown`] walks those blocks, detects implicit
//! ordered/bulleted lists, indents continuation paragraphs, and emits fenced
//! code blocks tagged by [`langtag::detect`].
//!
//! The engine is pure text-in/text-out: no I/O, no shared state, and no
//! error surface. Any input string produces an output string; the empty
//! string produces the empty document.

pub mod blocks;
pub mod langtag;
pub mod render;
pub mod synopsis;

pub use blocks::{Block, BlockKind, segment};
pub use render::render_markdown;
pub use synopsis::synopsis;
