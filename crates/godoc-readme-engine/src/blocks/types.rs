/// The classification of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Ordinary prose, a maximal run of unindented non-blank lines.
    Paragraph,
    /// A single-line section heading.
    Heading,
    /// An indented run rendered as a fenced code block.
    Preformatted,
}

/// A maximal run of documentation lines sharing one classification.
///
/// Blocks cover every non-blank input line exactly once, in document order;
/// the blank lines separating blocks are implicit and reintroduced during
/// rendering. Preformatted blocks keep interior blank lines but never
/// trailing ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    /// The block's lines. Paragraph and preformatted lines keep their
    /// original trailing newline; a heading is stored as its trimmed text.
    pub lines: Vec<String>,
}
