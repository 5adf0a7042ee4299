use super::{
    classify::LineClass,
    heading::heading,
    types::{Block, BlockKind},
};

/// State machine that turns classified lines into blocks.
///
/// Operates on the whole line slice rather than line-at-a-time because
/// heading detection needs two lines of lookahead and preformatted runs
/// need to exclude their trailing blank lines.
pub struct BlockBuilder<'a> {
    lines: &'a [LineClass],
    para: Vec<String>,
    out: Vec<Block>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new(lines: &'a [LineClass]) -> Self {
        Self {
            lines,
            para: vec![],
            out: vec![],
        }
    }

    pub fn build(mut self) -> Vec<Block> {
        let lines = self.lines;
        let n = lines.len();
        let mut last_was_blank = false;
        let mut last_was_heading = false;

        let mut i = 0;
        while i < n {
            let line = &lines[i];

            if line.is_blank {
                self.flush_paragraph();
                last_was_blank = true;
                i += 1;
                continue;
            }

            if line.is_indented() {
                self.flush_paragraph();

                // Grow the run over indented and blank lines, then back off
                // the trailing blanks.
                let mut j = i + 1;
                while j < n && (lines[j].is_blank || lines[j].is_indented()) {
                    j += 1;
                }
                while j > i && lines[j - 1].is_blank {
                    j -= 1;
                }

                let mut pre: Vec<LineClass> = lines[i..j].to_vec();
                super::classify::unindent(&mut pre);
                self.out.push(Block {
                    kind: BlockKind::Preformatted,
                    lines: pre.into_iter().map(|l| l.text).collect(),
                });
                i = j;
                last_was_heading = false;
                continue;
            }

            // A heading is a lone unindented line between blanks whose next
            // non-blank line is also unindented. Two consecutive headings
            // are not allowed; the second reads as a paragraph.
            if last_was_blank
                && !last_was_heading
                && i + 2 < n
                && lines[i + 1].is_blank
                && !lines[i + 2].is_blank
                && !lines[i + 2].is_indented()
                && let Some(head) = heading(&line.text)
            {
                self.out.push(Block {
                    kind: BlockKind::Heading,
                    lines: vec![head.to_string()],
                });
                i += 2;
                last_was_heading = true;
                continue;
            }

            last_was_blank = false;
            last_was_heading = false;
            self.para.push(line.text.clone());
            i += 1;
        }

        // EOF closes any open paragraph.
        self.flush_paragraph();
        self.out
    }

    fn flush_paragraph(&mut self) {
        if self.para.is_empty() {
            return;
        }
        self.out.push(Block {
            kind: BlockKind::Paragraph,
            lines: std::mem::take(&mut self.para),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::segment;
    use pretty_assertions::assert_eq;

    fn kinds(blocks: &[Block]) -> Vec<BlockKind> {
        blocks.iter().map(|b| b.kind).collect()
    }

    #[test]
    fn empty_input_yields_no_blocks() {
        assert_eq!(segment(""), vec![]);
    }

    #[test]
    fn single_paragraph() {
        let blocks = segment("Hello there.\nSecond line.\n");
        assert_eq!(kinds(&blocks), vec![BlockKind::Paragraph]);
        assert_eq!(blocks[0].lines, vec!["Hello there.\n", "Second line.\n"]);
    }

    #[test]
    fn blank_line_splits_paragraphs() {
        let blocks = segment("One.\n\nTwo.\n");
        assert_eq!(kinds(&blocks), vec![BlockKind::Paragraph, BlockKind::Paragraph]);
    }

    #[test]
    fn heading_between_paragraphs() {
        let blocks = segment("Intro text.\n\nUsage\n\nRun the tool.\n");
        assert_eq!(
            kinds(&blocks),
            vec![BlockKind::Paragraph, BlockKind::Heading, BlockKind::Paragraph]
        );
        assert_eq!(blocks[1].lines, vec!["Usage"]);
    }

    #[test]
    fn first_line_is_never_a_heading() {
        // No preceding blank line, so "Usage" opens a paragraph.
        let blocks = segment("Usage\n\nRun the tool.\n");
        assert_eq!(kinds(&blocks), vec![BlockKind::Paragraph, BlockKind::Paragraph]);
    }

    #[test]
    fn heading_needs_following_text() {
        let blocks = segment("Intro.\n\nUsage\n");
        assert_eq!(kinds(&blocks), vec![BlockKind::Paragraph, BlockKind::Paragraph]);
    }

    #[test]
    fn trailing_period_blocks_heading() {
        let blocks = segment("Intro.\n\nUsage.\n\nRun the tool.\n");
        assert_eq!(
            kinds(&blocks),
            vec![BlockKind::Paragraph, BlockKind::Paragraph, BlockKind::Paragraph]
        );
    }

    #[test]
    fn pre_block_keeps_interior_blanks_drops_trailing() {
        let blocks = segment("Text:\n\n\tfoo()\n\n\tbar()\n\n\nAfter.\n");
        assert_eq!(
            kinds(&blocks),
            vec![BlockKind::Paragraph, BlockKind::Preformatted, BlockKind::Paragraph]
        );
        assert_eq!(blocks[1].lines, vec!["foo()\n", "\n", "bar()\n"]);
    }

    #[test]
    fn document_of_only_preformatted_text() {
        let blocks = segment("\tfoo()\n\tbar()\n");
        assert_eq!(kinds(&blocks), vec![BlockKind::Preformatted]);
        assert_eq!(blocks[0].lines, vec!["foo()\n", "bar()\n"]);
    }

    #[test]
    fn pre_block_preserves_relative_indentation() {
        let blocks = segment("Text:\n\n  if x {\n    y()\n  }\n");
        assert_eq!(blocks[1].lines, vec!["if x {\n", "  y()\n", "}\n"]);
    }

    #[test]
    fn unterminated_final_line_closes_at_eof() {
        let blocks = segment("One.\n\nTwo with no newline");
        assert_eq!(blocks[1].lines, vec!["Two with no newline"]);
    }

    #[test]
    fn blocks_cover_every_nonblank_line_in_order() {
        let text = "Intro text.\n\nUsage\n\nDo this:\n\n\tfoo()\n\nDone.\n";
        let blocks = segment(text);

        let expected: Vec<String> = text
            .split_inclusive('\n')
            .filter(|l| !l.trim().is_empty())
            .map(|l| l.trim().to_string())
            .collect();
        let got: Vec<String> = blocks
            .iter()
            .flat_map(|b| b.lines.iter())
            .filter(|l| !l.trim().is_empty())
            .map(|l| l.trim().to_string())
            .collect();
        assert_eq!(got, expected);
    }
}
