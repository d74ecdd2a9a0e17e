//! Annotated blocks
//!
//! The replacement emitted for one text run: one (original, transliterated)
//! pair per visual line, plus the run's exact source text so the block can be
//! collapsed back without loss.

use crate::layout::LineSegment;
use crate::transliterate::transliterate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedLine {
    pub original: String,
    pub transliterated: String,
}

impl AnnotatedLine {
    pub fn new(original: &str) -> Self {
        Self {
            original: original.to_string(),
            transliterated: transliterate(original),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedBlock {
    /// Leaf text exactly as read before any normalization
    pub source: String,
    pub lines: Vec<AnnotatedLine>,
}

impl AnnotatedBlock {
    /// Build a block from the segments measured on `measured`, the leaf text
    /// after break normalization. An empty segment list becomes one line
    /// holding the whole run.
    pub fn from_segments(source: &str, measured: &str, segments: &[LineSegment]) -> Self {
        let lines = if segments.is_empty() {
            vec![AnnotatedLine::new(measured)]
        } else {
            segments
                .iter()
                .map(|segment| AnnotatedLine::new(segment.slice(measured)))
                .collect()
        };
        Self {
            source: source.to_string(),
            lines,
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_are_transliterated_per_segment() {
        let text = "ᏓᎵᏆ ᎠᏂᏬᏂᏍᎪ";
        let segments = [LineSegment::new(0, 9), LineSegment::new(10, text.len())];
        let block = AnnotatedBlock::from_segments(text, text, &segments);

        assert_eq!(block.line_count(), 2);
        assert_eq!(block.lines[0].original, "ᏓᎵᏆ");
        assert_eq!(block.lines[0].transliterated, "daliqua");
        assert_eq!(block.lines[1].original, "ᎠᏂᏬᏂᏍᎪ");
        assert_eq!(block.lines[1].transliterated, "aniwonisgo");
    }

    #[test]
    fn test_empty_segments_fall_back_to_whole_run() {
        let block = AnnotatedBlock::from_segments("ᎠᎾ", "ᎠᎾ", &[]);
        assert_eq!(block.lines, vec![AnnotatedLine::new("ᎠᎾ")]);
    }

    #[test]
    fn test_source_keeps_unnormalized_text() {
        let source = "Ꭰ\u{00A0}Ꮎ";
        let measured = "Ꭰ Ꮎ";
        let block = AnnotatedBlock::from_segments(source, measured, &[LineSegment::whole(measured)]);
        assert_eq!(block.source, source);
        assert_eq!(block.lines[0].original, measured);
    }
}
