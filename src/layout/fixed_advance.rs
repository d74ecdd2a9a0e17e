//! Fixed-advance reference layout
//!
//! Lays words out greedily on a grid of `columns` cells per line. Every
//! scalar value is one cell wide, whitespace between words collapses to a
//! single cell, whitespace at a wrap point hangs off the end of the line, and
//! a word wider than the line overflows instead of being split.

use super::LineGeometry;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAdvanceGeometry {
    pub columns: usize,
    pub line_height: f64,
}

impl FixedAdvanceGeometry {
    pub fn new(columns: usize, line_height: f64) -> Self {
        Self { columns: columns.max(1), line_height }
    }

    /// Byte range and line index of every word in `text`.
    fn word_lines(&self, text: &str) -> Vec<(Range<usize>, usize)> {
        let mut placed = Vec::new();
        let mut line = 0;
        let mut column = 0;

        for word in words(text) {
            let width = text[word.clone()].chars().count();
            if column == 0 {
                column = width;
            } else if column + 1 + width > self.columns {
                line += 1;
                column = width;
            } else {
                column += 1 + width;
            }
            placed.push((word, line));
        }
        placed
    }

    /// Number of lines `text` occupies
    pub fn line_count(&self, text: &str) -> usize {
        self.word_lines(text)
            .last()
            .map(|(_, line)| line + 1)
            .unwrap_or(0)
    }
}

impl LineGeometry for FixedAdvanceGeometry {
    fn measure_top(&self, text: &str, start: usize, end: usize) -> Option<f64> {
        if start >= end {
            return None;
        }
        self.word_lines(text)
            .into_iter()
            .rev()
            .find(|(word, _)| word.start < end && word.end > start)
            .map(|(_, line)| line as f64 * self.line_height)
    }
}

/// Byte ranges of maximal non-whitespace runs
fn words(text: &str) -> Vec<Range<usize>> {
    let mut out = Vec::new();
    let mut current: Option<usize> = None;
    for (idx, c) in text.char_indices() {
        match (c.is_whitespace(), current) {
            (true, Some(begin)) => {
                out.push(begin..idx);
                current = None;
            }
            (false, None) => current = Some(idx),
            _ => {}
        }
    }
    if let Some(begin) = current {
        out.push(begin..text.len());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words() {
        assert_eq!(words("  ab c  "), vec![2..4, 5..6]);
        assert!(words("   ").is_empty());
    }

    #[test]
    fn test_wraps_at_width() {
        let geometry = FixedAdvanceGeometry::new(5, 10.0);
        // "aa bb" fits in 5, "cc" wraps
        assert_eq!(geometry.line_count("aa bb cc"), 2);
        assert_eq!(geometry.measure_top("aa bb cc", 0, 6), Some(0.0));
        assert_eq!(geometry.measure_top("aa bb cc", 0, 8), Some(10.0));
    }

    #[test]
    fn test_long_word_overflows_without_splitting() {
        let geometry = FixedAdvanceGeometry::new(3, 10.0);
        assert_eq!(geometry.line_count("abcdefgh"), 1);
        assert_eq!(geometry.line_count("abcdefgh ij"), 2);
    }

    #[test]
    fn test_whitespace_only_range_has_no_rect() {
        let geometry = FixedAdvanceGeometry::new(10, 10.0);
        assert_eq!(geometry.measure_top("ab   cd", 2, 5), None);
        assert_eq!(geometry.measure_top("ab", 1, 1), None);
    }

    #[test]
    fn test_counts_scalar_values_not_bytes() {
        let geometry = FixedAdvanceGeometry::new(8, 10.0);
        assert_eq!(geometry.line_count("ᏓᎵᏆ ᎠᏂᏬᏂ"), 1);
        assert_eq!(geometry.line_count("ᏓᎵᏆ ᎠᏂᏬᏂᏍᎪ"), 2);
    }
}
