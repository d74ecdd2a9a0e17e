//! Visual line segmentation
//!
//! Walks word-boundary candidates left to right and watches the top
//! coordinate of the range `[segment_start, candidate)`. When the top moves,
//! the previous candidate closed the line. The change is only visible one
//! candidate late, so the same candidate is tested again against the new
//! segment.

use super::{LineGeometry, LineSegment};
use std::borrow::Cow;

/// Map line/paragraph separators and no-break spaces to plain spaces so the
/// layout engine alone decides where lines wrap.
pub fn normalize_breaks(text: &str) -> Cow<'_, str> {
    if !text.chars().any(is_break_override) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.chars()
            .map(|c| if is_break_override(c) { ' ' } else { c })
            .collect(),
    )
}

fn is_break_override(c: char) -> bool {
    matches!(c, '\u{2028}' | '\u{2029}' | '\u{00A0}')
}

/// Offsets where a line may break: the start, the end, and the position just
/// after every maximal whitespace run. Strictly increasing.
pub fn break_candidates(text: &str) -> Vec<usize> {
    let mut candidates = vec![0];
    let mut in_whitespace = false;
    for (idx, c) in text.char_indices() {
        if c.is_whitespace() {
            in_whitespace = true;
        } else if in_whitespace {
            in_whitespace = false;
            if idx > 0 {
                candidates.push(idx);
            }
        }
    }
    if !text.is_empty() && candidates.last() != Some(&text.len()) {
        candidates.push(text.len());
    }
    candidates
}

/// Split `text` into its visual lines.
///
/// Returns an empty vector only for an empty run. A run that never yields a
/// rectangle, or that has no whitespace, comes back as one segment. Every
/// segment has its trailing whitespace trimmed; lines left empty by the trim
/// (a wrapped leading space) are dropped.
pub fn split_visual_lines<G: LineGeometry + ?Sized>(text: &str, geometry: &G) -> Vec<LineSegment> {
    if text.is_empty() {
        return Vec::new();
    }

    let candidates = break_candidates(text);
    let mut segments = Vec::new();
    let mut start = 0;
    let mut baseline: Option<f64> = None;
    let mut measured_any = false;

    let mut i = 1;
    while i < candidates.len() {
        let end = candidates[i];
        let Some(top) = geometry.measure_top(text, start, end).map(f64::round) else {
            i += 1;
            continue;
        };
        measured_any = true;

        match baseline {
            None => {
                baseline = Some(top);
                i += 1;
            }
            Some(line_top) if line_top == top => i += 1,
            Some(_) => {
                // The baseline was taken at an earlier candidate past `start`.
                let prev = candidates[i - 1];
                debug_assert!(prev > start);
                segments.push(LineSegment::new(start, prev));
                start = prev;
                baseline = None;
            }
        }
    }
    segments.push(LineSegment::new(start, text.len()));

    if !measured_any {
        log::debug!("run of {} bytes has no rendered rectangles; keeping it whole", text.len());
    }

    let lines: Vec<LineSegment> = segments
        .into_iter()
        .map(|s| s.trim_end(text))
        .filter(|s| !s.is_empty())
        .collect();
    if lines.is_empty() {
        return vec![LineSegment::whole(text).trim_end(text)];
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::FixedAdvanceGeometry;
    use std::collections::HashMap;

    /// Geometry that reports a fixed top per candidate end offset,
    /// independent of where the segment starts.
    struct ScriptedTops(HashMap<usize, f64>);

    impl LineGeometry for ScriptedTops {
        fn measure_top(&self, _text: &str, start: usize, end: usize) -> Option<f64> {
            if start == end {
                return None;
            }
            self.0.get(&end).copied()
        }
    }

    struct NothingRendered;

    impl LineGeometry for NothingRendered {
        fn measure_top(&self, _text: &str, _start: usize, _end: usize) -> Option<f64> {
            None
        }
    }

    #[test]
    fn test_break_candidates() {
        assert_eq!(break_candidates(""), vec![0]);
        assert_eq!(break_candidates("ab"), vec![0, 2]);
        assert_eq!(break_candidates("ab  cd e"), vec![0, 4, 7, 8]);
    }

    #[test]
    fn test_break_candidates_trailing_whitespace_not_duplicated() {
        assert_eq!(break_candidates("ab "), vec![0, 3]);
    }

    #[test]
    fn test_break_candidates_leading_whitespace() {
        assert_eq!(break_candidates("  ab"), vec![0, 2, 4]);
    }

    #[test]
    fn test_normalize_breaks() {
        assert_eq!(normalize_breaks("a\u{00A0}b\u{2028}c\u{2029}d"), "a b c d");
        assert!(matches!(normalize_breaks("a b"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_empty_run_has_no_segments() {
        assert!(split_visual_lines("", &NothingRendered).is_empty());
    }

    #[test]
    fn test_unrendered_run_stays_whole() {
        let text = "ᏓᎵᏆ ᎠᏂᏬᏂᏍᎪ";
        let segments = split_visual_lines(text, &NothingRendered);
        assert_eq!(segments, vec![LineSegment::whole(text)]);
    }

    #[test]
    fn test_split_on_top_change() {
        // "aa bb cc": candidates 0, 3, 6, 8; "cc" wraps
        let text = "aa bb cc";
        let tops = ScriptedTops(HashMap::from([(3, 0.0), (6, 0.0), (8, 20.0)]));
        let segments = split_visual_lines(text, &tops);
        let lines: Vec<&str> = segments.iter().map(|s| s.slice(text)).collect();
        assert_eq!(lines, vec!["aa bb", "cc"]);
    }

    #[test]
    fn test_fractional_tops_are_rounded() {
        let text = "aa bb";
        let tops = ScriptedTops(HashMap::from([(3, 10.2), (5, 9.8)]));
        assert_eq!(split_visual_lines(text, &tops).len(), 1);
    }

    #[test]
    fn test_unmeasurable_candidate_is_skipped() {
        let text = "aa bb cc";
        let tops = ScriptedTops(HashMap::from([(3, 0.0), (8, 0.0)]));
        let segments = split_visual_lines(text, &tops);
        assert_eq!(segments, vec![LineSegment::new(0, 8)]);
    }

    #[test]
    fn test_trailing_whitespace_trimmed_leading_kept() {
        let text = " aa bb ";
        let tops = ScriptedTops(HashMap::from([(1, 0.0), (4, 0.0), (7, 20.0)]));
        let segments = split_visual_lines(text, &tops);
        let lines: Vec<&str> = segments.iter().map(|s| s.slice(text)).collect();
        assert_eq!(lines, vec![" aa", "bb"]);
    }

    #[test]
    fn test_overlong_word_is_never_split() {
        let text = "ᎠᏂᏬᏂᏍᎪ";
        let geometry = FixedAdvanceGeometry::new(3, 20.0);
        assert_eq!(split_visual_lines(text, &geometry), vec![LineSegment::whole(text)]);
    }

    #[test]
    fn test_top_change_at_end_without_interior_candidate() {
        // The only measurement is the whole run, already on the second line
        let text = "abcdef";
        let tops = ScriptedTops(HashMap::from([(6, 20.0)]));
        assert_eq!(split_visual_lines(text, &tops), vec![LineSegment::whole(text)]);
    }

    #[test]
    fn test_wrapped_leading_space_leaves_no_empty_line() {
        // " abcdef": the space stays on line one, the word wraps
        let text = " abcdef";
        let tops = ScriptedTops(HashMap::from([(1, 0.0), (7, 20.0)]));
        assert_eq!(split_visual_lines(text, &tops), vec![LineSegment::new(1, 7)]);
    }

    #[test]
    fn test_whitespace_only_run_stays_whole() {
        let segments = split_visual_lines("   ", &NothingRendered);
        assert_eq!(segments, vec![LineSegment::new(0, 0)]);
    }
}
