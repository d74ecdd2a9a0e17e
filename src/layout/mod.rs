//! Visual line layout
//!
//! The segmenter in this module splits a text run into the substrings a
//! rendering engine places on separate visual lines. It never computes a
//! layout itself: all geometry comes from a [`LineGeometry`] oracle, which
//! the browser backend answers with live `Range` rectangles and tests answer
//! with [`FixedAdvanceGeometry`] or scripted coordinates.
//!
//! ## Modules
//!
//! - `segmenter`: break candidates and the visual line walk
//! - `fixed_advance`: a fixed-column reference layout

pub mod fixed_advance;
pub mod segmenter;

pub use fixed_advance::FixedAdvanceGeometry;
pub use segmenter::{break_candidates, normalize_breaks, split_visual_lines};

/// Answers "where does this part of the run end up on screen".
pub trait LineGeometry {
    /// Top coordinate of the last rendered rectangle covering
    /// `text[start..end]`, or `None` if that range renders nothing
    /// (empty, collapsed whitespace, or the run is not laid out).
    ///
    /// `start` and `end` are byte offsets on `char` boundaries of `text`,
    /// which is the run's current content.
    fn measure_top(&self, text: &str, start: usize, end: usize) -> Option<f64>;
}

impl<G: LineGeometry + ?Sized> LineGeometry for &G {
    fn measure_top(&self, text: &str, start: usize, end: usize) -> Option<f64> {
        (**self).measure_top(text, start, end)
    }
}

/// One visual line of a run, as a byte range into the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineSegment {
    pub start: usize,
    pub end: usize,
}

impl LineSegment {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Segment covering the whole of `text`
    pub fn whole(text: &str) -> Self {
        Self::new(0, text.len())
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Borrow this segment's text out of the run it was measured on
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }

    /// Shrink `end` past any trailing whitespace
    pub fn trim_end(self, text: &str) -> Self {
        let trimmed = self.slice(text).trim_end().len();
        Self::new(self.start, self.start + trimmed)
    }
}
