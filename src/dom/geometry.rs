//! Live line geometry from DOM ranges

use crate::layout::LineGeometry;
use crate::utils::utf16_offset;
use web_sys::{Document, Text};

/// Measures sub-ranges of one attached text node. Every query forces the
/// browser to flush pending layout.
pub struct DomLineGeometry {
    document: Document,
    node: Text,
}

impl DomLineGeometry {
    pub fn new(document: Document, node: Text) -> Self {
        Self { document, node }
    }
}

impl LineGeometry for DomLineGeometry {
    fn measure_top(&self, text: &str, start: usize, end: usize) -> Option<f64> {
        if start >= end {
            return None;
        }
        let range = self.document.create_range().ok()?;
        range.set_start(&self.node, utf16_offset(text, start)).ok()?;
        range.set_end(&self.node, utf16_offset(text, end)).ok()?;

        let rects = range.get_client_rects()?;
        match rects.length() {
            0 => None,
            n => rects.item(n - 1).map(|rect| rect.top()),
        }
    }
}
