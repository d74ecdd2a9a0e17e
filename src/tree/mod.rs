//! Text-bearing node tree capability
//!
//! The annotator never touches a concrete document type. Anything that can
//! list its text leaves in document order, read and rewrite a leaf, swap a
//! leaf for an [`AnnotatedBlock`] and swap it back can be annotated: the
//! browser DOM (`crate::dom::DomTree`) and the in-memory [`MemoryTree`].

pub mod memory;

pub use memory::{MemoryNode, MemoryTree};

use crate::annotate::AnnotatedBlock;
use crate::layout::LineGeometry;

/// Failures reported by a tree backend
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("DOM operation failed: {0}")]
    Dom(String),

    #[error("text leaf is no longer part of the tree")]
    Detached,

    #[error("annotated block has no source text to restore")]
    MissingSource,
}

pub trait TextTree {
    /// Handle to one text leaf, valid for the duration of one pass.
    type Leaf;

    /// Geometry oracle bound to a single leaf.
    type Geometry: LineGeometry;

    /// Non-empty, non-whitespace-only text leaves in document order.
    fn text_leaves(&self) -> Result<Vec<Self::Leaf>, TreeError>;

    fn leaf_text(&self, leaf: &Self::Leaf) -> Result<String, TreeError>;

    /// Overwrite a leaf's text in place (the leaf stays attached).
    fn set_leaf_text(&mut self, leaf: &Self::Leaf, text: &str) -> Result<(), TreeError>;

    /// Live geometry for `leaf` as it is currently laid out.
    fn line_geometry(&self, leaf: &Self::Leaf) -> Self::Geometry;

    /// Replace `leaf` with the rendering of `block`.
    fn replace_leaf(&mut self, leaf: &Self::Leaf, block: &AnnotatedBlock) -> Result<(), TreeError>;

    /// Turn every annotated block back into a single text leaf holding its
    /// source text. Returns how many blocks were collapsed.
    fn collapse_blocks(&mut self) -> Result<usize, TreeError>;

    /// Container-level "annotated" marker
    fn is_annotated(&self) -> bool;

    fn set_annotated(&mut self, annotated: bool) -> Result<(), TreeError>;

    /// Text as the user currently sees it.
    fn rendered_text(&self) -> String;

    /// Show or hide every transliteration line without touching the blocks.
    fn apply_visibility(&mut self, visible: bool) -> Result<(), TreeError> {
        let _ = visible;
        Ok(())
    }
}
