//! Annotation pipeline
//!
//! `process` rewrites a container so every visual line of Cherokee text is
//! followed by its transliteration; `reverse` puts the original text back.
//! Every pass starts from plain text: a container that is already annotated
//! is reversed first, so annotation output is never measured as if it were
//! source text.

pub mod block;

pub use block::{AnnotatedBlock, AnnotatedLine};

use crate::layout::{normalize_breaks, split_visual_lines};
use crate::script::{contains_cherokee, looks_already_annotated};
use crate::tree::{TextTree, TreeError};
use serde::Serialize;
use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnnotateError {
    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error("container not found: {0}")]
    MissingContainer(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Outcome of one `process` call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationReport {
    /// The page-level gate found nothing to do
    pub skipped: bool,
    pub runs_annotated: usize,
    pub lines_emitted: usize,
    /// Blocks collapsed from a previous pass before re-measuring
    pub blocks_reversed: usize,
}

/// Remove any existing annotation and clear the container marker.
pub fn reverse<T: TextTree>(tree: &mut T) -> Result<usize, TreeError> {
    let collapsed = tree.collapse_blocks()?;
    tree.set_annotated(false)?;
    if collapsed > 0 {
        log::debug!("reversed {} annotated block(s)", collapsed);
    }
    Ok(collapsed)
}

/// Annotate every Cherokee-bearing leaf of `tree`.
///
/// All-or-nothing: if the tree rejects an operation part way through, the
/// blocks already inserted are collapsed again before the error is returned.
pub fn process<T: TextTree>(tree: &mut T) -> Result<AnnotationReport, AnnotateError> {
    if !looks_already_annotated(&tree.rendered_text()) {
        log::debug!("no Cherokee text in container; nothing to annotate");
        return Ok(AnnotationReport {
            skipped: true,
            ..AnnotationReport::default()
        });
    }

    let mut report = AnnotationReport::default();
    if tree.is_annotated() {
        report.blocks_reversed = reverse(tree)?;
    }

    for leaf in tree.text_leaves()? {
        let source = match tree.leaf_text(&leaf) {
            Ok(source) => source,
            Err(e) => {
                log::warn!("could not read text leaf, restoring original text: {}", e);
                undo_pass(tree);
                return Err(e.into());
            }
        };
        if source.trim().is_empty() || !contains_cherokee(&source) {
            continue;
        }

        match annotate_leaf(tree, &leaf, &source) {
            Ok(lines) => {
                report.runs_annotated += 1;
                report.lines_emitted += lines;
            }
            Err(e) => {
                log::warn!("annotation failed, restoring original text: {}", e);
                rollback(tree, &leaf, &source);
                return Err(e.into());
            }
        }
    }

    if let Err(e) = tree.set_annotated(true) {
        log::warn!("could not mark container, restoring original text: {}", e);
        if let Err(undo) = tree.collapse_blocks() {
            log::warn!("rollback incomplete: {}", undo);
        }
        return Err(e.into());
    }
    log::info!(
        "annotated {} run(s) into {} line(s)",
        report.runs_annotated,
        report.lines_emitted
    );
    Ok(report)
}

/// Segment, transliterate and splice one leaf. Returns the line count.
fn annotate_leaf<T: TextTree>(tree: &mut T, leaf: &T::Leaf, source: &str) -> Result<usize, TreeError> {
    let measured = normalize_breaks(source);
    if let Cow::Owned(normalized) = &measured {
        tree.set_leaf_text(leaf, normalized)?;
    }

    let geometry = tree.line_geometry(leaf);
    let segments = split_visual_lines(&measured, &geometry);
    let block = AnnotatedBlock::from_segments(source, &measured, &segments);
    log::debug!("run of {} char(s) spans {} visual line(s)", source.chars().count(), block.line_count());

    tree.replace_leaf(leaf, &block)?;
    Ok(block.line_count())
}

/// Best-effort undo after a failed pass; errors here are only logged.
fn rollback<T: TextTree>(tree: &mut T, leaf: &T::Leaf, source: &str) {
    if let Err(e) = tree.set_leaf_text(leaf, source) {
        log::debug!("could not restore current leaf: {}", e);
    }
    undo_pass(tree);
}

/// Collapse every block spliced so far and clear the marker.
fn undo_pass<T: TextTree>(tree: &mut T) {
    if let Err(e) = reverse(tree) {
        log::warn!("rollback incomplete: {}", e);
    }
}
