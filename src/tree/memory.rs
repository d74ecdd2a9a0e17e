//! In-memory text tree
//!
//! A flat list of paragraphs laid out with a [`FixedAdvanceGeometry`]. Lets
//! the full annotate/reverse pipeline run headless, and is what the native
//! tests drive.

use super::{TextTree, TreeError};
use crate::annotate::AnnotatedBlock;
use crate::layout::FixedAdvanceGeometry;

const LINE_HEIGHT: f64 = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub enum MemoryNode {
    Text(String),
    Block(AnnotatedBlock),
}

#[derive(Debug, Clone)]
pub struct MemoryTree {
    nodes: Vec<MemoryNode>,
    geometry: FixedAdvanceGeometry,
    annotated: bool,
    visible: bool,
}

impl MemoryTree {
    /// Empty tree whose paragraphs wrap at `columns`
    pub fn new(columns: usize) -> Self {
        Self {
            nodes: Vec::new(),
            geometry: FixedAdvanceGeometry::new(columns, LINE_HEIGHT),
            annotated: false,
            visible: true,
        }
    }

    pub fn from_paragraphs<I, S>(paragraphs: I, columns: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tree = Self::new(columns);
        for p in paragraphs {
            tree.push_text(p);
        }
        tree
    }

    pub fn push_text(&mut self, text: impl Into<String>) {
        self.nodes.push(MemoryNode::Text(text.into()));
    }

    pub fn nodes(&self) -> &[MemoryNode] {
        &self.nodes
    }

    /// Change the wrap width, as a viewport resize would
    pub fn set_columns(&mut self, columns: usize) {
        self.geometry = FixedAdvanceGeometry::new(columns, self.geometry.line_height);
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Paragraph text with every block replaced by its source
    pub fn plain_text(&self) -> String {
        self.nodes
            .iter()
            .map(|node| match node {
                MemoryNode::Text(text) => text.as_str(),
                MemoryNode::Block(block) => block.source.as_str(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_block(&self, block: &AnnotatedBlock) -> String {
        block
            .lines
            .iter()
            .map(|line| {
                if self.visible {
                    format!("{}\n{}", line.original, line.transliterated)
                } else {
                    line.original.clone()
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl TextTree for MemoryTree {
    type Leaf = usize;
    type Geometry = FixedAdvanceGeometry;

    fn text_leaves(&self) -> Result<Vec<usize>, TreeError> {
        Ok(self
            .nodes
            .iter()
            .enumerate()
            .filter_map(|(idx, node)| match node {
                MemoryNode::Text(text) if !text.trim().is_empty() => Some(idx),
                _ => None,
            })
            .collect())
    }

    fn leaf_text(&self, leaf: &usize) -> Result<String, TreeError> {
        match self.nodes.get(*leaf) {
            Some(MemoryNode::Text(text)) => Ok(text.clone()),
            _ => Err(TreeError::Detached),
        }
    }

    fn set_leaf_text(&mut self, leaf: &usize, text: &str) -> Result<(), TreeError> {
        match self.nodes.get_mut(*leaf) {
            Some(MemoryNode::Text(current)) => {
                *current = text.to_string();
                Ok(())
            }
            _ => Err(TreeError::Detached),
        }
    }

    fn line_geometry(&self, _leaf: &usize) -> FixedAdvanceGeometry {
        self.geometry
    }

    fn replace_leaf(&mut self, leaf: &usize, block: &AnnotatedBlock) -> Result<(), TreeError> {
        match self.nodes.get_mut(*leaf) {
            Some(node @ MemoryNode::Text(_)) => {
                *node = MemoryNode::Block(block.clone());
                Ok(())
            }
            _ => Err(TreeError::Detached),
        }
    }

    fn collapse_blocks(&mut self) -> Result<usize, TreeError> {
        let mut collapsed = 0;
        for node in self.nodes.iter_mut() {
            if let MemoryNode::Block(block) = node {
                *node = MemoryNode::Text(std::mem::take(&mut block.source));
                collapsed += 1;
            }
        }
        Ok(collapsed)
    }

    fn is_annotated(&self) -> bool {
        self.annotated
    }

    fn set_annotated(&mut self, annotated: bool) -> Result<(), TreeError> {
        self.annotated = annotated;
        Ok(())
    }

    fn rendered_text(&self) -> String {
        self.nodes
            .iter()
            .map(|node| match node {
                MemoryNode::Text(text) => text.clone(),
                MemoryNode::Block(block) => self.render_block(block),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn apply_visibility(&mut self, visible: bool) -> Result<(), TreeError> {
        self.visible = visible;
        Ok(())
    }
}
