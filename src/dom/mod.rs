//! Browser DOM backend
//!
//! Implements the tree, geometry and scheduler capabilities on top of
//! `web-sys`. Emitted markup for one annotated run:
//!
//! ```html
//! <span class="ck-block" data-ck-source="…original run…">
//!   <span class="ck-annotated">
//!     <span class="ck-cherokee">line 1</span><br><span class="ck-latin">…</span>
//!   </span>
//!   <br>
//!   <span class="ck-annotated">…</span>
//! </span>
//! ```

pub mod geometry;
pub mod scheduler;
pub mod style;

pub use geometry::DomLineGeometry;
pub use scheduler::DomScheduler;
pub use style::install_stylesheet;

use crate::annotate::{AnnotateError, AnnotatedBlock};
use crate::config::{AnnotatorConfig, ClassNames};
use crate::tree::{TextTree, TreeError};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Node, Text};

/// Attribute on the block element holding the run's original text
pub const SOURCE_ATTRIBUTE: &str = "data-ck-source";

/// `NodeFilter.SHOW_TEXT`
const SHOW_TEXT: u32 = 0x4;

pub(crate) fn dom_err(e: JsValue) -> TreeError {
    TreeError::Dom(format!("{:?}", e))
}

pub struct DomTree {
    document: Document,
    root: Element,
    classes: ClassNames,
    marker_attribute: String,
}

impl DomTree {
    pub fn new(document: Document, root: Element, config: &AnnotatorConfig) -> Self {
        Self {
            document,
            root,
            classes: config.classes.clone(),
            marker_attribute: config.marker_attribute.clone(),
        }
    }

    /// Locate the container with `config.container_selector`.
    pub fn from_selector(document: Document, config: &AnnotatorConfig) -> Result<Self, AnnotateError> {
        let root = document
            .query_selector(&config.container_selector)
            .map_err(|e| AnnotateError::InvalidConfig(format!("{:?}", e)))?
            .ok_or_else(|| AnnotateError::MissingContainer(config.container_selector.clone()))?;
        Ok(Self::new(document, root, config))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn classes(&self) -> &ClassNames {
        &self.classes
    }

    fn span(&self, class: &str) -> Result<Element, TreeError> {
        let span = self.document.create_element("span").map_err(dom_err)?;
        span.set_class_name(class);
        Ok(span)
    }

    fn line_break(&self) -> Result<Element, TreeError> {
        self.document.create_element("br").map_err(dom_err)
    }

    fn render_block(&self, block: &AnnotatedBlock) -> Result<Element, TreeError> {
        let outer = self.span(&self.classes.block)?;
        outer.set_attribute(SOURCE_ATTRIBUTE, &block.source).map_err(dom_err)?;

        for (idx, line) in block.lines.iter().enumerate() {
            let wrapper = self.span(&self.classes.wrapper)?;

            let original = self.span(&self.classes.original)?;
            original.set_text_content(Some(&line.original));

            let latin = self.span(&self.classes.latin)?;
            latin.set_text_content(Some(&line.transliterated));

            let br = self.line_break()?;
            wrapper.append_child(&original).map_err(dom_err)?;
            wrapper.append_child(&br).map_err(dom_err)?;
            wrapper.append_child(&latin).map_err(dom_err)?;
            outer.append_child(&wrapper).map_err(dom_err)?;

            if idx + 1 < block.lines.len() {
                let br = self.line_break()?;
                outer.append_child(&br).map_err(dom_err)?;
            }
        }
        Ok(outer)
    }
}

impl TextTree for DomTree {
    type Leaf = Text;
    type Geometry = DomLineGeometry;

    fn text_leaves(&self) -> Result<Vec<Text>, TreeError> {
        let walker = self
            .document
            .create_tree_walker_with_what_to_show(&self.root, SHOW_TEXT)
            .map_err(dom_err)?;

        let mut leaves = Vec::new();
        while let Some(node) = walker.next_node().map_err(dom_err)? {
            let Ok(text) = node.dyn_into::<Text>() else {
                continue;
            };
            if text.node_value().is_some_and(|v| !v.trim().is_empty()) {
                leaves.push(text);
            }
        }
        Ok(leaves)
    }

    fn leaf_text(&self, leaf: &Text) -> Result<String, TreeError> {
        Ok(leaf.node_value().unwrap_or_default())
    }

    fn set_leaf_text(&mut self, leaf: &Text, text: &str) -> Result<(), TreeError> {
        leaf.set_node_value(Some(text));
        Ok(())
    }

    fn line_geometry(&self, leaf: &Text) -> DomLineGeometry {
        DomLineGeometry::new(self.document.clone(), leaf.clone())
    }

    fn replace_leaf(&mut self, leaf: &Text, block: &AnnotatedBlock) -> Result<(), TreeError> {
        let parent = leaf.parent_node().ok_or(TreeError::Detached)?;
        let rendered = self.render_block(block)?;
        parent.replace_child(&rendered, leaf).map_err(dom_err)?;
        Ok(())
    }

    fn collapse_blocks(&mut self) -> Result<usize, TreeError> {
        let blocks = self
            .root
            .query_selector_all(&format!(".{}", self.classes.block))
            .map_err(dom_err)?;

        let mut collapsed = 0;
        for idx in 0..blocks.length() {
            let Some(block) = blocks.item(idx).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            let source = block.get_attribute(SOURCE_ATTRIBUTE).ok_or(TreeError::MissingSource)?;
            let parent: Node = block.parent_node().ok_or(TreeError::Detached)?;
            let restored = self.document.create_text_node(&source);
            parent.replace_child(&restored, &block).map_err(dom_err)?;
            collapsed += 1;
        }
        Ok(collapsed)
    }

    fn is_annotated(&self) -> bool {
        self.root.get_attribute(&self.marker_attribute).as_deref() == Some("1")
    }

    fn set_annotated(&mut self, annotated: bool) -> Result<(), TreeError> {
        if annotated {
            self.root.set_attribute(&self.marker_attribute, "1").map_err(dom_err)
        } else {
            self.root.remove_attribute(&self.marker_attribute).map_err(dom_err)
        }
    }

    fn rendered_text(&self) -> String {
        match self.root.dyn_ref::<HtmlElement>() {
            Some(el) => el.inner_text(),
            None => self.root.text_content().unwrap_or_default(),
        }
    }

    fn apply_visibility(&mut self, visible: bool) -> Result<(), TreeError> {
        let body = self.document.body().ok_or(TreeError::Detached)?;
        body.class_list()
            .toggle_with_force(&self.classes.hidden, !visible)
            .map_err(dom_err)?;
        Ok(())
    }
}
