//! Cherokee Transliteration WASM Module
//!
//! Transliterates Cherokee syllabary to Latin letters and annotates article
//! text line by line: every visual line of Cherokee keeps its original text
//! with its Latin reading stacked underneath, and the annotation follows the
//! layout as the page reflows.

pub mod annotate;
pub mod api;
pub mod config;
pub mod dom;
pub mod layout;
pub mod reflow;
pub mod script;
pub mod session;
pub mod syllabary;
pub mod transliterate;
pub mod tree;
pub mod utils;

// Re-export commonly used types
pub use annotate::{AnnotateError, AnnotatedBlock, AnnotatedLine, AnnotationReport};
pub use config::{AnnotatorConfig, ClassNames};
pub use layout::{split_visual_lines, FixedAdvanceGeometry, LineGeometry, LineSegment};
pub use reflow::{ManualScheduler, Scheduler, Trigger};
pub use script::{contains_cherokee, is_cherokee_char, looks_already_annotated};
pub use session::Session;
pub use transliterate::{normalize, transliterate};
pub use tree::{MemoryTree, TextTree, TreeError};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // Fails only if a logger is already installed
    #[cfg(feature = "console_log")]
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Cherokee transliteration WASM module initialized");
}
