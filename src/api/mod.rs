//! Cherokee transliteration WASM API
//!
//! JavaScript-facing surface of the crate.
//!
//! # Module Structure
//!
//! - `helpers`: serialization, configuration parsing and error conversion
//! - `text`: stateless string functions (transliterate, classify)
//! - `annotator`: the `CherokeeAnnotator` class and the one-call page installer

pub mod annotator;
pub mod helpers;
pub mod text;

pub use annotator::{install_transliteration, CherokeeAnnotator};
pub use text::{contains_cherokee_js, normalize_lowercase, page_looks_translated, transliterate_js};
