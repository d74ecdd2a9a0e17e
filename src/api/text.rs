//! Stateless text functions exported to JavaScript

use crate::script::{contains_cherokee, looks_already_annotated};
use crate::transliterate::{normalize, transliterate};
use wasm_bindgen::prelude::*;

/// Transliterate Cherokee syllabary text to Latin letters.
#[wasm_bindgen(js_name = transliterate)]
pub fn transliterate_js(text: &str) -> String {
    transliterate(text)
}

/// Fold lowercase Cherokee letters onto their canonical forms.
#[wasm_bindgen(js_name = normalizeLowercase)]
pub fn normalize_lowercase(text: &str) -> String {
    normalize(text).into_owned()
}

#[wasm_bindgen(js_name = containsCherokee)]
pub fn contains_cherokee_js(text: &str) -> bool {
    contains_cherokee(text)
}

/// Page-level gate over a container's `innerText`.
#[wasm_bindgen(js_name = pageLooksTranslated)]
pub fn page_looks_translated(root_text: &str) -> bool {
    looks_already_annotated(root_text)
}
