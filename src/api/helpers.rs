//! Shared helpers for the WASM API
//!
//! Conversions between JavaScript values and Rust types, with errors logged
//! before they are handed back to the caller.

use crate::config::AnnotatorConfig;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Display;
use wasm_bindgen::prelude::*;

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| js_error(format!("{}: {}", error_context, e)))
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| js_error(format!("{}: {}", error_context, e)))
}

// ============================================================================
// Configuration
// ============================================================================

/// Read annotator options; `undefined` and `null` select the defaults.
pub fn parse_config(options: JsValue) -> Result<AnnotatorConfig, JsValue> {
    let config: AnnotatorConfig = if options.is_undefined() || options.is_null() {
        AnnotatorConfig::default()
    } else {
        deserialize(options, "Invalid annotator options")?
    };
    config.validate().map_err(js_error)?;
    Ok(config)
}

// ============================================================================
// Result Conversion Helpers
// ============================================================================

/// Log an error and convert it to a JsValue
pub fn js_error(msg: impl Display) -> JsValue {
    let msg = msg.to_string();
    log::error!("{}", msg);
    JsValue::from_str(&msg)
}

/// Log a JavaScript exception with context and pass it on as a message
pub fn js_exception(error_context: &str, e: JsValue) -> JsValue {
    js_error(format!("{}: {:?}", error_context, e))
}
