//! Shared helpers for WASM API operations
//!
//! Serialization to JavaScript values with consistent error reporting.

use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log::error!("{}", msg);
        JsValue::from_str(&msg)
    })
}
