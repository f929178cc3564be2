//! Key name exports

use wasm_bindgen::prelude::*;

use super::helpers::serialize;
use crate::models::key as key_names;

#[wasm_bindgen(js_name = isValidKey)]
pub fn is_valid_key(key: &str) -> bool {
    key_names::is_valid_key(key)
}

/// Normalize case and minor marker ("amin" → "Am")
#[wasm_bindgen(js_name = normalizeKey)]
pub fn normalize_key(key: &str) -> String {
    key_names::normalize_key(key)
}

/// All 36 key names: majors first, then minors
#[wasm_bindgen(js_name = getAllKeys)]
pub fn get_all_keys() -> Result<JsValue, JsValue> {
    serialize(&key_names::all_keys(), "Failed to serialize key list")
}
