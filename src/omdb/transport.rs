//! Browser Transport
//!
//! `window.fetch` + `serde-wasm-bindgen` decoding.

use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::error::FetchError;

/// GET `url` and decode the JSON body
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let window = web_sys::window().ok_or_else(|| FetchError::Network("no window".to_string()))?;

    let value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| FetchError::Network(describe(&e)))?;
    let response: Response = value
        .dyn_into()
        .map_err(|e| FetchError::Decode(describe(&e)))?;
    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let body = response.json().map_err(|e| FetchError::Decode(describe(&e)))?;
    let json = JsFuture::from(body)
        .await
        .map_err(|e| FetchError::Decode(describe(&e)))?;
    serde_wasm_bindgen::from_value(json).map_err(|e| FetchError::Decode(e.to_string()))
}

fn describe(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
