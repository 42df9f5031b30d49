//! Backend API Bindings
//!
//! Frontend bindings to the remote collection endpoint, organized by domain.
//! All requests go through the shared fetch helper below.

mod pokemon;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

// Re-export all public items
pub use pokemon::*;

/// Issue a request and hand back the raw response
async fn send(method: &str, url: &str, json_body: Option<String>) -> Result<Response, String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(body) = &json_body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    if json_body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_error)?;
    }

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;

    response
        .dyn_into::<Response>()
        .map_err(|_| "fetch did not return a Response".to_string())
}

/// Await and deserialize a JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(response: &Response) -> Result<T, String> {
    let promise = response.json().map_err(js_error)?;
    let value = JsFuture::from(promise).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
}

fn js_error(value: JsValue) -> String {
    match value.dyn_into::<js_sys::Error>() {
        Ok(error) => String::from(error.message()),
        Err(value) => format!("{value:?}"),
    }
}
