//! Browser transport for the contact relay: one multipart POST via `fetch`.

use gloo_net::http::Request;
use pronto::contact::{RelayReply, RelayRequest, RelayTransport, TransportError};
use wasm_bindgen::JsValue;
use web_sys::FormData;

#[derive(Debug, Clone, Copy, Default)]
pub struct FetchRelay;

impl RelayTransport for FetchRelay {
    async fn post_form(&self, request: &RelayRequest) -> Result<RelayReply, TransportError> {
        let body = form_data(request).map_err(js_error)?;

        let response = Request::post(&request.endpoint)
            .header("Accept", "application/json")
            .body(body)
            .map_err(|e| TransportError(e.to_string()))?
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        let status = response.status();
        // An unreadable body is treated like an empty one.
        let body = response.text().await.unwrap_or_default();
        Ok(RelayReply { status, body })
    }
}

fn form_data(request: &RelayRequest) -> Result<FormData, JsValue> {
    let data = FormData::new()?;
    for (name, value) in &request.fields {
        data.append_with_str(name, value)?;
    }
    Ok(data)
}

fn js_error(value: JsValue) -> TransportError {
    TransportError(value.as_string().unwrap_or_default())
}
