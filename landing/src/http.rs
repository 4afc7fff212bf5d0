//! `fetch`-backed transport for the lead form.

use lead_capture::{SubmissionClient, SubmissionError, SubmissionPayload, is_success_status};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

pub struct FetchClient {
    endpoint: String,
}

impl FetchClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl SubmissionClient for FetchClient {
    async fn send(&self, payload: &SubmissionPayload) -> Result<(), SubmissionError> {
        let body = payload.to_json()?;
        let status = post_json(&self.endpoint, &body)
            .await
            .map_err(|err| SubmissionError::Transport(describe(&err)))?;

        if is_success_status(status) {
            Ok(())
        } else {
            Err(SubmissionError::Status(status))
        }
    }
}

async fn post_json(url: &str, body: &str) -> Result<u16, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

    let headers = Headers::new()?;
    headers.set("Content-Type", "application/json")?;
    headers.set("Accept", "application/json")?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(url, &init)?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;
    Ok(response.status())
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// Browser-local timestamp for the message body, e.g. `18/10/2026, 09:30:00`.
pub fn local_timestamp() -> String {
    js_sys::Date::new_0()
        .to_locale_string("pt-BR", &JsValue::UNDEFINED)
        .into()
}
