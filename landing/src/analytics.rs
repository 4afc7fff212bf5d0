//! Google tag events for the call-to-action buttons.

use js_sys::{Function, Object, Reflect};
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};

/// Sends `gtag('event', 'click', { event_category: 'CTA', event_label })`.
/// Does nothing when the tag script is not on the page (ad blockers, dev builds).
pub fn track_cta(label: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(gtag) = Reflect::get(&window, &JsValue::from_str("gtag")) else {
        return;
    };
    let Some(gtag) = gtag.dyn_ref::<Function>() else {
        return;
    };

    if let Err(err) = send_click(gtag, label) {
        warn!(error = ?err, label, "CTA event not sent");
    }
}

fn send_click(gtag: &Function, label: &str) -> Result<(), JsValue> {
    let params = cta_params(label)?;
    gtag.call3(&JsValue::NULL, &"event".into(), &"click".into(), &params)?;
    Ok(())
}

/// Event parameters; either both keys are set or the event is not sent.
fn cta_params(label: &str) -> Result<Object, JsValue> {
    let params = Object::new();
    Reflect::set(&params, &"event_category".into(), &"CTA".into())?;
    Reflect::set(&params, &"event_label".into(), &label.into())?;
    Ok(params)
}
