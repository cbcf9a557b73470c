//! Console backend requests over HTTP PUT.
//!
//! Each command becomes one form-encoded PUT against its service
//! path. Requests are fire-and-forget: a failure is logged to the
//! browser console and the panel state is left untouched. Responses
//! are applied in arrival order; nothing cancels or reorders an
//! in-flight request.

use console_core::{Command, FrequencyDigits};
use leptos::{spawn_local, SignalUpdate};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Request, RequestInit, Response};

use crate::state::AppContext;

/// Issue one command as a PUT and parse the readout if one is due.
///
/// Returns `Ok(None)` for commands whose response body is unused
/// (rate and mode changes).
pub async fn send_command(command: &Command) -> Result<Option<FrequencyDigits>, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("PUT");
    opts.set_body(&JsValue::from_str(command.form_body().as_str()));

    let request = Request::new_with_str_and_init(command.endpoint(), &opts)?;
    request
        .headers()
        .set("Content-Type", "application/x-www-form-urlencoded")?;

    let window = web_sys::window().ok_or("No window")?;
    let response = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into::<Response>()?;

    if !response.ok() {
        return Err(format!("{} returned {}", command.endpoint(), response.status()).into());
    }

    if !command.updates_display() {
        return Ok(None);
    }

    let body = wasm_bindgen_futures::JsFuture::from(response.text()?).await?;
    let body = body.as_string().ok_or("Response body is not text")?;
    let digits = FrequencyDigits::parse(&body)
        .map_err(|e| JsValue::from_str(&format!("{}: {}", command.endpoint(), e)))?;

    Ok(Some(digits))
}

/// Fire a command and reconcile its response into the panel.
///
/// Reconciliation goes through [`console_core::ConsolePanel::apply_response`],
/// which replaces the display wholesale for readout-bearing commands
/// and ignores everything else; failures are a deliberate no-op
/// against displayed state.
pub fn dispatch(ctx: &AppContext, command: Command) {
    let panel = ctx.panel;
    spawn_local(async move {
        match send_command(&command).await {
            Ok(digits) => panel.update(|p| p.apply_response(&command, digits)),
            Err(e) => {
                web_sys::console::error_1(&format!("console request failed: {:?}", e).into());
            }
        }
    });
}
