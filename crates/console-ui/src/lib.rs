//! Radio Console Web UI - Leptos-based frontend.
//!
//! Browser control surface for a remote radio: jog dial, per-digit
//! wheel tuning, tuning slider, and rate/mode/band button groups.
//! Every gesture issues an HTTP PUT to the console backend; responses
//! carrying a nine-digit readout replace the frequency display.

pub mod app;
pub mod components;
pub mod http;
pub mod state;

pub use app::App;
pub use http::{dispatch, send_command};
pub use state::{provide_app_context, use_app_context, AppContext};

/// Mount the console application onto the document body.
///
/// Installs the panic hook first so WASM panics land in the browser
/// console instead of vanishing.
pub fn mount_console() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(App);
}
