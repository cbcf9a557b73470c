//! Application state management.
//!
//! The canonical view state is one [`ConsolePanel`] held in a single
//! reactive signal. Event callbacks mutate it only through the
//! panel's handlers; components read derived projections. Keeping
//! the panel whole means the selection, clamping and display-update
//! rules live in `console-core` and nowhere else.

use console_core::{Band, ConsolePanel, FrequencyDigits, Mode, TuningRate};
use leptos::*;

/// Application context providing global state.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Canonical panel state; mutate via the panel's handlers only
    pub panel: RwSignal<ConsolePanel>,
}

impl AppContext {
    /// Create a new application context from the panel boot state.
    pub fn new() -> Self {
        Self {
            panel: create_rw_signal(ConsolePanel::new()),
        }
    }

    /// Frequency readout projection.
    pub fn digits(&self) -> Signal<FrequencyDigits> {
        let panel = self.panel;
        Signal::derive(move || panel.get().digits())
    }

    /// Selected tuning rate projection.
    pub fn rate(&self) -> Signal<TuningRate> {
        let panel = self.panel;
        Signal::derive(move || panel.get().rate())
    }

    /// Selected mode projection.
    pub fn mode(&self) -> Signal<Mode> {
        let panel = self.panel;
        Signal::derive(move || panel.get().mode())
    }

    /// Selected band projection.
    pub fn band(&self) -> Signal<Band> {
        let panel = self.panel;
        Signal::derive(move || panel.get().band())
    }

    /// Tuning slider level projection.
    pub fn slider(&self) -> Signal<u8> {
        let panel = self.panel;
        Signal::derive(move || panel.get().slider())
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide application context to component tree.
pub fn provide_app_context() -> AppContext {
    let ctx = AppContext::new();
    provide_context(ctx);
    ctx
}

/// Use application context from component tree.
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
