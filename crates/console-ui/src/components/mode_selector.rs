//! Mode Selector Component.
//!
//! Button group for the operating mode (LSB, USB, AM, FM). Mode
//! changes never touch the frequency readout.

use console_core::Mode;
use leptos::*;

/// Mode selector component.
#[component]
pub fn ModeSelector(
    /// Currently selected mode
    mode: Signal<Mode>,
    /// Callback when a mode is clicked
    on_change: Callback<Mode>,
) -> impl IntoView {
    view! {
        <div class="mode-selector">
            {Mode::all()
                .iter()
                .map(|&m| {
                    let is_selected = move || mode.get() == m;
                    view! {
                        <button
                            class="mode-button"
                            class:selected=is_selected
                            on:click=move |ev| {
                                ev.prevent_default();
                                on_change.call(m);
                            }
                        >
                            {m.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
