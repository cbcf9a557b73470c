//! Band Selector Component.
//!
//! Button group for the amateur band. Unlike rate and mode, a band
//! change re-tunes the radio, so its response carries a fresh
//! nine-digit readout.

use console_core::Band;
use leptos::*;

/// Band selector component.
#[component]
pub fn BandSelector(
    /// Currently selected band
    band: Signal<Band>,
    /// Callback when a band is clicked
    on_change: Callback<Band>,
) -> impl IntoView {
    view! {
        <div class="band-selector">
            {Band::all()
                .iter()
                .map(|&b| {
                    let is_selected = move || band.get() == b;
                    view! {
                        <button
                            class="band-button"
                            class:selected=is_selected
                            on:click=move |ev| {
                                ev.prevent_default();
                                on_change.call(b);
                            }
                        >
                            {b.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
