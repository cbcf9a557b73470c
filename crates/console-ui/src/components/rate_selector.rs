//! Rate Selector Component.
//!
//! Button group for the dial tuning rate. Exactly one rate is
//! selected at a time; clicking selects locally and notifies the
//! backend, and the response body is unused.

use console_core::TuningRate;
use leptos::*;

/// Tuning rate selector component.
#[component]
pub fn RateSelector(
    /// Currently selected rate
    rate: Signal<TuningRate>,
    /// Callback when a rate is clicked
    on_change: Callback<TuningRate>,
) -> impl IntoView {
    view! {
        <div class="rate-selector">
            {TuningRate::all()
                .iter()
                .map(|&r| {
                    let is_selected = move || rate.get() == r;
                    view! {
                        <button
                            class="rate-button"
                            class:selected=is_selected
                            on:click=move |ev| {
                                ev.prevent_default();
                                on_change.call(r);
                            }
                        >
                            {r.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
