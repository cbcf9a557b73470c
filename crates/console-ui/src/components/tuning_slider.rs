//! Tuning Slider Component.
//!
//! Coarse tuning slider, 0 to 100 across the current band segment.

use leptos::*;

/// Tuning slider component.
#[component]
pub fn TuningSlider(
    /// Current slider level (0..=100)
    level: Signal<u8>,
    /// Callback with the new level on each drag step
    on_change: Callback<u8>,
) -> impl IntoView {
    // The panel clamps to the 0..=100 scale; the component only parses.
    let handle_input = move |ev: web_sys::Event| {
        let target = event_target::<web_sys::HtmlInputElement>(&ev);
        if let Ok(value) = target.value().parse::<u8>() {
            on_change.call(value);
        }
    };

    view! {
        <div class="tuning-slider">
            <input
                type="range"
                class="slider"
                min="0"
                max="100"
                prop:value=move || level.get().to_string()
                on:input=handle_input
            />
            <span class="slider-value">{move || level.get()}</span>
        </div>
    }
}
