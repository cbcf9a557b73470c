//! Frequency Display Component.
//!
//! Nine digit slots, 100 MHz down to 1 Hz, with per-digit wheel
//! tuning. The readout is grouped MHz.KHz.Hz with dot separators.

use console_core::{DigitPosition, FrequencyDigits, ScrollDirection};
use leptos::*;

/// CSS class for a digit slot, grouped by magnitude.
fn slot_class(position: DigitPosition) -> &'static str {
    if position.step() >= 1_000_000 {
        "digit MHz"
    } else if position.step() >= 1_000 {
        "digit KHz"
    } else {
        "digit Hz"
    }
}

/// Frequency display component with digit-based tuning.
#[component]
pub fn FrequencyDisplay(
    /// Current frequency readout
    digits: Signal<FrequencyDigits>,
    /// Callback when a digit slot is scrolled
    on_scroll: Callback<(DigitPosition, ScrollDirection)>,
) -> impl IntoView {
    view! {
        <div class="frequency-display">
            <div class="frequency-digits">
                {DigitPosition::all()
                    .iter()
                    .enumerate()
                    .map(|(i, &position)| {
                        let slot = view! {
                            <span
                                id=position.id()
                                class=slot_class(position)
                                on:wheel=move |ev| {
                                    ev.prevent_default();
                                    let direction = ScrollDirection::from_delta_y(ev.delta_y());
                                    on_scroll.call((position, direction));
                                }
                            >
                                {move || digits.get().at(position).as_char().to_string()}
                            </span>
                        }
                        .into_view();
                        // Dot separators between the MHz, KHz and Hz groups
                        if i == 2 || i == 5 {
                            view! {
                                {slot}
                                <span class="Sep">"."</span>
                            }
                            .into_view()
                        } else {
                            slot
                        }
                    })
                    .collect_view()}
            </div>
            <div class="frequency-unit">"MHz"</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_classes_follow_magnitude_groups() {
        assert_eq!(slot_class(DigitPosition::Mhz100), "digit MHz");
        assert_eq!(slot_class(DigitPosition::Mhz1), "digit MHz");
        assert_eq!(slot_class(DigitPosition::Khz100), "digit KHz");
        assert_eq!(slot_class(DigitPosition::Khz1), "digit KHz");
        assert_eq!(slot_class(DigitPosition::Hz100), "digit Hz");
        assert_eq!(slot_class(DigitPosition::Hz1), "digit Hz");
    }
}
