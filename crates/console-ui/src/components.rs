//! UI components for the radio console.

pub mod band_selector;
pub mod frequency_display;
pub mod jog_dial;
pub mod mode_selector;
pub mod rate_selector;
pub mod tuning_slider;

pub use band_selector::BandSelector;
pub use frequency_display::FrequencyDisplay;
pub use jog_dial::JogDial;
pub use mode_selector::ModeSelector;
pub use rate_selector::RateSelector;
pub use tuning_slider::TuningSlider;
