//! Console panel view state.
//!
//! All mutable UI state lives here: the displayed readout, the
//! selected member of each button group, and the slider level. The
//! frontend projects this into reactive signals but every mutation
//! goes through the panel's handlers, so the selection and readout
//! invariants hold in one place.
//!
//! Requests are fire-and-forget: a failed or body-less response is an
//! explicit no-op against displayed state rather than an error path.
//! Responses are applied in arrival order; no sequence numbering is
//! attempted, matching the original console.

use crate::command::{Command, ScrollDirection};
use crate::controls::{Band, Mode, TuningRate};
use crate::digits::{DigitPosition, FrequencyDigits};

/// The tuning control panel state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConsolePanel {
    digits: FrequencyDigits,
    rate: TuningRate,
    mode: Mode,
    band: Band,
    slider: u8,
}

impl ConsolePanel {
    /// Boot state: LSB on 40m at 7.100.000 MHz, 100 kHz rate.
    #[must_use]
    pub fn new() -> Self {
        Self {
            digits: FrequencyDigits::default(),
            rate: TuningRate::Khz100,
            mode: Mode::Lsb,
            band: Band::M40,
            slider: 0,
        }
    }

    /// Current frequency readout.
    #[must_use]
    pub const fn digits(&self) -> FrequencyDigits {
        self.digits
    }

    /// Selected tuning rate.
    #[must_use]
    pub const fn rate(&self) -> TuningRate {
        self.rate
    }

    /// Selected mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Selected band.
    #[must_use]
    pub const fn band(&self) -> Band {
        self.band
    }

    /// Current slider level (0..=100).
    #[must_use]
    pub const fn slider(&self) -> u8 {
        self.slider
    }

    /// Dial rotated to a new angle. Issues a dial request.
    #[must_use]
    pub fn dial_moved(&self, rotation: f64) -> Command {
        Command::Dial { rotation }
    }

    /// Wheel tick over a digit slot. Issues a signed delta request.
    #[must_use]
    pub fn digit_scrolled(&self, position: DigitPosition, direction: ScrollDirection) -> Command {
        Command::scroll(position, direction)
    }

    /// Slider dragged to a new level. Levels above 100 clamp.
    pub fn slider_moved(&mut self, level: u8) -> Command {
        self.slider = level.min(100);
        Command::Slider { level: self.slider }
    }

    /// Rate button clicked: selects it (deselecting the rest of the
    /// group locally) and issues the rate request.
    pub fn rate_clicked(&mut self, rate: TuningRate) -> Command {
        self.rate = rate;
        Command::Rate(rate)
    }

    /// Mode button clicked, as [`Self::rate_clicked`].
    pub fn mode_clicked(&mut self, mode: Mode) -> Command {
        self.mode = mode;
        Command::Mode(mode)
    }

    /// Band button clicked, as [`Self::rate_clicked`]. The response
    /// to the issued request carries a fresh readout.
    pub fn band_clicked(&mut self, band: Band) -> Command {
        self.band = band;
        Command::Band(band)
    }

    /// Reconcile a completed request into the panel.
    ///
    /// Only commands that update the display may touch the readout,
    /// and only when the response actually parsed to nine digits.
    /// Everything else leaves the panel exactly as it was.
    pub fn apply_response(&mut self, command: &Command, digits: Option<FrequencyDigits>) {
        if command.updates_display() {
            if let Some(digits) = digits {
                self.digits = digits;
            }
        }
    }
}

impl Default for ConsolePanel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boot_state() {
        let panel = ConsolePanel::new();
        assert_eq!(panel.digits().to_hz(), 7_100_000);
        assert_eq!(panel.mode(), Mode::Lsb);
        assert_eq!(panel.band(), Band::M40);
        assert_eq!(panel.rate(), TuningRate::Khz100);
    }

    #[test]
    fn test_last_click_wins_per_group() {
        let mut panel = ConsolePanel::new();
        panel.rate_clicked(TuningRate::Hz10);
        panel.rate_clicked(TuningRate::Khz1);
        panel.mode_clicked(Mode::Am);
        panel.band_clicked(Band::Cm70);
        panel.band_clicked(Band::M15);
        assert_eq!(panel.rate(), TuningRate::Khz1);
        assert_eq!(panel.mode(), Mode::Am);
        assert_eq!(panel.band(), Band::M15);
    }

    #[test]
    fn test_clicking_one_group_leaves_others_alone() {
        let mut panel = ConsolePanel::new();
        panel.mode_clicked(Mode::Fm);
        assert_eq!(panel.rate(), TuningRate::Khz100);
        assert_eq!(panel.band(), Band::M40);
    }

    #[test]
    fn test_band_response_replaces_readout() {
        let mut panel = ConsolePanel::new();
        let command = panel.band_clicked(Band::M20);
        let digits = FrequencyDigits::parse("001400000").unwrap();
        panel.apply_response(&command, Some(digits));
        assert_eq!(panel.digits(), digits);
        assert_eq!(panel.digits().to_hz(), 1_400_000);
    }

    #[test]
    fn test_mode_response_never_touches_readout() {
        let mut panel = ConsolePanel::new();
        let before = panel.digits();
        let command = panel.mode_clicked(Mode::Fm);
        // Even a digit-shaped body on a mode response is ignored.
        let digits = FrequencyDigits::parse("999999999").unwrap();
        panel.apply_response(&command, Some(digits));
        assert_eq!(panel.digits(), before);
    }

    #[test]
    fn test_failed_request_is_a_no_op() {
        let mut panel = ConsolePanel::new();
        let before = panel;
        let command = panel.dial_moved(33.0);
        panel.apply_response(&command, None);
        assert_eq!(panel, before);
    }

    #[test]
    fn test_scroll_command_uses_slot_step() {
        let panel = ConsolePanel::new();
        assert_eq!(
            panel.digit_scrolled(DigitPosition::Khz10, ScrollDirection::Up),
            Command::Scroll { delta: 10_000 }
        );
        assert_eq!(
            panel.digit_scrolled(DigitPosition::Hz1, ScrollDirection::Down),
            Command::Scroll { delta: -1 }
        );
    }

    #[test]
    fn test_slider_clamps_to_scale() {
        let mut panel = ConsolePanel::new();
        assert_eq!(panel.slider_moved(250), Command::Slider { level: 100 });
        assert_eq!(panel.slider(), 100);
        panel.slider_moved(42);
        assert_eq!(panel.slider(), 42);
    }
}
