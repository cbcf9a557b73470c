//! Outbound control commands.
//!
//! Every console gesture maps to one HTTP PUT against a backend
//! service, carrying a single form field. The command type is the
//! single source of truth for that wire table: endpoint path, field
//! encoding, and whether the response body carries a fresh readout.

use core::fmt::Write;

use crate::controls::{Band, Mode, TuningRate};
use crate::digits::DigitPosition;

/// Form-encoded PUT body.
///
/// Capacity covers the longest field=value pair the console can emit
/// (`scroll=-100000000` plus headroom for the dial angle).
pub type FormBody = heapless::String<48>;

/// Direction of a wheel scroll over a digit slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Toward higher frequency.
    Up,
    /// Toward lower frequency.
    Down,
}

impl ScrollDirection {
    /// Map a DOM `WheelEvent.deltaY` to a direction.
    ///
    /// Standard wheel events report negative deltaY for a scroll-up
    /// gesture (the opposite of the legacy `wheelDelta` convention).
    #[must_use]
    pub fn from_delta_y(delta_y: f64) -> Self {
        if delta_y < 0.0 {
            ScrollDirection::Up
        } else {
            ScrollDirection::Down
        }
    }

    /// +1 for up, -1 for down.
    #[must_use]
    pub const fn sign(&self) -> i64 {
        match self {
            ScrollDirection::Up => 1,
            ScrollDirection::Down => -1,
        }
    }
}

/// A control change to send to the backend.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Jog dial moved to a new rotation angle.
    Dial {
        /// Current dial rotation in degrees.
        rotation: f64,
    },
    /// Wheel tick over a digit slot, as a signed Hz delta.
    Scroll {
        /// Signed frequency delta in Hz.
        delta: i64,
    },
    /// Tuning slider moved.
    Slider {
        /// Slider value, 0..=100.
        level: u8,
    },
    /// Tuning rate button clicked.
    Rate(TuningRate),
    /// Mode button clicked.
    Mode(Mode),
    /// Band button clicked.
    Band(Band),
}

impl Command {
    /// Build the scroll command for one wheel tick at a digit slot.
    #[must_use]
    pub fn scroll(position: DigitPosition, direction: ScrollDirection) -> Self {
        Command::Scroll {
            delta: direction.sign() * position.step() as i64,
        }
    }

    /// Backend service path for this command.
    #[must_use]
    pub const fn endpoint(&self) -> &'static str {
        match self {
            Command::Dial { .. } => "/dial_service",
            Command::Scroll { .. } => "/scroll_service",
            Command::Slider { .. } => "/slider_service",
            Command::Rate(_) => "/rate_service",
            Command::Mode(_) => "/mode_service",
            Command::Band(_) => "/band_service",
        }
    }

    /// Form-encoded request body, a single field per command.
    #[must_use]
    pub fn form_body(&self) -> FormBody {
        let mut body = FormBody::new();
        // All values are bounded, so the write cannot overflow the
        // buffer; a formatting error would only truncate the body.
        let _ = match self {
            Command::Dial { rotation } => write!(body, "rotation={:.2}", rotation),
            Command::Scroll { delta } => write!(body, "scroll={}", delta),
            Command::Slider { level } => write!(body, "slider={}", level),
            Command::Rate(rate) => write!(body, "rate={}", rate.label()),
            Command::Mode(mode) => write!(body, "mode={}", mode.label()),
            Command::Band(band) => write!(body, "band={}", band.label()),
        };
        body
    }

    /// Whether a successful response carries a fresh 9-digit readout.
    ///
    /// Rate and mode changes leave the displayed frequency alone;
    /// everything else re-tunes and reports the result.
    #[must_use]
    pub const fn updates_display(&self) -> bool {
        match self {
            Command::Dial { .. } | Command::Scroll { .. } | Command::Slider { .. } => true,
            Command::Band(_) => true,
            Command::Rate(_) | Command::Mode(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_up_requests_positive_step() {
        for position in DigitPosition::all() {
            let command = Command::scroll(*position, ScrollDirection::Up);
            assert_eq!(
                command,
                Command::Scroll {
                    delta: position.step() as i64
                }
            );
        }
    }

    #[test]
    fn test_scroll_down_requests_negative_step() {
        for position in DigitPosition::all() {
            let command = Command::scroll(*position, ScrollDirection::Down);
            assert_eq!(
                command,
                Command::Scroll {
                    delta: -(position.step() as i64)
                }
            );
        }
    }

    #[test]
    fn test_wheel_delta_sign_convention() {
        assert_eq!(ScrollDirection::from_delta_y(-3.0), ScrollDirection::Up);
        assert_eq!(ScrollDirection::from_delta_y(120.0), ScrollDirection::Down);
    }

    #[test]
    fn test_endpoints() {
        assert_eq!(Command::Dial { rotation: 0.0 }.endpoint(), "/dial_service");
        assert_eq!(Command::Scroll { delta: 10 }.endpoint(), "/scroll_service");
        assert_eq!(Command::Slider { level: 0 }.endpoint(), "/slider_service");
        assert_eq!(Command::Rate(TuningRate::Khz1).endpoint(), "/rate_service");
        assert_eq!(Command::Mode(Mode::Fm).endpoint(), "/mode_service");
        assert_eq!(Command::Band(Band::M20).endpoint(), "/band_service");
    }

    #[test]
    fn test_form_bodies() {
        assert_eq!(
            Command::Dial { rotation: -42.5 }.form_body().as_str(),
            "rotation=-42.50"
        );
        assert_eq!(
            Command::Scroll { delta: -100_000_000 }.form_body().as_str(),
            "scroll=-100000000"
        );
        assert_eq!(
            Command::Slider { level: 73 }.form_body().as_str(),
            "slider=73"
        );
        assert_eq!(
            Command::Rate(TuningRate::Khz100).form_body().as_str(),
            "rate=100KHz"
        );
        assert_eq!(Command::Mode(Mode::Fm).form_body().as_str(), "mode=FM");
        assert_eq!(Command::Band(Band::M20).form_body().as_str(), "band=20m");
    }

    #[test]
    fn test_display_update_policy() {
        assert!(Command::Dial { rotation: 1.0 }.updates_display());
        assert!(Command::Scroll { delta: -10 }.updates_display());
        assert!(Command::Slider { level: 50 }.updates_display());
        assert!(Command::Band(Band::M160).updates_display());
        assert!(!Command::Rate(TuningRate::Hz10).updates_display());
        assert!(!Command::Mode(Mode::Usb).updates_display());
    }
}
