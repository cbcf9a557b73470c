//! Frequency readout digits.
//!
//! The console displays frequency as nine independently addressed
//! digit slots, 100 MHz down to 1 Hz. The backend reports frequency
//! as a nine character string in the same order; the display is only
//! ever replaced wholesale from such a response, never edited a slot
//! at a time.

use core::fmt;

/// Number of digit slots in the frequency readout.
pub const DIGIT_COUNT: usize = 9;

/// A single decimal digit (0..=9).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Digit(u8);

impl Digit {
    /// Create a digit, rejecting values above 9.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Create a digit from an ASCII character.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '0'..='9' => Some(Self(ch as u8 - b'0')),
            _ => None,
        }
    }

    /// Digit value (0..=9).
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Digit as an ASCII character.
    #[must_use]
    pub const fn as_char(&self) -> char {
        (self.0 + b'0') as char
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A digit slot position in the readout, most significant first.
///
/// The discriminant order matches the wire order: index 0 is the
/// 100 MHz digit, index 8 the 1 Hz digit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DigitPosition {
    /// 100 MHz digit
    Mhz100,
    /// 10 MHz digit
    Mhz10,
    /// 1 MHz digit
    Mhz1,
    /// 100 kHz digit
    Khz100,
    /// 10 kHz digit
    Khz10,
    /// 1 kHz digit
    Khz1,
    /// 100 Hz digit
    Hz100,
    /// 10 Hz digit
    Hz10,
    /// 1 Hz digit
    Hz1,
}

impl DigitPosition {
    /// All positions in display order, left to right.
    #[must_use]
    pub const fn all() -> &'static [DigitPosition; DIGIT_COUNT] {
        &[
            DigitPosition::Mhz100,
            DigitPosition::Mhz10,
            DigitPosition::Mhz1,
            DigitPosition::Khz100,
            DigitPosition::Khz10,
            DigitPosition::Khz1,
            DigitPosition::Hz100,
            DigitPosition::Hz10,
            DigitPosition::Hz1,
        ]
    }

    /// Increment step in Hz for one scroll tick at this position.
    #[must_use]
    pub const fn step(&self) -> u64 {
        match self {
            DigitPosition::Mhz100 => 100_000_000,
            DigitPosition::Mhz10 => 10_000_000,
            DigitPosition::Mhz1 => 1_000_000,
            DigitPosition::Khz100 => 100_000,
            DigitPosition::Khz10 => 10_000,
            DigitPosition::Khz1 => 1_000,
            DigitPosition::Hz100 => 100,
            DigitPosition::Hz10 => 10,
            DigitPosition::Hz1 => 1,
        }
    }

    /// Element id for this slot, as rendered in the console markup.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            DigitPosition::Mhz100 => "MHz100",
            DigitPosition::Mhz10 => "MHz10",
            DigitPosition::Mhz1 => "MHz1",
            DigitPosition::Khz100 => "KHz100",
            DigitPosition::Khz10 => "KHz10",
            DigitPosition::Khz1 => "KHz1",
            DigitPosition::Hz100 => "Hz100",
            DigitPosition::Hz10 => "Hz10",
            DigitPosition::Hz1 => "Hz1",
        }
    }

    /// Index of this slot in the readout (0 = 100 MHz).
    #[must_use]
    pub const fn index(&self) -> usize {
        *self as usize
    }
}

/// Error parsing a frequency response body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseError {
    /// Body did not contain exactly nine characters.
    Length(usize),
    /// Body contained a non-digit character.
    NonDigit(char),
}

impl fmt::Display for ResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseError::Length(n) => {
                write!(f, "expected {} digits, got {} characters", DIGIT_COUNT, n)
            }
            ResponseError::NonDigit(ch) => write!(f, "non-digit character {:?} in response", ch),
        }
    }
}

/// The nine-slot frequency readout.
///
/// Index 0 is the 100 MHz digit, index 8 the 1 Hz digit. The readout
/// is replaced atomically: there is no per-slot mutation API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrequencyDigits([Digit; DIGIT_COUNT]);

impl FrequencyDigits {
    /// Parse a response body of exactly nine ASCII digits.
    ///
    /// Leading and trailing whitespace is tolerated; anything else is
    /// rejected rather than guessed at.
    pub fn parse(body: &str) -> Result<Self, ResponseError> {
        let body = body.trim();
        let mut digits = [Digit::default(); DIGIT_COUNT];
        let mut count = 0;
        for ch in body.chars() {
            let digit = Digit::from_char(ch).ok_or(ResponseError::NonDigit(ch))?;
            if count == DIGIT_COUNT {
                return Err(ResponseError::Length(body.chars().count()));
            }
            digits[count] = digit;
            count += 1;
        }
        if count != DIGIT_COUNT {
            return Err(ResponseError::Length(count));
        }
        Ok(Self(digits))
    }

    /// Build a readout from a frequency in Hz.
    ///
    /// Frequencies beyond the nine-digit range saturate at
    /// 999.999.999 Hz rather than wrapping.
    #[must_use]
    pub fn from_hz(hz: u64) -> Self {
        let mut value = hz.min(999_999_999);
        let mut digits = [Digit::default(); DIGIT_COUNT];
        for slot in digits.iter_mut().rev() {
            *slot = Digit((value % 10) as u8);
            value /= 10;
        }
        Self(digits)
    }

    /// Frequency in Hz represented by the readout.
    #[must_use]
    pub fn to_hz(&self) -> u64 {
        self.0
            .iter()
            .fold(0u64, |acc, digit| acc * 10 + u64::from(digit.value()))
    }

    /// Digit slots in display order.
    #[must_use]
    pub const fn slots(&self) -> &[Digit; DIGIT_COUNT] {
        &self.0
    }

    /// Digit at a given position.
    #[must_use]
    pub fn at(&self, position: DigitPosition) -> Digit {
        self.0[position.index()]
    }
}

impl Default for FrequencyDigits {
    /// Boot readout: 7.100.000 MHz, the console model default.
    fn default() -> Self {
        Self::from_hz(7_100_000)
    }
}

impl fmt::Display for FrequencyDigits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in &self.0 {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_table() {
        let expected: [u64; DIGIT_COUNT] = [
            100_000_000,
            10_000_000,
            1_000_000,
            100_000,
            10_000,
            1_000,
            100,
            10,
            1,
        ];
        for (position, step) in DigitPosition::all().iter().zip(expected) {
            assert_eq!(position.step(), step);
        }
    }

    #[test]
    fn test_positions_in_descending_magnitude_order() {
        let steps = DigitPosition::all().map(|p| p.step());
        for pair in steps.windows(2) {
            assert!(pair[0] > pair[1]);
        }
    }

    #[test]
    fn test_parse_valid_response() {
        let digits = FrequencyDigits::parse("001400000").unwrap();
        let rendered: std::string::String = digits.slots().iter().map(Digit::as_char).collect();
        assert_eq!(rendered, "001400000");
        assert_eq!(digits.to_hz(), 1_400_000);
    }

    #[test]
    fn test_parse_tolerates_surrounding_whitespace() {
        let digits = FrequencyDigits::parse("007100000\n").unwrap();
        assert_eq!(digits.to_hz(), 7_100_000);
    }

    #[test]
    fn test_parse_rejects_short_and_long_bodies() {
        assert_eq!(
            FrequencyDigits::parse("0014000"),
            Err(ResponseError::Length(7))
        );
        assert_eq!(
            FrequencyDigits::parse("0014000000"),
            Err(ResponseError::Length(10))
        );
        assert_eq!(FrequencyDigits::parse(""), Err(ResponseError::Length(0)));
    }

    #[test]
    fn test_parse_rejects_non_digits() {
        assert_eq!(
            FrequencyDigits::parse("00140000x"),
            Err(ResponseError::NonDigit('x'))
        );
        assert_eq!(
            FrequencyDigits::parse("007.100.0"),
            Err(ResponseError::NonDigit('.'))
        );
    }

    #[test]
    fn test_from_hz_round_trip() {
        let digits = FrequencyDigits::from_hz(144_300_500);
        assert_eq!(digits.to_hz(), 144_300_500);
        assert_eq!(digits.at(DigitPosition::Mhz100), Digit::new(1).unwrap());
        assert_eq!(digits.at(DigitPosition::Hz100), Digit::new(5).unwrap());
    }

    #[test]
    fn test_from_hz_saturates() {
        assert_eq!(FrequencyDigits::from_hz(u64::MAX).to_hz(), 999_999_999);
    }

    #[test]
    fn test_default_is_console_model_default() {
        assert_eq!(FrequencyDigits::default().to_hz(), 7_100_000);
    }

    #[test]
    fn test_digit_char_conversions() {
        assert_eq!(Digit::from_char('7').unwrap().value(), 7);
        assert_eq!(Digit::from_char('a'), None);
        assert_eq!(Digit::new(10), None);
        assert_eq!(Digit::new(9).unwrap().as_char(), '9');
    }
}
