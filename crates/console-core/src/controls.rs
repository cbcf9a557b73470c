//! Console selection groups.
//!
//! Tuning rate, operating mode and band are each a mutually
//! exclusive button group on the console. Modeling each group as an
//! enum makes the "at most one member selected" invariant structural:
//! the panel holds one value per group and cannot hold more.

/// Tuning rate: the frequency step applied per dial increment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TuningRate {
    /// 100 kHz per increment
    Khz100,
    /// 10 kHz per increment
    Khz10,
    /// 1 kHz per increment
    Khz1,
    /// 100 Hz per increment
    Hz100,
    /// 10 Hz per increment
    Hz10,
}

impl TuningRate {
    /// Wire and display label for the rate.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            TuningRate::Khz100 => "100KHz",
            TuningRate::Khz10 => "10KHz",
            TuningRate::Khz1 => "1KHz",
            TuningRate::Hz100 => "100Hz",
            TuningRate::Hz10 => "10Hz",
        }
    }

    /// All rates in display order.
    #[must_use]
    pub const fn all() -> &'static [TuningRate] {
        &[
            TuningRate::Khz100,
            TuningRate::Khz10,
            TuningRate::Khz1,
            TuningRate::Hz100,
            TuningRate::Hz10,
        ]
    }

    /// Look a rate up by its wire label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|r| r.label() == label)
    }
}

/// Operating mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Lower Sideband
    Lsb,
    /// Upper Sideband
    Usb,
    /// Amplitude Modulation
    Am,
    /// Frequency Modulation
    Fm,
}

impl Mode {
    /// Wire and display label for the mode.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Mode::Lsb => "LSB",
            Mode::Usb => "USB",
            Mode::Am => "AM",
            Mode::Fm => "FM",
        }
    }

    /// All modes in display order.
    #[must_use]
    pub const fn all() -> &'static [Mode] {
        &[Mode::Lsb, Mode::Usb, Mode::Am, Mode::Fm]
    }

    /// Look a mode up by its wire label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|m| m.label() == label)
    }
}

/// Amateur band.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Band {
    /// 160 metres
    M160,
    /// 80 metres
    M80,
    /// 40 metres
    M40,
    /// 20 metres
    M20,
    /// 15 metres
    M15,
    /// 10 metres
    M10,
    /// 2 metres
    M2,
    /// 70 centimetres
    Cm70,
}

impl Band {
    /// Wire and display label for the band.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Band::M160 => "160m",
            Band::M80 => "80m",
            Band::M40 => "40m",
            Band::M20 => "20m",
            Band::M15 => "15m",
            Band::M10 => "10m",
            Band::M2 => "2m",
            Band::Cm70 => "70cm",
        }
    }

    /// All bands in display order.
    #[must_use]
    pub const fn all() -> &'static [Band] {
        &[
            Band::M160,
            Band::M80,
            Band::M40,
            Band::M20,
            Band::M15,
            Band::M10,
            Band::M2,
            Band::Cm70,
        ]
    }

    /// Look a band up by its wire label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|b| b.label() == label)
    }
}
