//! Radio Console Core Library
//!
//! Platform-agnostic tuning domain for the web radio console.
//! This crate is `no_std` compatible so the same types can back both
//! the WASM frontend and a future native CAT bridge.
//!
//! # Modules
//!
//! - [`digits`] - Frequency readout: digit slots, positions, steps
//! - [`controls`] - Selection groups: tuning rate, mode, band
//! - [`command`] - Outbound control commands and their wire encoding
//! - [`panel`] - Console panel view state and gesture handling

#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod command;
pub mod controls;
pub mod digits;
pub mod panel;

// Re-export commonly used types
pub use command::{Command, FormBody, ScrollDirection};
pub use controls::{Band, Mode, TuningRate};
pub use digits::{Digit, DigitPosition, FrequencyDigits, ResponseError};
pub use panel::ConsolePanel;
