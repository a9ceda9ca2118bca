//! Type-K thermocouple conversion using the NIST ITS-90 reference
//! polynomials.
//!
//! [`temperature_to_millivolts`] and [`millivolts_to_temperature_c`]
//! convert between junction temperature and thermoelectric voltage,
//! both referenced to a 0 °C cold junction. [`compensate`] combines them
//! to correct a measured voltage for a cold junction at another
//! temperature, and [`ThermocoupleReader`] does the same for samples taken
//! through an `embedded-hal` ADC.
//!
//! # Examples
//!
//! ```
//! use thermocouple_k::{millivolts_to_temperature_c, temperature_to_millivolts};
//!
//! let millivolts = temperature_to_millivolts(100.0).unwrap();
//! assert!((millivolts - 4.096).abs() < 0.001);
//!
//! let celsius = millivolts_to_temperature_c(millivolts).unwrap();
//! assert!((celsius - 100.0).abs() < 0.05);
//!
//! assert!(temperature_to_millivolts(1400.0).is_err());
//! ```

#![cfg_attr(not(test), no_std)]

mod error;
pub mod lm92;
mod polynomial;
mod reader;
mod table;
mod thermocouple;
mod type_k;

pub use error::{RangeError, ReadError};
pub use polynomial::evaluate_polynomial;
pub use reader::{Config, ThermocoupleReader};
pub use table::{CoefficientTable, Conversion, ExtendedCorrection, Segment};
pub use thermocouple::Thermocouple;
pub use type_k::TYPE_K;

/// Returns the type-K thermocouple voltage (mV) for a junction at
/// `celsius`, valid from -270 °C to 1372 °C.
pub fn temperature_to_millivolts(celsius: f64) -> Result<f64, RangeError> {
    TYPE_K.temperature_to_millivolts(celsius)
}

/// Returns the junction temperature (°C) for a type-K thermocouple
/// voltage, valid from -5.891 mV to 54.886 mV.
pub fn millivolts_to_temperature_c(millivolts: f64) -> Result<f64, RangeError> {
    TYPE_K.millivolts_to_temperature_c(millivolts)
}

/// Returns the hot-junction temperature (°C) of a type-K thermocouple
/// measuring `measured_millivolts` with its cold junction at
/// `cold_junction_c`.
///
/// # Examples
///
/// ```
/// use thermocouple_k::{compensate, lm92};
///
/// let cold_junction_c = lm92::decode([0x0C, 0x80]); // 25 °C
/// let celsius = compensate(1.0, cold_junction_c).unwrap();
///
/// assert!((celsius - 49.48).abs() < 0.01);
/// ```
pub fn compensate(measured_millivolts: f64, cold_junction_c: f64) -> Result<f64, RangeError> {
    TYPE_K.compensate(measured_millivolts, cold_junction_c)
}
