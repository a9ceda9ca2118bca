//! Decoding for the LM92 digital temperature sensor commonly used to
//! measure thermocouple cold junctions.
//!
//! The temperature register holds a 13-bit two's complement value in
//! bits 15..3 with a resolution of 0.0625 °C. Bits 2..0 are status flags
//! and are ignored.

/// Temperature represented by one least significant bit (°C).
pub const RESOLUTION: f64 = 0.0625;

/// Decodes the two bytes of the temperature register, most significant
/// byte first, into degrees Celsius.
///
/// # Examples
///
/// ```
/// use thermocouple_k::lm92;
///
/// assert_eq!(lm92::decode([0x0C, 0x80]), 25.0);
/// assert_eq!(lm92::decode([0xFF, 0xF8]), -0.0625);
/// ```
pub fn decode(bytes: [u8; 2]) -> f64 {
    let raw = i16::from_be_bytes(bytes) >> 3;
    f64::from(raw) * RESOLUTION
}
