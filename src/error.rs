use core::fmt;

/// The input of a conversion lies outside the domain covered by its
/// coefficient tables.
///
/// `value` is the rejected input; `min` and `max` are the inclusive
/// bounds of the domain for that conversion direction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RangeError {
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} is outside the valid range [{}, {}]",
            self.value, self.min, self.max
        )
    }
}

/// Error returned by [`ThermocoupleReader::read`](crate::ThermocoupleReader::read).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReadError<E> {
    /// The ADC failed to produce a sample.
    Adc(E),
    /// The sample or the cold-junction temperature could not be converted.
    OutOfRange(RangeError),
}

impl<E> From<RangeError> for ReadError<E> {
    fn from(error: RangeError) -> Self {
        ReadError::OutOfRange(error)
    }
}

impl<E: fmt::Debug> fmt::Display for ReadError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Adc(error) => write!(f, "ADC read failed: {:?}", error),
            ReadError::OutOfRange(error) => write!(f, "conversion failed: {}", error),
        }
    }
}
