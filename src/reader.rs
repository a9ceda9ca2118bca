use crate::{error::ReadError, thermocouple::Thermocouple, type_k::TYPE_K};
use embedded_hal::adc::{Channel, OneShot};

/// Configuration for a `ThermocoupleReader`.
///
/// - `min_millivolts`: The thermocouple voltage corresponding to an ADC reading of `0` (mV)
/// - `max_millivolts`: The thermocouple voltage corresponding to the ADC's full scale (mV)
/// - `precision`: The precision of the ADC in bits (eg. for 16-bit precision, use `16`)
///
/// Any amplifier gain in front of the ADC is folded into the millivolt span.
///
/// # Examples
///
/// ```
/// use thermocouple_k::Config;
///
/// let config = Config {
///     min_millivolts: -100.0, // ±0.1 V bipolar range
///     max_millivolts: 100.0,
///     precision: 16,          // 16 bits of precision
/// };
///
/// assert_eq!(config.millivolts(32768), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub min_millivolts: f64,
    pub max_millivolts: f64,
    pub precision: u32,
}

impl Config {
    /// Converts a raw ADC value to the thermocouple voltage (mV).
    pub fn millivolts(&self, adc_value: u32) -> f64 {
        let exponent = i32::try_from(self.precision).unwrap_or(i32::MAX);
        let max_adc_value = libm::ldexp(1.0, exponent);
        let span = self.max_millivolts - self.min_millivolts;

        self.min_millivolts + f64::from(adc_value) * span / max_adc_value
    }
}

type Error<Adc, ADC, Word, Pin> = <Adc as OneShot<ADC, Word, Pin>>::Error;

/// Reads a thermocouple through one ADC channel.
#[derive(Debug)]
pub struct ThermocoupleReader<Pin> {
    pin: Pin,
    config: Config,
    thermocouple: Thermocouple,
}

impl<Pin> ThermocoupleReader<Pin> {
    /// Returns a type-K reader using the provided `config`.
    ///
    /// `config.min_millivolts` must be below `config.max_millivolts` and
    /// `config.precision` must be between 1 and 32 or this function will
    /// panic when running in debug mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use thermocouple_k::{Config, ThermocoupleReader};
    /// # use embedded_hal_mock::adc::MockChan0;
    /// #
    /// # let pin = MockChan0 {};
    ///
    /// let reader = ThermocoupleReader::new(
    ///     pin,
    ///     Config {
    ///         min_millivolts: -32.0,
    ///         max_millivolts: 32.0,
    ///         precision: 16,
    ///     },
    /// );
    /// ```
    pub fn new<ADC>(pin: Pin, config: Config) -> Self
    where
        Pin: Channel<ADC>,
    {
        Self::with_thermocouple(pin, config, TYPE_K)
    }

    /// Returns a reader for any `thermocouple` type.
    pub fn with_thermocouple<ADC>(pin: Pin, config: Config, thermocouple: Thermocouple) -> Self
    where
        Pin: Channel<ADC>,
    {
        debug_assert!(
            config.min_millivolts < config.max_millivolts,
            "The millivolt span must be increasing"
        );
        debug_assert!(
            (1..=32).contains(&config.precision),
            "The precision must be between 1 and 32 bits"
        );

        Self {
            pin,
            config,
            thermocouple,
        }
    }

    /// Destroys the reader and returns the `Pin`.
    pub fn free(self) -> Pin {
        self.pin
    }

    /// Returns the ADC span this reader was created with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Samples the ADC and returns the uncompensated thermocouple
    /// voltage (mV).
    pub fn read_millivolts<Adc, ADC, Word>(
        &mut self,
        adc: &mut Adc,
    ) -> nb::Result<f64, Error<Adc, ADC, Word, Pin>>
    where
        Word: Into<u32>,
        Pin: Channel<ADC>,
        Adc: OneShot<ADC, Word, Pin>,
    {
        let adc_value = adc.read(&mut self.pin)?;

        Ok(self.config.millivolts(adc_value.into()))
    }

    /// Samples the ADC and returns the hot-junction temperature (°C),
    /// compensated for a cold junction at `cold_junction_c`.
    ///
    /// # Examples
    ///
    /// ```
    /// use thermocouple_k::{Config, ThermocoupleReader};
    /// # use embedded_hal_mock::adc::{Mock, MockChan0, Transaction};
    /// #
    /// # let expectations: [Transaction<u16>; 1] = [Transaction::read(0, 33792)];
    /// # let mut adc = Mock::new(&expectations);
    /// # let pin = MockChan0 {};
    ///
    /// let mut reader = ThermocoupleReader::new(
    ///     pin,
    ///     Config {
    ///         min_millivolts: -32.0,
    ///         max_millivolts: 32.0,
    ///         precision: 16,
    ///     },
    /// );
    ///
    /// // 1 mV measured with the cold junction at 25 °C
    /// let celsius = reader.read(&mut adc, 25.0).unwrap();
    /// assert!((celsius - 49.48).abs() < 0.01);
    /// ```
    pub fn read<Adc, ADC, Word>(
        &mut self,
        adc: &mut Adc,
        cold_junction_c: f64,
    ) -> nb::Result<f64, ReadError<Error<Adc, ADC, Word, Pin>>>
    where
        Word: Into<u32>,
        Pin: Channel<ADC>,
        Adc: OneShot<ADC, Word, Pin>,
    {
        let millivolts = self
            .read_millivolts::<Adc, ADC, Word>(adc)
            .map_err(|error| error.map(ReadError::Adc))?;

        self.thermocouple
            .compensate(millivolts, cold_junction_c)
            .map_err(|error| nb::Error::Other(error.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RangeError;
    use embedded_hal_mock::{
        adc::{Mock, MockChan0, Transaction},
        common::Generic,
        MockError,
    };
    use std::io::ErrorKind;

    fn config() -> Config {
        Config {
            min_millivolts: -32.0,
            max_millivolts: 32.0,
            precision: 16,
        }
    }

    fn reader(config: Config) -> ThermocoupleReader<MockChan0> {
        let pin = MockChan0 {};
        ThermocoupleReader::new(pin, config)
    }

    fn adc(expectations: &[Transaction<u16>]) -> Generic<Transaction<u16>> {
        Mock::new(expectations)
    }

    fn assert_read_close(value: u16, cold_junction_c: f64, expected: f64) {
        let mut reader = reader(config());
        let expectations = [Transaction::read(0, value)];
        let mut adc = adc(&expectations);

        let celsius = reader.read(&mut adc, cold_junction_c).unwrap();
        assert!(
            (celsius - expected).abs() < 0.01,
            "{} is not close to {}",
            celsius,
            expected
        );
    }

    #[test]
    #[should_panic]
    fn panics_if_span_is_reversed() {
        reader(Config {
            min_millivolts: 10.0,
            max_millivolts: -10.0,
            precision: 12,
        });
    }

    #[test]
    #[should_panic]
    fn panics_if_precision_is_too_large() {
        reader(Config {
            precision: 33,
            ..config()
        });
    }

    #[test]
    fn maps_adc_values_onto_span() {
        let config = config();

        assert_eq!(config.millivolts(0), -32.0);
        assert_eq!(config.millivolts(32768), 0.0);
        assert_eq!(config.millivolts(33792), 1.0);
        assert_eq!(config.millivolts(65535), 32.0 - 1.0 / 1024.0);
    }

    #[test]
    fn large_precision_does_not_overflow() {
        for precision in [64, 100, u32::MAX] {
            let config = Config {
                precision,
                ..config()
            };

            let millivolts = config.millivolts(u32::MAX);
            assert!(millivolts.is_finite());
            assert!((millivolts - config.min_millivolts).abs() < 1e-6);
        }
    }

    #[test]
    fn reads_millivolts() {
        let mut reader = reader(config());
        let expectations = [Transaction::read(0, 31744)];
        let mut adc = adc(&expectations);

        assert_eq!(reader.read_millivolts(&mut adc), Ok(-1.0));
    }

    #[test]
    fn cold_junction_at_zero() {
        assert_read_close(32768, 0.0, 0.0);
    }

    #[test]
    fn compensates_cold_junction() {
        assert_read_close(33792, 25.0, 49.48);
    }

    #[test]
    fn voltage_outside_range() {
        let mut reader = reader(config());
        let expectations = [Transaction::read(0, 0)];
        let mut adc = adc(&expectations);

        match reader.read(&mut adc, 0.0) {
            Err(nb::Error::Other(ReadError::OutOfRange(RangeError { value, min, max }))) => {
                assert!((value + 32.0).abs() < 1e-6);
                assert_eq!((min, max), (-5.891, 54.886));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn cold_junction_outside_range() {
        let mut reader = reader(config());
        let expectations = [Transaction::read(0, 32768)];
        let mut adc = adc(&expectations);

        assert!(matches!(
            reader.read(&mut adc, 1400.0),
            Err(nb::Error::Other(ReadError::OutOfRange(_)))
        ));
    }

    #[test]
    fn error() {
        let mut reader = reader(config());
        let mut adc =
            adc(&[Transaction::read(0, 0).with_error(MockError::Io(ErrorKind::InvalidData))]);

        assert_eq!(
            reader.read(&mut adc, 25.0),
            Err(nb::Error::Other(ReadError::Adc(MockError::Io(
                ErrorKind::InvalidData
            ))))
        );
    }

    #[test]
    fn custom_thermocouple() {
        use crate::{CoefficientTable, Conversion, Segment};

        // 0.05 mV/°C, linear in both directions
        const TO_MILLIVOLTS: [Segment; 1] = [Segment {
            lower: -100.0,
            upper: 100.0,
            table: CoefficientTable::Plain(&[0.0, 0.05]),
        }];
        const TO_CELSIUS: [Segment; 1] = [Segment {
            lower: -5.0,
            upper: 5.0,
            table: CoefficientTable::Plain(&[0.0, 20.0]),
        }];
        const LINEAR: Thermocouple = Thermocouple {
            temperature_to_millivolts: Conversion::new(&TO_MILLIVOLTS),
            millivolts_to_temperature: Conversion::new(&TO_CELSIUS),
        };

        let mut reader = ThermocoupleReader::with_thermocouple(MockChan0 {}, config(), LINEAR);
        let expectations = [Transaction::read(0, 33792)];
        let mut adc = adc(&expectations);

        assert_eq!(reader.config(), &config());
        assert_eq!(reader.read(&mut adc, 20.0), Ok(40.0));
    }

    #[test]
    fn read_error_display() {
        let error: ReadError<MockError> = ReadError::Adc(MockError::Io(ErrorKind::InvalidData));
        assert!(error.to_string().starts_with("ADC read failed"));
    }

    #[test]
    fn free_returns_pin() {
        let _pin: MockChan0 = reader(config()).free();
    }
}
