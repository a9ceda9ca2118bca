use crate::{error::RangeError, table::Conversion};

/// The pair of reference conversions for one thermocouple type.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Thermocouple {
    pub temperature_to_millivolts: Conversion,
    pub millivolts_to_temperature: Conversion,
}

impl Thermocouple {
    /// Returns the thermoelectric voltage (mV) of a junction at
    /// `celsius`, referenced to 0 °C.
    pub fn temperature_to_millivolts(&self, celsius: f64) -> Result<f64, RangeError> {
        self.temperature_to_millivolts.evaluate(celsius)
    }

    /// Returns the junction temperature (°C) producing `millivolts`,
    /// referenced to 0 °C.
    pub fn millivolts_to_temperature_c(&self, millivolts: f64) -> Result<f64, RangeError> {
        self.millivolts_to_temperature.evaluate(millivolts)
    }

    /// Returns the hot-junction temperature (°C) for a thermocouple
    /// measuring `measured_millivolts` while its cold junction sits at
    /// `cold_junction_c`.
    ///
    /// # Examples
    ///
    /// ```
    /// use thermocouple_k::TYPE_K;
    ///
    /// // Cold junction at 0 °C needs no compensation
    /// let celsius = TYPE_K.compensate(4.096, 0.0).unwrap();
    /// assert!((celsius - 100.0).abs() < 0.05);
    /// ```
    pub fn compensate(
        &self,
        measured_millivolts: f64,
        cold_junction_c: f64,
    ) -> Result<f64, RangeError> {
        let cold_junction_millivolts = self.temperature_to_millivolts(cold_junction_c)?;
        self.millivolts_to_temperature_c(measured_millivolts + cold_junction_millivolts)
    }
}
