//! NIST ITS-90 reference polynomials for type-K thermocouples.
//!
//! Coefficients are from <http://srdata.nist.gov/its90/download/type_k.tab>.

use crate::{
    table::{CoefficientTable, Conversion, ExtendedCorrection, Segment},
    thermocouple::Thermocouple,
};

/// -270 °C to 0 °C
const TEMPERATURE_TO_MILLIVOLTS_NEGATIVE: [f64; 11] = [
    0.0E0,
    0.39450128025E-1,
    0.23622373598E-4,
    -0.32858906784E-6,
    -0.49904828777E-8,
    -0.67509059173E-10,
    -0.57410327428E-12,
    -0.31088872894E-14,
    -0.10451609365E-16,
    -0.19889266878E-19,
    -0.16322697486E-22,
];

/// 0 °C to 1372 °C
const TEMPERATURE_TO_MILLIVOLTS_POSITIVE: [f64; 10] = [
    -0.17600413686E-1,
    0.38921204975E-1,
    0.18558770032E-4,
    -0.99457592874E-7,
    0.31840945719E-9,
    -0.56072844889E-12,
    0.56075059059E-15,
    -0.32020720003E-18,
    0.97151147152E-22,
    -0.12104721275E-25,
];

const TEMPERATURE_TO_MILLIVOLTS_CORRECTION: ExtendedCorrection = ExtendedCorrection {
    a0: 0.1185976E0,
    a1: -0.1183432E-3,
    a2: 0.1269686E3,
};

/// -5.891 mV to 0 mV (-200 °C to 0 °C)
const MILLIVOLTS_TO_TEMPERATURE_NEGATIVE: [f64; 9] = [
    0.0E0,
    2.5173462E1,
    -1.1662878E0,
    -1.0833638E0,
    -8.977354E-1,
    -3.7342377E-1,
    -8.6632643E-2,
    -1.0450598E-2,
    -5.1920577E-4,
];

/// 0 mV to 20.644 mV (0 °C to 500 °C)
const MILLIVOLTS_TO_TEMPERATURE_LOW: [f64; 10] = [
    0.0E0,
    2.508355E1,
    7.860106E-2,
    -2.503131E-1,
    8.31527E-2,
    -1.228034E-2,
    9.804036E-4,
    -4.41303E-5,
    1.057734E-6,
    -1.052755E-8,
];

/// 20.644 mV to 54.886 mV (500 °C to 1372 °C)
const MILLIVOLTS_TO_TEMPERATURE_HIGH: [f64; 7] = [
    -1.318058E2,
    4.830222E1,
    -1.646031E0,
    5.464731E-2,
    -9.650715E-4,
    8.802193E-6,
    -3.11081E-8,
];

const TEMPERATURE_TO_MILLIVOLTS: [Segment; 2] = [
    Segment {
        lower: -270.0,
        upper: 0.0,
        table: CoefficientTable::Plain(&TEMPERATURE_TO_MILLIVOLTS_NEGATIVE),
    },
    Segment {
        lower: 0.0,
        upper: 1372.0,
        table: CoefficientTable::Corrected {
            coefficients: &TEMPERATURE_TO_MILLIVOLTS_POSITIVE,
            correction: TEMPERATURE_TO_MILLIVOLTS_CORRECTION,
        },
    },
];

const MILLIVOLTS_TO_TEMPERATURE: [Segment; 3] = [
    Segment {
        lower: -5.891,
        upper: 0.0,
        table: CoefficientTable::Plain(&MILLIVOLTS_TO_TEMPERATURE_NEGATIVE),
    },
    Segment {
        lower: 0.0,
        upper: 20.644,
        table: CoefficientTable::Plain(&MILLIVOLTS_TO_TEMPERATURE_LOW),
    },
    Segment {
        lower: 20.644,
        upper: 54.886,
        table: CoefficientTable::Plain(&MILLIVOLTS_TO_TEMPERATURE_HIGH),
    },
];

/// Type-K (chromel/alumel) thermocouple.
pub const TYPE_K: Thermocouple = Thermocouple {
    temperature_to_millivolts: Conversion::new(&TEMPERATURE_TO_MILLIVOLTS),
    millivolts_to_temperature: Conversion::new(&MILLIVOLTS_TO_TEMPERATURE),
};
