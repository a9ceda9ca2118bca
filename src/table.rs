use crate::{error::RangeError, polynomial::evaluate_polynomial};

/// The `a0 * exp(a1 * (x - a2)^2)` term NIST adds to the positive range
/// of the type-K temperature-to-voltage polynomial.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ExtendedCorrection {
    pub a0: f64,
    pub a1: f64,
    pub a2: f64,
}

impl ExtendedCorrection {
    pub fn evaluate(&self, x: f64) -> f64 {
        let offset = x - self.a2;
        self.a0 * libm::exp(self.a1 * offset * offset)
    }
}

/// Polynomial coefficients `c0..cn`, lowest order first.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CoefficientTable {
    Plain(&'static [f64]),
    Corrected {
        coefficients: &'static [f64],
        correction: ExtendedCorrection,
    },
}

impl CoefficientTable {
    pub fn coefficients(&self) -> &'static [f64] {
        match self {
            CoefficientTable::Plain(coefficients) => *coefficients,
            CoefficientTable::Corrected { coefficients, .. } => *coefficients,
        }
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        match self {
            CoefficientTable::Plain(coefficients) => evaluate_polynomial(coefficients, x),
            CoefficientTable::Corrected {
                coefficients,
                correction,
            } => evaluate_polynomial(coefficients, x) + correction.evaluate(x),
        }
    }
}

/// A coefficient table together with the input range it applies to.
///
/// A segment covers `lower <= x < upper`. The last segment of a
/// [`Conversion`] also covers `x == upper`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Segment {
    pub lower: f64,
    pub upper: f64,
    pub table: CoefficientTable,
}

/// One conversion direction: an ordered list of contiguous segments.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Conversion {
    segments: &'static [Segment],
}

impl Conversion {
    /// Creates a conversion from `segments`, which must be non-empty,
    /// sorted by `lower`, and each segment's `upper` must equal the next
    /// segment's `lower`.
    ///
    /// # Examples
    ///
    /// ```
    /// use thermocouple_k::{CoefficientTable, Conversion, Segment};
    ///
    /// const SEGMENTS: [Segment; 2] = [
    ///     Segment { lower: -1.0, upper: 0.0, table: CoefficientTable::Plain(&[0.0, -2.0]) },
    ///     Segment { lower: 0.0, upper: 1.0, table: CoefficientTable::Plain(&[0.0, 2.0]) },
    /// ];
    /// const DOUBLING: Conversion = Conversion::new(&SEGMENTS);
    ///
    /// assert_eq!(DOUBLING.evaluate(-0.5), Ok(1.0));
    /// assert_eq!(DOUBLING.evaluate(1.0), Ok(2.0));
    /// assert!(DOUBLING.evaluate(1.5).is_err());
    /// ```
    pub const fn new(segments: &'static [Segment]) -> Self {
        assert!(!segments.is_empty(), "A conversion needs at least one segment");

        let mut index = 0;
        while index < segments.len() {
            let segment = &segments[index];
            assert!(
                segment.lower < segment.upper,
                "Each segment must have lower < upper"
            );

            if index + 1 < segments.len() {
                assert!(
                    segment.upper == segments[index + 1].lower,
                    "The segments must be sorted and contiguous"
                );
            }

            index += 1;
        }

        Self { segments }
    }

    pub fn segments(&self) -> &'static [Segment] {
        self.segments
    }

    /// Returns the inclusive `(min, max)` input range.
    pub fn domain(&self) -> (f64, f64) {
        match (self.segments.first(), self.segments.last()) {
            (Some(first), Some(last)) => (first.lower, last.upper),
            _ => (f64::NAN, f64::NAN),
        }
    }

    /// Returns the segment whose range contains `x`.
    pub fn segment(&self, x: f64) -> Result<&'static Segment, RangeError> {
        let (min, max) = self.domain();
        let error = RangeError { value: x, min, max };
        let last = self.segments.len() - 1;

        self.segments
            .iter()
            .enumerate()
            .find(|(index, segment)| {
                segment.lower <= x
                    && (x < segment.upper || (*index == last && x == segment.upper))
            })
            .map(|(_, segment)| segment)
            .ok_or(error)
    }

    /// Evaluates the table of the segment containing `x`.
    pub fn evaluate(&self, x: f64) -> Result<f64, RangeError> {
        Ok(self.segment(x)?.table.evaluate(x))
    }
}
