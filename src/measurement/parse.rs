//! Parse-and-validate boundary producing a [`Measurement`].

use super::error::{Field, ValidationError};
use super::raw::RawValue;

/// Validated dimensions (cm) and mass (kg) of one package.
///
/// All four values are finite and strictly greater than zero. The only way
/// to obtain a `Measurement` is through [`Measurement::new`] or
/// [`Measurement::parse`], both of which enforce this.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    width: f64,
    height: f64,
    length: f64,
    mass: f64,
}

impl Measurement {
    /// Validate four numeric values.
    ///
    /// Fields are checked in positional order (width, height, length, mass);
    /// the first invalid one is reported.
    pub fn new(width: f64, height: f64, length: f64, mass: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            width: check_number(Field::Width, width)?,
            height: check_number(Field::Height, height)?,
            length: check_number(Field::Length, length)?,
            mass: check_number(Field::Mass, mass)?,
        })
    }

    /// Coerce and validate four untrusted values.
    ///
    /// Numeric text such as `"10.5"` (surrounding whitespace allowed) is
    /// converted before validation. Missing values, booleans, arrays, objects
    /// and text that does not parse are rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use parcelsort::{Field, Measurement};
    ///
    /// let m = Measurement::parse("10", 20.0, "30.5", 4u32)?;
    /// assert_eq!(m.length(), 30.5);
    ///
    /// let err = Measurement::parse(1.0, 1.0, 1.0, None::<f64>).unwrap_err();
    /// assert_eq!(err.field(), Field::Mass);
    /// # Ok::<(), parcelsort::ValidationError>(())
    /// ```
    pub fn parse(
        width: impl Into<RawValue>,
        height: impl Into<RawValue>,
        length: impl Into<RawValue>,
        mass: impl Into<RawValue>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            width: parse_field(Field::Width, width.into())?,
            height: parse_field(Field::Height, height.into())?,
            length: parse_field(Field::Length, length.into())?,
            mass: parse_field(Field::Mass, mass.into())?,
        })
    }

    /// Width in centimeters.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Height in centimeters.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Length in centimeters.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Mass in kilograms.
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Volume in cubic centimeters.
    pub fn volume(&self) -> f64 {
        self.width * self.height * self.length
    }
}

/// Resolve one raw value to a valid measurement component.
pub fn parse_field(field: Field, raw: RawValue) -> Result<f64, ValidationError> {
    match raw {
        RawValue::Number(value) => check_number(field, value),
        RawValue::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Err(ValidationError::Unparseable { field, text });
            }
            match trimmed.parse::<f64>() {
                Ok(value) => check_number(field, value),
                Err(_) => Err(ValidationError::Unparseable { field, text }),
            }
        }
        RawValue::Missing => Err(ValidationError::Missing { field }),
        RawValue::Unsupported(kind) => Err(ValidationError::NotNumeric { field, kind }),
    }
}

fn check_number(field: Field, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field, value });
    }
    if value <= 0.0 {
        return Err(ValidationError::NotPositive { field, value });
    }
    Ok(value)
}
