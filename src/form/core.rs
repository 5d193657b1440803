use std::fmt;
use std::str::FromStr;

use crate::error::{FitError, Result};
use crate::model::RoomDimensions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionField {
    Length,
    Width,
    Height,
}

impl DimensionField {
    pub const ALL: [DimensionField; 3] = [
        DimensionField::Length,
        DimensionField::Width,
        DimensionField::Height,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DimensionField::Length => "length",
            DimensionField::Width => "width",
            DimensionField::Height => "height",
        }
    }
}

impl fmt::Display for DimensionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DimensionField {
    type Err = FitError;

    fn from_str(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "length" => Ok(DimensionField::Length),
            "width" => Ok(DimensionField::Width),
            "height" => Ok(DimensionField::Height),
            other => Err(FitError::Config(format!("unknown dimension field `{other}`"))),
        }
    }
}

/// Editable room dimensions in meters, all starting at zero.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DimensionForm {
    length: f64,
    width: f64,
    height: f64,
}

impl DimensionForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the text typed into `field`, returning the coerced value.
    pub fn set(&mut self, field: DimensionField, raw: &str) -> f64 {
        let value = coerce(raw);
        *self.slot(field) = value;
        value
    }

    pub fn get(&self, field: DimensionField) -> f64 {
        match field {
            DimensionField::Length => self.length,
            DimensionField::Width => self.width,
            DimensionField::Height => self.height,
        }
    }

    /// Accept the current values only when every dimension is positive.
    pub fn submit(&self) -> Result<RoomDimensions> {
        for field in DimensionField::ALL {
            let value = self.get(field);
            if value <= 0.0 {
                return Err(FitError::InvalidDimension {
                    field: field.name(),
                    value,
                });
            }
        }
        Ok(RoomDimensions::new(self.length, self.width, self.height))
    }

    fn slot(&mut self, field: DimensionField) -> &mut f64 {
        match field {
            DimensionField::Length => &mut self.length,
            DimensionField::Width => &mut self.width,
            DimensionField::Height => &mut self.height,
        }
    }
}

fn coerce(raw: &str) -> f64 {
    match numeric_prefix(raw.trim_start()).parse::<f64>() {
        Ok(value) if value.is_finite() => value.max(0.0),
        _ => 0.0,
    }
}

/// Longest leading slice shaped like a decimal number (`2.5` of `2.5m`).
fn numeric_prefix(text: &str) -> &str {
    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    &text[..end]
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
