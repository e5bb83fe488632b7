//! Pool volume estimation from dimensions.

use std::f64::consts::PI;

use thiserror::Error;

use super::models::PoolShape;

/// Fill factor for oval, kidney and free-form pools.
const IRREGULAR_FACTOR: f64 = 0.85;
const LITERS_PER_M3: f64 = 1000.0;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VolumeError {
    #[error("{field} must be a positive number of meters")]
    InvalidDimension { field: &'static str },
}

impl VolumeError {
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidDimension { field } => field,
        }
    }
}

/// Parse a dimension typed into a form. The first comma is read as a
/// decimal point and the longest leading number wins, so `"10m"` is 10 and
/// `"2,5.1"` is 2.5. Blank or non-numeric input is 0.
pub fn parse_dimension(raw: &str) -> f64 {
    let normalized = raw.trim_start().replacen(',', ".", 1);
    let prefix = &normalized[..numeric_prefix_len(normalized.as_bytes())];
    prefix.parse::<f64>().unwrap_or(0.0)
}

/// Length of the longest `[+-]digits[.digits][e[+-]digits]` prefix.
fn numeric_prefix_len(bytes: &[u8]) -> usize {
    let digits_from = |mut i: usize| {
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_end = digits_from(end);
    let mut mantissa_end = int_end;
    if bytes.get(int_end) == Some(&b'.') {
        mantissa_end = digits_from(int_end + 1);
    }
    // A sign or lone dot is not a number
    let has_digits = int_end > end || mantissa_end > int_end + 1;
    if !has_digits {
        return 0;
    }
    end = mantissa_end;

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    end
}

/// Estimate the water volume in liters, rounded to the nearest liter.
pub fn estimate_volume_liters(
    shape: PoolShape,
    length_m: f64,
    width_m: f64,
    depth_m: f64,
) -> Result<u64, VolumeError> {
    for (field, value) in [("length", length_m), ("width", width_m), ("depth", depth_m)] {
        if !value.is_finite() || value <= 0.0 {
            return Err(VolumeError::InvalidDimension { field });
        }
    }

    let cubic_meters = match shape {
        PoolShape::Rectangular => length_m * width_m * depth_m,
        PoolShape::Round => {
            let radius = length_m / 2.0;
            PI * radius.powi(2) * depth_m
        }
        PoolShape::Oval | PoolShape::Kidney | PoolShape::Custom => {
            length_m * width_m * depth_m * IRREGULAR_FACTOR
        }
    };

    Ok((cubic_meters * LITERS_PER_M3).round() as u64)
}
