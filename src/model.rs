//! Base abstraction implemented by every ground-motion model.

use crate::error::{ModelError, ModelResult};

/// Declared bounds for one scenario input.
///
/// Models list one of these per parameter they consume; `check` enforces
/// presence and range at construction time. Out-of-range values are
/// rejected, never clamped.
#[derive(Debug, Clone, Copy)]
pub struct NumericParameter {
    pub name: &'static str,
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl NumericParameter {
    /// A parameter that must be supplied.
    pub const fn required(name: &'static str, min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            name,
            required: true,
            min,
            max,
        }
    }

    /// A parameter that may be omitted.
    pub const fn optional(name: &'static str, min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            name,
            required: false,
            min,
            max,
        }
    }

    /// Validate a raw value against this spec.
    ///
    /// A missing required value is `MissingParameter`; a supplied value
    /// outside the bounds (including NaN) is `ParameterOutOfRange`.
    pub fn check(&self, value: Option<f64>) -> ModelResult<Option<f64>> {
        let value = match value {
            Some(v) => v,
            None if self.required => {
                return Err(ModelError::MissingParameter { name: self.name });
            }
            None => return Ok(None),
        };

        let min = self.min.unwrap_or(f64::NEG_INFINITY);
        let max = self.max.unwrap_or(f64::INFINITY);
        if !(value >= min && value <= max) {
            return Err(ModelError::ParameterOutOfRange {
                name: self.name,
                value,
                min,
                max,
            });
        }
        Ok(Some(value))
    }

    /// Validate a value that the caller knows is required.
    pub fn check_required(&self, value: Option<f64>) -> ModelResult<f64> {
        match self.check(value)? {
            Some(v) => Ok(v),
            None => Err(ModelError::MissingParameter { name: self.name }),
        }
    }
}

/// Read interface common to all ground-motion models.
///
/// Implementors compute their outputs eagerly at construction; every
/// method here is a cheap read of cached state. Index `INDEX_PGA` holds
/// peak ground acceleration, the remaining indices hold spectral
/// accelerations at the tabulated periods in ascending order.
pub trait GroundMotionModel {
    /// Full citation-style model name.
    const NAME: &'static str;
    /// Short label used in reports and plots.
    const ABBREV: &'static str;
    /// Row index of peak ground acceleration.
    const INDEX_PGA: usize = 0;

    /// Spectral periods [sec], aligned with `ln_resp` and `ln_std`.
    fn periods(&self) -> &[f64];

    /// Natural log of the mean response, one entry per period.
    fn ln_resp(&self) -> &[f64];

    /// Natural log of the aleatory standard deviation, one entry per period.
    fn ln_std(&self) -> &[f64];

    /// Mean response in linear units, one entry per period.
    fn resp(&self) -> Vec<f64> {
        self.ln_resp().iter().map(|v| v.exp()).collect()
    }

    /// Peak ground acceleration in linear units [g].
    fn pga(&self) -> f64 {
        self.ln_resp()[Self::INDEX_PGA].exp()
    }

    /// Interpolate the natural-log response at an arbitrary period.
    ///
    /// Linear in ln-period over the spectral-acceleration rows only (the
    /// PGA row is excluded). Returns `None` outside the tabulated range.
    fn interp_ln_resp(&self, period: f64) -> Option<f64> {
        let start = Self::INDEX_PGA + 1;
        let periods = &self.periods()[start..];
        let ln_resp = &self.ln_resp()[start..];

        let first = *periods.first()?;
        let last = *periods.last()?;
        if !(period >= first && period <= last) {
            return None;
        }

        let hi = periods.iter().position(|p| *p >= period)?;
        if periods[hi] == period {
            return Some(ln_resp[hi]);
        }
        let lo = hi - 1;
        let frac = (period.ln() - periods[lo].ln()) / (periods[hi].ln() - periods[lo].ln());
        Some(ln_resp[lo] + frac * (ln_resp[hi] - ln_resp[lo]))
    }

    /// Interpolated response in linear units at an arbitrary period.
    fn interp_resp(&self, period: f64) -> Option<f64> {
        self.interp_ln_resp(period).map(f64::exp)
    }
}
