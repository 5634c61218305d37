#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use crate::{scalb, Error, LogarithmMapping, MAX_SCALE, MIN_SCALE};
use core::f64::consts::LN_2;
use log::debug;

/// The configuration of a base-2 exponential bucketing.
///
/// * `scale` - controls the number of buckets that are used to span
///   consecutive powers of two. Each increment of the scale doubles the
///   number of buckets and halves their width on a logarithmic axis, so
///   there are `2^scale` buckets per power of two. Negative scales merge
///   `2^-scale` powers of two into each bucket.
///
/// # How to choose a scale
/// When a value is reported by the midpoint of its bucket, the error relative
/// to the reported value is at most `(base - 1) / (base + 1)` with
/// `base = 2^(2^-scale)`:
///
/// | scale | buckets per power of two | relative error |
/// |-------|--------------------------|----------------|
/// |     0 |                        1 |         33.33% |
/// |     2 |                        4 |          8.64% |
/// |     4 |                       16 |          2.17% |
/// |     6 |                       64 |          0.54% |
/// |     8 |                      256 |          0.14% |
/// |    10 |                     1024 |          0.03% |
///
/// # Constraints:
/// * `scale` must be in the range `MIN_SCALE..=MAX_SCALE`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Config {
    scale: i32,
}

impl Config {
    /// Create a new configuration, returning an error if the scale is outside
    /// of the supported range.
    pub fn new(scale: i32) -> Result<Self, Error> {
        let config = Self { scale };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), Error> {
        if self.scale < MIN_SCALE {
            debug!("rejecting scale {}: minimum is {MIN_SCALE}", self.scale);
            return Err(Error::ScaleTooLow);
        }

        if self.scale > MAX_SCALE {
            debug!("rejecting scale {}: maximum is {MAX_SCALE}", self.scale);
            return Err(Error::ScaleTooHigh);
        }

        Ok(())
    }

    /// Returns the scale.
    pub fn scale(&self) -> i32 {
        self.scale
    }

    /// Returns the ratio between the upper and lower boundary of every bucket,
    /// `2^(2^-scale)`.
    pub fn base(&self) -> f64 {
        scalb(1.0, -self.scale).exp2()
    }

    /// Returns the largest error, relative to the reported value, when a
    /// value is reported by the midpoint of its bucket.
    pub fn relative_error(&self) -> f64 {
        // (base - 1) / (base + 1) without overflowing for very coarse scales
        (scalb(LN_2, -self.scale) / 2.0).tanh()
    }

    /// Create the mapping for this configuration.
    ///
    /// The scale is checked again since the configuration may have been
    /// deserialized.
    pub fn mapper(&self) -> Result<LogarithmMapping, Error> {
        self.validate()?;
        Ok(LogarithmMapping::new(self.scale))
    }
}

impl TryFrom<i32> for Config {
    type Error = Error;

    fn try_from(scale: i32) -> Result<Self, Error> {
        Self::new(scale)
    }
}
