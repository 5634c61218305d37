use crate::{scalb, Mapper};
use core::f64::consts::LOG2_E;
use log::trace;

/// A mapping which computes the bucket index directly from the natural
/// logarithm of the value.
///
/// The index of a value is `floor(log_base(value))` where the base is
/// `2^(2^-scale)`. Rewriting the logarithm as
///
/// ```text
/// log_base(value) = ln(value) / ln(2^(2^-scale))
///                 = ln(value) / (2^-scale * ln(2))
///                 = ln(value) * (log2(e) * 2^scale)
/// ```
///
/// lets the mapping cache `log2(e) * 2^scale` as a multiplier, so each lookup
/// is one logarithm and one multiplication.
///
/// Values which are exactly on a bucket boundary may be assigned to either of
/// the adjacent buckets since `ln` and the multiplication both round.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LogarithmMapping {
    scale: i32,
    scale_factor: f64,
}

impl LogarithmMapping {
    /// Create a new mapping for the provided scale.
    ///
    /// The scale is not validated. Scales outside of
    /// [`crate::MIN_SCALE`]`..=`[`crate::MAX_SCALE`] produce a degenerate
    /// mapping. Use [`crate::Config`] to construct a mapping from an untrusted
    /// scale.
    pub fn new(scale: i32) -> Self {
        let scale_factor = scalb(LOG2_E, scale);

        trace!("logarithm mapping: scale: {scale} scale factor: {scale_factor}");

        Self {
            scale,
            scale_factor,
        }
    }

    /// Returns the multiplier applied to `ln(value)` to produce the index.
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }
}

impl Mapper for LogarithmMapping {
    fn scale(&self) -> i32 {
        self.scale
    }

    fn map_to_index(&self, value: f64) -> i64 {
        // floor() rounds toward -Inf, truncation would merge the buckets on
        // either side of 1.0
        (value.ln() * self.scale_factor).floor() as i64
    }

    fn lower_boundary(&self, index: i64) -> f64 {
        // base^index = 2^(index * 2^-scale)
        scalb(index as f64, -self.scale).exp2()
    }
}
