use crate::{Bucket, Error};

/// Converts values into bucket indices and bucket indices back into their
/// boundaries for a base-2 exponential histogram.
///
/// For a given scale the base of the buckets is `2^(2^-scale)`, and bucket
/// `index` covers the half-open range
/// `[lower_boundary(index), upper_boundary(index))`. Different strategies
/// (for example table driven ones for small scales) can implement this trait
/// so histograms can be built without knowing which one is in use.
///
/// Implementations hold only immutable state and may be shared freely between
/// threads.
pub trait Mapper: Send + Sync {
    /// Returns the scale of this mapping.
    fn scale(&self) -> i32;

    /// Returns the index of the bucket containing the value.
    ///
    /// The value must be positive and finite. Other inputs produce an
    /// unspecified index. See [`Mapper::try_map_to_index`] for a variant that
    /// validates the input.
    fn map_to_index(&self, value: f64) -> i64;

    /// Returns the inclusive lower boundary of the bucket.
    ///
    /// Indices outside the representable range saturate to `0.0` or
    /// `f64::INFINITY`.
    fn lower_boundary(&self, index: i64) -> f64;

    /// Returns the exclusive upper boundary of the bucket, which is the lower
    /// boundary of the next bucket.
    fn upper_boundary(&self, index: i64) -> f64 {
        self.lower_boundary(index.saturating_add(1))
    }

    /// Returns the bucket with the provided index.
    fn bucket(&self, index: i64) -> Bucket {
        Bucket {
            index,
            lower: self.lower_boundary(index),
            upper: self.upper_boundary(index),
        }
    }

    /// Returns the index of the bucket containing the value, or an error if
    /// the value is not positive and finite.
    fn try_map_to_index(&self, value: f64) -> Result<i64, Error> {
        if !(value > 0.0 && value.is_finite()) {
            return Err(Error::InvalidValue);
        }

        Ok(self.map_to_index(value))
    }

    /// Returns the lower boundary of the bucket, or an error if the boundary
    /// is not representable as a positive finite value.
    fn try_lower_boundary(&self, index: i64) -> Result<f64, Error> {
        let boundary = self.lower_boundary(index);

        if boundary == f64::INFINITY {
            Err(Error::Overflow)
        } else if boundary == 0.0 {
            Err(Error::Underflow)
        } else {
            Ok(boundary)
        }
    }
}
