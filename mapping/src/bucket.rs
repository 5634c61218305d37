//! A bucket is an index together with the half-open value range it covers.

/// The half-open range `[lower, upper)` of values which map to a bucket index.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bucket {
    pub(crate) index: i64,
    pub(crate) lower: f64,
    pub(crate) upper: f64,
}

impl Bucket {
    /// Returns the index of the bucket.
    pub fn index(&self) -> i64 {
        self.index
    }

    /// Returns the range for the bucket.
    pub fn range(&self) -> std::ops::Range<f64> {
        self.lower..self.upper
    }

    /// Returns the inclusive lower bound for the bucket.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Returns the exclusive upper bound for the bucket.
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Returns true if the value falls within the boundaries of this bucket.
    ///
    /// This compares against the computed boundaries, so it can disagree with
    /// the mapping for values within rounding error of a boundary.
    pub fn contains(&self, value: f64) -> bool {
        self.range().contains(&value)
    }
}
