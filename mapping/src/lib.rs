// Copyright 2022 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Mapping between values and bucket indices for base-2 exponential
//! histograms.
//!
//! A base-2 exponential histogram divides the positive real line into buckets
//! whose boundaries are consecutive powers of `base = 2^(2^-scale)`. Bucket
//! `index` covers `[base^index, base^(index + 1))`. Raising the scale by one
//! splits every bucket in two, so the boundaries of one scale are also the
//! boundaries of every finer scale.
//!
//! The [`Mapper`] trait describes a mapping strategy and
//! [`LogarithmMapping`] implements it using the natural logarithm:
//!
//! ```
//! use base2_mapping::{Config, Mapper};
//!
//! let mapping = Config::new(2).unwrap().mapper().unwrap();
//!
//! assert_eq!(mapping.map_to_index(2.0), 4);
//! assert_eq!(mapping.lower_boundary(4), 2.0);
//! ```
//!
//! Storing counts for buckets is left to the histogram.

mod bucket;
mod config;
mod errors;
mod logarithm;
mod mapper;
mod scalb;

pub use bucket::Bucket;
pub use config::Config;
pub use errors::Error;
pub use logarithm::LogarithmMapping;
pub use mapper::Mapper;
pub use scalb::scalb;

/// The smallest supported scale. Every positive double falls into one of four
/// buckets at this scale.
pub const MIN_SCALE: i32 = -10;

/// The largest supported scale.
pub const MAX_SCALE: i32 = 20;
