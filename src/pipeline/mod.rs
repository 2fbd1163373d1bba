//! Fixed-threshold binarization pipeline.

mod binarize;
pub mod threshold;

pub use binarize::{Binarized, Config, Pipeline};
