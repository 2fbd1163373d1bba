//! # binarizer
//!
//! Convert a color photograph into a black-and-white image with a fixed
//! brightness threshold.
//!
//! Every pixel is reduced to its BT.601 luma and then mapped to 255 if the
//! luma is at least 128, or to 0 otherwise. The result is saved as a PNG and
//! can optionally be previewed next to the original.
//!
//! ## Example
//!
//! ```no_run
//! use binarizer::{naming, Config, Pipeline};
//!
//! # fn main() -> binarizer::Result<()> {
//! let config = Config {
//!     preview: false,
//!     ..Config::default()
//! };
//! let pipeline = Pipeline::new(config)?;
//!
//! let output = naming::output_path("images/output", "binarized", "png");
//! pipeline.process("images/input/pumpkins.jpg", &output)?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod image;
pub mod naming;
pub mod pipeline;
pub mod preview;

pub use error::{Error, Result};
pub use pipeline::{threshold, Binarized, Config, Pipeline};
