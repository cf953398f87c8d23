//! Local binary pattern texture descriptors for grayscale images, built on
//! the [image] crate.
//!
//! Four variants share the same circular sampling and bit-encoding core:
//!
//! * [`local_binary_patterns::local_binary_pattern`] - the standard descriptor.
//! * [`local_binary_patterns::rotation_invariant_lbp`] - canonicalizes each
//!   pattern to the least of its cyclic rotations.
//! * [`local_binary_patterns::uniform_lbp`] - collapses patterns with many
//!   bit transitions into a single sentinel bucket.
//! * [`local_binary_patterns::adaptive_lbp`] - replaces the threshold
//!   comparison with a tolerance band around the center intensity.
//!
//! Each variant is a pure function from an input image and a sampling
//! configuration to a descriptor image of the same dimensions. Consumers are
//! responsible for image acquisition and for whatever follows the descriptor
//! (histogramming, classification, visualization).
//!
//! With the `rayon` cargo feature enabled, each variant also has a
//! `_parallel` version that distributes rows across threads and produces an
//! identical descriptor.
//!
//! [image]: https://github.com/image-rs/image
#![deny(missing_docs)]

#[cfg(feature = "rayon")]
#[macro_use]
mod doc_macros;

pub mod definitions;
mod error;
pub mod local_binary_patterns;
pub mod sampling;
pub mod utils;

pub use crate::error::Error;
