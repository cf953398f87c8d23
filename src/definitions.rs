//! Type aliases.

use image::{ImageBuffer, Pixel};

/// An `ImageBuffer` containing Pixels of type P with storage
/// `Vec<P::Subpixel>`.
pub type Image<P> = ImageBuffer<P, Vec<<P as Pixel>::Subpixel>>;
