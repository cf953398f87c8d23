//! Functions for computing [local binary patterns] of grayscale images.
//!
//! Four variants are provided: the standard descriptor
//! ([`local_binary_pattern`]), a rotation-invariant one
//! ([`rotation_invariant_lbp`]), a uniform one ([`uniform_lbp`]) and an
//! adaptive-threshold one ([`adaptive_lbp`]). All of them sample a circle of
//! `p` points with radius `r` around each pixel, encode the samples as a
//! `p`-bit pattern and write the pattern into a descriptor image with the
//! same dimensions as the input.
//!
//! Only the interior region, at least `r` pixels away from every edge, is
//! ever visited. Border cells keep the zero default; there is no padding and
//! no wraparound.
//!
//! [local binary patterns]: https://en.wikipedia.org/wiki/Local_binary_patterns

use std::cmp;
use std::f32::consts::PI;

use image::{GrayImage, Luma};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::definitions::Image;
use crate::error::Error;
use crate::sampling::{sample_bilinear, sample_nearest, Interpolation};

/// Band fraction used for [`adaptive_lbp`] when no better value is known.
pub const DEFAULT_BAND_FRACTION: f32 = 0.1;

/// Width of a descriptor cell in bits.
const PATTERN_BITS: u32 = 8;

/// Which comparison turns a sample into a bit.
#[derive(Debug, Clone, Copy)]
enum Rule {
    GreaterEqual,
    Band(f32),
}

/// Encodes `samples` against `center` using the greater-or-equal threshold
/// rule: bit `p` is 1 if `samples[p] >= center`.
///
/// Bits are packed with sample index 0 as the most significant bit of the
/// emitted pattern, i.e. `pattern = sum(bit[p] * 2^(len - 1 - p))`.
///
/// # Panics
///
/// If `samples.len() > 8`.
///
/// # Examples
/// ```
/// use lbp::local_binary_patterns::threshold_pattern;
///
/// let pattern = threshold_pattern(10.0, &[12.0, 9.0, 10.0, 3.0]);
/// assert_eq!(pattern, 0b1010);
/// ```
pub fn threshold_pattern(center: f32, samples: &[f32]) -> u8 {
    assert!(
        samples.len() <= PATTERN_BITS as usize,
        "a u8 pattern holds at most 8 samples"
    );

    let mut pattern = 0u8;
    for &sample in samples {
        pattern = (pattern << 1) | (sample >= center) as u8;
    }
    pattern
}

/// Encodes `samples` against a symmetric tolerance band around `center`:
/// bit `p` is 1 if `center * (1 - band) <= samples[p] <= center * (1 + band)`.
///
/// Bits are packed with sample index 0 as the most significant bit, as in
/// [`threshold_pattern`].
///
/// # Panics
///
/// If `samples.len() > 8`.
///
/// # Examples
/// ```
/// use lbp::local_binary_patterns::band_pattern;
///
/// // Band of [90, 110] around the center.
/// let pattern = band_pattern(100.0, &[105.0, 115.0, 90.0], 0.1);
/// assert_eq!(pattern, 0b101);
/// ```
pub fn band_pattern(center: f32, samples: &[f32], band: f32) -> u8 {
    assert!(
        samples.len() <= PATTERN_BITS as usize,
        "a u8 pattern holds at most 8 samples"
    );

    let lower = center * (1.0 - band);
    let upper = center * (1.0 + band);

    let mut pattern = 0u8;
    for &sample in samples {
        pattern = (pattern << 1) | (lower <= sample && sample <= upper) as u8;
    }
    pattern
}

/// Returns the least value over the first `p` cyclic rotations of `pattern`.
///
/// Patterns that are cyclic rotations of one another map to the same
/// canonical value, which makes the result invariant to rotations of the
/// sampling circle. Only `p` of the 8 possible byte rotations are tried;
/// canonicalization is deliberately tied to the sampling parameter.
///
/// # Panics
///
/// If `p` is 0 or greater than 8.
///
/// # Examples
/// ```
/// use lbp::local_binary_patterns::min_rotation;
///
/// assert_eq!(min_rotation(0b0001_1000, 8), 0b0000_0011);
/// assert_eq!(min_rotation(0b1011_0100, 8), 0b0010_1101);
/// ```
pub fn min_rotation(pattern: u8, p: u32) -> u8 {
    assert!(p >= 1 && p <= PATTERN_BITS, "p must be in 1..=8");

    let mut min = pattern;
    for k in 1..p {
        min = cmp::min(min, pattern.rotate_right(k));
    }
    min
}

/// Number of adjacent differing bit pairs in the 8-bit representation of
/// `pattern`, without wrapping around from the last bit back to the first.
///
/// A pattern with at most 2 transitions is called uniform.
///
/// # Examples
/// ```
/// use lbp::local_binary_patterns::count_transitions;
///
/// assert_eq!(count_transitions(0b0000_0000), 0);
/// assert_eq!(count_transitions(0b1111_0000), 1);
/// assert_eq!(count_transitions(0b1001_1001), 4);
/// assert_eq!(count_transitions(0b0101_0101), 7);
/// ```
pub fn count_transitions(pattern: u8) -> u32 {
    ((pattern ^ (pattern >> 1)) & 0x7f).count_ones()
}

/// Computes the local binary pattern descriptor of `image`.
///
/// Around each interior pixel, `p` points on a circle of radius `r` are
/// sampled with the requested interpolation and compared against the center
/// intensity with the greater-or-equal rule. Bits are packed with sample
/// index 0 as the most significant bit of the cell. Border cells within `r`
/// of an edge stay 0.
///
/// The sample at angle `theta` for the center at row `i`, column `j` is read
/// at row `j + r * cos(theta)`, column `i + r * sin(theta)`. The sine and
/// cosine terms are attached to swapped axes; this convention is load-bearing
/// for numeric compatibility and shared by [`rotation_invariant_lbp`] and
/// [`adaptive_lbp`].
///
/// # Examples
/// ```
/// use lbp::local_binary_patterns::local_binary_pattern;
/// use lbp::sampling::Interpolation;
/// use lbp::{assert_pixels_eq, gray_image};
///
/// let image = gray_image!(
///     5, 9, 3;
///     2, 6, 7;
///     8, 4, 1);
///
/// // Samples for the center, in order: 4, 7, 9, 2. Compared against the
/// // center intensity 6 this gives the bits 0, 1, 1, 0, most significant
/// // bit first.
/// let expected = gray_image!(
///     0, 0, 0;
///     0, 6, 0;
///     0, 0, 0);
///
/// let descriptor = local_binary_pattern(&image, 4, 1.0, Interpolation::Nearest).unwrap();
/// assert_pixels_eq!(descriptor, expected);
/// ```
pub fn local_binary_pattern(
    image: &GrayImage,
    p: u32,
    r: f32,
    interpolation: Interpolation,
) -> Result<Image<Luma<u8>>, Error> {
    validate_config(p, r)?;
    pattern_image(image, p, r, Rule::GreaterEqual, interpolation)
}

/// Computes the rotation-invariant local binary pattern descriptor of
/// `image`.
///
/// A full [`local_binary_pattern`] pass with bilinear interpolation runs
/// first; each interior cell of its result is then replaced by
/// [`min_rotation`] of its pattern, so patterns that are cyclic rotations of
/// one another map to the same canonical code.
pub fn rotation_invariant_lbp(image: &GrayImage, p: u32, r: f32) -> Result<Image<Luma<u8>>, Error> {
    let base = local_binary_pattern(image, p, r, Interpolation::Bilinear)?;
    Ok(minimize_rotations(&base, p, interior_margin(r)))
}

/// Computes the uniform local binary pattern descriptor of `image`.
///
/// Neighbors are read directly at integer offsets, truncating
/// `r * sin(theta)` and `r * cos(theta)` toward zero - no interpolation.
/// Unlike the other variants, bits accumulate with sample index 0 as the
/// least significant bit (`bit[p] << p`), and the sine term is attached to
/// the row axis. Both divergences are preserved deliberately; do not unify
/// them with [`local_binary_pattern`].
///
/// Cells whose pattern has more than 2 bit transitions (see
/// [`count_transitions`]) collapse to the sentinel value `p + 1`; uniform
/// patterns are emitted as-is.
///
/// # Examples
/// ```
/// use lbp::local_binary_patterns::uniform_lbp;
/// use lbp::{assert_pixels_eq, gray_image};
///
/// let image = gray_image!(
///     9, 2, 7;
///     1, 5, 6;
///     2, 8, 4);
///
/// // Neighbors in sample order: 6, 8, 1, 2; bits 1, 1, 0, 0 packed least
/// // significant bit first give 0b0011, which is uniform.
/// let expected = gray_image!(
///     0, 0, 0;
///     0, 3, 0;
///     0, 0, 0);
///
/// let descriptor = uniform_lbp(&image, 4, 1.0).unwrap();
/// assert_pixels_eq!(descriptor, expected);
/// ```
pub fn uniform_lbp(image: &GrayImage, p: u32, r: f32) -> Result<Image<Luma<u8>>, Error> {
    validate_config(p, r)?;

    let (width, height) = image.dimensions();
    let mut out = GrayImage::new(width, height);
    let margin = interior_margin(r);
    if interior_is_empty(width, height, margin) {
        return Ok(out);
    }

    for (i, row) in interior_rows(&mut out, width, height, margin) {
        uniform_row(image, row, i, margin, p, r);
    }
    Ok(out)
}

/// Computes the adaptive local binary pattern descriptor of `image`.
///
/// Instead of the greater-or-equal threshold, each sample is tested against
/// a symmetric tolerance band `[center * (1 - band), center * (1 + band)]`;
/// see [`band_pattern`]. Sampling and bit packing match
/// [`local_binary_pattern`]. [`DEFAULT_BAND_FRACTION`] is a reasonable
/// starting point for `band`.
///
/// # Examples
/// ```
/// use lbp::local_binary_patterns::{adaptive_lbp, DEFAULT_BAND_FRACTION};
/// use lbp::sampling::Interpolation;
/// use lbp::{assert_pixels_eq, gray_image};
///
/// let image = gray_image!(
///     5, 52, 3;
///     47, 50, 98;
///     8, 54, 1);
///
/// // Samples for the center, in order: 54, 98, 52, 47. The band around the
/// // center intensity 50 is [45, 55], so the bits are 1, 0, 1, 1.
/// let expected = gray_image!(
///     0, 0, 0;
///     0, 11, 0;
///     0, 0, 0);
///
/// let descriptor =
///     adaptive_lbp(&image, 4, 1.0, DEFAULT_BAND_FRACTION, Interpolation::Nearest).unwrap();
/// assert_pixels_eq!(descriptor, expected);
/// ```
pub fn adaptive_lbp(
    image: &GrayImage,
    p: u32,
    r: f32,
    band: f32,
    interpolation: Interpolation,
) -> Result<Image<Luma<u8>>, Error> {
    validate_config(p, r)?;
    validate_band(band)?;
    pattern_image(image, p, r, Rule::Band(band), interpolation)
}

#[cfg(feature = "rayon")]
#[doc = generate_parallel_doc_comment!("local_binary_pattern")]
pub fn local_binary_pattern_parallel(
    image: &GrayImage,
    p: u32,
    r: f32,
    interpolation: Interpolation,
) -> Result<Image<Luma<u8>>, Error> {
    validate_config(p, r)?;
    pattern_image_parallel(image, p, r, Rule::GreaterEqual, interpolation)
}

#[cfg(feature = "rayon")]
#[doc = generate_parallel_doc_comment!("rotation_invariant_lbp")]
pub fn rotation_invariant_lbp_parallel(
    image: &GrayImage,
    p: u32,
    r: f32,
) -> Result<Image<Luma<u8>>, Error> {
    let base = local_binary_pattern_parallel(image, p, r, Interpolation::Bilinear)?;
    Ok(minimize_rotations_parallel(&base, p, interior_margin(r)))
}

#[cfg(feature = "rayon")]
#[doc = generate_parallel_doc_comment!("uniform_lbp")]
pub fn uniform_lbp_parallel(image: &GrayImage, p: u32, r: f32) -> Result<Image<Luma<u8>>, Error> {
    validate_config(p, r)?;

    let (width, height) = image.dimensions();
    let mut out = GrayImage::new(width, height);
    let margin = interior_margin(r);
    if interior_is_empty(width, height, margin) {
        return Ok(out);
    }

    interior_rows_parallel(&mut out, width, height, margin)
        .for_each(|(i, row)| uniform_row(image, row, i, margin, p, r));
    Ok(out)
}

#[cfg(feature = "rayon")]
#[doc = generate_parallel_doc_comment!("adaptive_lbp")]
pub fn adaptive_lbp_parallel(
    image: &GrayImage,
    p: u32,
    r: f32,
    band: f32,
    interpolation: Interpolation,
) -> Result<Image<Luma<u8>>, Error> {
    validate_config(p, r)?;
    validate_band(band)?;
    pattern_image_parallel(image, p, r, Rule::Band(band), interpolation)
}

fn validate_config(p: u32, r: f32) -> Result<(), Error> {
    if p == 0 {
        return Err(Error::InvalidSampleCount);
    }
    if p > PATTERN_BITS {
        return Err(Error::PatternOverflow { samples: p });
    }
    if !r.is_finite() || r <= 0.0 {
        return Err(Error::InvalidRadius { radius: r });
    }
    Ok(())
}

fn validate_band(band: f32) -> Result<(), Error> {
    if !band.is_finite() || band < 0.0 {
        return Err(Error::InvalidBandFraction { band });
    }
    Ok(())
}

/// Width of the border strip that a full sampling neighborhood cannot fit
/// into. With integer radii this is the radius itself.
fn interior_margin(r: f32) -> u32 {
    r.ceil() as u32
}

fn interior_is_empty(width: u32, height: u32, margin: u32) -> bool {
    u64::from(width) <= 2 * u64::from(margin) || u64::from(height) <= 2 * u64::from(margin)
}

/// The interior rows of `out` as mutable slices, tagged with their row index.
fn interior_rows<'a>(
    out: &'a mut GrayImage,
    width: u32,
    height: u32,
    margin: u32,
) -> impl Iterator<Item = (u32, &'a mut [u8])> + 'a {
    out.chunks_mut(width as usize)
        .enumerate()
        .skip(margin as usize)
        .take((height - 2 * margin) as usize)
        .map(|(i, row)| (i as u32, row))
}

#[cfg(feature = "rayon")]
fn interior_rows_parallel<'a>(
    out: &'a mut GrayImage,
    width: u32,
    height: u32,
    margin: u32,
) -> impl IndexedParallelIterator<Item = (u32, &'a mut [u8])> + 'a {
    out.par_chunks_mut(width as usize)
        .enumerate()
        .skip(margin as usize)
        .take((height - 2 * margin) as usize)
        .map(|(i, row)| (i as u32, row))
}

fn pattern_image(
    image: &GrayImage,
    p: u32,
    r: f32,
    rule: Rule,
    interpolation: Interpolation,
) -> Result<Image<Luma<u8>>, Error> {
    let (width, height) = image.dimensions();
    let mut out = GrayImage::new(width, height);
    let margin = interior_margin(r);
    if interior_is_empty(width, height, margin) {
        return Ok(out);
    }

    for (i, row) in interior_rows(&mut out, width, height, margin) {
        pattern_row(image, row, i, margin, p, r, rule, interpolation)?;
    }
    Ok(out)
}

#[cfg(feature = "rayon")]
fn pattern_image_parallel(
    image: &GrayImage,
    p: u32,
    r: f32,
    rule: Rule,
    interpolation: Interpolation,
) -> Result<Image<Luma<u8>>, Error> {
    let (width, height) = image.dimensions();
    let mut out = GrayImage::new(width, height);
    let margin = interior_margin(r);
    if interior_is_empty(width, height, margin) {
        return Ok(out);
    }

    interior_rows_parallel(&mut out, width, height, margin)
        .try_for_each(|(i, row)| pattern_row(image, row, i, margin, p, r, rule, interpolation))?;
    Ok(out)
}

/// Fills one output row for the threshold and band variants. The sample loop
/// is innermost so the pass stays row-major over the output.
#[allow(clippy::too_many_arguments)]
fn pattern_row(
    image: &GrayImage,
    row: &mut [u8],
    i: u32,
    margin: u32,
    p: u32,
    r: f32,
    rule: Rule,
    interpolation: Interpolation,
) -> Result<(), Error> {
    let width = image.width();
    let mut samples = [0f32; PATTERN_BITS as usize];

    for j in margin..width - margin {
        let center = f32::from(image.get_pixel(j, i)[0]);

        for k in 0..p {
            let theta = 2.0 * PI * k as f32 / p as f32;
            let x = i as f32 + r * theta.sin();
            let y = j as f32 + r * theta.cos();
            let value = match interpolation {
                Interpolation::Nearest => sample_nearest(image, y, x),
                Interpolation::Bilinear => sample_bilinear(image, y, x),
            }
            .ok_or(Error::SampleOutOfBounds)?;
            samples[k as usize] = value;
        }

        let samples = &samples[..p as usize];
        row[j as usize] = match rule {
            Rule::GreaterEqual => threshold_pattern(center, samples),
            Rule::Band(band) => band_pattern(center, samples, band),
        };
    }
    Ok(())
}

/// Fills one output row for the uniform variant. Integer-truncated offsets
/// never leave the image for interior pixels, so the reads are infallible.
fn uniform_row(image: &GrayImage, row: &mut [u8], i: u32, margin: u32, p: u32, r: f32) {
    let width = image.width();
    let angle = 2.0 * PI / p as f32;

    for j in margin..width - margin {
        let center = image.get_pixel(j, i)[0];
        let mut pattern = 0u8;

        for k in 0..p {
            let theta = k as f32 * angle;
            let y = i as i64 + (r * theta.sin()) as i64;
            let x = j as i64 + (r * theta.cos()) as i64;
            let bit = (image.get_pixel(x as u32, y as u32)[0] >= center) as u8;
            pattern |= bit << k;
        }

        row[j as usize] = if count_transitions(pattern) <= 2 {
            pattern
        } else {
            (p + 1) as u8
        };
    }
}

fn minimize_rotations(base: &GrayImage, p: u32, margin: u32) -> GrayImage {
    let (width, height) = base.dimensions();
    let mut out = GrayImage::new(width, height);
    if interior_is_empty(width, height, margin) {
        return out;
    }

    for (i, row) in interior_rows(&mut out, width, height, margin) {
        minimize_row(base, row, i, margin, p);
    }
    out
}

#[cfg(feature = "rayon")]
fn minimize_rotations_parallel(base: &GrayImage, p: u32, margin: u32) -> GrayImage {
    let (width, height) = base.dimensions();
    let mut out = GrayImage::new(width, height);
    if interior_is_empty(width, height, margin) {
        return out;
    }

    interior_rows_parallel(&mut out, width, height, margin)
        .for_each(|(i, row)| minimize_row(base, row, i, margin, p));
    out
}

fn minimize_row(base: &GrayImage, row: &mut [u8], i: u32, margin: u32, p: u32) {
    for j in margin..base.width() - margin {
        row[j as usize] = min_rotation(base.get_pixel(j, i)[0], p);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_pixels_eq, gray_image};

    #[test]
    fn threshold_pattern_packs_most_significant_bit_first() {
        assert_eq!(threshold_pattern(10.0, &[12.0, 3.0]), 0b10);
        assert_eq!(threshold_pattern(10.0, &[3.0, 12.0]), 0b01);
        assert_eq!(threshold_pattern(10.0, &[10.0]), 1);
        assert_eq!(threshold_pattern(10.0, &[]), 0);
    }

    #[test]
    fn band_pattern_bounds_are_inclusive() {
        assert_eq!(band_pattern(100.0, &[90.0, 110.0], 0.1), 0b11);
        assert_eq!(band_pattern(100.0, &[89.9, 110.1], 0.1), 0b00);
        // A zero band only accepts exact matches.
        assert_eq!(band_pattern(100.0, &[100.0, 99.0], 0.0), 0b10);
    }

    #[test]
    fn min_rotation_canonicalizes_cyclic_rotations() {
        let rotations = [0b0001_1000u8, 0b0000_0011, 0b0000_0110, 0b1000_0001];
        for pattern in rotations {
            assert_eq!(min_rotation(pattern, 8), 0b0000_0011);
        }
    }

    #[test]
    fn min_rotation_tries_only_p_rotations() {
        // With p = 2 only the identity and a single rotation are candidates,
        // so the canonical value 0b11 is out of reach.
        assert_eq!(min_rotation(0b0001_1000, 2), 0b0000_1100);
        assert_eq!(min_rotation(0b0001_1000, 1), 0b0001_1000);
    }

    #[test]
    fn transition_counting_does_not_wrap() {
        // Circular counting would find 2 transitions in 0b0000_1111 and
        // 8 in 0b0101_0101.
        assert_eq!(count_transitions(0b0000_1111), 1);
        assert_eq!(count_transitions(0b0101_0101), 7);
        assert_eq!(count_transitions(0b1111_1111), 0);
        assert_eq!(count_transitions(0b1000_0000), 1);
    }

    #[test]
    fn nearest_patterns_on_a_single_interior_pixel() {
        let image = gray_image!(
            3, 10, 2;
            11, 6, 1;
            4, 12, 5);

        // Samples in order: 12, 1, 10, 11 against the center 6.
        let expected = gray_image!(
            0, 0, 0;
            0, 0b1011, 0;
            0, 0, 0);

        let descriptor = local_binary_pattern(&image, 4, 1.0, Interpolation::Nearest).unwrap();
        assert_pixels_eq!(descriptor, expected);
    }

    #[test]
    fn bilinear_pattern_blends_diagonal_samples() {
        let image = gray_image!(
            10, 20, 30;
            40, 50, 60;
            70, 80, 90);

        // The four axis-aligned samples read single pixels; the diagonal
        // ones blend four neighbors each. Against the center 50 the bits
        // are 1, 1, 1, 0, 0, 0, 0, 1.
        let expected = gray_image!(
            0, 0, 0;
            0, 0b1110_0001, 0;
            0, 0, 0);

        let descriptor = local_binary_pattern(&image, 8, 1.0, Interpolation::Bilinear).unwrap();
        assert_pixels_eq!(descriptor, expected);
    }

    #[test]
    fn rotation_invariant_descriptor_is_minimal() {
        let image = gray_image!(
            10, 20, 30;
            40, 50, 60;
            70, 80, 90);

        // The bilinear pattern at the center is 0b1110_0001; its least
        // rotation is 0b0000_1111.
        let expected = gray_image!(
            0, 0, 0;
            0, 0b0000_1111, 0;
            0, 0, 0);

        let descriptor = rotation_invariant_lbp(&image, 8, 1.0).unwrap();
        assert_pixels_eq!(descriptor, expected);
    }

    #[test]
    fn uniform_descriptor_collapses_busy_patterns() {
        let image = gray_image!(
            10, 20, 30;
            40, 50, 60;
            70, 80, 90);

        // The center pattern 0b1010_1111 has 4 transitions, so the cell
        // falls into the sentinel bucket p + 1.
        let expected = gray_image!(
            0, 0, 0;
            0, 9, 0;
            0, 0, 0);

        let descriptor = uniform_lbp(&image, 8, 1.0).unwrap();
        assert_pixels_eq!(descriptor, expected);
    }

    #[test]
    fn constant_image_saturates_every_variant() {
        let image = GrayImage::from_pixel(5, 5, image::Luma([7u8]));

        // Every sample equals the center, so every bit is set, 0b1111_1111
        // is its own least rotation and has no transitions, and every sample
        // sits inside any band.
        let all_set = |descriptor: &GrayImage| {
            (1..4).all(|i| (1..4).all(|j| descriptor.get_pixel(j, i)[0] == 0b1111_1111))
        };

        let lbp = local_binary_pattern(&image, 8, 1.0, Interpolation::Bilinear).unwrap();
        let ri = rotation_invariant_lbp(&image, 8, 1.0).unwrap();
        let uniform = uniform_lbp(&image, 8, 1.0).unwrap();
        let adaptive = adaptive_lbp(&image, 8, 1.0, 0.0, Interpolation::Nearest).unwrap();

        assert!(all_set(&lbp));
        assert!(all_set(&ri));
        assert!(all_set(&uniform));
        assert!(all_set(&adaptive));
    }

    #[test]
    fn undersized_images_produce_all_zero_descriptors() {
        let image = gray_image!(
            1, 2;
            3, 4);

        let descriptor = local_binary_pattern(&image, 8, 1.0, Interpolation::Nearest).unwrap();
        assert!(descriptor.pixels().all(|p| p[0] == 0));
        assert_eq!(descriptor.dimensions(), image.dimensions());
    }

    #[test]
    fn invalid_configurations_fail_fast() {
        let image = gray_image!(
            1, 2, 3;
            4, 5, 6;
            7, 8, 9);

        assert_eq!(
            local_binary_pattern(&image, 0, 1.0, Interpolation::Nearest),
            Err(Error::InvalidSampleCount)
        );
        assert_eq!(
            local_binary_pattern(&image, 9, 1.0, Interpolation::Nearest),
            Err(Error::PatternOverflow { samples: 9 })
        );
        assert_eq!(
            local_binary_pattern(&image, 8, 0.0, Interpolation::Nearest),
            Err(Error::InvalidRadius { radius: 0.0 })
        );
        assert_eq!(
            local_binary_pattern(&image, 8, -1.0, Interpolation::Nearest),
            Err(Error::InvalidRadius { radius: -1.0 })
        );
        assert!(matches!(
            local_binary_pattern(&image, 8, f32::NAN, Interpolation::Nearest),
            Err(Error::InvalidRadius { .. })
        ));
        assert_eq!(
            rotation_invariant_lbp(&image, 0, 1.0),
            Err(Error::InvalidSampleCount)
        );
        assert_eq!(uniform_lbp(&image, 9, 1.0), Err(Error::PatternOverflow { samples: 9 }));
        assert_eq!(
            adaptive_lbp(&image, 8, 1.0, -0.1, Interpolation::Nearest),
            Err(Error::InvalidBandFraction { band: -0.1 })
        );
        assert!(matches!(
            adaptive_lbp(&image, 8, 1.0, f32::NAN, Interpolation::Nearest),
            Err(Error::InvalidBandFraction { .. })
        ));
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn parallel_descriptors_match_sequential() {
        let image = crate::utils::gray_bench_image(40, 40);

        let lbp = local_binary_pattern(&image, 8, 1.5, Interpolation::Bilinear).unwrap();
        let lbp_par = local_binary_pattern_parallel(&image, 8, 1.5, Interpolation::Bilinear).unwrap();
        assert_pixels_eq!(lbp_par, lbp);

        let ri = rotation_invariant_lbp(&image, 6, 2.0).unwrap();
        let ri_par = rotation_invariant_lbp_parallel(&image, 6, 2.0).unwrap();
        assert_pixels_eq!(ri_par, ri);

        let uniform = uniform_lbp(&image, 8, 2.0).unwrap();
        let uniform_par = uniform_lbp_parallel(&image, 8, 2.0).unwrap();
        assert_pixels_eq!(uniform_par, uniform);

        let adaptive = adaptive_lbp(&image, 8, 1.0, 0.2, Interpolation::Nearest).unwrap();
        let adaptive_par =
            adaptive_lbp_parallel(&image, 8, 1.0, 0.2, Interpolation::Nearest).unwrap();
        assert_pixels_eq!(adaptive_par, adaptive);
    }
}
