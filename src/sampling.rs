//! Reading image intensities at continuous coordinates.
//!
//! Both samplers take the row coordinate `y` first and the column coordinate
//! `x` second, so `sample_bilinear(&image, 3.0, 4.0)` reads row 3, column 4.

use image::GrayImage;

/// How to read an intensity at a sample point that lies between pixels.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Interpolation {
    /// Choose the pixel nearest to the sample point.
    Nearest,
    /// Bilinearly interpolate between the four pixels closest to the
    /// sample point.
    Bilinear,
}

/// Reads the pixel nearest to the continuous coordinate `(y, x)`.
///
/// Coordinates are rounded half away from zero. Returns `None` if the
/// rounded point lies outside the image.
///
/// # Examples
/// ```
/// use lbp::gray_image;
/// use lbp::sampling::sample_nearest;
///
/// let image = gray_image!(
///     1, 2;
///     3, 4);
///
/// assert_eq!(sample_nearest(&image, 0.4, 1.0), Some(2.0));
/// assert_eq!(sample_nearest(&image, 0.6, 1.0), Some(4.0));
/// assert_eq!(sample_nearest(&image, 2.0, 0.0), None);
/// ```
pub fn sample_nearest(image: &GrayImage, y: f32, x: f32) -> Option<f32> {
    let ry = y.round();
    let rx = x.round();
    if ry < 0.0 || rx < 0.0 {
        return None;
    }

    let (ry, rx) = (ry as u32, rx as u32);
    if rx >= image.width() || ry >= image.height() {
        return None;
    }
    Some(f32::from(image.get_pixel(rx, ry)[0]))
}

/// Bilinearly interpolates the intensity at the continuous coordinate
/// `(y, x)` from the four surrounding pixels.
///
/// At integer coordinates the floor and ceiling corners coincide and the
/// result equals the pixel value exactly. Returns `None` if any corner lies
/// outside the image.
///
/// # Examples
/// ```
/// use lbp::gray_image;
/// use lbp::sampling::sample_bilinear;
///
/// let image = gray_image!(
///     1, 2;
///     4, 5);
///
/// // Exact lookup at a grid point, the blend of all four pixels at the center.
/// assert_eq!(sample_bilinear(&image, 1.0, 0.0), Some(4.0));
/// assert_eq!(sample_bilinear(&image, 0.5, 0.5), Some(3.0));
/// assert_eq!(sample_bilinear(&image, 1.5, 0.0), None);
/// ```
pub fn sample_bilinear(image: &GrayImage, y: f32, x: f32) -> Option<f32> {
    let ymin = y.floor();
    let ymax = y.ceil();
    let xmin = x.floor();
    let xmax = x.ceil();

    if ymin < 0.0
        || xmin < 0.0
        || ymax >= image.height() as f32
        || xmax >= image.width() as f32
    {
        return None;
    }

    let top_left = f32::from(image.get_pixel(xmin as u32, ymin as u32)[0]);
    let top_right = f32::from(image.get_pixel(xmax as u32, ymin as u32)[0]);
    let bottom_left = f32::from(image.get_pixel(xmin as u32, ymax as u32)[0]);
    let bottom_right = f32::from(image.get_pixel(xmax as u32, ymax as u32)[0]);

    let weight_x = x - xmin;
    let weight_y = y - ymin;

    let top = (1.0 - weight_x) * top_left + weight_x * top_right;
    let bottom = (1.0 - weight_x) * bottom_left + weight_x * bottom_right;

    Some((1.0 - weight_y) * top + weight_y * bottom)
}
