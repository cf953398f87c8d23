//! Utils for testing and debugging.

use image::GrayImage;

/// Constructs an 8bpp grayscale image from a rectangular array of pixel
/// intensities, one row per semicolon-separated group.
///
/// # Examples
/// ```
/// use lbp::gray_image;
///
/// let image = gray_image!(
///     1, 2, 3;
///     4, 5, 6);
///
/// assert_eq!(image.dimensions(), (3, 2));
/// assert_eq!(image.get_pixel(0, 1)[0], 4);
/// ```
#[macro_export]
macro_rules! gray_image {
    () => {
        image::GrayImage::new(0, 0)
    };
    ($( $( $x: expr ),*);*) => {{
        let nested_array = [ $( [ $( $x as u8 ),* ] ),* ];
        let height = nested_array.len() as u32;
        let width = nested_array[0].len() as u32;

        let flat_array: Vec<u8> = nested_array
            .iter()
            .flat_map(|row| row.iter().copied())
            .collect();

        image::GrayImage::from_raw(width, height, flat_array).unwrap()
    }};
}

/// Panics if any pixels differ between the two input images.
#[macro_export]
macro_rules! assert_pixels_eq {
    ($actual:expr, $expected:expr) => {{
        let actual_dim = $actual.dimensions();
        let expected_dim = $expected.dimensions();

        if actual_dim != expected_dim {
            panic!(
                "dimensions do not match. actual: {:?}, expected: {:?}",
                actual_dim, expected_dim
            )
        }

        let diffs = $actual
            .enumerate_pixels()
            .zip($expected.enumerate_pixels())
            .filter(|(p, q)| p != q)
            .collect::<Vec<_>>();

        if !diffs.is_empty() {
            let diff_messages = diffs
                .iter()
                .take(5)
                .map(|(p, q)| format!("\nactual: {:?}, expected: {:?}", p, q))
                .collect::<Vec<_>>()
                .join("");

            panic!("pixels do not match. {}", diff_messages)
        }
    }};
}

/// Gray image to use in benchmarks and property tests. This is neither noise
/// nor similar to natural images - it's just a convenience method to produce
/// an image that's not constant.
pub fn gray_bench_image(width: u32, height: u32) -> GrayImage {
    let mut image = GrayImage::new(width, height);
    for y in 0..image.height() {
        for x in 0..image.width() {
            let intensity = (x % 7 + y % 6) as u8;
            image.put_pixel(x, y, image::Luma([intensity]));
        }
    }
    image
}
