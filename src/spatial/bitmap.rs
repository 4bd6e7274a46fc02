//! Boolean pixel matrices and the two primitive transforms
//!
//! Every orientation of a tile or of the composite image is produced by
//! composing `rotate_clockwise` and `mirror`. Both return new matrices and
//! work for rectangular inputs as well as square ones.

use crate::io::configuration::{EMPTY_PIXEL, FILLED_PIXEL};
use ndarray::{Array2, s};

/// Row-major boolean pixel matrix (`true` = filled)
pub type Bitmap = Array2<bool>;

/// Rotate a matrix a quarter turn clockwise
///
/// Output cell `(i, j)` takes input cell `(rows - 1 - j, i)`, so an
/// `r x c` input becomes `c x r`.
pub fn rotate_clockwise<T: Clone>(pixels: &Array2<T>) -> Array2<T> {
    pixels.slice(s![..;-1, ..]).reversed_axes().to_owned()
}

/// Flip a matrix top-to-bottom
pub fn mirror<T: Clone>(pixels: &Array2<T>) -> Array2<T> {
    pixels.slice(s![..;-1, ..]).to_owned()
}

/// Count filled pixels
pub fn count_filled(pixels: &Bitmap) -> usize {
    pixels.iter().filter(|&&pixel| pixel).count()
}

/// Render a bitmap as `#`/`.` text, one line per row
pub fn render(pixels: &Bitmap) -> String {
    let mut text = String::with_capacity(pixels.len() + pixels.nrows());
    for row in pixels.rows() {
        text.extend(
            row.iter()
                .map(|&pixel| if pixel { FILLED_PIXEL } else { EMPTY_PIXEL }),
        );
        text.push('\n');
    }
    text
}
