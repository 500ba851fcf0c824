//! Spatial gradient: signed 3x3 Sobel derivatives of a luminance plane.
//!
//! Unlike a Sobel edge filter, which folds the response into an unsigned
//! magnitude, this keeps the signed horizontal and vertical derivatives so the
//! direction of each edge survives.
//!
//! Kernels:
//!
//! ```text
//!        [-1 0 1]          [-1 -2 -1]
//!   Kx = [-2 0 2]     Ky = [ 0  0  0]
//!        [-1 0 1]          [ 1  2  1]
//! ```
//!
//! The largest response for 8-bit input is 4 * 255 = 1020, so `i16` holds
//! every result.

use ndarray::{Array2, ArrayView2};

const KERNEL_X: [[i32; 3]; 3] = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
const KERNEL_Y: [[i32; 3]; 3] = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

/// How pixels outside the image are synthesized for the 3x3 window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BorderMode {
    /// Mirror without repeating the edge pixel: `gfedcb|abcdefgh|gfedcba`.
    #[default]
    Reflect101,
    /// Repeat the edge pixel: `aaaaaa|abcdefgh|hhhhhhh`.
    Replicate,
}

impl BorderMode {
    /// Map a possibly out-of-range coordinate into `0..len`.
    ///
    /// Only offsets of one pixel past either edge are produced by a 3x3
    /// window, which is all this handles.
    #[inline]
    fn resolve(self, i: isize, len: usize) -> usize {
        let last = len as isize - 1;
        let j = match self {
            BorderMode::Reflect101 if len == 1 => 0,
            BorderMode::Reflect101 => {
                if i < 0 {
                    -i
                } else if i > last {
                    2 * last - i
                } else {
                    i
                }
            }
            BorderMode::Replicate => i.clamp(0, last),
        };
        j as usize
    }
}

/// Compute the signed horizontal and vertical derivatives of `gray`.
///
/// # Arguments
/// * `gray` - Luminance plane (height, width)
/// * `border` - Border extrapolation for the 3x3 window
///
/// # Returns
/// `(dx, dy)`, each with the same shape as `gray`
pub fn spatial_gradient(gray: ArrayView2<u8>, border: BorderMode) -> (Array2<i16>, Array2<i16>) {
    let (height, width) = gray.dim();
    let mut dx = Array2::<i16>::zeros((height, width));
    let mut dy = Array2::<i16>::zeros((height, width));

    if height == 0 || width == 0 {
        return (dx, dy);
    }

    for y in 0..height {
        for x in 0..width {
            let mut gx = 0i32;
            let mut gy = 0i32;

            for ky in 0..3 {
                let py = border.resolve(y as isize + ky as isize - 1, height);
                for kx in 0..3 {
                    let px = border.resolve(x as isize + kx as isize - 1, width);
                    let lum = gray[[py, px]] as i32;

                    gx += lum * KERNEL_X[ky][kx];
                    gy += lum * KERNEL_Y[ky][kx];
                }
            }

            dx[[y, x]] = gx as i16;
            dy[[y, x]] = gy as i16;
        }
    }

    (dx, dy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array2};

    #[test]
    fn test_reflect101_indices() {
        assert_eq!(BorderMode::Reflect101.resolve(-1, 5), 1);
        assert_eq!(BorderMode::Reflect101.resolve(5, 5), 3);
        assert_eq!(BorderMode::Reflect101.resolve(2, 5), 2);
        assert_eq!(BorderMode::Reflect101.resolve(-1, 1), 0);
    }

    #[test]
    fn test_replicate_indices() {
        assert_eq!(BorderMode::Replicate.resolve(-1, 5), 0);
        assert_eq!(BorderMode::Replicate.resolve(5, 5), 4);
    }

    #[test]
    fn test_flat_image_has_zero_gradient() {
        let gray = Array2::<u8>::from_elem((4, 6), 128);

        let (dx, dy) = spatial_gradient(gray.view(), BorderMode::Reflect101);

        assert!(dx.iter().all(|&v| v == 0));
        assert!(dy.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_vertical_edge_sign() {
        // Dark left, bright right
        let mut gray = Array2::<u8>::zeros((5, 5));
        for y in 0..5 {
            for x in 2..5 {
                gray[[y, x]] = 255;
            }
        }

        let (dx, dy) = spatial_gradient(gray.view(), BorderMode::Reflect101);

        // Full-strength step: (1 + 2 + 1) * 255
        assert_eq!(dx[[2, 1]], 1020);
        assert_eq!(dx[[2, 2]], 1020);
        assert_eq!(dx[[2, 3]], 0);
        assert!(dy.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_horizontal_edge_sign() {
        // Bright top, dark bottom gives a negative vertical derivative
        let mut gray = Array2::<u8>::zeros((4, 3));
        for x in 0..3 {
            gray[[0, x]] = 200;
            gray[[1, x]] = 200;
        }

        let (dx, dy) = spatial_gradient(gray.view(), BorderMode::Replicate);

        assert!(dx.iter().all(|&v| v == 0));
        assert_eq!(dy[[1, 1]], -800);
        assert_eq!(dy[[2, 1]], -800);
        assert_eq!(dy[[0, 1]], 0);
    }

    #[test]
    fn test_checker_2x2_replicate() {
        let gray = array![[0u8, 255], [255, 0]];

        let (dx, dy) = spatial_gradient(gray.view(), BorderMode::Replicate);

        assert_eq!(dx, array![[510i16, 510], [-510, -510]]);
        assert_eq!(dy, array![[510i16, -510], [510, -510]]);
    }

    #[test]
    fn test_checker_2x2_reflect101_cancels() {
        let gray = array![[0u8, 255], [255, 0]];

        let (dx, dy) = spatial_gradient(gray.view(), BorderMode::Reflect101);

        assert!(dx.iter().all(|&v| v == 0));
        assert!(dy.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_single_pixel_and_empty() {
        let one = Array2::<u8>::from_elem((1, 1), 77);
        let (dx, dy) = spatial_gradient(one.view(), BorderMode::Reflect101);
        assert_eq!(dx[[0, 0]], 0);
        assert_eq!(dy[[0, 0]], 0);

        let empty = Array2::<u8>::zeros((0, 3));
        let (dx, dy) = spatial_gradient(empty.view(), BorderMode::Replicate);
        assert_eq!(dx.dim(), (0, 3));
        assert_eq!(dy.dim(), (0, 3));
    }
}
