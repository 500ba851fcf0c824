//! Luminance extraction for gradient analysis.
//!
//! Uses ITU-R BT.601 luma weights in 14-bit fixed point, so the result for a
//! given pixel is exact and platform independent.
//!
//! ## Supported Formats
//!
//! - **Grayscale**: (height, width, 1) - copied through
//! - **Color**: (height, width, 3) - BGR or RGB, see [`ChannelOrder`]
//! - **Color + alpha**: (height, width, 4) - alpha is ignored

use ndarray::{Array2, ArrayView3};

use crate::error::{InvalidInputError, Result};

/// BT.601 coefficients scaled by 2^14 (0.299, 0.587, 0.114).
const LUMA_R: u32 = 4899;
const LUMA_G: u32 = 9617;
const LUMA_B: u32 = 1868;
const LUMA_SHIFT: u32 = 14;

/// Order of the first three channels of a color image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChannelOrder {
    /// Blue, green, red (the order of the rendered output).
    #[default]
    Bgr,
    /// Red, green, blue.
    Rgb,
}

impl ChannelOrder {
    /// Indices of the (red, green, blue) channels.
    fn rgb_indices(self) -> (usize, usize, usize) {
        match self {
            ChannelOrder::Bgr => (2, 1, 0),
            ChannelOrder::Rgb => (0, 1, 2),
        }
    }
}

/// Luma of a single pixel, rounded to nearest.
#[inline]
pub fn luma_u8(r: u8, g: u8, b: u8) -> u8 {
    let sum = LUMA_R * r as u32 + LUMA_G * g as u32 + LUMA_B * b as u32;
    ((sum + (1 << (LUMA_SHIFT - 1))) >> LUMA_SHIFT).min(255) as u8
}

/// Convert an image to a single luminance plane.
///
/// # Arguments
/// * `input` - Image with 1, 3, or 4 channels (height, width, channels)
/// * `order` - Channel order of color input, ignored for grayscale
///
/// # Errors
/// [`InvalidInputError::UnsupportedChannels`] for any other channel count.
pub fn to_gray_u8(input: ArrayView3<u8>, order: ChannelOrder) -> Result<Array2<u8>> {
    let (height, width, channels) = input.dim();

    match channels {
        1 => Ok(input.index_axis(ndarray::Axis(2), 0).to_owned()),
        3 | 4 => {
            let (ri, gi, bi) = order.rgb_indices();
            let mut output = Array2::<u8>::zeros((height, width));
            for y in 0..height {
                for x in 0..width {
                    output[[y, x]] = luma_u8(
                        input[[y, x, ri]],
                        input[[y, x, gi]],
                        input[[y, x, bi]],
                    );
                }
            }
            Ok(output)
        }
        n => Err(InvalidInputError::UnsupportedChannels(n)),
    }
}
