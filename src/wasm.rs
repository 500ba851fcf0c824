//! WebAssembly exports for the luminance gradient.
//!
//! These functions are exposed to JavaScript via wasm-bindgen and work on
//! flat, row-major pixel buffers.

use ndarray::{Array3, ArrayView3};
use wasm_bindgen::prelude::*;

use crate::error::{InvalidInputError, Result};
use crate::filters::edge::BorderMode;
use crate::filters::gradient::{BlueMode, GradientField, GradientParams};
use crate::filters::grayscale::ChannelOrder;

fn view_of(data: &[u8], width: usize, height: usize, channels: usize) -> Result<ArrayView3<'_, u8>> {
    let mismatch = || InvalidInputError::BufferLength {
        len: data.len(),
        height,
        width,
        channels,
    };

    let expected = height
        .checked_mul(width)
        .and_then(|n| n.checked_mul(channels))
        .ok_or_else(mismatch)?;
    if data.len() != expected {
        return Err(mismatch());
    }

    ArrayView3::from_shape((height, width, channels), data).map_err(|_| mismatch())
}

fn render_flat(
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    order: ChannelOrder,
    params: &GradientParams,
) -> Result<Array3<u8>> {
    let input = view_of(data, width, height, channels)?;
    let field = GradientField::from_image(input, order, BorderMode::default())?;
    Ok(field.render(params))
}

// ============================================================================
// Luminance Gradient
// ============================================================================

/// Render the luminance gradient of an RGBA/RGB/gray canvas buffer.
///
/// # Arguments
/// * `data` - Flat array of bytes (length = width * height * channels), RGB order
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `channels` - 1, 3 or 4
/// * `intensity` - Contrast intensity in percent (0-100)
/// * `blue_mode` - 0 none, 1 flat, 2 abs, 3 norm
/// * `invert` - Negate both derivatives
/// * `equalize` - Equalize each output channel
///
/// # Returns
/// Flat array of BGR bytes (length = width * height * 3)
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn luminance_gradient_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    intensity: u8,
    blue_mode: u8,
    invert: bool,
    equalize: bool,
) -> std::result::Result<Vec<u8>, JsError> {
    let params = GradientParams {
        intensity,
        blue_mode: BlueMode::try_from(blue_mode)?,
        invert,
        equalize,
    };

    let result = render_flat(data, width, height, channels, ChannelOrder::Rgb, &params)?;
    Ok(result.into_raw_vec_and_offset().0)
}
