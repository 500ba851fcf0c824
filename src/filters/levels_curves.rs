//! Tonal operations: contrast lookup tables, min-max normalization and
//! histogram equalization.
//!
//! All operations work on 8-bit data and treat every channel independently.

use ndarray::{Array2, Array3, ArrayView2, ArrayView3, Axis};

/// A byte-to-byte mapping applied per pixel per channel.
pub type Lut = [u8; 256];

// ============================================================================
// Contrast Lookup Table
// ============================================================================

/// Build a linear contrast-stretch table.
///
/// The line passes through `p1` and `p2`:
/// - `p1 = (low, 0)` for `low >= 0`, otherwise `(0, -low)`
/// - `p2 = (255 - high, 255)` for `high >= 0`, otherwise `(255, 255 + high)`
///
/// Positive cutoffs clip that many levels at each end and stretch the rest;
/// negative cutoffs compress the output range instead. Results are clamped
/// to 0-255 and truncated.
///
/// # Arguments
/// * `low` - Low cutoff (-255..=255)
/// * `high` - High cutoff (-255..=255)
pub fn create_lut(low: i32, high: i32) -> Lut {
    let (x1, y1) = if low >= 0 { (low, 0) } else { (0, -low) };
    let (x2, y2) = if high >= 0 { (255 - high, 255) } else { (255, 255 + high) };

    if x1 == x2 {
        return [255; 256];
    }

    let (x1, y1, x2, y2) = (x1 as f32, y1 as f32, x2 as f32, y2 as f32);
    let mut lut = [0u8; 256];
    for (i, entry) in lut.iter_mut().enumerate() {
        let v = (i as f32 * (y1 - y2) + x1 * y2 - y1 * x2) / (x1 - x2);
        *entry = v.clamp(0.0, 255.0) as u8;
    }
    lut
}

/// Map every channel of every pixel through `lut`.
pub fn apply_lut_u8(input: ArrayView3<u8>, lut: &Lut) -> Array3<u8> {
    input.mapv(|v| lut[v as usize])
}

// ============================================================================
// Min-Max Normalization
// ============================================================================

/// Linearly rescale `values` so its minimum maps to 0 and maximum to 255.
///
/// Results are rounded. An empty array, a constant array, or one containing
/// no finite range yields all zeros.
pub fn normalize_u8(values: ArrayView2<f32>) -> Array2<u8> {
    let (min, max) = values
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));

    let range = max - min;
    if !(range > 0.0) || !range.is_finite() {
        return Array2::zeros(values.raw_dim());
    }

    let scale = 255.0 / range;
    values.mapv(|v| ((v - min) * scale).round().clamp(0.0, 255.0) as u8)
}

// ============================================================================
// Histogram Equalization
// ============================================================================

/// Compute histogram of a plane.
fn compute_histogram(plane: ArrayView2<u8>) -> [u32; 256] {
    let mut hist = [0u32; 256];
    for &v in plane.iter() {
        hist[v as usize] += 1;
    }
    hist
}

/// Equalization lookup table for a histogram.
///
/// The first populated level maps to 0 and the rest follow the cumulative
/// distribution scaled to 255. A histogram with a single populated level
/// maps that level to itself.
fn equalization_lut(hist: &[u32; 256]) -> Lut {
    let mut lut = [0u8; 256];
    let total: u64 = hist.iter().map(|&c| c as u64).sum();

    let Some(first) = hist.iter().position(|&c| c > 0) else {
        return lut;
    };

    if hist[first] as u64 == total {
        return [first as u8; 256];
    }

    let scale = 255.0 / (total - hist[first] as u64) as f64;
    let mut sum = 0u64;
    for i in (first + 1)..256 {
        sum += hist[i] as u64;
        lut[i] = (sum as f64 * scale).round().clamp(0.0, 255.0) as u8;
    }
    lut
}

/// Equalize the histogram of a single plane.
pub fn equalize_channel_u8(plane: ArrayView2<u8>) -> Array2<u8> {
    let lut = equalization_lut(&compute_histogram(plane));
    plane.mapv(|v| lut[v as usize])
}

/// Equalize each channel of an image independently.
///
/// # Arguments
/// * `input` - Image with any channel count (height, width, channels)
///
/// # Returns
/// Equalized image with same shape
pub fn equalize_u8(input: ArrayView3<u8>) -> Array3<u8> {
    let mut output = input.to_owned();

    for (src, mut dst) in input.axis_iter(Axis(2)).zip(output.axis_iter_mut(Axis(2))) {
        let lut = equalization_lut(&compute_histogram(src));
        dst.mapv_inplace(|v| lut[v as usize]);
    }

    output
}
