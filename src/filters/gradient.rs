//! Luminance gradient false-color mapping.
//!
//! The horizontal derivative drives the red channel and the vertical
//! derivative drives green, both centered on 127 so that flat regions read
//! as neutral. Blue is synthesized from one of several [`BlueMode`]s. The
//! merged image is then contrast-stretched and optionally equalized.
//!
//! Output is always (height, width, 3) in {blue, green, red} order.

use std::fmt;
use std::str::FromStr;

use ndarray::{s, Array2, Array3, ArrayView2, ArrayView3, Zip};

use crate::error::{InvalidInputError, Result};
use crate::filters::edge::{spatial_gradient, BorderMode};
use crate::filters::grayscale::{to_gray_u8, ChannelOrder};
use crate::filters::levels_curves::{apply_lut_u8, create_lut, equalize_u8, normalize_u8};

/// Mid-gray used as the zero point of the red and green channels.
const NEUTRAL: f32 = 127.0;

/// Source of the synthetic blue channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BlueMode {
    /// Blue is 0 everywhere.
    #[default]
    None,
    /// Blue is 255 everywhere.
    Flat,
    /// Min-max normalized `|dx| + |dy|`.
    Abs,
    /// Min-max normalized Euclidean norm of the 8-bit (red, green) pair.
    Norm,
}

impl BlueMode {
    /// Every mode, in selector order.
    pub const ALL: [BlueMode; 4] = [BlueMode::None, BlueMode::Flat, BlueMode::Abs, BlueMode::Norm];

    /// Lowercase name, as accepted by `FromStr`.
    pub fn as_str(self) -> &'static str {
        match self {
            BlueMode::None => "none",
            BlueMode::Flat => "flat",
            BlueMode::Abs => "abs",
            BlueMode::Norm => "norm",
        }
    }
}

impl fmt::Display for BlueMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for BlueMode {
    type Error = InvalidInputError;

    /// Index in selector order: none, flat, abs, norm.
    fn try_from(index: u8) -> Result<Self> {
        BlueMode::ALL
            .get(index as usize)
            .copied()
            .ok_or_else(|| InvalidInputError::UnknownBlueMode(index.to_string()))
    }
}

impl FromStr for BlueMode {
    type Err = InvalidInputError;

    fn from_str(s: &str) -> Result<Self> {
        BlueMode::ALL
            .iter()
            .copied()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| InvalidInputError::UnknownBlueMode(s.to_string()))
    }
}

/// User-tunable rendering parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GradientParams {
    /// Contrast intensity in percent, 0-100.
    pub intensity: u8,
    pub blue_mode: BlueMode,
    /// Negate both derivatives before mapping.
    pub invert: bool,
    /// Equalize each output channel's histogram.
    pub equalize: bool,
}

impl Default for GradientParams {
    fn default() -> Self {
        Self {
            intensity: 80,
            blue_mode: BlueMode::None,
            invert: false,
            equalize: false,
        }
    }
}

impl GradientParams {
    pub fn with_intensity(mut self, intensity: u8) -> Self {
        self.intensity = intensity;
        self
    }

    pub fn with_blue_mode(mut self, blue_mode: BlueMode) -> Self {
        self.blue_mode = blue_mode;
        self
    }

    pub fn with_invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    pub fn with_equalize(mut self, equalize: bool) -> Self {
        self.equalize = equalize;
        self
    }

    /// Intensity mapped from percent onto the 0-127 contrast cutoff.
    ///
    /// Values above 100 percent are treated as 100.
    pub fn contrast_cutoff(&self) -> i32 {
        (self.intensity.min(100) as f32 / 100.0 * 127.0).round() as i32
    }
}

/// Horizontal and vertical luminance derivatives of one image.
///
/// Both planes always share the same shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradientField {
    dx: Array2<i16>,
    dy: Array2<i16>,
}

impl GradientField {
    /// Wrap a precomputed derivative pair.
    ///
    /// # Errors
    /// [`InvalidInputError::ShapeMismatch`] if `dx` and `dy` differ in shape.
    pub fn new(dx: Array2<i16>, dy: Array2<i16>) -> Result<Self> {
        check_shapes(dx.view(), dy.view())?;
        Ok(Self { dx, dy })
    }

    /// Derivatives of a luminance plane.
    pub fn from_gray(gray: ArrayView2<u8>, border: BorderMode) -> Self {
        let (dx, dy) = spatial_gradient(gray, border);
        log::trace!("computed gradient field {:?} with {:?} border", gray.dim(), border);
        Self { dx, dy }
    }

    /// Derivatives of the luminance of a 1, 3 or 4 channel image.
    pub fn from_image(image: ArrayView3<u8>, order: ChannelOrder, border: BorderMode) -> Result<Self> {
        let gray = to_gray_u8(image, order)?;
        Ok(Self::from_gray(gray.view(), border))
    }

    pub fn dx(&self) -> ArrayView2<'_, i16> {
        self.dx.view()
    }

    pub fn dy(&self) -> ArrayView2<'_, i16> {
        self.dy.view()
    }

    /// (height, width)
    pub fn dim(&self) -> (usize, usize) {
        self.dx.dim()
    }

    pub fn into_parts(self) -> (Array2<i16>, Array2<i16>) {
        (self.dx, self.dy)
    }

    /// Render the false-color visualization for `params`.
    pub fn render(&self, params: &GradientParams) -> Array3<u8> {
        map_gradient(self.dx.view(), self.dy.view(), params)
    }
}

fn check_shapes(dx: ArrayView2<i16>, dy: ArrayView2<i16>) -> Result<()> {
    if dx.dim() != dy.dim() {
        return Err(InvalidInputError::ShapeMismatch {
            dx: dx.dim(),
            dy: dy.dim(),
        });
    }
    Ok(())
}

/// Render a derivative pair that has not been validated yet.
///
/// # Errors
/// [`InvalidInputError::ShapeMismatch`] if `dx` and `dy` differ in shape.
pub fn render_gradient(
    dx: ArrayView2<i16>,
    dy: ArrayView2<i16>,
    params: &GradientParams,
) -> Result<Array3<u8>> {
    check_shapes(dx, dy)?;
    Ok(map_gradient(dx, dy, params))
}

/// Largest absolute value, 0 for an empty plane.
fn max_abs(plane: ArrayView2<f32>) -> f32 {
    plane.iter().fold(0.0f32, |acc, &v| acc.max(v.abs()))
}

/// Map a signed derivative onto 0-254 centered at 127.
///
/// A plane with no non-zero value maps to neutral gray.
fn signed_to_u8(plane: ArrayView2<f32>) -> Array2<u8> {
    let max = max_abs(plane);
    if max == 0.0 {
        return Array2::from_elem(plane.raw_dim(), NEUTRAL as u8);
    }
    plane.mapv(|v| ((v / max * NEUTRAL).round() + NEUTRAL).clamp(0.0, 255.0) as u8)
}

fn blue_channel(
    mode: BlueMode,
    dx: ArrayView2<f32>,
    dy: ArrayView2<f32>,
    red: ArrayView2<u8>,
    green: ArrayView2<u8>,
) -> Array2<u8> {
    match mode {
        BlueMode::None => Array2::zeros(red.raw_dim()),
        BlueMode::Flat => Array2::from_elem(red.raw_dim(), 255),
        BlueMode::Abs => {
            let sum = Zip::from(dx).and(dy).map_collect(|&x, &y| x.abs() + y.abs());
            normalize_u8(sum.view())
        }
        BlueMode::Norm => {
            let norm = Zip::from(red)
                .and(green)
                .map_collect(|&r, &g| (r as f32).hypot(g as f32));
            normalize_u8(norm.view())
        }
    }
}

/// Stack three planes into a (height, width, 3) image.
fn merge_bgr(blue: ArrayView2<u8>, green: ArrayView2<u8>, red: ArrayView2<u8>) -> Array3<u8> {
    let (height, width) = red.dim();
    let mut output = Array3::<u8>::zeros((height, width, 3));
    output.slice_mut(s![.., .., 0]).assign(&blue);
    output.slice_mut(s![.., .., 1]).assign(&green);
    output.slice_mut(s![.., .., 2]).assign(&red);
    output
}

fn map_gradient(dx: ArrayView2<i16>, dy: ArrayView2<i16>, params: &GradientParams) -> Array3<u8> {
    let sign = if params.invert { -1.0 } else { 1.0 };
    let dx = dx.mapv(|v| sign * v as f32);
    let dy = dy.mapv(|v| sign * v as f32);

    let red = signed_to_u8(dx.view());
    let green = signed_to_u8(dy.view());
    let blue = blue_channel(params.blue_mode, dx.view(), dy.view(), red.view(), green.view());

    let mut gradient = merge_bgr(blue.view(), green.view(), red.view());

    let cutoff = params.contrast_cutoff();
    if cutoff > 0 {
        gradient = apply_lut_u8(gradient.view(), &create_lut(cutoff, cutoff));
    }
    if params.equalize {
        gradient = equalize_u8(gradient.view());
    }
    gradient
}
