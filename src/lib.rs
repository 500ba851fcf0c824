//! Luminance Gradient
//!
//! False-color visualization of an image's spatial luminance gradient, with
//! Python bindings via PyO3 and WASM bindings for JavaScript.
//!
//! ## Image Format
//! Input images are 8-bit with 1, 3 or 4 channels:
//! - **Grayscale**: (height, width, 1)
//! - **BGR / RGB**: (height, width, 3)
//! - **BGRA / RGBA**: (height, width, 4), alpha ignored
//!
//! The rendered visualization is always (height, width, 3) in
//! {blue, green, red} order.
//!
//! ## Pipeline
//! 1. Luminance of the input (BT.601)
//! 2. Signed 3x3 Sobel derivatives, computed once per image
//! 3. dx to red, dy to green, both centered on 127; synthetic blue
//! 4. Contrast lookup table scaled by intensity
//! 5. Optional per-channel histogram equalization
//!
//! Steps 3-5 are re-run on every parameter change; see [`GradientPanel`].

pub mod error;
pub mod filters;
pub mod panel;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{InvalidInputError, Result};
pub use filters::edge::{spatial_gradient, BorderMode};
pub use filters::gradient::{render_gradient, BlueMode, GradientField, GradientParams};
pub use filters::grayscale::ChannelOrder;
pub use panel::{DisplaySink, GradientPanel, Rendered};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray2, PyArray3, PyReadonlyArray2, PyReadonlyArray3};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::error::InvalidInputError;
    use crate::filters::edge::{spatial_gradient as spatial_gradient_impl, BorderMode};
    use crate::filters::gradient::{BlueMode, GradientField, GradientParams};
    use crate::filters::grayscale::ChannelOrder;

    fn to_py_err(err: InvalidInputError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }

    // ========================================================================
    // Luminance Gradient
    // ========================================================================

    /// Render the luminance gradient of an image.
    ///
    /// # Arguments
    /// * `image` - Input image (1, 3, or 4 channels), BGR order unless `rgb`
    /// * `intensity` - Contrast intensity in percent (0-100)
    /// * `blue_mode` - 0 none, 1 flat, 2 abs, 3 norm
    /// * `invert` - Negate both derivatives
    /// * `equalize` - Equalize each output channel
    /// * `rgb` - Input is RGB rather than BGR
    ///
    /// # Returns
    /// (height, width, 3) BGR image
    #[pyfunction]
    #[pyo3(signature = (image, intensity=80, blue_mode=0, invert=false, equalize=false, rgb=false))]
    pub fn luminance_gradient<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        intensity: u8,
        blue_mode: u8,
        invert: bool,
        equalize: bool,
        rgb: bool,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let order = if rgb { ChannelOrder::Rgb } else { ChannelOrder::Bgr };
        let params = GradientParams {
            intensity,
            blue_mode: BlueMode::try_from(blue_mode).map_err(to_py_err)?,
            invert,
            equalize,
        };

        let field = GradientField::from_image(image.as_array(), order, BorderMode::default())
            .map_err(to_py_err)?;
        let result = field.render(&params);
        Ok(result.into_pyarray(py))
    }

    /// Signed Sobel derivatives (dx, dy) of a grayscale image as int16.
    #[pyfunction]
    #[pyo3(signature = (gray, replicate=false))]
    pub fn spatial_gradient<'py>(
        py: Python<'py>,
        gray: PyReadonlyArray2<'py, u8>,
        replicate: bool,
    ) -> (Bound<'py, PyArray2<i16>>, Bound<'py, PyArray2<i16>>) {
        let border = if replicate {
            BorderMode::Replicate
        } else {
            BorderMode::Reflect101
        };
        let (dx, dy) = spatial_gradient_impl(gray.as_array(), border);
        (dx.into_pyarray(py), dy.into_pyarray(py))
    }

    /// Luminance Gradient extension module
    #[pymodule]
    pub fn luminance_gradient_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(luminance_gradient, m)?)?;
        m.add_function(wrap_pyfunction!(spatial_gradient, m)?)?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::luminance_gradient_rust;
