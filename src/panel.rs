//! Interactive gradient panel.
//!
//! Holds the gradient field of one fixed image together with the current
//! [`GradientParams`]. Every parameter change triggers one full synchronous
//! render, which the caller hands to its display.

use std::time::{Duration, Instant};

use ndarray::{Array3, ArrayView3};

use crate::error::Result;
use crate::filters::edge::BorderMode;
use crate::filters::gradient::{BlueMode, GradientField, GradientParams};
use crate::filters::grayscale::ChannelOrder;

/// Receiver of rendered images.
///
/// Called once per parameter change, with no rate limit.
pub trait DisplaySink {
    fn show(&mut self, image: ArrayView3<u8>);
}

/// One rendered frame and the time it took.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub image: Array3<u8>,
    pub elapsed: Duration,
}

impl Rendered {
    /// Status line in the form `Luminance Gradient = 12 ms`.
    pub fn status(&self) -> String {
        format!("Luminance Gradient = {}", format_elapsed(self.elapsed))
    }
}

/// Format a duration as whole milliseconds.
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{} ms", elapsed.as_millis())
}

/// Gradient view of a single image with live-tunable parameters.
#[derive(Debug, Clone)]
pub struct GradientPanel {
    field: GradientField,
    params: GradientParams,
}

impl GradientPanel {
    /// Compute the gradient field of `image` once and start from default
    /// parameters.
    pub fn new(image: ArrayView3<u8>, order: ChannelOrder) -> Result<Self> {
        let field = GradientField::from_image(image, order, BorderMode::default())?;
        Ok(Self::with_field(field))
    }

    pub fn with_field(field: GradientField) -> Self {
        Self {
            field,
            params: GradientParams::default(),
        }
    }

    pub fn field(&self) -> &GradientField {
        &self.field
    }

    pub fn params(&self) -> &GradientParams {
        &self.params
    }

    /// Render with the current parameters.
    pub fn render(&self) -> Rendered {
        let start = Instant::now();
        let image = self.field.render(&self.params);
        let elapsed = start.elapsed();

        log::debug!(
            "Luminance Gradient = {} ({:?}, {:?})",
            format_elapsed(elapsed),
            self.field.dim(),
            self.params
        );

        Rendered { image, elapsed }
    }

    /// Render and pass the image to `sink`.
    pub fn process_into<S: DisplaySink + ?Sized>(&self, sink: &mut S) -> Rendered {
        let rendered = self.render();
        sink.show(rendered.image.view());
        rendered
    }

    pub fn set_params(&mut self, params: GradientParams) -> Rendered {
        self.params = params;
        self.render()
    }

    pub fn set_intensity(&mut self, intensity: u8) -> Rendered {
        self.set_params(self.params.with_intensity(intensity))
    }

    pub fn set_blue_mode(&mut self, blue_mode: BlueMode) -> Rendered {
        self.set_params(self.params.with_blue_mode(blue_mode))
    }

    pub fn set_invert(&mut self, invert: bool) -> Rendered {
        self.set_params(self.params.with_invert(invert))
    }

    pub fn set_equalize(&mut self, equalize: bool) -> Rendered {
        self.set_params(self.params.with_equalize(equalize))
    }
}
