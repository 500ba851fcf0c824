//! Filter modules for the luminance gradient visualization.
//!
//! ## Supported Formats
//!
//! | Stage | Shape | Type | Description |
//! |-------|-------|------|-------------|
//! | Input | (H, W, 1/3/4) | u8 | Grayscale, BGR/RGB, BGR/RGB + alpha |
//! | Luminance | (H, W) | u8 | BT.601 luma |
//! | Gradient | 2 x (H, W) | i16 | Signed Sobel derivatives |
//! | Output | (H, W, 3) | u8 | Blue, green, red |
//!
//! ## Filter Categories
//!
//! - **Luminance**: grayscale conversion with explicit channel order
//! - **Edge detection**: signed 3x3 Sobel spatial gradient
//! - **Tonal**: contrast lookup tables, min-max normalization, equalization
//! - **Gradient**: false-color mapping of a derivative pair

pub mod grayscale;
pub mod edge;
pub mod levels_curves;
pub mod gradient;
