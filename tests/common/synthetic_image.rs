use ndarray::Array3;

/// Single-channel image with the given rows.
pub fn gray_image<const W: usize>(rows: &[[u8; W]]) -> Array3<u8> {
    let mut img = Array3::<u8>::zeros((rows.len(), W, 1));
    for (y, row) in rows.iter().enumerate() {
        for (x, &v) in row.iter().enumerate() {
            img[[y, x, 0]] = v;
        }
    }
    img
}

/// BGR image of a constant color.
pub fn flat_bgr(width: usize, height: usize, bgr: [u8; 3]) -> Array3<u8> {
    let mut img = Array3::<u8>::zeros((height, width, 3));
    for y in 0..height {
        for x in 0..width {
            for c in 0..3 {
                img[[y, x, c]] = bgr[c];
            }
        }
    }
    img
}

/// BGR image with a diagonal luminance ramp and a bright disc, so both
/// derivatives take positive and negative values.
pub fn textured_bgr(width: usize, height: usize) -> Array3<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let cx = width as f32 / 2.0;
    let cy = height as f32 / 2.0;
    let radius = width.min(height) as f32 / 4.0;

    let mut img = Array3::<u8>::zeros((height, width, 3));
    for y in 0..height {
        for x in 0..width {
            let ramp = ((x + 2 * y) * 255 / (width + 2 * height)) as u8;
            let dist = ((x as f32 - cx).powi(2) + (y as f32 - cy).powi(2)).sqrt();
            let v = if dist < radius { 255 - ramp / 2 } else { ramp };
            img[[y, x, 0]] = v / 2;
            img[[y, x, 1]] = v;
            img[[y, x, 2]] = v.saturating_add(20);
        }
    }
    img
}
