//! Packed-hex color helpers.

/// Unpack `0xRRGGBB` into RGB components in `[0, 1]`.
#[must_use]
pub fn hex_to_rgb(hex: u32) -> [f32; 3] {
    let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
    [channel(16), channel(8), channel(0)]
}

/// Scale an RGB color by `intensity`, clamping each channel to `[0, 1]`.
#[must_use]
pub fn scale_rgb(color: [f32; 3], intensity: f32) -> [f32; 3] {
    color.map(|c| (c * intensity).clamp(0.0, 1.0))
}
