//! Color types for particle rendering.
//!
//! Particles carry an sRGB color chosen at creation from an HSL range, so
//! this module provides the two types and the pure `hsl_to_srgb` conversion.
//! Uses `f64` throughout; quantization to 8-bit happens only at the pixel
//! buffer boundary via [`Srgb::to_rgba8`].

/// sRGB color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Srgb {
    /// Quantizes the color to an opaque RGBA8 pixel.
    ///
    /// Components are clamped to [0, 1] and rounded to 0–255; alpha is
    /// always 255.
    pub fn to_rgba8(self) -> [u8; 4] {
        let r = (self.r.clamp(0.0, 1.0) * 255.0).round() as u8;
        let g = (self.g.clamp(0.0, 1.0) * 255.0).round() as u8;
        let b = (self.b.clamp(0.0, 1.0) * 255.0).round() as u8;
        [r, g, b, 255]
    }
}

/// HSL color: hue in degrees (wrapped to [0, 360)), saturation and
/// lightness in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// Converts an HSL color to sRGB.
///
/// Standard piecewise conversion: chroma from saturation and lightness,
/// a hue-sextant intermediate, and a lightness offset. Total for all
/// finite inputs; hue wraps, saturation and lightness are clamped.
pub fn hsl_to_srgb(color: Hsl) -> Srgb {
    let h = color.h.rem_euclid(360.0);
    let s = color.s.clamp(0.0, 1.0);
    let l = color.l.clamp(0.0, 1.0);

    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let sextant = h / 60.0;
    let x = chroma * (1.0 - (sextant.rem_euclid(2.0) - 1.0).abs());
    let m = l - chroma / 2.0;

    let (r, g, b) = match sextant as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    Srgb {
        r: r + m,
        g: g + m,
        b: b + m,
    }
}
