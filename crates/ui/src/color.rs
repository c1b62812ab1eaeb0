use anyhow::anyhow;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An HSL color with alpha.
///
/// All channels are in `[0, 1]`, including hue (a full turn is `1.0`).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Hsla {
    /// Hue (0.0 to 1.0)
    pub h: f32,
    /// Saturation (0.0 to 1.0)
    pub s: f32,
    /// Lightness (0.0 to 1.0)
    pub l: f32,
    /// Alpha (0.0 to 1.0), 1.0 is fully opaque
    pub a: f32,
}

impl Hsla {
    /// Fully transparent black.
    pub const fn transparent() -> Self {
        Hsla {
            h: 0.,
            s: 0.,
            l: 0.,
            a: 0.,
        }
    }

    /// Opaque black.
    pub const fn black() -> Self {
        Hsla {
            h: 0.,
            s: 0.,
            l: 0.,
            a: 1.,
        }
    }

    /// Return the same color with alpha multiplied by the given factor.
    pub fn opacity(self, factor: f32) -> Self {
        Hsla {
            a: self.a * factor.clamp(0., 1.),
            ..self
        }
    }

    /// Convert to sRGB (r, g, b) channels in `[0, 1]`, dropping alpha.
    pub fn to_srgb(self) -> (f32, f32, f32) {
        hsl_to_srgb(self.h, self.s, self.l)
    }
}

/// Create an [`Hsla`] color from h, s, l, a values, each clamped to `[0, 1]`.
pub fn hsla(h: f32, s: f32, l: f32, a: f32) -> Hsla {
    Hsla {
        h: h.clamp(0., 1.),
        s: s.clamp(0., 1.),
        l: l.clamp(0., 1.),
        a: a.clamp(0., 1.),
    }
}

/// Create an opaque [`Hsla`] color from a `0xRRGGBB` value.
pub fn rgb(hex: u32) -> Hsla {
    let r = ((hex >> 16) & 0xff) as f32 / 255.;
    let g = ((hex >> 8) & 0xff) as f32 / 255.;
    let b = (hex & 0xff) as f32 / 255.;
    let (h, s, l) = srgb_to_hsl(r, g, b);
    Hsla { h, s, l, a: 1. }
}

/// Create an [`Hsla`] color from a `0xRRGGBBAA` value.
pub fn rgba(hex: u32) -> Hsla {
    let a = (hex & 0xff) as f32 / 255.;
    Hsla {
        a,
        ..rgb(hex >> 8)
    }
}

/// Convert sRGB (r, g, b) in [0,1] to HSL (h, s, l) where h, s, l are all in [0,1].
fn srgb_to_hsl(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if (max - min).abs() < f32::EPSILON {
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if (max - r).abs() < f32::EPSILON {
        let mut h = (g - b) / d;
        if g < b {
            h += 6.0;
        }
        h
    } else if (max - g).abs() < f32::EPSILON {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    (h / 6.0, s, l)
}

/// Convert HSL (h, s, l) where h, s, l are all in [0,1] to sRGB (r, g, b) in [0,1].
fn hsl_to_srgb(h: f32, s: f32, l: f32) -> (f32, f32, f32) {
    if s.abs() < f32::EPSILON {
        return (l, l, l);
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if t < 1.0 / 6.0 {
            return p + (q - p) * 6.0 * t;
        }
        if t < 1.0 / 2.0 {
            return q;
        }
        if t < 2.0 / 3.0 {
            return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
        }
        p
    }

    (
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
    )
}

/// Parse a hex color string to [`Hsla`].
///
/// Supports `#RRGGBB` and `#RRGGBBAA`.
impl TryFrom<&str> for Hsla {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let value = value.trim();
        let digits = value
            .strip_prefix('#')
            .ok_or_else(|| anyhow!("invalid hex color, expected `#RRGGBB` or `#RRGGBBAA`"))?;

        match digits.len() {
            6 => Ok(rgb(u32::from_str_radix(digits, 16)?)),
            8 => Ok(rgba(u32::from_str_radix(digits, 16)?)),
            _ => Err(anyhow!(
                "invalid hex color length {}, expected 6 or 8 digits",
                digits.len()
            )),
        }
    }
}
