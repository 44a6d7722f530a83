//! Hex colors as authored in page CSS, converted for an sRGB render target.

/// An sRGB color decoded from a `0xRRGGBB` literal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub fn from_hex(hex: u32) -> Self {
        let ch = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
        Self {
            r: ch(16),
            g: ch(8),
            b: ch(0),
        }
    }

    /// Linear-light components. The surface is an `*Srgb` format, so shaders
    /// and clear colors must be given linear values to land on the hex color.
    pub fn to_linear(self) -> [f32; 3] {
        [
            srgb_to_linear(self.r),
            srgb_to_linear(self.g),
            srgb_to_linear(self.b),
        ]
    }

    #[inline]
    pub fn to_linear_rgba(self, alpha: f32) -> [f32; 4] {
        let [r, g, b] = self.to_linear();
        [r, g, b, alpha]
    }
}

#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_channels() {
        let c = Rgb::from_hex(0x0b2745);
        assert_eq!(c.r, 11.0 / 255.0);
        assert_eq!(c.g, 39.0 / 255.0);
        assert_eq!(c.b, 69.0 / 255.0);
    }

    #[test]
    fn linear_endpoints() {
        assert_eq!(Rgb::from_hex(0x000000).to_linear(), [0.0, 0.0, 0.0]);
        let white = Rgb::from_hex(0xffffff).to_linear();
        for c in white {
            assert!((c - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn mid_grey_is_darker_in_linear() {
        let [r, _, _] = Rgb::from_hex(0x808080).to_linear();
        assert!((r - 0.2158605).abs() < 1e-4);
    }
}
