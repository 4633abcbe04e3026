//! Fill colors for mosaic pieces.

use std::fmt;

use rand::Rng;

/// Lowest channel value a random color may take, so no piece renders near-black.
pub const MIN_CHANNEL: u8 = 55;

/// An opaque RGB fill color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Creates a color from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Samples a random pastel color, each channel uniform in `[MIN_CHANNEL, 255)`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            r: rng.gen_range(MIN_CHANNEL..255),
            g: rng.gen_range(MIN_CHANNEL..255),
            b: rng.gen_range(MIN_CHANNEL..255),
        }
    }

    /// Returns the channels plus a fully opaque alpha.
    pub fn to_rgba_u8(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

/// Formats as a CSS color, e.g. `rgb(120, 200, 64)`.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn random_channels_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let c = Rgb::random(&mut rng);
            for channel in [c.r, c.g, c.b] {
                assert!(channel >= MIN_CHANNEL);
                assert!(channel < 255);
            }
        }
    }

    #[test]
    fn display_as_css() {
        assert_eq!(Rgb::new(120, 200, 64).to_string(), "rgb(120, 200, 64)");
    }

    #[test]
    fn rgba_is_opaque() {
        assert_eq!(Rgb::new(1, 2, 3).to_rgba_u8(), [1, 2, 3, 255]);
    }
}
