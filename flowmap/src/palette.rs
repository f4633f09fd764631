//! Categorical color palette shared by every map layer.
//!
//! Facilities, warehouses and tier-one suppliers are identified only by their
//! position in an ordered sequence, so the palette maps an index to a color by
//! cycling through a fixed list. The same index always yields the same color,
//! which keeps a warehouse's marker and the lanes serving it visually linked.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque 8-bit RGB color.
///
/// Serializes as a `[r, g, b]` array, the form deck.gl color accessors expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Attach an alpha channel.
    pub const fn with_alpha(self, a: u8) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        [c.r, c.g, c.b]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.r, self.g, self.b)
    }
}

/// An 8-bit RGB color with transparency.
///
/// Serializes as a `[r, g, b, a]` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 4]", into = "[u8; 4]")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// The color without its alpha channel.
    pub const fn rgb(&self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }
}

impl From<[u8; 4]> for Rgba {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(c: Rgba) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}, {}]", self.r, self.g, self.b, self.a)
    }
}

/// The categorical palette, in lookup order.
pub const PALETTE: [Rgb; 10] = [
    Rgb::new(31, 119, 180),  // blue
    Rgb::new(255, 127, 14),  // orange
    Rgb::new(44, 160, 44),   // green
    Rgb::new(214, 39, 40),   // red
    Rgb::new(148, 103, 189), // purple
    Rgb::new(140, 86, 75),   // brown
    Rgb::new(227, 119, 194), // pink
    Rgb::new(127, 127, 127), // gray
    Rgb::new(188, 189, 34),  // olive
    Rgb::new(23, 190, 207),  // cyan
];

/// Number of distinct palette entries.
pub const PALETTE_SIZE: usize = PALETTE.len();

/// Returns the palette color for an index, wrapping around the palette.
#[inline]
pub fn color_for_index(index: usize) -> Rgb {
    PALETTE[index % PALETTE_SIZE]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_entries() {
        assert_eq!(color_for_index(0), Rgb::new(31, 119, 180));
        assert_eq!(color_for_index(1), Rgb::new(255, 127, 14));
        assert_eq!(color_for_index(9), Rgb::new(23, 190, 207));
    }

    #[test]
    fn test_wraps_around() {
        assert_eq!(color_for_index(10), PALETTE[0]);
        assert_eq!(color_for_index(13), PALETTE[3]);
        assert_eq!(color_for_index(usize::MAX), PALETTE[usize::MAX % PALETTE_SIZE]);
    }

    #[test]
    fn test_distinct_colors() {
        for (i, a) in PALETTE.iter().enumerate() {
            for (j, b) in PALETTE.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "duplicate colors at {i} and {j}");
                }
            }
        }
    }

    #[test]
    fn test_with_alpha_keeps_channels() {
        let c = Rgb::new(1, 2, 3).with_alpha(160);
        assert_eq!(c, Rgba::new(1, 2, 3, 160));
        assert_eq!(c.rgb(), Rgb::new(1, 2, 3));
    }

    #[test]
    fn test_serializes_as_arrays() {
        let rgb = serde_json::to_string(&Rgb::new(0, 128, 255)).unwrap();
        assert_eq!(rgb, "[0,128,255]");

        let rgba = serde_json::to_string(&Rgba::new(0, 128, 255, 160)).unwrap();
        assert_eq!(rgba, "[0,128,255,160]");

        let parsed: Rgba = serde_json::from_str("[1,2,3,4]").unwrap();
        assert_eq!(parsed, Rgba::new(1, 2, 3, 4));
    }

    #[test]
    fn test_display() {
        assert_eq!(Rgb::new(1, 2, 3).to_string(), "[1, 2, 3]");
        assert_eq!(Rgba::new(1, 2, 3, 4).to_string(), "[1, 2, 3, 4]");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Shifting an index by a whole palette never changes its color.
        #[test]
        fn palette_is_cyclic(i in 0usize..(usize::MAX - PALETTE_SIZE)) {
            prop_assert_eq!(color_for_index(i), color_for_index(i + PALETTE_SIZE));
        }
    }
}
