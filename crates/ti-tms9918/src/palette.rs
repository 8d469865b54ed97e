//! TMS9918A colour palette.
//!
//! 16 colour codes. Code 0 is transparent: on the real chip it shows
//! whatever lies behind the plane (ultimately the external video input or
//! black). It is given zero alpha here so hosts can composite.

use std::fmt;

/// Palette: 16 colours indexed 0-15 in ARGB32 format.
pub const PALETTE: [u32; 16] = [
    0x0000_0000, // 0: Transparent
    0xFF00_0000, // 1: Black
    0xFF21_C842, // 2: Medium Green
    0xFF5E_DC78, // 3: Light Green
    0xFF54_55ED, // 4: Dark Blue
    0xFF7D_76FC, // 5: Light Blue
    0xFFD4_524D, // 6: Dark Red
    0xFF42_EBF5, // 7: Cyan
    0xFFFC_5554, // 8: Medium Red
    0xFFFF_7978, // 9: Light Red
    0xFFD4_C154, // 10: Dark Yellow
    0xFFE6_CE80, // 11: Light Yellow
    0xFF21_B03B, // 12: Dark Green
    0xFFC9_5BBA, // 13: Magenta
    0xFFCC_CCCC, // 14: Gray
    0xFFFF_FFFF, // 15: White
];

/// A palette colour code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Color {
    Transparent = 0,
    Black = 1,
    MediumGreen = 2,
    LightGreen = 3,
    DarkBlue = 4,
    LightBlue = 5,
    DarkRed = 6,
    Cyan = 7,
    MediumRed = 8,
    LightRed = 9,
    DarkYellow = 10,
    LightYellow = 11,
    DarkGreen = 12,
    Magenta = 13,
    Gray = 14,
    White = 15,
}

impl Color {
    const ALL: [Color; 16] = [
        Self::Transparent,
        Self::Black,
        Self::MediumGreen,
        Self::LightGreen,
        Self::DarkBlue,
        Self::LightBlue,
        Self::DarkRed,
        Self::Cyan,
        Self::MediumRed,
        Self::LightRed,
        Self::DarkYellow,
        Self::LightYellow,
        Self::DarkGreen,
        Self::Magenta,
        Self::Gray,
        Self::White,
    ];

    /// Colour for a 4-bit code. The high nibble is ignored.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        Self::ALL[(index & 0x0F) as usize]
    }

    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn argb(self) -> u32 {
        PALETTE[self as usize]
    }
}

impl From<Color> for u8 {
    fn from(color: Color) -> Self {
        color.index()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
