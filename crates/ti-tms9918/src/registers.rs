//! Write-only register bank.
//!
//! | Reg | Contents                                        |
//! |-----|-------------------------------------------------|
//! | R0  | bit 1: M3 (Graphics II), bit 0: external video  |
//! | R1  | 4/16K, BLANK, IE, M1, M2, -, SIZE, MAG          |
//! | R2  | Name table base / 0x400                         |
//! | R3  | Color table base / 0x40                         |
//! | R4  | Pattern generator base / 0x800                  |
//! | R5  | Sprite attribute table base / 0x80              |
//! | R6  | Sprite pattern generator base / 0x800           |
//! | R7  | Text foreground (high nibble), backdrop (low)   |

use std::fmt;

/// Number of registers. Indices are masked to this range.
pub const REGISTER_COUNT: usize = 8;

const R0_M3: u8 = 0x02;
const R1_DISPLAY_ENABLE: u8 = 0x40;
const R1_INTERRUPT_ENABLE: u8 = 0x20;
const R1_M1: u8 = 0x10;
const R1_M2: u8 = 0x08;
const R1_SPRITE_SIZE: u8 = 0x02;
const R1_SPRITE_MAG: u8 = 0x01;

/// Display mode selected by the M1/M2/M3 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// 32x24 tiles, one color byte per 8 patterns.
    #[default]
    Graphics1,
    /// 32x24 tiles, per-row colors, three pattern banks.
    Graphics2,
    /// 64x48 blocks of 4x4 pixels.
    Multicolor,
    /// 40x24 cells of 6x8 pixels, colors from R7.
    Text,
}

impl DisplayMode {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Graphics1 => "graphics1",
            Self::Graphics2 => "graphics2",
            Self::Multicolor => "multicolor",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The eight 8-bit configuration registers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u8; REGISTER_COUNT],
}

impl RegisterFile {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` in register `index & 7`.
    pub fn set(&mut self, index: u8, value: u8) {
        self.regs[Self::slot(index)] = value;
    }

    /// Read register `index & 7`.
    #[must_use]
    pub fn get(&self, index: u8) -> u8 {
        self.regs[Self::slot(index)]
    }

    pub fn reset_all(&mut self) {
        self.regs = [0; REGISTER_COUNT];
    }

    fn slot(index: u8) -> usize {
        usize::from(index) & (REGISTER_COUNT - 1)
    }

    // === Decoded fields ===

    #[must_use]
    pub fn display_mode(&self) -> DisplayMode {
        let r1 = self.regs[1];
        if r1 & R1_M1 != 0 {
            DisplayMode::Text
        } else if r1 & R1_M2 != 0 {
            DisplayMode::Multicolor
        } else if self.regs[0] & R0_M3 != 0 {
            DisplayMode::Graphics2
        } else {
            DisplayMode::Graphics1
        }
    }

    #[must_use]
    pub fn display_enabled(&self) -> bool {
        self.regs[1] & R1_DISPLAY_ENABLE != 0
    }

    #[must_use]
    pub fn interrupt_enabled(&self) -> bool {
        self.regs[1] & R1_INTERRUPT_ENABLE != 0
    }

    /// 16x16 sprites instead of 8x8.
    #[must_use]
    pub fn large_sprites(&self) -> bool {
        self.regs[1] & R1_SPRITE_SIZE != 0
    }

    /// Sprites drawn at double size.
    #[must_use]
    pub fn magnified_sprites(&self) -> bool {
        self.regs[1] & R1_SPRITE_MAG != 0
    }

    /// Name table base address (R2 x 0x400).
    #[must_use]
    pub fn name_table_base(&self) -> u16 {
        u16::from(self.regs[2] & 0x0F) << 10
    }

    /// Color table base address (R3 x 0x40).
    #[must_use]
    pub fn color_table_base(&self) -> u16 {
        u16::from(self.regs[3]) << 6
    }

    /// Pattern generator base address (R4 x 0x800).
    #[must_use]
    pub fn pattern_table_base(&self) -> u16 {
        u16::from(self.regs[4] & 0x07) << 11
    }

    /// Sprite attribute table base address (R5 x 0x80).
    #[must_use]
    pub fn sprite_attribute_base(&self) -> u16 {
        u16::from(self.regs[5] & 0x7F) << 7
    }

    /// Sprite pattern generator base address (R6 x 0x800).
    #[must_use]
    pub fn sprite_pattern_base(&self) -> u16 {
        u16::from(self.regs[6] & 0x07) << 11
    }

    /// Text-mode foreground color (R7 high nibble).
    #[must_use]
    pub fn foreground(&self) -> u8 {
        self.regs[7] >> 4
    }

    /// Backdrop color (R7 low nibble).
    #[must_use]
    pub fn backdrop(&self) -> u8 {
        self.regs[7] & 0x0F
    }
}
