//! Text mode (M1) scanline renderer.
//!
//! 40x24 cells, each 6x8 pixels. Only the top six bits of each pattern
//! byte are shown. The 240-pixel field is centred in the 256-pixel line
//! with an 8-pixel backdrop border on each side. Both colours come from
//! R7; there is no color table and no sprites in this mode.

use crate::error::ScanlineError;
use crate::registers::RegisterFile;
use crate::vram::VideoMemory;

/// Pixels per output line.
pub const SCANLINE_WIDTH: usize = 256;
/// Lines of active display.
pub const ACTIVE_LINES: u16 = 192;
/// Pixel rows per cell.
pub const CELL_HEIGHT: u16 = 8;

pub const TEXT_COLUMNS: u16 = 40;
pub const TEXT_ROWS: u16 = 24;
pub const TEXT_CELL_WIDTH: usize = 6;
/// Backdrop pixels either side of the text field.
pub const TEXT_BORDER: usize = 8;

/// Bytes per pattern generator entry.
const PATTERN_SIZE: u16 = 8;

/// Render one active display line in text mode.
///
/// Returns colour codes (0-15), one per pixel.
pub fn render_scanline(
    regs: &RegisterFile,
    vram: &VideoMemory,
    line: u16,
) -> Result<[u8; SCANLINE_WIDTH], ScanlineError> {
    if line >= ACTIVE_LINES {
        return Err(ScanlineError::LineOutOfRange {
            line,
            active_lines: ACTIVE_LINES,
        });
    }

    let row = line / CELL_HEIGHT;
    let fine_y = line % CELL_HEIGHT;

    let name_row = regs.name_table_base() + row * TEXT_COLUMNS;
    let pattern_base = regs.pattern_table_base();
    let fg = regs.foreground();
    let bg = regs.backdrop();

    let mut pixels = [bg; SCANLINE_WIDTH];
    let field = &mut pixels[TEXT_BORDER..SCANLINE_WIDTH - TEXT_BORDER];

    for (col, cell) in (0..TEXT_COLUMNS).zip(field.chunks_exact_mut(TEXT_CELL_WIDTH)) {
        let name = vram.byte(name_row.wrapping_add(col));
        let pattern = vram.byte(
            pattern_base
                .wrapping_add(u16::from(name) * PATTERN_SIZE)
                .wrapping_add(fine_y),
        );
        for (bit, pixel) in cell.iter_mut().enumerate() {
            *pixel = if (pattern << bit) & 0x80 != 0 { fg } else { bg };
        }
    }

    Ok(pixels)
}
