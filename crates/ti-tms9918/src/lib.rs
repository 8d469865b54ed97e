//! Texas Instruments TMS9918A Video Display Processor.
//!
//! The VDP owns 16K of dedicated VRAM and eight write-only registers. The
//! host CPU never sees VRAM directly: everything goes through two ports
//! selected by the MODE pin.
//!
//! - MODE=1 (control port): byte pairs set a register or the VRAM address.
//!   Reads return the status register.
//! - MODE=0 (data port): streams VRAM at the address register, which
//!   auto-increments and wraps at 16K.
//!
//! # Video output
//!
//! [`Tms9918::scanline`] renders one 256-pixel line of colour codes at a
//! time. Text mode (40x24 cells of 6x8 pixels) is implemented. The other
//! display modes are decoded from the registers but render with the
//! text-mode layout.
//!
//! # Standalone IC
//!
//! The chip has no clock and raises no interrupts here. The host drives it
//! through [`emu_core::Bus`] (address bit 0 is MODE) or the port methods,
//! and asks for scanlines when its own frame loop needs them.

mod config;
mod error;
mod palette;
mod ports;
mod registers;
mod text_mode;
mod vdp;
mod vram;

pub use config::Model;
pub use error::ScanlineError;
pub use palette::{Color, PALETTE};
pub use ports::{ControlCommand, ControlLatch, REGISTER_WRITE_MASK, VRAM_WRITE_MASK};
pub use registers::{DisplayMode, REGISTER_COUNT, RegisterFile};
pub use text_mode::{
    ACTIVE_LINES, CELL_HEIGHT, SCANLINE_WIDTH, TEXT_BORDER, TEXT_CELL_WIDTH, TEXT_COLUMNS,
    TEXT_ROWS,
};
pub use vdp::Tms9918;
pub use vram::VRAM_SIZE;
