//! The VDP as the host sees it.

use emu_core::{Bus, Observable, Value, parse_address};
use log::{debug, trace};

use crate::config::Model;
use crate::error::ScanlineError;
use crate::palette::PALETTE;
use crate::ports::{ControlCommand, ControlLatch, PortController};
use crate::registers::RegisterFile;
use crate::text_mode::{self, SCANLINE_WIDTH};
use crate::vram::{VRAM_SIZE, VideoMemory};

/// TMS9918A video display processor.
///
/// Each instance owns all of its state. Drop it to destroy it. Hosts that
/// share a chip between threads put it behind one `Mutex`.
#[derive(Debug, Clone)]
pub struct Tms9918 {
    regs: RegisterFile,
    vram: VideoMemory,
    ports: PortController,
    /// Read-only status register (F, 5S, C, fifth sprite number).
    status: u8,
    model: Model,
}

impl Tms9918 {
    #[must_use]
    pub fn new() -> Self {
        Self::with_model(Model::default())
    }

    #[must_use]
    pub fn with_model(model: Model) -> Self {
        debug!("{}: created", model.name());
        Self {
            regs: RegisterFile::new(),
            vram: VideoMemory::new(),
            ports: PortController::new(),
            status: 0,
            model,
        }
    }

    #[must_use]
    pub fn model(&self) -> Model {
        self.model
    }

    /// Reset registers, status and port state. VRAM survives.
    pub fn reset(&mut self) {
        debug!("{}: reset", self.model.name());
        self.regs.reset_all();
        self.ports.reset();
        self.status = 0;
    }

    // === Ports ===

    /// Write to the control port (MODE=1).
    pub fn write_control(&mut self, value: u8) -> ControlCommand {
        self.ports.write_control(value, &mut self.regs, &self.vram)
    }

    /// Read the control port (MODE=1): the status register.
    ///
    /// Clears status and abandons any half-written control pair.
    pub fn read_control(&mut self) -> u8 {
        let status = self.status;
        self.status = 0;
        self.ports.abort_sequence();
        trace!("control: status read {status:02X}");
        status
    }

    /// Write to the data port (MODE=0).
    pub fn write_data(&mut self, value: u8) {
        self.ports.write_data(value, &mut self.vram);
    }

    /// Read the data port (MODE=0).
    pub fn read_data(&mut self) -> u8 {
        self.ports.read_data(&self.vram)
    }

    // === Video ===

    /// Colour codes for one active display line (0-191).
    pub fn scanline(&self, line: u16) -> Result<[u8; SCANLINE_WIDTH], ScanlineError> {
        text_mode::render_scanline(&self.regs, &self.vram, line)
    }

    /// One active display line as ARGB32 pixels.
    pub fn scanline_argb(&self, line: u16) -> Result<[u32; SCANLINE_WIDTH], ScanlineError> {
        let codes = self.scanline(line)?;
        Ok(codes.map(|code| PALETTE[usize::from(code & 0x0F)]))
    }

    // === Direct access (debuggers and setup; bypasses the ports) ===

    #[must_use]
    pub fn register(&self, index: u8) -> u8 {
        self.regs.get(index)
    }

    pub fn set_register(&mut self, index: u8, value: u8) {
        self.regs.set(index, value);
    }

    /// Decoded view of the register bank.
    #[must_use]
    pub fn registers(&self) -> &RegisterFile {
        &self.regs
    }

    #[must_use]
    pub fn vram(&self, address: u16) -> u8 {
        self.vram.byte(address)
    }

    pub fn set_vram(&mut self, address: u16, value: u8) {
        self.vram.set_byte(address, value);
    }

    /// Copy of all 16K of VRAM.
    #[must_use]
    pub fn vram_contents(&self) -> Box<[u8; VRAM_SIZE]> {
        self.vram.contents()
    }

    #[must_use]
    pub fn vram_address(&self) -> u16 {
        self.ports.address()
    }

    /// Move the address register without touching the read-ahead buffer.
    pub fn set_vram_address(&mut self, address: u16) {
        self.ports.set_address(address);
    }

    #[must_use]
    pub fn read_ahead(&self) -> u8 {
        self.ports.read_ahead()
    }

    #[must_use]
    pub fn control_latch(&self) -> ControlLatch {
        self.ports.latch()
    }

    /// Peek status without the read side effects.
    #[must_use]
    pub fn status(&self) -> u8 {
        self.status
    }

    pub fn set_status(&mut self, value: u8) {
        self.status = value;
    }
}

impl Default for Tms9918 {
    fn default() -> Self {
        Self::new()
    }
}

/// Address bit 0 is the MODE pin: 0 = data port, 1 = control port.
impl Bus for Tms9918 {
    fn read(&mut self, address: u16) -> u8 {
        if address & 1 == 0 {
            self.read_data()
        } else {
            self.read_control()
        }
    }

    fn write(&mut self, address: u16, value: u8) {
        if address & 1 == 0 {
            self.write_data(value);
        } else {
            self.write_control(value);
        }
    }
}

impl Observable for Tms9918 {
    fn query(&self, path: &str) -> Option<Value> {
        if let Some(rest) = path.strip_prefix("registers.") {
            let index = rest.strip_prefix('r')?.parse::<u8>().ok()?;
            if usize::from(index) >= crate::REGISTER_COUNT {
                return None;
            }
            return Some(self.regs.get(index).into());
        }
        if let Some(rest) = path.strip_prefix("vram.") {
            return parse_address(rest).map(|a| Value::U8(self.vram.byte(a)));
        }
        match path {
            "status" => Some(self.status.into()),
            "address" => Some(self.ports.address().into()),
            "read_ahead" => Some(self.ports.read_ahead().into()),
            "latch.pending" => Some(Value::Bool(self.ports.latch() != ControlLatch::Idle)),
            "latch.value" => match self.ports.latch() {
                ControlLatch::Idle => Some(Value::U8(0)),
                ControlLatch::AwaitingSecondByte(lo) => Some(Value::U8(lo)),
            },
            "mode" => Some(self.regs.display_mode().name().into()),
            "name_table" => Some(self.regs.name_table_base().into()),
            "pattern_table" => Some(self.regs.pattern_table_base().into()),
            "color_table" => Some(self.regs.color_table_base().into()),
            "sprite_attributes" => Some(self.regs.sprite_attribute_base().into()),
            "sprite_patterns" => Some(self.regs.sprite_pattern_base().into()),
            "model" => Some(self.model.name().into()),
            _ => None,
        }
    }

    fn query_paths(&self) -> &'static [&'static str] {
        &[
            "registers.r0",
            "registers.r1",
            "registers.r2",
            "registers.r3",
            "registers.r4",
            "registers.r5",
            "registers.r6",
            "registers.r7",
            "status",
            "address",
            "read_ahead",
            "latch.pending",
            "latch.value",
            "mode",
            "name_table",
            "pattern_table",
            "color_table",
            "sprite_attributes",
            "sprite_patterns",
            "model",
            "vram.<address>",
        ]
    }
}
