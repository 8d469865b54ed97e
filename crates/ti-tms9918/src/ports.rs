//! Control/data port protocol.
//!
//! The host reaches registers and VRAM through two ports. The control port
//! takes byte pairs: the first byte is latched, the second decides what
//! the pair means.
//!
//! | Second byte | Effect                                             |
//! |-------------|----------------------------------------------------|
//! | `1-- -rrr`  | register `rrr` = first byte                        |
//! | `01a aaaa`  | address = `aaaaaa` : first byte (for writing)      |
//! | `00a aaaa`  | address = `aaaaaa` : first byte, then prefetch     |
//!
//! The data port streams VRAM at the address register, which advances by
//! one after every access and wraps at 16K. A single byte buffer sits
//! between the data port and VRAM. Reads return the buffer and refill it
//! from the current address; writes store to VRAM and also copy the value
//! into the buffer. A read straight after a write therefore returns the
//! byte just written, not the byte at the new address.

use log::trace;

use crate::registers::RegisterFile;
use crate::vram::{VRAM_MASK, VideoMemory};

/// Second-byte bit selecting a register write.
pub const REGISTER_WRITE_MASK: u8 = 0x80;
/// Second-byte bit selecting an address set for writing.
pub const VRAM_WRITE_MASK: u8 = 0x40;

/// Control port byte-pair state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlLatch {
    /// Waiting for the first byte of a pair.
    #[default]
    Idle,
    /// First byte latched, waiting for the command byte.
    AwaitingSecondByte(u8),
}

/// What a completed control-port pair did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlCommand {
    /// First byte of a pair; nothing else happened.
    Latched(u8),
    /// Register write.
    WriteRegister { index: u8, value: u8 },
    /// Address set for writing.
    SetWriteAddress(u16),
    /// Address set for reading; the buffer has been prefetched.
    SetReadAddress(u16),
}

/// Address register, read-ahead buffer and control latch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortController {
    address: u16,
    read_ahead: u8,
    latch: ControlLatch,
}

impl PortController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Write one byte to the control port.
    pub fn write_control(
        &mut self,
        value: u8,
        regs: &mut RegisterFile,
        vram: &VideoMemory,
    ) -> ControlCommand {
        let lo = match self.latch {
            ControlLatch::Idle => {
                self.latch = ControlLatch::AwaitingSecondByte(value);
                trace!("control: latched first byte {value:02X}");
                return ControlCommand::Latched(value);
            }
            ControlLatch::AwaitingSecondByte(lo) => lo,
        };
        self.latch = ControlLatch::Idle;

        if value & REGISTER_WRITE_MASK != 0 {
            let index = value & 0x07;
            regs.set(index, lo);
            trace!("control: R{index} = {lo:02X}");
            return ControlCommand::WriteRegister { index, value: lo };
        }

        self.address = (u16::from(value & 0x3F) << 8) | u16::from(lo);
        if value & VRAM_WRITE_MASK != 0 {
            trace!("control: write address {:04X}", self.address);
            ControlCommand::SetWriteAddress(self.address)
        } else {
            let set = self.address;
            self.prime(vram);
            trace!("control: read address {set:04X}, prefetched {:02X}", self.read_ahead);
            ControlCommand::SetReadAddress(set)
        }
    }

    /// Write one byte to the data port.
    pub fn write_data(&mut self, value: u8, vram: &mut VideoMemory) {
        trace!("data: write {value:02X} at {:04X}", self.address);
        vram.set_byte(self.address, value);
        self.read_ahead = value;
        self.advance();
    }

    /// Read one byte from the data port.
    pub fn read_data(&mut self, vram: &VideoMemory) -> u8 {
        let result = self.read_ahead;
        self.prime(vram);
        trace!("data: read {result:02X}, address now {:04X}", self.address);
        result
    }

    /// Drop any half-written control pair.
    pub fn abort_sequence(&mut self) {
        if let ControlLatch::AwaitingSecondByte(lo) = self.latch {
            trace!("control: discarded pending byte {lo:02X}");
        }
        self.latch = ControlLatch::Idle;
    }

    pub fn reset(&mut self) {
        self.latch = ControlLatch::Idle;
        self.address = 0;
        self.read_ahead = 0;
    }

    // === Direct access (no protocol side effects) ===

    #[must_use]
    pub fn address(&self) -> u16 {
        self.address
    }

    pub fn set_address(&mut self, address: u16) {
        self.address = address & VRAM_MASK;
    }

    #[must_use]
    pub fn read_ahead(&self) -> u8 {
        self.read_ahead
    }

    #[must_use]
    pub fn latch(&self) -> ControlLatch {
        self.latch
    }

    fn prime(&mut self, vram: &VideoMemory) {
        self.read_ahead = vram.byte(self.address);
        self.advance();
    }

    fn advance(&mut self) {
        self.address = self.address.wrapping_add(1) & VRAM_MASK;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (PortController, RegisterFile, VideoMemory) {
        (PortController::new(), RegisterFile::new(), VideoMemory::new())
    }

    #[test]
    fn first_byte_only_latches() {
        let (mut ports, mut regs, vram) = setup();
        let cmd = ports.write_control(0x12, &mut regs, &vram);
        assert_eq!(cmd, ControlCommand::Latched(0x12));
        assert_eq!(ports.latch(), ControlLatch::AwaitingSecondByte(0x12));
        assert_eq!(ports.address(), 0);
        assert_eq!(ports.read_ahead(), 0);
        assert_eq!(regs, RegisterFile::new());
    }

    #[test]
    fn register_write_leaves_address_alone() {
        let (mut ports, mut regs, vram) = setup();
        ports.set_address(0x0123);
        ports.write_control(0x12, &mut regs, &vram);
        let cmd = ports.write_control(0x87, &mut regs, &vram);
        assert_eq!(cmd, ControlCommand::WriteRegister { index: 7, value: 0x12 });
        assert_eq!(regs.get(7), 0x12);
        assert_eq!(ports.address(), 0x0123);
        assert_eq!(ports.latch(), ControlLatch::Idle);
    }

    #[test]
    fn register_bits_three_to_six_are_ignored() {
        let (mut ports, mut regs, vram) = setup();
        ports.write_control(0x34, &mut regs, &vram);
        ports.write_control(0xFA, &mut regs, &vram);
        assert_eq!(regs.get(2), 0x34);
    }

    #[test]
    fn write_address_does_not_prefetch() {
        let (mut ports, mut regs, mut vram) = setup();
        vram.set_byte(0x2222, 0x99);
        ports.write_control(0x22, &mut regs, &vram);
        let cmd = ports.write_control(VRAM_WRITE_MASK | 0x22, &mut regs, &vram);
        assert_eq!(cmd, ControlCommand::SetWriteAddress(0x2222));
        assert_eq!(ports.address(), 0x2222);
        assert_eq!(ports.read_ahead(), 0);
    }

    #[test]
    fn read_address_prefetches_and_advances() {
        let (mut ports, mut regs, mut vram) = setup();
        vram.set_byte(0x1001, 0x77);
        ports.write_control(0x01, &mut regs, &vram);
        let cmd = ports.write_control(0x10, &mut regs, &vram);
        assert_eq!(cmd, ControlCommand::SetReadAddress(0x1001));
        assert_eq!(ports.address(), 0x1002);
        assert_eq!(ports.read_ahead(), 0x77);
    }

    #[test]
    fn address_high_bits_are_masked() {
        let (mut ports, mut regs, vram) = setup();
        ports.write_control(0xFF, &mut regs, &vram);
        ports.write_control(0x7F, &mut regs, &vram);
        assert_eq!(ports.address(), 0x3FFF);
    }

    #[test]
    fn data_write_echoes_into_buffer() {
        let (mut ports, _, mut vram) = setup();
        vram.set_byte(0x0401, 0xF2);
        ports.set_address(0x0400);
        ports.write_data(0xF1, &mut vram);
        assert_eq!(vram.byte(0x0400), 0xF1);
        assert_eq!(ports.address(), 0x0401);
        assert_eq!(ports.read_data(&vram), 0xF1);
        assert_eq!(ports.address(), 0x0402);
        assert_eq!(ports.read_data(&vram), 0xF2);
    }

    #[test]
    fn data_access_wraps_at_16k() {
        let (mut ports, _, mut vram) = setup();
        ports.set_address(0x3FFF);
        ports.write_data(0xAA, &mut vram);
        assert_eq!(ports.address(), 0x0000);
        ports.write_data(0x44, &mut vram);
        assert_eq!(vram.byte(0x3FFF), 0xAA);
        assert_eq!(vram.byte(0x0000), 0x44);
        assert_eq!(ports.address(), 0x0001);
    }

    #[test]
    fn set_address_masks_to_14_bits() {
        let mut ports = PortController::new();
        ports.set_address(0xC123);
        assert_eq!(ports.address(), 0x0123);
    }

    #[test]
    fn abort_and_reset_clear_latch() {
        let (mut ports, mut regs, mut vram) = setup();
        ports.write_control(0x55, &mut regs, &vram);
        ports.abort_sequence();
        assert_eq!(ports.latch(), ControlLatch::Idle);

        ports.set_address(0x0100);
        ports.write_data(0x42, &mut vram);
        ports.write_control(0x55, &mut regs, &vram);
        ports.reset();
        assert_eq!(ports, PortController::new());
    }
}
