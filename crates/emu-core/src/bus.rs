//! Host-side bus interface.

/// A device the host reaches through reads and writes on its bus.
///
/// The host decodes its own address space and hands the device the
/// address it sees. Port-mapped chips usually look at a few low address
/// lines only and mirror across the rest.
pub trait Bus {
    /// Read a byte from the given address.
    ///
    /// Takes `&mut self` because reads on real hardware often have side
    /// effects (latch resets, read-ahead buffers, auto-increment).
    fn read(&mut self, address: u16) -> u8;

    /// Write a byte to the given address.
    fn write(&mut self, address: u16, value: u8);

    /// Write each byte of `data` to the same address, in order.
    ///
    /// This is how a host streams a block through a data port.
    fn write_block(&mut self, address: u16, data: &[u8]) {
        for &byte in data {
            self.write(address, byte);
        }
    }
}
