//! 16K dedicated video RAM.

/// VRAM size in bytes. All addressing is modulo this size.
pub const VRAM_SIZE: usize = 0x4000;

/// Mask applied to every VRAM address.
pub(crate) const VRAM_MASK: u16 = (VRAM_SIZE - 1) as u16;

/// Flat, wrapping 16K byte store.
#[derive(Clone, PartialEq, Eq)]
pub struct VideoMemory {
    bytes: Box<[u8; VRAM_SIZE]>,
}

impl VideoMemory {
    #[must_use]
    pub fn new() -> Self {
        Self {
            bytes: Box::new([0; VRAM_SIZE]),
        }
    }

    pub fn set_byte(&mut self, address: u16, value: u8) {
        self.bytes[usize::from(address & VRAM_MASK)] = value;
    }

    #[must_use]
    pub fn byte(&self, address: u16) -> u8 {
        self.bytes[usize::from(address & VRAM_MASK)]
    }

    /// Snapshot of the whole store in address order.
    #[must_use]
    pub fn contents(&self) -> Box<[u8; VRAM_SIZE]> {
        self.bytes.clone()
    }
}

impl Default for VideoMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for VideoMemory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let used = self.bytes.iter().filter(|&&b| b != 0).count();
        f.debug_struct("VideoMemory")
            .field("size", &VRAM_SIZE)
            .field("non_zero", &used)
            .finish()
    }
}
