//! Error types.

use thiserror::Error;

/// A scanline request outside the active display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScanlineError {
    /// Border and blanking lines have no defined content.
    #[error("scanline {line} is outside the active display (0..{active_lines})")]
    LineOutOfRange { line: u16, active_lines: u16 },
}
