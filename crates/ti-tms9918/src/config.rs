//! Chip model selection.

/// TMS9918 family member.
///
/// All three share the register set, port protocol and display modes.
/// They differ in video output and frame timing only.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Model {
    /// NTSC, composite output.
    #[default]
    Tms9918a,
    /// NTSC, YPbPr output.
    Tms9928a,
    /// PAL, YPbPr output.
    Tms9929a,
}

impl Model {
    /// Field rate in Hz.
    #[must_use]
    pub const fn refresh_hz(self) -> u32 {
        match self {
            Self::Tms9918a | Self::Tms9928a => 60,
            Self::Tms9929a => 50,
        }
    }

    /// Total scanlines per frame, including border and blanking.
    #[must_use]
    pub const fn lines_per_frame(self) -> u16 {
        match self {
            Self::Tms9918a | Self::Tms9928a => 262,
            Self::Tms9929a => 313,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tms9918a => "TMS9918A",
            Self::Tms9928a => "TMS9928A",
            Self::Tms9929a => "TMS9929A",
        }
    }
}
