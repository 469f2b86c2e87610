use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum_macros::{Display, EnumCount};

/// Instruction families, selected by the high nibble of the instruction word.
///
/// Families `Sys`, `Alu`, `KeySkip` and `Misc` are further split on a
/// sub-field of the word; see [`crate::Instruction`].
#[derive(
    Debug, Clone, Copy, Default, Display, EnumCount, TryFromPrimitive, IntoPrimitive, PartialEq, Eq,
)]
#[repr(u8)]
pub enum Opcode {
    /// `00E0` clear screen, `00EE` return.
    #[default]
    Sys = 0x0,
    /// `1nnn`
    Jump = 0x1,
    /// `2nnn`
    Call = 0x2,
    /// `3xkk`
    SkipEqImm = 0x3,
    /// `4xkk`
    SkipNeImm = 0x4,
    /// `5xy0`
    SkipEqReg = 0x5,
    /// `6xkk`
    LoadImm = 0x6,
    /// `7xkk`
    AddImm = 0x7,
    /// `8xyn` register-register arithmetic and logic.
    Alu = 0x8,
    /// `9xy0`
    SkipNeReg = 0x9,
    /// `Annn`
    LoadIndex = 0xA,
    /// `Bnnn`
    JumpOffset = 0xB,
    /// `Cxkk`
    Random = 0xC,
    /// `Dxyn`
    Draw = 0xD,
    /// `Ex9E`, `ExA1`
    KeySkip = 0xE,
    /// `Fxkk` timers, keypad wait, index and memory transfer.
    Misc = 0xF,
}

impl Opcode {
    /// Family encoded in the top nibble of `word`.
    pub fn from_word(word: u16) -> Self {
        // Every nibble value names a family, so the conversion cannot fail.
        Self::try_from((word >> 12) as u8).unwrap_or_default()
    }
}
