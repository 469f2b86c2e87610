use crate::opcodes::Opcode;

/// A decoded instruction word.
///
/// Decoding is pure: every field is a fixed slice of the 16-bit word, whether
/// or not the instruction uses it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Instruction {
    /// The raw big-endian word.
    pub word: u16,
    pub opcode: Opcode,
    /// Bits 8..12, a register index.
    pub x: u8,
    /// Bits 4..8, a register index.
    pub y: u8,
    /// Low nibble.
    pub n: u8,
    /// Low byte.
    pub kk: u8,
    /// Low 12 bits, an address.
    pub nnn: u16,
}

impl Instruction {
    pub fn decode(word: u16) -> Self {
        Self {
            word,
            opcode: Opcode::from_word(word),
            x: ((word >> 8) & 0xF) as u8,
            y: ((word >> 4) & 0xF) as u8,
            n: (word & 0xF) as u8,
            kk: (word & 0xFF) as u8,
            nnn: word & 0x0FFF,
        }
    }
}

impl From<u16> for Instruction {
    fn from(word: u16) -> Self {
        Self::decode(word)
    }
}
