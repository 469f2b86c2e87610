/// Number of logical keys on the hexadecimal keypad.
pub const KEY_COUNT: usize = 16;

/// Held state of the 16 logical keys, as last reported by the input device.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Keypad {
    held: [bool; KEY_COUNT],
}

impl Keypad {
    /// Records the state of `key`; only the low nibble selects the key.
    pub(crate) fn set(&mut self, key: u8, held: bool) {
        self.held[(key & 0xF) as usize] = held;
    }

    pub(crate) fn is_held(&self, key: u8) -> bool {
        self.held[(key & 0xF) as usize]
    }

    /// Lowest-numbered key currently held.
    pub(crate) fn first_held(&self) -> Option<u8> {
        self.held.iter().position(|&held| held).map(|key| key as u8)
    }
}
