mod error;
mod font;
mod stack;

use std::fmt;

pub use error::MemoryError;
pub use font::FONT;
pub(crate) use font::GLYPH_HEIGHT;
pub(crate) use stack::CallStack;
pub use stack::STACK_DEPTH;

/// Size of the address space in bytes.
pub const MEMORY_SIZE: usize = 0x1000;

/// Address at which loaded programs start executing.
pub const RESET_VECTOR: u16 = 0x200;

/// Addresses are 12 bits wide.
const ADDRESS_MASK: u16 = 0x0FFF;

/// The 4 KiB address space.
///
/// The glyph table occupies `[0, 80)` and program images are copied to
/// [`RESET_VECTOR`]. In compatibility mode every address is masked to 12 bits
/// before access; in strict mode an address past the end is an error.
#[derive(Clone)]
pub(crate) struct Memory {
    bytes: Box<[u8; MEMORY_SIZE]>,
    strict: bool,
}

impl fmt::Debug for Memory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memory")
            .field("size", &MEMORY_SIZE)
            .field("strict", &self.strict)
            .finish_non_exhaustive()
    }
}

impl Memory {
    /// Creates a zeroed address space with the glyph table installed.
    pub(crate) fn new(strict: bool) -> Self {
        let mut memory = Self {
            bytes: Box::new([0; MEMORY_SIZE]),
            strict,
        };
        memory.install_font();
        memory
    }

    /// Number of bytes available to a program image.
    pub(crate) const fn capacity() -> usize {
        MEMORY_SIZE - RESET_VECTOR as usize
    }

    /// Copies `image` to the reset vector.
    ///
    /// The address space is left untouched if the image does not fit.
    pub(crate) fn load_image(&mut self, image: &[u8]) -> Result<(), MemoryError> {
        let capacity = Self::capacity();
        if image.len() > capacity {
            return Err(MemoryError::ImageTooLarge {
                len: image.len(),
                capacity,
            });
        }

        let start = RESET_VECTOR as usize;
        self.bytes[start..start + image.len()].copy_from_slice(image);
        Ok(())
    }

    fn resolve(&self, addr: u16) -> Result<usize, MemoryError> {
        if self.strict && addr > ADDRESS_MASK {
            return Err(MemoryError::AddressOutOfRange(addr));
        }
        Ok((addr & ADDRESS_MASK) as usize)
    }

    /// In strict mode, checks that `len` bytes starting at `addr` are all
    /// addressable, so a multi-byte transfer either completes or does nothing.
    pub(crate) fn check_span(&self, addr: u16, len: u16) -> Result<(), MemoryError> {
        if !self.strict || len == 0 {
            return Ok(());
        }
        let last = addr as u32 + len as u32 - 1;
        if last > ADDRESS_MASK as u32 {
            let first_bad = (addr as u32).max(ADDRESS_MASK as u32 + 1);
            return Err(MemoryError::AddressOutOfRange(first_bad as u16));
        }
        Ok(())
    }

    pub(crate) fn read(&self, addr: u16) -> Result<u8, MemoryError> {
        Ok(self.bytes[self.resolve(addr)?])
    }

    /// Reads the big-endian word stored at `addr` and `addr + 1`.
    pub(crate) fn read_word(&self, addr: u16) -> Result<u16, MemoryError> {
        let hi = self.read(addr)? as u16;
        let lo = self.read(addr.wrapping_add(1))? as u16;
        Ok((hi << 8) | lo)
    }

    pub(crate) fn write(&mut self, addr: u16, value: u8) -> Result<(), MemoryError> {
        let index = self.resolve(addr)?;
        self.bytes[index] = value;
        Ok(())
    }

    /// Zeroes the whole address space, glyph table included.
    pub(crate) fn clear(&mut self) {
        self.bytes.fill(0);
    }

    pub(crate) fn as_slice(&self) -> &[u8] {
        &self.bytes[..]
    }

    fn install_font(&mut self) {
        self.bytes[..FONT.len()].copy_from_slice(&FONT);
    }
}
