use super::MemoryError;

/// Number of return addresses the call stack can hold.
pub const STACK_DEPTH: usize = 16;

/// Fixed-depth return address stack, indexed by the SP register.
///
/// `push` writes at SP then increments it; `pop` decrements SP then reads.
/// In compatibility mode the index wraps modulo [`STACK_DEPTH`], so the 17th
/// nested call overwrites the first return address. Strict mode reports
/// [`MemoryError::StackOverflow`] and [`MemoryError::StackUnderflow`] instead
/// and leaves SP untouched.
#[derive(Debug, Clone, Default)]
pub(crate) struct CallStack {
    entries: [u16; STACK_DEPTH],
    strict: bool,
}

impl CallStack {
    pub(crate) fn new(strict: bool) -> Self {
        Self {
            entries: [0; STACK_DEPTH],
            strict,
        }
    }

    pub(crate) fn push(&mut self, sp: &mut u16, value: u16) -> Result<(), MemoryError> {
        if self.strict && *sp as usize >= STACK_DEPTH {
            return Err(MemoryError::StackOverflow(*sp));
        }
        self.entries[*sp as usize % STACK_DEPTH] = value;
        *sp = sp.wrapping_add(1);
        Ok(())
    }

    pub(crate) fn pop(&mut self, sp: &mut u16) -> Result<u16, MemoryError> {
        if self.strict && (*sp == 0 || *sp as usize > STACK_DEPTH) {
            return Err(MemoryError::StackUnderflow);
        }
        *sp = sp.wrapping_sub(1);
        Ok(self.entries[*sp as usize % STACK_DEPTH])
    }

    pub(crate) fn clear(&mut self) {
        self.entries = [0; STACK_DEPTH];
    }

    pub(crate) fn entries(&self) -> &[u16; STACK_DEPTH] {
        &self.entries
    }
}
