use thiserror::Error;

/// Failures raised by the address space and the call stack.
///
/// Only [`MemoryError::ImageTooLarge`] can happen in compatibility mode; the
/// other variants are produced when the engine runs with
/// [`EngineConfig::strict`](crate::EngineConfig::strict) enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MemoryError {
    #[error("program image of {len} bytes exceeds the {capacity} bytes available")]
    ImageTooLarge { len: usize, capacity: usize },

    #[error("address {0:#06x} is outside the address space")]
    AddressOutOfRange(u16),

    #[error("call stack exhausted at depth {0}")]
    StackOverflow(u16),

    #[error("return with an empty call stack")]
    StackUnderflow,
}
