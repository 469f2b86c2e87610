use std::{io, path::PathBuf};

use thiserror::Error;

use crate::memory::MemoryError;

/// Errors raised while executing an instruction.
///
/// In compatibility mode (the default) the engine never returns an error from
/// [`Interpreter::step`](crate::Interpreter::step): out-of-range accesses wrap
/// and unknown instructions are skipped. Strict mode surfaces them here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InterpreterError {
    #[error(transparent)]
    Memory(#[from] MemoryError),

    #[error("unknown instruction {0:#06x}")]
    UnknownInstruction(u16),

    #[error("sprite pixel {0} lies outside the framebuffer")]
    PixelOutOfRange(usize),
}

/// Errors raised while loading a program image from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read program image {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Memory(#[from] MemoryError),
}
