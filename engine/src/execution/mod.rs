mod error;
mod interpreter;

pub use error::{InterpreterError, LoadError};
pub use interpreter::{Interpreter, Registers, StepOutcome};
pub(crate) use interpreter::FLAG;
