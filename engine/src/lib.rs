//! chip8vm execution engine.
//!
//! Loads a binary image into a 4 KiB address space and executes it one
//! instruction per [`Interpreter::step`] call. Presentation, audio and input
//! devices live outside this crate: they feed key state in, pull framebuffer
//! snapshots out, and drive [`Interpreter::tick_timers`] at 60 Hz.

pub mod config;
mod display;
mod event;
mod execution;
mod instruction;
mod keypad;
mod memory;
mod opcodes;
pub mod stats;
mod timers;
mod util;

pub use config::{EngineConfig, ShiftQuirk, SpriteMode};
pub use display::{DisplaySnapshot, DISPLAY_HEIGHT, DISPLAY_SIZE, DISPLAY_WIDTH};
pub use execution::{Interpreter, InterpreterError, LoadError, Registers, StepOutcome};
pub use instruction::Instruction;
pub use keypad::KEY_COUNT;
pub use memory::{MemoryError, FONT, MEMORY_SIZE, RESET_VECTOR, STACK_DEPTH};
pub use opcodes::Opcode;
pub use stats::ExecutionStats;
pub use util::init_logger;
