//! Instruction semantics.
//!
//! Each instruction family is a zero-sized event type implementing [`Event`].
//! [`Opcode::generate_event`] is the outer dispatch on the family nibble; the
//! `Sys`, `Alu`, `KeySkip` and `Misc` events switch again on a sub-field.
//!
//! By the time an event runs, PC already points past the instruction, so jump
//! targets are absolute and "skip" means one more `PC += 2`.

use tracing::instrument;

use crate::{
    execution::{Interpreter, InterpreterError},
    instruction::Instruction,
    Opcode,
};

#[macro_use]
mod macros;
mod alu;
mod draw;
mod flow;
mod load;
mod misc;
mod skip;
mod sys;

#[cfg(test)]
pub(crate) mod test_utils;

pub(crate) use self::{
    alu::AluEvent,
    draw::DrawEvent,
    flow::{CallEvent, JumpEvent, JumpOffsetEvent},
    load::{AddImmEvent, LoadImmEvent, LoadIndexEvent, RandomEvent},
    misc::MiscEvent,
    skip::{KeySkipEvent, SkipEqImmEvent, SkipEqRegEvent, SkipNeImmEvent, SkipNeRegEvent},
    sys::SysEvent,
};

/// The semantics of one instruction family.
pub(crate) trait Event {
    /// Applies `instruction` to the machine state.
    fn generate(ctx: &mut Interpreter, instruction: Instruction) -> Result<(), InterpreterError>;
}

impl Opcode {
    /// Executes the event for this instruction family.
    #[instrument(
        level = "trace",
        skip_all,
        fields(
            opcode = %self,
            word = %format!("0x{:04x}", instruction.word),
        )
    )]
    pub(crate) fn generate_event(
        self,
        ctx: &mut Interpreter,
        instruction: Instruction,
    ) -> Result<(), InterpreterError> {
        match self {
            Opcode::Sys => SysEvent::generate(ctx, instruction),
            Opcode::Jump => JumpEvent::generate(ctx, instruction),
            Opcode::Call => CallEvent::generate(ctx, instruction),
            Opcode::SkipEqImm => SkipEqImmEvent::generate(ctx, instruction),
            Opcode::SkipNeImm => SkipNeImmEvent::generate(ctx, instruction),
            Opcode::SkipEqReg => SkipEqRegEvent::generate(ctx, instruction),
            Opcode::LoadImm => LoadImmEvent::generate(ctx, instruction),
            Opcode::AddImm => AddImmEvent::generate(ctx, instruction),
            Opcode::Alu => AluEvent::generate(ctx, instruction),
            Opcode::SkipNeReg => SkipNeRegEvent::generate(ctx, instruction),
            Opcode::LoadIndex => LoadIndexEvent::generate(ctx, instruction),
            Opcode::JumpOffset => JumpOffsetEvent::generate(ctx, instruction),
            Opcode::Random => RandomEvent::generate(ctx, instruction),
            Opcode::Draw => DrawEvent::generate(ctx, instruction),
            Opcode::KeySkip => KeySkipEvent::generate(ctx, instruction),
            Opcode::Misc => MiscEvent::generate(ctx, instruction),
        }
    }
}
