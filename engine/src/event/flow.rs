use super::Event;
use crate::{
    execution::{Interpreter, InterpreterError},
    instruction::Instruction,
};

/// Event for JUMP (`1nnn`).
///
/// Logic:
///   1. PC = nnn
#[derive(Debug, Clone, Copy)]
pub(crate) struct JumpEvent;

impl Event for JumpEvent {
    fn generate(ctx: &mut Interpreter, instruction: Instruction) -> Result<(), InterpreterError> {
        ctx.jump_to(instruction.nnn);
        Ok(())
    }
}

/// Event for CALL (`2nnn`).
///
/// Logic:
///   1. push(PC), where PC already addresses the instruction after the call
///   2. PC = nnn
#[derive(Debug, Clone, Copy)]
pub(crate) struct CallEvent;

impl Event for CallEvent {
    fn generate(ctx: &mut Interpreter, instruction: Instruction) -> Result<(), InterpreterError> {
        let return_pc = ctx.registers.pc;
        ctx.stack.push(&mut ctx.registers.sp, return_pc)?;
        ctx.jump_to(instruction.nnn);
        Ok(())
    }
}

/// Event for JUMP with offset (`Bnnn`).
///
/// Logic:
///   1. PC = nnn + V[0]
#[derive(Debug, Clone, Copy)]
pub(crate) struct JumpOffsetEvent;

impl Event for JumpOffsetEvent {
    fn generate(ctx: &mut Interpreter, instruction: Instruction) -> Result<(), InterpreterError> {
        let target = instruction.nnn + ctx.reg(0) as u16;
        ctx.jump_to(target);
        Ok(())
    }
}
