use super::Event;
use crate::{
    execution::{Interpreter, InterpreterError},
    instruction::Instruction,
};

/// Event for `6xkk`.
///
/// Logic:
///   1. V[x] = kk
#[derive(Debug, Clone, Copy)]
pub(crate) struct LoadImmEvent;

impl Event for LoadImmEvent {
    fn generate(ctx: &mut Interpreter, instruction: Instruction) -> Result<(), InterpreterError> {
        ctx.set_reg(instruction.x, instruction.kk);
        Ok(())
    }
}

/// Event for `7xkk`.
///
/// Logic:
///   1. V[x] = V[x] + kk, wrapping; the flag register is untouched
#[derive(Debug, Clone, Copy)]
pub(crate) struct AddImmEvent;

impl Event for AddImmEvent {
    fn generate(ctx: &mut Interpreter, instruction: Instruction) -> Result<(), InterpreterError> {
        let value = ctx.reg(instruction.x).wrapping_add(instruction.kk);
        ctx.set_reg(instruction.x, value);
        Ok(())
    }
}

/// Event for `Annn`.
///
/// Logic:
///   1. I = nnn
#[derive(Debug, Clone, Copy)]
pub(crate) struct LoadIndexEvent;

impl Event for LoadIndexEvent {
    fn generate(ctx: &mut Interpreter, instruction: Instruction) -> Result<(), InterpreterError> {
        ctx.registers.i = instruction.nnn;
        Ok(())
    }
}

/// Event for `Cxkk`.
///
/// Logic:
///   1. V[x] = random byte & kk
#[derive(Debug, Clone, Copy)]
pub(crate) struct RandomEvent;

impl Event for RandomEvent {
    fn generate(ctx: &mut Interpreter, instruction: Instruction) -> Result<(), InterpreterError> {
        let value = ctx.random_byte() & instruction.kk;
        ctx.set_reg(instruction.x, value);
        Ok(())
    }
}
