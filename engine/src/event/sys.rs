use super::Event;
use crate::{
    execution::{Interpreter, InterpreterError},
    instruction::Instruction,
};

/// Event for the `0nnn` family.
///
/// Logic:
///   - `00E0`: clear the framebuffer
///   - `00EE`: PC = pop()
///   - anything else is ignored
#[derive(Debug, Clone, Copy)]
pub(crate) struct SysEvent;

impl Event for SysEvent {
    fn generate(ctx: &mut Interpreter, instruction: Instruction) -> Result<(), InterpreterError> {
        match instruction.nnn {
            0x0E0 => {
                ctx.display.clear();
                Ok(())
            }
            0x0EE => {
                let target = ctx.stack.pop(&mut ctx.registers.sp)?;
                ctx.jump_to(target);
                Ok(())
            }
            _ => ctx.ignore(instruction),
        }
    }
}
