use super::Event;
use crate::{
    config::ShiftQuirk,
    execution::{Interpreter, InterpreterError},
    instruction::Instruction,
};

/// Event for the `8xyn` family.
///
/// Logic:
///   - `n = 0..=3`: V[x] = V[y], V[x] | V[y], V[x] & V[y], V[x] ^ V[y]
///   - `n = 4`: VF = carry of V[x] + V[y]; V[x] += V[y]
///   - `n = 5`: VF = V[x] > V[y]; V[x] -= V[y]
///   - `n = 6`: VF = low bit of the source; V[x] = source >> 1
///   - `n = 7`: VF = V[y] > V[x]; V[x] = V[y] - V[x]
///   - `n = E`: VF = high bit of the source; V[x] = source << 1
///
/// VF is written before V[x], and V[x] is computed from the registers as they
/// stand after that write. With `x` or `y` equal to `0xF` this decides the
/// final value, so the order must not change.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AluEvent;

impl AluEvent {
    /// Register read by a shift, per the configured dialect.
    fn shift_source(quirk: ShiftQuirk, instruction: Instruction) -> u8 {
        let left = instruction.n == 0xE;
        match quirk {
            ShiftQuirk::Reference if left => instruction.y,
            ShiftQuirk::Reference => instruction.x,
            ShiftQuirk::VxOnly => instruction.x,
            ShiftQuirk::VyOnly => instruction.y,
        }
    }
}

impl Event for AluEvent {
    fn generate(ctx: &mut Interpreter, instruction: Instruction) -> Result<(), InterpreterError> {
        let Instruction { x, y, .. } = instruction;
        match instruction.n {
            0x0 => ctx.set_reg(x, ctx.reg(y)),
            0x1 => ctx.set_reg(x, ctx.reg(x) | ctx.reg(y)),
            0x2 => ctx.set_reg(x, ctx.reg(x) & ctx.reg(y)),
            0x3 => ctx.set_reg(x, ctx.reg(x) ^ ctx.reg(y)),
            0x4 => {
                ctx.set_flag(ctx.reg(x) as u16 + ctx.reg(y) as u16 > 0xFF);
                ctx.set_reg(x, ctx.reg(x).wrapping_add(ctx.reg(y)));
            }
            0x5 => {
                ctx.set_flag(ctx.reg(x) > ctx.reg(y));
                ctx.set_reg(x, ctx.reg(x).wrapping_sub(ctx.reg(y)));
            }
            0x6 => {
                let src = Self::shift_source(ctx.config.shift_quirk, instruction);
                ctx.set_flag(ctx.reg(src) & 1 == 1);
                ctx.set_reg(x, ctx.reg(src) >> 1);
            }
            0x7 => {
                ctx.set_flag(ctx.reg(y) > ctx.reg(x));
                ctx.set_reg(x, ctx.reg(y).wrapping_sub(ctx.reg(x)));
            }
            0xE => {
                let src = Self::shift_source(ctx.config.shift_quirk, instruction);
                ctx.set_flag(ctx.reg(src) >> 7 == 1);
                ctx.set_reg(x, ctx.reg(src) << 1);
            }
            _ => return ctx.ignore(instruction),
        }
        Ok(())
    }
}
