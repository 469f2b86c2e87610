use super::Event;
use crate::{
    execution::{Interpreter, InterpreterError},
    instruction::Instruction,
    memory::GLYPH_HEIGHT,
};

/// Event for the `Fxkk` family.
///
/// Logic:
///   - `Fx07`: V[x] = delay timer
///   - `Fx0A`: V[x] = lowest held key, or rewind PC and retry next step
///   - `Fx15`: delay timer = V[x]
///   - `Fx18`: sound timer = V[x]
///   - `Fx1E`: VF = I + V[x] > 0xFFF; I += V[x]
///   - `Fx29`: I = address of the glyph for V[x]
///   - `Fx33`: memory[I..I+3] = decimal digits of V[x]
///   - `Fx55`: memory[I..=I+x] = V[0..=x], I advances past the block
///   - `Fx65`: V[0..=x] = memory[I..=I+x], I advances past the block
#[derive(Debug, Clone, Copy)]
pub(crate) struct MiscEvent;

impl MiscEvent {
    fn wait_for_key(ctx: &mut Interpreter, x: u8) {
        match ctx.keypad.first_held() {
            Some(key) => ctx.set_reg(x, key),
            None => {
                ctx.registers.pc = ctx.registers.pc.wrapping_sub(2);
                ctx.waiting_for_key = true;
            }
        }
    }

    fn store_bcd(ctx: &mut Interpreter, x: u8) -> Result<(), InterpreterError> {
        let value = ctx.reg(x);
        let i = ctx.registers.i;
        ctx.memory.check_span(i, 3)?;
        ctx.memory.write(i, value / 100)?;
        ctx.memory.write(i.wrapping_add(1), (value / 10) % 10)?;
        ctx.memory.write(i.wrapping_add(2), value % 10)?;
        Ok(())
    }

    fn store_registers(ctx: &mut Interpreter, x: u8) -> Result<(), InterpreterError> {
        ctx.memory.check_span(ctx.registers.i, x as u16 + 1)?;
        for index in 0..=x {
            let value = ctx.reg(index);
            ctx.memory.write(ctx.registers.i, value)?;
            ctx.registers.i = ctx.registers.i.wrapping_add(1);
        }
        Ok(())
    }

    fn load_registers(ctx: &mut Interpreter, x: u8) -> Result<(), InterpreterError> {
        ctx.memory.check_span(ctx.registers.i, x as u16 + 1)?;
        for index in 0..=x {
            let value = ctx.memory.read(ctx.registers.i)?;
            ctx.set_reg(index, value);
            ctx.registers.i = ctx.registers.i.wrapping_add(1);
        }
        Ok(())
    }
}

impl Event for MiscEvent {
    fn generate(ctx: &mut Interpreter, instruction: Instruction) -> Result<(), InterpreterError> {
        let x = instruction.x;
        match instruction.kk {
            0x07 => ctx.set_reg(x, ctx.timers.delay),
            0x0A => Self::wait_for_key(ctx, x),
            0x15 => ctx.timers.delay = ctx.reg(x),
            0x18 => ctx.timers.sound = ctx.reg(x),
            0x1E => {
                ctx.set_flag(ctx.registers.i as u32 + ctx.reg(x) as u32 > 0xFFF);
                ctx.registers.i = ctx.registers.i.wrapping_add(ctx.reg(x) as u16);
            }
            0x29 => ctx.registers.i = ctx.reg(x) as u16 * GLYPH_HEIGHT,
            0x33 => Self::store_bcd(ctx, x)?,
            0x55 => Self::store_registers(ctx, x)?,
            0x65 => Self::load_registers(ctx, x)?,
            _ => return ctx.ignore(instruction),
        }
        Ok(())
    }
}
