use super::Event;
use crate::{
    execution::{Interpreter, InterpreterError},
    instruction::Instruction,
};

define_skip_event!(
    /// `3xkk`: skip if V[x] == kk.
    SkipEqImmEvent,
    |ctx, ins| ctx.reg(ins.x) == ins.kk
);

define_skip_event!(
    /// `4xkk`: skip if V[x] != kk.
    SkipNeImmEvent,
    |ctx, ins| ctx.reg(ins.x) != ins.kk
);

define_skip_event!(
    /// `5xy0`: skip if V[x] == V[y]. The low nibble is not checked.
    SkipEqRegEvent,
    |ctx, ins| ctx.reg(ins.x) == ctx.reg(ins.y)
);

define_skip_event!(
    /// `9xy0`: skip if V[x] != V[y]. The low nibble is not checked.
    SkipNeRegEvent,
    |ctx, ins| ctx.reg(ins.x) != ctx.reg(ins.y)
);

/// Event for the `Exkk` family.
///
/// Logic:
///   - `Ex9E`: skip if key V[x] & 0xF is held
///   - `ExA1`: skip if key V[x] & 0xF is not held
#[derive(Debug, Clone, Copy)]
pub(crate) struct KeySkipEvent;

impl Event for KeySkipEvent {
    fn generate(ctx: &mut Interpreter, instruction: Instruction) -> Result<(), InterpreterError> {
        let held = ctx.keypad.is_held(ctx.reg(instruction.x));
        match instruction.kk {
            0x9E => ctx.skip_if(held),
            0xA1 => ctx.skip_if(!held),
            _ => return ctx.ignore(instruction),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::event::test_utils::TestEnv;

    #[test]
    fn test_skip_eq_imm() {
        let mut env = TestEnv::new(&[0x3A07, 0x3A07]);
        env.set_v(0xA, 0x07);
        env.step();
        assert_eq!(env.pc(), 0x204);

        let mut env = TestEnv::new(&[0x3A07]);
        env.step();
        assert_eq!(env.pc(), 0x202);
    }

    #[test]
    fn test_skip_ne_imm() {
        let mut env = TestEnv::new(&[0x4A07]);
        env.step();
        assert_eq!(env.pc(), 0x204);

        let mut env = TestEnv::new(&[0x4A00]);
        env.step();
        assert_eq!(env.pc(), 0x202);
    }

    #[test]
    fn test_skip_on_register_compare() {
        let mut env = TestEnv::new(&[0x5120, 0x0000, 0x9120]);
        env.set_v(1, 9);
        env.set_v(2, 9);
        env.step();
        assert_eq!(env.pc(), 0x204);
        env.step();
        assert_eq!(env.pc(), 0x206);

        let mut env = TestEnv::new(&[0x9120]);
        env.set_v(1, 1);
        env.step();
        assert_eq!(env.pc(), 0x204);
    }

    #[test]
    fn test_key_skips_mask_register_value() {
        let mut env = TestEnv::new(&[0xE39E, 0x0000, 0xE3A1]);
        env.set_v(3, 0x15);
        env.interpreter.set_key_held(0x5, true);
        env.step();
        assert_eq!(env.pc(), 0x204);
        env.step();
        assert_eq!(env.pc(), 0x206);

        let mut env = TestEnv::new(&[0xE3A1]);
        env.step();
        assert_eq!(env.pc(), 0x204);
    }

    #[test]
    fn test_unknown_key_sub_case_is_a_no_op() {
        let mut env = TestEnv::new(&[0xE3FF]);
        env.step();
        assert_eq!(env.pc(), 0x202);
        assert_eq!(env.interpreter.stats().ignored(), 1);
    }
}
