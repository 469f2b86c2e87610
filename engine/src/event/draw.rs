use super::Event;
use crate::{
    execution::{Interpreter, InterpreterError},
    instruction::Instruction,
};

/// Event for DRAW (`Dxyn`).
///
/// Logic:
///   1. read `n` sprite rows from memory starting at I
///   2. XOR them onto the framebuffer with the top-left corner at (V[x], V[y])
///   3. VF = 1 if any lit pixel was turned off, else 0
///
/// The origin is not wrapped in the default [`SpriteMode::Linear`](crate::SpriteMode::Linear).
#[derive(Debug, Clone, Copy)]
pub(crate) struct DrawEvent;

impl Event for DrawEvent {
    fn generate(ctx: &mut Interpreter, instruction: Instruction) -> Result<(), InterpreterError> {
        let x = ctx.reg(instruction.x);
        let y = ctx.reg(instruction.y);
        let height = instruction.n as usize;

        let mut rows = [0u8; 15];
        for (row, byte) in rows.iter_mut().take(height).enumerate() {
            *byte = ctx.memory.read(ctx.registers.i.wrapping_add(row as u16))?;
        }

        let collision = ctx.display.draw_sprite(
            x,
            y,
            &rows[..height],
            ctx.config.sprite_mode,
            ctx.config.strict,
        )?;
        ctx.set_flag(collision);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        event::test_utils::TestEnv, EngineConfig, InterpreterError, MemoryError, SpriteMode,
        DISPLAY_WIDTH,
    };

    #[test]
    fn test_draw_toggles_and_detects_collision() {
        // 0x200: CLS
        // 0x202: LD I, 0x20A
        // 0x204: DRW V0, V0, 1
        // 0x206: DRW V0, V0, 1
        // 0x208: JP 0x208
        // 0x20A: sprite byte 0x80
        let mut env = TestEnv::new(&[0x00E0, 0xA20A, 0xD001, 0xD001, 0x1208, 0x8000]);
        env.steps(3);
        assert_eq!(env.interpreter.snapshot_display().pixels()[0], 1);
        assert_eq!(env.v(0xF), 0);

        env.step();
        assert_eq!(env.interpreter.snapshot_display().pixels()[0], 0);
        assert_eq!(env.v(0xF), 1);
    }

    #[test]
    fn test_draw_glyph_from_font() {
        // Glyph "1" is 0x20, 0x60, 0x20, 0x20, 0x70.
        let mut env = TestEnv::new(&[0x6001, 0xF029, 0x610A, 0x6205, 0xD125]);
        env.steps(5);
        let snapshot = env.interpreter.snapshot_display();
        assert!(snapshot.pixel(12, 5));
        assert!(snapshot.pixel(11, 6));
        assert!(snapshot.pixel(12, 6));
        assert!(snapshot.pixel(10 + 1, 9) && snapshot.pixel(12, 9) && snapshot.pixel(13, 9));
        assert_eq!(snapshot.lit_count(), 1 + 2 + 1 + 1 + 3);
        assert_eq!(env.v(0xF), 0);
    }

    #[test]
    fn test_collision_clears_stale_flag() {
        let mut env = TestEnv::new(&[0xD001]);
        env.set_v(0xF, 1);
        env.set_index(0);
        env.set_v(0, 10);
        env.step();
        assert_eq!(env.v(0xF), 0);
    }

    #[test]
    fn test_draw_off_the_right_edge_spills_over() {
        let mut env = TestEnv::new(&[0xD011]);
        env.set_index(0); // 0xF0
        env.set_v(0, 62);
        env.set_v(1, 0);
        env.step();
        let pixels = env.interpreter.snapshot_display();
        assert!(pixels.pixel(62, 0) && pixels.pixel(63, 0));
        assert!(pixels.pixel(0, 1) && pixels.pixel(1, 1));
        assert_eq!(pixels.pixels()[DISPLAY_WIDTH + 1], 1);
    }

    #[test]
    fn test_strict_draw_rejects_out_of_range() {
        let mut env = TestEnv::with_config(EngineConfig::default().with_strict(true), &[0xD011]);
        env.set_index(0);
        env.set_v(0, 0);
        env.set_v(1, 40);
        assert_eq!(
            env.interpreter.step(),
            Err(InterpreterError::PixelOutOfRange(40 * DISPLAY_WIDTH))
        );

        let mut env = TestEnv::with_config(EngineConfig::default().with_strict(true), &[0xD012]);
        env.set_index(0x0FFF);
        assert_eq!(
            env.interpreter.step(),
            Err(InterpreterError::Memory(MemoryError::AddressOutOfRange(0x1000)))
        );
        assert_eq!(env.interpreter.snapshot_display().lit_count(), 0);
    }

    #[test]
    fn test_wrapped_draw() {
        let config = EngineConfig::default().with_sprite_mode(SpriteMode::Wrap);
        let mut env = TestEnv::with_config(config, &[0xD011]);
        env.set_index(0);
        env.set_v(0, 126);
        env.set_v(1, 33);
        env.step();
        let pixels = env.interpreter.snapshot_display();
        assert!(pixels.pixel(62, 1) && pixels.pixel(63, 1));
        assert!(pixels.pixel(0, 1) && pixels.pixel(1, 1));
        assert_eq!(pixels.lit_count(), 4);
    }
}
