mod common;

use chip8vm_engine::{
    EngineConfig, Interpreter, InterpreterError, MemoryError, StepOutcome, MEMORY_SIZE,
    RESET_VECTOR, STACK_DEPTH,
};
use common::{boot, boot_with, image, run};

#[test]
fn test_load_capacity_boundary() {
    let capacity = MEMORY_SIZE - RESET_VECTOR as usize;
    let mut interpreter = Interpreter::with_seed(EngineConfig::default(), 0);

    assert!(interpreter.load(&vec![0; capacity]).is_ok());
    assert_eq!(
        interpreter.load(&vec![0; capacity + 1]),
        Err(MemoryError::ImageTooLarge {
            len: capacity + 1,
            capacity
        })
    );
}

#[test]
fn test_reset_zeroes_machine_state() {
    // Touch every piece of state, then reset.
    let mut interpreter = boot(&[
        0x6AFF, // LD VA, 0xFF
        0xA20E, // LD I, 0x20E
        0xFA15, // LD DT, VA
        0xFA18, // LD ST, VA
        0x220C, // CALL 0x20C
        0x0000,
        0xD001, // 0x20C: DRW V0, V0, 1
        0xFF00, // sprite: 0xFF
    ]);
    run(&mut interpreter, 6);
    assert_ne!(interpreter.registers().sp, 0);
    assert!(interpreter.snapshot_display().lit_count() > 0);
    interpreter.mark_presented();

    interpreter.reset();
    let registers = interpreter.registers();
    assert_eq!(registers.pc, RESET_VECTOR);
    assert_eq!(registers.sp, 0);
    assert_eq!(registers.i, 0);
    assert_eq!(registers.v, [0; 16]);
    assert_eq!(interpreter.delay_timer(), 0);
    assert_eq!(interpreter.sound_timer(), 0);
    assert_eq!(interpreter.stack(), &[0; STACK_DEPTH]);
    let snapshot = interpreter.snapshot_display();
    assert_eq!(snapshot.lit_count(), 0);
    assert!(snapshot.is_dirty());

    // The program survives a reset.
    assert_eq!(interpreter.memory()[RESET_VECTOR as usize], 0x6A);
}

#[test]
fn test_add_immediate_leaves_flag() {
    let mut interpreter = boot(&[0x6014, 0x7006]);
    run(&mut interpreter, 2);
    assert_eq!(interpreter.registers().v[0], 0x1A);
    assert_eq!(interpreter.registers().v[0xF], 0);
}

#[test]
fn test_add_registers_sets_carry() {
    let mut interpreter = boot(&[0x60FF, 0x6102, 0x8014]);
    run(&mut interpreter, 3);
    assert_eq!(interpreter.registers().v[0], 0x01);
    assert_eq!(interpreter.registers().v[0xF], 1);

    let mut interpreter = boot(&[0x6001, 0x6102, 0x8014]);
    run(&mut interpreter, 3);
    assert_eq!(interpreter.registers().v[0], 0x03);
    assert_eq!(interpreter.registers().v[0xF], 0);
}

#[test]
fn test_sprite_xor_and_collision() {
    let mut interpreter = boot(&[
        0x00E0, // CLS
        0xA20A, // LD I, 0x20A
        0xD001, // DRW V0, V0, 1
        0xD001, // DRW V0, V0, 1
        0x1208, // JP 0x208
        0x8000, // sprite: 0x80
    ]);
    run(&mut interpreter, 3);
    assert_eq!(interpreter.snapshot_display().pixels()[0], 1);
    assert_eq!(interpreter.registers().v[0xF], 0);

    run(&mut interpreter, 1);
    assert_eq!(interpreter.snapshot_display().pixels()[0], 0);
    assert_eq!(interpreter.registers().v[0xF], 1);
}

#[test]
fn test_delay_timer_stops_at_zero() {
    let mut interpreter = boot(&[0x6001, 0xF015]);
    run(&mut interpreter, 2);
    assert_eq!(interpreter.delay_timer(), 1);

    interpreter.tick_timers();
    assert_eq!(interpreter.delay_timer(), 0);
    interpreter.tick_timers();
    assert_eq!(interpreter.delay_timer(), 0);
}

#[test]
fn test_wait_for_key_rewinds_until_held() {
    let mut interpreter = boot(&[0xF30A, 0x6401]);
    for _ in 0..10 {
        assert_eq!(interpreter.step().unwrap(), StepOutcome::WaitingForKey);
        assert_eq!(interpreter.registers().pc, RESET_VECTOR);
    }

    interpreter.set_key_held(0x9, true);
    assert_eq!(interpreter.step().unwrap(), StepOutcome::Executed);
    assert_eq!(interpreter.registers().v[3], 0x9);
    assert_eq!(interpreter.registers().pc, RESET_VECTOR + 2);

    run(&mut interpreter, 1);
    assert_eq!(interpreter.registers().v[4], 1);
    assert_eq!(interpreter.stats().key_wait_spins(), 10);

    interpreter.reset();
    assert!(interpreter.is_key_held(0x9));
    assert!(!interpreter.is_key_held(0x3));
}

#[test]
fn test_nested_calls_past_stack_depth() {
    // CALL 0x200 forever.
    let mut interpreter = boot(&[0x2200]);
    run(&mut interpreter, 2 * STACK_DEPTH + 1);
    assert_eq!(interpreter.registers().pc, RESET_VECTOR);

    let mut interpreter = boot_with(EngineConfig::default().with_strict(true), &[0x2200]);
    run(&mut interpreter, STACK_DEPTH);
    assert_eq!(
        interpreter.step(),
        Err(InterpreterError::Memory(MemoryError::StackOverflow(
            STACK_DEPTH as u16
        )))
    );
    assert_eq!(interpreter.registers().pc, RESET_VECTOR);
    assert_eq!(interpreter.registers().sp, STACK_DEPTH as u16);
}

#[test]
fn test_call_then_return_resumes_after_call_site() {
    let mut interpreter = boot(&[
        0x6000, // 0x200
        0x2208, // 0x202: CALL 0x208
        0x6101, // 0x204
        0x1206, // 0x206: JP 0x206
        0x00EE, // 0x208: RET
    ]);
    run(&mut interpreter, 3);
    assert_eq!(interpreter.registers().pc, 0x204);
    assert_eq!(interpreter.registers().sp, 0);
}

#[test]
fn test_tone_follows_sound_timer() {
    let mut interpreter = boot(&[0x6002, 0xF018]);
    assert!(!interpreter.is_tone_active());
    run(&mut interpreter, 2);
    assert!(interpreter.is_tone_active());
    interpreter.tick_timers();
    assert!(interpreter.is_tone_active());
    interpreter.tick_timers();
    assert!(!interpreter.is_tone_active());
}

#[test]
fn test_reload_replaces_program() {
    let mut interpreter = boot(&[0x6011]);
    run(&mut interpreter, 1);

    interpreter.load(&image(&[0x6122])).unwrap();
    assert_eq!(interpreter.registers().v[0], 0);
    run(&mut interpreter, 1);
    assert_eq!(interpreter.registers().v[1], 0x22);
}
