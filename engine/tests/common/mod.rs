use chip8vm_engine::{EngineConfig, Interpreter};

/// Assembles big-endian instruction words into a program image.
pub fn image(words: &[u16]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_be_bytes()).collect()
}

/// A seeded interpreter with `words` loaded at the reset vector.
pub fn boot(words: &[u16]) -> Interpreter {
    boot_with(EngineConfig::default(), words)
}

pub fn boot_with(config: EngineConfig, words: &[u16]) -> Interpreter {
    let mut interpreter = Interpreter::with_seed(config, 42);
    interpreter
        .load(&image(words))
        .expect("test program fits in memory");
    interpreter
}

pub fn run(interpreter: &mut Interpreter, steps: usize) {
    for _ in 0..steps {
        interpreter.step().expect("step should not fail");
    }
}
