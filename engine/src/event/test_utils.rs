use crate::{execution::Interpreter, EngineConfig, StepOutcome};

/// Test environment for simplified instruction testing
pub(crate) struct TestEnv {
    pub interpreter: Interpreter,
}

impl TestEnv {
    /// Loads `words` at the reset vector with the default configuration.
    pub fn new(words: &[u16]) -> Self {
        Self::with_config(EngineConfig::default(), words)
    }

    pub fn with_config(config: EngineConfig, words: &[u16]) -> Self {
        let mut interpreter = Interpreter::with_seed(config, 0x5EED);
        let image: Vec<u8> = words.iter().flat_map(|w| w.to_be_bytes()).collect();
        interpreter.load(&image).unwrap();
        Self { interpreter }
    }

    // Helper to run one instruction that must not fail
    pub fn step(&mut self) -> StepOutcome {
        self.interpreter.step().unwrap()
    }

    pub fn steps(&mut self, count: usize) {
        for _ in 0..count {
            self.step();
        }
    }

    pub fn set_v(&mut self, index: usize, value: u8) {
        self.interpreter.registers_mut().v[index] = value;
    }

    pub fn v(&self, index: usize) -> u8 {
        self.interpreter.registers().v[index]
    }

    pub fn set_index(&mut self, value: u16) {
        self.interpreter.registers_mut().i = value;
    }

    pub fn index(&self) -> u16 {
        self.interpreter.registers().i
    }

    pub fn pc(&self) -> u16 {
        self.interpreter.registers().pc
    }

    pub fn mem(&self, addr: usize) -> u8 {
        self.interpreter.memory()[addr]
    }
}
