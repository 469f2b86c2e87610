use std::path::Path;

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, trace};

use super::{InterpreterError, LoadError};
use crate::{
    config::EngineConfig,
    display::{DisplaySnapshot, Framebuffer},
    instruction::Instruction,
    keypad::Keypad,
    memory::{CallStack, Memory, MemoryError, RESET_VECTOR, STACK_DEPTH},
    stats::ExecutionStats,
    timers::Timers,
};

/// Index of the carry/borrow/collision flag register.
pub(crate) const FLAG: usize = 0xF;

/// The register file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    pub pc: u16,
    /// Index into the call stack of the next free slot.
    pub sp: u16,
    pub i: u16,
    /// General purpose registers; `v[0xF]` doubles as the flag register.
    pub v: [u8; 16],
}

impl Default for Registers {
    fn default() -> Self {
        Self {
            pc: RESET_VECTOR,
            sp: 0,
            i: 0,
            v: [0; 16],
        }
    }
}

/// What a call to [`Interpreter::step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Nothing is loaded or execution is paused.
    Idle,
    Executed,
    /// `Fx0A` found no key held and will be re-issued on the next step.
    WaitingForKey,
}

/// The execution engine.
///
/// The caller owns the cadence: it calls [`step`](Self::step) at its chosen
/// instruction rate and [`tick_timers`](Self::tick_timers) at 60 Hz, feeds key
/// state with [`set_key_held`](Self::set_key_held) and pulls the framebuffer
/// with [`snapshot_display`](Self::snapshot_display).
#[derive(Debug)]
pub struct Interpreter {
    pub(crate) config: EngineConfig,
    pub(crate) memory: Memory,
    pub(crate) stack: CallStack,
    pub(crate) registers: Registers,
    pub(crate) display: Framebuffer,
    pub(crate) timers: Timers,
    pub(crate) keypad: Keypad,
    pub(crate) stats: ExecutionStats,
    pub(crate) waiting_for_key: bool,
    rng: StdRng,
    loaded: bool,
    paused: bool,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Interpreter {
    /// Creates an engine whose random source is seeded from the OS.
    pub fn new(config: EngineConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Creates an engine with a reproducible random source.
    pub fn with_seed(config: EngineConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: EngineConfig, rng: StdRng) -> Self {
        Self {
            config,
            memory: Memory::new(config.strict),
            stack: CallStack::new(config.strict),
            registers: Registers::default(),
            display: Framebuffer::default(),
            timers: Timers::default(),
            keypad: Keypad::default(),
            stats: ExecutionStats::default(),
            waiting_for_key: false,
            rng,
            loaded: false,
            paused: false,
        }
    }

    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Copies `image` to the reset vector and resets the machine.
    ///
    /// Fails with [`MemoryError::ImageTooLarge`] if the image does not fit, in
    /// which case the engine is left exactly as it was.
    pub fn load(&mut self, image: &[u8]) -> Result<(), MemoryError> {
        self.memory.load_image(image)?;
        self.loaded = true;
        debug!(len = image.len(), "loaded program image");
        self.reset();
        Ok(())
    }

    /// Reads a program image from `path` and [`load`](Self::load)s it.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let path = path.as_ref();
        let image = std::fs::read(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.load(&image)?;
        Ok(())
    }

    /// Zeroes registers, stack, timers and framebuffer and points PC at the
    /// reset vector. The loaded program is kept and execution resumes.
    pub fn reset(&mut self) {
        self.registers = Registers::default();
        self.stack.clear();
        self.display.clear();
        self.timers = Timers::default();
        self.waiting_for_key = false;
        self.paused = false;
        debug!("reset");
    }

    /// Erases the address space, glyph table included, and resets. Stepping
    /// does nothing until a new image is loaded.
    pub fn stop(&mut self) {
        self.memory.clear();
        self.loaded = false;
        self.stats = ExecutionStats::default();
        self.reset();
        debug!("stopped");
    }

    pub fn pause(&mut self) {
        self.paused = true;
        debug!("paused");
    }

    pub fn resume(&mut self) {
        self.paused = false;
        debug!("resumed");
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    pub const fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Runs one fetch-decode-dispatch cycle.
    ///
    /// When strict mode rejects an instruction, PC is left on the faulting
    /// instruction.
    pub fn step(&mut self) -> Result<StepOutcome, InterpreterError> {
        if !self.loaded || self.paused {
            return Ok(StepOutcome::Idle);
        }

        let pc = self.registers.pc;
        self.waiting_for_key = false;

        let result = self.fetch().and_then(|instruction| {
            instruction.opcode.generate_event(self, instruction)?;
            Ok(instruction.opcode)
        });
        match result {
            Ok(opcode) => self.stats.record(opcode),
            Err(err) => {
                self.registers.pc = pc;
                return Err(err);
            }
        }

        if self.waiting_for_key {
            self.stats.record_key_wait();
            Ok(StepOutcome::WaitingForKey)
        } else {
            Ok(StepOutcome::Executed)
        }
    }

    /// Reads the word at PC and advances PC past it.
    fn fetch(&mut self) -> Result<Instruction, InterpreterError> {
        let word = self.memory.read_word(self.registers.pc)?;
        self.registers.pc = self.registers.pc.wrapping_add(2);
        Ok(Instruction::decode(word))
    }

    /// One 60 Hz timer period.
    pub fn tick_timers(&mut self) {
        self.timers.tick();
    }

    /// Records whether logical key `key` (low nibble) is held.
    pub fn set_key_held(&mut self, key: u8, held: bool) {
        trace!(key, held, "key state");
        self.keypad.set(key, held);
    }

    pub fn is_key_held(&self, key: u8) -> bool {
        self.keypad.is_held(key)
    }

    pub fn snapshot_display(&self) -> DisplaySnapshot {
        self.display.snapshot()
    }

    /// Acknowledges the current framebuffer contents; the dirty flag stays
    /// clear until the next clear or draw.
    pub fn mark_presented(&mut self) {
        self.display.mark_presented();
    }

    /// True while the sound timer is non-zero.
    pub const fn is_tone_active(&self) -> bool {
        self.timers.is_tone_active()
    }

    pub const fn registers(&self) -> &Registers {
        &self.registers
    }

    /// The whole address space, glyph table included.
    pub fn memory(&self) -> &[u8] {
        self.memory.as_slice()
    }

    pub fn stack(&self) -> &[u16; STACK_DEPTH] {
        self.stack.entries()
    }

    pub const fn delay_timer(&self) -> u8 {
        self.timers.delay
    }

    pub const fn sound_timer(&self) -> u8 {
        self.timers.sound
    }

    pub const fn stats(&self) -> &ExecutionStats {
        &self.stats
    }

    pub(crate) fn reg(&self, index: u8) -> u8 {
        self.registers.v[index as usize]
    }

    pub(crate) fn set_reg(&mut self, index: u8, value: u8) {
        self.registers.v[index as usize] = value;
    }

    pub(crate) fn set_flag(&mut self, flag: bool) {
        self.registers.v[FLAG] = flag as u8;
    }

    /// Skips the next instruction when `cond` holds.
    pub(crate) fn skip_if(&mut self, cond: bool) {
        if cond {
            self.registers.pc = self.registers.pc.wrapping_add(2);
        }
    }

    pub(crate) fn jump_to(&mut self, target: u16) {
        self.registers.pc = target;
    }

    pub(crate) fn random_byte(&mut self) -> u8 {
        self.rng.random()
    }

    /// Policy for unmatched sub-cases: a no-op, or an error in strict mode.
    pub(crate) fn ignore(&mut self, instruction: Instruction) -> Result<(), InterpreterError> {
        if self.config.strict {
            return Err(InterpreterError::UnknownInstruction(instruction.word));
        }
        trace!(word = %format!("0x{:04x}", instruction.word), "ignoring unknown instruction");
        self.stats.record_ignored();
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn registers_mut(&mut self) -> &mut Registers {
        &mut self.registers
    }
}
