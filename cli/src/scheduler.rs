//! Fixed-rate frame pacing.
//!
//! The engine has no notion of time: a host runs some number of instructions,
//! then advances the timers by one 60 Hz period. [`FrameScheduler`] bundles
//! that into a single frame.

use std::time::{Duration, Instant};

use chip8vm_engine::{Interpreter, InterpreterError, StepOutcome};
use tracing::info;

pub const FRAME_RATE: u32 = 60;

/// What happened during one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameSummary {
    pub executed: u32,
    pub key_waits: u32,
}

#[derive(Debug)]
pub struct FrameScheduler {
    steps_per_frame: u32,
    tone_active: bool,
}

impl FrameScheduler {
    /// A scheduler running `instructions_per_second / 60` steps per frame, and
    /// at least one.
    pub fn new(instructions_per_second: u32) -> Self {
        Self {
            steps_per_frame: (instructions_per_second / FRAME_RATE).max(1),
            tone_active: false,
        }
    }

    pub const fn steps_per_frame(&self) -> u32 {
        self.steps_per_frame
    }

    pub const fn frame_duration() -> Duration {
        Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64)
    }

    /// Steps the interpreter for one frame, then ticks its timers.
    ///
    /// A step error ends the frame early without ticking.
    pub fn run_frame(
        &mut self,
        interpreter: &mut Interpreter,
    ) -> Result<FrameSummary, InterpreterError> {
        let mut summary = FrameSummary::default();
        for _ in 0..self.steps_per_frame {
            match interpreter.step()? {
                StepOutcome::Executed => summary.executed += 1,
                StepOutcome::WaitingForKey => summary.key_waits += 1,
                StepOutcome::Idle => break,
            }
        }
        interpreter.tick_timers();

        let tone_active = interpreter.is_tone_active();
        if tone_active != self.tone_active {
            if tone_active {
                info!("tone on");
            } else {
                info!("tone off");
            }
            self.tone_active = tone_active;
        }

        Ok(summary)
    }

    /// Runs `frames` frames, sleeping between them so that each starts on a
    /// 60 Hz deadline when `realtime` is set.
    pub fn run(
        &mut self,
        interpreter: &mut Interpreter,
        frames: u64,
        realtime: bool,
    ) -> Result<u64, InterpreterError> {
        let mut deadline = Instant::now();
        for frame in 0..frames {
            self.run_frame(interpreter)?;
            if interpreter.snapshot_display().is_dirty() {
                interpreter.mark_presented();
            }
            if interpreter.is_paused() || !interpreter.is_loaded() {
                return Ok(frame + 1);
            }

            if realtime {
                deadline += Self::frame_duration();
                if let Some(remaining) = deadline.checked_duration_since(Instant::now()) {
                    std::thread::sleep(remaining);
                }
            }
        }
        Ok(frames)
    }
}
