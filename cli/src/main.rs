//! Headless driver: loads a program image, runs it for a fixed number of
//! frames and prints the final framebuffer.

mod scheduler;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chip8vm_engine::{init_logger, EngineConfig, Interpreter, ShiftQuirk, SpriteMode, KEY_COUNT};
use clap::Parser;
use tracing::{info, warn};

use crate::scheduler::FrameScheduler;

#[derive(Parser, Debug)]
#[command(name = "chip8vm", version, about = "Run a CHIP-8 program image headlessly")]
struct Args {
    /// Program image to load at 0x200
    rom: PathBuf,

    /// Instructions executed per second of emulated time
    #[arg(long, default_value_t = 700)]
    ips: u32,

    /// Number of 60 Hz frames to run before exiting
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Seed for the random number instruction
    #[arg(long)]
    seed: Option<u64>,

    /// Fail on stack exhaustion, out-of-range accesses and unknown instructions
    #[arg(long)]
    strict: bool,

    /// Register read by the shift instructions: reference, vx-only or vy-only
    #[arg(long, default_value_t = ShiftQuirk::Reference)]
    shift_quirk: ShiftQuirk,

    /// Sprite pixel placement: linear or wrap
    #[arg(long, default_value_t = SpriteMode::Linear)]
    sprite_mode: SpriteMode,

    /// Hex key (0-f) held for the whole run; may be repeated
    #[arg(long = "key", value_parser = parse_key)]
    keys: Vec<u8>,

    /// Pace frames to wall-clock time
    #[arg(long)]
    realtime: bool,
}

fn parse_key(arg: &str) -> Result<u8, String> {
    let key = u8::from_str_radix(arg.trim_start_matches("0x"), 16)
        .map_err(|err| format!("invalid key {arg:?}: {err}"))?;
    if key as usize >= KEY_COUNT {
        return Err(format!("key {arg:?} is not in 0-f"));
    }
    Ok(key)
}

fn main() -> Result<()> {
    init_logger();
    let args = Args::parse();

    let config = EngineConfig::default()
        .with_strict(args.strict)
        .with_shift_quirk(args.shift_quirk)
        .with_sprite_mode(args.sprite_mode);
    let mut interpreter = match args.seed {
        Some(seed) => Interpreter::with_seed(config, seed),
        None => Interpreter::new(config),
    };
    interpreter
        .load_file(&args.rom)
        .with_context(|| format!("failed to load {}", args.rom.display()))?;
    for &key in &args.keys {
        interpreter.set_key_held(key, true);
    }

    let mut scheduler = FrameScheduler::new(args.ips);
    info!(
        rom = %args.rom.display(),
        steps_per_frame = scheduler.steps_per_frame(),
        frames = args.frames,
        "running"
    );
    let outcome = scheduler.run(&mut interpreter, args.frames, args.realtime);

    println!("{}", interpreter.snapshot_display());
    interpreter.stats().report();

    match outcome {
        Ok(frames) => {
            info!(frames, "finished");
            Ok(())
        }
        Err(err) => {
            let pc = interpreter.registers().pc;
            warn!(%err, pc, "execution halted");
            bail!("execution halted at {pc:#05x}: {err}")
        }
    }
}
