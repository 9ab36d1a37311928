//! `clockart` command-line driver.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Duration;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use clockart::animation::{
    progress, run_transition, FrameQueue, SharedScheduler, TransitionRequest,
    TransitionStrategy,
};
use clockart::display::{ClockDisplay, ClockTime, SimulatedClock, SLOT_COUNT};
use clockart::glyph::DigitAngles;
use clockart::options::Options;
use clockart::util::frame_timing::{frame_interval, FrameTiming};
use serde::Serialize;
use web_time::Instant;

#[derive(Parser, Debug)]
#[command(name = "clockart", version, about = "Clock-art digit transitions")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every frame of one digit transition as JSON lines.
    Trace(TraceArgs),
    /// Run a live HH:MM display, printing frames while digits animate.
    Run(RunArgs),
    /// Dump the effective glyph table as JSON.
    Glyphs(GlyphsArgs),
    /// Print the options JSON Schema.
    Schema,
}

#[derive(Parser, Debug)]
struct TraceArgs {
    /// Starting digit.
    #[arg(long)]
    from: char,

    /// Target digit.
    #[arg(long)]
    to: char,

    /// Transition strategy (overrides the options file).
    #[arg(long)]
    strategy: Option<TransitionStrategy>,

    /// Transition length in milliseconds (overrides the options file).
    #[arg(long)]
    duration_ms: Option<u64>,

    /// Simulated frame rate (overrides the options file).
    #[arg(long)]
    fps: Option<u32>,

    /// Options TOML file.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Options TOML file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start time as HH:MM or HH:MM:SS (default: local time).
    #[arg(long)]
    time: Option<ClockTime>,

    /// Simulated seconds per real second, 1-60 (overrides the options file).
    #[arg(long)]
    speed: Option<u32>,

    /// Stop after this many real seconds (default: run until killed).
    #[arg(long)]
    seconds: Option<u64>,
}

#[derive(Parser, Debug)]
struct GlyphsArgs {
    /// Options TOML file whose overrides are applied.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Serialize)]
struct TraceFrame<'a> {
    frame: usize,
    t: f32,
    clocks: &'a DigitAngles,
}

#[derive(Serialize)]
struct DisplayFrame<'a> {
    time: String,
    digits: String,
    slots: &'a [DigitAngles; SLOT_COUNT],
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Trace(args) => cmd_trace(&args),
        Command::Run(args) => cmd_run(&args),
        Command::Glyphs(args) => cmd_glyphs(&args),
        Command::Schema => cmd_schema(),
    }
}

fn load_options(path: Option<&Path>) -> anyhow::Result<Options> {
    match path {
        Some(path) => Options::load(path)
            .with_context(|| format!("load options '{}'", path.display())),
        None => Ok(Options::default()),
    }
}

/// Runs the transition against a virtual frame clock, so output depends only
/// on the arguments.
fn cmd_trace(args: &TraceArgs) -> anyhow::Result<()> {
    let options = load_options(args.config.as_deref())?;
    let glyphs = options.glyph_table()?;
    let strategy = args.strategy.unwrap_or(options.animation.strategy);
    let duration = args
        .duration_ms
        .map_or_else(|| options.animation.duration(), Duration::from_millis);
    let fps = args.fps.unwrap_or(options.clock.target_fps).max(1);
    let interval = frame_interval(fps);

    let from = glyphs.get(args.from)?;
    let to = glyphs.get(args.to)?;

    let queue = Rc::new(FrameQueue::new());
    let scheduler: SharedScheduler = queue.clone();
    let poses = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&poses);
    let request = TransitionRequest::new(from, to, strategy, duration)
        .on_frame(move |pose| sink.borrow_mut().push(*pose));
    let _handle = run_transition(&scheduler, request);

    let start = Instant::now();
    let mut elapsed = Duration::ZERO;
    let mut stdout = io::stdout().lock();
    let mut frame = 0;
    while !queue.is_idle() {
        let _ = queue.run_frame(start + elapsed);
        for pose in poses.borrow_mut().drain(..) {
            let line = TraceFrame {
                frame,
                t: progress(elapsed, duration),
                clocks: &pose,
            };
            serde_json::to_writer(&mut stdout, &line)?;
            writeln!(stdout)?;
            frame += 1;
        }
        elapsed += interval;
    }
    log::info!(
        "{} -> {} with {strategy}: {frame} frames at {fps} fps",
        args.from,
        args.to
    );
    Ok(())
}

fn cmd_run(args: &RunArgs) -> anyhow::Result<()> {
    let options = load_options(args.config.as_deref())?;
    let glyphs = options.glyph_table()?;
    let start_time = args.time.unwrap_or_else(ClockTime::now);
    let speed = args.speed.unwrap_or(options.clock.speed);
    let limit = args.seconds.map(Duration::from_secs);

    let queue = Rc::new(FrameQueue::new());
    let scheduler: SharedScheduler = queue.clone();
    let mut display = ClockDisplay::new(
        &scheduler,
        glyphs,
        start_time,
        options.animation.strategy,
        options.animation.duration(),
    )?;
    let mut clock = SimulatedClock::new(start_time, speed);
    let mut timing = FrameTiming::new(options.clock.target_fps);
    log::info!(
        "running from {start_time} at {}x, {} fps target",
        clock.speed(),
        timing.target_fps()
    );

    let mut stdout = io::stdout().lock();
    let started = Instant::now();
    let mut last = started;
    loop {
        let now = Instant::now();
        if limit.is_some_and(|limit| now.duration_since(started) >= limit) {
            break;
        }

        if clock.advance(now.duration_since(last)) > 0 {
            let _ = display.show_time(clock.time())?;
        }
        last = now;

        let painted = queue.run_frame(now) > 0;
        if painted {
            let snapshot = display.snapshot();
            let line = DisplayFrame {
                time: clock.time().to_string(),
                digits: display.digits().iter().collect(),
                slots: &snapshot,
            };
            serde_json::to_writer(&mut stdout, &line)?;
            writeln!(stdout)?;
        }
        timing.end_frame(now);

        std::thread::sleep(timing.time_until_next_frame(Instant::now()));
    }
    stdout.flush()?;
    log::info!("stopped at {} ({:.1} fps)", clock.time(), timing.fps());
    Ok(())
}

fn cmd_glyphs(args: &GlyphsArgs) -> anyhow::Result<()> {
    let options = load_options(args.config.as_deref())?;
    let table = options.glyph_table()?;

    let mut glyphs: BTreeMap<String, DigitAngles> = table
        .entries()
        .map(|(digit, pose)| (digit.to_string(), pose))
        .collect();
    let _ = glyphs.insert("neutral".to_owned(), table.neutral());

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &glyphs)?;
    writeln!(stdout)?;
    Ok(())
}

fn cmd_schema() -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &Options::json_schema())?;
    writeln!(stdout)?;
    Ok(())
}
