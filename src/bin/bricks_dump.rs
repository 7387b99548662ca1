//! Scripted, non-interactive run that prints ASCII frames to stdout.
//!
//! Each argument is `<shape index>:<dx>`: spawn that shape, shift it `dx`
//! columns (negative = left; stops early at a wall or locked cells), drop it
//! until it locks, and materialize it. Without arguments a built-in script
//! is played.
//!
//! ```text
//! bricks-dump 3:-2 0:4
//! ```

use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use clap::Parser;

use tui_bricks::core::{Session, Shape};
use tui_bricks::types::{DropOutcome, MoveOutcome, BOARD_HEIGHT, BOARD_WIDTH};
use tui_bricks::{logging, Config};

#[derive(Parser, Debug)]
#[command(name = "bricks-dump", about = "Play a brick script and print ASCII frames")]
struct Args {
    /// Script steps as `<shape index>:<dx>` (default script when omitted)
    #[arg(value_parser = parse_step, allow_hyphen_values = true)]
    steps: Vec<ScriptStep>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ScriptStep {
    shape: Shape,
    dx: i32,
}

fn default_script() -> Vec<ScriptStep> {
    vec![
        ScriptStep {
            shape: Shape::L,
            dx: BOARD_WIDTH as i32,
        },
        ScriptStep {
            shape: Shape::Z,
            dx: -1,
        },
        ScriptStep {
            shape: Shape::Z,
            dx: -2,
        },
    ]
}

fn parse_step(arg: &str) -> Result<ScriptStep> {
    let (idx, dx) = arg
        .split_once(':')
        .with_context(|| format!("expected <shape>:<dx>, got {:?}", arg))?;
    let idx: usize = idx
        .trim()
        .parse()
        .with_context(|| format!("bad shape index in {:?}", arg))?;
    let Some(shape) = Shape::from_index(idx) else {
        bail!("shape index {} out of range 0..=6", idx);
    };
    let dx: i32 = dx
        .trim()
        .parse()
        .with_context(|| format!("bad column offset in {:?}", arg))?;
    Ok(ScriptStep { shape, dx })
}

fn play(session: &mut Session, step: ScriptStep, out: &mut impl Write) -> Result<()> {
    session.spawn(step.shape);
    writeln!(out, "==== spawn {} ({})", step.shape.letter(), step.shape.index())?;
    write!(out, "{}", session)?;

    for _ in 0..step.dx.unsigned_abs() {
        let outcome = if step.dx < 0 {
            session.move_left()
        } else {
            session.move_right()
        };
        if outcome == MoveOutcome::Blocked {
            writeln!(out, "---- shift blocked")?;
            break;
        }
    }

    // More than enough rows to reach the floor from the spawn row.
    for j in 0..BOARD_HEIGHT {
        let outcome = session.drop();
        writeln!(out, "\n===== {} ({:?})", j, outcome)?;
        write!(out, "{}", session)?;
        if outcome == DropOutcome::MustLock {
            let landed = session.materialize();
            writeln!(out, "---- materialized {} cells", landed.len())?;
            break;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_env();
    logging::init(&config)?;

    let script = if args.steps.is_empty() {
        default_script()
    } else {
        args.steps
    };

    let mut session = Session::new(config.fill_mode);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for step in script {
        play(&mut session, step, &mut out)?;
    }
    writeln!(out, "==== final")?;
    write!(out, "{}", session)?;
    Ok(())
}
