//! Headless frame driver: runs the simulation AI vs AI at a fixed timestep.
//!
//! Stands in for a real windowed host - it supplies delta time, consumes the
//! frame events and render queries, and can stream the fixed-index state
//! vector for external tooling.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use pong_core::snapshot::index;
use pong_core::{Config, Match, ReactiveAi, Side};

#[derive(Parser, Debug)]
#[command(name = "pong_cli", about = "Headless Pong simulation driver")]
struct Args {
    /// Seed for ball serves
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Maximum number of frames to simulate
    #[arg(long, default_value_t = 36_000)]
    frames: u32,

    /// Write a per-frame state trace as JSON lines
    #[arg(long)]
    trace: Option<PathBuf>,
}

/// One trace line: the left side's state vector plus the score
#[derive(serde::Serialize)]
struct TraceFrame {
    frame: u32,
    state: [f32; index::LEN],
    score_left: u8,
    score_right: u8,
}

const DT: f32 = 1.0 / 60.0;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = Config::new();
    let mut game = Match::new(config, args.seed, Box::new(ReactiveAi), Box::new(ReactiveAi));

    let mut trace = match &args.trace {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating trace file {}", path.display()))?;
            Some(BufWriter::new(file))
        }
        None => None,
    };

    log::info!("starting match: seed={} frames={}", args.seed, args.frames);

    let mut frame = 0;
    while frame < args.frames {
        game.update(DT);
        frame += 1;

        let events = game.events();
        if events.left_scored || events.right_scored {
            let score = game.score();
            let side = if events.left_scored { "left" } else { "right" };
            log::info!(
                "frame {}: point for {}, score {}-{}",
                frame,
                side,
                score.left,
                score.right
            );
        }

        if let Some(out) = trace.as_mut() {
            let score = game.score();
            let line = TraceFrame {
                frame,
                state: game.snapshot(Side::Left).to_array(),
                score_left: score.left,
                score_right: score.right,
            };
            serde_json::to_writer(&mut *out, &line).context("writing trace line")?;
            out.write_all(b"\n").context("writing trace line")?;
        }

        if let Some(winner) = game.winner() {
            log::info!(
                "frame {}: {:?} side wins with {} points",
                frame,
                winner,
                game.score().for_side(winner)
            );
            break;
        }
    }

    if let Some(mut out) = trace {
        out.flush().context("flushing trace file")?;
    }

    let score = game.score();
    println!(
        "final score after {} frames: left {} - right {}",
        frame, score.left, score.right
    );
    Ok(())
}
