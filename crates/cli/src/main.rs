//! Demo and comparison harness for the closest-pair solvers.
//!
//! This layer only generates inputs, times the library calls, and formats
//! results as JSON; it never post-processes solver output.

use std::time::Instant;

use anyhow::{ensure, Result};
use clap::{Parser, Subcommand};
use closest_pair::prelude::*;
use serde::Serialize;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Closest-pair demo and comparison runner")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve one seeded random cloud with the divide & conquer solver
    Solve {
        #[arg(long, default_value_t = 1000)]
        count: usize,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Sample tight clusters instead of a uniform cloud
        #[arg(long, default_value_t = false)]
        clustered: bool,
    },
    /// Run both solvers on the same cloud and report timings
    Compare {
        #[arg(long, default_value_t = 1000)]
        count: usize,
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve {
            count,
            seed,
            clustered,
        } => solve(count, seed, clustered),
        Action::Compare { count, seed } => compare(count, seed),
    }
}

#[derive(Serialize)]
struct PairSummary {
    distance: f64,
    a: [f64; 2],
    b: [f64; 2],
}

impl From<ClosestPair> for PairSummary {
    fn from(pair: ClosestPair) -> Self {
        Self {
            distance: pair.dist,
            a: [pair.a.x, pair.a.y],
            b: [pair.b.x, pair.b.y],
        }
    }
}

fn draw(count: usize, seed: u64, clustered: bool) -> Vec<Point> {
    let tok = ReplayToken { seed, index: 0 };
    if clustered {
        draw_clustered(count, 8, 0.05, Bounds2::default(), tok)
    } else {
        draw_cloud(count, Bounds2::default(), tok)
    }
}

fn solve(count: usize, seed: u64, clustered: bool) -> Result<()> {
    tracing::info!(count, seed, clustered, "solve");
    let points = draw(count, seed, clustered);

    let start = Instant::now();
    let result = closest_pair(&points)?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;

    let summary = serde_json::json!({
        "params": { "count": count, "seed": seed, "clustered": clustered },
        "elapsed_ms": elapsed_ms,
        "result": result.map(PairSummary::from),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn compare(count: usize, seed: u64) -> Result<()> {
    tracing::info!(count, seed, "compare");
    let points = draw(count, seed, false);

    let start = Instant::now();
    let dc = closest_pair(&points)?;
    let dc_ms = start.elapsed().as_secs_f64() * 1e3;

    let start = Instant::now();
    let bf = brute_force(&points);
    let bf_ms = start.elapsed().as_secs_f64() * 1e3;

    match (&dc, &bf) {
        (Some(d), Some(b)) => ensure!(
            (d.dist - b.dist).abs() <= 1e-9,
            "solver disagreement: {} vs {}",
            d.dist,
            b.dist
        ),
        (None, None) => {}
        _ => anyhow::bail!("solver definedness mismatch"),
    }

    let speedup = if dc_ms > 0.0 { bf_ms / dc_ms } else { f64::INFINITY };
    let summary = serde_json::json!({
        "params": { "count": count, "seed": seed },
        "divide_conquer": { "elapsed_ms": dc_ms, "result": dc.map(PairSummary::from) },
        "brute_force": { "elapsed_ms": bf_ms, "result": bf.map(PairSummary::from) },
        "speedup": speedup,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
