//! gridnav demo: solve a small maze and animate an agent along the path.
//!
//! Demonstrates:
//!   1. Building a world from a `WorldConfig`
//!   2. Rendering it as ASCII
//!   3. Running a breadth-first search and reading its metrics
//!   4. Replaying the path with an `Agent`, one frame per step
//!
//! Run with:
//!   cargo run --example demo [-- <delay_ms>]
//!
//! Set `RUST_LOG=debug` to see search events.

use std::thread;
use std::time::Duration;

use gridnav::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const RULE: &str = "============================================================";
const THIN: &str = "------------------------------------------------------------";

// Default pause between animation frames.
const DEFAULT_DELAY_MS: u64 = 500;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let delay = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<u64>())
        .transpose()?
        .unwrap_or(DEFAULT_DELAY_MS);

    println!("{RULE}");
    println!("GRID WORLD NAVIGATION DEMO");
    println!("{RULE}");

    // ─── Build a 5x7 maze ───────────────────────────────────────

    let config = WorldConfig {
        walls: [(1, 1), (1, 2), (1, 3), (2, 3), (3, 3), (3, 1), (2, 5)]
            .into_iter()
            .map(Coord::from)
            .collect(),
        start: Some(Coord::new(0, 0)),
        goal: Some(Coord::new(4, 6)),
        ..WorldConfig::new(5, 7)
    };
    let world = config.build()?;

    println!("\nInitial Grid World:");
    println!("Legend: S=start, G=goal, #=wall, .=empty");
    println!("{THIN}");
    print!("{}", AsciiView::new(&world));

    // ─── Search ─────────────────────────────────────────────────

    println!("\n{RULE}");
    println!("FINDING PATH WITH BFS...");
    println!("{RULE}");

    let mut finder = PathFinder::new(&world);
    let Some(path) = finder.find_world_path() else {
        error!(start = %world.start(), goal = %world.goal(), "no path found");
        return Ok(());
    };
    let metrics = finder.last_metrics();
    info!(
        path_len = path.len(),
        nodes_expanded = metrics.nodes_expanded,
        peak_frontier = metrics.peak_frontier,
        elapsed_us = metrics.elapsed_us,
        "search complete"
    );

    println!("\nPath found!");
    println!("Path length: {} steps", path.len());
    println!("Nodes expanded: {}", finder.nodes_expanded());
    println!("\nPath: {path}");

    println!("\nGrid with Path (*):");
    println!("{THIN}");
    print!("{}", AsciiView::new(&world).with_path(path.as_slice()));

    // ─── Replay with an agent ───────────────────────────────────

    println!("\n{RULE}");
    println!("STEPPING AGENT ALONG PATH...");
    println!("{RULE}");

    let mut agent = Agent::new(&world);
    let directions = path.directions();
    for i in 0..path.len() {
        println!("\nStep {}/{} - Agent at {}", i + 1, path.len(), agent.at());
        println!("{THIN}");
        print!(
            "{}",
            AsciiView::new(&world)
                .with_path(path.as_slice())
                .with_agent(agent.at())
        );

        if let Some(&dir) = directions.get(i) {
            thread::sleep(Duration::from_millis(delay));
            if !agent.step(dir) {
                error!(at = %agent.at(), %dir, "agent could not follow path");
                return Ok(());
            }
        }
    }

    println!("\n{RULE}");
    println!("Agent reached the goal!");
    println!("{RULE}");
    Ok(())
}
