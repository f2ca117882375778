#![deny(unsafe_code)]
//! CLI binary for the silhouette particle engine.
//!
//! Subcommands:
//! - `render <engine>` — run N ticks with scheduled spawns, write a PNG
//! - `replay <scene.json>` — re-run a saved scene file, write a PNG
//! - `list` — print available engines

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use glam::DVec2;
use silhouette_core::scene::{Scene, SpawnEvent};
use silhouette_core::Engine;
use silhouette_engines::EngineKind;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "silhouette", about = "Silhouette particle engine CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run an engine for N ticks and write a PNG of the final frame.
    Render {
        /// Engine name (e.g. "heart").
        engine: String,

        /// Viewport width in pixels.
        #[arg(short = 'W', long, default_value_t = 800)]
        width: usize,

        /// Viewport height in pixels.
        #[arg(short = 'H', long, default_value_t = 600)]
        height: usize,

        /// Number of simulation ticks.
        #[arg(short, long, default_value_t = 240)]
        steps: usize,

        /// PRNG seed for deterministic output.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Projectile spawn as "X,Y" or "X,Y@TICK" (default tick 0). Repeatable.
        #[arg(long = "spawn", value_name = "X,Y[@TICK]")]
        spawns: Vec<String>,

        /// Output file path.
        #[arg(short, long, default_value = "frame.png")]
        output: PathBuf,

        /// Engine parameters as a JSON string.
        #[arg(long, default_value = "{}")]
        params: String,
    },
    /// Re-run a saved scene file and write a PNG of the final frame.
    Replay {
        /// Path to a scene JSON file.
        scene: PathBuf,

        /// Output file path.
        #[arg(short, long, default_value = "frame.png")]
        output: PathBuf,
    },
    /// List available engines.
    List,
}

/// Parses a spawn spec of the form `X,Y` or `X,Y@TICK`.
fn parse_spawn(spec: &str) -> Result<SpawnEvent, CliError> {
    let bad = || CliError::Input(format!("invalid spawn spec '{spec}', expected X,Y[@TICK]"));
    let (coords, tick) = match spec.split_once('@') {
        Some((coords, tick)) => (coords, tick.parse::<usize>().map_err(|_| bad())?),
        None => (spec, 0),
    };
    let (x, y) = coords.split_once(',').ok_or_else(|| bad())?;
    Ok(SpawnEvent {
        tick,
        x: x.trim().parse().map_err(|_| bad())?,
        y: y.trim().parse().map_err(|_| bad())?,
    })
}

/// Builds the scene's engine and runs its full tick loop, firing each spawn
/// event immediately before its tick.
fn run_scene(scene: &Scene) -> Result<EngineKind, CliError> {
    let mut engine = EngineKind::from_name(
        &scene.engine,
        scene.width,
        scene.height,
        scene.seed,
        &scene.params,
    )?;
    for tick in 0..scene.steps {
        for event in scene.spawns.iter().filter(|e| e.tick == tick) {
            engine.spawn(DVec2::new(event.x, event.y));
        }
        engine.step()?;
    }
    Ok(engine)
}

/// Runs a scene to completion, writes the final frame, and prints a summary.
fn finish(scene: &Scene, output: &Path, json: bool) -> Result<(), CliError> {
    scene
        .validate()
        .map_err(|e| CliError::Input(e.to_string()))?;
    let engine = run_scene(scene)?;
    silhouette_engines::snapshot::write_png(&engine, output)?;

    if json {
        let info = serde_json::json!({
            "engine": scene.engine,
            "width": scene.width,
            "height": scene.height,
            "steps": scene.steps,
            "seed": scene.seed,
            "spawns": scene.spawns.len(),
            "output": output.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        eprintln!(
            "rendered {} ({}x{}, {} ticks, {} spawns, seed {}) -> {}",
            scene.engine,
            scene.width,
            scene.height,
            scene.steps,
            scene.spawns.len(),
            scene.seed,
            output.display()
        );
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let engines = EngineKind::list_engines();
            if cli.json {
                let info = serde_json::json!({ "engines": engines });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Engines:");
                for name in engines {
                    println!("  {name}");
                }
            }
            Ok(())
        }
        Command::Render {
            engine,
            width,
            height,
            steps,
            seed,
            spawns,
            output,
            params,
        } => {
            let params: serde_json::Value = serde_json::from_str(&params)
                .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
            let spawns = spawns
                .iter()
                .map(|s| parse_spawn(s))
                .collect::<Result<Vec<_>, _>>()?;

            let scene = Scene {
                engine,
                width,
                height,
                params,
                seed,
                steps,
                spawns,
            };
            finish(&scene, &output, cli.json)
        }
        Command::Replay { scene, output } => {
            let text = std::fs::read_to_string(&scene)
                .map_err(|e| CliError::Io(format!("cannot read {}: {e}", scene.display())))?;
            let scene: Scene = serde_json::from_str(&text)?;
            finish(&scene, &output, cli.json)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
