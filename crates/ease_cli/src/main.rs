//! Ease CLI - drive easing curves from the command line
//!
//! - `ease list` prints the curve catalog grouped by family
//! - `ease run` steps a curve at a fixed frame rate and prints each value
//! - `ease sample` prints a curve's value at the start, midpoint and end

mod config;
mod driver;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use ease_core::{CurveFamily, Easing, DEFAULT_OVERSHOOT};
use std::path::PathBuf;
use tracing::info;

use crate::config::AnimationConfig;

/// Easing curve evaluator and animation driver
#[derive(Parser, Debug)]
#[command(name = "ease")]
#[command(about = "Evaluate named easing curves and drive them frame by frame")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every curve in the catalog
    List,

    /// Step a curve at a fixed frame rate until it completes
    Run {
        /// Animation file (ease.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        animation: AnimationArgs,

        /// Frames per second
        #[arg(long)]
        fps: Option<u32>,

        /// Overshoot for the Back curves
        #[arg(long)]
        overshoot: Option<f64>,

        /// Print every frame immediately instead of pacing at the frame rate
        #[arg(long)]
        no_wait: bool,
    },

    /// Print a curve's value at t = 0, d/2 and d
    Sample {
        #[command(flatten)]
        animation: AnimationArgs,
    },
}

/// Overrides for the animation parameters
#[derive(Args, Debug, Default)]
struct AnimationArgs {
    /// Curve name, e.g. easeInCubic
    #[arg(long)]
    curve: Option<String>,

    /// Value at the first frame
    #[arg(long, allow_hyphen_values = true)]
    begin: Option<f64>,

    /// Value the animation heads to
    #[arg(long, allow_hyphen_values = true)]
    finish: Option<f64>,

    /// Duration in frames
    #[arg(long)]
    duration: Option<f64>,
}

impl AnimationArgs {
    fn apply(self, config: &mut AnimationConfig) {
        if let Some(curve) = self.curve {
            config.curve = curve;
        }
        if let Some(begin) = self.begin {
            config.begin = begin;
        }
        if let Some(finish) = self.finish {
            config.finish = finish;
        }
        if let Some(duration) = self.duration {
            config.duration = duration;
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::List => list(),
        Command::Run {
            config,
            animation,
            fps,
            overshoot,
            no_wait,
        } => {
            let mut config = match config {
                Some(path) => {
                    info!("Loading animation from {}", path.display());
                    AnimationConfig::load(&path)?
                }
                None => AnimationConfig::default(),
            };
            animation.apply(&mut config);
            if let Some(fps) = fps {
                config.fps = fps;
            }
            if overshoot.is_some() {
                config.overshoot = overshoot;
            }

            if no_wait {
                for value in driver::collect(&config)? {
                    println!("{value}");
                }
            } else {
                driver::run(&config, |value| println!("{value}"))?;
            }
            Ok(())
        }
        Command::Sample { animation } => {
            let mut config = AnimationConfig::default();
            animation.apply(&mut config);
            sample(&config)
        }
    }
}

fn list() -> Result<()> {
    for line in catalog_lines() {
        println!("{line}");
    }
    Ok(())
}

/// Catalog listing grouped by family; Back curves are tagged with their overshoot.
fn catalog_lines() -> Vec<String> {
    let mut lines = Vec::new();
    let mut family: Option<CurveFamily> = None;
    for &easing in Easing::all() {
        if family != Some(easing.family()) {
            family = Some(easing.family());
            lines.push(format!("{}:", easing.family()));
        }
        if easing.uses_overshoot() {
            lines.push(format!("  {easing} (overshoot, default {DEFAULT_OVERSHOOT})"));
        } else {
            lines.push(format!("  {easing}"));
        }
    }
    lines
}

fn sample(config: &AnimationConfig) -> Result<()> {
    let easing = Easing::lookup(&config.curve)?;
    let (b, c, d) = (config.begin, config.change(), config.duration);
    for t in [0.0, d / 2.0, d] {
        let value = easing.evaluate_with(t, b, c, d, config.overshoot);
        println!("{easing} t={t} value={value}");
    }
    Ok(())
}
