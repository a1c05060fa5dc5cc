//! Fixed-cadence animation loop
//!
//! Steps a [`Tween`] once per frame and hands each value to a sink until the
//! tween reports completion.

use std::time::Duration;

use anyhow::{Context, Result};
use ease_core::{EasingError, Step, Tween, TweenProps};
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info};

use crate::config::AnimationConfig;

/// Build the tween described by `config`: `t = start`, `b = begin`,
/// `c = finish - begin`, `d = duration`.
pub fn build_tween(config: &AnimationConfig) -> Result<Tween, EasingError> {
    let mut tween = Tween::new(&config.curve)?;
    if let Some(overshoot) = config.overshoot {
        tween = tween.with_overshoot(overshoot);
    }
    tween.configure(TweenProps::new(
        config.start,
        config.begin,
        config.change(),
        config.duration,
    ));
    Ok(tween)
}

/// Step the tween to completion without waiting between frames.
pub fn collect(config: &AnimationConfig) -> Result<Vec<f64>> {
    let mut tween = build_tween(config)?;
    let mut values = Vec::new();
    while let Step::Value(value) = tween.next_value()? {
        values.push(value);
    }
    Ok(values)
}

/// Run the animation at `config.fps`, returning the number of frames emitted.
pub fn run<F: FnMut(f64)>(config: &AnimationConfig, on_value: F) -> Result<usize> {
    config.validate()?;
    let tween = build_tween(config)?;
    let period = Duration::from_secs_f64(1.0 / f64::from(config.fps));

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("Failed to start animation runtime")?;

    info!(curve = %tween.curve(), fps = config.fps, "starting animation");
    let frames = runtime.block_on(drive(tween, period, on_value))?;
    info!(frames, "animation finished");
    Ok(frames)
}

async fn drive<F: FnMut(f64)>(
    mut tween: Tween,
    period: Duration,
    mut on_value: F,
) -> Result<usize, EasingError> {
    let mut ticker = time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut frames = 0;
    loop {
        ticker.tick().await;
        match tween.next_value()? {
            Step::Value(value) => {
                on_value(value);
                frames += 1;
            }
            Step::Completed => {
                debug!(frames, "tween signalled completion");
                return Ok(frames);
            }
        }
    }
}
