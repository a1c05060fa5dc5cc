//! Ease Core
//!
//! Named easing curves and a steppable easing generator.
//!
//! # Features
//!
//! - **Curve Catalog**: Cubic, Quart, Quint, Sine, Expo, Circ, Quad and Back families plus
//!   generic linear/in/out/in-out curves, resolved by name
//! - **Tween**: Steps a curve one time unit per call and signals completion
//! - **Overshoot**: Tunable overshoot for the Back family

pub mod easing;
pub mod error;
pub mod tween;

pub use easing::{CurveFamily, CurveFn, Easing, DEFAULT_OVERSHOOT};
pub use error::{EasingError, Result};
pub use tween::{Step, Tween, TweenProps};
