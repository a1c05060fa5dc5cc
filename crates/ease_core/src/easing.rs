//! Easing curve catalog
//!
//! Every curve takes the elapsed time `t`, the beginning value `b`, the total
//! change `c` and the duration `d`, and returns the animated value at `t`.
//! Time and duration are in whatever unit the caller ticks in (usually frames).
//!
//! Ranges are not validated: `d == 0.0` divides by zero and the resulting
//! infinity or NaN is returned as-is.

use std::f64::consts::PI;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EasingError, Result};

/// Default overshoot for the Back family.
pub const DEFAULT_OVERSHOOT: f64 = 1.70158;

/// Overshoot multiplier applied to each half of `easeInOutBack`.
const IN_OUT_OVERSHOOT_SCALE: f64 = 1.525;

/// Plain curve function: `(t, b, c, d) -> value`
pub type CurveFn = fn(f64, f64, f64, f64) -> f64;

/// Named easing curve
///
/// Serializes as its catalog name (`"easeInCubic"`, `"linear"`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseInQuart,
    EaseOutQuart,
    EaseInOutQuart,
    EaseInQuint,
    EaseOutQuint,
    EaseInOutQuint,
    EaseInSine,
    EaseOutSine,
    EaseInOutSine,
    EaseInExpo,
    EaseOutExpo,
    EaseInOutExpo,
    EaseInCirc,
    EaseOutCirc,
    EaseInOutCirc,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInBack,
    EaseOutBack,
    EaseInOutBack,
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

/// Curve family, used to group the catalog in listings
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CurveFamily {
    Cubic,
    Quart,
    Quint,
    Sine,
    Expo,
    Circ,
    Quad,
    Back,
    /// `linear`, `easeIn`, `easeOut` and `easeInOut`
    Generic,
}

impl CurveFamily {
    pub fn label(self) -> &'static str {
        match self {
            Self::Cubic => "Cubic",
            Self::Quart => "Quart",
            Self::Quint => "Quint",
            Self::Sine => "Sine",
            Self::Expo => "Expo",
            Self::Circ => "Circ",
            Self::Quad => "Quad",
            Self::Back => "Back",
            Self::Generic => "Generic",
        }
    }
}

impl Display for CurveFamily {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Easing {
    /// Full catalog, in declaration order.
    pub fn all() -> &'static [Easing] {
        const CATALOG: [Easing; 28] = [
            Easing::EaseInCubic,
            Easing::EaseOutCubic,
            Easing::EaseInOutCubic,
            Easing::EaseInQuart,
            Easing::EaseOutQuart,
            Easing::EaseInOutQuart,
            Easing::EaseInQuint,
            Easing::EaseOutQuint,
            Easing::EaseInOutQuint,
            Easing::EaseInSine,
            Easing::EaseOutSine,
            Easing::EaseInOutSine,
            Easing::EaseInExpo,
            Easing::EaseOutExpo,
            Easing::EaseInOutExpo,
            Easing::EaseInCirc,
            Easing::EaseOutCirc,
            Easing::EaseInOutCirc,
            Easing::EaseInQuad,
            Easing::EaseOutQuad,
            Easing::EaseInOutQuad,
            Easing::EaseInBack,
            Easing::EaseOutBack,
            Easing::EaseInOutBack,
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
        ];
        &CATALOG
    }

    /// Resolve a curve by its catalog name.
    ///
    /// Names are case-sensitive. An unknown name is an error; there is no
    /// fallback curve.
    pub fn lookup(name: &str) -> Result<Easing> {
        Self::all()
            .iter()
            .copied()
            .find(|easing| easing.name() == name)
            .ok_or_else(|| EasingError::UnknownCurve(name.to_string()))
    }

    /// Stable catalog name.
    pub fn name(self) -> &'static str {
        match self {
            Self::EaseInCubic => "easeInCubic",
            Self::EaseOutCubic => "easeOutCubic",
            Self::EaseInOutCubic => "easeInOutCubic",
            Self::EaseInQuart => "easeInQuart",
            Self::EaseOutQuart => "easeOutQuart",
            Self::EaseInOutQuart => "easeInOutQuart",
            Self::EaseInQuint => "easeInQuint",
            Self::EaseOutQuint => "easeOutQuint",
            Self::EaseInOutQuint => "easeInOutQuint",
            Self::EaseInSine => "easeInSine",
            Self::EaseOutSine => "easeOutSine",
            Self::EaseInOutSine => "easeInOutSine",
            Self::EaseInExpo => "easeInExpo",
            Self::EaseOutExpo => "easeOutExpo",
            Self::EaseInOutExpo => "easeInOutExpo",
            Self::EaseInCirc => "easeInCirc",
            Self::EaseOutCirc => "easeOutCirc",
            Self::EaseInOutCirc => "easeInOutCirc",
            Self::EaseInQuad => "easeInQuad",
            Self::EaseOutQuad => "easeOutQuad",
            Self::EaseInOutQuad => "easeInOutQuad",
            Self::EaseInBack => "easeInBack",
            Self::EaseOutBack => "easeOutBack",
            Self::EaseInOutBack => "easeInOutBack",
            Self::Linear => "linear",
            Self::EaseIn => "easeIn",
            Self::EaseOut => "easeOut",
            Self::EaseInOut => "easeInOut",
        }
    }

    pub fn family(self) -> CurveFamily {
        match self {
            Self::EaseInCubic | Self::EaseOutCubic | Self::EaseInOutCubic => CurveFamily::Cubic,
            Self::EaseInQuart | Self::EaseOutQuart | Self::EaseInOutQuart => CurveFamily::Quart,
            Self::EaseInQuint | Self::EaseOutQuint | Self::EaseInOutQuint => CurveFamily::Quint,
            Self::EaseInSine | Self::EaseOutSine | Self::EaseInOutSine => CurveFamily::Sine,
            Self::EaseInExpo | Self::EaseOutExpo | Self::EaseInOutExpo => CurveFamily::Expo,
            Self::EaseInCirc | Self::EaseOutCirc | Self::EaseInOutCirc => CurveFamily::Circ,
            Self::EaseInQuad | Self::EaseOutQuad | Self::EaseInOutQuad => CurveFamily::Quad,
            Self::EaseInBack | Self::EaseOutBack | Self::EaseInOutBack => CurveFamily::Back,
            Self::Linear | Self::EaseIn | Self::EaseOut | Self::EaseInOut => CurveFamily::Generic,
        }
    }

    /// Whether the curve takes an overshoot parameter.
    pub fn uses_overshoot(self) -> bool {
        self.family() == CurveFamily::Back
    }

    /// Plain function pointer for this curve (Back curves use the default overshoot).
    pub fn curve_fn(self) -> CurveFn {
        match self {
            Self::EaseInCubic => ease_in_cubic,
            Self::EaseOutCubic => ease_out_cubic,
            Self::EaseInOutCubic => ease_in_out_cubic,
            Self::EaseInQuart => ease_in_quart,
            Self::EaseOutQuart => ease_out_quart,
            Self::EaseInOutQuart => ease_in_out_quart,
            Self::EaseInQuint => ease_in_quint,
            Self::EaseOutQuint => ease_out_quint,
            Self::EaseInOutQuint => ease_in_out_quint,
            Self::EaseInSine => ease_in_sine,
            Self::EaseOutSine => ease_out_sine,
            Self::EaseInOutSine => ease_in_out_sine,
            Self::EaseInExpo => ease_in_expo,
            Self::EaseOutExpo => ease_out_expo,
            Self::EaseInOutExpo => ease_in_out_expo,
            Self::EaseInCirc => ease_in_circ,
            Self::EaseOutCirc => ease_out_circ,
            Self::EaseInOutCirc => ease_in_out_circ,
            Self::EaseInQuad => ease_in_quad,
            Self::EaseOutQuad => ease_out_quad,
            Self::EaseInOutQuad => ease_in_out_quad,
            Self::EaseInBack => |t, b, c, d| ease_in_back(t, b, c, d, DEFAULT_OVERSHOOT),
            Self::EaseOutBack => |t, b, c, d| ease_out_back(t, b, c, d, DEFAULT_OVERSHOOT),
            Self::EaseInOutBack => |t, b, c, d| ease_in_out_back(t, b, c, d, DEFAULT_OVERSHOOT),
            Self::Linear => linear,
            Self::EaseIn => ease_in,
            Self::EaseOut => ease_out,
            Self::EaseInOut => ease_in_out,
        }
    }

    /// Evaluate the curve at time `t`.
    #[inline]
    pub fn evaluate(self, t: f64, b: f64, c: f64, d: f64) -> f64 {
        self.evaluate_with(t, b, c, d, None)
    }

    /// Evaluate the curve with an explicit overshoot.
    ///
    /// `overshoot` only affects the Back family and defaults to
    /// [`DEFAULT_OVERSHOOT`].
    pub fn evaluate_with(self, t: f64, b: f64, c: f64, d: f64, overshoot: Option<f64>) -> f64 {
        let s = overshoot.unwrap_or(DEFAULT_OVERSHOOT);
        match self {
            Self::EaseInBack => ease_in_back(t, b, c, d, s),
            Self::EaseOutBack => ease_out_back(t, b, c, d, s),
            Self::EaseInOutBack => ease_in_out_back(t, b, c, d, s),
            other => (other.curve_fn())(t, b, c, d),
        }
    }
}

impl Display for Easing {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Easing {
    type Err = EasingError;

    fn from_str(s: &str) -> Result<Self> {
        Self::lookup(s)
    }
}

// ============================================================================
// Power curves
// ============================================================================

fn ease_in_cubic(t: f64, b: f64, c: f64, d: f64) -> f64 {
    c * (t / d).powi(3) + b
}

fn ease_out_cubic(t: f64, b: f64, c: f64, d: f64) -> f64 {
    c * ((t / d - 1.0).powi(3) + 1.0) + b
}

fn ease_in_out_cubic(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        c / 2.0 * t.powi(3) + b
    } else {
        c / 2.0 * ((t - 2.0).powi(3) + 2.0) + b
    }
}

fn ease_in_quart(t: f64, b: f64, c: f64, d: f64) -> f64 {
    c * (t / d).powi(4) + b
}

fn ease_out_quart(t: f64, b: f64, c: f64, d: f64) -> f64 {
    -c * ((t / d - 1.0).powi(4) - 1.0) + b
}

fn ease_in_out_quart(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        c / 2.0 * t.powi(4) + b
    } else {
        -c / 2.0 * ((t - 2.0).powi(4) - 2.0) + b
    }
}

fn ease_in_quint(t: f64, b: f64, c: f64, d: f64) -> f64 {
    c * (t / d).powi(5) + b
}

fn ease_out_quint(t: f64, b: f64, c: f64, d: f64) -> f64 {
    c * ((t / d - 1.0).powi(5) + 1.0) + b
}

fn ease_in_out_quint(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        c / 2.0 * t.powi(5) + b
    } else {
        c / 2.0 * ((t - 2.0).powi(5) + 2.0) + b
    }
}

fn ease_in_quad(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    c * t * t + b
}

fn ease_out_quad(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    -c * t * (t - 2.0) + b
}

fn ease_in_out_quad(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        c / 2.0 * t * t + b
    } else {
        let t = t - 1.0;
        -c / 2.0 * (t * (t - 2.0) - 1.0) + b
    }
}

// ============================================================================
// Sine
// ============================================================================

fn ease_in_sine(t: f64, b: f64, c: f64, d: f64) -> f64 {
    c * (1.0 - (t / d * (PI / 2.0)).cos()) + b
}

fn ease_out_sine(t: f64, b: f64, c: f64, d: f64) -> f64 {
    c * (t / d * (PI / 2.0)).sin() + b
}

fn ease_in_out_sine(t: f64, b: f64, c: f64, d: f64) -> f64 {
    c / 2.0 * (1.0 - (PI * t / d).cos()) + b
}

// ============================================================================
// Exponential
// ============================================================================
//
// Endpoints are not special-cased: easeInExpo starts at b + c / 1024 and
// easeOutExpo ends at b + c * (1 - 1 / 1024).

fn ease_in_expo(t: f64, b: f64, c: f64, d: f64) -> f64 {
    c * 2f64.powf(10.0 * (t / d - 1.0)) + b
}

fn ease_out_expo(t: f64, b: f64, c: f64, d: f64) -> f64 {
    c * (-(2f64.powf(-10.0 * t / d)) + 1.0) + b
}

fn ease_in_out_expo(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        c / 2.0 * 2f64.powf(10.0 * (t - 1.0)) + b
    } else {
        c / 2.0 * (-(2f64.powf(-10.0 * (t - 1.0))) + 2.0) + b
    }
}

// ============================================================================
// Circular
// ============================================================================

fn ease_in_circ(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    c * (1.0 - (1.0 - t * t).sqrt()) + b
}

fn ease_out_circ(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d - 1.0;
    c * (1.0 - t * t).sqrt() + b
}

fn ease_in_out_circ(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        c / 2.0 * (1.0 - (1.0 - t * t).sqrt()) + b
    } else {
        let t = t - 2.0;
        c / 2.0 * ((1.0 - t * t).sqrt() + 1.0) + b
    }
}

// ============================================================================
// Back (overshoot)
// ============================================================================

fn ease_in_back(t: f64, b: f64, c: f64, d: f64, s: f64) -> f64 {
    let t = t / d;
    c * t * t * ((s + 1.0) * t - s) + b
}

fn ease_out_back(t: f64, b: f64, c: f64, d: f64, s: f64) -> f64 {
    let t = t / d - 1.0;
    c * (t * t * ((s + 1.0) * t + s) + 1.0) + b
}

fn ease_in_out_back(t: f64, b: f64, c: f64, d: f64, s: f64) -> f64 {
    let s = s * IN_OUT_OVERSHOOT_SCALE;
    let t = t / (d / 2.0);
    if t < 1.0 {
        c / 2.0 * (t * t * ((s + 1.0) * t - s)) + b
    } else {
        let t = t - 2.0;
        c / 2.0 * (t * t * ((s + 1.0) * t + s) + 2.0) + b
    }
}

// ============================================================================
// Generic
// ============================================================================

fn linear(t: f64, b: f64, c: f64, d: f64) -> f64 {
    c * t / d + b
}

fn ease_in(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    c * t * t + b
}

fn ease_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    c * (-t * (t - 2.0)) + b
}

fn ease_in_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    if t < 0.5 {
        let t = t * 2.0;
        c * (t * t / 2.0) + b
    } else {
        c * (-2.0 * t * (t - 2.0) - 1.0) + b
    }
}
