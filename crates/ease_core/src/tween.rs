//! Steppable easing generator
//!
//! A [`Tween`] binds one catalog curve to mutable progress (`time`, `begin`,
//! `change`, `duration`) and hands out one value per [`Tween::next_value`]
//! call, advancing time by one unit each step.
//!
//! ```
//! use ease_core::{Step, Tween};
//!
//! let mut tween = Tween::with_props("easeInCubic", 0.0, 100.0, 120.0, 30.0)?;
//! assert_eq!(tween.next_value()?, Step::Value(100.0));
//! # Ok::<(), ease_core::EasingError>(())
//! ```

use serde_json::Value;
use tracing::{debug, trace};

use crate::easing::Easing;
use crate::error::{EasingError, Result};

/// Number of parameters in a full configuration.
const PROP_COUNT: usize = 4;

/// Time, begin, change and duration of a tween
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenProps {
    /// Current time, advanced by one per step
    pub time: f64,
    /// Value at time zero
    pub begin: f64,
    /// Total change applied over the duration
    pub change: f64,
    /// Number of time units the change is spread over
    pub duration: f64,
}

impl TweenProps {
    pub fn new(time: f64, begin: f64, change: f64, duration: f64) -> Self {
        Self {
            time,
            begin,
            change,
            duration,
        }
    }

    /// Value the tween is heading to (`begin + change`).
    pub fn final_value(&self) -> f64 {
        self.begin + self.change
    }

    /// Strict reconfiguration rule: exactly four arguments.
    pub fn from_slice(args: &[f64]) -> Result<Self> {
        match *args {
            [time, begin, change, duration] => Ok(Self::new(time, begin, change, duration)),
            _ => Err(EasingError::MalformedReconfiguration { got: args.len() }),
        }
    }

    /// Strict reconfiguration rule for dynamic arguments.
    ///
    /// Arity is checked before the values, so a short list of strings still
    /// reports the argument count.
    pub fn from_values(args: &[Value]) -> Result<Self> {
        if args.len() != PROP_COUNT {
            return Err(EasingError::MalformedReconfiguration { got: args.len() });
        }

        let mut numbers = [0.0; PROP_COUNT];
        for (index, (slot, arg)) in numbers.iter_mut().zip(args).enumerate() {
            *slot = arg
                .as_f64()
                .ok_or(EasingError::NonNumericParameter { index })?;
        }
        Self::from_slice(&numbers)
    }

    /// Lenient construction rule: the first four arguments must all be
    /// numbers, otherwise the parameters count as not supplied.
    pub fn from_construction_args(args: &[Value]) -> Option<Self> {
        let [time, begin, change, duration] = args.get(..PROP_COUNT)? else {
            return None;
        };
        Some(Self::new(
            time.as_f64()?,
            begin.as_f64()?,
            change.as_f64()?,
            duration.as_f64()?,
        ))
    }
}

/// Result of one generator step
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    /// Eased value for the step's time
    Value(f64),
    /// Time ran past the duration without landing on the final value
    Completed,
}

impl Step {
    pub fn value(self) -> Option<f64> {
        match self {
            Step::Value(value) => Some(value),
            Step::Completed => None,
        }
    }

    pub fn is_completed(self) -> bool {
        matches!(self, Step::Completed)
    }
}

/// Easing generator over a single catalog curve
///
/// One tween drives one animated value; it is stepped by a single owner and
/// is not meant to be shared.
#[derive(Clone, Debug)]
pub struct Tween {
    curve: Easing,
    overshoot: Option<f64>,
    props: Option<TweenProps>,
}

impl Tween {
    /// Create an unconfigured tween for the named curve.
    pub fn new(name: &str) -> Result<Self> {
        Ok(Self::from_easing(Easing::lookup(name)?))
    }

    /// Create an unconfigured tween for an already resolved curve.
    pub fn from_easing(curve: Easing) -> Self {
        Self {
            curve,
            overshoot: None,
            props: None,
        }
    }

    /// Create a configured tween.
    pub fn with_props(
        name: &str,
        time: f64,
        begin: f64,
        change: f64,
        duration: f64,
    ) -> Result<Self> {
        let mut tween = Self::new(name)?;
        tween.configure(TweenProps::new(time, begin, change, duration));
        Ok(tween)
    }

    /// Create a tween from loosely typed arguments.
    ///
    /// The curve name is resolved first. The arguments only configure the
    /// tween when the first four are all numbers; anything else leaves it
    /// unconfigured without an error.
    pub fn from_args(name: &str, args: &[Value]) -> Result<Self> {
        let mut tween = Self::new(name)?;
        match TweenProps::from_construction_args(args) {
            Some(props) => tween.configure(props),
            None if !args.is_empty() => {
                debug!(curve = %tween.curve, "ignoring non-numeric construction arguments")
            }
            None => {}
        }
        Ok(tween)
    }

    /// Set the overshoot used by the Back curves.
    pub fn with_overshoot(mut self, overshoot: f64) -> Self {
        self.overshoot = Some(overshoot);
        self
    }

    /// Set time, begin, change and duration together, resetting progress.
    pub fn configure(&mut self, props: TweenProps) {
        self.props = Some(props);
        debug!(
            curve = %self.curve,
            time = props.time,
            begin = props.begin,
            change = props.change,
            duration = props.duration,
            "tween configured"
        );
    }

    /// Reconfigure from exactly four numbers.
    ///
    /// Any other argument count fails and leaves the tween untouched.
    pub fn set_prop(&mut self, args: &[f64]) -> Result<()> {
        let props = TweenProps::from_slice(args)?;
        self.configure(props);
        Ok(())
    }

    /// Reconfigure from exactly four loosely typed numbers.
    pub fn set_prop_args(&mut self, args: &[Value]) -> Result<()> {
        let props = TweenProps::from_values(args)?;
        self.configure(props);
        Ok(())
    }

    /// Produce the value for the current time, then advance time by one.
    ///
    /// Once time has moved past the duration, a value that does not equal
    /// `begin + change` is replaced by [`Step::Completed`].
    pub fn next_value(&mut self) -> Result<Step> {
        let props = self
            .props
            .as_mut()
            .ok_or(EasingError::IncompleteConfiguration)?;

        let value = self.curve.evaluate_with(
            props.time,
            props.begin,
            props.change,
            props.duration,
            self.overshoot,
        );
        props.time += 1.0;

        if props.time > props.duration && value != props.final_value() {
            trace!(curve = %self.curve, time = props.time, "tween completed");
            return Ok(Step::Completed);
        }

        trace!(curve = %self.curve, time = props.time - 1.0, value, "tween step");
        Ok(Step::Value(value))
    }

    pub fn curve(&self) -> Easing {
        self.curve
    }

    pub fn overshoot(&self) -> Option<f64> {
        self.overshoot
    }

    pub fn props(&self) -> Option<&TweenProps> {
        self.props.as_ref()
    }

    pub fn is_configured(&self) -> bool {
        self.props.is_some()
    }

    /// `begin + change`, if configured.
    pub fn final_value(&self) -> Option<f64> {
        self.props.as_ref().map(TweenProps::final_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn drain(tween: &mut Tween) -> Vec<f64> {
        let mut values = Vec::new();
        while let Step::Value(value) = tween.next_value().unwrap() {
            values.push(value);
        }
        values
    }

    #[test]
    fn test_unknown_curve() {
        assert_eq!(
            Tween::new("doesNotExist").unwrap_err(),
            EasingError::UnknownCurve("doesNotExist".to_string())
        );
        // name is checked before any parameter
        assert!(matches!(
            Tween::from_args("doesNotExist", &[json!("x")]),
            Err(EasingError::UnknownCurve(_))
        ));
    }

    #[test]
    fn test_step_before_configure_fails() {
        let mut tween = Tween::new("linear").unwrap();
        assert!(!tween.is_configured());
        assert_eq!(
            tween.next_value().unwrap_err(),
            EasingError::IncompleteConfiguration
        );
    }

    #[test]
    fn test_set_prop_then_step() {
        let mut tween = Tween::new("linear").unwrap();
        tween.set_prop(&[0.0, 100.0, 120.0, 30.0]).unwrap();
        assert_eq!(tween.next_value().unwrap(), Step::Value(100.0));
        assert_eq!(tween.final_value(), Some(220.0));
    }

    #[test]
    fn test_set_prop_arity() {
        let mut tween = Tween::new("linear").unwrap();
        assert_eq!(
            tween.set_prop(&[1.0, 2.0, 3.0]).unwrap_err(),
            EasingError::MalformedReconfiguration { got: 3 }
        );
        assert_eq!(
            tween.set_prop(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap_err(),
            EasingError::MalformedReconfiguration { got: 5 }
        );
        assert!(!tween.is_configured());
    }

    #[test]
    fn test_failed_set_prop_keeps_progress() {
        let mut tween = Tween::with_props("linear", 0.0, 0.0, 10.0, 10.0).unwrap();
        tween.next_value().unwrap();
        assert!(tween.set_prop(&[]).is_err());
        assert_eq!(tween.props().unwrap().time, 1.0);
    }

    #[test]
    fn test_set_prop_args_checks_arity_before_types() {
        let mut tween = Tween::new("linear").unwrap();
        assert_eq!(
            tween
                .set_prop_args(&[json!("a"), json!("b"), json!("c")])
                .unwrap_err(),
            EasingError::MalformedReconfiguration { got: 3 }
        );
        assert_eq!(
            tween
                .set_prop_args(&[json!(0), json!(1), json!(null), json!(3)])
                .unwrap_err(),
            EasingError::NonNumericParameter { index: 2 }
        );
        tween
            .set_prop_args(&[json!(0), json!(100), json!(120), json!(30)])
            .unwrap();
        assert_eq!(tween.next_value().unwrap(), Step::Value(100.0));
    }

    #[test]
    fn test_lenient_construction_args() {
        let tween = Tween::from_args("linear", &[json!(0), json!(100), json!("120"), json!(30)])
            .unwrap();
        assert!(!tween.is_configured());

        let tween = Tween::from_args("linear", &[json!(0), json!(100), json!(120)]).unwrap();
        assert!(!tween.is_configured());

        let tween = Tween::from_args("linear", &[]).unwrap();
        assert!(!tween.is_configured());

        let mut tween =
            Tween::from_args("linear", &[json!(0), json!(100), json!(120), json!(30)]).unwrap();
        assert_eq!(tween.next_value().unwrap(), Step::Value(100.0));

        // trailing arguments are ignored
        let tween = Tween::from_args(
            "linear",
            &[json!(0), json!(100), json!(120), json!(30), json!("extra")],
        )
        .unwrap();
        assert_eq!(tween.final_value(), Some(220.0));
    }

    #[test]
    fn test_linear_runs_through_final_value() {
        let mut tween = Tween::with_props("linear", 0.0, 100.0, 120.0, 30.0).unwrap();
        let values = drain(&mut tween);

        // t = 0..=30; the value at t = 30 lands exactly on 220 and is kept
        assert_eq!(values.len(), 31);
        assert_eq!(values[0], 100.0);
        assert_eq!(values[30], 220.0);
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_exhausted_tween_keeps_completing() {
        let mut tween = Tween::with_props("linear", 0.0, 0.0, 1.0, 2.0).unwrap();
        drain(&mut tween);
        for _ in 0..3 {
            assert!(tween.next_value().unwrap().is_completed());
        }
    }

    #[test]
    fn test_expo_completes_on_inexact_end() {
        // easeOutExpo never reaches begin + change, so the step at t = d completes
        let mut tween = Tween::with_props("easeOutExpo", 0.0, 100.0, 120.0, 30.0).unwrap();
        assert_eq!(drain(&mut tween).len(), 30);
    }

    #[test]
    fn test_reconfigure_resets_progress() {
        let mut tween = Tween::with_props("easeInCubic", 0.0, 100.0, 120.0, 30.0).unwrap();
        for _ in 0..10 {
            tween.next_value().unwrap();
        }
        tween.set_prop(&[0.0, 0.0, 10.0, 5.0]).unwrap();
        assert_eq!(tween.next_value().unwrap(), Step::Value(0.0));
        assert_eq!(tween.final_value(), Some(10.0));
    }

    #[test]
    fn test_overshoot_reaches_back_curves() {
        let mut plain = Tween::with_props("easeInBack", 0.0, 0.0, 100.0, 10.0).unwrap();
        let mut strong = Tween::with_props("easeInBack", 0.0, 0.0, 100.0, 10.0)
            .unwrap()
            .with_overshoot(4.0);
        plain.next_value().unwrap();
        strong.next_value().unwrap();
        let plain = plain.next_value().unwrap().value().unwrap();
        let strong = strong.next_value().unwrap().value().unwrap();
        assert!(strong < plain);
    }

    #[test]
    fn test_final_value_follows_props() {
        let mut tween = Tween::new("easeOutQuad").unwrap();
        assert_eq!(tween.final_value(), None);

        tween.configure(TweenProps::new(0.0, -20.0, 5.0, 10.0));
        assert_eq!(tween.final_value(), Some(-15.0));

        tween.set_prop(&[3.0, 1.0, 2.0, 4.0]).unwrap();
        assert_eq!(tween.final_value(), Some(3.0));
        assert_eq!(tween.props().map(TweenProps::final_value), tween.final_value());
    }

    #[test]
    fn test_step_helpers() {
        assert_eq!(Step::Value(0.0).value(), Some(0.0));
        assert!(!Step::Value(0.0).is_completed());
        assert_eq!(Step::Completed.value(), None);
        assert!(Step::Completed.is_completed());
    }
}
