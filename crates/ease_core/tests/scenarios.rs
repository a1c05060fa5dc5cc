use ease_core::{Easing, EasingError, Step, Tween};
use serde::Deserialize;

#[test]
fn ease_in_cubic_animation_from_100_to_220() {
    let mut tween = Tween::with_props("easeInCubic", 0.0, 100.0, 120.0, 30.0).unwrap();

    let mut values = Vec::new();
    loop {
        match tween.next_value().unwrap() {
            Step::Value(value) => values.push(value),
            Step::Completed => break,
        }
    }

    assert_eq!(values[0], 100.0);
    assert!((values[15] - 115.0).abs() < 1e-9);
    assert_eq!(*values.last().unwrap(), 220.0);
    assert_eq!(values.len(), 31);
    assert!(tween.next_value().unwrap().is_completed());
}

#[test]
fn configuration_order_matters() {
    let mut tween = Tween::new("linear").unwrap();
    assert_eq!(tween.next_value(), Err(EasingError::IncompleteConfiguration));

    let mut tween = Tween::new("linear").unwrap();
    tween.set_prop(&[0.0, 100.0, 120.0, 30.0]).unwrap();
    assert_eq!(tween.next_value(), Ok(Step::Value(100.0)));
}

#[test]
fn three_argument_reconfiguration_is_rejected() {
    let mut tween = Tween::new("easeOutQuad").unwrap();
    let err = tween.set_prop(&[1.0, 2.0, 3.0]).unwrap_err();
    assert_eq!(err, EasingError::MalformedReconfiguration { got: 3 });
    assert_eq!(
        err.to_string(),
        "Expected exactly 4 arguments (time, begin, change, duration), got 3"
    );
}

#[test]
fn unknown_curve_is_rejected_before_parameters() {
    let err = Tween::with_props("doesNotExist", 0.0, 100.0, 120.0, 30.0).unwrap_err();
    assert_eq!(err, EasingError::UnknownCurve("doesNotExist".to_string()));
    assert_eq!(err.to_string(), "Unknown easing curve: doesNotExist");
}

#[test]
fn every_curve_completes() {
    for &easing in Easing::all() {
        let mut tween = Tween::from_easing(easing);
        tween.set_prop(&[0.0, -50.0, 200.0, 60.0]).unwrap();

        let mut steps = 0;
        while tween.next_value().unwrap().value().is_some() {
            steps += 1;
            assert!(steps <= 61, "{easing} did not complete");
        }
        assert!(steps >= 60, "{easing} completed after {steps} steps");
    }
}

#[test]
fn every_curve_is_pure() {
    for &easing in Easing::all() {
        let f = Easing::lookup(easing.name()).unwrap().curve_fn();
        let g = easing.curve_fn();
        for t in 0..=20 {
            let t = t as f64;
            assert_eq!(f(t, 3.0, 7.0, 20.0).to_bits(), g(t, 3.0, 7.0, 20.0).to_bits());
        }
    }
}

#[test]
fn curve_names_serialize_as_catalog_names() {
    for &easing in Easing::all() {
        let json = serde_json::to_string(&easing).unwrap();
        assert_eq!(json, format!("\"{}\"", easing.name()));
        let back: Easing = serde_json::from_str(&json).unwrap();
        assert_eq!(back, easing);
    }
}

#[test]
fn curve_names_deserialize_from_toml() {
    #[derive(Deserialize)]
    struct Animation {
        curve: Easing,
    }

    let animation: Animation = toml::from_str(r#"curve = "easeInOutSine""#).unwrap();
    assert_eq!(animation.curve, Easing::EaseInOutSine);
    assert!(toml::from_str::<Animation>(r#"curve = "bounce""#).is_err());
}

#[test]
fn missing_curve_name_has_no_fallback() {
    #[derive(Debug, Deserialize)]
    struct Animation {
        #[allow(dead_code)]
        curve: Easing,
    }

    let err = toml::from_str::<Animation>("").unwrap_err();
    assert!(err.to_string().contains("curve"), "{err}");
}
