use super::*;

fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn identity_up_to_first_threshold() {
    for i in 0..=40 {
        let value = i as f32 * 0.5;
        assert_eq!(damp(value), value, "value {value} should pass through");
    }
}

#[test]
fn band_boundaries_match_cumulative_sums() {
    assert_close(damp(20.0), 20.0);
    assert_close(damp(40.0), 30.0);
    assert_close(damp(60.0), 38.0);
    assert_close(damp(80.0), 44.0);
    assert_close(damp(100.0), 48.0);
}

#[test]
fn values_inside_bands() {
    assert_close(damp(30.0), 25.0);
    assert_close(damp(50.0), 34.0);
    assert_close(damp(70.0), 41.0);
    assert_close(damp(90.0), 46.0);
    assert_close(damp(150.0), 53.0);
}

#[test]
fn continuous_at_every_threshold() {
    for band in DEFAULT_BANDS.iter() {
        let at = damp(band.threshold);
        let just_above = damp(band.threshold + 1e-3);
        assert!(
            (just_above - at).abs() < 1e-3,
            "jump at {}: {} vs {}",
            band.threshold,
            at,
            just_above
        );
    }
}

#[test]
fn monotonically_non_decreasing() {
    let mut prev = damp(0.0);
    for i in 1..=4000 {
        let value = i as f32 * 0.05;
        let next = damp(value);
        assert!(next >= prev, "damp({value}) = {next} < {prev}");
        prev = next;
    }
}

#[test]
fn grows_slower_than_linear_past_first_threshold() {
    for i in 1..200 {
        let value = 20.0 + i as f32;
        assert!(damp(value) < value);
    }
}

#[test]
fn standard_curve_matches_free_function() {
    let curve = ResistanceCurve::standard();
    for i in 0..300 {
        let value = i as f32 * 0.7;
        assert_eq!(curve.damp(value), damp(value));
    }
    assert_eq!(curve, ResistanceCurve::default());
}

#[test]
fn custom_curve_uses_its_own_bands() {
    let curve = ResistanceCurve::new([
        ResistanceBand::new(10.0, 0.5),
        ResistanceBand::new(30.0, 0.25),
    ])
    .expect("valid curve");

    assert_close(curve.damp(5.0), 5.0);
    assert_close(curve.damp(20.0), 15.0);
    assert_close(curve.damp(30.0), 20.0);
    assert_close(curve.damp(50.0), 25.0);
}

#[test]
fn rejects_empty_curve() {
    assert_eq!(
        ResistanceCurve::new(Vec::<ResistanceBand>::new()),
        Err(CurveError::Empty)
    );
}

#[test]
fn rejects_unordered_thresholds() {
    let err = ResistanceCurve::new([
        ResistanceBand::new(20.0, 0.5),
        ResistanceBand::new(20.0, 0.4),
    ])
    .unwrap_err();
    assert_eq!(err, CurveError::ThresholdsNotIncreasing { index: 1 });
}

#[test]
fn rejects_rates_that_do_not_decrease() {
    let err = ResistanceCurve::new([
        ResistanceBand::new(20.0, 0.3),
        ResistanceBand::new(40.0, 0.4),
    ])
    .unwrap_err();
    assert_eq!(err, CurveError::RatesNotDecreasing { index: 1 });
}

#[test]
fn rejects_out_of_range_values() {
    assert!(matches!(
        ResistanceCurve::new([ResistanceBand::new(f32::NAN, 0.5)]),
        Err(CurveError::InvalidThreshold { index: 0, .. })
    ));
    assert!(matches!(
        ResistanceCurve::new([
            ResistanceBand::new(20.0, 0.5),
            ResistanceBand::new(40.0, 0.0)
        ]),
        Err(CurveError::InvalidRate { index: 1, .. })
    ));
    assert!(matches!(
        ResistanceCurve::new([ResistanceBand::new(20.0, 1.5)]),
        Err(CurveError::InvalidRate { index: 0, .. })
    ));
}

#[test]
fn error_messages_name_the_band() {
    let err = CurveError::RatesNotDecreasing { index: 3 };
    assert_eq!(err.to_string(), "band 3 rate is not below the previous one");
}
