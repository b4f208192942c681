use proptest::prelude::*;
use rainbow_core::{MIN_REGRESSION_POINTS, Observation, RainbowError, Series};

fn arb_valid() -> impl Strategy<Value = Observation> {
    (0i64..4_000_000_000_000, 0.0001f64..1_000_000.0).prop_map(|(ts, p)| Observation::new(ts, p))
}

fn arb_malformed() -> impl Strategy<Value = Observation> {
    (
        0i64..4_000_000_000_000,
        prop_oneof![
            Just(f64::NAN),
            Just(f64::INFINITY),
            Just(f64::NEG_INFINITY),
            Just(0.0),
            -1_000.0f64..-0.0001,
        ],
    )
        .prop_map(|(ts, p)| Observation::new(ts, p))
}

#[test]
fn negative_and_nan_are_dropped() {
    let mut raw: Vec<Observation> = (0..20)
        .rev()
        .map(|i| Observation::new(i * 1_000, 1.0 + i as f64))
        .collect();
    raw.insert(5, Observation::new(7_500, -3.0));
    raw.insert(11, Observation::new(8_500, f64::NAN));
    let series = Series::normalize(raw).unwrap();
    assert_eq!(series.len(), 20);
    let ts: Vec<i64> = series.points().iter().map(|p| p.ts.timestamp_millis()).collect();
    assert_eq!(ts, (0..20).map(|i| i * 1_000).collect::<Vec<_>>());
}

proptest! {
    #[test]
    fn output_is_sorted_and_valid(
        valid in proptest::collection::vec(arb_valid(), 3..150),
        bad in proptest::collection::vec(arb_malformed(), 0..30),
    ) {
        let n = valid.len();
        let mut raw = valid;
        raw.extend(bad);
        let series = Series::normalize(raw).unwrap();
        prop_assert_eq!(series.len(), n);
        prop_assert!(series.points().windows(2).all(|w| w[0].ts <= w[1].ts));
        prop_assert!(series.points().iter().all(|p| p.price.is_finite() && p.price > 0.0));
    }

    #[test]
    fn too_few_valid_points_fail(
        valid in proptest::collection::vec(arb_valid(), 0..MIN_REGRESSION_POINTS),
        bad in proptest::collection::vec(arb_malformed(), 0..30),
    ) {
        let n = valid.len();
        let mut raw = bad;
        raw.extend(valid);
        let err = Series::normalize(raw).unwrap_err();
        prop_assert_eq!(err, RainbowError::insufficient_data(MIN_REGRESSION_POINTS, n));
    }
}
