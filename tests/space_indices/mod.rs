extern crate satenv;

use satenv::space_indices::{SpaceWeatherError, SpaceWeatherProvider};

use approx::assert_relative_eq;
use rstest::*;

#[test]
fn sample_table() {
    let table = crate::test_space_weather();
    let (first, last) = table.span();
    assert_eq!(first, 2_453_736.5);
    assert_eq!(last, first + 149.0);

    let jd = 2_453_827.75;
    let avg = table.f107_avg81(jd).unwrap();
    assert_relative_eq!(avg, 82.0, epsilon = 1e-9);
    // Previous day
    assert_eq!(table.f107(jd).unwrap(), table.records()[90].f107);
    assert_eq!(table.ap_daily(jd).unwrap(), table.records()[91].ap);

    let history = table.ap_history(jd).unwrap();
    let ap_3h = table.records()[91].ap_3h.unwrap();
    assert_eq!(history[1], ap_3h[2]);
    assert_eq!(history[2], ap_3h[1]);
    assert_eq!(history[3], ap_3h[0]);
    assert_eq!(history[4], table.records()[90].ap_3h.unwrap()[7]);
}

#[rstest]
#[case(2_453_736.5 - 0.01)]
#[case(2_453_736.5 + 150.0)]
fn outside_sample_table(#[case] jd: f64) {
    let table = crate::test_space_weather();
    assert!(matches!(
        table.ap_daily(jd),
        Err(SpaceWeatherError::DataUnavailable { .. })
    ));
}

#[test]
fn missing_file() {
    let err = satenv::space_indices::SpaceWeatherTable::load(crate::test_data("nope.yaml"))
        .unwrap_err();
    assert!(matches!(err, SpaceWeatherError::LoadRecords { .. }));
    assert!(err.to_string().contains("nope.yaml"));
}
