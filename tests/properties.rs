use cpto_demo::{config::PI, physics, text, Calculator};
use proptest::prelude::*;

fn approx_eq(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0)
}

proptest! {
    #[test]
    fn area_matches_formula(radius in -1e100f64..1e100f64) {
        let mut calc = Calculator::new();
        let area = calc.calculate_area(radius);

        prop_assert!(approx_eq(area, PI * radius * radius));
        prop_assert_eq!(calc.last_result(), area);
        prop_assert_eq!(calc.calculation_count(), 1);
    }

    #[test]
    fn square_writes_through_out_param(value in -1e100f64..1e100f64) {
        let mut calc = Calculator::new();
        let mut out = f64::NAN;
        calc.calculate_square(value, &mut out);

        prop_assert!(approx_eq(out, value * value));
        prop_assert_eq!(calc.last_result(), out);
        prop_assert_eq!(calc.calculation_count(), 1);
    }

    // Any mix of the two operations advances the counter by exactly one per
    // call, and the last result always tracks the newest call.
    #[test]
    fn counter_equals_call_count(ops in prop::collection::vec(any::<bool>(), 0..64)) {
        let mut calc = Calculator::new();
        let mut out = 0.0;
        let mut expected_last = 0.0;

        for (i, use_area) in ops.iter().enumerate() {
            let input = i as f64;
            if *use_area {
                expected_last = calc.calculate_area(input);
            } else {
                calc.calculate_square(input, &mut out);
                expected_last = out;
            }
            prop_assert_eq!(calc.calculation_count(), i as u64 + 1);
        }

        prop_assert_eq!(calc.last_result(), expected_last);
    }

    #[test]
    fn pattern_is_found_where_it_was_planted(
        prefix in "[a-m]{0,16}",
        pattern in "[n-z]{1,8}",
    ) {
        let input = format!("{prefix}{pattern}");
        prop_assert_eq!(text::find_pattern(&input, &pattern), Some(prefix.len()));
    }

    #[test]
    fn speed_is_distance_over_time(
        distance_km in 0.0f64..1e6,
        time_hr in 1e-3f64..1e3,
    ) {
        let speed = physics::speed_kmph(distance_km, time_hr);
        prop_assert!(approx_eq(speed * time_hr, distance_km));
    }
}
