//! 항등 변환과 왕복 변환 성질 테스트.
use proptest::prelude::*;
use temperature_converter::format::format_temperature;
use temperature_converter::units::convert_temperature;
use temperature_converter::{convert_all, parse_input, TemperatureUnit};

fn unit() -> impl Strategy<Value = TemperatureUnit> {
    prop::sample::select(TemperatureUnit::ALL.to_vec())
}

proptest! {
    #[test]
    fn own_unit_is_identity(v in -1.0e6f64..1.0e6, u in unit()) {
        let res = convert_all(v, u).unwrap();
        let expected = format_temperature(v);
        prop_assert_eq!(res.get(u), expected.as_str());
        prop_assert_eq!(res.value(u), v);
    }

    #[test]
    fn round_trip_within_display_tolerance(v in -1.0e6f64..1.0e6, a in unit(), b in unit()) {
        let there = convert_all(v, a).unwrap();
        let shown = parse_input(there.get(b)).unwrap();
        let back = convert_temperature(shown, b, a);
        prop_assert!((back - v).abs() <= 0.01, "{} {:?}->{:?}->{:?} gave {}", v, a, b, a, back);
    }

    #[test]
    fn formatted_text_has_at_most_two_decimals(v in -1.0e6f64..1.0e6, u in unit()) {
        let res = convert_all(v, u).unwrap();
        for entry in res.iter() {
            let decimals = entry.text.split_once('.').map(|(_, f)| f.len()).unwrap_or(0);
            prop_assert!(decimals <= 2, "{}", entry.text);
            prop_assert!(!entry.text.ends_with('0') || !entry.text.contains('.'));
        }
    }
}
