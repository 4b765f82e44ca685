//! 결과 표에 쓰이는 온도 표시 형식.

/// 온도 값을 소수 둘째 자리까지 반올림한 문자열로 만든다.
///
/// 값의 가장 짧은 십진 표현(`Display`)을 기준으로 셋째 자리가 5 이상이면
/// 0에서 먼 쪽으로 올린다. 소수부의 끝자리 0과 남는 소수점은 지우고,
/// `-0`은 `0`으로 표시한다.
///
/// ```
/// use temperature_converter::format::format_temperature;
/// assert_eq!(format_temperature(100.0), "100");
/// assert_eq!(format_temperature(98.60), "98.6");
/// assert_eq!(format_temperature(-273.15), "-273.15");
/// assert_eq!(format_temperature(1.005), "1.01");
/// ```
pub fn format_temperature(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    // f64의 Display는 지수 표기 없이 왕복 가능한 가장 짧은 자릿수를 낸다
    let shortest = value.abs().to_string();
    let (int_part, frac_part) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));
    let frac = frac_part.as_bytes();

    let mut digits: Vec<u8> = int_part.bytes().collect();
    digits.extend((0..2).map(|i| frac.get(i).copied().unwrap_or(b'0')));
    if frac.get(2).is_some_and(|d| *d >= b'5') {
        round_up(&mut digits);
    }

    let (int_digits, frac_digits) = digits.split_at(digits.len() - 2);
    let mut text: String = int_digits.iter().map(|d| char::from(*d)).collect();
    let frac_text: String = frac_digits.iter().map(|d| char::from(*d)).collect();
    let frac_text = frac_text.trim_end_matches('0');
    if !frac_text.is_empty() {
        text.push('.');
        text.push_str(frac_text);
    }
    if text == "0" || !value.is_sign_negative() {
        return text;
    }
    format!("-{text}")
}

/// ASCII 숫자열을 마지막 자리에서 1 올린다.
fn round_up(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_trailing_zeros() {
        assert_eq!(format_temperature(32.0), "32");
        assert_eq!(format_temperature(373.15), "373.15");
        assert_eq!(format_temperature(12.50), "12.5");
        assert_eq!(format_temperature(0.0), "0");
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(format_temperature(0.125), "0.13");
        assert_eq!(format_temperature(-0.125), "-0.13");
        assert_eq!(format_temperature(2.675_000_1), "2.68");
        assert_eq!(format_temperature(36.999_999_999), "37");
    }

    #[test]
    fn decimal_ties_round_up_consistently() {
        assert_eq!(format_temperature(0.285), "0.29");
        assert_eq!(format_temperature(1.005), "1.01");
        assert_eq!(format_temperature(1.115), "1.12");
        assert_eq!(format_temperature(2.675), "2.68");
        assert_eq!(format_temperature(8.345), "8.35");
        assert_eq!(format_temperature(-1.005), "-1.01");
    }

    #[test]
    fn carry_propagates_into_integer_part() {
        assert_eq!(format_temperature(9.995), "10");
        assert_eq!(format_temperature(99.999), "100");
        assert_eq!(format_temperature(-0.999), "-1");
    }

    #[test]
    fn binary_noise_below_tie_rounds_to_nearest() {
        assert_eq!(format_temperature(-459.669_999_999_999_96), "-459.67");
        assert_eq!(format_temperature(233.149_999_999_999_98), "233.15");
        assert_eq!(format_temperature(26.850_000_000_000_023), "26.85");
    }

    #[test]
    fn tiny_negative_prints_as_zero() {
        assert_eq!(format_temperature(-0.001), "0");
        assert_eq!(format_temperature(-0.0), "0");
    }

    #[test]
    fn huge_values_keep_integer_digits() {
        let text = format_temperature(1.0e307);
        assert!(!text.contains('.'));
        assert!((307..=308).contains(&text.len()), "len={}", text.len());
    }
}
