use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::conversion::ConversionError;

/// 온도 단위를 정의한다. 선언 순서가 결과 표의 행 순서가 된다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

const KELVIN_OFFSET: f64 = 273.15;
const FAHRENHEIT_OFFSET: f64 = 32.0;
// 유한한 결과에서 중간 곱이 넘치지 않도록 배율은 미리 나눠 둔다
const NINE_FIFTHS: f64 = 9.0 / 5.0;
const FIVE_NINTHS: f64 = 5.0 / 9.0;

impl TemperatureUnit {
    /// 표시 순서(섭씨, 화씨, 켈빈)대로 나열한 전체 단위.
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "Celsius",
            TemperatureUnit::Fahrenheit => "Fahrenheit",
            TemperatureUnit::Kelvin => "Kelvin",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Kelvin => "K",
        }
    }

    /// `ALL` 안에서의 위치. 결과 표의 행 인덱스로 쓴다.
    pub fn index(&self) -> usize {
        match self {
            TemperatureUnit::Celsius => 0,
            TemperatureUnit::Fahrenheit => 1,
            TemperatureUnit::Kelvin => 2,
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TemperatureUnit {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "c" | "celsius" | "°c" => Ok(TemperatureUnit::Celsius),
            "f" | "fahrenheit" | "°f" => Ok(TemperatureUnit::Fahrenheit),
            "k" | "kelvin" => Ok(TemperatureUnit::Kelvin),
            _ => Err(ConversionError::UnknownUnit(s.to_string())),
        }
    }
}

/// 온도를 서로 다른 단위로 변환한다.
///
/// 켈빈을 거치지 않고 단위 쌍마다 정해진 식을 그대로 적용한다.
/// 같은 단위끼리는 값을 그대로 돌려준다.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    use TemperatureUnit::*;
    match (from, to) {
        (Celsius, Fahrenheit) => value * NINE_FIFTHS + FAHRENHEIT_OFFSET,
        (Celsius, Kelvin) => value + KELVIN_OFFSET,
        (Fahrenheit, Celsius) => (value - FAHRENHEIT_OFFSET) * FIVE_NINTHS,
        (Fahrenheit, Kelvin) => (value - FAHRENHEIT_OFFSET) * FIVE_NINTHS + KELVIN_OFFSET,
        (Kelvin, Celsius) => value - KELVIN_OFFSET,
        (Kelvin, Fahrenheit) => (value - KELVIN_OFFSET) * NINE_FIFTHS + FAHRENHEIT_OFFSET,
        (Celsius, Celsius) | (Fahrenheit, Fahrenheit) | (Kelvin, Kelvin) => value,
    }
}
