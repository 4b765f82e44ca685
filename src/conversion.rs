use std::ops::Index;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::format::format_temperature;
use crate::units::{convert_temperature, TemperatureUnit};

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Error, PartialEq)]
pub enum ConversionError {
    /// 숫자로 해석할 수 없는 입력 문자열
    #[error("Invalid input! Please enter a valid number. (got {0:?})")]
    InvalidInput(String),
    /// 알 수 없는 단위 문자열
    #[error("unknown temperature unit: {0}")]
    UnknownUnit(String),
    /// NaN 또는 무한대 입력
    #[error("temperature must be a finite number, got {0}")]
    NonFiniteInput(f64),
    /// 변환 결과가 f64 범위를 넘어선 경우
    #[error("converted value overflows in {unit}")]
    NonFiniteResult { unit: TemperatureUnit },
}

/// 결과 표의 한 행.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionEntry {
    pub unit: TemperatureUnit,
    /// 반올림 전 값
    pub value: f64,
    /// 소수 둘째 자리까지 표시한 값
    pub text: String,
}

/// 한 값을 세 단위 모두로 변환한 결과.
///
/// 항목은 항상 섭씨, 화씨, 켈빈 순서로 정확히 세 개다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    source: TemperatureUnit,
    entries: [ConversionEntry; 3],
}

impl ConversionResult {
    /// 입력 값의 단위.
    pub fn source(&self) -> TemperatureUnit {
        self.source
    }

    pub fn get(&self, unit: TemperatureUnit) -> &str {
        &self.entries[unit.index()].text
    }

    /// 반올림 전 값을 돌려준다.
    pub fn value(&self, unit: TemperatureUnit) -> f64 {
        self.entries[unit.index()].value
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConversionEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Index<TemperatureUnit> for ConversionResult {
    type Output = str;

    fn index(&self, unit: TemperatureUnit) -> &str {
        self.get(unit)
    }
}

/// 변환 결과와 강조할 목표 단위를 묶는다. 강조는 표시용일 뿐 값에 영향이 없다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionTable {
    pub result: ConversionResult,
    pub highlighted: TemperatureUnit,
}

impl ConversionTable {
    /// `(단위, 표시 문자열, 강조 여부)`를 표시 순서대로 돌려준다.
    pub fn rows(&self) -> impl Iterator<Item = (TemperatureUnit, &str, bool)> + '_ {
        self.result
            .iter()
            .map(move |e| (e.unit, e.text.as_str(), e.unit == self.highlighted))
    }

    /// 강조된 행의 인덱스.
    pub fn highlighted_row(&self) -> usize {
        self.highlighted.index()
    }
}

/// 값을 세 단위 모두로 변환한다.
///
/// 입력이 유한하지 않거나 변환 결과가 넘치면 오류를 돌려준다. 그 밖의
/// 입력에 대해서는 항상 세 항목이 모두 채워진 결과를 만든다.
pub fn convert_all(
    value: f64,
    from: TemperatureUnit,
) -> Result<ConversionResult, ConversionError> {
    if !value.is_finite() {
        return Err(ConversionError::NonFiniteInput(value));
    }
    let values = TemperatureUnit::ALL.map(|unit| convert_temperature(value, from, unit));
    for unit in TemperatureUnit::ALL {
        if !values[unit.index()].is_finite() {
            return Err(ConversionError::NonFiniteResult { unit });
        }
    }
    let entries = TemperatureUnit::ALL.map(|unit| {
        let v = values[unit.index()];
        ConversionEntry {
            unit,
            value: v,
            text: format_temperature(v),
        }
    });
    debug!(value, from = %from, "converted temperature to all units");
    Ok(ConversionResult {
        source: from,
        entries,
    })
}

/// 세 단위 변환 결과에 목표 단위 강조 정보를 붙인다.
pub fn convert_for_display(
    value: f64,
    from: TemperatureUnit,
    to: TemperatureUnit,
) -> Result<ConversionTable, ConversionError> {
    let result = convert_all(value, from)?;
    Ok(ConversionTable {
        result,
        highlighted: to,
    })
}

/// 사용자가 입력한 문자열을 유한한 실수로 해석한다.
///
/// 앞뒤 공백은 무시한다. `NaN`, `inf`처럼 유한하지 않은 값도 잘못된 입력으로 본다.
pub fn parse_input(text: &str) -> Result<f64, ConversionError> {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ConversionError::InvalidInput(text.to_string())),
    }
}
