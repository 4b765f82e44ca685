use crate::conversion::{self, ConversionError, ConversionResult};
use crate::units::{convert_temperature, TemperatureUnit};

/// 단위가 붙은 온도 값. 변환 요청마다 새로 만들고 보관하지 않는다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub value: f64,
    pub unit: TemperatureUnit,
}

impl Reading {
    pub fn new(value: f64, unit: TemperatureUnit) -> Self {
        Self { value, unit }
    }

    /// 같은 온도를 다른 단위로 표현한 값을 돌려준다.
    pub fn to(&self, unit: TemperatureUnit) -> Reading {
        Reading {
            value: convert_temperature(self.value, self.unit, unit),
            unit,
        }
    }

    /// 세 단위 모두로 변환한 결과를 만든다.
    pub fn convert_all(&self) -> Result<ConversionResult, ConversionError> {
        conversion::convert_all(self.value, self.unit)
    }
}
