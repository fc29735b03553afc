use serde::{Deserialize, Serialize};

/// 온도 단위를 정의한다.
///
/// 섭씨/화씨는 영점이 이동된 단위이므로 배율만으로는 변환할 수 없고
/// 켈빈을 거쳐 오프셋까지 적용한다. 켈빈/랭킨은 절대 온도이므로 배율만 쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
    Rankine,
}

impl TemperatureUnit {
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "degC" | "°C" | "℃" | "C" | "celsius" => Some(TemperatureUnit::Celsius),
            "degF" | "°F" | "℉" | "F" | "fahrenheit" => Some(TemperatureUnit::Fahrenheit),
            "K" | "kelvin" => Some(TemperatureUnit::Kelvin),
            "degR" | "°R" | "R" | "rankine" => Some(TemperatureUnit::Rankine),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "degC",
            TemperatureUnit::Fahrenheit => "degF",
            TemperatureUnit::Kelvin => "K",
            TemperatureUnit::Rankine => "degR",
        }
    }
}

/// 주어진 값을 켈빈으로 변환한다.
pub fn to_kelvin(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Kelvin => value,
        TemperatureUnit::Celsius => value + 273.15,
        TemperatureUnit::Fahrenheit => (value + 459.67) * 5.0 / 9.0,
        TemperatureUnit::Rankine => value * 5.0 / 9.0,
    }
}

/// 켈빈 값을 원하는 단위로 변환한다.
pub fn from_kelvin(value_k: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Kelvin => value_k,
        TemperatureUnit::Celsius => value_k - 273.15,
        TemperatureUnit::Fahrenheit => value_k * 9.0 / 5.0 - 459.67,
        TemperatureUnit::Rankine => value_k * 9.0 / 5.0,
    }
}

/// 온도를 서로 다른 단위로 변환한다.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    // 섭씨<->화씨는 켈빈을 거치지 않는다
    match (from, to) {
        (TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit) => value * 9.0 / 5.0 + 32.0,
        (TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius) => (value - 32.0) * 5.0 / 9.0,
        _ => from_kelvin(to_kelvin(value, from), to),
    }
}
