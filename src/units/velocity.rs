use serde::{Deserialize, Serialize};

/// 속도 단위. 내부 기준은 m/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VelocityUnit {
    MeterPerSecond,
    KilometerPerHour,
    MilePerHour,
    Knot,
    FootPerSecond,
}

impl VelocityUnit {
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "m/s" | "mps" => Some(VelocityUnit::MeterPerSecond),
            "km/h" | "kph" | "kmh" => Some(VelocityUnit::KilometerPerHour),
            "mph" | "mi/h" => Some(VelocityUnit::MilePerHour),
            "knot" | "knots" | "kn" | "kt" => Some(VelocityUnit::Knot),
            "ft/s" | "fps" => Some(VelocityUnit::FootPerSecond),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            VelocityUnit::MeterPerSecond => "m/s",
            VelocityUnit::KilometerPerHour => "km/h",
            VelocityUnit::MilePerHour => "mph",
            VelocityUnit::Knot => "knot",
            VelocityUnit::FootPerSecond => "ft/s",
        }
    }
}

fn to_mps(value: f64, unit: VelocityUnit) -> f64 {
    match unit {
        VelocityUnit::MeterPerSecond => value,
        VelocityUnit::KilometerPerHour => value / 3.6,
        VelocityUnit::MilePerHour => value * 0.447_04,
        VelocityUnit::Knot => value * 1852.0 / 3600.0,
        VelocityUnit::FootPerSecond => value * 0.3048,
    }
}

fn from_mps(value: f64, unit: VelocityUnit) -> f64 {
    match unit {
        VelocityUnit::MeterPerSecond => value,
        VelocityUnit::KilometerPerHour => value * 3.6,
        VelocityUnit::MilePerHour => value / 0.447_04,
        VelocityUnit::Knot => value * 3600.0 / 1852.0,
        VelocityUnit::FootPerSecond => value / 0.3048,
    }
}

/// 속도를 변환한다.
pub fn convert_velocity(value: f64, from: VelocityUnit, to: VelocityUnit) -> f64 {
    let base = to_mps(value, from);
    from_mps(base, to)
}
