use serde::{Deserialize, Serialize};

const JOULES_PER_ELECTRON_VOLT: f64 = 1.602_176_634e-19;

/// 에너지 단위. 내부 기준은 줄(J)이다.
///
/// 칼로리는 열화학 칼로리(4.184 J)를 사용한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnergyUnit {
    Joule,
    Kilojoule,
    Calorie,
    KiloCalorie,
    WattHour,
    ElectronVolt,
}

impl EnergyUnit {
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "J" | "joule" | "joules" => Some(EnergyUnit::Joule),
            "kJ" | "kilojoule" | "kilojoules" => Some(EnergyUnit::Kilojoule),
            "cal" | "calorie" | "calories" => Some(EnergyUnit::Calorie),
            "kcal" | "kilocalorie" | "kilocalories" => Some(EnergyUnit::KiloCalorie),
            "W*h" | "Wh" | "W·h" | "watt_hour" => Some(EnergyUnit::WattHour),
            "eV" | "electron_volt" => Some(EnergyUnit::ElectronVolt),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            EnergyUnit::Joule => "J",
            EnergyUnit::Kilojoule => "kJ",
            EnergyUnit::Calorie => "cal",
            EnergyUnit::KiloCalorie => "kcal",
            EnergyUnit::WattHour => "W*h",
            EnergyUnit::ElectronVolt => "eV",
        }
    }
}

fn to_joule(value: f64, unit: EnergyUnit) -> f64 {
    match unit {
        EnergyUnit::Joule => value,
        EnergyUnit::Kilojoule => value * 1000.0,
        EnergyUnit::Calorie => value * 4.184,
        EnergyUnit::KiloCalorie => value * 4184.0,
        EnergyUnit::WattHour => value * 3600.0,
        EnergyUnit::ElectronVolt => value * JOULES_PER_ELECTRON_VOLT,
    }
}

fn from_joule(value: f64, unit: EnergyUnit) -> f64 {
    match unit {
        EnergyUnit::Joule => value,
        EnergyUnit::Kilojoule => value / 1000.0,
        EnergyUnit::Calorie => value / 4.184,
        EnergyUnit::KiloCalorie => value / 4184.0,
        EnergyUnit::WattHour => value / 3600.0,
        EnergyUnit::ElectronVolt => value / JOULES_PER_ELECTRON_VOLT,
    }
}

/// 에너지를 변환한다.
pub fn convert_energy(value: f64, from: EnergyUnit, to: EnergyUnit) -> f64 {
    let j = to_joule(value, from);
    from_joule(j, to)
}
