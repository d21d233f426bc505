//! 수소 생산·저장·운송 계산에 쓰이는 물리/경제 기준값과 기술 테이블.
//! 모든 값은 불변 정적 데이터이며 런타임에 변경하지 않는다.

use crate::production::ElectrolyzerType;
use crate::transport::TransportType;

/// 물리 상수 묶음.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    /// 수소 고위발열량 [kWh/kg]
    pub hydrogen_hhv_kwh_per_kg: f64,
    /// 수소 저위발열량 [kWh/kg]
    pub hydrogen_lhv_kwh_per_kg: f64,
    /// 수소 1kg 생산에 필요한 이론 물 사용량 [L/kg H2]
    pub water_consumption_l_per_kg_h2: f64,
    /// 그레이 수소 배출계수 [kg CO2/kg H2]
    pub gray_hydrogen_co2_kg_per_kg_h2: f64,
    /// 블루 수소 잔여 배출계수 [kg CO2/kg H2]
    pub blue_hydrogen_co2_kg_per_kg_h2: f64,
}

pub const PHYSICAL_CONSTANTS: PhysicalConstants = PhysicalConstants {
    hydrogen_hhv_kwh_per_kg: 39.4,
    hydrogen_lhv_kwh_per_kg: 33.3,
    water_consumption_l_per_kg_h2: 9.0,
    gray_hydrogen_co2_kg_per_kg_h2: 9.3,
    blue_hydrogen_co2_kg_per_kg_h2: 2.0,
};

/// 실제 설비 손실을 반영한 물 사용량 배수(10% 추가)
pub const WATER_PRACTICAL_OVERHEAD: f64 = 1.10;

/// 액화 에너지 [kWh/kg]
pub const LIQUEFACTION_KWH_PER_KG: f64 = 11.0;

/// 온도 보정 기준 온도 [°C]
pub const REFERENCE_TEMPERATURE_C: f64 = 25.0;

/// 기준 온도 초과 1°C당 효율 보정 계수
pub const TEMPERATURE_EFFICIENCY_COEFF: f64 = 0.001;

/// 압축 목표 압력별 소요 에너지 [bar, kWh/kg].
pub const COMPRESSION_ENERGY_TABLE: &[(f64, f64)] =
    &[(200.0, 2.21), (350.0, 2.94), (700.0, 3.24), (870.0, 3.36)];

/// 테이블에 없는 압력은 700 bar 기준값에 비례해 근사한다.
pub const COMPRESSION_FALLBACK_REFERENCE_BAR: f64 = 700.0;
pub const COMPRESSION_FALLBACK_REFERENCE_KWH_PER_KG: f64 = 3.24;

/// 값의 범위(하한~상한).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// 경계를 포함해 범위 안에 있는지 확인한다.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

/// 수전해 기술별 참고 데이터.
#[derive(Debug)]
pub struct ElectrolyzerTechnology {
    pub kind: ElectrolyzerType,
    pub name: &'static str,
    /// 수소 1kg 생산 소요 전력 [kWh/kg]
    pub energy_per_kg_kwh: f64,
    /// 일반적인 시스템 효율 [%]
    pub efficiency_percent: ValueRange,
    /// 설비비 [USD/kW]
    pub capex_usd_per_kw: ValueRange,
    /// 운전 온도 [°C]
    pub operating_temp_c: ValueRange,
}

pub const ELECTROLYZER_TECHNOLOGIES: &[ElectrolyzerTechnology] = &[
    ElectrolyzerTechnology {
        kind: ElectrolyzerType::Pem,
        name: "PEM",
        energy_per_kg_kwh: 50.0,
        efficiency_percent: ValueRange::new(60.0, 70.0),
        capex_usd_per_kw: ValueRange::new(1100.0, 1800.0),
        operating_temp_c: ValueRange::new(50.0, 80.0),
    },
    ElectrolyzerTechnology {
        kind: ElectrolyzerType::Alkaline,
        name: "Alkaline",
        energy_per_kg_kwh: 48.0,
        efficiency_percent: ValueRange::new(63.0, 70.0),
        capex_usd_per_kw: ValueRange::new(500.0, 1400.0),
        operating_temp_c: ValueRange::new(70.0, 90.0),
    },
    ElectrolyzerTechnology {
        kind: ElectrolyzerType::Soec,
        name: "SOEC",
        energy_per_kg_kwh: 45.0,
        efficiency_percent: ValueRange::new(74.0, 81.0),
        capex_usd_per_kw: ValueRange::new(2800.0, 5600.0),
        operating_temp_c: ValueRange::new(750.0, 850.0),
    },
];

pub fn find_electrolyzer(kind: ElectrolyzerType) -> Option<&'static ElectrolyzerTechnology> {
    ELECTROLYZER_TECHNOLOGIES.iter().find(|t| t.kind == kind)
}

/// 운송 수단별 참고 데이터.
#[derive(Debug)]
pub struct TransportMode {
    pub kind: TransportType,
    pub name: &'static str,
    /// 운송 단가 [USD/(kg·km)]
    pub rate_usd_per_kg_km: f64,
    /// 경제적인 운송 거리 [km]
    pub typical_distance_km: ValueRange,
}

pub const TRANSPORT_MODES: &[TransportMode] = &[
    TransportMode {
        kind: TransportType::TubeTrailer,
        name: "tube_trailer",
        rate_usd_per_kg_km: 0.15,
        typical_distance_km: ValueRange::new(0.0, 300.0),
    },
    TransportMode {
        kind: TransportType::Tanker,
        name: "tanker",
        rate_usd_per_kg_km: 0.25,
        typical_distance_km: ValueRange::new(200.0, 4000.0),
    },
    TransportMode {
        kind: TransportType::Pipeline,
        name: "pipeline",
        rate_usd_per_kg_km: 0.05,
        typical_distance_km: ValueRange::new(0.0, 1500.0),
    },
];

/// 알 수 없는 운송 수단에 적용하는 기본 단가(튜브 트레일러와 동일)
pub const DEFAULT_TRANSPORT_RATE_USD_PER_KG_KM: f64 = 0.15;

pub fn find_transport_mode(kind: TransportType) -> Option<&'static TransportMode> {
    TRANSPORT_MODES.iter().find(|m| m.kind == kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_electrolyzer_type_has_a_table_row() {
        for kind in ElectrolyzerType::ALL {
            assert!(find_electrolyzer(kind).is_some(), "{kind:?}");
        }
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let r = ValueRange::new(50.0, 80.0);
        assert!(r.contains(50.0));
        assert!(r.contains(80.0));
        assert!(!r.contains(80.0001));
        assert_eq!(r.midpoint(), 65.0);
    }
}
