use serde::{Deserialize, Serialize};

use crate::error::CalcError;

/// 수소 균등화 비용(LCOH) 계산 입력.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LcohInput {
    /// 초기 투자비 [USD]
    pub capex_usd: f64,
    /// 연간 운전/유지비 [USD/년]
    pub annual_opex_usd: f64,
    /// 연간 수소 생산량 [kg/년]
    pub annual_production_kg: f64,
    /// 설비 수명 [년]
    pub lifetime_years: f64,
    /// 할인율(소수, 0.08 = 8%)
    pub discount_rate: f64,
}

/// LCOH 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LcohResult {
    /// 균등화 비용 [USD/kg]
    pub lcoh_usd_per_kg: f64,
    /// 수명 기간 총 비용(할인하지 않은 단순 합) [USD]
    pub total_npv_usd: f64,
}

/// 자본회수계수(CRF) = r / (1 - (1+r)^-n)
pub fn capital_recovery_factor(discount_rate: f64, lifetime_years: f64) -> Result<f64, CalcError> {
    if discount_rate == 0.0 {
        return Err(CalcError::DegenerateInput(
            "Discount rate must be non-zero for capital recovery",
        ));
    }
    let denom = 1.0 - (1.0 + discount_rate).powf(-lifetime_years);
    if denom == 0.0 {
        return Err(CalcError::DegenerateInput(
            "Lifetime must be non-zero for capital recovery",
        ));
    }
    Ok(discount_rate / denom)
}

/// 연간화한 투자비와 운전비로 LCOH를 계산한다.
/// `total_npv_usd`는 할인 없이 투자비 + 운전비 × 수명으로 합산한다.
pub fn calculate_lcoh(input: LcohInput) -> Result<LcohResult, CalcError> {
    if input.annual_production_kg == 0.0 {
        return Err(CalcError::DegenerateInput(
            "Annual production must be non-zero",
        ));
    }
    let crf = capital_recovery_factor(input.discount_rate, input.lifetime_years)?;
    let annualized_capex = input.capex_usd * crf;
    let total_annual_cost = annualized_capex + input.annual_opex_usd;
    Ok(LcohResult {
        lcoh_usd_per_kg: total_annual_cost / input.annual_production_kg,
        total_npv_usd: input.capex_usd + input.annual_opex_usd * input.lifetime_years,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crf_textbook_value() {
        // 8%, 20년 CRF ≈ 0.101852
        let crf = capital_recovery_factor(0.08, 20.0).expect("crf");
        assert!((crf - 0.101_852_2).abs() < 1e-6, "crf={crf}");
    }

    #[test]
    fn crf_zero_lifetime_is_degenerate() {
        assert!(matches!(
            capital_recovery_factor(0.05, 0.0),
            Err(CalcError::DegenerateInput(_))
        ));
    }
}
