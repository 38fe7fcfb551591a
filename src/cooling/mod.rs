//! 뉴턴 냉각 법칙 기반 계산 모듈을 모아둔다.
//! 냉각 시간 역산(cooling_time)과 냉각 상수 추정(cooling_constant)으로 구성한다.
//!
//! 입력 검증 순서는 모든 계산에서 동일하다: 숫자 해석 → 부호/양수 조건 → 필드 간 관계 조건.
//! 처음 위반한 규칙 하나만 오류로 반환한다.

pub mod cooling_constant;
pub mod cooling_time;

use std::fmt;

/// 계산에 들어가는 입력 필드. 오류 메시지와 로그 레코드의 필드명으로 쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    InitialTemperature,
    AmbientTemperature,
    TargetTemperature,
    CoolingConstant,
    HeatTransferCoeff,
    SurfaceArea,
    Mass,
    Volume,
    SpecificHeat,
}

impl Field {
    /// 로그 파일에 기록되는 고정 필드명.
    pub fn name(&self) -> &'static str {
        match self {
            Field::InitialTemperature => "initial_temperature",
            Field::AmbientTemperature => "ambient_temperature",
            Field::TargetTemperature => "target_temperature",
            Field::CoolingConstant => "cooling_constant_k",
            Field::HeatTransferCoeff => "heat_transfer_coeff_h",
            Field::SurfaceArea => "surface_area_a",
            Field::Mass => "mass_m",
            Field::Volume => "volume_v",
            Field::SpecificHeat => "specific_heat_c",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 결과가 유한한 의미 있는 값이 되지 않는 온도 조합의 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Undefined {
    /// T0 == T_env: 온도차가 없어 냉각이 일어나지 않는다.
    NoDrivingForce,
    /// T_target == T_env: 주변 온도에는 정확히 도달하지 않는다(시간 → ∞).
    UnreachableTarget,
    /// 목표 온도가 (T0, T_env) 구간 밖에 있다.
    TargetOutOfRange,
}

impl fmt::Display for Undefined {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Undefined::NoDrivingForce => {
                write!(f, "초기 온도와 주변 온도가 같아 냉각 시간이 정의되지 않습니다")
            }
            Undefined::UnreachableTarget => {
                write!(f, "목표 온도가 주변 온도와 같아 정확히 도달하지 않습니다")
            }
            Undefined::TargetOutOfRange => {
                write!(f, "목표 온도는 초기 온도와 주변 온도 사이에 있어야 합니다")
            }
        }
    }
}

/// 냉각 계산 중 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalcError {
    /// 실수로 해석할 수 없는 입력
    #[error("숫자 해석 오류: {field}")]
    Parse { field: Field },
    /// 숫자지만 양수 조건을 위반하거나 계산 결과가 표현 범위를 벗어남
    #[error("범위 오류: {field}={value}")]
    Range { field: Field, value: f64 },
    /// 수식이 유한한 답을 주지 않는 조합
    #[error("정의되지 않는 조건: {0}")]
    UndefinedConfiguration(Undefined),
    /// 프리셋 테이블에 없는 재료명
    #[error("알 수 없는 재료 프리셋: {0}")]
    UnknownPreset(String),
}

/// 사용자 입력 문자열을 유한한 실수로 해석한다.
///
/// `inf`, `NaN`처럼 Rust가 받아들이지만 물리량이 아닌 값도 해석 오류로 취급한다.
pub fn parse_number(field: Field, raw: &str) -> Result<f64, CalcError> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(CalcError::Parse { field }),
    }
}

pub(crate) fn require_finite(field: Field, value: f64) -> Result<f64, CalcError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::Parse { field })
    }
}

pub(crate) fn require_positive(field: Field, value: f64) -> Result<f64, CalcError> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(CalcError::Range { field, value })
    }
}

/// 결과값을 고정 소수 자릿수로 표시한다. 화면 출력과 로그가 같은 문자열을 쓴다.
/// 자릿수는 [`MAX_DECIMALS`]를 넘지 않는다.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    let decimals = decimals.min(MAX_DECIMALS);
    format!("{value:.decimals$}")
}

/// 설정으로 지정할 수 있는 최대 소수 자릿수.
pub const MAX_DECIMALS: usize = 10;

/// 냉각 시간 결과의 기본 소수 자릿수.
pub const DEFAULT_TIME_DECIMALS: usize = 2;
/// 냉각 상수 결과의 기본 소수 자릿수.
pub const DEFAULT_K_DECIMALS: usize = 5;

pub use cooling_constant::{
    estimate, estimate_from_preset, plausibility_warnings, KEstimate, MassSource, PresetInputs,
};
pub use cooling_time::{solve, temperature_at};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_number_trims_and_rejects_garbage() {
        assert_eq!(parse_number(Field::Mass, "  2.5\n"), Ok(2.5));
        assert_eq!(
            parse_number(Field::Mass, "2.5 kg"),
            Err(CalcError::Parse { field: Field::Mass })
        );
        assert_eq!(
            parse_number(Field::Mass, ""),
            Err(CalcError::Parse { field: Field::Mass })
        );
    }

    #[test]
    fn parse_number_rejects_non_finite() {
        for raw in ["inf", "-inf", "NaN", "infinity"] {
            assert!(matches!(
                parse_number(Field::CoolingConstant, raw),
                Err(CalcError::Parse { .. })
            ));
        }
    }

    #[test]
    fn format_fixed_uses_requested_precision() {
        assert_eq!(format_fixed(19.459101, 2), "19.46");
        assert_eq!(format_fixed(5.0 / 900.0, 5), "0.00556");
        assert_eq!(format_fixed(3.0, 0), "3");
        assert_eq!(format_fixed(1.0, usize::MAX), "1.0000000000");
    }
}
