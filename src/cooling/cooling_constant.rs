//! 재료/형상 물성으로부터 냉각 상수 k = (h·A)/(m·c) 를 추정하는 모듈.
//! SI 입력(W/m²K, m², kg, J/kgK)이면 k의 단위는 1/s 이다.

use super::{require_finite, require_positive, CalcError, Field};
use crate::material_db::{self, MaterialPreset};

/// 이 값을 넘으면 입력 실수 가능성이 높아 확인을 요청한다.
pub const UNUSUAL_H_W_M2K: f64 = 5000.0;
pub const UNUSUAL_AREA_M2: f64 = 50.0;
pub const UNUSUAL_MASS_KG: f64 = 500.0;

/// 질량을 직접 주거나, 체적과 프리셋 밀도로 유도한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MassSource {
    /// 질량 [kg]
    Mass(f64),
    /// 체적 [m³]
    Volume(f64),
}

/// 프리셋 기반 추정 입력.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetInputs {
    /// 표면적 [m²]
    pub area_m2: f64,
    pub mass: MassSource,
    /// None이면 프리셋의 h를 쓴다.
    pub h_override: Option<f64>,
}

/// 프리셋을 거친 추정 결과. 실제로 계산에 쓰인 값을 모두 담는다.
#[derive(Debug, Clone, PartialEq)]
pub struct KEstimate {
    pub material: &'static MaterialPreset,
    pub h_w_m2k: f64,
    pub area_m2: f64,
    pub mass_kg: f64,
    pub c_j_kgk: f64,
    pub k: f64,
}

/// k = (h·A)/(m·c). 네 값 모두 0보다 커야 하며 h, A, m, c 순서로 검사한다.
pub fn estimate(h: f64, area: f64, mass: f64, c: f64) -> Result<f64, CalcError> {
    let checks = [
        (Field::HeatTransferCoeff, h),
        (Field::SurfaceArea, area),
        (Field::Mass, mass),
        (Field::SpecificHeat, c),
    ];
    for (field, value) in checks {
        require_finite(field, value)?;
    }
    for (field, value) in checks {
        require_positive(field, value)?;
    }
    // 각 값이 유한해도 곱이 넘치거나 0으로 떨어질 수 있다.
    let k = (h * area) / (mass * c);
    if !k.is_finite() || k <= 0.0 {
        return Err(CalcError::Range {
            field: Field::CoolingConstant,
            value: k,
        });
    }
    Ok(k)
}

/// 재료명으로 프리셋을 찾아 h, c(필요하면 밀도 기반 m)를 채운 뒤 k를 추정한다.
pub fn estimate_from_preset(name: &str, input: &PresetInputs) -> Result<KEstimate, CalcError> {
    let material = material_db::find_material(name)
        .ok_or_else(|| CalcError::UnknownPreset(name.trim().to_string()))?;

    let h = input.h_override.unwrap_or(material.h_w_m2k);
    // 체적보다 h, A를 먼저 검사해 estimate와 같은 순서를 유지한다.
    for (field, value) in [(Field::HeatTransferCoeff, h), (Field::SurfaceArea, input.area_m2)] {
        require_finite(field, value)?;
        require_positive(field, value)?;
    }
    let mass_kg = match input.mass {
        MassSource::Mass(m) => m,
        MassSource::Volume(v) => {
            require_finite(Field::Volume, v)?;
            require_positive(Field::Volume, v)?;
            let m = material.mass_for_volume(v);
            if !m.is_finite() {
                return Err(CalcError::Range {
                    field: Field::Volume,
                    value: v,
                });
            }
            m
        }
    };
    let k = estimate(h, input.area_m2, mass_kg, material.c_j_kgk)?;
    Ok(KEstimate {
        material,
        h_w_m2k: h,
        area_m2: input.area_m2,
        mass_kg,
        c_j_kgk: material.c_j_kgk,
        k,
    })
}

/// 비정상적으로 큰 입력에 대한 경고 목록. 비어 있으면 확인 없이 진행한다.
pub fn plausibility_warnings(h: f64, area: f64, mass: f64) -> Vec<Field> {
    let mut warnings = Vec::new();
    if h > UNUSUAL_H_W_M2K {
        warnings.push(Field::HeatTransferCoeff);
    }
    if area > UNUSUAL_AREA_M2 {
        warnings.push(Field::SurfaceArea);
    }
    if mass > UNUSUAL_MASS_KG {
        warnings.push(Field::Mass);
    }
    warnings
}
