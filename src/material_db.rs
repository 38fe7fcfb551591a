//! 냉각 상수 추정용 재료 프리셋 테이블.
//! 값은 문헌 대표치이며 실제 물체의 형상/표면 상태에 따라 달라진다.

#[derive(Debug, PartialEq)]
pub struct MaterialPreset {
    pub code: &'static str,
    pub name: &'static str,
    /// 대류 열전달계수 h [W/(m²·K)] 기본값
    pub h_w_m2k: f64,
    /// 비열 c [J/(kg·K)]
    pub c_j_kgk: f64,
    /// 밀도 [kg/m³], 체적으로부터 질량을 구할 때 사용
    pub density_kg_m3: f64,
    /// 재료 목록에 함께 표시하는 설명
    pub notes: &'static str,
}

impl MaterialPreset {
    /// 체적 [m³]에 해당하는 질량 [kg].
    pub fn mass_for_volume(&self, volume_m3: f64) -> f64 {
        self.density_kg_m3 * volume_m3
    }
}

pub fn materials() -> &'static [MaterialPreset] {
    MATERIALS
}

/// 코드 또는 이름으로 프리셋을 찾는다. 대소문자는 구분하지 않지만 부분 일치는 허용하지 않는다.
pub fn find_material(code: &str) -> Option<&'static MaterialPreset> {
    let code = code.trim();
    MATERIALS
        .iter()
        .find(|m| m.code.eq_ignore_ascii_case(code) || m.name.eq_ignore_ascii_case(code))
}

const MATERIALS: &[MaterialPreset] = &[
    MaterialPreset {
        code: "steel",
        name: "Steel",
        h_w_m2k: NATURAL_CONVECTION_AIR,
        c_j_kgk: 500.0,
        density_kg_m3: 7850.0,
        notes: "Carbon steel",
    },
    MaterialPreset {
        code: "aluminium",
        name: "Aluminum",
        h_w_m2k: NATURAL_CONVECTION_AIR,
        c_j_kgk: 900.0,
        density_kg_m3: 2700.0,
        notes: "Pure aluminium / common alloys",
    },
    MaterialPreset {
        code: "water",
        name: "Water",
        h_w_m2k: NATURAL_CONVECTION_AIR,
        c_j_kgk: 4180.0,
        density_kg_m3: 1000.0,
        notes: "Liquid water near 20°C",
    },
    MaterialPreset {
        code: "wood",
        name: "Wood",
        h_w_m2k: NATURAL_CONVECTION_AIR,
        c_j_kgk: 1700.0,
        density_kg_m3: 600.0,
        notes: "Dry softwood",
    },
];

// 정지 공기 중 자연대류 대표값 (5~25 W/m²K 범위의 중간 아래)
const NATURAL_CONVECTION_AIR: f64 = 10.0;
