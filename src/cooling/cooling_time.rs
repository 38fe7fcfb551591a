//! 뉴턴 냉각 법칙의 역함수로 목표 온도까지의 경과 시간을 구한다.
//!
//! T(t) = T_env + (T0 - T_env)·e^(-k·t) 를 t에 대해 풀면
//! t = -(1/k)·ln[(T_target - T_env) / (T0 - T_env)] 이 된다.
//! 시간 단위는 k 단위의 역수를 따른다(k가 1/min이면 분).

use super::{require_finite, require_positive, CalcError, Field, Undefined};

/// 초기 온도 `t0`에서 주변 온도 `t_env` 쪽으로 변하는 물체가 `t_target`에 도달하는 시간을 계산한다.
///
/// 냉각(t0 > t_env)과 가열(t0 < t_env) 모두 같은 식으로 처리한다.
pub fn solve(t0: f64, t_env: f64, t_target: f64, k: f64) -> Result<f64, CalcError> {
    require_finite(Field::InitialTemperature, t0)?;
    require_finite(Field::AmbientTemperature, t_env)?;
    require_finite(Field::TargetTemperature, t_target)?;
    require_finite(Field::CoolingConstant, k)?;
    require_positive(Field::CoolingConstant, k)?;

    if t0 == t_env {
        return Err(CalcError::UndefinedConfiguration(Undefined::NoDrivingForce));
    }
    if t_target == t_env {
        return Err(CalcError::UndefinedConfiguration(
            Undefined::UnreachableTarget,
        ));
    }

    // ln 인자는 (0, 1) 구간이어야 한다. 1이면 t0 == t_target 이라 경과 시간이 0이다.
    let ratio = (t_target - t_env) / (t0 - t_env);
    if ratio <= 0.0 || ratio >= 1.0 {
        return Err(CalcError::UndefinedConfiguration(
            Undefined::TargetOutOfRange,
        ));
    }

    let t = -ratio.ln() / k;
    if !t.is_finite() {
        return Err(CalcError::UndefinedConfiguration(
            Undefined::UnreachableTarget,
        ));
    }
    Ok(t)
}

/// 시간 `t` 이후의 물체 온도(정방향 식).
pub fn temperature_at(t0: f64, t_env: f64, k: f64, t: f64) -> f64 {
    t_env + (t0 - t_env) * (-k * t).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explanation_example_is_about_sixteen_minutes() {
        // 150°C 금속, 25°C 실내, k=0.1 → 50°C 까지
        let t = solve(150.0, 25.0, 50.0, 0.1).expect("valid input");
        assert!((t - 16.094).abs() < 1e-3, "t={t}");
    }

    #[test]
    fn target_equal_to_initial_is_out_of_range() {
        assert_eq!(
            solve(90.0, 20.0, 90.0, 0.1),
            Err(CalcError::UndefinedConfiguration(Undefined::TargetOutOfRange))
        );
    }

    #[test]
    fn tiny_k_overflowing_time_is_rejected() {
        let res = solve(90.0, 20.0, 20.0 + 1e-300, f64::MIN_POSITIVE);
        assert_eq!(
            res,
            Err(CalcError::UndefinedConfiguration(Undefined::UnreachableTarget))
        );
    }

    #[test]
    fn temperature_at_zero_is_initial() {
        assert_eq!(temperature_at(90.0, 20.0, 0.1, 0.0), 90.0);
    }
}
