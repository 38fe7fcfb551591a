use crate::config::{Config, ConfigError};
use crate::cooling::{self, format_fixed, CalcError, Field, MassSource, PresetInputs};
use crate::i18n::{self, Translator};
use crate::result_log::{CalcMode, CalculationRecord, LogError, ResultLog};
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 콘솔 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
}

/// 성공한 계산의 결과. 로그 저장이 실패해도 결과는 버리지 않는다.
#[derive(Debug)]
pub struct Outcome {
    pub value: f64,
    /// 화면과 로그에 같이 쓰는 문자열
    pub formatted: String,
    /// 로그 기록 실패 시의 오류
    pub log_error: Option<LogError>,
}

/// 냉각 시간 계산 입력.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoolingTimeInput {
    pub initial: f64,
    pub ambient: f64,
    pub target: f64,
    pub k: f64,
}

/// 냉각 상수 추정 입력. 프리셋 또는 모든 값을 직접 입력한다.
#[derive(Debug, Clone, PartialEq)]
pub enum KInput {
    Preset { name: String, inputs: PresetInputs },
    Custom { h: f64, area: f64, mass: f64, c: f64 },
}

/// 핸들러들이 공유하는 실행 컨텍스트. 전역 상태 대신 명시적으로 전달한다.
#[derive(Debug)]
pub struct Session {
    pub config: Config,
    pub tr: Translator,
    pub log: ResultLog,
}

impl Session {
    pub fn new(config: Config, tr: Translator) -> Self {
        let log = ResultLog::new(config.log_path.clone());
        Self { config, tr, log }
    }

    /// 냉각 시간을 계산하고 성공한 경우에만 로그에 남긴다.
    pub fn run_cooling_time(&self, input: CoolingTimeInput) -> Result<Outcome, CalcError> {
        let t = match cooling::solve(input.initial, input.ambient, input.target, input.k) {
            Ok(t) => t,
            Err(e) => {
                tracing::warn!(error = %e, "cooling time rejected");
                return Err(e);
            }
        };
        let formatted = format_fixed(t, self.config.time_decimals);
        let record = CalculationRecord::new(
            CalcMode::Time,
            vec![
                field_entry(Field::InitialTemperature, input.initial),
                field_entry(Field::AmbientTemperature, input.ambient),
                field_entry(Field::CoolingConstant, input.k),
                field_entry(Field::TargetTemperature, input.target),
            ],
            formatted.clone(),
            self.config.time_unit.clone(),
        );
        tracing::info!(time = t, unit = %self.config.time_unit, "cooling time computed");
        Ok(self.record(t, formatted, &record))
    }

    /// 냉각 상수를 추정하고 성공한 경우에만 로그에 남긴다.
    pub fn run_k_estimate(&self, input: &KInput) -> Result<Outcome, CalcError> {
        let outcome = match input {
            KInput::Preset { name, inputs } => {
                cooling::estimate_from_preset(name, inputs).map(|est| {
                    let mut fields = vec![("material".to_string(), est.material.name.to_string())];
                    fields.push(field_entry(Field::HeatTransferCoeff, est.h_w_m2k));
                    fields.push(field_entry(Field::SurfaceArea, est.area_m2));
                    if let MassSource::Volume(v) = inputs.mass {
                        fields.push(field_entry(Field::Volume, v));
                    }
                    fields.push(field_entry(Field::Mass, est.mass_kg));
                    fields.push(field_entry(Field::SpecificHeat, est.c_j_kgk));
                    (est.k, fields)
                })
            }
            KInput::Custom { h, area, mass, c } => {
                cooling::estimate(*h, *area, *mass, *c).map(|k| {
                    let fields = vec![
                        ("material".to_string(), "custom".to_string()),
                        field_entry(Field::HeatTransferCoeff, *h),
                        field_entry(Field::SurfaceArea, *area),
                        field_entry(Field::Mass, *mass),
                        field_entry(Field::SpecificHeat, *c),
                    ];
                    (k, fields)
                })
            }
        };
        let (k, fields) = match outcome {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(error = %e, "k estimate rejected");
                return Err(e);
            }
        };
        let formatted = format_fixed(k, self.config.k_decimals);
        let record = CalculationRecord::new(CalcMode::KEstimate, fields, formatted.clone(), "1/s");
        tracing::info!(k, "cooling constant estimated");
        Ok(self.record(k, formatted, &record))
    }

    fn record(&self, value: f64, formatted: String, record: &CalculationRecord) -> Outcome {
        let log_error = self.log.append(record).err();
        if let Some(e) = &log_error {
            tracing::warn!(error = %e, path = %self.log.path().display(), "result not logged");
        }
        Outcome {
            value,
            formatted,
            log_error,
        }
    }
}

fn field_entry(field: Field, value: f64) -> (String, String) {
    (field.name().to_string(), value.to_string())
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(session: &Session) -> Result<(), AppError> {
    println!("{}", session.tr.t(i18n::keys::BANNER));
    loop {
        match ui_cli::main_menu(&session.tr)? {
            MenuChoice::CoolingTime => ui_cli::handle_cooling_time(session)?,
            MenuChoice::ExplainEquation => ui_cli::handle_explain(&session.tr)?,
            MenuChoice::EstimateK => ui_cli::handle_estimate_k(session)?,
            MenuChoice::OpenLog => ui_cli::handle_open_log(session)?,
            MenuChoice::ClearLog => ui_cli::handle_clear_log(session)?,
            MenuChoice::About => ui_cli::handle_about(&session.tr)?,
            MenuChoice::Exit => {
                println!("{}", session.tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
