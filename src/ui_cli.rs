use std::io::{self, Write};

use crate::app::{AppError, CoolingTimeInput, KInput, Outcome, Session};
use crate::cooling::{self, parse_number, CalcError, Field, MassSource, PresetInputs, Undefined};
use crate::i18n::{keys, Translator};
use crate::material_db::{self, MaterialPreset};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CoolingTime,
    ExplainEquation,
    EstimateK,
    OpenLog,
    ClearLog,
    About,
    Exit,
}

impl MenuChoice {
    /// 메뉴 번호 문자열을 선택지로 바꾼다.
    pub fn from_selection(sel: &str) -> Option<Self> {
        match sel.trim() {
            "1" => Some(MenuChoice::CoolingTime),
            "2" => Some(MenuChoice::ExplainEquation),
            "3" => Some(MenuChoice::EstimateK),
            "4" => Some(MenuChoice::OpenLog),
            "5" => Some(MenuChoice::ClearLog),
            "6" => Some(MenuChoice::About),
            "7" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    for key in [
        keys::MAIN_MENU_COOLING_TIME,
        keys::MAIN_MENU_EXPLAIN,
        keys::MAIN_MENU_ESTIMATE_K,
        keys::MAIN_MENU_OPEN_LOG,
        keys::MAIN_MENU_CLEAR_LOG,
        keys::MAIN_MENU_ABOUT,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match MenuChoice::from_selection(&sel) {
            Some(choice) => return Ok(choice),
            None => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 냉각 시간 계산 메뉴를 처리한다.
pub fn handle_cooling_time(session: &Session) -> Result<(), AppError> {
    let tr = &session.tr;
    println!("{}", tr.t(keys::COOLING_TIME_HEADING));
    let initial = read_number(tr, Field::InitialTemperature, keys::PROMPT_INITIAL_TEMPERATURE)?;
    let ambient = read_number(tr, Field::AmbientTemperature, keys::PROMPT_AMBIENT_TEMPERATURE)?;
    let k = read_number(tr, Field::CoolingConstant, keys::PROMPT_COOLING_CONSTANT)?;
    let target = read_number(tr, Field::TargetTemperature, keys::PROMPT_TARGET_TEMPERATURE)?;

    let input = CoolingTimeInput {
        initial,
        ambient,
        target,
        k,
    };
    match session.run_cooling_time(input) {
        Ok(outcome) => {
            println!(
                "{} {} {}",
                tr.t(keys::RESULT_COOLING_TIME),
                outcome.formatted,
                session.config.time_unit
            );
            report_log_error(tr, &outcome);
        }
        Err(e) => println!("{}", describe_error(tr, &e)),
    }
    wait_enter(tr)
}

/// 냉각 시간 공식 설명을 보여준다.
pub fn handle_explain(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::EXPLAIN_TEXT));
    // 설명 예제를 같은 계산 경로로 다시 확인해 보여준다.
    if let Ok(t) = cooling::solve(150.0, 25.0, 50.0, 0.1) {
        let back = cooling::temperature_at(150.0, 25.0, 0.1, t);
        println!("\nT({}) = {}", cooling::format_fixed(t, 2), cooling::format_fixed(back, 2));
    }
    wait_enter(tr)
}

/// 재료/크기 기반 k 추정 메뉴를 처리한다.
pub fn handle_estimate_k(session: &Session) -> Result<(), AppError> {
    let tr = &session.tr;
    println!("{}", tr.t(keys::ESTIMATE_HEADING));
    let presets = material_db::materials();
    for (i, m) in presets.iter().enumerate() {
        println!("{}", preset_line(i + 1, m));
    }
    let custom_no = presets.len() + 1;
    println!("{custom_no}) {}", tr.t(keys::ESTIMATE_CUSTOM_OPTION));

    let sel = read_line(tr.t(keys::PROMPT_MATERIAL))?;
    let sel = sel.trim();
    let preset_name = match sel.parse::<usize>() {
        Ok(n) if n == custom_no => None,
        Ok(n) if (1..custom_no).contains(&n) => Some(presets[n - 1].code.to_string()),
        _ => Some(sel.to_string()),
    };

    let input = match preset_name {
        Some(name) => {
            // 알 수 없는 재료명은 값을 더 묻기 전에 알린다.
            let Some(material) = material_db::find_material(&name) else {
                println!("{}", describe_error(tr, &CalcError::UnknownPreset(name)));
                return wait_enter(tr);
            };
            println!(
                "{} {} ({} J/kg·K, h = {} W/m²·K)",
                tr.t(keys::ESTIMATE_USING_PRESET),
                material.name,
                material.c_j_kgk,
                material.h_w_m2k
            );
            let h_override = read_optional_number(tr, Field::HeatTransferCoeff)?;
            let area_m2 = read_number(tr, Field::SurfaceArea, keys::PROMPT_AREA)?;
            let mass = loop {
                let mode = read_line(tr.t(keys::PROMPT_MASS_MODE))?;
                match mode.trim() {
                    "1" => break MassSource::Mass(read_number(tr, Field::Mass, keys::PROMPT_MASS)?),
                    "2" => {
                        break MassSource::Volume(read_number(tr, Field::Volume, keys::PROMPT_VOLUME)?)
                    }
                    _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
                }
            };
            KInput::Preset {
                name,
                inputs: PresetInputs {
                    area_m2,
                    mass,
                    h_override,
                },
            }
        }
        None => {
            println!("{}", tr.t(keys::ESTIMATE_CUSTOM_SELECTED));
            let c = read_number(tr, Field::SpecificHeat, keys::PROMPT_SPECIFIC_HEAT)?;
            let h = read_number(tr, Field::HeatTransferCoeff, keys::PROMPT_HEAT_TRANSFER)?;
            let area = read_number(tr, Field::SurfaceArea, keys::PROMPT_AREA)?;
            let mass = read_number(tr, Field::Mass, keys::PROMPT_MASS)?;
            KInput::Custom { h, area, mass, c }
        }
    };

    if !confirm_unusual_values(tr, &input)? {
        println!("{}", tr.t(keys::ESTIMATE_CANCELLED));
        return wait_enter(tr);
    }

    match session.run_k_estimate(&input) {
        Ok(outcome) => {
            println!(
                "{} {} 1/s",
                tr.t(keys::RESULT_COOLING_CONSTANT),
                outcome.formatted
            );
            report_log_error(tr, &outcome);
        }
        Err(e) => println!("{}", describe_error(tr, &e)),
    }
    wait_enter(tr)
}

fn preset_line(no: usize, m: &MaterialPreset) -> String {
    format!("{no}) {} (c = {} J/kg·K, {})", m.name, m.c_j_kgk, m.notes)
}

fn confirm_unusual_values(tr: &Translator, input: &KInput) -> Result<bool, AppError> {
    let (h, area, mass) = match input {
        KInput::Custom { h, area, mass, .. } => (*h, *area, *mass),
        KInput::Preset { name, inputs } => {
            let Some(material) = material_db::find_material(name) else {
                return Ok(true);
            };
            let mass = match inputs.mass {
                MassSource::Mass(m) => m,
                MassSource::Volume(v) => material.mass_for_volume(v),
            };
            (
                inputs.h_override.unwrap_or(material.h_w_m2k),
                inputs.area_m2,
                mass,
            )
        }
    };
    let warnings = cooling::plausibility_warnings(h, area, mass);
    if warnings.is_empty() {
        return Ok(true);
    }
    let names: Vec<&str> = warnings.iter().map(|f| f.name()).collect();
    println!("{} {}", tr.t(keys::WARNING_UNUSUAL_VALUES), names.join(", "));
    let answer = read_line(tr.t(keys::PROMPT_CONTINUE))?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}

/// 저장된 결과 로그를 보여준다.
pub fn handle_open_log(session: &Session) -> Result<(), AppError> {
    let tr = &session.tr;
    match session.log.read() {
        Ok(Some(content)) => {
            println!("{}", tr.t(keys::LOG_HEADING));
            if content.trim().is_empty() {
                println!("{}", tr.t(keys::LOG_EMPTY));
            } else {
                println!("{content}");
            }
        }
        Ok(None) => println!("{}", tr.t(keys::LOG_MISSING)),
        Err(e) => println!("{} {e}", tr.t(keys::LOG_ACCESS_FAILED)),
    }
    wait_enter(tr)
}

/// 결과 로그를 비운다.
pub fn handle_clear_log(session: &Session) -> Result<(), AppError> {
    let tr = &session.tr;
    match session.log.clear() {
        Ok(()) => println!("{}", tr.t(keys::LOG_CLEARED)),
        Err(e) => println!("{} {e}", tr.t(keys::LOG_ACCESS_FAILED)),
    }
    wait_enter(tr)
}

fn report_log_error(tr: &Translator, outcome: &Outcome) {
    if let Some(e) = &outcome.log_error {
        println!("{} {e}", tr.t(keys::LOG_SAVE_FAILED));
    }
}

/// 도움말 메뉴를 처리한다.
pub fn handle_about(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::ABOUT_HEADING));
    println!("{}", tr.t(keys::ABOUT_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let key = match sel.trim() {
        "1" => keys::ABOUT_LAW,
        "2" => keys::ABOUT_TYPICAL_VALUES,
        "3" => keys::ABOUT_ESTIMATING_K,
        _ => keys::ABOUT_INVALID,
    };
    println!("\n{}", tr.t(key));
    wait_enter(tr)
}

/// 계산 오류를 현재 언어의 한 줄 메시지로 만든다.
pub fn describe_error(tr: &Translator, err: &CalcError) -> String {
    let prefix = tr.t(keys::ERROR_PREFIX);
    match err {
        CalcError::Parse { field } => {
            format!("{prefix}: {} ({field})", tr.t(keys::ERROR_INVALID_NUMBER))
        }
        CalcError::Range { field, value } => {
            // 양수지만 범위를 벗어난 값은 곱셈 결과가 넘친 경우다.
            let key = if value.is_nan() || *value > 0.0 {
                keys::ERROR_TOO_LARGE
            } else {
                keys::ERROR_NOT_POSITIVE
            };
            format!("{prefix}: {} {field} = {value}", tr.t(key))
        }
        CalcError::UndefinedConfiguration(reason) => {
            let key = match reason {
                Undefined::NoDrivingForce => keys::ERROR_NO_DRIVING_FORCE,
                Undefined::UnreachableTarget => keys::ERROR_UNREACHABLE_TARGET,
                Undefined::TargetOutOfRange => keys::ERROR_TARGET_OUT_OF_RANGE,
            };
            format!("{prefix}: {}", tr.t(key))
        }
        CalcError::UnknownPreset(name) => {
            format!("{prefix}: {} '{name}'", tr.t(keys::ERROR_UNKNOWN_PRESET))
        }
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed").into());
    }
    Ok(buf)
}

/// 숫자로 해석될 때까지 같은 항목을 다시 묻는다.
fn read_number(tr: &Translator, field: Field, prompt_key: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(tr.t(prompt_key))?;
        match parse_number(field, &s) {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_optional_number(tr: &Translator, field: Field) -> Result<Option<f64>, AppError> {
    loop {
        let s = read_line(tr.t(keys::PROMPT_HEAT_TRANSFER_PRESET))?;
        if s.trim().is_empty() {
            return Ok(None);
        }
        match parse_number(field, &s) {
            Ok(v) => return Ok(Some(v)),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn wait_enter(tr: &Translator) -> Result<(), AppError> {
    read_line(tr.t(keys::PRESS_ENTER))?;
    Ok(())
}
