use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const PRESS_ENTER: &str = "general.press_enter";
    pub const BANNER: &str = "general.banner";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_COOLING_TIME: &str = "main_menu.cooling_time";
    pub const MAIN_MENU_EXPLAIN: &str = "main_menu.explain";
    pub const MAIN_MENU_ESTIMATE_K: &str = "main_menu.estimate_k";
    pub const MAIN_MENU_OPEN_LOG: &str = "main_menu.open_log";
    pub const MAIN_MENU_CLEAR_LOG: &str = "main_menu.clear_log";
    pub const MAIN_MENU_ABOUT: &str = "main_menu.about";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const COOLING_TIME_HEADING: &str = "cooling_time.heading";
    pub const PROMPT_INITIAL_TEMPERATURE: &str = "prompt.initial_temperature";
    pub const PROMPT_AMBIENT_TEMPERATURE: &str = "prompt.ambient_temperature";
    pub const PROMPT_COOLING_CONSTANT: &str = "prompt.cooling_constant";
    pub const PROMPT_TARGET_TEMPERATURE: &str = "prompt.target_temperature";
    pub const RESULT_COOLING_TIME: &str = "result.cooling_time";

    pub const EXPLAIN_TEXT: &str = "explain.text";

    pub const ESTIMATE_HEADING: &str = "estimate.heading";
    pub const ESTIMATE_CUSTOM_OPTION: &str = "estimate.custom_option";
    pub const PROMPT_MATERIAL: &str = "prompt.material";
    pub const ESTIMATE_USING_PRESET: &str = "estimate.using_preset";
    pub const ESTIMATE_CUSTOM_SELECTED: &str = "estimate.custom_selected";
    pub const PROMPT_SPECIFIC_HEAT: &str = "prompt.specific_heat";
    pub const PROMPT_HEAT_TRANSFER: &str = "prompt.heat_transfer";
    pub const PROMPT_HEAT_TRANSFER_PRESET: &str = "prompt.heat_transfer_preset";
    pub const PROMPT_AREA: &str = "prompt.area";
    pub const PROMPT_MASS_MODE: &str = "prompt.mass_mode";
    pub const PROMPT_MASS: &str = "prompt.mass";
    pub const PROMPT_VOLUME: &str = "prompt.volume";
    pub const WARNING_UNUSUAL_VALUES: &str = "warning.unusual_values";
    pub const PROMPT_CONTINUE: &str = "prompt.continue";
    pub const ESTIMATE_CANCELLED: &str = "estimate.cancelled";
    pub const RESULT_COOLING_CONSTANT: &str = "result.cooling_constant";

    pub const LOG_HEADING: &str = "log.heading";
    pub const LOG_EMPTY: &str = "log.empty";
    pub const LOG_MISSING: &str = "log.missing";
    pub const LOG_CLEARED: &str = "log.cleared";
    pub const LOG_SAVE_FAILED: &str = "log.save_failed";
    pub const LOG_ACCESS_FAILED: &str = "log.access_failed";

    pub const ABOUT_HEADING: &str = "about.heading";
    pub const ABOUT_OPTIONS: &str = "about.options";
    pub const ABOUT_LAW: &str = "about.law";
    pub const ABOUT_TYPICAL_VALUES: &str = "about.typical_values";
    pub const ABOUT_ESTIMATING_K: &str = "about.estimating_k";
    pub const ABOUT_INVALID: &str = "about.invalid";

    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const ERROR_NOT_POSITIVE: &str = "error.not_positive";
    pub const ERROR_TOO_LARGE: &str = "error.too_large";
    pub const ERROR_NO_DRIVING_FORCE: &str = "error.no_driving_force";
    pub const ERROR_UNREACHABLE_TARGET: &str = "error.unreachable_target";
    pub const ERROR_TARGET_OUT_OF_RANGE: &str = "error.target_out_of_range";
    pub const ERROR_UNKNOWN_PRESET: &str = "error.unknown_preset";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir.and_then(|dir| load_overrides(dir, lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 번역을 가져온다. 언어팩 → 선택 언어 → 영어 순으로 찾는다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v.as_str();
        }
        match self.lang {
            Language::Ko => ko(key).unwrap_or_else(|| en(key)),
            Language::En => en(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    for var in ["LC_ALL", "LANG"] {
        if let Ok(lang) = std::env::var(var) {
            if let Some(code) = normalize_locale_string(&lang) {
                return Some(code);
            }
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [section] 아래 key = "value".
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    tracing::debug!(dir, lang, "no language pack found, using built-in strings");
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다 . . .",
        PRESS_ENTER => "\n엔터를 누르면 메뉴로 돌아갑니다...",
        BANNER => concat!(
            "\n+----------------------------------------+\n",
            "|         냉각 시간 계산기 v1.0          |\n",
            "|           뉴턴의 냉각 법칙             |\n",
            "+----------------------------------------+"
        ),
        MAIN_MENU_TITLE => "\n=== 메인 메뉴 ===",
        MAIN_MENU_COOLING_TIME => "1) 냉각 시간 계산",
        MAIN_MENU_EXPLAIN => "2) 냉각 시간 공식 알아보기",
        MAIN_MENU_ESTIMATE_K => "3) 재료와 크기로 k 추정",
        MAIN_MENU_OPEN_LOG => "4) 저장된 결과 보기",
        MAIN_MENU_CLEAR_LOG => "5) 로그 파일 비우기",
        MAIN_MENU_ABOUT => "6) 도움말",
        MAIN_MENU_EXIT => "7) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택 (1-7): ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 1~7 사이 번호를 선택하세요.",
        COOLING_TIME_HEADING => "\n-- 냉각 시간 계산 --",
        PROMPT_INITIAL_TEMPERATURE => "물체 초기 온도: ",
        PROMPT_AMBIENT_TEMPERATURE => "주변 온도: ",
        PROMPT_COOLING_CONSTANT => "냉각 상수 k: ",
        PROMPT_TARGET_TEMPERATURE => "목표 온도: ",
        RESULT_COOLING_TIME => "예상 냉각 시간:",
        ESTIMATE_HEADING => "\n-- 재료와 크기로 k 추정 --",
        ESTIMATE_CUSTOM_OPTION => "사용자 정의 (모든 값 직접 입력)",
        PROMPT_MATERIAL => "재료 선택 (번호 또는 이름): ",
        ESTIMATE_USING_PRESET => "프리셋 사용:",
        ESTIMATE_CUSTOM_SELECTED => "사용자 정의 재료를 선택했습니다.",
        PROMPT_SPECIFIC_HEAT => "비열 c [J/(kg·K)]: ",
        PROMPT_HEAT_TRANSFER => "대류 열전달계수 h [W/(m²·K)]: ",
        PROMPT_HEAT_TRANSFER_PRESET => "대류 열전달계수 h [W/(m²·K)] (엔터=프리셋 값): ",
        PROMPT_AREA => "표면적 A [m²]: ",
        PROMPT_MASS_MODE => "질량 입력 방식 (1=질량, 2=체적): ",
        PROMPT_MASS => "질량 m [kg]: ",
        PROMPT_VOLUME => "체적 V [m³]: ",
        WARNING_UNUSUAL_VALUES => "경고: 일부 값이 비정상적으로 큽니다:",
        PROMPT_CONTINUE => "계속할까요? (y/n): ",
        ESTIMATE_CANCELLED => "계산을 취소했습니다.",
        RESULT_COOLING_CONSTANT => "추정 냉각 상수 k =",
        LOG_HEADING => "\n----- 저장된 냉각 로그 -----\n",
        LOG_EMPTY => "로그 파일이 비어 있습니다.",
        LOG_MISSING => "로그 파일이 없습니다. 먼저 계산을 실행하세요.",
        LOG_CLEARED => "로그 파일을 비웠습니다.",
        LOG_SAVE_FAILED => "결과를 로그 파일에 저장하지 못했습니다:",
        LOG_ACCESS_FAILED => "로그 파일에 접근할 수 없습니다:",
        ABOUT_HEADING => "\n-- 도움말 --",
        ABOUT_OPTIONS => "1) 냉각 법칙이란?  2) h, A, m, c 대표값  3) 냉각 상수 추정 방법",
        ABOUT_INVALID => "잘못된 선택입니다. 메뉴로 돌아갑니다.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        ERROR_NOT_POSITIVE => "값은 0보다 커야 합니다:",
        ERROR_TOO_LARGE => "값이 너무 커서 계산할 수 없습니다:",
        ERROR_NO_DRIVING_FORCE => "초기 온도와 주변 온도가 같아 냉각 시간이 정의되지 않습니다.",
        ERROR_UNREACHABLE_TARGET => "목표 온도가 주변 온도와 같습니다. 물체는 주변 온도에 정확히 도달하지 않습니다.",
        ERROR_TARGET_OUT_OF_RANGE => "목표 온도는 초기 온도와 주변 온도 사이에 있어야 합니다.",
        ERROR_UNKNOWN_PRESET => "알 수 없는 재료:",
        _ => return None,
    })
}

fn en(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting program . . .",
        PRESS_ENTER => "\nPress Enter to return to the menu...",
        BANNER => concat!(
            "\n+----------------------------------------+\n",
            "|      COOLING TIME CALCULATOR v1.0      |\n",
            "|        Newton's Law of Cooling         |\n",
            "+----------------------------------------+"
        ),
        MAIN_MENU_TITLE => "\n=== MAIN MENU ===",
        MAIN_MENU_COOLING_TIME => "1) Calculate Estimated Cooling Time",
        MAIN_MENU_EXPLAIN => "2) Learn Cooling Time Equation",
        MAIN_MENU_ESTIMATE_K => "3) Estimate k from Material and Size",
        MAIN_MENU_OPEN_LOG => "4) Open Saved Results File",
        MAIN_MENU_CLEAR_LOG => "5) Clear Log File",
        MAIN_MENU_ABOUT => "6) About Menu",
        MAIN_MENU_EXIT => "7) Exit Program",
        PROMPT_MENU_SELECT => "Choose an option (1-7): ",
        PROMPT_SELECT => "Select an option: ",
        INVALID_SELECTION_RETRY => "Invalid choice. Please enter a number between 1 and 7.",
        COOLING_TIME_HEADING => "\n-- Cooling Time Calculator --",
        PROMPT_INITIAL_TEMPERATURE => "Initial temperature of object: ",
        PROMPT_AMBIENT_TEMPERATURE => "Environment temperature: ",
        PROMPT_COOLING_CONSTANT => "Cooling constant k: ",
        PROMPT_TARGET_TEMPERATURE => "Target temperature you want to reach: ",
        RESULT_COOLING_TIME => "The estimated cooling time of your object is",
        EXPLAIN_TEXT => EXPLAIN_EN,
        ESTIMATE_HEADING => "\n-- Estimate k from Material & Size --",
        ESTIMATE_CUSTOM_OPTION => "Custom (you enter everything)",
        PROMPT_MATERIAL => "Choose a material (number or name): ",
        ESTIMATE_USING_PRESET => "Using preset:",
        ESTIMATE_CUSTOM_SELECTED => "Custom material selected.",
        PROMPT_SPECIFIC_HEAT => "Specific heat capacity c [J/(kg·K)]: ",
        PROMPT_HEAT_TRANSFER => "Convective heat transfer coefficient h [W/(m²·K)]: ",
        PROMPT_HEAT_TRANSFER_PRESET => {
            "Convective heat transfer coefficient h [W/(m²·K)] (Enter = preset value): "
        }
        PROMPT_AREA => "Surface area A [m²]: ",
        PROMPT_MASS_MODE => "Mass input (1=mass, 2=volume): ",
        PROMPT_MASS => "Mass m [kg]: ",
        PROMPT_VOLUME => "Volume V [m³]: ",
        WARNING_UNUSUAL_VALUES => "Warning: one or more values are unusually high:",
        PROMPT_CONTINUE => "Continue anyway? (y/n): ",
        ESTIMATE_CANCELLED => "Calculation cancelled.",
        RESULT_COOLING_CONSTANT => "Estimated cooling constant k =",
        LOG_HEADING => "\n----- Saved Cooling Log -----\n",
        LOG_EMPTY => "Log file is empty.",
        LOG_MISSING => "No log file found. Run a calculation first.",
        LOG_CLEARED => "Log file cleared.",
        LOG_SAVE_FAILED => "Could not save the result to the log file:",
        LOG_ACCESS_FAILED => "Could not access the log file:",
        ABOUT_HEADING => "\n-- About / Help --",
        ABOUT_OPTIONS => {
            "1) What is the Law of Cooling?  2) Typical values for h, A, m, c  3) How is k estimated?"
        }
        ABOUT_LAW => ABOUT_LAW_EN,
        ABOUT_TYPICAL_VALUES => ABOUT_TYPICAL_VALUES_EN,
        ABOUT_ESTIMATING_K => ABOUT_ESTIMATING_K_EN,
        ABOUT_INVALID => "Invalid choice. Returning to menu.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        ERROR_NOT_POSITIVE => "Value must be greater than zero:",
        ERROR_TOO_LARGE => "Value is too large to compute with:",
        ERROR_NO_DRIVING_FORCE => {
            "Initial and environment temperatures are equal; cooling time is undefined."
        }
        ERROR_UNREACHABLE_TARGET => {
            "Target equals the environment temperature; the object never reaches it exactly."
        }
        ERROR_TARGET_OUT_OF_RANGE => {
            "Target temperature must lie between the initial and environment temperatures."
        }
        ERROR_UNKNOWN_PRESET => "Unknown material:",
        _ => "[missing translation]",
    }
}

const EXPLAIN_EN: &str = "\
------------------------------
   Newton's Law of Cooling
------------------------------

T(t) = T_env + (T0 - T_env) * e^(-k * t)

T(t)  = temperature of the object at time t
T_env = temperature of the environment (the object approaches this)
T0    = initial temperature
k     = cooling constant (1/time)

An object cools faster when it is very hot and slower as it gets
closer to the room temperature.

Engineers usually want the opposite question answered: how long until
the object reaches a given temperature? Solving for t:

t = -(1 / k) * ln((T_target - T_env) / (T0 - T_env))

Example: a metal block at 150, a room at 25, k = 0.1, target 50:

t = -(1 / 0.1) * ln((50 - 25) / (150 - 25))
  = -10 * ln(0.2)
  = 16.09

The same formula covers heating: an object colder than its
surroundings warms toward T_env.";

const ABOUT_LAW_EN: &str = "\
Newton's Law of Cooling describes how quickly an object changes temperature
when placed in an environment with a different temperature.

The cooling rate is proportional to the difference between the object's
temperature and the surrounding temperature. A hot object in a cool room
cools quickly at first, then slower as it approaches room temperature.";

const ABOUT_TYPICAL_VALUES_EN: &str = "\
Convective heat transfer coefficient (h):
- Air (natural convection): 5-25 W/(m²·K)
- Air (fan/wind): 10-200 W/(m²·K)
- Water (moving): 50-10000 W/(m²·K)

Surface area (A):
- Small objects: 0.001-0.1 m²
- Medium objects: 0.1-2 m²
- Large objects: 2-10 m²

Mass (m):
- Small objects: 0.01-1 kg
- Medium objects: 1-20 kg
- Large objects: 20-200 kg

Specific heat capacity (c):
- Metals: 400-900 J/(kg·K)
- Plastics: 1000-2000 J/(kg·K)
- Wood: 1500-2500 J/(kg·K)
- Water: 4180 J/(kg·K)";

const ABOUT_ESTIMATING_K_EN: &str = "\
k = (h * A) / (m * c)

h = convective heat transfer coefficient
A = surface area
m = mass
c = specific heat capacity

Larger h or A: heat escapes faster, k increases.
Larger m or c: the object stores more heat, k decreases.
With SI inputs k is in 1/s.";
