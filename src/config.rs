use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cooling::{DEFAULT_K_DECIMALS, DEFAULT_TIME_DECIMALS, MAX_DECIMALS};

/// 애플리케이션 설정을 표현한다. 파일에 없는 키는 기본값으로 채운다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드(auto/en/ko)
    pub language: String,
    /// 언어팩(TOML) 디렉터리
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_pack_dir: Option<String>,
    /// 결과 로그 파일 경로
    pub log_path: PathBuf,
    /// 냉각 상수 k의 시간 단위 표기(k가 1/min이면 "min")
    pub time_unit: String,
    /// 냉각 시간 결과 소수 자릿수
    pub time_decimals: usize,
    /// 냉각 상수 결과 소수 자릿수
    pub k_decimals: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            language_pack_dir: None,
            log_path: PathBuf::from("cooling_log.txt"),
            time_unit: "min".to_string(),
            time_decimals: DEFAULT_TIME_DECIMALS,
            k_decimals: DEFAULT_K_DECIMALS,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let mut cfg: Config = toml::from_str(&content)?;
        cfg.clamp_decimals();
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        tracing::debug!(path = %path.display(), "default config written");
        Ok(cfg)
    }
}

impl Config {
    /// 소수 자릿수를 [`MAX_DECIMALS`] 이하로 제한한다.
    pub fn clamp_decimals(&mut self) {
        for (key, value) in [
            ("time_decimals", &mut self.time_decimals),
            ("k_decimals", &mut self.k_decimals),
        ] {
            if *value > MAX_DECIMALS {
                tracing::warn!(key, value = *value, max = MAX_DECIMALS, "decimals clamped");
                *value = MAX_DECIMALS;
            }
        }
    }

    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
