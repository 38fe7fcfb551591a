//! 계산 결과를 사람이 읽을 수 있는 텍스트 로그로 남긴다.
//!
//! 레코드 하나는 아래와 같은 블록이며, 성공한 계산만 기록된다.
//!
//! ```text
//! =====================================
//!  COOLING CALCULATION LOG ENTRY
//! =====================================
//! Timestamp: 2026-10-17T09:30:00+09:00
//! Mode: time
//! Input: initial_temperature = 90
//! Result: 19.46 min
//! -------------------------------------
//! ```

use chrono::{DateTime, FixedOffset, Local};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const ENTRY_RULE: &str = "=====================================";
const ENTRY_TITLE: &str = " COOLING CALCULATION LOG ENTRY";
const ENTRY_END: &str = "-------------------------------------";

/// 계산 종류. 로그에는 태그 문자열로 기록된다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcMode {
    Time,
    KEstimate,
}

impl CalcMode {
    pub fn tag(&self) -> &'static str {
        match self {
            CalcMode::Time => "time",
            CalcMode::KEstimate => "k-estimate",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim() {
            "time" => Some(CalcMode::Time),
            "k-estimate" => Some(CalcMode::KEstimate),
            _ => None,
        }
    }
}

/// 성공한 계산 하나에 대한 불변 레코드.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationRecord {
    pub timestamp: DateTime<FixedOffset>,
    pub mode: CalcMode,
    /// 입력 필드명과 표시값. 기록 순서를 유지한다.
    pub inputs: Vec<(String, String)>,
    /// 고정 자릿수로 서식화된 결과값
    pub result: String,
    pub result_unit: String,
}

impl CalculationRecord {
    /// 현재 시각으로 레코드를 만든다.
    pub fn new(
        mode: CalcMode,
        inputs: Vec<(String, String)>,
        result: String,
        result_unit: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Local::now().into(),
            mode,
            inputs,
            result,
            result_unit: result_unit.into(),
        }
    }

    fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(ENTRY_RULE);
        out.push('\n');
        out.push_str(ENTRY_TITLE);
        out.push('\n');
        out.push_str(ENTRY_RULE);
        out.push('\n');
        out.push_str(&format!("Timestamp: {}\n", self.timestamp.to_rfc3339()));
        out.push_str(&format!("Mode: {}\n", self.mode.tag()));
        for (name, value) in &self.inputs {
            out.push_str(&format!("Input: {name} = {value}\n"));
        }
        out.push_str(&format!("Result: {} {}\n", self.result, self.result_unit));
        out.push_str(ENTRY_END);
        out.push_str("\n\n");
        out
    }

    fn parse_block(block: &str) -> Result<Self, LogError> {
        let mut timestamp = None;
        let mut mode = None;
        let mut inputs = Vec::new();
        let mut result = None;

        for line in block.lines() {
            if let Some(ts) = line.strip_prefix("Timestamp: ") {
                let parsed = DateTime::parse_from_rfc3339(ts.trim())
                    .map_err(|_| LogError::Malformed(format!("timestamp '{}'", ts.trim())))?;
                timestamp = Some(parsed);
            } else if let Some(tag) = line.strip_prefix("Mode: ") {
                mode = Some(
                    CalcMode::from_tag(tag)
                        .ok_or_else(|| LogError::Malformed(format!("mode '{}'", tag.trim())))?,
                );
            } else if let Some(field) = line.strip_prefix("Input: ") {
                let (name, value) = field
                    .split_once(" = ")
                    .ok_or_else(|| LogError::Malformed(format!("input '{field}'")))?;
                inputs.push((name.to_string(), value.to_string()));
            } else if let Some(res) = line.strip_prefix("Result: ") {
                let (value, unit) = res.split_once(' ').unwrap_or((res, ""));
                result = Some((value.to_string(), unit.to_string()));
            }
        }

        let timestamp = timestamp.ok_or_else(|| LogError::Malformed("missing timestamp".into()))?;
        let mode = mode.ok_or_else(|| LogError::Malformed("missing mode".into()))?;
        let (result, result_unit) =
            result.ok_or_else(|| LogError::Malformed("missing result".into()))?;
        Ok(Self {
            timestamp,
            mode,
            inputs,
            result,
            result_unit,
        })
    }
}

/// 로그 파일 처리 중 발생 가능한 오류.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// 파일 입출력 오류
    #[error("로그 파일 입출력 오류: {0}")]
    Io(#[from] io::Error),
    /// 로그 파일 형식이 깨진 경우
    #[error("로그 파일 형식 오류: {0}")]
    Malformed(String),
}

/// 추가 전용 결과 로그 파일.
#[derive(Debug, Clone)]
pub struct ResultLog {
    path: PathBuf,
}

impl ResultLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 레코드 하나를 파일 끝에 추가한다. 파일이 없으면 만든다.
    ///
    /// 블록 전체를 버퍼에 만든 뒤 한 번의 `write_all`로 쓰므로 레코드가 부분적으로 섞이지 않는다.
    pub fn append(&self, record: &CalculationRecord) -> Result<(), LogError> {
        let block = record.render();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(block.as_bytes())?;
        file.flush()?;
        tracing::debug!(path = %self.path.display(), mode = record.mode.tag(), "log record appended");
        Ok(())
    }

    /// 로그 내용을 모두 지운다. 파일은 빈 상태로 남는다.
    pub fn clear(&self) -> Result<(), LogError> {
        File::create(&self.path)?;
        tracing::debug!(path = %self.path.display(), "log cleared");
        Ok(())
    }

    /// 화면 표시용으로 파일 내용을 읽는다. 파일이 없으면 None.
    pub fn read(&self) -> Result<Option<String>, LogError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// 로그를 레코드 목록으로 다시 읽는다.
    pub fn records(&self) -> Result<Vec<CalculationRecord>, LogError> {
        let Some(content) = self.read()? else {
            return Ok(Vec::new());
        };
        content
            .split(ENTRY_END)
            .filter(|block| block.contains("Timestamp: "))
            .map(CalculationRecord::parse_block)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rendered_block_parses_back() {
        let record = CalculationRecord::new(
            CalcMode::KEstimate,
            vec![
                ("material".into(), "Steel".into()),
                ("mass_m".into(), "2".into()),
            ],
            "0.00556".into(),
            "1/s",
        );
        let parsed = CalculationRecord::parse_block(&record.render()).expect("parse");
        assert_eq!(parsed.mode, CalcMode::KEstimate);
        assert_eq!(parsed.inputs, record.inputs);
        assert_eq!(parsed.result, "0.00556");
        assert_eq!(parsed.result_unit, "1/s");
        assert_eq!(parsed.timestamp.timestamp(), record.timestamp.timestamp());
    }

    #[test]
    fn unknown_mode_tag_is_malformed() {
        let block = "Timestamp: 2026-10-17T09:30:00+09:00\nMode: graph\nResult: 1 s\n";
        assert!(matches!(
            CalculationRecord::parse_block(block),
            Err(LogError::Malformed(_))
        ));
    }
}
