//! 결과 로그 파일 계약 테스트.
use chrono::DateTime;
use cooling_time_calculator::app::{CoolingTimeInput, KInput, Session};
use cooling_time_calculator::config::Config;
use cooling_time_calculator::cooling::{CalcError, MassSource, PresetInputs};
use cooling_time_calculator::i18n::Translator;
use cooling_time_calculator::result_log::{CalcMode, CalculationRecord, ResultLog};
use std::fs;

fn session_in(dir: &tempfile::TempDir) -> Session {
    let config = Config {
        log_path: dir.path().join("cooling_log.txt"),
        ..Config::default()
    };
    Session::new(config, Translator::new("en"))
}

#[test]
fn append_creates_missing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let log = ResultLog::new(dir.path().join("nested_missing.txt"));
    assert_eq!(log.read().expect("read"), None);

    let record = CalculationRecord::new(
        CalcMode::Time,
        vec![("initial_temperature".into(), "90".into())],
        "19.46".into(),
        "min",
    );
    log.append(&record).expect("append");

    let content = log.read().expect("read").expect("file exists");
    assert!(content.contains("Mode: time"));
    assert!(content.contains("Input: initial_temperature = 90"));
    assert!(content.contains("Result: 19.46 min"));
}

#[test]
fn only_successful_calculations_are_logged() {
    let dir = tempfile::tempdir().expect("tempdir");
    let session = session_in(&dir);

    let good_time = CoolingTimeInput {
        initial: 90.0,
        ambient: 20.0,
        target: 30.0,
        k: 0.1,
    };
    let bad_time = CoolingTimeInput {
        initial: 20.0,
        ambient: 20.0,
        target: 30.0,
        k: 0.1,
    };
    let good_k = KInput::Custom {
        h: 10.0,
        area: 0.5,
        mass: 2.0,
        c: 450.0,
    };
    let bad_k = KInput::Preset {
        name: "unobtainium".into(),
        inputs: PresetInputs {
            area_m2: 0.5,
            mass: MassSource::Mass(2.0),
            h_override: None,
        },
    };

    let mut expected_modes = Vec::new();
    for round in 0..3 {
        let outcome = session.run_cooling_time(good_time).expect("valid");
        assert_eq!(outcome.formatted, "19.46");
        assert!(outcome.log_error.is_none());
        expected_modes.push(CalcMode::Time);

        assert!(matches!(
            session.run_cooling_time(bad_time),
            Err(CalcError::UndefinedConfiguration(_))
        ));

        if round != 1 {
            let outcome = session.run_k_estimate(&good_k).expect("valid");
            assert!((outcome.value - 5.0 / 900.0).abs() < 1e-15);
            assert_eq!(outcome.formatted, "0.00556");
            expected_modes.push(CalcMode::KEstimate);
        }

        assert!(matches!(
            session.run_k_estimate(&bad_k),
            Err(CalcError::UnknownPreset(_))
        ));
    }

    let records = session.log.records().expect("parse log");
    assert_eq!(records.len(), 5);
    let modes: Vec<CalcMode> = records.iter().map(|r| r.mode).collect();
    assert_eq!(modes, expected_modes);

    let raw = session.log.read().expect("read").expect("exists");
    for line in raw.lines().filter(|l| l.starts_with("Timestamp: ")) {
        let ts = line.trim_start_matches("Timestamp: ");
        assert!(DateTime::parse_from_rfc3339(ts).is_ok(), "bad timestamp {ts}");
    }
    for line in raw.lines().filter(|l| l.starts_with("Mode: ")) {
        let tag = line.trim_start_matches("Mode: ");
        assert!(tag == "time" || tag == "k-estimate", "bad tag {tag}");
    }
}

#[test]
fn record_keeps_named_inputs_in_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let session = session_in(&dir);
    session
        .run_cooling_time(CoolingTimeInput {
            initial: 150.0,
            ambient: 25.0,
            target: 50.0,
            k: 0.1,
        })
        .expect("valid");

    let records = session.log.records().expect("parse");
    let names: Vec<&str> = records[0].inputs.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "initial_temperature",
            "ambient_temperature",
            "cooling_constant_k",
            "target_temperature"
        ]
    );
    assert_eq!(records[0].result, "16.09");
    assert_eq!(records[0].result_unit, "min");
}

#[test]
fn clear_leaves_empty_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let session = session_in(&dir);
    session
        .run_k_estimate(&KInput::Custom {
            h: 10.0,
            area: 0.5,
            mass: 2.0,
            c: 450.0,
        })
        .expect("valid");
    assert_eq!(session.log.records().expect("parse").len(), 1);

    session.log.clear().expect("clear");
    let path = session.log.path();
    assert!(path.exists());
    assert_eq!(fs::read_to_string(path).expect("read"), "");
    assert!(session.log.records().expect("parse").is_empty());
}

#[test]
fn clear_creates_file_when_absent() {
    let dir = tempfile::tempdir().expect("tempdir");
    let log = ResultLog::new(dir.path().join("fresh.txt"));
    log.clear().expect("clear");
    assert_eq!(log.read().expect("read"), Some(String::new()));
}

#[test]
fn configured_precision_is_applied() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = Config {
        log_path: dir.path().join("log.txt"),
        time_decimals: 4,
        time_unit: "s".into(),
        ..Config::default()
    };
    let session = Session::new(config, Translator::new("en"));
    let out = session
        .run_cooling_time(CoolingTimeInput {
            initial: 90.0,
            ambient: 20.0,
            target: 30.0,
            k: 0.1,
        })
        .expect("valid");
    assert_eq!(out.formatted, "19.4591");
    let records = session.log.records().expect("parse");
    assert_eq!(records[0].result_unit, "s");
}

#[test]
fn unwritable_log_keeps_the_result() {
    let dir = tempfile::tempdir().expect("tempdir");
    // 디렉터리는 로그 파일로 열 수 없다.
    let config = Config {
        log_path: dir.path().to_path_buf(),
        ..Config::default()
    };
    let session = Session::new(config, Translator::new("en"));

    let time = session
        .run_cooling_time(CoolingTimeInput {
            initial: 90.0,
            ambient: 20.0,
            target: 30.0,
            k: 0.1,
        })
        .expect("calculation itself succeeds");
    assert_eq!(time.formatted, "19.46");
    assert!(time.log_error.is_some());

    let k = session
        .run_k_estimate(&KInput::Custom {
            h: 10.0,
            area: 0.5,
            mass: 2.0,
            c: 450.0,
        })
        .expect("calculation itself succeeds");
    assert_eq!(k.formatted, "0.00556");
    assert!(k.log_error.is_some());

    assert!(session.log.read().is_err());
    assert!(session.log.clear().is_err());
}
