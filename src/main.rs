use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use cooling_time_calculator::{app, config, i18n};
use tracing_subscriber::EnvFilter;

/// 뉴턴 냉각 법칙 기반 냉각 시간 계산기.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// 표시 언어 (auto/en/ko)
    #[arg(short = 'L', long, default_value = "auto")]
    lang: String,
    /// 설정 파일 경로
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
    /// 결과 로그 파일 경로 (설정 파일 값보다 우선)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    match try_run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("오류: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> Result<(), app::AppError> {
    let mut cfg = config::load_or_default(&cli.config)?;
    if let Some(path) = cli.log_file {
        cfg.log_path = path;
    }
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());
    tracing::debug!(lang = tr.language_code(), log = %cfg.log_path.display(), "starting");
    let session = app::Session::new(cfg, tr);
    app::run(&session)
}

/// 진단 로그는 stderr로 보내 대화형 프롬프트와 섞이지 않게 한다. 기본 레벨은 warn.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
