use std::io;
use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;
use tracing::info;

use crate::config::{self, Config, OutputFormat};
use crate::conversion::{self, ConversionError};
use crate::logging;
use crate::ui_cli;
use crate::units::TemperatureUnit;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일/터미널 입출력 오류
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// 설정 저장/로드 오류
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
    /// 입력 해석 또는 변환 오류
    #[error("{0}")]
    Conversion(#[from] ConversionError),
    /// 결과 직렬화 오류
    #[error("failed to render result: {0}")]
    Render(#[from] toml::ser::Error),
}

/// 명령행 인자.
#[derive(Debug, Parser)]
#[command(
    name = "temperature_converter_cli",
    version,
    about = "Convert a temperature between Celsius, Fahrenheit and Kelvin"
)]
pub struct Cli {
    /// Temperature to convert. Without it the converter asks interactively.
    #[arg(allow_negative_numbers = true)]
    pub value: Option<String>,

    /// Unit of VALUE (C, F or K). Defaults to the configured unit.
    #[arg(short, long, value_parser = parse_unit)]
    pub from: Option<TemperatureUnit>,

    /// Unit to highlight in the result (C, F or K). Defaults to the configured unit.
    #[arg(short, long, value_parser = parse_unit)]
    pub to: Option<TemperatureUnit>,

    /// Output format.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to config.toml.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn parse_unit(s: &str) -> Result<TemperatureUnit, String> {
    s.parse::<TemperatureUnit>().map_err(|e| e.to_string())
}

/// 명령행 인자와 설정을 합친 실행 조건.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    pub from: TemperatureUnit,
    pub to: TemperatureUnit,
    pub format: OutputFormat,
}

impl RunOptions {
    /// 인자로 주지 않은 항목은 설정 값으로 채운다.
    pub fn resolve(cli: &Cli, cfg: &Config) -> Self {
        Self {
            from: cli.from.unwrap_or(cfg.default_from),
            to: cli.to.unwrap_or(cfg.default_to),
            format: cli.format.unwrap_or(cfg.output_format),
        }
    }
}

/// CLI 애플리케이션을 실행한다. 값이 주어지면 한 번 변환하고, 없으면 대화형으로 동작한다.
pub fn run(cli: Cli) -> Result<(), AppError> {
    let cfg = match &cli.config {
        Some(path) => config::load_from(path)?,
        None => config::load_or_default()?,
    };
    logging::init_tracing(&cfg.log_filter);
    let opts = RunOptions::resolve(&cli, &cfg);
    info!(from = %opts.from, to = %opts.to, format = ?opts.format, "starting converter");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.value.as_deref() {
        Some(text) => {
            let value = conversion::parse_input(text)?;
            let table = conversion::convert_for_display(value, opts.from, opts.to)?;
            ui_cli::write_table(&mut out, &table, opts.format)?;
        }
        None => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            ui_cli::run_interactive(&mut input, &mut out, opts.from, opts.to, opts.format)?;
        }
    }
    Ok(())
}
