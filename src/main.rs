use std::process::ExitCode;

use clap::Parser;
use temperature_converter::app::{self, Cli};

/// CLI 엔트리 포인트. 인자를 해석한 뒤 변환기를 실행한다.
fn main() -> ExitCode {
    match app::run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
