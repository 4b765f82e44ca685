use std::io::{BufRead, Write};

use serde::Serialize;
use tracing::warn;

use crate::app::AppError;
use crate::config::OutputFormat;
use crate::conversion::{self, ConversionTable};
use crate::units::TemperatureUnit;

/// 잘못된 숫자 입력 시 보여 주는 안내문.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input! Please enter a valid number.";

const UNIT_COLUMN_WIDTH: usize = 12;

/// 결과 표를 문자열로 만든다. 목표 단위 행 앞에 `>`를 붙인다.
pub fn render_table(table: &ConversionTable) -> String {
    let mut out = format!("  {:<UNIT_COLUMN_WIDTH$}{}\n", "Unit", "Temperature");
    for (unit, text, highlighted) in table.rows() {
        let marker = if highlighted { '>' } else { ' ' };
        out.push_str(&format!("{marker} {:<UNIT_COLUMN_WIDTH$}{text}\n", unit.name()));
    }
    out
}

#[derive(Serialize)]
struct TableDocument<'a> {
    source: &'static str,
    target: &'static str,
    rows: Vec<TableRow<'a>>,
}

#[derive(Serialize)]
struct TableRow<'a> {
    unit: &'static str,
    value: &'a str,
    highlighted: bool,
}

/// 결과 표를 TOML 문서로 만든다.
pub fn render_toml(table: &ConversionTable) -> Result<String, toml::ser::Error> {
    let doc = TableDocument {
        source: table.result.source().name(),
        target: table.highlighted.name(),
        rows: table
            .rows()
            .map(|(unit, value, highlighted)| TableRow {
                unit: unit.name(),
                value,
                highlighted,
            })
            .collect(),
    };
    toml::to_string(&doc)
}

/// 지정한 형식으로 결과 표를 출력한다.
pub fn write_table<W: Write>(
    out: &mut W,
    table: &ConversionTable,
    format: OutputFormat,
) -> Result<(), AppError> {
    let text = match format {
        OutputFormat::Table => render_table(table),
        OutputFormat::Toml => render_toml(table)?,
    };
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// 값과 두 단위를 반복해서 묻고 결과 표를 출력한다.
///
/// 빈 줄, `q`, 입력 끝에서 종료한다. 잘못된 숫자는 안내문만 출력하고 다시 묻는다.
pub fn run_interactive<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    default_from: TemperatureUnit,
    default_to: TemperatureUnit,
    format: OutputFormat,
) -> Result<(), AppError> {
    writeln!(out, "=== Temperature Converter ===")?;
    loop {
        let Some(line) = read_line(input, out, "Enter temperature (empty or q to quit): ")? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() || line.eq_ignore_ascii_case("q") {
            break;
        }
        let value = match conversion::parse_input(line) {
            Ok(v) => v,
            Err(err) => {
                warn!(%err, "rejected temperature input");
                writeln!(out, "{INVALID_INPUT_MESSAGE}")?;
                continue;
            }
        };
        let from = read_temperature_unit(input, out, "From unit", default_from)?;
        let to = read_temperature_unit(input, out, "To unit", default_to)?;
        match conversion::convert_for_display(value, from, to) {
            Ok(table) => write_table(out, &table, format)?,
            Err(err) => writeln!(out, "{err}")?,
        }
    }
    Ok(())
}

/// 프롬프트를 출력하고 한 줄을 읽는다. 입력이 끝났으면 `None`.
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<Option<String>, AppError> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf))
}

fn read_temperature_unit<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
    default: TemperatureUnit,
) -> Result<TemperatureUnit, AppError> {
    let prompt = format!("{label} [C/F/K] (default {default}): ");
    loop {
        let Some(line) = read_line(input, out, &prompt)? else {
            return Ok(default);
        };
        if line.trim().is_empty() {
            return Ok(default);
        }
        match line.trim().parse::<TemperatureUnit>() {
            Ok(unit) => return Ok(unit),
            Err(err) => writeln!(out, "{err}; use C, F or K.")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn table(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> ConversionTable {
        conversion::convert_for_display(value, from, to).unwrap()
    }

    #[test]
    fn table_marks_target_row() {
        let text = render_table(&table(0.0, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit));
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "  Celsius     0");
        assert_eq!(lines[2], "> Fahrenheit  32");
        assert_eq!(lines[3], "  Kelvin      273.15");
    }

    #[test]
    fn toml_lists_rows_in_order() {
        let text = render_toml(&table(212.0, TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius))
            .unwrap();
        let doc: toml::Value = toml::from_str(&text).unwrap();
        assert_eq!(doc["source"].as_str(), Some("Fahrenheit"));
        let rows = doc["rows"].as_array().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0]["unit"].as_str(), Some("Celsius"));
        assert_eq!(rows[0]["value"].as_str(), Some("100"));
        assert_eq!(rows[0]["highlighted"].as_bool(), Some(true));
        assert_eq!(rows[2]["value"].as_str(), Some("373.15"));
    }

    #[test]
    fn interactive_retries_after_invalid_number() {
        let mut input = Cursor::new("abc\n0\nk\nc\nq\n");
        let mut out = Vec::new();
        run_interactive(
            &mut input,
            &mut out,
            TemperatureUnit::Celsius,
            TemperatureUnit::Fahrenheit,
            OutputFormat::Table,
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches(INVALID_INPUT_MESSAGE).count(), 1);
        assert!(text.contains("> Celsius     -273.15"));
        assert!(text.contains("  Fahrenheit  -459.67"));
    }

    #[test]
    fn interactive_uses_defaults_on_empty_unit() {
        let mut input = Cursor::new("100\n\n\n");
        let mut out = Vec::new();
        run_interactive(
            &mut input,
            &mut out,
            TemperatureUnit::Celsius,
            TemperatureUnit::Kelvin,
            OutputFormat::Table,
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("> Kelvin      373.15"));
        assert!(text.contains("  Fahrenheit  212"));
    }

    #[test]
    fn interactive_reprompts_unknown_unit() {
        let mut input = Cursor::new("10\nrankine\nf\nc\n");
        let mut out = Vec::new();
        run_interactive(
            &mut input,
            &mut out,
            TemperatureUnit::Celsius,
            TemperatureUnit::Celsius,
            OutputFormat::Table,
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("unknown temperature unit"));
        assert!(text.contains("> Celsius     -12.22"));
    }
}
