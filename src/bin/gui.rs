#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use std::{fs, path::Path};
use temperature_converter::{
    config,
    conversion::{self, ConversionError, ConversionTable},
    logging, ui_cli,
    units::TemperatureUnit,
};
use tracing::{info, warn};

fn main() -> Result<(), eframe::Error> {
    let (app_cfg, cfg_err) = match config::load_or_default() {
        Ok(cfg) => (cfg, None),
        Err(err) => (config::Config::default(), Some(err)),
    };
    logging::init_tracing(&app_cfg.log_filter);
    if let Some(err) = cfg_err {
        warn!(%err, "falling back to default config");
    }

    let mut viewport = egui::ViewportBuilder::default()
        .with_title("Temperature Converter")
        .with_inner_size([520.0, 240.0]);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    info!("starting GUI");
    eframe::run_native(
        "Temperature Converter",
        options,
        Box::new(move |_cc| Box::new(GuiApp::new(app_cfg))),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

fn unit_combo(ui: &mut egui::Ui, id: &str, unit: &mut TemperatureUnit) {
    egui::ComboBox::from_id_source(id)
        .selected_text(unit.name())
        .show_ui(ui, |ui| {
            for u in TemperatureUnit::ALL {
                ui.selectable_value(&mut *unit, u, u.name());
            }
        });
}

/// 결과 표의 읽기 전용 칸. 목표 단위 행은 선택 색 배경으로 강조한다.
fn result_cell(ui: &mut egui::Ui, text: &str, highlighted: bool) -> egui::Response {
    let mut rich = egui::RichText::new(text);
    if highlighted {
        let fg = ui.visuals().selection.stroke.color;
        let bg = ui.visuals().selection.bg_fill;
        rich = rich.strong().color(fg).background_color(bg);
    }
    ui.add(
        egui::Label::new(rich)
            .selectable(false)
            .sense(egui::Sense::hover()),
    )
}

struct GuiApp {
    config: config::Config,
    input: String,
    from: TemperatureUnit,
    to: TemperatureUnit,
    table: Option<ConversionTable>,
    // 열려 있는 오류 대화상자 문구
    error: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        Self {
            from: config.default_from,
            to: config.default_to,
            config,
            input: String::new(),
            table: None,
            error: None,
        }
    }

    /// 입력을 해석해 표를 갱신한다. 실패하면 기존 표는 그대로 두고 오류만 띄운다.
    fn convert(&mut self) {
        let outcome = conversion::parse_input(&self.input)
            .and_then(|v| conversion::convert_for_display(v, self.from, self.to));
        match outcome {
            Ok(table) => {
                self.table = Some(table);
                self.remember_units();
            }
            Err(err) => {
                warn!(%err, "conversion rejected");
                self.error = Some(match err {
                    ConversionError::InvalidInput(_) => ui_cli::INVALID_INPUT_MESSAGE.to_string(),
                    other => other.to_string(),
                });
            }
        }
    }

    /// 마지막으로 쓴 단위 선택을 다음 실행의 기본값으로 저장한다.
    fn remember_units(&mut self) {
        if self.config.default_from == self.from && self.config.default_to == self.to {
            return;
        }
        self.config.default_from = self.from;
        self.config.default_to = self.to;
        if let Err(err) = self.config.save() {
            warn!(%err, "failed to save unit selection");
        }
    }

    fn ui_input(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Enter temperature:");
            let resp = ui.add(egui::TextEdit::singleline(&mut self.input).desired_width(90.0));
            let submitted = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            unit_combo(ui, "from_unit", &mut self.from);
            ui.label("to");
            unit_combo(ui, "to_unit", &mut self.to);
            if ui.button("Convert").clicked() || submitted {
                self.convert();
            }
        });
    }

    fn ui_result(&self, ui: &mut egui::Ui) {
        let Some(table) = &self.table else {
            ui.weak("Enter a value and press Convert.");
            return;
        };
        egui::Grid::new("result_grid")
            .num_columns(2)
            .striped(true)
            .spacing([32.0, 6.0])
            .show(ui, |ui| {
                ui.strong("Unit");
                ui.strong("Temperature");
                ui.end_row();
                for (unit, text, highlighted) in table.rows() {
                    result_cell(ui, unit.name(), highlighted);
                    result_cell(ui, &format!("{text} {}", unit.symbol()), highlighted);
                    ui.end_row();
                }
            });
    }

    fn ui_error_dialog(&mut self, ctx: &egui::Context) {
        let Some(message) = self.error.clone() else {
            return;
        };
        egui::Window::new("Error")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    self.error = None;
                }
            });
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let modal_open = self.error.is_some();
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!modal_open, |ui| {
                self.ui_input(ui);
                ui.separator();
                self.ui_result(ui);
            });
        });
        self.ui_error_dialog(ctx);
    }
}
