use chrono::Utc;
use egui::{Align, Layout, RichText, Vec2};

use super::fonts::install_hangul_font;
use super::paged_calendar::PagedCalendar;
use super::screen::CalendarScreen;
use crate::models::settings::Settings;
use crate::services::header::HeaderFormatter;

const TOP_INSET: f32 = 32.0;
const SIDE_INSET: f32 = 12.0;
const HEADER_ROW_HEIGHT: f32 = 36.0;
const BUTTON_SPACING: f32 = 12.0;
const TOGGLE_BUTTON_SIZE: Vec2 = Vec2::new(68.0, 28.0);
const HEIGHT_ANIMATION_SECS: f32 = 0.25;

pub struct ScopeCalendarApp {
    screen: CalendarScreen<PagedCalendar>,
    caption: String,
}

impl eframe::App for ScopeCalendarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.screen.process_widget_events();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(TOP_INSET);
            egui::Frame::none()
                .inner_margin(egui::Margin::symmetric(SIDE_INSET, 0.0))
                .show(ui, |ui| {
                    self.render_header_row(ui);

                    let height = ctx.animate_value_with_time(
                        egui::Id::new("calendar_container_height"),
                        self.screen.container_height(),
                        HEIGHT_ANIMATION_SECS,
                    );
                    self.screen.widget_mut().show(ui, height);
                });

            if self.screen.widget().has_pending_events() {
                self.screen.process_widget_events();
                ctx.request_repaint();
            }

            ui.add_space(16.0);
            ui.vertical_centered(|ui| {
                ui.label(&self.caption);
            });
        });
    }
}

impl ScopeCalendarApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: &Settings, formatter: HeaderFormatter) -> Self {
        install_hangul_font(&cc.egui_ctx);

        let now = Utc::now();
        let today = formatter.local_date(now);
        let calendar = PagedCalendar::new(today, *formatter.locale());
        let screen = CalendarScreen::new(calendar, formatter, now, settings.calendar_height);

        Self {
            screen,
            caption: settings.caption.clone(),
        }
    }

    fn render_header_row(&mut self, ui: &mut egui::Ui) {
        let width = ui.available_width();
        ui.allocate_ui_with_layout(
            Vec2::new(width, HEADER_ROW_HEIGHT),
            Layout::left_to_right(Align::Center),
            |ui| {
                ui.label(RichText::new(self.screen.header_text()).size(16.0).strong());

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.spacing_mut().item_spacing.x = BUTTON_SPACING;

                    let button = self.screen.toggle_button();
                    let toggle = egui::Button::new(
                        RichText::new(format!("{} {}", button.label, button.icon.glyph())).size(16.0),
                    )
                    .fill(ui.visuals().faint_bg_color)
                    .rounding(4.0)
                    .min_size(TOGGLE_BUTTON_SIZE);
                    if ui.add(toggle).clicked() {
                        self.screen.toggle_scope();
                        ui.ctx().request_repaint();
                    }

                    if ui.add(egui::Button::new("⏵").frame(false)).clicked() {
                        self.screen.show_next_week();
                        ui.ctx().request_repaint();
                    }
                    if ui.add(egui::Button::new("⏴").frame(false)).clicked() {
                        self.screen.show_previous_week();
                        ui.ctx().request_repaint();
                    }
                });
            },
        );
    }
}
