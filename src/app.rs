use eframe::egui::{self, ScrollArea};

use crate::color::apply_neon_theme;
use crate::config::DashboardConfig;
use crate::state::{AppState, Tab};
use crate::ui::{panels, views};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DashboardApp {
    pub state: AppState,
}

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: DashboardConfig) -> Self {
        if config.neon_theme {
            apply_neon_theme(&cc.egui_ctx);
        }
        Self {
            state: AppState::new(config.data_path),
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar, title, tabs ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: chart settings ----
        egui::SidePanel::left("settings_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: active tab ----
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(msg) = &self.state.load_error {
                views::failure_screen(ui, &self.state.data_path, msg);
                return;
            }
            let Some(vm) = self.state.view_model() else {
                return;
            };
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match self.state.tab {
                    Tab::Summary => views::summary_tab(ui, &vm.summary),
                    Tab::Visualization => views::visualization_tab(ui, &vm.visualization),
                    Tab::Insights => views::insights_tab(ui, &vm.insights),
                });
        });
    }
}
