use std::path::Path;

use eframe::egui::{self, Color32, RichText, Ui};

use crate::error::ConfigurationError;
use crate::ui::plot::installs_bar_chart;
use crate::ui::tables::{data_table, format_count, metric_tile};
use crate::view::{InsightsView, SummaryView, VisualizationView, GUIDANCE, HIGHLIGHT_N};

// ---------------------------------------------------------------------------
// Data summary tab
// ---------------------------------------------------------------------------

pub fn summary_tab(ui: &mut Ui, view: &SummaryView) {
    ui.heading("📋 Data overview");
    ui.add_space(6.0);

    ui.columns(3, |cols| {
        metric_tile(&mut cols[0], "Total rows", &view.row_count.to_string());
        metric_tile(&mut cols[1], "Columns", &view.column_count.to_string());
        let missing = if view.has_missing { "⚠ Present" } else { "✅ None" };
        metric_tile(&mut cols[2], "Missing values", missing);
    });
    ui.add_space(8.0);

    egui::CollapsingHeader::new(RichText::new("🔍 Data preview").strong())
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            let rows: Vec<Vec<String>> = view
                .preview
                .iter()
                .map(|row| row.iter().map(|c| c.to_string()).collect())
                .collect();
            data_table(ui, "preview_table", &view.headers, &rows);
        });
}

// ---------------------------------------------------------------------------
// Visualization tab
// ---------------------------------------------------------------------------

pub fn visualization_tab(ui: &mut Ui, view: &Result<VisualizationView, ConfigurationError>) {
    let view = match view {
        Ok(v) => v,
        Err(e) => {
            ui.heading("📊 Visualization");
            ui.label(RichText::new(format!("⚠ {e}")).color(Color32::RED));
            return;
        }
    };

    ui.heading(format!("📊 {}", view.title()));
    installs_bar_chart(ui, view);
    ui.add_space(8.0);

    ui.heading(format!("🏆 Top {HIGHLIGHT_N} by {}", view.y_column));
    let headers = vec![view.x_column.clone(), view.y_column.clone()];
    let rows: Vec<Vec<String>> = view
        .highlighted()
        .iter()
        .map(|p| {
            vec![
                format_count(p.installs),
                p.value_label(),
            ]
        })
        .collect();
    data_table(ui, "top_table", &headers, &rows);
}

// ---------------------------------------------------------------------------
// Insights tab
// ---------------------------------------------------------------------------

pub fn insights_tab(ui: &mut Ui, view: &InsightsView) {
    ui.heading("💡 Data insights");
    if !view.show_guidance {
        return;
    }
    for column in &view.columns {
        ui.label(format!("• {}", column.describe()));
    }
    ui.separator();
    ui.label(GUIDANCE);
}

// ---------------------------------------------------------------------------
// Failure screen
// ---------------------------------------------------------------------------

/// Shown instead of the tabs when the dataset could not be loaded.
pub fn failure_screen(ui: &mut Ui, path: &Path, message: &str) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add_space(40.0);
        ui.heading(RichText::new("⚠ Could not load the dataset").color(Color32::RED));
        ui.add_space(8.0);
        ui.label(format!("File: {}", path.display()));
        ui.label(RichText::new(message).color(Color32::LIGHT_RED));
        ui.add_space(8.0);
        ui.label("Fix the file and use File → Reload, or open another CSV with File → Open…");
    });
}
