use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::{AppState, Tab};
use crate::view::default_y_column;

// ---------------------------------------------------------------------------
// Left side panel – chart settings
// ---------------------------------------------------------------------------

/// Render the Y-axis selector.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("⚙ Chart settings");
    ui.separator();

    let dataset = match &state.dataset {
        Some(ds) => ds.clone(),
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    let numeric = dataset.numeric_columns();
    if numeric.is_empty() {
        ui.label("No numeric columns.");
        return;
    }

    let current = state
        .selection
        .y_column
        .clone()
        .or_else(|| default_y_column(&dataset).map(str::to_string))
        .unwrap_or_default();

    ui.strong("Y-axis (numeric)");
    egui::ComboBox::from_id_salt("y_axis")
        .selected_text(&current)
        .show_ui(ui, |ui: &mut Ui| {
            for col in &numeric {
                if ui.selectable_label(current == *col, *col).clicked() {
                    state.set_y_column(col.to_string());
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the menu bar and the tab strip.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} rows from {}",
                ds.len(),
                state.data_path.display()
            ));
        }

        if let Some(msg) = &state.load_error {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });

    ui.heading("🎮 Android Game Data Dashboard");
    ui.horizontal(|ui: &mut Ui| {
        for tab in Tab::ALL {
            ui.selectable_value(&mut state.tab, tab, tab.label());
        }
    });
    ui.add_space(4.0);
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open game data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.load(path);
        if let Some(ds) = &state.dataset {
            log::info!(
                "Showing {} rows with columns {:?}",
                ds.len(),
                ds.schema.names().collect::<Vec<_>>()
            );
        }
    }
}
