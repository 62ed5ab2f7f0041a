use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::classify::RuleSet;
use crate::data::export::{self, EXPORT_FILE_NAME};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – title selection
// ---------------------------------------------------------------------------

/// Render the title-selection panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Job Titles");
    ui.separator();

    let Some(dataset) = &state.dataset else {
        ui.label("No dataset loaded.");
        return;
    };

    if !dataset.has_title_column() {
        ui.label("This file has no 'Job Title' column.");
        return;
    }

    // Clone the universe so we can mutate the selection inside the loop.
    let titles: Vec<String> = dataset.distinct_titles.iter().cloned().collect();

    ui.label(format!(
        "{} selected of {} distinct titles",
        state.selection.len(),
        titles.len()
    ));

    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.select_all();
        }
        if ui.small_button("None").clicked() {
            state.select_none();
        }
    });
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for title in &titles {
                let is_selected = state.selection.contains(title);
                let flagged_term = state
                    .classifier
                    .matched_term(title)
                    .filter(|_| state.classifier.is_executive(title))
                    .map(str::to_string);

                // Auto-flagged executive titles stand out.
                let mut text = RichText::new(title);
                if flagged_term.is_some() {
                    text = text.strong();
                }

                let mut checked = is_selected;
                let mut response = ui.checkbox(&mut checked, text);
                if let Some(term) = &flagged_term {
                    response = response.on_hover_text(format!("auto-flagged: matches \"{term}\""));
                }
                if response.changed() {
                    state.toggle_title(title);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Load rule set…").clicked() {
                load_rules_dialog(state);
                ui.close_menu();
            }
            ui.separator();
            if ui
                .add_enabled(state.can_export(), egui::Button::new("Export filtered CSV…"))
                .clicked()
            {
                export_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "Showing {} of {} rows",
                state.visible_indices.len(),
                ds.len()
            ));
        }

        ui.separator();

        if ui
            .selectable_label(state.show_raw, "Show raw data")
            .clicked()
        {
            state.show_raw = !state.show_raw;
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open contact list")
        .add_filter("Supported files", &["csv", "xlsx", "xls", "xlsm", "xlsb", "ods"])
        .add_filter("CSV", &["csv"])
        .add_filter("Excel", &["xlsx", "xls", "xlsm", "xlsb"])
        .add_filter("OpenDocument", &["ods"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} rows with columns {:?}",
                    dataset.len(),
                    dataset.columns
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

pub fn load_rules_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Load classification rules")
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        let loaded = RuleSet::from_json_file(&path)
            .and_then(|rules| state.set_rules(rules).map_err(Into::into));
        match loaded {
            Ok(()) => {
                log::info!("Loaded rule set from {}", path.display());
                state.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to load rule set: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

pub fn export_file_dialog(state: &mut AppState) {
    let Some(dataset) = &state.dataset else {
        return;
    };

    let file = rfd::FileDialog::new()
        .set_title("Export filtered contacts")
        .set_file_name(EXPORT_FILE_NAME)
        .add_filter("CSV", &["csv"])
        .save_file();

    if let Some(path) = file {
        let written = export::to_csv_bytes(dataset, &state.visible_indices)
            .and_then(|bytes| std::fs::write(&path, bytes).map_err(Into::into));
        match written {
            Ok(()) => {
                log::info!(
                    "Exported {} rows to {}",
                    state.visible_indices.len(),
                    path.display()
                );
                state.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to export: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
