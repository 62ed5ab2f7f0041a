use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Contact table (central panel)
// ---------------------------------------------------------------------------

/// Render the loaded contacts. Shows the filtered rows, or every row when
/// the raw-data toggle is on.
pub fn contact_table(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a file to view contacts  (File → Open…)");
        });
        return;
    };

    if dataset.columns.is_empty() {
        ui.label("The file has no header row.");
        return;
    }

    if dataset.is_empty() {
        ui.label("The file has no data rows.");
        return;
    }

    let all_rows: Vec<usize>;
    let rows: &[usize] = if state.show_raw {
        all_rows = (0..dataset.len()).collect();
        &all_rows
    } else {
        &state.visible_indices
    };

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .columns(
            Column::auto().at_least(80.0).clip(true),
            dataset.columns.len(),
        )
        .header(22.0, |mut header| {
            for col in &dataset.columns {
                header.col(|ui: &mut Ui| {
                    ui.strong(col);
                });
            }
        })
        .body(|body| {
            body.rows(20.0, rows.len(), |mut row| {
                let record = &dataset.records[rows[row.index()]];
                for i in 0..dataset.columns.len() {
                    let text = record
                        .values
                        .get(i)
                        .map(|v| v.to_string())
                        .unwrap_or_default();
                    row.col(|ui: &mut Ui| {
                        ui.label(text);
                    });
                }
            });
        });
}
