use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::data::model::{CellValue, NetworkDataset};

// ---------------------------------------------------------------------------
// Raw-data table (expandable, below the chart)
// ---------------------------------------------------------------------------

/// Render the full dataset as a table: the derived Date column followed by
/// every original sheet column, rows in sorted date order.
pub fn raw_table(ui: &mut Ui, dataset: &NetworkDataset) {
    let n_cols = dataset.columns.len() + 1;

    // One table per network tab; salt the id so egui keeps their widths apart.
    ui.push_id(dataset.network.label(), |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .columns(Column::auto().at_least(60.0), n_cols)
            .header(20.0, |mut header| {
                header.col(|ui| {
                    ui.strong("Date");
                });
                for col in &dataset.columns {
                    header.col(|ui| {
                        ui.strong(col.as_str());
                    });
                }
            })
            .body(|body| {
                body.rows(18.0, dataset.len(), |mut row| {
                    let record = &dataset.rows[row.index()];
                    row.col(|ui| {
                        ui.label(record.date.format("%Y-%m-%d").to_string());
                    });
                    for col in &dataset.columns {
                        let cell = record.cells.get(col).unwrap_or(&CellValue::Null);
                        row.col(|ui| {
                            ui.label(cell.to_string());
                        });
                    }
                });
            });
    });
}
