use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::model::{Metric, Network};
use crate::state::AppState;

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
        });

        ui.separator();

        if let Some(collection) = &state.collection {
            ui.label(format!(
                "{} monthly rows across {} networks",
                collection.total_rows(),
                Network::ALL.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel – data source + metric multiselect
// ---------------------------------------------------------------------------

/// Render the left panel: data-source section and the metric checkboxes for
/// the active network.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Data source");
    ui.separator();

    match &state.source_label {
        Some(label) => {
            ui.label(format!("Using: {label}"));
        }
        None => {
            ui.label("No workbook loaded.");
        }
    }
    if ui.button("Open workbook…").clicked() {
        open_file_dialog(state);
    }

    ui.add_space(8.0);
    ui.heading("Metrics");
    ui.separator();

    if state.collection.is_none() {
        ui.label("Load a workbook to select metrics.");
        return;
    }

    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.select_all_metrics();
        }
        if ui.small_button("None").clicked() {
            state.select_no_metrics();
        }
    });

    for metric in Metric::ALL {
        let color = state.metric_colors.color_for(metric);
        let mut checked = state.active_selection().contains(&metric);
        let text = RichText::new(metric.column()).color(color);
        if ui.checkbox(&mut checked, text).changed() {
            state.toggle_metric(metric);
        }
    }
}

// ---------------------------------------------------------------------------
// Network tabs
// ---------------------------------------------------------------------------

/// Render the Facebook / Instagram / LinkedIn tab strip.
pub fn network_tabs(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        for network in Network::ALL {
            if ui
                .selectable_label(state.active_network == network, network.label())
                .clicked()
            {
                state.active_network = network;
            }
        }
    });
    ui.separator();
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open analytics workbook")
        .add_filter("Excel workbook", &["xlsx"])
        .pick_file();

    if let Some(path) = file {
        state.open_path(&path);
    }
}
