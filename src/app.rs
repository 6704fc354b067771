use eframe::egui::{self, CollapsingHeader, Ui};

use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct SocialPulseApp {
    pub state: AppState,
}

impl SocialPulseApp {
    pub fn with_state(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for SocialPulseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: data source + metric multiselect ----
        egui::SidePanel::left("metric_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: network tabs, chart, raw table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            central_panel(ui, &mut self.state);
        });
    }
}

fn central_panel(ui: &mut Ui, state: &mut AppState) {
    let Some(collection) = state.collection.clone() else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open an analytics workbook to view metrics  (File → Open…)");
        });
        return;
    };

    panels::network_tabs(ui, state);

    let network = state.active_network;
    let Some(dataset) = collection.get(network) else {
        // The loader guarantees all three networks, so this never shows.
        ui.label(format!("No data for {network}"));
        return;
    };

    ui.heading(network.label());
    ui.add_space(4.0);

    plot::metric_plot(ui, state, dataset);

    ui.add_space(8.0);
    // Salted per network so each tab remembers its own expansion.
    CollapsingHeader::new("Show data table")
        .id_salt(network.label())
        .show(ui, |ui: &mut Ui| {
            table::raw_table(ui, dataset);
        });
}
