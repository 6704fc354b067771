use std::path::Path;

use eframe::egui;

use social_pulse::app::SocialPulseApp;
use social_pulse::state::AppState;

/// Workbook picked up from the working directory when no path is given.
const DEFAULT_WORKBOOK: &str = "SM Analytics.xlsx";

fn main() -> eframe::Result {
    env_logger::init();

    let mut state = AppState::default();

    // Optional CLI argument: path to the workbook. Otherwise try the
    // default local file; failing that, start empty with a status message.
    let arg = std::env::args().nth(1);
    let path = arg.as_deref().unwrap_or(DEFAULT_WORKBOOK);
    if Path::new(path).exists() {
        state.open_path(Path::new(path));
    } else if arg.is_some() {
        state.status_message = Some(format!("Error: workbook not found: {path}"));
    } else {
        state.status_message =
            Some("No workbook loaded. Open one via File → Open…".to_string());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Social Pulse – Social Media Analytics",
        options,
        Box::new(|_cc| Ok(Box::new(SocialPulseApp::with_state(state)))),
    )
}
