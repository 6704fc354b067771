/// UI layer: egui panels, the metric chart, and the raw-data table.
pub mod panels;
pub mod plot;
pub mod table;
