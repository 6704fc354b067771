use chrono::NaiveDate;
use eframe::egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::data::model::NetworkDataset;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Metric chart (central panel)
// ---------------------------------------------------------------------------

/// Render the time-series chart for the active network.
pub fn metric_plot(ui: &mut Ui, state: &AppState, dataset: &NetworkDataset) {
    let selection = state.active_selection();
    if selection.is_empty() {
        ui.label("Select at least one metric to display.");
        return;
    }

    Plot::new(format!("{}_plot", dataset.network.label()))
        .legend(Legend::default())
        .x_axis_formatter(|mark, _range| format_day(mark.value))
        .y_axis_label("Value")
        .label_formatter(|name, point| {
            if name.is_empty() {
                format_day(point.x)
            } else {
                format!("{name}\n{}: {:.0}", format_day(point.x), point.y)
            }
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for &metric in selection {
                let points: PlotPoints = dataset
                    .series(metric)
                    .into_iter()
                    .map(|(date, value)| [day_number(date), value])
                    .collect();

                let line = Line::new(points)
                    .name(metric.column())
                    .color(state.metric_colors.color_for(metric))
                    .width(1.5);

                plot_ui.line(line);
            }
        });
}

/// Dates are plotted as day numbers in the proleptic Gregorian calendar.
fn day_number(date: NaiveDate) -> f64 {
    chrono::Datelike::num_days_from_ce(&date) as f64
}

fn format_day(value: f64) -> String {
    NaiveDate::from_num_days_from_ce_opt(value.round() as i32)
        .map(|d| d.format("%b %Y").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_number_round_trips_through_the_axis_formatter() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(format_day(day_number(date)), "Mar 2024");
    }

    #[test]
    fn day_numbers_order_like_dates() {
        let jan = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mar = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert!(day_number(jan) < day_number(mar));
    }
}
