use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Metric;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: metric → Color32
// ---------------------------------------------------------------------------

/// Fixed colour assignment for the five metrics so chart lines and the
/// side-panel checkboxes stay consistent across networks.
#[derive(Debug, Clone)]
pub struct MetricColors {
    mapping: BTreeMap<Metric, Color32>,
    default_color: Color32,
}

impl Default for MetricColors {
    fn default() -> Self {
        let palette = generate_palette(Metric::ALL.len());
        let mapping: BTreeMap<Metric, Color32> = Metric::ALL
            .iter()
            .copied()
            .zip(palette.into_iter())
            .collect();

        MetricColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }
}

impl MetricColors {
    /// Look up the colour for a metric.
    pub fn color_for(&self, metric: Metric) -> Color32 {
        self.mapping
            .get(&metric)
            .copied()
            .unwrap_or(self.default_color)
    }
}
