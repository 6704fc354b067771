use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::Arc;

use crate::color::MetricColors;
use crate::data::cache::DatasetCache;
use crate::data::model::{DatasetCollection, Metric, Network};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded workbook (None until a source is available).
    pub collection: Option<Arc<DatasetCollection>>,

    /// Session-local memoization of parsed workbooks.
    pub cache: DatasetCache,

    /// Which network tab is active.
    pub active_network: Network,

    /// Per-network metric selection for the chart.
    pub selected_metrics: BTreeMap<Network, BTreeSet<Metric>>,

    /// Metric colour assignment shared by chart and checkboxes.
    pub metric_colors: MetricColors,

    /// Name of the currently loaded workbook, shown in the top bar.
    pub source_label: Option<String>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        // The source dashboard pre-selects Views and Followers.
        let default_selection: BTreeSet<Metric> =
            [Metric::Views, Metric::Followers].into_iter().collect();

        Self {
            collection: None,
            cache: DatasetCache::new(),
            active_network: Network::Facebook,
            selected_metrics: Network::ALL
                .iter()
                .map(|&n| (n, default_selection.clone()))
                .collect(),
            metric_colors: MetricColors::default(),
            source_label: None,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded collection.
    pub fn set_collection(&mut self, collection: Arc<DatasetCollection>, label: String) {
        self.collection = Some(collection);
        self.source_label = Some(label);
        self.status_message = None;
    }

    /// Load a workbook path through the cache; on failure the previous
    /// collection stays untouched and the error lands in the status line.
    pub fn open_path(&mut self, path: &Path) {
        match self.cache.load_path(path) {
            Ok(collection) => {
                log::info!(
                    "loaded {path:?}: {} rows across {} networks",
                    collection.total_rows(),
                    Network::ALL.len()
                );
                let label = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                self.set_collection(collection, label);
            }
            Err(e) => {
                log::error!("failed to load {path:?}: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Metric selection for the active network.
    pub fn active_selection(&self) -> &BTreeSet<Metric> {
        static EMPTY: BTreeSet<Metric> = BTreeSet::new();
        self.selected_metrics
            .get(&self.active_network)
            .unwrap_or(&EMPTY)
    }

    /// Toggle one metric on the active network's chart. Never reloads the
    /// source; the chart is recomputed from the in-memory collection.
    pub fn toggle_metric(&mut self, metric: Metric) {
        let selection = self
            .selected_metrics
            .entry(self.active_network)
            .or_default();
        if !selection.remove(&metric) {
            selection.insert(metric);
        }
    }

    /// Select all five metrics on the active network.
    pub fn select_all_metrics(&mut self) {
        self.selected_metrics
            .insert(self.active_network, Metric::ALL.into_iter().collect());
    }

    /// Clear the active network's selection.
    pub fn select_no_metrics(&mut self) {
        self.selected_metrics
            .insert(self.active_network, BTreeSet::new());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_selection_is_views_and_followers() {
        let state = AppState::default();
        for network in Network::ALL {
            let sel = &state.selected_metrics[&network];
            assert!(sel.contains(&Metric::Views));
            assert!(sel.contains(&Metric::Followers));
            assert_eq!(sel.len(), 2);
        }
    }

    #[test]
    fn toggling_flips_membership_per_network() {
        let mut state = AppState::default();
        state.toggle_metric(Metric::Posts);
        assert!(state.active_selection().contains(&Metric::Posts));

        state.active_network = Network::LinkedIn;
        assert!(!state.active_selection().contains(&Metric::Posts));

        state.active_network = Network::Facebook;
        state.toggle_metric(Metric::Posts);
        assert!(!state.active_selection().contains(&Metric::Posts));
    }

    #[test]
    fn select_all_and_none() {
        let mut state = AppState::default();
        state.select_all_metrics();
        assert_eq!(state.active_selection().len(), Metric::ALL.len());
        state.select_no_metrics();
        assert!(state.active_selection().is_empty());
    }
}
