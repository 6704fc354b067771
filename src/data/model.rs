use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// Network – the three fixed social platforms
// ---------------------------------------------------------------------------

/// One of the three tracked social networks. The set is fixed: the workbook
/// is required to carry exactly one sheet per network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Network {
    Facebook,
    Instagram,
    LinkedIn,
}

impl Network {
    pub const ALL: [Network; 3] = [Network::Facebook, Network::Instagram, Network::LinkedIn];

    /// Label shown in the UI (tab titles, logs).
    pub fn label(self) -> &'static str {
        match self {
            Network::Facebook => "Facebook",
            Network::Instagram => "Instagram",
            Network::LinkedIn => "LinkedIn",
        }
    }

    /// Workbook sheet name holding this network's data (case-sensitive).
    pub fn sheet_name(self) -> &'static str {
        match self {
            Network::Facebook => "FB Page",
            Network::Instagram => "Instagram",
            Network::LinkedIn => "LinkedIn",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Metric – the five tracked numeric columns
// ---------------------------------------------------------------------------

/// One of the five tracked monthly metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Metric {
    Followers,
    Views,
    Posts,
    Interactions,
    Comments,
}

impl Metric {
    pub const ALL: [Metric; 5] = [
        Metric::Followers,
        Metric::Views,
        Metric::Posts,
        Metric::Interactions,
        Metric::Comments,
    ];

    /// Column header used in the workbook sheets.
    pub fn column(self) -> &'static str {
        match self {
            Metric::Followers => "Followers",
            Metric::Views => "Views",
            Metric::Posts => "Posts",
            Metric::Interactions => "Interactions",
            Metric::Comments => "Comments",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

// ---------------------------------------------------------------------------
// CellValue – a single spreadsheet cell
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring the spreadsheet dtypes we care
/// about. Metric columns are read back out through [`CellValue::as_f64`].
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => {
                // Excel stores whole numbers as floats; print those as ints.
                if v.fract() == 0.0 && v.abs() < 1e15 {
                    write!(f, "{}", *v as i64)
                } else {
                    write!(f, "{v}")
                }
            }
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => Ok(()),
        }
    }
}

impl CellValue {
    /// Interpret the value as an `f64` for plotting.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

// ---------------------------------------------------------------------------
// MetricRow – one row of a network sheet
// ---------------------------------------------------------------------------

/// A single monthly record. `date` is derived from the sheet's `Year` and
/// `Month` columns (first day of that month); the original cells are kept
/// verbatim, keyed by header, for the raw-data table.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRow {
    pub date: NaiveDate,
    pub year: i32,
    pub month: String,
    /// All original cells of the row, keyed by column header.
    pub cells: BTreeMap<String, CellValue>,
}

impl MetricRow {
    /// Numeric value of a metric column, `None` when the sheet lacks the
    /// column or the cell is non-numeric.
    pub fn metric(&self, metric: Metric) -> Option<f64> {
        self.cells.get(metric.column()).and_then(CellValue::as_f64)
    }
}

// ---------------------------------------------------------------------------
// NetworkDataset – the sorted table for one network
// ---------------------------------------------------------------------------

/// The loaded table for one network. `rows` is sorted ascending by `date`;
/// duplicate (year, month) pairs survive in their original relative order.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkDataset {
    pub network: Network,
    /// Original column headers, in sheet order.
    pub columns: Vec<String>,
    pub rows: Vec<MetricRow>,
}

impl NetworkDataset {
    /// (date, value) points for one metric, in row order, skipping rows
    /// where the metric is absent.
    pub fn series(&self, metric: Metric) -> Vec<(NaiveDate, f64)> {
        self.rows
            .iter()
            .filter_map(|row| row.metric(metric).map(|v| (row.date, v)))
            .collect()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// DatasetCollection – all three networks, immutable after load
// ---------------------------------------------------------------------------

/// The complete loaded workbook: one dataset per network. Constructed once
/// by the loader and never mutated; the UI only reads.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetCollection {
    datasets: BTreeMap<Network, NetworkDataset>,
}

impl DatasetCollection {
    /// Build from per-network datasets. The loader guarantees all three
    /// networks are present.
    pub fn new(datasets: BTreeMap<Network, NetworkDataset>) -> Self {
        DatasetCollection { datasets }
    }

    pub fn get(&self, network: Network) -> Option<&NetworkDataset> {
        self.datasets.get(&network)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Network, &NetworkDataset)> {
        self.datasets.iter().map(|(n, ds)| (*n, ds))
    }

    /// Total row count across all networks (for the top-bar summary).
    pub fn total_rows(&self) -> usize {
        self.datasets.values().map(|ds| ds.rows.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(date: NaiveDate, cells: &[(&str, CellValue)]) -> MetricRow {
        MetricRow {
            date,
            year: date.format("%Y").to_string().parse().unwrap(),
            month: date.format("%B").to_string(),
            cells: cells
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        }
    }

    #[test]
    fn metric_reads_integers_and_floats() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let r = row(
            d,
            &[
                ("Followers", CellValue::Integer(120)),
                ("Views", CellValue::Float(3400.5)),
                ("Posts", CellValue::String("n/a".into())),
            ],
        );
        assert_eq!(r.metric(Metric::Followers), Some(120.0));
        assert_eq!(r.metric(Metric::Views), Some(3400.5));
        assert_eq!(r.metric(Metric::Posts), None);
        assert_eq!(r.metric(Metric::Comments), None);
    }

    #[test]
    fn series_skips_rows_without_the_metric() {
        let jan = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let feb = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let ds = NetworkDataset {
            network: Network::Facebook,
            columns: vec!["Year".into(), "Month".into(), "Views".into()],
            rows: vec![
                row(jan, &[("Views", CellValue::Integer(10))]),
                row(feb, &[("Views", CellValue::Null)]),
            ],
        };
        assert_eq!(ds.series(Metric::Views), vec![(jan, 10.0)]);
    }

    #[test]
    fn cell_display_prints_whole_floats_as_integers() {
        assert_eq!(CellValue::Float(2024.0).to_string(), "2024");
        assert_eq!(CellValue::Float(0.5).to_string(), "0.5");
        assert_eq!(CellValue::Null.to_string(), "");
    }
}
