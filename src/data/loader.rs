use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use calamine::{Data, Range, Reader, Xlsx};
use chrono::{Month, NaiveDate};
use thiserror::Error;

use super::model::{CellValue, DatasetCollection, MetricRow, Network, NetworkDataset};

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Everything that can go wrong while loading a workbook. All variants abort
/// the whole load; no partial collection is ever returned.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open workbook {path:?}: {source}")]
    SourceNotFound {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed workbook: {0}")]
    Workbook(#[from] calamine::XlsxError),

    #[error("workbook has no sheet named {name:?}")]
    MissingSheet { name: &'static str },

    #[error("sheet {sheet:?} has no {column:?} column")]
    MissingColumn {
        sheet: &'static str,
        column: &'static str,
    },

    #[error("sheet {sheet:?} row {row}: cannot parse date from Year={year:?}, Month={month:?}")]
    DateParse {
        sheet: &'static str,
        /// 1-based row number in the sheet, header included.
        row: usize,
        year: String,
        month: String,
    },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a workbook from disk.
pub fn load_path(path: &Path) -> Result<DatasetCollection, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::SourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    load_reader(BufReader::new(file))
}

/// Load a workbook from any seekable byte source (uploaded bytes, tests).
///
/// The workbook must contain the three network sheets (`"FB Page"`,
/// `"Instagram"`, `"LinkedIn"`, case-sensitive), each with `Year` and
/// `Month` columns. Every sheet is parsed, date-derived, and stably sorted;
/// any failure aborts the entire load.
pub fn load_reader<RS: Read + Seek>(reader: RS) -> Result<DatasetCollection, LoadError> {
    let mut workbook = Xlsx::new(reader)?;

    // All three sheets must exist before any of them is parsed.
    let sheet_names = workbook.sheet_names();
    for network in Network::ALL {
        if !sheet_names.iter().any(|s| s == network.sheet_name()) {
            return Err(LoadError::MissingSheet {
                name: network.sheet_name(),
            });
        }
    }

    let mut datasets = BTreeMap::new();
    for network in Network::ALL {
        let range = workbook.worksheet_range(network.sheet_name())?;
        datasets.insert(network, load_sheet(network, &range)?);
    }

    Ok(DatasetCollection::new(datasets))
}

// ---------------------------------------------------------------------------
// Per-sheet parsing
// ---------------------------------------------------------------------------

fn load_sheet(network: Network, range: &Range<Data>) -> Result<NetworkDataset, LoadError> {
    let sheet = network.sheet_name();

    let mut sheet_rows = range.rows();
    let header = sheet_rows.next().unwrap_or(&[]);
    let columns: Vec<String> = header.iter().map(header_text).collect();

    let year_idx = column_index(&columns, "Year").ok_or(LoadError::MissingColumn {
        sheet,
        column: "Year",
    })?;
    let month_idx = column_index(&columns, "Month").ok_or(LoadError::MissingColumn {
        sheet,
        column: "Month",
    })?;

    let mut rows = Vec::new();
    for (i, record) in sheet_rows.enumerate() {
        // The used range can extend past the data with formatted blank rows.
        if record.iter().all(|c| matches!(c, Data::Empty)) {
            continue;
        }

        let row_no = i + 2; // 1-based, header is row 1

        let year_cell = record.get(year_idx).unwrap_or(&Data::Empty);
        let month_cell = record.get(month_idx).unwrap_or(&Data::Empty);

        let (date, year, month) =
            parse_row_date(year_cell, month_cell).ok_or_else(|| LoadError::DateParse {
                sheet,
                row: row_no,
                year: year_cell.to_string(),
                month: month_cell.to_string(),
            })?;

        let cells: BTreeMap<String, CellValue> = columns
            .iter()
            .enumerate()
            .map(|(col, name)| {
                let raw = record.get(col).unwrap_or(&Data::Empty);
                (name.clone(), convert_cell(raw))
            })
            .collect();

        rows.push(MetricRow {
            date,
            year,
            month,
            cells,
        });
    }

    // Stable sort: duplicate (year, month) pairs keep their original order.
    rows.sort_by_key(|r| r.date);

    Ok(NetworkDataset {
        network,
        columns,
        rows,
    })
}

fn column_index(columns: &[String], name: &str) -> Option<usize> {
    columns.iter().position(|c| c == name)
}

fn header_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Derive the first day of (Year, Month) from the two cells.
///
/// `Year` must coerce to a 4-digit integer (Excel often stores it as a
/// whole-valued float); `Month` must be a full English month name, matched
/// case-insensitively. Returns `None` when either fails.
fn parse_row_date(year_cell: &Data, month_cell: &Data) -> Option<(NaiveDate, i32, String)> {
    let year = coerce_year(year_cell)?;

    let month_name = match month_cell {
        Data::String(s) => s.trim(),
        _ => return None,
    };
    let month = Month::from_str(month_name).ok()?;
    // `Month::from_str` also accepts "Jan"-style abbreviations; require the
    // full name, like the "%B" pattern the sheets were written against.
    if !month.name().eq_ignore_ascii_case(month_name) {
        return None;
    }

    let date = NaiveDate::from_ymd_opt(year, month.number_from_month(), 1)?;
    Some((date, year, month.name().to_string()))
}

fn coerce_year(cell: &Data) -> Option<i32> {
    let year = match cell {
        Data::Int(i) => *i,
        Data::Float(f) if f.fract() == 0.0 => *f as i64,
        Data::String(s) => s.trim().parse::<i64>().ok()?,
        _ => return None,
    };
    (1000..=9999).contains(&year).then_some(year as i32)
}

fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Null,
        Data::String(s) => CellValue::String(s.clone()),
        Data::Float(f) => CellValue::Float(*f),
        Data::Int(i) => CellValue::Integer(*i),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::String(s.clone()),
        Data::DateTime(dt) => CellValue::Float(dt.as_f64()),
        Data::Error(_) => CellValue::Null,
    }
}
