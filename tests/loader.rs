// tests/loader.rs
//
// End-to-end workbook loading: real .xlsx bytes built with rust_xlsxwriter,
// parsed back through the loader and the cache.

use std::io::Cursor;
use std::sync::Arc;

use chrono::NaiveDate;
use rust_xlsxwriter::Workbook;

use social_pulse::data::cache::DatasetCache;
use social_pulse::data::loader::{self, LoadError};
use social_pulse::data::model::{Metric, Network};

#[derive(Clone, Copy)]
enum V {
    N(f64),
    S(&'static str),
}

/// Build an in-memory workbook from (sheet name, headers, rows).
fn build_workbook(sheets: &[(&str, &[&str], &[&[V]])]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    for (name, headers, rows) in sheets {
        let sheet = workbook.add_worksheet().set_name(*name).unwrap();
        for (c, header) in headers.iter().enumerate() {
            sheet.write(0, c as u16, *header).unwrap();
        }
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                match value {
                    V::N(n) => sheet.write(r as u32 + 1, c as u16, *n).unwrap(),
                    V::S(s) => sheet.write(r as u32 + 1, c as u16, *s).unwrap(),
                };
            }
        }
    }
    workbook.save_to_buffer().unwrap()
}

const BASIC_HEADERS: &[&str] = &["Year", "Month", "Followers"];

fn one_row() -> &'static [&'static [V]] {
    &[&[V::N(2024.0), V::S("January"), V::N(10.0)]]
}

/// A workbook where Instagram and LinkedIn each hold one valid row and the
/// Facebook sheet is caller-supplied.
fn with_fb_rows(fb_rows: &[&[V]]) -> Vec<u8> {
    build_workbook(&[
        ("FB Page", BASIC_HEADERS, fb_rows),
        ("Instagram", BASIC_HEADERS, one_row()),
        ("LinkedIn", BASIC_HEADERS, one_row()),
    ])
}

fn date(y: i32, m: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, 1).unwrap()
}

#[test]
fn valid_workbook_yields_all_three_networks() {
    let bytes = with_fb_rows(one_row());
    let collection = loader::load_reader(Cursor::new(bytes)).unwrap();

    let networks: Vec<Network> = collection.iter().map(|(n, _)| n).collect();
    assert_eq!(
        networks,
        vec![Network::Facebook, Network::Instagram, Network::LinkedIn]
    );
    assert_eq!(collection.total_rows(), 3);
}

#[test]
fn rows_come_back_sorted_by_date() {
    // March before January in the sheet; loaded order must be by date.
    let bytes = with_fb_rows(&[
        &[V::N(2024.0), V::S("March"), V::N(100.0)],
        &[V::N(2024.0), V::S("January"), V::N(90.0)],
    ]);
    let collection = loader::load_reader(Cursor::new(bytes)).unwrap();
    let fb = collection.get(Network::Facebook).unwrap();

    assert_eq!(fb.len(), 2);
    assert_eq!(fb.rows[0].date, date(2024, 1));
    assert_eq!(fb.rows[0].metric(Metric::Followers), Some(90.0));
    assert_eq!(fb.rows[1].date, date(2024, 3));
    assert_eq!(fb.rows[1].metric(Metric::Followers), Some(100.0));

    for (_, dataset) in collection.iter() {
        for pair in dataset.rows.windows(2) {
            assert!(pair[0].date <= pair[1].date);
        }
    }
}

#[test]
fn duplicate_year_month_rows_survive_in_sheet_order() {
    let bytes = with_fb_rows(&[
        &[V::N(2024.0), V::S("February"), V::N(5.0)],
        &[V::N(2024.0), V::S("January"), V::N(1.0)],
        &[V::N(2024.0), V::S("January"), V::N(2.0)],
    ]);
    let collection = loader::load_reader(Cursor::new(bytes)).unwrap();
    let fb = collection.get(Network::Facebook).unwrap();

    let followers: Vec<Option<f64>> =
        fb.rows.iter().map(|r| r.metric(Metric::Followers)).collect();
    // Stable sort: both January rows kept, original relative order.
    assert_eq!(followers, vec![Some(1.0), Some(2.0), Some(5.0)]);
}

#[test]
fn year_month_round_trips_to_first_of_month() {
    let bytes = with_fb_rows(&[
        &[V::N(2024.0), V::S("January"), V::N(1.0)],
        &[V::N(2023.0), V::S("December"), V::N(2.0)],
    ]);
    let collection = loader::load_reader(Cursor::new(bytes)).unwrap();
    let fb = collection.get(Network::Facebook).unwrap();

    assert_eq!(fb.rows[0].date, date(2023, 12));
    assert_eq!(fb.rows[0].year, 2023);
    assert_eq!(fb.rows[0].month, "December");
    assert_eq!(fb.rows[1].date, date(2024, 1));
}

#[test]
fn missing_sheet_fails_the_whole_load() {
    let bytes = build_workbook(&[
        ("FB Page", BASIC_HEADERS, one_row()),
        ("Instagram", BASIC_HEADERS, one_row()),
    ]);
    let err = loader::load_reader(Cursor::new(bytes)).unwrap_err();
    assert!(matches!(err, LoadError::MissingSheet { name: "LinkedIn" }));
}

#[test]
fn missing_month_column_fails_the_whole_load() {
    let fb_rows: &[&[V]] = &[&[V::N(2024.0), V::N(1.0)]];
    let bytes = build_workbook(&[
        ("FB Page", &["Year", "Followers"], fb_rows),
        ("Instagram", BASIC_HEADERS, one_row()),
        ("LinkedIn", BASIC_HEADERS, one_row()),
    ]);
    let err = loader::load_reader(Cursor::new(bytes)).unwrap_err();
    assert!(matches!(
        err,
        LoadError::MissingColumn {
            sheet: "FB Page",
            column: "Month"
        }
    ));
}

#[test]
fn invalid_month_name_aborts_the_load() {
    let bytes = with_fb_rows(&[
        &[V::N(2024.0), V::S("January"), V::N(1.0)],
        &[V::N(2024.0), V::S("Smarch"), V::N(2.0)],
    ]);
    let err = loader::load_reader(Cursor::new(bytes)).unwrap_err();
    match err {
        LoadError::DateParse { sheet, row, month, .. } => {
            assert_eq!(sheet, "FB Page");
            assert_eq!(row, 3);
            assert_eq!(month, "Smarch");
        }
        other => panic!("expected DateParse, got {other:?}"),
    }
}

#[test]
fn two_digit_year_aborts_the_load() {
    let bytes = with_fb_rows(&[&[V::N(24.0), V::S("January"), V::N(1.0)]]);
    let err = loader::load_reader(Cursor::new(bytes)).unwrap_err();
    assert!(matches!(err, LoadError::DateParse { .. }));
}

#[test]
fn absent_metric_columns_read_as_none() {
    // No Views/Posts/Interactions/Comments columns anywhere.
    let bytes = with_fb_rows(one_row());
    let collection = loader::load_reader(Cursor::new(bytes)).unwrap();
    let fb = collection.get(Network::Facebook).unwrap();

    assert_eq!(fb.rows[0].metric(Metric::Followers), Some(10.0));
    assert_eq!(fb.rows[0].metric(Metric::Views), None);
    assert!(fb.series(Metric::Views).is_empty());
}

#[test]
fn extra_columns_are_retained_verbatim() {
    let headers: &[&str] = &["Year", "Month", "Followers", "Notes"];
    let fb_rows: &[&[V]] = &[&[V::N(2024.0), V::S("June"), V::N(7.0), V::S("campaign month")]];
    let bytes = build_workbook(&[
        ("FB Page", headers, fb_rows),
        ("Instagram", BASIC_HEADERS, one_row()),
        ("LinkedIn", BASIC_HEADERS, one_row()),
    ]);
    let collection = loader::load_reader(Cursor::new(bytes)).unwrap();
    let fb = collection.get(Network::Facebook).unwrap();

    assert_eq!(fb.columns, vec!["Year", "Month", "Followers", "Notes"]);
    assert_eq!(
        fb.rows[0].cells.get("Notes").map(|c| c.to_string()),
        Some("campaign month".to_string())
    );
}

#[test]
fn loading_the_same_bytes_twice_is_idempotent() {
    let bytes = with_fb_rows(&[
        &[V::N(2024.0), V::S("March"), V::N(100.0)],
        &[V::N(2024.0), V::S("January"), V::N(90.0)],
    ]);
    let first = loader::load_reader(Cursor::new(bytes.clone())).unwrap();
    let second = loader::load_reader(Cursor::new(bytes)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn cache_hands_back_the_same_parse_for_the_same_bytes() {
    let bytes = with_fb_rows(one_row());
    let mut cache = DatasetCache::new();

    let first = cache.load_bytes(&bytes).unwrap();
    let second = cache.load_bytes(&bytes).unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(cache.len(), 1);

    let other = with_fb_rows(&[&[V::N(2025.0), V::S("May"), V::N(3.0)]]);
    let third = cache.load_bytes(&other).unwrap();
    assert!(!Arc::ptr_eq(&first, &third));
    assert_eq!(cache.len(), 2);
}

#[test]
fn unreadable_path_is_a_source_error() {
    let err = loader::load_path(std::path::Path::new("no/such/workbook.xlsx")).unwrap_err();
    assert!(matches!(err, LoadError::SourceNotFound { .. }));
}
