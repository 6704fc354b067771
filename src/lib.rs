//! Social Pulse: a desktop viewer for monthly social-media analytics.
//!
//! Loads an Excel workbook with one sheet per network (Facebook, Instagram,
//! LinkedIn), derives a month-resolution date axis from the `Year` and
//! `Month` columns, and charts the selected metrics per network.

pub mod app;
pub mod color;
pub mod data;
pub mod state;
pub mod ui;
