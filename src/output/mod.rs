//! Output formatting
//!
//! Three renderers for a generated sample sequence:
//!
//! - **text**: console preview table, summary statistics, ASCII histogram
//! - **csv**: `index,value` rows for spreadsheet/pandas analysis
//! - **json**: full report with config echo, summary, and samples

pub mod csv;
pub mod json;
pub mod text;
