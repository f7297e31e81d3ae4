use chrono::NaiveDate;

use super::ColumnDef;
use crate::Row;

/// Upper bound on rows requested for one export.
pub const EXPORT_ROW_LIMIT: u64 = 1000;

pub fn export_limit(total_count: u64) -> u64 {
    total_count.min(EXPORT_ROW_LIMIT)
}

/// A finished CSV ready to hand to a save dialog or browser download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub file_name: String,
    pub contents: String,
    pub row_count: usize,
}

pub fn quote_field(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Header of quoted labels followed by one quoted line per row. Columns marked non-exportable
/// are left out.
pub fn build_csv(columns: &[ColumnDef], rows: &[Row]) -> String {
    let columns: Vec<&ColumnDef> = columns.iter().filter(|c| c.is_exportable()).collect();

    let mut out = String::new();
    push_line(&mut out, columns.iter().map(|column| column.label().to_owned()));
    for (index, row) in rows.iter().enumerate() {
        push_line(
            &mut out,
            columns.iter().map(|column| column.export_field(row, index)),
        );
    }
    out
}

fn push_line(out: &mut String, fields: impl Iterator<Item = String>) {
    let line = fields
        .map(|field| quote_field(&field))
        .collect::<Vec<_>>()
        .join(",");
    out.push_str(&line);
    out.push('\n');
}

/// `<base>-YYYY-MM-DD.csv`
pub fn export_file_name(base: &str, date: NaiveDate) -> String {
    format!("{base}-{}.csv", date.format("%Y-%m-%d"))
}
