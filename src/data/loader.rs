use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use thiserror::Error;

use super::model::{ContactDataset, FieldValue, Record};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failures while turning an uploaded file into a [`ContactDataset`].
///
/// A file without a `Job Title` column is NOT a load error: the dataset comes
/// back with [`ContactDataset::title_column`] unset and the caller decides
/// what to skip.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),
    #[error("spreadsheet parse error: {0}")]
    Spreadsheet(#[from] calamine::Error),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a contact dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – comma-delimited UTF-8, header row required
/// * `.xlsx` / `.xls` / `.xlsm` / `.xlsb` / `.ods` – first sheet, header row
pub fn load_file(path: &Path) -> Result<ContactDataset, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "xlsx" | "xls" | "xlsm" | "xlsb" | "ods" => load_spreadsheet(path),
        other => Err(LoadError::UnsupportedFormat(other.to_string())),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<ContactDataset, LoadError> {
    let mut reader = csv::Reader::from_path(path)?;

    let columns: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        records.push(Record {
            values: row.iter().map(guess_field).collect(),
        });
    }

    Ok(ContactDataset::from_rows(columns, records))
}

/// Best-effort type inference for a CSV cell. Inference is cosmetic; values
/// always render back to their text form on export.
fn guess_field(s: &str) -> FieldValue {
    if s.is_empty() {
        return FieldValue::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return FieldValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return FieldValue::Float(f);
    }
    if s == "true" || s == "false" {
        return FieldValue::Bool(s == "true");
    }
    FieldValue::String(s.to_string())
}

// ---------------------------------------------------------------------------
// Spreadsheet loader
// ---------------------------------------------------------------------------

/// Read the first worksheet. The first row is the header; the remaining rows
/// become records. Ranges from calamine are rectangular, so every row has
/// one cell per header.
fn load_spreadsheet(path: &Path) -> Result<ContactDataset, LoadError> {
    let mut workbook = open_workbook_auto(path)?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or(calamine::Error::Msg("workbook contains no sheets"))??;

    let mut rows = range.rows();
    let columns: Vec<String> = match rows.next() {
        Some(header) => header.iter().map(|c| c.to_string()).collect(),
        None => Vec::new(),
    };

    let records = rows
        .map(|row| Record {
            values: row.iter().map(cell_to_field).collect(),
        })
        .collect();

    Ok(ContactDataset::from_rows(columns, records))
}

fn cell_to_field(cell: &Data) -> FieldValue {
    match cell {
        Data::Empty => FieldValue::Null,
        Data::String(s) => FieldValue::String(s.clone()),
        Data::Float(f) => FieldValue::Float(*f),
        Data::Int(i) => FieldValue::Integer(*i),
        Data::Bool(b) => FieldValue::Bool(*b),
        // Serial date numbers stay numeric; ISO strings stay text.
        Data::DateTime(dt) => FieldValue::Float(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => FieldValue::Date(s.clone()),
        Data::Error(_) => FieldValue::Null,
    }
}
