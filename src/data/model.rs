use std::collections::BTreeSet;
use std::fmt;

/// Name of the column the classifier operates on. Matched exactly,
/// case-sensitively, against the loaded header row.
pub const TITLE_COLUMN: &str = "Job Title";

// ---------------------------------------------------------------------------
// FieldValue – a single cell
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring common tabular dtypes.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// ISO-8601 date/time string kept as text for simplicity.
    Date(String),
    Null,
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => write!(f, "{s}"),
            FieldValue::Integer(i) => write!(f, "{i}"),
            FieldValue::Float(v) => write!(f, "{v}"),
            FieldValue::Bool(b) => write!(f, "{b}"),
            FieldValue::Date(d) => write!(f, "{d}"),
            // Null renders as the empty string so exports round-trip.
            FieldValue::Null => Ok(()),
        }
    }
}

impl FieldValue {
    /// Render the value as a title string for classification and selection.
    /// Non-string values use their display form; nulls yield `None`.
    pub fn as_title(&self) -> Option<String> {
        match self {
            FieldValue::Null => None,
            other => Some(other.to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Record – one row of the uploaded file
// ---------------------------------------------------------------------------

/// A single contact row. Values are positionally aligned with
/// [`ContactDataset::columns`].
#[derive(Debug, Clone)]
pub struct Record {
    pub values: Vec<FieldValue>,
}

// ---------------------------------------------------------------------------
// ContactDataset – the complete loaded file
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed title information.
#[derive(Debug, Clone)]
pub struct ContactDataset {
    /// Column names in original file order.
    pub columns: Vec<String>,
    /// All rows, in original file order.
    pub records: Vec<Record>,
    /// Index of the `Job Title` column, if the file has one.
    pub title_column: Option<usize>,
    /// Sorted set of distinct non-null title values.
    pub distinct_titles: BTreeSet<String>,
}

impl ContactDataset {
    /// Build the title index from freshly loaded rows.
    pub fn from_rows(columns: Vec<String>, records: Vec<Record>) -> Self {
        let title_column = columns.iter().position(|c| c == TITLE_COLUMN);

        let mut distinct_titles = BTreeSet::new();
        if let Some(col) = title_column {
            for rec in &records {
                if let Some(title) = rec.values.get(col).and_then(FieldValue::as_title) {
                    distinct_titles.insert(title);
                }
            }
        }

        ContactDataset {
            columns,
            records,
            title_column,
            distinct_titles,
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether the file carried a `Job Title` column.
    pub fn has_title_column(&self) -> bool {
        self.title_column.is_some()
    }

    /// Title string of the given row, if present and non-null.
    pub fn title_of(&self, row: usize) -> Option<String> {
        let col = self.title_column?;
        self.records.get(row)?.values.get(col)?.as_title()
    }
}
