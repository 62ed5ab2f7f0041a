use anyhow::{anyhow, Context, Result};

use super::model::ContactDataset;

/// Default file name offered in the export save dialog.
pub const EXPORT_FILE_NAME: &str = "filtered_executive_data.csv";

/// Serialize the given rows as UTF-8 CSV bytes: header row, then one row per
/// index in the order given, no index column. Pure transform; writing the
/// bytes anywhere is the caller's business.
pub fn to_csv_bytes(dataset: &ContactDataset, indices: &[usize]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(&dataset.columns)
        .context("writing CSV header")?;

    for &idx in indices {
        let record = &dataset.records[idx];
        writer
            .write_record(record.values.iter().map(|v| v.to_string()))
            .with_context(|| format!("writing CSV row {idx}"))?;
    }

    writer
        .into_inner()
        .map_err(|e| anyhow!("flushing CSV buffer: {e}"))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::data::loader::load_file;
    use crate::data::model::{FieldValue, Record};

    fn dataset() -> ContactDataset {
        ContactDataset::from_rows(
            vec!["Name".into(), "Job Title".into(), "Age".into()],
            vec![
                Record {
                    values: vec![
                        FieldValue::String("Ada".into()),
                        FieldValue::String("CEO".into()),
                        FieldValue::Integer(42),
                    ],
                },
                Record {
                    values: vec![
                        FieldValue::String("Ben".into()),
                        FieldValue::String("Software Engineer".into()),
                        FieldValue::Integer(27),
                    ],
                },
                Record {
                    values: vec![
                        FieldValue::String("Cleo".into()),
                        FieldValue::String("VP Sales".into()),
                        FieldValue::Null,
                    ],
                },
            ],
        )
    }

    #[test]
    fn export_writes_header_and_rows_in_order() {
        let ds = dataset();

        let bytes = to_csv_bytes(&ds, &[0, 2]).expect("exports");
        let text = String::from_utf8(bytes).expect("utf-8");

        assert_eq!(text, "Name,Job Title,Age\nAda,CEO,42\nCleo,VP Sales,\n");
    }

    #[test]
    fn exporting_no_rows_yields_just_the_header() {
        let ds = dataset();

        let bytes = to_csv_bytes(&ds, &[]).expect("exports");

        assert_eq!(String::from_utf8(bytes).unwrap(), "Name,Job Title,Age\n");
    }

    #[test]
    fn export_then_reload_round_trips_the_filtered_rows() {
        let ds = dataset();
        let kept = [0, 2];

        let bytes = to_csv_bytes(&ds, &kept).expect("exports");

        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .expect("create temp file");
        file.write_all(&bytes).expect("write temp file");

        let reloaded = load_file(file.path()).expect("reloads");

        assert_eq!(reloaded.columns, ds.columns);
        assert_eq!(reloaded.len(), kept.len());
        for (round, &orig) in kept.iter().enumerate() {
            assert_eq!(reloaded.records[round].values, ds.records[orig].values);
        }
    }
}
