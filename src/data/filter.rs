use std::collections::BTreeSet;

use super::classify::TitleClassifier;
use super::model::ContactDataset;

// ---------------------------------------------------------------------------
// Selection: which distinct titles the user wants to keep
// ---------------------------------------------------------------------------

/// The set of title values retained in the filtered view. Starts as the
/// classifier's picks and is adjusted by the user from there.
pub type TitleSelection = BTreeSet<String>;

/// Initial selection: every distinct title the classifier flags as
/// executive.
pub fn initial_selection(
    dataset: &ContactDataset,
    classifier: &TitleClassifier,
) -> TitleSelection {
    dataset
        .distinct_titles
        .iter()
        .filter(|title| classifier.is_executive(title))
        .cloned()
        .collect()
}

/// Drop titles that do not exist in the dataset. Unknown titles are ignored,
/// not an error.
pub fn clamp_selection(selection: &TitleSelection, dataset: &ContactDataset) -> TitleSelection {
    selection
        .intersection(&dataset.distinct_titles)
        .cloned()
        .collect()
}

/// Return indices of rows whose title is in the selection.
///
/// A dataset without a `Job Title` column is never filtered: every row index
/// comes back. Rows with a null title only pass when the dataset is
/// unfiltered.
pub fn filtered_indices(dataset: &ContactDataset, selection: &TitleSelection) -> Vec<usize> {
    if !dataset.has_title_column() {
        return (0..dataset.len()).collect();
    }

    (0..dataset.len())
        .filter(|&i| {
            dataset
                .title_of(i)
                .is_some_and(|title| selection.contains(&title))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{FieldValue, Record};

    fn dataset() -> ContactDataset {
        let titles = [
            Some("CEO"),
            Some("Software Engineer"),
            Some("HR Director"),
            None,
            Some("CEO"),
        ];
        ContactDataset::from_rows(
            vec!["Name".into(), "Job Title".into()],
            titles
                .iter()
                .enumerate()
                .map(|(i, title)| Record {
                    values: vec![
                        FieldValue::String(format!("contact-{i}")),
                        title
                            .map(|t| FieldValue::String(t.to_string()))
                            .unwrap_or(FieldValue::Null),
                    ],
                })
                .collect(),
        )
    }

    #[test]
    fn initial_selection_is_the_classifier_accepted_titles() {
        let ds = dataset();
        let selection = initial_selection(&ds, &TitleClassifier::default());

        // "HR Director" matches an inclusion term but is excluded.
        assert_eq!(
            selection.iter().cloned().collect::<Vec<_>>(),
            vec!["CEO".to_string()]
        );
    }

    #[test]
    fn filtering_keeps_exactly_the_selected_titles() {
        let ds = dataset();
        let selection: TitleSelection =
            ["CEO".to_string(), "HR Director".to_string()].into();

        let indices = filtered_indices(&ds, &selection);

        assert_eq!(indices, vec![0, 2, 4]);
        assert!(indices.len() <= ds.len());
    }

    #[test]
    fn empty_selection_filters_everything_out() {
        let ds = dataset();
        assert!(filtered_indices(&ds, &TitleSelection::new()).is_empty());
    }

    #[test]
    fn datasets_without_a_title_column_are_not_filtered() {
        let ds = ContactDataset::from_rows(
            vec!["Name".into()],
            vec![
                Record {
                    values: vec![FieldValue::String("Ada".into())],
                },
                Record {
                    values: vec![FieldValue::String("Ben".into())],
                },
            ],
        );

        assert_eq!(filtered_indices(&ds, &TitleSelection::new()), vec![0, 1]);
    }

    #[test]
    fn unknown_titles_are_dropped_from_the_selection() {
        let ds = dataset();
        let selection: TitleSelection =
            ["CEO".to_string(), "Supreme Commander".to_string()].into();

        let clamped = clamp_selection(&selection, &ds);

        assert_eq!(
            clamped.iter().cloned().collect::<Vec<_>>(),
            vec!["CEO".to_string()]
        );
    }
}
