use crate::data::classify::{RuleSet, TitleClassifier};
use crate::data::filter::{clamp_selection, filtered_indices, initial_selection, TitleSelection};
use crate::data::model::{ContactDataset, TITLE_COLUMN};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering. This is the only mutable
/// session state; the data layer works on explicit values.
pub struct AppState {
    /// Loaded dataset (None until the user opens a file).
    pub dataset: Option<ContactDataset>,

    /// Compiled classification rules.
    pub classifier: TitleClassifier,

    /// Titles currently kept in the filtered view.
    pub selection: TitleSelection,

    /// Indices of rows passing the current selection (cached).
    pub visible_indices: Vec<usize>,

    /// Show every loaded row instead of the filtered view.
    pub show_raw: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            classifier: TitleClassifier::default(),
            selection: TitleSelection::new(),
            visible_indices: Vec::new(),
            show_raw: false,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset and pre-select the executive titles.
    /// A dataset without a `Job Title` column displays raw and unfiltered.
    pub fn set_dataset(&mut self, dataset: ContactDataset) {
        if dataset.has_title_column() {
            self.selection = initial_selection(&dataset, &self.classifier);
            self.status_message = None;
        } else {
            self.selection = TitleSelection::new();
            self.status_message = Some(format!(
                "No '{TITLE_COLUMN}' column found; showing raw data only"
            ));
        }
        self.visible_indices = filtered_indices(&dataset, &self.selection);
        self.dataset = Some(dataset);
    }

    /// Recompute `visible_indices` after a selection change.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.visible_indices = filtered_indices(ds, &self.selection);
        }
    }

    /// Replace the whole selection. Titles not present in the dataset are
    /// ignored.
    pub fn set_selection(&mut self, titles: TitleSelection) {
        self.selection = match &self.dataset {
            Some(ds) => clamp_selection(&titles, ds),
            None => TitleSelection::new(),
        };
        self.refilter();
    }

    /// Toggle a single title in or out of the selection.
    pub fn toggle_title(&mut self, title: &str) {
        if !self.selection.remove(title) {
            self.selection.insert(title.to_string());
        }
        self.refilter();
    }

    /// Keep every distinct title.
    pub fn select_all(&mut self) {
        let all = self
            .dataset
            .as_ref()
            .map(|ds| ds.distinct_titles.clone())
            .unwrap_or_default();
        self.set_selection(all);
    }

    /// Keep no titles.
    pub fn select_none(&mut self) {
        self.set_selection(TitleSelection::new());
    }

    /// Swap in a new rule table and redo the automatic pre-selection.
    pub fn set_rules(&mut self, rules: RuleSet) -> Result<(), regex::Error> {
        self.classifier = rules.compile()?;
        if let Some(ds) = &self.dataset {
            if ds.has_title_column() {
                self.selection = initial_selection(ds, &self.classifier);
                self.visible_indices = filtered_indices(ds, &self.selection);
            }
        }
        Ok(())
    }

    /// Export only makes sense once a classifiable dataset is loaded.
    pub fn can_export(&self) -> bool {
        self.dataset
            .as_ref()
            .is_some_and(ContactDataset::has_title_column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{FieldValue, Record};

    fn contacts() -> ContactDataset {
        ContactDataset::from_rows(
            vec!["Name".into(), "Job Title".into()],
            [
                ("Ada", "CEO"),
                ("Ben", "Software Engineer"),
                ("Cleo", "HR Director"),
            ]
            .iter()
            .map(|(name, title)| Record {
                values: vec![
                    FieldValue::String(name.to_string()),
                    FieldValue::String(title.to_string()),
                ],
            })
            .collect(),
        )
    }

    #[test]
    fn loading_a_dataset_preselects_executive_titles() {
        let mut state = AppState::default();
        state.set_dataset(contacts());

        assert!(state.selection.contains("CEO"));
        assert!(!state.selection.contains("HR Director"));
        assert_eq!(state.visible_indices, vec![0]);
        assert!(state.can_export());
        assert!(state.status_message.is_none());
    }

    #[test]
    fn missing_title_column_shows_raw_data_and_disables_export() {
        let mut state = AppState::default();
        state.set_dataset(ContactDataset::from_rows(
            vec!["Name".into()],
            vec![Record {
                values: vec![FieldValue::String("Ada".into())],
            }],
        ));

        assert!(state.selection.is_empty());
        assert_eq!(state.visible_indices, vec![0]);
        assert!(!state.can_export());
        assert!(state
            .status_message
            .as_deref()
            .is_some_and(|m| m.contains("Job Title")));
    }

    #[test]
    fn toggling_a_title_refilters() {
        let mut state = AppState::default();
        state.set_dataset(contacts());

        state.toggle_title("Software Engineer");
        assert_eq!(state.visible_indices, vec![0, 1]);

        state.toggle_title("CEO");
        assert_eq!(state.visible_indices, vec![1]);
    }

    #[test]
    fn set_selection_ignores_titles_outside_the_dataset() {
        let mut state = AppState::default();
        state.set_dataset(contacts());

        state.set_selection(
            ["HR Director".to_string(), "Astronaut".to_string()].into(),
        );

        assert_eq!(
            state.selection.iter().cloned().collect::<Vec<_>>(),
            vec!["HR Director".to_string()]
        );
        assert_eq!(state.visible_indices, vec![2]);
    }

    #[test]
    fn select_all_and_none_cover_the_whole_universe() {
        let mut state = AppState::default();
        state.set_dataset(contacts());

        state.select_all();
        assert_eq!(state.visible_indices, vec![0, 1, 2]);

        state.select_none();
        assert!(state.visible_indices.is_empty());
    }

    #[test]
    fn swapping_rule_tables_redoes_the_preselection() {
        let mut state = AppState::default();
        state.set_dataset(contacts());

        state
            .set_rules(RuleSet {
                include: vec!["Engineer".to_string()],
                exclude: Vec::new(),
            })
            .expect("compiles");

        assert_eq!(
            state.selection.iter().cloned().collect::<Vec<_>>(),
            vec!["Software Engineer".to_string()]
        );
        assert_eq!(state.visible_indices, vec![1]);
    }
}
