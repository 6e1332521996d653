use std::sync::Arc;

use skipyard_core::{
    comparison::{ComparisonSet, Selection},
    model::{EnrichedSkip, Location},
    service::SkipyardService,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    SkipList,
    Detail,
    Compare,
    AddToCompare,
}

pub(crate) struct App {
    pub service: Arc<SkipyardService>,
    pub location: Location,

    pub screen: Screen,
    pub skips: Vec<EnrichedSkip>,
    pub list_index: usize,

    pub comparison: ComparisonSet,
    pub compare_index: usize,
    pub selection: Selection,
    pub dialog_index: usize,

    pub is_loading: bool,
    pub error_message: Option<String>,
    pub info_message: Option<String>,
}

impl App {
    pub(crate) fn new(service: Arc<SkipyardService>, location: Location) -> Self {
        Self {
            service,
            location,
            screen: Screen::SkipList,
            skips: Vec::new(),
            list_index: 0,
            comparison: ComparisonSet::new(),
            compare_index: 0,
            selection: Selection::new(),
            dialog_index: 0,
            is_loading: false,
            error_message: None,
            info_message: None,
        }
    }

    /// Replace the catalogue after a successful load.
    pub(crate) fn set_skips(&mut self, skips: Vec<EnrichedSkip>) {
        self.skips = skips;
        self.list_index = 0;
        self.dialog_index = 0;
        self.comparison.clear();
        self.compare_index = 0;
        self.selection = Selection::new();
    }

    pub(crate) fn current_skip(&self) -> Option<&EnrichedSkip> {
        self.skips.get(self.list_index)
    }

    pub(crate) fn open_detail(&mut self) {
        if self.current_skip().is_some() {
            self.screen = Screen::Detail;
        }
    }

    pub(crate) fn compare_current(&mut self) {
        let Some(skip) = self.current_skip().cloned() else {
            return;
        };
        let size = skip.size();
        self.info_message = Some(if self.comparison.add(skip) {
            format!("Added {size} yard skip to comparison")
        } else {
            format!("{size} yard skip is already being compared")
        });
    }

    pub(crate) fn remove_compared(&mut self) {
        let Some(id) = self
            .comparison
            .skips()
            .get(self.compare_index)
            .map(EnrichedSkip::id)
        else {
            return;
        };
        self.comparison.remove(id);
        self.compare_index = self
            .compare_index
            .min(self.comparison.len().saturating_sub(1));
    }

    pub(crate) fn clear_comparison(&mut self) {
        self.comparison.clear();
        self.compare_index = 0;
    }

    pub(crate) fn toggle_dialog_pick(&mut self) {
        if let Some(skip) = self.skips.get(self.dialog_index) {
            if self.comparison.contains(skip.id()) {
                return;
            }
            self.selection.toggle(skip.id());
        }
    }

    pub(crate) fn commit_dialog(&mut self) {
        let added = self.selection.commit(&self.skips, &mut self.comparison);
        if added > 0 {
            self.info_message = Some(format!("Added {added} skip(s) to comparison"));
        }
        self.screen = Screen::Compare;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use skipyard_core::enrich::enrich;
    use skipyard_core::model::RawSkip;
    use skipyard_provider_wewantwaste::WeWantWasteSource;

    use super::*;

    fn app_with_sizes(sizes: &[u32]) -> App {
        let listings = sizes
            .iter()
            .enumerate()
            .map(|(idx, size)| {
                serde_json::from_value::<RawSkip>(serde_json::json!({
                    "id": idx,
                    "size": size,
                    "hire_period_days": 14,
                    "transport_cost": null,
                    "per_tonne_cost": null,
                    "price_before_vat": 200,
                    "vat": 20,
                    "postcode": "NR32",
                    "area": "",
                    "forbidden": false,
                    "created_at": "2025-04-03T13:51:46.897146",
                    "updated_at": "2025-04-07T13:16:52.813",
                    "allowed_on_road": true,
                    "allows_heavy_waste": false
                }))
                .expect("fixture decodes")
            })
            .collect::<Vec<_>>();

        let source = Arc::new(WeWantWasteSource::new(reqwest::Client::new()));
        let mut app = App::new(Arc::new(SkipyardService::new(source)), Location::default());
        app.set_skips(enrich(listings));
        app
    }

    fn compared_sizes(app: &App) -> Vec<u32> {
        app.comparison.skips().iter().map(EnrichedSkip::size).collect()
    }

    #[test]
    fn comparing_twice_keeps_one_entry() {
        let mut app = app_with_sizes(&[4, 8, 20]);
        app.list_index = 1;

        app.compare_current();
        app.compare_current();

        assert_eq!(compared_sizes(&app), vec![8]);
        assert_eq!(
            app.info_message.as_deref(),
            Some("8 yard skip is already being compared")
        );
    }

    #[test]
    fn removing_last_entry_moves_cursor_back() {
        let mut app = app_with_sizes(&[4, 8, 20]);
        for idx in 0..3 {
            app.list_index = idx;
            app.compare_current();
        }
        app.compare_index = 2;

        app.remove_compared();

        assert_eq!(compared_sizes(&app), vec![4, 8]);
        assert_eq!(app.compare_index, 1);
    }

    #[test]
    fn dialog_ignores_skips_already_compared() {
        let mut app = app_with_sizes(&[4, 8, 20]);
        app.compare_current();

        app.dialog_index = 0;
        app.toggle_dialog_pick();
        app.dialog_index = 2;
        app.toggle_dialog_pick();
        app.commit_dialog();

        assert_eq!(compared_sizes(&app), vec![4, 20]);
        assert_eq!(app.screen, Screen::Compare);
    }

    #[test]
    fn reload_resets_comparison() {
        let mut app = app_with_sizes(&[4, 8]);
        app.compare_current();

        app.set_skips(Vec::new());

        assert!(app.comparison.is_empty());
        assert!(app.current_skip().is_none());
    }
}
