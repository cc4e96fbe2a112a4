//! Application state shared by every view.
//!
//! The frontend holds exactly one [`AppState`] in a signal and routes every
//! UI event through the methods below, so the whole screen can be reproduced
//! from a serialized state plus the record set.

use serde::{Deserialize, Serialize};

use crate::filter::{filter_records, find_record, FilterCriteria};
use crate::geo::{markers, MapMarker};
use crate::models::PropertyRecord;

/// Which pane is shown on narrow screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Map,
    List,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub criteria: FilterCriteria,
    pub query: String,
    pub selected_id: Option<String>,
    pub detail_open: bool,
    pub view_mode: ViewMode,
    pub sidebar_collapsed: bool,
    pub filters_open: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::initial(false)
    }
}

impl AppState {
    /// Mobile starts on the list, desktop on the map.
    pub fn initial(is_mobile: bool) -> Self {
        Self {
            criteria: FilterCriteria::default(),
            query: String::new(),
            selected_id: None,
            detail_open: false,
            view_mode: if is_mobile { ViewMode::List } else { ViewMode::Map },
            sidebar_collapsed: false,
            filters_open: false,
        }
    }

    pub fn apply_filters(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    pub fn reset_filters(&mut self) {
        self.criteria = FilterCriteria::default();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Select a record and open its detail view.
    pub fn select(&mut self, id: impl Into<String>) {
        self.selected_id = Some(id.into());
        self.detail_open = true;
    }

    /// Select a record without opening its detail view (map popup).
    pub fn focus(&mut self, id: impl Into<String>) {
        self.selected_id = Some(id.into());
    }

    /// Close the detail view; the selection stays so the map keeps focus.
    pub fn close_detail(&mut self) {
        self.detail_open = false;
    }

    pub fn clear_selection(&mut self) {
        self.selected_id = None;
        self.detail_open = false;
    }

    pub fn toggle_view(&mut self) {
        self.view_mode = match self.view_mode {
            ViewMode::Map => ViewMode::List,
            ViewMode::List => ViewMode::Map,
        };
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    pub fn toggle_filters(&mut self) {
        self.filters_open = !self.filters_open;
    }

    /// Records visible under the current criteria and query.
    pub fn visible<'a>(&self, records: &'a [PropertyRecord]) -> Vec<&'a PropertyRecord> {
        filter_records(records, &self.criteria, &self.query)
    }

    /// Markers for the visible records.
    pub fn visible_markers(&self, records: &[PropertyRecord]) -> Vec<MapMarker> {
        markers(self.visible(records))
    }

    pub fn selected<'a>(&self, records: &'a [PropertyRecord]) -> Option<&'a PropertyRecord> {
        self.selected_id
            .as_deref()
            .and_then(|id| find_record(records, id))
    }

    /// The record to show in the detail view, if it is open.
    pub fn detail<'a>(&self, records: &'a [PropertyRecord]) -> Option<&'a PropertyRecord> {
        if self.detail_open {
            self.selected(records)
        } else {
            None
        }
    }
}
