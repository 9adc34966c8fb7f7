use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Report, TimeRange};
use crate::stats::ReportStats;

pub type AppSignal = Signal<AppState>;

/// Wire names double as the form control names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterField {
    Search,
    Province,
    District,
    RegionalDivision,
    TimeRange,
}

impl FilterField {
    pub fn name(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Province => "province",
            Self::District => "district",
            Self::RegionalDivision => "regionalDivision",
            Self::TimeRange => "timeRange",
        }
    }
}

/// Current filter snapshot; serialized as the list query string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportFilters {
    pub search: String,
    pub province: String,
    pub district: String,
    pub regional_division: String,
    pub time_range: TimeRange,
}

impl ReportFilters {
    /// Sets one field. A new province clears district and division, a new
    /// district clears division.
    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FilterField::Search => self.search = value,
            FilterField::Province => {
                self.province = value;
                self.district.clear();
                self.regional_division.clear();
            }
            FilterField::District => {
                self.district = value;
                self.regional_division.clear();
            }
            FilterField::RegionalDivision => self.regional_division = value,
            FilterField::TimeRange => self.time_range = value.parse().unwrap_or_default(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReportListState {
    pub reports: Vec<Report>,
    pub stats: ReportStats,
    pub is_loading: bool,
    /// Page-level load failure; replaces the dashboard while set.
    pub load_error: Option<String>,
    generation: u64,
}

impl Default for ReportListState {
    /// Loading until the first fetch settles.
    fn default() -> Self {
        Self {
            reports: Vec::new(),
            stats: ReportStats::default(),
            is_loading: true,
            load_error: None,
            generation: 0,
        }
    }
}

impl ReportListState {
    /// Starts a fetch and returns its token. Older tokens become stale.
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.is_loading = true;
        self.generation
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.generation == token
    }

    /// Applies a successful response. Returns false if `token` is stale.
    pub fn apply_reports(&mut self, token: u64, reports: Vec<Report>) -> bool {
        if !self.is_current(token) {
            return false;
        }
        self.replace(reports);
        self.is_loading = false;
        true
    }

    /// Applies a failed fetch: list and totals are emptied rather than kept
    /// stale. Returns false if `token` is stale.
    pub fn apply_failure(&mut self, token: u64, message: String) -> bool {
        if !self.is_current(token) {
            return false;
        }
        self.replace(Vec::new());
        self.load_error = Some(message);
        self.is_loading = false;
        true
    }

    /// Drops the report with `id` and recomputes the totals. Returns whether
    /// anything was removed.
    pub fn remove_report(&mut self, id: &str) -> bool {
        let before = self.reports.len();
        self.reports.retain(|report| report.id != id);
        if self.reports.len() == before {
            return false;
        }
        self.stats = ReportStats::from_reports(&self.reports);
        true
    }

    fn replace(&mut self, reports: Vec<Report>) {
        self.stats = ReportStats::from_reports(&reports);
        self.reports = reports;
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteState {
    /// Report awaiting confirmation; the modal is open while set.
    pub target: Option<Report>,
    pub in_flight: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AppState {
    pub filters: ReportFilters,
    pub list: ReportListState,
    pub delete: DeleteState,
    pub notifications: Vec<Notification>,
}

impl AppState {
    pub fn push_notification(&mut self, kind: NotificationKind, message: String) -> Uuid {
        let id = Uuid::new_v4();
        self.notifications.push(Notification { id, kind, message });
        id
    }

    pub fn dismiss_notification(&mut self, id: Uuid) {
        self.notifications.retain(|notification| notification.id != id);
    }

    /// Closes the confirmation modal. Ignored while the delete is in flight.
    pub fn cancel_delete(&mut self) {
        if !self.delete.in_flight {
            self.delete.target = None;
        }
    }

    /// Marks the pending delete as sent and returns its report id. `None` when
    /// nothing is pending or a delete is already in flight.
    pub fn start_delete(&mut self) -> Option<String> {
        if self.delete.in_flight {
            return None;
        }
        let id = self.delete.target.as_ref()?.id.clone();
        self.delete.in_flight = true;
        Some(id)
    }

    /// Outcome of a confirmed delete. Success removes the report and closes
    /// the modal; failure leaves list and modal as they were.
    pub fn finish_delete(&mut self, id: &str, succeeded: bool) {
        self.delete.in_flight = false;
        if succeeded {
            self.list.remove_report(id);
            if self
                .delete
                .target
                .as_ref()
                .is_some_and(|target| target.id == id)
            {
                self.delete.target = None;
            }
            self.push_notification(
                NotificationKind::Success,
                "Report deleted successfully".into(),
            );
        } else {
            self.push_notification(NotificationKind::Error, "Failed to delete report".into());
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppActions {
    state: AppSignal,
}

impl AppActions {
    fn update<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R {
        let mut signal = self.state;
        let mut state = signal.write();
        f(&mut state)
    }

    pub fn set_filter(&self, field: FilterField, value: String) {
        self.update(|state| state.filters.set(field, value));
    }

    pub fn begin_fetch(&self) -> u64 {
        self.update(|state| state.list.begin_fetch())
    }

    pub fn apply_reports(&self, token: u64, reports: Vec<Report>) {
        let applied = self.update(|state| state.list.apply_reports(token, reports));
        if !applied {
            tracing::debug!(token, "discarding stale report list");
        }
    }

    pub fn apply_fetch_failure(&self, token: u64, message: String) {
        self.update(|state| {
            if state.list.apply_failure(token, message) {
                state.push_notification(NotificationKind::Error, "Failed to load reports".into());
            } else {
                tracing::debug!(token, "discarding stale fetch failure");
            }
        });
    }

    pub fn request_delete(&self, report: Report) {
        self.update(|state| state.delete.target = Some(report));
    }

    pub fn cancel_delete(&self) {
        self.update(|state| state.cancel_delete());
    }

    pub fn start_delete(&self) -> Option<String> {
        self.update(|state| state.start_delete())
    }

    pub fn finish_delete(&self, id: &str, succeeded: bool) {
        self.update(|state| state.finish_delete(id, succeeded));
    }

    pub fn notify(&self, kind: NotificationKind, message: impl Into<String>) -> Uuid {
        let message = message.into();
        self.update(|state| state.push_notification(kind, message))
    }

    pub fn dismiss_notification(&self, id: Uuid) {
        self.update(|state| state.dismiss_notification(id));
    }
}

pub fn use_app_state() -> AppSignal {
    use_context::<AppSignal>()
}

pub fn use_app_actions() -> AppActions {
    let state = use_app_state();
    AppActions { state }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(id: &str, inspected: u64, affected: u64) -> Report {
        Report {
            id: id.to_string(),
            unique_id: format!("RPT-{id}"),
            full_name: "Kamala Silva".into(),
            created_at: Some("2026-10-01T06:00:00Z".into()),
            province: Some("Southern Province".into()),
            district: "Galle".into(),
            regional_division: "Baddegama".into(),
            number_of_plants: inspected,
            affected_plants: affected,
            affected_percentage: None,
        }
    }

    fn filled_filters() -> ReportFilters {
        ReportFilters {
            search: "blight".into(),
            province: "Southern Province".into(),
            district: "Galle".into(),
            regional_division: "Baddegama".into(),
            time_range: TimeRange::Month,
        }
    }

    #[test]
    fn province_change_clears_district_and_division() {
        let mut filters = filled_filters();
        filters.set(FilterField::Province, "Uva Province");
        assert_eq!(filters.province, "Uva Province");
        assert!(filters.district.is_empty());
        assert!(filters.regional_division.is_empty());
        assert_eq!(filters.search, "blight");
        assert_eq!(filters.time_range, TimeRange::Month);
    }

    #[test]
    fn district_change_clears_division_only() {
        let mut filters = filled_filters();
        filters.set(FilterField::District, "Matara");
        assert_eq!(filters.province, "Southern Province");
        assert_eq!(filters.district, "Matara");
        assert!(filters.regional_division.is_empty());
    }

    #[test]
    fn free_text_fields_do_not_cascade() {
        let mut filters = filled_filters();
        filters.set(FilterField::RegionalDivision, "Akmeemana");
        filters.set(FilterField::Search, "");
        assert_eq!(filters.district, "Galle");
        assert_eq!(filters.regional_division, "Akmeemana");
        assert!(filters.search.is_empty());
    }

    #[test]
    fn unknown_time_range_falls_back_to_all() {
        let mut filters = filled_filters();
        filters.set(FilterField::TimeRange, "week");
        assert_eq!(filters.time_range, TimeRange::Week);
        filters.set(FilterField::TimeRange, "decade");
        assert_eq!(filters.time_range, TimeRange::All);
    }

    #[test]
    fn filters_serialize_as_query_names() {
        let value = serde_json::to_value(filled_filters()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "search": "blight",
                "province": "Southern Province",
                "district": "Galle",
                "regionalDivision": "Baddegama",
                "timeRange": "month"
            })
        );
        assert_eq!(FilterField::RegionalDivision.name(), "regionalDivision");
    }

    #[test]
    fn only_latest_fetch_is_applied() {
        let mut list = ReportListState::default();
        let first = list.begin_fetch();
        let second = list.begin_fetch();

        assert!(list.apply_reports(second, vec![report("new", 10, 1)]));
        assert!(!list.apply_reports(first, vec![report("old", 10, 9)]));
        assert!(!list.apply_failure(first, "late".into()));

        assert_eq!(list.reports.len(), 1);
        assert_eq!(list.reports[0].id, "new");
        assert_eq!(list.stats.total_affected, 1);
        assert!(list.load_error.is_none());
        assert!(!list.is_loading);
    }

    #[test]
    fn stale_success_keeps_loading_flag() {
        let mut list = ReportListState::default();
        let first = list.begin_fetch();
        let _second = list.begin_fetch();
        list.apply_reports(first, vec![report("old", 1, 1)]);
        assert!(list.is_loading);
        assert!(list.reports.is_empty());
    }

    #[test]
    fn failure_empties_list_and_stats() {
        let mut list = ReportListState::default();
        let token = list.begin_fetch();
        list.apply_reports(token, vec![report("a", 100, 20), report("b", 50, 30)]);
        assert_eq!(list.stats.total_inspected, 150);

        let token = list.begin_fetch();
        assert!(list.apply_failure(token, "network down".into()));
        assert!(list.reports.is_empty());
        assert_eq!(list.stats, ReportStats::default());
        assert_eq!(list.load_error.as_deref(), Some("network down"));
    }

    #[test]
    fn successful_delete_removes_report() {
        let mut state = AppState::default();
        let token = state.list.begin_fetch();
        state
            .list
            .apply_reports(token, vec![report("a", 100, 20), report("b", 50, 30)]);
        state.delete.target = Some(report("a", 100, 20));
        state.delete.in_flight = true;

        state.finish_delete("a", true);

        assert!(state.list.reports.iter().all(|r| r.id != "a"));
        assert_eq!(state.list.reports.len(), 1);
        assert_eq!(state.list.stats.total_inspected, 50);
        assert_eq!(state.list.stats.percentage_label(), "60.00");
        assert!(state.delete.target.is_none());
        assert!(!state.delete.in_flight);
        assert_eq!(state.notifications.len(), 1);
        assert_eq!(state.notifications[0].kind, NotificationKind::Success);
    }

    #[test]
    fn failed_delete_keeps_list_and_modal() {
        let mut state = AppState::default();
        let token = state.list.begin_fetch();
        state
            .list
            .apply_reports(token, vec![report("a", 100, 20), report("b", 50, 30)]);
        state.delete.target = Some(report("a", 100, 20));
        state.delete.in_flight = true;

        state.finish_delete("a", false);

        assert_eq!(state.list.reports.len(), 2);
        assert!(state.delete.target.is_some());
        assert!(!state.delete.in_flight);
        assert_eq!(state.notifications[0].kind, NotificationKind::Error);
    }

    #[test]
    fn list_starts_loading() {
        let list = ReportListState::default();
        assert!(list.is_loading);
        assert!(list.reports.is_empty());
        assert!(AppState::default().list.is_loading);
    }

    #[test]
    fn cancel_closes_modal() {
        let mut state = AppState::default();
        state.delete.target = Some(report("a", 10, 1));
        state.cancel_delete();
        assert!(state.delete.target.is_none());
        assert!(!state.delete.in_flight);
    }

    #[test]
    fn cancel_is_ignored_while_in_flight() {
        let mut state = AppState::default();
        state.delete.target = Some(report("a", 10, 1));
        assert_eq!(state.start_delete().as_deref(), Some("a"));

        state.cancel_delete();
        assert_eq!(state.delete.target.as_ref().map(|r| r.id.as_str()), Some("a"));
        assert!(state.delete.in_flight);
    }

    #[test]
    fn confirm_is_ignored_while_in_flight() {
        let mut state = AppState::default();
        state.delete.target = Some(report("a", 10, 1));
        assert_eq!(state.start_delete().as_deref(), Some("a"));
        assert_eq!(state.start_delete(), None);
        assert!(state.delete.in_flight);
    }

    #[test]
    fn confirm_without_target_does_nothing() {
        let mut state = AppState::default();
        assert_eq!(state.start_delete(), None);
        assert!(!state.delete.in_flight);
    }

    #[test]
    fn removing_unknown_id_is_a_no_op() {
        let mut list = ReportListState::default();
        let token = list.begin_fetch();
        list.apply_reports(token, vec![report("a", 1, 0)]);
        assert!(!list.remove_report("zzz"));
        assert_eq!(list.reports.len(), 1);
    }

    #[test]
    fn notifications_dismiss_by_id() {
        let mut state = AppState::default();
        let keep = state.push_notification(NotificationKind::Info, "one".into());
        let drop = state.push_notification(NotificationKind::Warning, "two".into());
        state.dismiss_notification(drop);
        assert_eq!(state.notifications.len(), 1);
        assert_eq!(state.notifications[0].id, keep);
    }
}
