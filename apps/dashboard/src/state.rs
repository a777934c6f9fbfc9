use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::{CaseRecord, CaseStatus, KpiCounts, KpiFilter, PerformanceSnapshot, SlaState};

pub type AppSignal = Signal<AppState>;

/// The four user-adjustable filter dimensions. Every dimension that is
/// unset is treated as match-all; the dimensions are ANDed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseFilters {
    #[serde(default)]
    pub search_term: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CaseStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sla: Option<SlaState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kpi: Option<KpiFilter>,
}

impl CaseFilters {
    pub fn matches(&self, case: &CaseRecord) -> bool {
        let term = self.search_term.trim().to_lowercase();
        if !term.is_empty()
            && !case.application_id.to_lowercase().contains(&term)
            && !case.client_name.to_lowercase().contains(&term)
        {
            return false;
        }

        if let Some(status) = self.status {
            if case.status != status {
                return false;
            }
        }

        if let Some(sla) = self.sla {
            if case.sla != sla {
                return false;
            }
        }

        if let Some(kpi) = self.kpi {
            if !kpi.matches(case) {
                return false;
            }
        }

        true
    }

    /// Idempotent toggle: selecting the active tile again clears it.
    pub fn toggle_kpi(&mut self, filter: KpiFilter) {
        self.kpi = if self.kpi == Some(filter) {
            None
        } else {
            Some(filter)
        };
    }

    pub fn clear(&mut self) {
        self.search_term.clear();
        self.status = None;
        self.sla = None;
        self.kpi = None;
    }

    pub fn is_empty(&self) -> bool {
        self.search_term.trim().is_empty()
            && self.status.is_none()
            && self.sla.is_none()
            && self.kpi.is_none()
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct QueueState {
    pub cases: Vec<CaseRecord>,
    pub is_loading: bool,
    pub error: Option<String>,
    #[serde(default)]
    pub filters: CaseFilters,
}

impl QueueState {
    /// Working set narrowed by the active filters, source order preserved.
    pub fn filtered(&self) -> Vec<CaseRecord> {
        self.cases
            .iter()
            .filter(|case| self.filters.matches(case))
            .cloned()
            .collect()
    }

    /// Urgent inbox: SLA warning/breach or blocked, narrowed by the same
    /// filters. Always a subset of `filtered()`.
    pub fn urgent(&self) -> Vec<CaseRecord> {
        self.cases
            .iter()
            .filter(|case| case.is_urgent() && self.filters.matches(case))
            .cloned()
            .collect()
    }

    /// KPI tile counts over the full unfiltered set.
    pub fn kpis(&self) -> KpiCounts {
        KpiCounts::tally(&self.cases)
    }

    pub fn escalations(&self) -> Vec<CaseRecord> {
        self.cases
            .iter()
            .filter(|case| case.escalated)
            .cloned()
            .collect()
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct OperationState {
    pub notice: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AppState {
    pub officer: Option<String>,
    pub queue: QueueState,
    pub performance: PerformanceSnapshot,
    pub operation: OperationState,
}

/// Thin handle over the shared state signal; every UI mutation goes
/// through here so components stay presentational.
#[derive(Clone, Copy)]
pub struct AppActions {
    state: AppSignal,
}

impl AppActions {
    pub fn set_search_term(mut self, term: String) {
        self.state.write().queue.filters.search_term = term;
    }

    pub fn set_status_filter(mut self, status: Option<CaseStatus>) {
        self.state.write().queue.filters.status = status;
    }

    pub fn set_sla_filter(mut self, sla: Option<SlaState>) {
        self.state.write().queue.filters.sla = sla;
    }

    pub fn toggle_kpi_filter(mut self, filter: KpiFilter) {
        self.state.write().queue.filters.toggle_kpi(filter);
    }

    pub fn clear_kpi_filter(mut self) {
        self.state.write().queue.filters.kpi = None;
    }

    pub fn reset_filters(mut self) {
        self.state.write().queue.filters.clear();
    }

    pub fn set_queue_loading(mut self, loading: bool) {
        self.state.write().queue.is_loading = loading;
    }

    pub fn set_queue_error(mut self, message: Option<String>) {
        let mut state = self.state.write();
        state.queue.error = message;
        if state.queue.error.is_some() {
            state.queue.is_loading = false;
        }
    }

    pub fn set_cases(mut self, cases: Vec<CaseRecord>) {
        let mut state = self.state.write();
        state.queue.cases = cases;
        state.queue.is_loading = false;
        state.queue.error = None;
    }

    pub fn set_performance(mut self, snapshot: PerformanceSnapshot) {
        self.state.write().performance = snapshot;
    }

    pub fn set_officer(mut self, officer: Option<String>) {
        self.state.write().officer = officer;
    }

    /// UI stub: assignment is completed by the host CRM, the dashboard only
    /// acknowledges the click. No case record is mutated.
    pub fn request_assignment(mut self, case: &CaseRecord) {
        info!(
            application_id = %case.application_id,
            client = %case.client_name,
            "assignment requested"
        );

        let mut state = self.state.write();
        let officer = state.officer.clone().unwrap_or_else(|| "you".to_string());
        state.operation.notice = Some(format!(
            "Case {} ({}) queued for assignment to {}. The host CRM completes the hand-off.",
            case.application_id, case.client_name, officer
        ));
        state.operation.context = Some("Assign to me".to_string());
    }

    pub fn clear_operation_status(mut self) {
        self.state.write().operation = OperationState::default();
    }
}

pub fn use_app_state() -> AppSignal {
    use_context::<AppSignal>()
}

pub fn use_app_actions() -> AppActions {
    AppActions {
        state: use_app_state(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::cases::all_cases;
    use crate::models::Stage;

    fn queue_with(filters: CaseFilters) -> QueueState {
        QueueState {
            cases: all_cases(),
            filters,
            ..QueueState::default()
        }
    }

    #[test]
    fn empty_filters_match_every_record() {
        let filters = CaseFilters::default();
        for case in all_cases() {
            assert!(filters.matches(&case), "case {} rejected", case.application_id);
        }
    }

    #[test]
    fn search_is_case_insensitive_over_id_and_client() {
        let mut upper = CaseFilters::default();
        upper.search_term = "ACME".into();
        let mut lower = CaseFilters::default();
        lower.search_term = "acme".into();

        let upper_hits = queue_with(upper).filtered();
        let lower_hits = queue_with(lower).filtered();
        assert_eq!(upper_hits, lower_hits);
        assert!(!upper_hits.is_empty());
        assert!(upper_hits.iter().all(|case| case.client_name == "Acme Corp"));

        let mut by_id = CaseFilters::default();
        by_id.search_term = "886".into();
        let id_hits = queue_with(by_id).filtered();
        assert!(id_hits.iter().any(|case| case.application_id == "8861"));
    }

    #[test]
    fn dimensions_are_anded() {
        let filters = CaseFilters {
            search_term: "jane".into(),
            status: Some(CaseStatus::New),
            sla: Some(SlaState::Warning),
            kpi: Some(KpiFilter::PendingOnb),
        };

        let hits = queue_with(filters).filtered();
        assert_eq!(hits.len(), 1);
        let case = &hits[0];
        assert_eq!(case.client_name, "Jane Doe");
        assert_eq!(case.stage, Stage::PendingOnba);
        assert_eq!(case.status, CaseStatus::New);
        assert_eq!(case.sla, SlaState::Warning);
    }

    #[test]
    fn status_filter_excludes_other_statuses() {
        let filters = CaseFilters {
            status: Some(CaseStatus::Processed),
            ..CaseFilters::default()
        };
        let hits = queue_with(filters).filtered();
        assert!(!hits.is_empty());
        assert!(hits.iter().all(|case| case.status == CaseStatus::Processed));
    }

    #[test]
    fn urgent_is_a_subset_of_filtered_for_any_filter_combination() {
        let combos = [
            CaseFilters::default(),
            CaseFilters {
                search_term: "officer".into(),
                ..CaseFilters::default()
            },
            CaseFilters {
                sla: Some(SlaState::Breach),
                ..CaseFilters::default()
            },
            CaseFilters {
                kpi: Some(KpiFilter::Escalated),
                ..CaseFilters::default()
            },
            CaseFilters {
                status: Some(CaseStatus::Pending),
                kpi: Some(KpiFilter::SlaBreach),
                ..CaseFilters::default()
            },
        ];

        for filters in combos {
            let queue = queue_with(filters);
            let filtered = queue.filtered();
            for case in queue.urgent() {
                assert!(
                    filtered.contains(&case),
                    "urgent case {} missing from filtered set",
                    case.application_id
                );
            }
        }
    }

    #[test]
    fn urgent_includes_blocked_cases_with_normal_sla() {
        let queue = queue_with(CaseFilters::default());
        let urgent = queue.urgent();
        assert!(urgent
            .iter()
            .any(|case| case.blocked && case.sla == SlaState::Normal));
    }

    #[test]
    fn urgent_preserves_source_order() {
        let queue = queue_with(CaseFilters::default());
        let urgent = queue.urgent();
        let positions: Vec<usize> = urgent
            .iter()
            .map(|case| {
                queue
                    .cases
                    .iter()
                    .position(|candidate| candidate == case)
                    .unwrap()
            })
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn kpi_toggle_twice_restores_unfiltered_state() {
        let mut filters = CaseFilters::default();
        filters.toggle_kpi(KpiFilter::SlaBreach);
        assert_eq!(filters.kpi, Some(KpiFilter::SlaBreach));
        filters.toggle_kpi(KpiFilter::SlaBreach);
        assert_eq!(filters.kpi, None);
        assert!(filters.is_empty());
    }

    #[test]
    fn kpi_toggle_switches_between_tiles() {
        let mut filters = CaseFilters::default();
        filters.toggle_kpi(KpiFilter::Escalated);
        filters.toggle_kpi(KpiFilter::SlaWarning);
        assert_eq!(filters.kpi, Some(KpiFilter::SlaWarning));
    }

    #[test]
    fn kpi_counts_ignore_active_filters() {
        let filters = CaseFilters {
            status: Some(CaseStatus::Failed),
            ..CaseFilters::default()
        };
        let queue = queue_with(filters);
        assert_eq!(queue.kpis(), KpiCounts::tally(&all_cases()));
    }

    #[test]
    fn reset_clears_every_dimension() {
        let mut filters = CaseFilters {
            search_term: "acme".into(),
            status: Some(CaseStatus::New),
            sla: Some(SlaState::Warning),
            kpi: Some(KpiFilter::OnbaQueue),
        };
        filters.clear();
        assert!(filters.is_empty());
        assert_eq!(filters, CaseFilters::default());
    }
}
