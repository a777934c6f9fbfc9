use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Coarse workflow queue a case currently resides in. Set once when the
/// record is created; nothing in the dashboard mutates it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    Escalated,
    #[serde(rename = "Pending ONBA")]
    PendingOnba,
    #[serde(rename = "Under Review")]
    UnderReview,
    Unassigned,
}

impl Stage {
    pub fn label(self) -> &'static str {
        match self {
            Self::Escalated => "Escalated",
            Self::PendingOnba => "Pending ONBA",
            Self::UnderReview => "Under Review",
            Self::Unassigned => "Unassigned",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseStatus {
    Pending,
    New,
    Processed,
    Rejected,
    Failed,
    Canceled,
}

impl CaseStatus {
    pub const ALL: [CaseStatus; 6] = [
        Self::Pending,
        Self::New,
        Self::Processed,
        Self::Rejected,
        Self::Failed,
        Self::Canceled,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::New => "New",
            Self::Processed => "Processed",
            Self::Rejected => "Rejected",
            Self::Failed => "Failed",
            Self::Canceled => "Canceled",
        }
    }
}

/// Categorical urgency bucket supplied directly by the data source; the
/// dashboard never derives it from a timestamp.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlaState {
    Normal,
    Warning,
    Breach,
}

impl SlaState {
    pub const ALL: [SlaState; 3] = [Self::Normal, Self::Warning, Self::Breach];

    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Warning => "Warning",
            Self::Breach => "Breach",
        }
    }
}

/// One onboarding case as supplied by the host CRM. `application_id` is not
/// globally unique across queue lists; duplicates are expected and the
/// working set is never deduplicated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseRecord {
    pub application_id: String,
    pub client_name: String,
    pub stage: Stage,
    pub status: CaseStatus,
    pub priority: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_in_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escalation_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escalation_age: Option<u32>,
    pub escalated: bool,
    pub sla: SlaState,
    pub sla_minutes_left: i64,
    pub blocked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<String>,
}

impl CaseRecord {
    /// Urgent-inbox membership, before the shared filters are applied.
    pub fn is_urgent(&self) -> bool {
        matches!(self.sla, SlaState::Warning | SlaState::Breach) || self.blocked
    }
}

/// The six quick-filters behind the KPI tiles. A closed set: each variant
/// carries its own predicate, so there is no string-keyed lookup that could
/// miss at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KpiFilter {
    PendingOnb,
    PoOnb,
    Escalated,
    OnbaQueue,
    SlaWarning,
    SlaBreach,
}

impl KpiFilter {
    /// Tile order on the dashboard.
    pub const ALL: [KpiFilter; 6] = [
        Self::PendingOnb,
        Self::PoOnb,
        Self::Escalated,
        Self::OnbaQueue,
        Self::SlaWarning,
        Self::SlaBreach,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Self::PendingOnb => "pending-onb",
            Self::PoOnb => "po-onb",
            Self::Escalated => "escalated",
            Self::OnbaQueue => "onba-queue",
            Self::SlaWarning => "sla-warning",
            Self::SlaBreach => "sla-breach",
        }
    }

    /// Tile caption.
    pub fn label(self) -> &'static str {
        match self {
            Self::PendingOnb => "Pending ONB",
            Self::PoOnb => "PO ONB",
            Self::Escalated => "Escalated",
            Self::OnbaQueue => "ONBA Queue",
            Self::SlaWarning => "SLA Warning",
            Self::SlaBreach => "SLA Breach",
        }
    }

    /// Longer caption used by the active-filter banner.
    pub fn description(self) -> &'static str {
        match self {
            Self::PendingOnb => "Pending ONB Cases",
            Self::PoOnb => "Post-Onboarding Cases",
            Self::Escalated => "Escalated Cases",
            Self::OnbaQueue => "All Cases",
            Self::SlaWarning => "SLA Warning Cases",
            Self::SlaBreach => "SLA Breach Cases",
        }
    }

    pub fn matches(self, record: &CaseRecord) -> bool {
        match self {
            Self::PendingOnb => record.stage == Stage::PendingOnba,
            Self::PoOnb => record.status == CaseStatus::Processed,
            Self::Escalated => record.escalated,
            Self::OnbaQueue => true,
            Self::SlaWarning => record.sla == SlaState::Warning,
            Self::SlaBreach => record.sla == SlaState::Breach,
        }
    }
}

impl fmt::Display for KpiFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown KPI filter `{0}`")]
pub struct UnknownKpiFilter(pub String);

impl FromStr for KpiFilter {
    type Err = UnknownKpiFilter;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|filter| filter.slug() == value)
            .ok_or_else(|| UnknownKpiFilter(value.to_string()))
    }
}

/// Aggregate counts for the KPI tiles, always computed over the full
/// unfiltered working set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiCounts {
    pub pending_onb: usize,
    pub po_onb: usize,
    pub escalated: usize,
    pub onba_queue: usize,
    pub sla_warning: usize,
    pub sla_breach: usize,
}

impl KpiCounts {
    pub fn tally(cases: &[CaseRecord]) -> Self {
        let mut counts = Self {
            onba_queue: cases.len(),
            ..Self::default()
        };

        for case in cases {
            if case.stage == Stage::PendingOnba {
                counts.pending_onb += 1;
            }
            if case.status == CaseStatus::Processed {
                counts.po_onb += 1;
            }
            if case.escalated {
                counts.escalated += 1;
            }
            match case.sla {
                SlaState::Warning => counts.sla_warning += 1,
                SlaState::Breach => counts.sla_breach += 1,
                SlaState::Normal => {}
            }
        }

        counts
    }

    pub fn value(self, filter: KpiFilter) -> usize {
        match filter {
            KpiFilter::PendingOnb => self.pending_onb,
            KpiFilter::PoOnb => self.po_onb,
            KpiFilter::Escalated => self.escalated,
            KpiFilter::OnbaQueue => self.onba_queue,
            KpiFilter::SlaWarning => self.sla_warning,
            KpiFilter::SlaBreach => self.sla_breach,
        }
    }
}

/// Static personal metrics shown in the footer panel.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSnapshot {
    pub sla_compliance_pct: u8,
    pub avg_response: String,
    pub completed_today: u32,
    pub completed_this_week: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(stage: Stage, status: CaseStatus, sla: SlaState, escalated: bool) -> CaseRecord {
        CaseRecord {
            application_id: "1000".into(),
            client_name: "Test Client".into(),
            stage,
            status,
            priority: 1,
            owner: None,
            created_at: None,
            age_in_hours: None,
            escalation_reason: None,
            escalation_age: None,
            escalated,
            sla,
            sla_minutes_left: 60,
            blocked: false,
            started_at: None,
        }
    }

    #[test]
    fn kpi_predicates_match_their_dimension() {
        let pending = record(Stage::PendingOnba, CaseStatus::New, SlaState::Normal, false);
        assert!(KpiFilter::PendingOnb.matches(&pending));
        assert!(!KpiFilter::PoOnb.matches(&pending));

        let processed = record(Stage::Unassigned, CaseStatus::Processed, SlaState::Normal, false);
        assert!(KpiFilter::PoOnb.matches(&processed));

        let escalated = record(Stage::Escalated, CaseStatus::Pending, SlaState::Breach, true);
        assert!(KpiFilter::Escalated.matches(&escalated));
        assert!(KpiFilter::SlaBreach.matches(&escalated));
        assert!(!KpiFilter::SlaWarning.matches(&escalated));
    }

    #[test]
    fn onba_queue_matches_everything() {
        for status in CaseStatus::ALL {
            let case = record(Stage::UnderReview, status, SlaState::Normal, false);
            assert!(KpiFilter::OnbaQueue.matches(&case));
        }
    }

    #[test]
    fn kpi_filter_round_trips_through_slug() {
        for filter in KpiFilter::ALL {
            assert_eq!(filter.slug().parse::<KpiFilter>(), Ok(filter));
        }
    }

    #[test]
    fn unknown_kpi_slug_is_a_hard_failure() {
        let err = "sla-meltdown".parse::<KpiFilter>().unwrap_err();
        assert_eq!(err, UnknownKpiFilter("sla-meltdown".into()));
    }

    #[test]
    fn tally_counts_each_dimension_independently() {
        let cases = vec![
            record(Stage::PendingOnba, CaseStatus::Processed, SlaState::Warning, false),
            record(Stage::Escalated, CaseStatus::Pending, SlaState::Breach, true),
            record(Stage::Unassigned, CaseStatus::New, SlaState::Normal, false),
        ];

        let counts = KpiCounts::tally(&cases);
        assert_eq!(counts.onba_queue, 3);
        assert_eq!(counts.pending_onb, 1);
        assert_eq!(counts.po_onb, 1);
        assert_eq!(counts.escalated, 1);
        assert_eq!(counts.sla_warning, 1);
        assert_eq!(counts.sla_breach, 1);
    }

    #[test]
    fn tally_tracks_changes_to_the_working_set() {
        let mut cases = vec![record(
            Stage::PendingOnba,
            CaseStatus::New,
            SlaState::Warning,
            false,
        )];
        let before = KpiCounts::tally(&cases);
        assert_eq!(before.sla_warning, 1);
        assert_eq!(before.sla_breach, 0);

        cases[0].sla = SlaState::Breach;
        cases.push(record(Stage::Unassigned, CaseStatus::New, SlaState::Normal, false));

        let after = KpiCounts::tally(&cases);
        assert_eq!(after.onba_queue, 2);
        assert_eq!(after.sla_warning, 0);
        assert_eq!(after.sla_breach, 1);
    }

    #[test]
    fn case_record_deserializes_from_host_camel_case_payload() {
        let payload = serde_json::json!({
            "applicationId": "8861",
            "clientName": "John Smith",
            "stage": "Pending ONBA",
            "status": "Pending",
            "priority": 5,
            "owner": "Officer A",
            "escalated": false,
            "sla": "warning",
            "slaMinutesLeft": 30,
            "blocked": false
        });

        let case: CaseRecord = serde_json::from_value(payload).unwrap();
        assert_eq!(case.stage, Stage::PendingOnba);
        assert_eq!(case.sla, SlaState::Warning);
        assert_eq!(case.sla_minutes_left, 30);
        assert!(case.created_at.is_none());
    }
}
