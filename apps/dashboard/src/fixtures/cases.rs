use crate::models::{CaseRecord, CaseStatus, PerformanceSnapshot, SlaState, Stage};

/// Demo queues rendered while no host CRM supplies live data. Application
/// ids repeat across queues on purpose; the dashboard never deduplicates.
pub fn all_cases() -> Vec<CaseRecord> {
    let mut cases = escalated_cases();
    cases.extend(pending_onba_cases());
    cases.extend(under_review_cases());
    cases.extend(unassigned_cases());
    cases
}

pub fn escalated_cases() -> Vec<CaseRecord> {
    vec![
        CaseRecord {
            application_id: "8861".into(),
            client_name: "John Smith".into(),
            stage: Stage::Escalated,
            status: CaseStatus::Pending,
            priority: 5,
            owner: Some("Officer A".into()),
            created_at: None,
            age_in_hours: None,
            escalation_reason: Some("High-risk profile".into()),
            escalation_age: Some(2),
            escalated: true,
            sla: SlaState::Breach,
            sla_minutes_left: -120,
            blocked: false,
            started_at: None,
        },
        CaseRecord {
            application_id: "9261".into(),
            client_name: "Jane Doe".into(),
            stage: Stage::Escalated,
            status: CaseStatus::New,
            priority: 5,
            owner: Some("Officer B".into()),
            created_at: None,
            age_in_hours: None,
            escalation_reason: Some("PEP Match".into()),
            escalation_age: Some(4),
            escalated: true,
            sla: SlaState::Warning,
            sla_minutes_left: 45,
            blocked: false,
            started_at: None,
        },
        CaseRecord {
            application_id: "8829".into(),
            client_name: "Acme Corp".into(),
            stage: Stage::Escalated,
            status: CaseStatus::Processed,
            priority: 5,
            owner: Some("Officer A".into()),
            created_at: None,
            age_in_hours: None,
            escalation_reason: Some("Sanctions list flagged".into()),
            escalation_age: Some(1),
            escalated: true,
            sla: SlaState::Normal,
            sla_minutes_left: 320,
            blocked: false,
            started_at: None,
        },
        CaseRecord {
            application_id: "4846".into(),
            client_name: "Tech Ventures Ltd".into(),
            stage: Stage::Escalated,
            status: CaseStatus::Processed,
            priority: 1,
            owner: Some("Officer C".into()),
            created_at: None,
            age_in_hours: None,
            escalation_reason: Some("Manual review required".into()),
            escalation_age: Some(3),
            escalated: true,
            sla: SlaState::Normal,
            sla_minutes_left: 240,
            blocked: true,
            started_at: None,
        },
    ]
}

pub fn pending_onba_cases() -> Vec<CaseRecord> {
    vec![
        CaseRecord {
            application_id: "9261".into(),
            client_name: "Jane Doe".into(),
            stage: Stage::PendingOnba,
            status: CaseStatus::New,
            priority: 5,
            owner: Some("Officer A".into()),
            created_at: None,
            age_in_hours: Some(7.5),
            escalation_reason: None,
            escalation_age: None,
            escalated: false,
            sla: SlaState::Warning,
            sla_minutes_left: 30,
            blocked: false,
            started_at: None,
        },
        CaseRecord {
            application_id: "8829".into(),
            client_name: "Acme Corp".into(),
            stage: Stage::PendingOnba,
            status: CaseStatus::Processed,
            priority: 5,
            owner: Some("Officer B".into()),
            created_at: None,
            age_in_hours: Some(5.2),
            escalation_reason: None,
            escalation_age: None,
            escalated: false,
            sla: SlaState::Normal,
            sla_minutes_left: 180,
            blocked: false,
            started_at: None,
        },
        CaseRecord {
            application_id: "3536".into(),
            client_name: "Global Solutions".into(),
            stage: Stage::PendingOnba,
            status: CaseStatus::Canceled,
            priority: 2,
            owner: Some("Officer C".into()),
            created_at: None,
            age_in_hours: Some(3.8),
            escalation_reason: None,
            escalation_age: None,
            escalated: false,
            sla: SlaState::Normal,
            sla_minutes_left: 240,
            blocked: false,
            started_at: None,
        },
    ]
}

pub fn under_review_cases() -> Vec<CaseRecord> {
    vec![
        CaseRecord {
            application_id: "6690".into(),
            client_name: "Michael Brown".into(),
            stage: Stage::UnderReview,
            status: CaseStatus::Rejected,
            priority: 4,
            owner: Some("Officer A".into()),
            created_at: None,
            age_in_hours: None,
            escalation_reason: None,
            escalation_age: None,
            escalated: false,
            sla: SlaState::Normal,
            sla_minutes_left: 300,
            blocked: false,
            started_at: Some("2025-01-23 10:30".into()),
        },
        CaseRecord {
            application_id: "1439".into(),
            client_name: "Sarah Johnson".into(),
            stage: Stage::UnderReview,
            status: CaseStatus::Failed,
            priority: 1,
            owner: Some("Officer B".into()),
            created_at: None,
            age_in_hours: None,
            escalation_reason: None,
            escalation_age: None,
            escalated: false,
            sla: SlaState::Breach,
            sla_minutes_left: -200,
            blocked: false,
            started_at: Some("2025-01-23 09:15".into()),
        },
        CaseRecord {
            application_id: "5948".into(),
            client_name: "David Lee".into(),
            stage: Stage::UnderReview,
            status: CaseStatus::Pending,
            priority: 2,
            owner: Some("Officer C".into()),
            created_at: None,
            age_in_hours: None,
            escalation_reason: None,
            escalation_age: None,
            escalated: false,
            sla: SlaState::Warning,
            sla_minutes_left: 60,
            blocked: false,
            started_at: Some("2025-01-23 08:45".into()),
        },
    ]
}

pub fn unassigned_cases() -> Vec<CaseRecord> {
    vec![
        CaseRecord {
            application_id: "5028".into(),
            client_name: "Emily Wilson".into(),
            stage: Stage::Unassigned,
            status: CaseStatus::Rejected,
            priority: 1,
            owner: None,
            created_at: Some("2025-01-23 14:20".into()),
            age_in_hours: Some(2.0),
            escalation_reason: None,
            escalation_age: None,
            escalated: false,
            sla: SlaState::Normal,
            sla_minutes_left: 360,
            blocked: false,
            started_at: None,
        },
        CaseRecord {
            application_id: "4600".into(),
            client_name: "Robert Taylor".into(),
            stage: Stage::Unassigned,
            status: CaseStatus::Pending,
            priority: 0,
            owner: None,
            created_at: Some("2025-01-23 13:45".into()),
            age_in_hours: Some(2.5),
            escalation_reason: None,
            escalation_age: None,
            escalated: false,
            sla: SlaState::Normal,
            sla_minutes_left: 330,
            blocked: false,
            started_at: None,
        },
        CaseRecord {
            application_id: "7123".into(),
            client_name: "Lisa Anderson".into(),
            stage: Stage::Unassigned,
            status: CaseStatus::New,
            priority: 3,
            owner: None,
            created_at: Some("2025-01-23 12:00".into()),
            age_in_hours: Some(4.0),
            escalation_reason: None,
            escalation_age: None,
            escalated: false,
            sla: SlaState::Normal,
            sla_minutes_left: 240,
            blocked: false,
            started_at: None,
        },
    ]
}

pub fn performance_snapshot() -> PerformanceSnapshot {
    PerformanceSnapshot {
        sla_compliance_pct: 92,
        avg_response: "2h 15m".into(),
        completed_today: 12,
        completed_this_week: 47,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::KpiCounts;

    #[test]
    fn working_set_concatenates_the_four_queues_without_dedup() {
        let cases = all_cases();
        assert_eq!(cases.len(), 13);

        // "9261" and "8829" appear in two queues each, by design.
        let dup = cases
            .iter()
            .filter(|case| case.application_id == "9261")
            .count();
        assert_eq!(dup, 2);
    }

    #[test]
    fn fixture_counts_match_the_known_data_set() {
        let counts = KpiCounts::tally(&all_cases());
        assert_eq!(
            counts,
            KpiCounts {
                pending_onb: 3,
                po_onb: 3,
                escalated: 4,
                onba_queue: 13,
                sla_warning: 3,
                sla_breach: 2,
            }
        );
    }

    #[test]
    fn every_record_sits_in_its_queue_stage() {
        assert!(escalated_cases().iter().all(|c| c.stage == Stage::Escalated));
        assert!(pending_onba_cases().iter().all(|c| c.stage == Stage::PendingOnba));
        assert!(under_review_cases().iter().all(|c| c.stage == Stage::UnderReview));
        assert!(unassigned_cases().iter().all(|c| c.stage == Stage::Unassigned));
    }
}
