use crate::models::{CaseStatus, SlaState};

/// Countdown label for the SLA column. Total over any minute value;
/// negative and zero minutes render as already breached.
pub fn format_sla_timer(minutes_left: i64) -> String {
    if minutes_left <= 0 {
        format!("Breached {}m ago", minutes_left.abs())
    } else if minutes_left < 120 {
        format!("{minutes_left}m left")
    } else {
        format!("{}h {}m", minutes_left / 60, minutes_left % 60)
    }
}

/// Chip classes for the status badge.
pub fn status_badge_classes(status: CaseStatus) -> &'static str {
    match status {
        CaseStatus::Processed => "bg-emerald-100 text-emerald-700",
        CaseStatus::Pending => "bg-amber-100 text-amber-700",
        CaseStatus::New => "bg-blue-100 text-blue-700",
        CaseStatus::Rejected | CaseStatus::Failed => "bg-red-100 text-red-700",
        CaseStatus::Canceled => "bg-slate-200 text-slate-600",
    }
}

/// Text color for the SLA timer cell.
pub fn sla_text_class(sla: SlaState) -> &'static str {
    match sla {
        SlaState::Breach => "text-red-600",
        SlaState::Warning => "text-orange-600",
        SlaState::Normal => "text-emerald-600",
    }
}

/// Row tint matching the SLA bucket.
pub fn sla_row_class(sla: SlaState) -> &'static str {
    match sla {
        SlaState::Breach => "bg-red-50",
        SlaState::Warning => "bg-orange-50",
        SlaState::Normal => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breached_timers_report_absolute_minutes() {
        assert_eq!(format_sla_timer(-120), "Breached 120m ago");
        assert_eq!(format_sla_timer(0), "Breached 0m ago");
        assert_eq!(format_sla_timer(-1), "Breached 1m ago");
    }

    #[test]
    fn short_timers_render_in_minutes() {
        assert_eq!(format_sla_timer(45), "45m left");
        assert_eq!(format_sla_timer(1), "1m left");
        assert_eq!(format_sla_timer(119), "119m left");
    }

    #[test]
    fn long_timers_render_in_hours_and_minutes() {
        assert_eq!(format_sla_timer(320), "5h 20m");
        assert_eq!(format_sla_timer(120), "2h 0m");
        assert_eq!(format_sla_timer(i64::MAX / 60 * 60), format!("{}h 0m", i64::MAX / 60));
    }

    #[test]
    fn failed_and_rejected_share_a_badge() {
        assert_eq!(
            status_badge_classes(CaseStatus::Failed),
            status_badge_classes(CaseStatus::Rejected)
        );
    }

    #[test]
    fn normal_sla_rows_are_untinted() {
        assert_eq!(sla_row_class(SlaState::Normal), "");
        assert_ne!(sla_row_class(SlaState::Breach), sla_row_class(SlaState::Warning));
    }
}
