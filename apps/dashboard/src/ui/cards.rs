use dioxus::prelude::*;

use crate::state::use_app_state;

const CARD_LIMIT: usize = 5;

/// Side card listing the first few escalated cases from the full
/// working set, untouched by the shared filters.
#[component]
pub fn EscalationsCard() -> Element {
    let snapshot = use_app_state().read().clone();
    let escalations = snapshot.queue.escalations();

    rsx! {
        section { class: "mb-6 rounded-lg bg-white shadow-sm",
            header { class: "border-b border-slate-100 p-4",
                h3 { class: "text-sm font-semibold text-slate-900", "Escalations" }
            }
            div { class: "p-4",
                if escalations.is_empty() {
                    p { class: "text-xs italic text-slate-400", "No escalated cases" }
                } else {
                    for (idx, case) in escalations.iter().take(CARD_LIMIT).enumerate() {
                        div {
                            key: "{case.application_id}-{idx}",
                            class: "mb-2 rounded-md border-l-2 border-orange-500 bg-orange-50 p-3",
                            span { class: "block text-xs font-semibold text-orange-800", "{case.application_id}" }
                            span { class: "block text-xs text-slate-600", "{case.client_name}" }
                            if let Some(reason) = case.escalation_reason.as_ref() {
                                span { class: "block text-[11px] text-slate-500", "{reason}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Side card showing recent working-set entries with their assignment.
#[component]
pub fn RecentUpdatesCard() -> Element {
    let snapshot = use_app_state().read().clone();
    let recent: Vec<_> = snapshot.queue.cases.iter().take(CARD_LIMIT).cloned().collect();

    rsx! {
        section { class: "rounded-lg bg-white shadow-sm",
            header { class: "border-b border-slate-100 p-4",
                h3 { class: "text-sm font-semibold text-slate-900", "Recent Updates" }
            }
            div { class: "p-4",
                if recent.is_empty() {
                    p { class: "text-xs italic text-slate-400", "No recent activity" }
                } else {
                    for (idx, case) in recent.iter().enumerate() {
                        div {
                            key: "{case.application_id}-{idx}",
                            class: "mb-1 border-b border-slate-100 p-2",
                            span { class: "block text-xs font-medium text-slate-900", "{case.application_id}" }
                            span { class: "block text-[11px] text-slate-500", "{case.stage.label()}" }
                            span { class: "block text-xs text-slate-400",
                                {case.owner.as_ref().map(|owner| format!("Assigned to {owner}")).unwrap_or_else(|| "Unassigned".to_string())}
                            }
                        }
                    }
                }
            }
        }
    }
}
