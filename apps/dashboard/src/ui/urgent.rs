use dioxus::prelude::*;

use crate::models::CaseRecord;
use crate::state::use_app_state;
use crate::ui::format::{format_sla_timer, status_badge_classes};

/// SLA warning/breach and blocked cases that also pass the shared filters.
/// Hidden entirely when the urgent set is empty.
#[component]
pub fn UrgentInbox() -> Element {
    let snapshot = use_app_state().read().clone();
    let urgent = snapshot.queue.urgent();

    if urgent.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        section { class: "mb-6 rounded-lg border-l-4 border-red-600 bg-red-50 p-4 shadow-sm",
            header { class: "mb-3 flex items-center gap-2",
                h2 { class: "text-lg font-semibold text-red-800", "Urgent Inbox" }
                span { class: "rounded-full bg-red-600 px-2 py-0.5 text-xs font-semibold text-white",
                    "{urgent.len()}"
                }
            }
            div { class: "overflow-x-auto",
                table { class: "w-full text-left text-sm",
                    thead { class: "bg-red-100/60",
                        tr {
                            th { class: "px-4 py-2 text-xs font-semibold uppercase text-red-800", "App ID" }
                            th { class: "px-4 py-2 text-xs font-semibold uppercase text-red-800", "Client" }
                            th { class: "px-4 py-2 text-xs font-semibold uppercase text-red-800", "Status" }
                            th { class: "px-4 py-2 text-xs font-semibold uppercase text-red-800", "SLA Timer" }
                        }
                    }
                    tbody {
                        for (idx, case) in urgent.iter().enumerate() {
                            {urgent_row(idx, case)}
                        }
                    }
                }
            }
        }
    }
}

fn urgent_row(idx: usize, case: &CaseRecord) -> Element {
    rsx! {
        tr {
            key: "{case.application_id}-{idx}",
            class: "bg-red-50/40",
            td { class: "px-4 py-3 font-semibold text-emerald-800", "{case.application_id}" }
            td { class: "px-4 py-3 text-slate-600", "{case.client_name}" }
            td { class: "px-4 py-3",
                span { class: format!("rounded-md px-2 py-0.5 text-xs font-medium {}", status_badge_classes(case.status)),
                    "{case.status.label()}"
                }
            }
            td { class: "px-4 py-3 font-semibold text-red-700",
                "{format_sla_timer(case.sla_minutes_left)}"
            }
        }
    }
}
