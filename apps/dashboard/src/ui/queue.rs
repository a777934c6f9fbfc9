use dioxus::prelude::*;

use crate::models::CaseRecord;
use crate::state::{use_app_actions, AppActions};
use crate::ui::format::{format_sla_timer, sla_row_class, sla_text_class, status_badge_classes};

const COLUMNS: [&str; 5] = ["Application ID", "Client", "Status", "SLA Timer", "Priority"];

#[derive(Props, Clone, PartialEq)]
pub struct QueueTableProps {
    pub title: String,
    pub cases: Vec<CaseRecord>,
    #[props(default = true)]
    pub default_expanded: bool,
    #[props(default)]
    pub show_assign: bool,
}

/// Collapsible case table with a count chip. Rendering only; the case
/// list arrives pre-filtered.
#[component]
pub fn QueueTable(props: QueueTableProps) -> Element {
    let actions = use_app_actions();
    let mut expanded = use_signal(|| props.default_expanded);
    let is_open = expanded();
    let column_span = COLUMNS.len() + usize::from(props.show_assign);

    rsx! {
        section { class: "mb-6 overflow-hidden rounded-lg bg-white shadow-sm",
            header {
                class: "flex cursor-pointer items-center justify-between border-b border-slate-100 p-4 hover:bg-slate-50",
                onclick: move |_| expanded.toggle(),
                h2 { class: "text-lg font-semibold text-slate-900", "{props.title}" }
                div { class: "flex items-center gap-2",
                    span { class: "rounded-full bg-slate-200 px-2 py-0.5 text-xs font-semibold text-slate-700",
                        "{props.cases.len()}"
                    }
                    span { class: "text-xs text-slate-400", if is_open { "▲" } else { "▼" } }
                }
            }

            if is_open {
                div { class: "overflow-x-auto",
                    table { class: "w-full min-w-[700px] text-left text-sm",
                        thead { class: "bg-slate-100",
                            tr {
                                for column in COLUMNS {
                                    th {
                                        key: "{column}",
                                        class: "px-4 py-3 text-xs font-semibold uppercase tracking-wide text-slate-500",
                                        "{column}"
                                    }
                                }
                                if props.show_assign {
                                    th { class: "px-4 py-3 text-xs font-semibold uppercase tracking-wide text-slate-500",
                                        "Action"
                                    }
                                }
                            }
                        }
                        tbody {
                            if props.cases.is_empty() {
                                tr {
                                    td {
                                        colspan: "{column_span}",
                                        class: "p-6 text-center text-sm text-slate-400",
                                        "No cases found"
                                    }
                                }
                            } else {
                                for (idx, case) in props.cases.iter().enumerate() {
                                    {queue_row(idx, case, props.show_assign, actions)}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn queue_row(idx: usize, case: &CaseRecord, show_assign: bool, actions: AppActions) -> Element {
    let assign_target = case.clone();

    rsx! {
        tr {
            key: "{case.application_id}-{idx}",
            class: format!("border-b border-slate-100 hover:bg-slate-50 {}", sla_row_class(case.sla)),
            td { class: "px-4 py-3 font-semibold text-emerald-800", "{case.application_id}" }
            td { class: "px-4 py-3 text-slate-600", "{case.client_name}" }
            td { class: "px-4 py-3",
                span { class: format!("rounded-md px-2 py-0.5 text-xs font-medium {}", status_badge_classes(case.status)),
                    "{case.status.label()}"
                }
            }
            td { class: format!("px-4 py-3 font-semibold {}", sla_text_class(case.sla)),
                "{format_sla_timer(case.sla_minutes_left)}"
            }
            td { class: "px-4 py-3 text-slate-600", "{case.priority}" }
            if show_assign {
                td { class: "px-4 py-3",
                    button {
                        class: "rounded bg-emerald-700 px-3 py-1 text-xs font-semibold text-white hover:bg-emerald-800",
                        onclick: move |_| actions.request_assignment(&assign_target),
                        "Assign to me"
                    }
                }
            }
        }
    }
}
