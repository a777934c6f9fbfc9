use dioxus::prelude::*;

use crate::models::{CaseStatus, SlaState};
use crate::state::{use_app_actions, use_app_state};

/// Free-text search, status and SLA dropdowns, and a reset button. Each
/// change re-derives the queue synchronously through the shared state.
#[component]
pub fn FilterBar() -> Element {
    let actions = use_app_actions();
    let filters = use_app_state().read().queue.filters.clone();

    let status_value = filters.status.map(CaseStatus::label).unwrap_or("");
    let sla_value = filters.sla.map(SlaState::label).unwrap_or("");

    rsx! {
        div { class: "mb-6 flex flex-wrap items-end gap-3",
            input {
                class: "min-w-[250px] rounded border border-slate-300 bg-white px-3 py-2 text-sm",
                r#type: "search",
                placeholder: "Search by Application ID or Client name",
                value: "{filters.search_term}",
                oninput: move |evt| actions.set_search_term(evt.value()),
            }

            label { class: "flex flex-col gap-1 text-xs text-slate-500",
                "Status"
                select {
                    class: "min-w-[120px] rounded border border-slate-300 bg-white px-2 py-2 text-sm text-slate-700",
                    value: "{status_value}",
                    onchange: move |evt| {
                        let value = evt.value();
                        let status = CaseStatus::ALL
                            .into_iter()
                            .find(|status| status.label() == value);
                        actions.set_status_filter(status);
                    },
                    option { value: "", "All" }
                    for status in CaseStatus::ALL {
                        option {
                            key: "{status.label()}",
                            value: "{status.label()}",
                            selected: filters.status == Some(status),
                            "{status.label()}"
                        }
                    }
                }
            }

            label { class: "flex flex-col gap-1 text-xs text-slate-500",
                "SLA State"
                select {
                    class: "min-w-[120px] rounded border border-slate-300 bg-white px-2 py-2 text-sm text-slate-700",
                    value: "{sla_value}",
                    onchange: move |evt| {
                        let value = evt.value();
                        let sla = SlaState::ALL
                            .into_iter()
                            .find(|sla| sla.label() == value);
                        actions.set_sla_filter(sla);
                    },
                    option { value: "", "All" }
                    for sla in SlaState::ALL {
                        option {
                            key: "{sla.label()}",
                            value: "{sla.label()}",
                            selected: filters.sla == Some(sla),
                            "{sla.label()}"
                        }
                    }
                }
            }

            button {
                class: "rounded border border-slate-300 px-4 py-2 text-sm text-slate-600 hover:border-slate-500 hover:bg-slate-100 disabled:opacity-50",
                disabled: filters.is_empty(),
                onclick: move |_| actions.reset_filters(),
                "Reset"
            }
        }
    }
}
