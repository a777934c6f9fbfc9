use dioxus::prelude::*;

use crate::models::{KpiCounts, KpiFilter};
use crate::state::{use_app_actions, use_app_state};

fn accent_class(filter: KpiFilter) -> &'static str {
    match filter {
        KpiFilter::PendingOnb | KpiFilter::SlaBreach => "text-red-600",
        KpiFilter::PoOnb => "text-blue-600",
        KpiFilter::Escalated => "text-orange-600",
        KpiFilter::OnbaQueue => "text-emerald-600",
        KpiFilter::SlaWarning => "text-amber-500",
    }
}

/// Six summary tiles; clicking a tile toggles its quick-filter.
#[component]
pub fn KpiSummary() -> Element {
    let actions = use_app_actions();
    let snapshot = use_app_state().read().clone();
    let counts: KpiCounts = snapshot.queue.kpis();
    let active = snapshot.queue.filters.kpi;

    rsx! {
        div { class: "mb-6 flex flex-wrap gap-3",
            for filter in KpiFilter::ALL {
                button {
                    key: "{filter.slug()}",
                    class: if active == Some(filter) {
                        "min-w-[140px] rounded-lg border-2 border-emerald-700 bg-emerald-50 p-4 text-left shadow"
                    } else {
                        "min-w-[140px] rounded-lg border-2 border-transparent bg-white p-4 text-left shadow-sm transition hover:border-emerald-700"
                    },
                    onclick: move |_| actions.toggle_kpi_filter(filter),
                    span { class: "block text-xs text-slate-500", "{filter.label()}" }
                    span { class: format!("block text-2xl font-semibold {}", accent_class(filter)),
                        "{counts.value(filter)}"
                    }
                }
            }
        }
    }
}

/// Shown only while a KPI quick-filter is active.
#[component]
pub fn ActiveKpiBanner() -> Element {
    let actions = use_app_actions();
    let active = use_app_state().read().queue.filters.kpi;

    let Some(filter) = active else {
        return rsx! { Fragment {} };
    };

    rsx! {
        div { class: "mb-4 flex items-center justify-between rounded-md border border-emerald-300 bg-emerald-50 p-3",
            p { class: "text-sm font-medium text-emerald-900",
                "Filtering by: "
                strong { "{filter.description()}" }
            }
            button {
                class: "rounded border border-emerald-400 px-3 py-1 text-xs text-emerald-900 hover:bg-emerald-100",
                onclick: move |_| actions.clear_kpi_filter(),
                "Clear Filter"
            }
        }
    }
}
