use dioxus::prelude::*;

use crate::state::use_app_state;

/// Static personal metrics panel under the queue grid.
#[component]
pub fn PerformancePanel() -> Element {
    let performance = use_app_state().read().performance.clone();

    rsx! {
        section { class: "mt-6 rounded-lg bg-white p-6 shadow-sm",
            h2 { class: "mb-4 text-lg font-semibold text-slate-900", "Personal Performance" }
            div { class: "grid grid-cols-2 gap-6 md:grid-cols-4",
                {metric("SLA Compliance", format!("{}%", performance.sla_compliance_pct), "text-emerald-600")}
                {metric("Avg Response Time", performance.avg_response.clone(), "text-blue-600")}
                {metric("Completed Today", performance.completed_today.to_string(), "text-orange-600")}
                {metric("Completed This Week", performance.completed_this_week.to_string(), "text-emerald-800")}
            }
        }
    }
}

fn metric(label: &'static str, value: String, accent: &'static str) -> Element {
    rsx! {
        div { class: "text-center",
            span { class: format!("mb-1 block text-xl font-semibold {accent}"), "{value}" }
            span { class: "text-xs text-slate-500", "{label}" }
        }
    }
}
