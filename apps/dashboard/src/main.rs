#![allow(non_snake_case)]

mod config;
mod fixtures;
mod hooks;
mod models;
mod state;
mod ui;

use config::AppConfig;
use dioxus::prelude::*;
use dioxus_router::prelude::*;
use hooks::cases::use_case_queue;
use once_cell::sync::OnceCell;
use state::{use_app_state, AppState};
use tracing::info;
use ui::cards::{EscalationsCard, RecentUpdatesCard};
use ui::filters::FilterBar;
use ui::kpi::{ActiveKpiBanner, KpiSummary};
use ui::notifications::NotificationCenter;
use ui::performance::PerformancePanel;
use ui::queue::QueueTable;
use ui::urgent::UrgentInbox;

pub(crate) static APP_CONFIG: OnceCell<AppConfig> = OnceCell::new();

fn main() {
    console_error_panic_hook::set_once();
    init_logging();

    let app_config = AppConfig::from_env();
    info!(api_base_url = %app_config.api_base_url, profile = ?app_config.profile, "dashboard starting");
    let _ = APP_CONFIG.set(app_config);

    launch(App);
}

fn init_logging() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let _ = dioxus_logger::init(tracing::Level::INFO);
    });
}

#[component]
fn App() -> Element {
    let app_state = use_signal(AppState::default);

    use_context_provider(|| app_state);

    rsx! {
        div { class: "relative",
            Router::<Route> {}
            NotificationCenter {}
        }
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Dashboard {},
}

#[component]
fn Dashboard() -> Element {
    use_case_queue();

    let snapshot = use_app_state().read().clone();
    let filtered = snapshot.queue.filtered();
    let is_loading = snapshot.queue.is_loading;
    let officer = snapshot
        .officer
        .clone()
        .unwrap_or_else(|| "Unassigned officer".to_string());
    let data_source = APP_CONFIG
        .get()
        .map(|cfg| cfg.api_base_url.clone())
        .unwrap_or_else(|| "not configured".to_string());

    rsx! {
        div { class: "min-h-screen bg-slate-100 p-6",
            div { class: "mx-auto max-w-[1600px]",
                header { class: "mb-6",
                    h1 { class: "mb-1 text-2xl font-bold text-slate-900", "Onboarding Officers Dashboard" }
                    p { class: "text-sm text-slate-600", "Signed in as {officer}" }
                    p { class: "text-xs text-slate-500", "Host case feed: {data_source}" }
                }

                KpiSummary {}
                ActiveKpiBanner {}
                FilterBar {}

                if is_loading {
                    p { class: "mb-4 text-sm text-slate-500", "Loading cases..." }
                }

                UrgentInbox {}

                div { class: "grid gap-6 lg:grid-cols-4",
                    div { class: "lg:col-span-3",
                        QueueTable {
                            title: "My Work Queue".to_string(),
                            cases: filtered,
                            show_assign: true,
                        }
                    }
                    div { class: "lg:col-span-1",
                        EscalationsCard {}
                        RecentUpdatesCard {}
                    }
                }

                PerformancePanel {}
            }
        }
    }
}
