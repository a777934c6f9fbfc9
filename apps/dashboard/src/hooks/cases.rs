use dioxus::prelude::*;
use tracing::info;

use crate::fixtures::cases::{all_cases, performance_snapshot};
use crate::state::{use_app_actions, use_app_state};
use crate::APP_CONFIG;

/// Seeds the case queue from fixtures on first render. A host CRM would
/// replace this hook with its own data feed and call
/// `AppActions::set_cases` with the merged record array.
pub fn use_case_queue() {
    let actions = use_app_actions();
    let state = use_app_state();

    use_future(move || async move {
        if !state.read().queue.cases.is_empty() {
            return;
        }

        actions.set_queue_loading(true);

        // Yield once so the loading state paints before the rows land.
        #[cfg(target_arch = "wasm32")]
        gloo_timers::future::TimeoutFuture::new(0).await;

        let cases = all_cases();
        info!(count = cases.len(), "seeding case queue from fixtures");

        actions.set_cases(cases);
        actions.set_performance(performance_snapshot());

        if state.read().officer.is_none() {
            let officer = APP_CONFIG.get().and_then(|cfg| cfg.officer_name.clone());
            actions.set_officer(officer);
        }
    });
}
