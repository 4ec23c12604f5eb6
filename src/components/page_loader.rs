use leptos::prelude::*;
use send_wrapper::SendWrapper;

use crate::config::SiteConfig;
use crate::dom::{self, Interval, Timeout};
use crate::error::AppError;
use crate::models::LoadProgress;

const STEP_MS: u32 = 80;
/// Pause between reaching 100% and revealing the page.
const HIDE_DELAY_MS: u32 = 300;

fn schedule(
    progress: RwSignal<LoadProgress>,
    loading: RwSignal<bool>,
    duration_ms: u32,
) -> Result<(Interval, Timeout, Timeout), AppError> {
    let ticker = Interval::new(STEP_MS, move || progress.update(|p| p.step(dom::random())))?;
    let finish = Timeout::new(duration_ms, move || progress.update(LoadProgress::complete))?;
    let hide = Timeout::new(duration_ms.saturating_add(HIDE_DELAY_MS), move || {
        loading.set(false);
    })?;
    Ok((ticker, finish, hide))
}

/// Shows the loading overlay for the configured time, then the page.
#[component]
pub fn PageLoader(children: ChildrenFn) -> impl IntoView {
    let config = use_context::<SiteConfig>().expect("SiteConfig context missing");
    let progress = RwSignal::new(LoadProgress::default());
    let loading = RwSignal::new(true);

    match schedule(progress, loading, config.page_loader_duration_ms) {
        Ok(timers) => {
            let timers = SendWrapper::new(timers);
            on_cleanup(move || drop(timers));
        }
        Err(err) => {
            log::warn!("Page loader skipped: {err}");
            loading.set(false);
        }
    }

    view! {
        <Show
            when=move || !loading.get()
            fallback=move || view! { <Loading progress=progress.read_only() /> }
        >
            {children()}
        </Show>
    }
}

/// Full-screen progress ring with status text and fake readouts.
#[component]
pub fn Loading(#[prop(into)] progress: Signal<LoadProgress>) -> impl IntoView {
    let percent = move || progress.get().percent();
    let ring = move || format!("--progress: {}%", percent());

    view! {
        <div class="loading-overlay">
            <div class="loading-ring" style=ring>
                <span class="loading-percent">{move || format!("{}%", percent())}</span>
            </div>
            <p class="loading-status">{move || progress.get().status_message()}</p>
            <div class="loading-bar">
                <div class="loading-bar-fill" style:width=move || format!("{}%", percent())></div>
            </div>
            <ul class="loading-readouts">
                {move || {
                    progress
                        .get()
                        .readouts()
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <li>
                                    <span class="readout-label">{label}</span>
                                    <span class="readout-value">{value}</span>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}
