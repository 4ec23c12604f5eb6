use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::config::SiteConfig;
use crate::hooks::{scroll_window_top, use_scrolled_past, ScrollMode};

/// Scrolls the window to the origin whenever the pathname changes.
#[component]
pub fn ScrollToTop() -> impl IntoView {
    let location = use_location();

    Effect::new(move |_| {
        let path = location.pathname.get();
        log::debug!("Navigated to {path}");
        if let Err(err) = scroll_window_top(ScrollMode::Smooth) {
            log::warn!("Scroll to top failed: {err}");
        }
    });
}

/// Floating "back to top" button shown once the page is scrolled down.
#[component]
pub fn ScrollButton() -> impl IntoView {
    let config = use_context::<SiteConfig>().expect("SiteConfig context missing");
    let visible = use_scrolled_past(config.scroll_button_threshold_px);

    let on_click = move |_| {
        if let Err(err) = scroll_window_top(ScrollMode::Smooth) {
            log::warn!("Scroll to top failed: {err}");
        }
    };

    view! {
        <Show when=move || visible.get()>
            <button class="scroll-button" aria-label="Scroll to top" on:click=on_click>
                "↑"
            </button>
        </Show>
    }
}
