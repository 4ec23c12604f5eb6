use leptos::prelude::*;
use leptos_router::components::A;

use crate::canvas::{ParticleCanvas, ParticleStyle};
use crate::config::SiteConfig;
use crate::hooks::use_scrolled_past;
use crate::models::NavMenu;
use crate::routes::{AppRoute, HOME_PATH};

/// Fixed site header with desktop links and a mobile drawer.
#[component]
pub fn Navbar() -> impl IntoView {
    let config = use_context::<SiteConfig>().expect("SiteConfig context missing");
    let menu = RwSignal::new(NavMenu::default());
    let compact = use_scrolled_past(config.navbar_compact_threshold_px);

    let close_menu = move |_| menu.update(NavMenu::close);
    let header_class = move || {
        if compact.get() {
            "navbar navbar-compact"
        } else {
            "navbar"
        }
    };

    let links = || {
        AppRoute::NAVBAR
            .into_iter()
            .map(|route| view! { <A href=route.path()>{route.label()}</A> })
            .collect_view()
    };

    view! {
        <header class=header_class>
            <ParticleCanvas style=ParticleStyle::Ambient class="navbar-particles" />
            <nav class="navbar-inner">
                <span class="navbar-brand" on:click=close_menu>
                    <A href=HOME_PATH>
                        <span class="brand-bracket">"<"</span>
                        "Tekstra"
                        <span class="brand-bracket">"/>"</span>
                    </A>
                </span>
                <div class="navbar-links">{links()}</div>
                <button
                    class="navbar-toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu.get().is_open().to_string()
                    on:click=move |_| menu.update(NavMenu::toggle)
                >
                    {move || if menu.get().is_open() { "✕" } else { "☰" }}
                </button>
            </nav>
            <Show when=move || menu.get().is_open()>
                // Any click inside the drawer follows a link, so close on bubble.
                <div class="navbar-drawer" on:click=close_menu>
                    {links()}
                </div>
            </Show>
        </header>
    }
}
