use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;

use crate::canvas::CyberCursor;
use crate::components::{FadeIn, Footer, Navbar, ScrollButton, ScrollToTop};
use crate::config::SiteConfig;
use crate::pages::admin::{
    AdminAchievementsPage, AdminContactPage, AdminEventsPage, AdminGalleryPage, AdminHome,
    AdminLayout, AdminTeamPage,
};
use crate::pages::{
    AboutPage, AchievementsPage, ContactPage, EventsPage, GalleryPage, Home, TeamPage,
};
use crate::routes::{is_admin_path, HOME_PATH};

/// Root component: provides the site configuration and mounts the router.
#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    let cursor_effect = config.cursor_effect;
    provide_context(config);

    view! {
        <Router>
            <ScrollToTop />
            <Shell cursor_effect=cursor_effect />
        </Router>
    }
}

/// Unknown paths render nothing.
#[component]
fn Unmatched() -> impl IntoView {
    let path = use_location().pathname.get_untracked();
    log::warn!("No route matches {path}");
}

/// Public chrome around the routed pages; hidden under the admin prefix.
#[component]
fn Shell(cursor_effect: bool) -> impl IntoView {
    let location = use_location();
    let public = Memo::new(move |_| location.pathname.with(|path| !is_admin_path(path)));

    view! {
        <Show when=move || public.get()>
            <Navbar />
            {cursor_effect.then(|| view! { <CyberCursor /> })}
        </Show>
        <main class="app">
            <Routes fallback=|| view! { <Unmatched /> }>
                <Route path=path!("/") view=|| view! { <Redirect path=HOME_PATH /> } />
                <Route path=path!("/home") view=|| view! { <FadeIn><Home /></FadeIn> } />
                <Route path=path!("/events") view=|| view! { <FadeIn><EventsPage /></FadeIn> } />
                <Route
                    path=path!("/achievements")
                    view=|| view! { <FadeIn><AchievementsPage /></FadeIn> }
                />
                <Route path=path!("/team") view=|| view! { <FadeIn><TeamPage /></FadeIn> } />
                <Route path=path!("/gallery") view=|| view! { <FadeIn><GalleryPage /></FadeIn> } />
                <Route path=path!("/about") view=|| view! { <FadeIn><AboutPage /></FadeIn> } />
                <Route path=path!("/contact") view=|| view! { <FadeIn><ContactPage /></FadeIn> } />
                <ParentRoute path=path!("/admin") view=AdminLayout>
                    <Route path=path!("") view=|| view! { <FadeIn><AdminHome /></FadeIn> } />
                    <Route path=path!("events") view=|| view! { <FadeIn><AdminEventsPage /></FadeIn> } />
                    <Route
                        path=path!("achievements")
                        view=|| view! { <FadeIn><AdminAchievementsPage /></FadeIn> }
                    />
                    <Route path=path!("team") view=|| view! { <FadeIn><AdminTeamPage /></FadeIn> } />
                    <Route path=path!("gallery") view=|| view! { <FadeIn><AdminGalleryPage /></FadeIn> } />
                    <Route path=path!("contact") view=|| view! { <FadeIn><AdminContactPage /></FadeIn> } />
                </ParentRoute>
            </Routes>
        </main>
        <Show when=move || public.get()>
            <Footer />
            <ScrollButton />
        </Show>
    }
}
