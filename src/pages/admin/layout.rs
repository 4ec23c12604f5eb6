use leptos::prelude::*;
use leptos_router::components::{Outlet, A};
use leptos_router::hooks::use_location;

use crate::models::NavMenu;
use crate::routes::{admin_page_title, AdminSection};

#[component]
fn Sidebar(menu: RwSignal<NavMenu>) -> impl IntoView {
    let pathname = use_location().pathname;

    let links = AdminSection::SIDEBAR
        .into_iter()
        .map(|section| {
            let active = move || pathname.with(|path| path == section.path());
            view! {
                <span class="sidebar-link" class:active=active>
                    <A href=section.path()>
                        <span class="sidebar-icon">{section.icon()}</span>
                        {section.label()}
                    </A>
                </span>
            }
        })
        .collect_view();

    view! {
        <aside class="admin-sidebar" class:open=move || menu.get().is_open()>
            <h2 class="sidebar-title">"Admin Panel"</h2>
            <nav class="sidebar-nav" on:click=move |_| menu.update(NavMenu::close)>
                {links}
            </nav>
            <p class="sidebar-footer">"Logged in as Admin"</p>
        </aside>
    }
}

/// Admin shell: sidebar, header with the section title, and the routed page.
#[component]
pub fn AdminLayout() -> impl IntoView {
    let pathname = use_location().pathname;
    let menu = RwSignal::new(NavMenu::default());
    let title = move || pathname.with(|path| admin_page_title(path));

    view! {
        <div class="admin-layout">
            <Sidebar menu=menu />
            <div class="admin-main">
                <header class="admin-header">
                    <button
                        class="sidebar-toggle"
                        aria-label="Toggle sidebar"
                        on:click=move |_| menu.update(NavMenu::toggle)
                    >
                        "☰"
                    </button>
                    <h1>{title}</h1>
                </header>
                <main class="admin-content">
                    <Outlet />
                </main>
            </div>
        </div>
    }
}

/// Landing panel for `/admin`.
#[component]
pub fn AdminHome() -> impl IntoView {
    view! {
        <div class="admin-panel admin-home">
            <p>"Choose a section from the sidebar to manage site content."</p>
            <div class="admin-home-grid">
                {AdminSection::SIDEBAR
                    .into_iter()
                    .map(|section| {
                        view! {
                            <A href=section.path()>
                                <span class="admin-home-card">
                                    <span class="sidebar-icon">{section.icon()}</span>
                                    {section.title()}
                                </span>
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
