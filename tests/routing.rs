//! Route table behaviour shared by the router shell and navigation chrome.

use tekstra_ui::routes::{admin_page_title, is_admin_path, AdminSection, AppRoute, HOME_PATH};

#[test]
fn test_root_always_lands_on_home() {
    assert_eq!(AppRoute::resolve("/"), Some(AppRoute::Home));
    assert_eq!(AppRoute::Home.path(), HOME_PATH);
}

#[test]
fn test_every_public_page_resolves() {
    for (path, route) in [
        ("/home", AppRoute::Home),
        ("/events", AppRoute::Events),
        ("/achievements", AppRoute::Achievements),
        ("/team", AppRoute::Team),
        ("/gallery", AppRoute::Gallery),
        ("/about", AppRoute::About),
        ("/contact", AppRoute::Contact),
    ] {
        assert_eq!(AppRoute::resolve(path), Some(route), "{path}");
        assert!(!is_admin_path(path));
    }
}

#[test]
fn test_admin_children_resolve_under_prefix() {
    for section in AdminSection::SIDEBAR {
        let path = section.path();
        assert!(is_admin_path(path));
        assert_eq!(AppRoute::resolve(path), Some(AppRoute::Admin(section)));
        assert_eq!(admin_page_title(path), section.title());
    }
    assert_eq!(AppRoute::resolve("/admin"), Some(AppRoute::AdminIndex));
}

#[test]
fn test_navbar_links_point_at_real_routes() {
    for route in AppRoute::NAVBAR.into_iter().chain(AppRoute::FOOTER) {
        assert_eq!(AppRoute::resolve(route.path()), Some(route));
    }
}

#[test]
fn test_unknown_paths_fall_through() {
    assert_eq!(AppRoute::resolve("/missing"), None);
    assert_eq!(admin_page_title("/admin/missing"), "Admin Portal");
}
