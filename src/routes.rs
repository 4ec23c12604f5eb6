//! Route table shared by the router shell, the navigation chrome and tests.

/// Where `/` lands.
pub const HOME_PATH: &str = "/home";

/// Every path under this prefix belongs to the admin shell.
pub const ADMIN_PREFIX: &str = "/admin";

/// Public pages reachable from the navbar and footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Home,
    Events,
    Achievements,
    Team,
    Gallery,
    About,
    Contact,
    AdminIndex,
    Admin(AdminSection),
}

/// Management pages nested under the admin prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminSection {
    Events,
    Achievements,
    Team,
    Gallery,
    Contact,
}

impl AppRoute {
    /// Navbar order, home first.
    pub const NAVBAR: [Self; 7] = [
        Self::Home,
        Self::About,
        Self::Events,
        Self::Achievements,
        Self::Team,
        Self::Gallery,
        Self::Contact,
    ];

    /// Footer quick links.
    pub const FOOTER: [Self; 6] = [
        Self::Home,
        Self::About,
        Self::Events,
        Self::Team,
        Self::Achievements,
        Self::Contact,
    ];

    /// Resolve a pathname to the page it renders.
    ///
    /// The root path resolves to the home page (the router redirects it).
    /// A single trailing slash is ignored. Unknown paths yield `None`.
    pub fn resolve(path: &str) -> Option<Self> {
        let trimmed = if path.len() > 1 {
            path.strip_suffix('/').unwrap_or(path)
        } else {
            path
        };

        match trimmed {
            "/" | HOME_PATH => Some(Self::Home),
            "/events" => Some(Self::Events),
            "/achievements" => Some(Self::Achievements),
            "/team" => Some(Self::Team),
            "/gallery" => Some(Self::Gallery),
            "/about" => Some(Self::About),
            "/contact" => Some(Self::Contact),
            ADMIN_PREFIX => Some(Self::AdminIndex),
            other => other
                .strip_prefix(ADMIN_PREFIX)
                .and_then(|rest| rest.strip_prefix('/'))
                .and_then(AdminSection::from_segment)
                .map(Self::Admin),
        }
    }

    /// URL the route is mounted at.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => HOME_PATH,
            Self::Events => "/events",
            Self::Achievements => "/achievements",
            Self::Team => "/team",
            Self::Gallery => "/gallery",
            Self::About => "/about",
            Self::Contact => "/contact",
            Self::AdminIndex => ADMIN_PREFIX,
            Self::Admin(section) => section.path(),
        }
    }

    /// Link text in the navbar and page titles.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Events => "Events",
            Self::Achievements => "Achievements",
            Self::Team => "Team",
            Self::Gallery => "Gallery",
            Self::About => "About",
            Self::Contact => "Contact",
            Self::AdminIndex => "Dashboard",
            Self::Admin(section) => section.label(),
        }
    }
}

impl AdminSection {
    /// Sidebar order.
    pub const SIDEBAR: [Self; 5] = [
        Self::Achievements,
        Self::Events,
        Self::Gallery,
        Self::Team,
        Self::Contact,
    ];

    fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "events" => Some(Self::Events),
            "achievements" => Some(Self::Achievements),
            "team" => Some(Self::Team),
            "gallery" => Some(Self::Gallery),
            "contact" => Some(Self::Contact),
            _ => None,
        }
    }

    /// Absolute URL under the admin prefix.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Events => "/admin/events",
            Self::Achievements => "/admin/achievements",
            Self::Team => "/admin/team",
            Self::Gallery => "/admin/gallery",
            Self::Contact => "/admin/contact",
        }
    }

    /// Sidebar label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Events => "Events",
            Self::Achievements => "Achievements",
            Self::Team => "Team",
            Self::Gallery => "Gallery",
            Self::Contact => "Contacts",
        }
    }

    /// Sidebar glyph.
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Events => "📅",
            Self::Achievements => "🏆",
            Self::Team => "👥",
            Self::Gallery => "🖼",
            Self::Contact => "✉",
        }
    }

    /// Title shown in the admin header.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Events => "Events Management",
            Self::Achievements => "Achievements Management",
            Self::Team => "Team Management",
            Self::Gallery => "Gallery Management",
            Self::Contact => "Contact Messages",
        }
    }
}

/// True when the chrome (navbar, footer, cursor) should be hidden.
pub fn is_admin_path(path: &str) -> bool {
    path.starts_with(ADMIN_PREFIX)
}

/// Header title for the admin layout.
pub fn admin_page_title(path: &str) -> &'static str {
    match AppRoute::resolve(path) {
        Some(AppRoute::AdminIndex) => "Dashboard",
        Some(AppRoute::Admin(section)) => section.title(),
        _ => "Admin Portal",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_resolves_to_home() {
        assert_eq!(AppRoute::resolve("/"), Some(AppRoute::Home));
        assert_eq!(AppRoute::resolve("/home"), Some(AppRoute::Home));
    }

    #[test]
    fn test_trailing_slash_is_ignored() {
        assert_eq!(AppRoute::resolve("/team/"), Some(AppRoute::Team));
        assert_eq!(
            AppRoute::resolve("/admin/gallery/"),
            Some(AppRoute::Admin(AdminSection::Gallery))
        );
    }

    #[test]
    fn test_unknown_paths_do_not_resolve() {
        assert_eq!(AppRoute::resolve("/archievements"), None);
        assert_eq!(AppRoute::resolve("/admin/users"), None);
        assert_eq!(AppRoute::resolve("/administrator"), None);
    }

    #[test]
    fn test_every_route_path_round_trips() {
        let all = AppRoute::NAVBAR
            .into_iter()
            .chain(std::iter::once(AppRoute::AdminIndex))
            .chain(AdminSection::SIDEBAR.into_iter().map(AppRoute::Admin));
        for route in all {
            assert_eq!(AppRoute::resolve(route.path()), Some(route), "{route:?}");
        }
    }

    #[test]
    fn test_admin_prefix_detection() {
        assert!(is_admin_path("/admin"));
        assert!(is_admin_path("/admin/events"));
        assert!(!is_admin_path("/about"));
        assert!(!is_admin_path("/"));
    }

    #[test]
    fn test_admin_titles() {
        assert_eq!(admin_page_title("/admin"), "Dashboard");
        assert_eq!(admin_page_title("/admin/contact"), "Contact Messages");
        assert_eq!(admin_page_title("/admin/team"), "Team Management");
        assert_eq!(admin_page_title("/admin/nowhere"), "Admin Portal");
    }
}
