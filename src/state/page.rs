//! Pages & Navigation Policy
//!
//! The closed set of views the app can show. Navigation is an in-memory
//! page switch: there is no URL or history integration, so the enum (plus
//! the home fallback in [`Page::parse`]) is the entire routing surface.

/// Every view the root switch can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Login,
    Register,
    Dashboard,
    Properties,
    Predictions,
    Map,
    Profile,
}

impl Page {
    pub const ALL: [Page; 8] = [
        Page::Home,
        Page::Login,
        Page::Register,
        Page::Dashboard,
        Page::Properties,
        Page::Predictions,
        Page::Map,
        Page::Profile,
    ];

    /// Label used by the navbar and breadcrumbs.
    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Login => "Login",
            Page::Register => "Register",
            Page::Dashboard => "Dashboard",
            Page::Properties => "Properties",
            Page::Predictions => "Predictions",
            Page::Map => "Map View",
            Page::Profile => "Profile",
        }
    }

    /// Access policy: protected pages render only with a session user.
    pub fn requires_auth(self) -> bool {
        !matches!(self, Page::Home | Page::Login | Page::Register)
    }

    /// Resolve a page identifier, falling back to home for anything
    /// unrecognized rather than failing.
    pub fn parse(id: &str) -> Page {
        match id {
            "home" => Page::Home,
            "login" => Page::Login,
            "register" => Page::Register,
            "dashboard" => Page::Dashboard,
            "properties" => Page::Properties,
            "predictions" => Page::Predictions,
            "map" => Page::Map,
            "profile" => Page::Profile,
            _ => Page::Home,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Login => "login",
            Page::Register => "register",
            Page::Dashboard => "dashboard",
            Page::Properties => "properties",
            Page::Predictions => "predictions",
            Page::Map => "map",
            Page::Profile => "profile",
        }
    }

    /// Breadcrumb trail for this page. Trails with fewer than two crumbs
    /// are not rendered.
    pub fn trail(self) -> Vec<Page> {
        match self {
            Page::Home => vec![Page::Home],
            Page::Login | Page::Register => Vec::new(),
            other => vec![Page::Home, other],
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Page::Home
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::parse(page.as_str()), page);
        }
    }

    #[test]
    fn unknown_identifiers_fall_back_to_home() {
        assert_eq!(Page::parse("settings"), Page::Home);
        assert_eq!(Page::parse(""), Page::Home);
        assert_eq!(Page::parse("DASHBOARD"), Page::Home);
    }

    #[test]
    fn only_the_entry_pages_are_public() {
        let public: Vec<Page> = Page::ALL
            .into_iter()
            .filter(|p| !p.requires_auth())
            .collect();
        assert_eq!(public, vec![Page::Home, Page::Login, Page::Register]);
    }

    #[test]
    fn trails_start_at_home_and_end_at_the_page() {
        for page in [Page::Dashboard, Page::Properties, Page::Predictions, Page::Map, Page::Profile] {
            assert_eq!(page.trail(), vec![Page::Home, page]);
        }
        assert!(Page::Login.trail().is_empty());
        assert_eq!(Page::Home.trail(), vec![Page::Home]);
    }
}
