//! The static route table and role navigation.
//!
//! Every page path lives here once. The axum router in [`super::routes`]
//! mounts handlers for these entries, and the CLI prints them.

use philagri_core::Role;

/// A page the router can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    RoleSelection,
    FarmDashboard,
    Workers,
    Crops,
    Machines,
    Fertilizers,
    Tasks,
    MarketplaceDashboard,
    Browse,
    MyListings,
    Orders,
    Messages,
    Profile,
    ProductDetail,
}

/// Which part of the app a page belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// The role chooser, rendered without the shell.
    Chooser,
    Farm,
    Marketplace,
    /// Reachable from both roles.
    Shared,
}

impl Section {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chooser => "chooser",
            Self::Farm => "farm",
            Self::Marketplace => "marketplace",
            Self::Shared => "shared",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    /// Path pattern; `:id` marks the one parameterised segment.
    pub path: &'static str,
    pub page: Page,
    pub section: Section,
}

impl RouteEntry {
    const fn new(path: &'static str, page: Page, section: Section) -> Self {
        Self {
            path,
            page,
            section,
        }
    }

    /// The path in axum's `{param}` syntax.
    #[must_use]
    pub fn axum_path(&self) -> String {
        self.path.replace(":id", "{id}")
    }

    /// Whether the page renders inside the navigation shell.
    #[must_use]
    pub fn has_shell(&self) -> bool {
        self.section != Section::Chooser
    }
}

pub const ROLE_SELECTION_PATH: &str = "/";
pub const FARM_DASHBOARD_PATH: &str = "/farm/dashboard";
pub const MARKETPLACE_DASHBOARD_PATH: &str = "/marketplace/dashboard";
pub const BROWSE_PATH: &str = "/marketplace/browse";
pub const ORDERS_PATH: &str = "/marketplace/orders";
pub const MESSAGES_PATH: &str = "/messages";
pub const PROFILE_PATH: &str = "/profile";

pub const ROUTES: &[RouteEntry] = &[
    RouteEntry::new(ROLE_SELECTION_PATH, Page::RoleSelection, Section::Chooser),
    RouteEntry::new(FARM_DASHBOARD_PATH, Page::FarmDashboard, Section::Farm),
    RouteEntry::new("/farm/workers", Page::Workers, Section::Farm),
    RouteEntry::new("/farm/crops", Page::Crops, Section::Farm),
    RouteEntry::new("/farm/machines", Page::Machines, Section::Farm),
    RouteEntry::new("/farm/fertilizers", Page::Fertilizers, Section::Farm),
    RouteEntry::new("/farm/tasks", Page::Tasks, Section::Farm),
    RouteEntry::new(
        MARKETPLACE_DASHBOARD_PATH,
        Page::MarketplaceDashboard,
        Section::Marketplace,
    ),
    RouteEntry::new(BROWSE_PATH, Page::Browse, Section::Marketplace),
    RouteEntry::new("/marketplace/my-listings", Page::MyListings, Section::Marketplace),
    RouteEntry::new(ORDERS_PATH, Page::Orders, Section::Marketplace),
    RouteEntry::new(MESSAGES_PATH, Page::Messages, Section::Shared),
    RouteEntry::new(PROFILE_PATH, Page::Profile, Section::Shared),
    RouteEntry::new("/product/:id", Page::ProductDetail, Section::Shared),
];

/// The table entry for `page`.
#[must_use]
pub fn entry(page: Page) -> Option<&'static RouteEntry> {
    ROUTES.iter().find(|r| r.page == page)
}

/// Match a concrete request path against the table.
#[must_use]
pub fn resolve(path: &str) -> Option<&'static RouteEntry> {
    ROUTES.iter().find(|route| match route.path.strip_suffix(":id") {
        Some(prefix) => path
            .strip_prefix(prefix)
            .is_some_and(|id| !id.is_empty() && !id.contains('/')),
        None => route.path == path,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub path: &'static str,
    pub label: &'static str,
}

const fn link(path: &'static str, label: &'static str) -> NavLink {
    NavLink { path, label }
}

const FARM_LINKS: &[NavLink] = &[
    link(FARM_DASHBOARD_PATH, "Dashboard"),
    link("/farm/workers", "Workers"),
    link("/farm/crops", "Crops"),
    link("/farm/machines", "Machines"),
    link("/farm/fertilizers", "Fertilizers"),
    link("/farm/tasks", "Tasks"),
];

const MARKETPLACE_LINKS: &[NavLink] = &[
    link(MARKETPLACE_DASHBOARD_PATH, "Dashboard"),
    link(BROWSE_PATH, "Browse Products"),
    link("/marketplace/my-listings", "My Listings"),
    link(ORDERS_PATH, "Orders"),
];

/// Shell navigation for a role. Messages and profile are always present in
/// the shell and not part of either set.
#[must_use]
pub const fn nav_links(role: Role) -> &'static [NavLink] {
    match role {
        Role::FarmOwner => FARM_LINKS,
        Role::Marketplace => MARKETPLACE_LINKS,
    }
}

/// Landing page after choosing a role.
#[must_use]
pub const fn dashboard_path(role: Role) -> &'static str {
    match role {
        Role::FarmOwner => FARM_DASHBOARD_PATH,
        Role::Marketplace => MARKETPLACE_DASHBOARD_PATH,
    }
}
