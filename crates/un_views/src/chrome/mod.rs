pub mod footer;
pub mod navbar;
pub mod seo;
pub mod sidebar;

pub use footer::{footer, FooterView};
pub use navbar::{navbar, search_href, NavLink, NavbarView};
pub use seo::{ArticleMeta, SeoHead, SeoTags};
pub use sidebar::{Sidebar, SidebarTab, SidebarView};

use serde::Serialize;

use crate::site::SiteConfig;

/// Navbar and footer together; neither fetches anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChromeView {
    pub navbar: NavbarView,
    pub footer: FooterView,
}

pub fn chrome(site: &SiteConfig) -> ChromeView {
    ChromeView {
        navbar: navbar(),
        footer: footer(site),
    }
}
