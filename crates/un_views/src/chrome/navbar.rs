use serde::Serialize;
use un_core::text;
use url::form_urlencoded;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }

    pub fn category(label: impl Into<String>, slug: &str) -> Self {
        Self::new(label, category_href(slug))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavbarView {
    pub date: String,
    pub brand: String,
    pub links: Vec<NavLink>,
    pub search_action: String,
}

pub fn category_href(slug: &str) -> String {
    format!("/category/{slug}")
}

/// `/search?q=...` with the query form-encoded.
pub fn search_href(query: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(query.trim().as_bytes()).collect();
    format!("/search?q={encoded}")
}

pub fn navbar() -> NavbarView {
    NavbarView {
        date: text::masthead_date(),
        brand: "UMMAHNEWS".to_string(),
        links: vec![
            NavLink::new("HOME", "/"),
            NavLink::category("POLITICS", "politics"),
            NavLink::category("BUSINESS", "economics"),
            NavLink::category("TECH", "technology"),
            NavLink::category("SPORT", "sports"),
            NavLink::category("CULTURE", "culture"),
            NavLink::new("VIDEOS", "/videos"),
        ],
        search_action: "/search".to_string(),
    }
}
