use serde::Serialize;
use un_core::{taxonomy, text};

use super::navbar::NavLink;
use crate::site::SiteConfig;

const BLURB: &str = "Your comprehensive source for news affecting Muslim communities worldwide. \
Covering politics, culture, society, economics, and community developments across the global Muslim Ummah.";

/// How many taxonomy entries the footer lists.
const FOOTER_CATEGORIES: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterView {
    pub site_name: String,
    pub blurb: String,
    pub categories: Vec<NavLink>,
    pub about: Vec<NavLink>,
    pub copyright: String,
    pub last_updated: String,
}

pub fn footer(site: &SiteConfig) -> FooterView {
    FooterView {
        site_name: site.site_name.clone(),
        blurb: BLURB.to_string(),
        categories: taxonomy::descriptors()
            .into_iter()
            .take(FOOTER_CATEGORIES)
            .map(|d| NavLink::category(d.title, &d.slug))
            .collect(),
        about: vec![
            NavLink::new("Our Mission", "/about"),
            NavLink::new("Sources", "/sources"),
            NavLink::new("Contact", "/contact"),
            NavLink::new("Privacy Policy", "/privacy"),
        ],
        copyright: format!(
            "\u{a9} {} {}. All rights reserved.",
            text::current_year(),
            site.site_name
        ),
        last_updated: text::short_date(&chrono::Utc::now()),
    }
}
