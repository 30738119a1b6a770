use serde::Serialize;
use std::fmt::Display;
use std::sync::Arc;
use tracing::warn;
use un_core::{taxonomy, Article, ListQuery, NewsApi, SiteStats, Source, SourceStats};

use super::navbar::{category_href, NavLink};
use crate::card::{render_cards, CardVariant, CardView};
use crate::featured::{most_popular, RankedItem};

pub const TAB_SIZE: u32 = 4;
pub const MOST_POPULAR_SIZE: u32 = 5;

const TRENDING_TAGS: &[(&str, &str)] = &[
    ("#Palestine", "palestine"),
    ("#Islamic Finance", "islamic-finance"),
    ("#Ramadan", "ramadan"),
    ("#Halal Industry", "halal-industry"),
    ("#Charity", "charity"),
    ("#Education", "education"),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SidebarTab {
    #[default]
    Recent,
    Popular,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QuickStats {
    pub articles: u64,
    pub sources: u64,
    pub categories: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryLink {
    pub title: String,
    pub href: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceView {
    pub name: String,
    pub country: Option<String>,
    pub url: Option<String>,
    pub article_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarView {
    pub active_tab: SidebarTab,
    pub recent: Vec<CardView>,
    pub popular: Vec<CardView>,
    pub most_popular: Vec<RankedItem>,
    pub stats: QuickStats,
    pub categories: Vec<CategoryLink>,
    pub sources: Vec<SourceView>,
    pub trending_tags: Vec<NavLink>,
}

/// Site-wide sidebar. Each widget fetches on its own; a failure blanks only
/// that widget.
pub struct Sidebar {
    api: Arc<dyn NewsApi>,
    active_tab: SidebarTab,
    recent: Vec<Article>,
    popular: Vec<Article>,
    most_viewed: Vec<Article>,
    stats: SiteStats,
    sources: Vec<Source>,
    source_stats: SourceStats,
}

fn or_default<T: Default, E: Display>(widget: &str, result: std::result::Result<T, E>) -> T {
    result.unwrap_or_else(|e| {
        warn!("sidebar {} unavailable: {}", widget, e);
        T::default()
    })
}

impl Sidebar {
    pub fn new(api: Arc<dyn NewsApi>) -> Self {
        Self {
            api,
            active_tab: SidebarTab::default(),
            recent: Vec::new(),
            popular: Vec::new(),
            most_viewed: Vec::new(),
            stats: SiteStats::default(),
            sources: Vec::new(),
            source_stats: SourceStats::default(),
        }
    }

    pub async fn load(&mut self) {
        let api = self.api.as_ref();
        let most_viewed_query = ListQuery::page(1, MOST_POPULAR_SIZE).with_sort("views");
        let (recent, popular, most_viewed, stats, sources, source_stats) = tokio::join!(
            api.recent_articles(TAB_SIZE),
            api.popular_articles(TAB_SIZE),
            api.list_articles(&most_viewed_query),
            api.stats(),
            api.sources(),
            api.source_stats()
        );
        self.recent = or_default("recent", recent);
        self.popular = or_default("popular", popular);
        self.most_viewed = or_default("most popular", most_viewed.map(|page| page.items));
        self.stats = or_default("stats", stats);
        self.sources = or_default("sources", sources);
        self.source_stats = or_default("source stats", source_stats);
    }

    pub fn select_tab(&mut self, tab: SidebarTab) {
        self.active_tab = tab;
    }

    pub fn active_articles(&self) -> &[Article] {
        match self.active_tab {
            SidebarTab::Recent => &self.recent,
            SidebarTab::Popular => &self.popular,
        }
    }

    pub fn view(&self) -> SidebarView {
        SidebarView {
            active_tab: self.active_tab,
            recent: render_cards(&self.recent, CardVariant::Compact),
            popular: render_cards(&self.popular, CardVariant::Compact),
            most_popular: most_popular(&self.most_viewed),
            stats: QuickStats {
                articles: self.stats.total_articles,
                sources: self.source_stats.total_sources,
                categories: self.stats.categories_stats.len(),
            },
            categories: self
                .stats
                .categories_stats
                .iter()
                .map(|c| CategoryLink {
                    title: taxonomy::resolve(&c.slug).title,
                    href: category_href(&c.slug),
                    count: c.count,
                })
                .collect(),
            sources: self
                .sources
                .iter()
                .map(|s| SourceView {
                    name: s.name.clone(),
                    country: s.country.clone(),
                    url: s.url.clone(),
                    article_count: s.article_count,
                })
                .collect(),
            trending_tags: TRENDING_TAGS
                .iter()
                .map(|(label, tag)| NavLink::new(*label, format!("/tag/{tag}")))
                .collect(),
        }
    }
}
