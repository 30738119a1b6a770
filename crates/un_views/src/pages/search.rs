use serde::Serialize;
use std::sync::Arc;
use un_core::NewsApi;

use crate::card::CardVariant;
use crate::chrome::navbar::search_href;
use crate::chrome::seo::{SeoHead, SeoTags};
use crate::feed::{Feed, FeedController, FeedView, PageRequest};
use crate::site::SiteConfig;

pub const SEARCH_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearchView {
    /// No query was given; nothing is fetched.
    NoQuery { seo: SeoTags },
    Results {
        seo: SeoTags,
        query: String,
        found: Option<String>,
        feed: FeedView,
    },
}

/// Search results for a free-text query.
pub struct SearchPage {
    query: String,
    feed: Option<FeedController>,
}

impl SearchPage {
    pub fn new(api: Arc<dyn NewsApi>, query: &str) -> Self {
        let query = query.trim().to_string();
        let feed = (!query.is_empty())
            .then(|| FeedController::new(api, Feed::Search(query.clone()), SEARCH_PAGE_SIZE));
        Self { query, feed }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn has_query(&self) -> bool {
        self.feed.is_some()
    }

    pub async fn load(&mut self) -> PageRequest {
        match &mut self.feed {
            Some(feed) => feed.load().await,
            None => PageRequest::Ignored,
        }
    }

    pub async fn open(&mut self, page: u32) -> PageRequest {
        match &mut self.feed {
            Some(feed) => feed.open(page).await,
            None => PageRequest::Ignored,
        }
    }

    pub async fn request_page(&mut self, page: u32) -> PageRequest {
        match &mut self.feed {
            Some(feed) => feed.request_page(page).await,
            None => PageRequest::Ignored,
        }
    }

    pub async fn retry(&mut self) -> PageRequest {
        match &mut self.feed {
            Some(feed) => feed.retry().await,
            None => PageRequest::Ignored,
        }
    }

    pub fn feed(&self) -> Option<&FeedController> {
        self.feed.as_ref()
    }

    pub fn view(&self, site: &SiteConfig) -> SearchView {
        match &self.feed {
            None => SearchView::NoQuery {
                seo: SeoHead::titled("Search", "Search news from Muslim communities worldwide.")
                    .at("/search")
                    .render(site),
            },
            Some(feed) => {
                let count = feed.articles().len();
                SearchView::Results {
                    seo: SeoHead::titled(
                        format!("Search: {}", self.query),
                        format!("Search results for \"{}\"", self.query),
                    )
                    .at(search_href(&self.query))
                    .render(site),
                    query: self.query.clone(),
                    found: (count > 0).then(|| format!("{count} articles found")),
                    feed: feed.view(CardVariant::Full),
                }
            }
        }
    }
}
