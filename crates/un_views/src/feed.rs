//! Paginated article feeds and the controller that pages through them.

use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};
use un_core::{Article, ListQuery, NewsApi, PageResult, PageState, PageWindow, Result};

use crate::card::{render_cards, CardVariant, CardView};
use crate::status::ViewStatus;

/// Which list endpoint a feed reads from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feed {
    Latest,
    Category(String),
    Search(String),
    Videos,
}

impl Feed {
    pub async fn fetch(&self, api: &dyn NewsApi, page: u32, limit: u32) -> Result<PageResult> {
        match self {
            Feed::Latest => api.list_articles(&ListQuery::page(page, limit)).await,
            Feed::Category(slug) => api.articles_by_category(slug, page, limit).await,
            Feed::Search(query) => {
                api.list_articles(&ListQuery::page(page, limit).with_search(query.as_str()))
                    .await
            }
            Feed::Videos => api.list_articles(&ListQuery::page(page, limit).with_video()).await,
        }
    }
}

/// Result of asking a controller for a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    /// Out of range; nothing was fetched and nothing changed.
    Ignored,
    Loaded,
    /// The fetch failed; the previous articles and counters are kept.
    Failed,
}

/// Serializable snapshot of a feed for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedView {
    pub status: ViewStatus,
    pub cards: Vec<CardView>,
    pub current_page: u32,
    pub total_pages: u32,
    pub pagination: Option<PageWindow>,
}

/// Drives "page N of M" navigation over one [`Feed`].
///
/// The server owns the counters: they change only when a fetch succeeds,
/// and then both are taken from the response. Fetches take `&mut self`, so a
/// controller never has two in flight, and dropping the future of a pending
/// fetch discards its response.
pub struct FeedController {
    api: Arc<dyn NewsApi>,
    feed: Feed,
    limit: u32,
    articles: Vec<Article>,
    pages: PageState,
    status: ViewStatus,
    last_requested: u32,
}

impl FeedController {
    pub fn new(api: Arc<dyn NewsApi>, feed: Feed, limit: u32) -> Self {
        Self {
            api,
            feed,
            limit: limit.max(1),
            articles: Vec::new(),
            pages: PageState::default(),
            status: ViewStatus::Loading,
            last_requested: 1,
        }
    }

    /// Fetch the first page, whatever the current state.
    pub async fn load(&mut self) -> PageRequest {
        self.fetch(1).await
    }

    /// Fetch `page` without checking it against the known page count, as
    /// when arriving from a link. Page 0 is read as 1.
    pub async fn open(&mut self, page: u32) -> PageRequest {
        self.fetch(page.max(1)).await
    }

    /// Fetch page `page`; a no-op when it is outside `1..=total_pages`.
    pub async fn request_page(&mut self, page: u32) -> PageRequest {
        if !self.pages.accepts(page) {
            debug!("ignoring request for page {} of {}", page, self.pages.total_pages);
            return PageRequest::Ignored;
        }
        self.fetch(page).await
    }

    pub async fn next_page(&mut self) -> PageRequest {
        self.request_page(self.pages.current_page + 1).await
    }

    pub async fn previous_page(&mut self) -> PageRequest {
        self.request_page(self.pages.current_page.saturating_sub(1)).await
    }

    /// Re-issue the most recently requested page.
    pub async fn retry(&mut self) -> PageRequest {
        self.fetch(self.last_requested).await
    }

    async fn fetch(&mut self, page: u32) -> PageRequest {
        self.last_requested = page;
        match self.feed.fetch(self.api.as_ref(), page, self.limit).await {
            Ok(result) => {
                self.pages = PageState {
                    current_page: result.current_page,
                    total_pages: result.total_pages,
                };
                self.articles = result.items;
                self.status = if self.articles.is_empty() {
                    ViewStatus::Empty
                } else {
                    ViewStatus::Ready
                };
                PageRequest::Loaded
            }
            Err(e) => {
                warn!("failed to load {:?} page {}: {}", self.feed, page, e);
                self.status = ViewStatus::Failed {
                    message: e.user_message().to_string(),
                };
                PageRequest::Failed
            }
        }
    }

    pub fn feed(&self) -> &Feed {
        &self.feed
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn pages(&self) -> PageState {
        self.pages
    }

    pub fn status(&self) -> &ViewStatus {
        &self.status
    }

    pub fn view(&self, variant: CardVariant) -> FeedView {
        FeedView {
            status: self.status.clone(),
            cards: render_cards(&self.articles, variant),
            current_page: self.pages.current_page,
            total_pages: self.pages.total_pages,
            pagination: self.pages.navigator(),
        }
    }
}
