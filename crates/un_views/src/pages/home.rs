use serde::Serialize;
use std::sync::Arc;
use tracing::warn;
use un_core::{Article, ListQuery, NewsApi};

use crate::card::CardVariant;
use crate::carousel::{Carousel, CarouselView, MAX_SLIDES};
use crate::chrome::seo::{SeoHead, SeoTags};
use crate::featured::{trending, FeaturedGrid, RankedItem};
use crate::feed::{Feed, FeedController, FeedView, PageRequest};
use crate::site::SiteConfig;

pub const HOME_PAGE_SIZE: u32 = 10;
pub const BREAKING_NEWS_SIZE: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TickerItem {
    pub title: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeView {
    pub seo: SeoTags,
    pub breaking: Vec<TickerItem>,
    pub carousel: Option<CarouselView>,
    pub featured: Option<FeaturedGrid>,
    pub trending: Vec<RankedItem>,
    pub feed: FeedView,
}

/// The front page: latest feed, breaking-news ticker, hero carousel and
/// trending list.
pub struct HomePage {
    api: Arc<dyn NewsApi>,
    feed: FeedController,
    breaking: Vec<Article>,
    carousel: Carousel,
}

impl HomePage {
    pub fn new(api: Arc<dyn NewsApi>) -> Self {
        Self {
            feed: FeedController::new(Arc::clone(&api), Feed::Latest, HOME_PAGE_SIZE),
            api,
            breaking: Vec::new(),
            carousel: Carousel::start(&[]),
        }
    }

    pub async fn load(&mut self) -> PageRequest {
        self.open(1).await
    }

    /// Loads feed page `page` and the ticker concurrently.
    pub async fn open(&mut self, page: u32) -> PageRequest {
        let api = self.api.as_ref();
        let ticker_query = ListQuery::page(1, BREAKING_NEWS_SIZE);
        let (outcome, breaking) =
            tokio::join!(self.feed.open(page), api.list_articles(&ticker_query));
        match breaking {
            Ok(page) => self.breaking = page.items,
            Err(e) => warn!("breaking news unavailable: {}", e),
        }
        self.refresh_carousel(outcome);
        outcome
    }

    pub async fn request_page(&mut self, page: u32) -> PageRequest {
        let outcome = self.feed.request_page(page).await;
        self.refresh_carousel(outcome);
        outcome
    }

    pub async fn retry(&mut self) -> PageRequest {
        let outcome = self.feed.retry().await;
        self.refresh_carousel(outcome);
        outcome
    }

    fn refresh_carousel(&mut self, outcome: PageRequest) {
        if outcome == PageRequest::Loaded {
            let articles = self.feed.articles();
            let featured = &articles[..articles.len().min(MAX_SLIDES)];
            self.carousel = Carousel::start(featured);
        }
    }

    pub fn feed(&self) -> &FeedController {
        &self.feed
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    /// Stop the carousel ticker; called when navigating away.
    pub fn unmount(&mut self) {
        self.carousel.unmount();
    }

    pub fn view(&self, site: &SiteConfig) -> HomeView {
        let has_articles = !self.feed.articles().is_empty();
        HomeView {
            seo: SeoHead {
                description: "Breaking news and in-depth coverage from Muslim communities worldwide."
                    .to_string(),
                ..SeoHead::default()
            }
            .render(site),
            breaking: self
                .breaking
                .iter()
                .map(|a| TickerItem {
                    title: a.title.clone(),
                    link: a.link(),
                })
                .collect(),
            carousel: if has_articles { self.carousel.view() } else { None },
            featured: FeaturedGrid::build(self.feed.articles()),
            trending: trending(self.feed.articles()),
            feed: self.feed.view(CardVariant::Full),
        }
    }
}
