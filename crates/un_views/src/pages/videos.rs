use serde::Serialize;
use std::sync::Arc;
use un_core::NewsApi;

use crate::card::{render_cards, CardVariant, CardView};
use crate::chrome::seo::{SeoHead, SeoTags};
use crate::feed::{Feed, FeedController, PageRequest};
use crate::site::SiteConfig;
use crate::status::ViewStatus;

pub const VIDEOS_PAGE_SIZE: u32 = 20;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideosView {
    pub seo: SeoTags,
    pub status: ViewStatus,
    pub cards: Vec<CardView>,
}

/// Articles carrying video; a single unpaginated page.
pub struct VideosPage {
    feed: FeedController,
}

impl VideosPage {
    pub fn new(api: Arc<dyn NewsApi>) -> Self {
        Self {
            feed: FeedController::new(api, Feed::Videos, VIDEOS_PAGE_SIZE),
        }
    }

    pub async fn load(&mut self) -> PageRequest {
        self.feed.load().await
    }

    pub async fn retry(&mut self) -> PageRequest {
        self.feed.retry().await
    }

    pub fn feed(&self) -> &FeedController {
        &self.feed
    }

    pub fn view(&self, site: &SiteConfig) -> VideosView {
        VideosView {
            seo: SeoHead::titled("Videos", "Watch the latest news and reports")
                .at("/videos")
                .render(site),
            status: self.feed.status().clone(),
            cards: render_cards(self.feed.articles(), CardVariant::GridTile),
        }
    }
}
