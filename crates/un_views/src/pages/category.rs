use serde::Serialize;
use std::sync::Arc;
use un_core::{taxonomy, CategoryDescriptor, NewsApi};

use crate::card::CardVariant;
use crate::chrome::seo::{SeoHead, SeoTags};
use crate::feed::{Feed, FeedController, FeedView, PageRequest};
use crate::site::SiteConfig;

pub const CATEGORY_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryView {
    pub seo: SeoTags,
    pub category: CategoryDescriptor,
    pub heading: String,
    pub subheading: String,
    pub loading_message: String,
    pub empty_message: String,
    pub showing: Option<String>,
    pub feed: FeedView,
}

/// A single category listing with its descriptor header.
pub struct CategoryPage {
    descriptor: CategoryDescriptor,
    feed: FeedController,
}

impl CategoryPage {
    pub fn new(api: Arc<dyn NewsApi>, slug: &str) -> Self {
        Self::with_page_size(api, slug, CATEGORY_PAGE_SIZE)
    }

    /// `Middle East` and `middle-east` load the same feed.
    pub fn with_page_size(api: Arc<dyn NewsApi>, slug: &str, page_size: u32) -> Self {
        let slug = taxonomy::slugify(slug);
        let descriptor = taxonomy::resolve(&slug);
        Self {
            feed: FeedController::new(api, Feed::Category(slug), page_size),
            descriptor,
        }
    }

    pub async fn load(&mut self) -> PageRequest {
        self.feed.load().await
    }

    pub async fn open(&mut self, page: u32) -> PageRequest {
        self.feed.open(page).await
    }

    pub async fn request_page(&mut self, page: u32) -> PageRequest {
        self.feed.request_page(page).await
    }

    pub async fn retry(&mut self) -> PageRequest {
        self.feed.retry().await
    }

    pub fn descriptor(&self) -> &CategoryDescriptor {
        &self.descriptor
    }

    pub fn feed(&self) -> &FeedController {
        &self.feed
    }

    pub fn view(&self, site: &SiteConfig) -> CategoryView {
        let title = &self.descriptor.title;
        let count = self.feed.articles().len();
        CategoryView {
            seo: SeoHead::titled(format!("{title} News"), &self.descriptor.description)
                .at(format!("/category/{}", self.descriptor.slug))
                .render(site),
            category: self.descriptor.clone(),
            heading: format!("{title} News"),
            subheading: format!("Latest {title} Articles"),
            loading_message: format!("Loading {title} news..."),
            empty_message: format!("No {title} Articles Found"),
            showing: (count > 0).then(|| format!("Showing {count} articles")),
            feed: self.feed.view(CardVariant::Full),
        }
    }
}
