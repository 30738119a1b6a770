//! Time-driven hero carousel.

use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::debug;
use un_core::text;
use un_core::Article;

use crate::card::{ImageSlot, HERO_PLACEHOLDER};

pub const MAX_SLIDES: usize = 5;
pub const ADVANCE_EVERY: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlideView {
    pub id: String,
    pub title: String,
    pub link: String,
    pub category: String,
    pub image: ImageSlot,
    pub author: String,
    pub date: String,
}

impl SlideView {
    fn new(article: &Article) -> Self {
        Self {
            id: article.id.clone(),
            title: article.title.clone(),
            link: article.link(),
            category: article.category.clone(),
            image: ImageSlot::for_article(article, HERO_PLACEHOLDER),
            author: article
                .author
                .clone()
                .unwrap_or_else(|| "Staff Writer".to_string()),
            date: article
                .published_at
                .as_ref()
                .map(text::day_date)
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarouselView {
    pub slides: Vec<SlideView>,
    pub active: usize,
}

/// Rotates through up to [`MAX_SLIDES`] articles.
///
/// A background ticker advances the active index every period. Manual
/// controls move the index without touching the ticker's cadence. The ticker
/// is aborted on [`Carousel::unmount`] and on drop.
pub struct Carousel {
    slides: Vec<SlideView>,
    active: Arc<watch::Sender<usize>>,
    ticker: Option<JoinHandle<()>>,
}

impl Carousel {
    /// Must be called inside a tokio runtime when `articles` is non-empty.
    pub fn start(articles: &[Article]) -> Self {
        Self::start_with_period(articles, ADVANCE_EVERY)
    }

    pub fn start_with_period(articles: &[Article], period: Duration) -> Self {
        let slides: Vec<SlideView> = articles.iter().take(MAX_SLIDES).map(SlideView::new).collect();
        let (tx, _) = watch::channel(0usize);
        let active = Arc::new(tx);

        let ticker = if slides.is_empty() {
            None
        } else {
            let len = slides.len();
            let active = Arc::clone(&active);
            Some(tokio::spawn(async move {
                let mut ticks = interval_at(Instant::now() + period, period);
                ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
                loop {
                    ticks.tick().await;
                    active.send_modify(|i| *i = (*i + 1) % len);
                }
            }))
        };

        Self {
            slides,
            active,
            ticker,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn active(&self) -> usize {
        *self.active.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.active.subscribe()
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.as_ref().is_some_and(|t| !t.is_finished())
    }

    pub fn next(&self) {
        let len = self.len();
        if len > 0 {
            self.active.send_modify(|i| *i = (*i + 1) % len);
        }
    }

    pub fn previous(&self) {
        let len = self.len();
        if len > 0 {
            self.active
                .send_modify(|i| *i = if *i == 0 { len - 1 } else { *i - 1 });
        }
    }

    /// Out-of-range indices are ignored.
    pub fn jump_to(&self, index: usize) {
        if index < self.len() {
            self.active.send_replace(index);
        }
    }

    pub fn unmount(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            debug!("stopping carousel ticker");
            ticker.abort();
        }
    }

    /// Nothing to render for an empty carousel.
    pub fn view(&self) -> Option<CarouselView> {
        if self.slides.is_empty() {
            return None;
        }
        Some(CarouselView {
            slides: self.slides.clone(),
            active: self.active(),
        })
    }
}

impl Drop for Carousel {
    fn drop(&mut self) {
        self.unmount();
    }
}
