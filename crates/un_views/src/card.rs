//! Article cards: the presentational transform from an [`Article`] to what a
//! card shows.

use serde::Serialize;
use un_core::text::{self, COMPACT_SUMMARY_LIMIT, SUMMARY_LIMIT};
use un_core::Article;

pub const CARD_PLACEHOLDER: &str = "https://via.placeholder.com/400x250";
pub const TILE_PLACEHOLDER: &str = "https://via.placeholder.com/400x300";
pub const LEAD_PLACEHOLDER: &str = "https://via.placeholder.com/800x600";
pub const HERO_PLACEHOLDER: &str = "https://via.placeholder.com/1200x600";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardVariant {
    Full,
    Compact,
    GridTile,
}

impl CardVariant {
    pub fn summary_limit(self) -> usize {
        match self {
            CardVariant::Compact => COMPACT_SUMMARY_LIMIT,
            CardVariant::Full | CardVariant::GridTile => SUMMARY_LIMIT,
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            CardVariant::GridTile => TILE_PLACEHOLDER,
            CardVariant::Full | CardVariant::Compact => CARD_PLACEHOLDER,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Badge {
    AiEnhanced,
    Video,
    Facts { count: usize },
}

impl Badge {
    pub fn label(&self) -> String {
        match self {
            Badge::AiEnhanced => "AI Enhanced".to_string(),
            Badge::Video => "Video".to_string(),
            Badge::Facts { count } => format!("+{count} key facts"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageSlot {
    pub src: String,
    pub alt: String,
    pub placeholder: bool,
}

impl ImageSlot {
    pub fn for_article(article: &Article, placeholder: &str) -> Self {
        match &article.image_url {
            Some(src) if !src.trim().is_empty() => Self {
                src: src.clone(),
                alt: article.title.clone(),
                placeholder: false,
            },
            _ => Self {
                src: placeholder.to_string(),
                alt: article.title.clone(),
                placeholder: true,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub id: String,
    pub variant: CardVariant,
    pub link: String,
    pub title: String,
    pub category: String,
    pub image: ImageSlot,
    pub summary: String,
    pub date: String,
    pub author: Option<String>,
    pub source: Option<String>,
    pub badges: Vec<Badge>,
}

/// Badges present on `article`; flags that are off produce nothing.
pub fn badges(article: &Article) -> Vec<Badge> {
    let mut badges = Vec::new();
    if article.is_ai_enhanced {
        badges.push(Badge::AiEnhanced);
    }
    if article.has_video {
        badges.push(Badge::Video);
    }
    if !article.facts.is_empty() {
        badges.push(Badge::Facts {
            count: article.facts.len(),
        });
    }
    badges
}

pub fn render_card(article: &Article, variant: CardVariant) -> CardView {
    CardView {
        id: article.id.clone(),
        variant,
        link: article.link(),
        title: article.title.clone(),
        category: article.category.clone(),
        image: ImageSlot::for_article(article, variant.placeholder()),
        summary: text::truncate_summary(article.summary.as_deref(), variant.summary_limit()),
        date: article
            .published_at
            .as_ref()
            .map(text::short_date)
            .unwrap_or_default(),
        author: article.author.clone(),
        source: article.source_name().map(str::to_string),
        badges: badges(article),
    }
}

pub fn render_cards(articles: &[Article], variant: CardVariant) -> Vec<CardView> {
    articles.iter().map(|a| render_card(a, variant)).collect()
}
