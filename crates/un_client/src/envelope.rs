//! Wire shapes of the backend responses and their normalization.
//!
//! The backend is not consistent about wrapping lists, so each endpoint gets
//! an envelope type that accepts every observed shape and collapses to one.

use serde::Deserialize;
use un_core::{Article, PageResult, Source};

/// `{articles, currentPage, totalPages}` with the backend's loose defaults.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedEnvelope {
    #[serde(default)]
    pub articles: Option<Vec<Article>>,
    #[serde(default)]
    pub current_page: Option<u32>,
    #[serde(default)]
    pub total_pages: Option<u32>,
}

impl From<PagedEnvelope> for PageResult {
    fn from(envelope: PagedEnvelope) -> Self {
        PageResult::new(
            envelope.articles.unwrap_or_default(),
            envelope.current_page.unwrap_or(1),
            envelope.total_pages.unwrap_or(1),
        )
    }
}

/// Recent and popular lists arrive either bare or wrapped.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ArticleListEnvelope {
    Bare(Vec<Article>),
    Wrapped {
        #[serde(default)]
        articles: Vec<Article>,
    },
}

impl From<ArticleListEnvelope> for Vec<Article> {
    fn from(envelope: ArticleListEnvelope) -> Self {
        match envelope {
            ArticleListEnvelope::Bare(articles) => articles,
            ArticleListEnvelope::Wrapped { articles } => articles,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SourceListEnvelope {
    Bare(Vec<Source>),
    Wrapped {
        #[serde(default)]
        sources: Vec<Source>,
    },
}

impl From<SourceListEnvelope> for Vec<Source> {
    fn from(envelope: SourceListEnvelope) -> Self {
        match envelope {
            SourceListEnvelope::Bare(sources) => sources,
            SourceListEnvelope::Wrapped { sources } => sources,
        }
    }
}
