use serde::Serialize;
use std::sync::Arc;
use tracing::warn;
use un_core::text::{self, capitalize};
use un_core::{taxonomy, Article, Error, NewsApi};
use url::Url;

use crate::card::HERO_PLACEHOLDER;
use crate::chrome::navbar::{category_href, NavLink};
use crate::chrome::seo::{ArticleMeta, SeoHead, SeoTags};
use crate::site::SiteConfig;

const CONTENT_UNAVAILABLE: &str = "Content not available";
const EMBED_HOSTS: &[&str] = &[
    "youtube.com",
    "youtu.be",
    "vimeo.com",
    "dailymotion.com",
    "facebook.com",
];

#[derive(Debug, Clone, PartialEq)]
pub enum ArticleState {
    Loading,
    Loaded(Box<Article>),
    NotFound,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VideoEmbed {
    /// Third-party player shown in an iframe.
    Embedded { src: String },
    Native { src: String },
}

impl VideoEmbed {
    pub fn detect(video_url: &str) -> Self {
        let host = Url::parse(video_url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_lowercase));
        let embeddable = host.is_some_and(|h| {
            EMBED_HOSTS
                .iter()
                .any(|known| h == *known || h.ends_with(&format!(".{known}")))
        });
        if embeddable {
            VideoEmbed::Embedded {
                src: video_url.replace("watch?v=", "embed/"),
            }
        } else {
            VideoEmbed::Native {
                src: video_url.to_string(),
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ArticleBody {
    Paragraphs { paragraphs: Vec<String> },
    SummaryOnly { summary: String, notice: String },
    Unavailable { notice: String },
}

impl ArticleBody {
    pub fn from_article(article: &Article) -> Self {
        let content = article.content.trim();
        if !content.is_empty() && content != CONTENT_UNAVAILABLE {
            let paragraphs: Vec<String> = content
                .split('\n')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect();
            return ArticleBody::Paragraphs { paragraphs };
        }
        match article.summary.as_deref().map(str::trim) {
            Some(summary) if !summary.is_empty() => ArticleBody::SummaryOnly {
                summary: summary.to_string(),
                notice: "Full content is not available. Visit the original source to read more."
                    .to_string(),
            },
            _ => ArticleBody::Unavailable {
                notice: "Content not available for this article.".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleDetail {
    pub seo: SeoTags,
    pub breadcrumb: Vec<NavLink>,
    pub category: String,
    pub category_badge: String,
    pub accent_color: String,
    pub date: String,
    pub source: Option<String>,
    pub title: String,
    pub byline: Option<String>,
    pub image: Option<String>,
    pub video: Option<VideoEmbed>,
    pub ai_notice: Option<String>,
    pub background: Option<String>,
    pub body: ArticleBody,
    pub facts: Vec<String>,
    pub tags: Vec<String>,
    pub original: Option<NavLink>,
    pub back_link: NavLink,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ArticleView {
    Loading,
    NotFound { message: String },
    Failed { message: String },
    Loaded(Box<ArticleDetail>),
}

/// A single article fetched by id.
pub struct ArticlePage {
    api: Arc<dyn NewsApi>,
    id: String,
    state: ArticleState,
}

impl ArticlePage {
    pub fn new(api: Arc<dyn NewsApi>, id: &str) -> Self {
        Self {
            api,
            id: id.trim().to_string(),
            state: ArticleState::Loading,
        }
    }

    pub fn state(&self) -> &ArticleState {
        &self.state
    }

    pub async fn load(&mut self) -> &ArticleState {
        self.state = ArticleState::Loading;
        self.state = match self.api.article(&self.id).await {
            Ok(article) => ArticleState::Loaded(Box::new(article)),
            Err(Error::NotFound(what)) => {
                warn!("{} not found", what);
                ArticleState::NotFound
            }
            Err(e) => {
                warn!("failed to load article {}: {}", self.id, e);
                ArticleState::Failed(e.user_message().to_string())
            }
        };
        &self.state
    }

    pub async fn retry(&mut self) -> &ArticleState {
        self.load().await
    }

    pub fn view(&self, site: &SiteConfig) -> ArticleView {
        match &self.state {
            ArticleState::Loading => ArticleView::Loading,
            ArticleState::NotFound => ArticleView::NotFound {
                message: "Article not found".to_string(),
            },
            ArticleState::Failed(message) => ArticleView::Failed {
                message: message.clone(),
            },
            ArticleState::Loaded(article) => ArticleView::Loaded(Box::new(detail(article, site))),
        }
    }
}

pub fn detail(article: &Article, site: &SiteConfig) -> ArticleDetail {
    let descriptor = taxonomy::resolve(&article.category);
    let category_title = capitalize(&article.category);
    let image = article
        .image_url
        .clone()
        .filter(|src| !src.trim().is_empty());
    let description = article
        .summary
        .clone()
        .unwrap_or_else(|| text::truncate_summary(Some(article.content.as_str()), 150));

    let seo = SeoHead {
        title: Some(article.title.clone()),
        description,
        keywords: (!article.tags.is_empty()).then(|| article.tags.join(", ")),
        image: Some(image.clone().unwrap_or_else(|| HERO_PLACEHOLDER.to_string())),
        path: Some(article.link()),
        article: Some(ArticleMeta {
            published_time: article.published_at.map(|at| at.to_rfc3339()),
            modified_time: None,
            author: article.author.clone(),
            section: Some(article.category.clone()),
            tags: article.tags.clone(),
        }),
    }
    .render(site);

    ArticleDetail {
        seo,
        breadcrumb: vec![
            NavLink::new("Home", "/"),
            NavLink::new(category_title.clone(), category_href(&article.category)),
            NavLink::new("Article", article.link()),
        ],
        category: article.category.clone(),
        category_badge: article.category.to_uppercase(),
        accent_color: descriptor.accent_color,
        date: article
            .published_at
            .as_ref()
            .map(text::long_date)
            .unwrap_or_default(),
        source: article.source_name().map(str::to_string),
        title: article.title.clone(),
        byline: article.author.as_ref().map(|a| format!("By {a}")),
        image,
        video: article
            .video_url
            .as_deref()
            .filter(|_| article.has_video)
            .filter(|src| !src.trim().is_empty())
            .map(VideoEmbed::detect),
        ai_notice: article
            .is_ai_enhanced
            .then(|| "This article has been enhanced with AI-generated context.".to_string()),
        background: article.background.clone(),
        body: ArticleBody::from_article(article),
        facts: article.facts.clone(),
        tags: article.tags.iter().map(|t| format!("#{t}")).collect(),
        original: article.url.as_ref().map(|url| {
            NavLink::new(
                format!("Read on {}", article.source_name().unwrap_or("Original Site")),
                url.clone(),
            )
        }),
        back_link: NavLink::new(format!("Back to {category_title}"), category_href(&article.category)),
    }
}
