use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One news item as served by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default = "default_category")]
    pub category: String,
    /// `None` when the backend omits the date or sends one that does not parse.
    #[serde(default, deserialize_with = "lenient_date")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub source: Option<SourceRef>,
    #[serde(default, alias = "isAiInhanced")]
    pub is_ai_enhanced: bool,
    #[serde(default)]
    pub has_video: bool,
    #[serde(default)]
    pub video_url: Option<String>,
    /// Link to the story on the originating site.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default, rename = "aiFacts")]
    pub facts: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

fn default_category() -> String {
    "general".to_string()
}

fn lenient_date<'de, D>(deserializer: D) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(|s| s.parse().ok()))
}

impl Article {
    pub fn source_name(&self) -> Option<&str> {
        self.source.as_ref().map(|s| s.name.as_str())
    }

    pub fn link(&self) -> String {
        format!("/article/{}", self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRef {
    pub name: String,
}

/// One page of a paginated article list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageResult {
    pub items: Vec<Article>,
    pub current_page: u32,
    pub total_pages: u32,
}

impl PageResult {
    /// Builds a page, clamping the counters so
    /// `1 <= current_page <= total_pages`.
    pub fn new(items: Vec<Article>, current_page: u32, total_pages: u32) -> Self {
        let total_pages = total_pages.max(1);
        Self {
            items,
            current_page: current_page.clamp(1, total_pages),
            total_pages,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), 1, 1)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    #[serde(default, rename = "_id", alias = "id")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, alias = "location")]
    pub country: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, alias = "count")]
    pub article_count: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceStats {
    #[serde(default)]
    pub total_sources: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteStats {
    #[serde(default)]
    pub total_articles: u64,
    #[serde(default)]
    pub categories_stats: Vec<CategoryCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    #[serde(rename = "_id")]
    pub slug: String,
    pub count: u64,
}

/// Query for the general article list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub limit: u32,
    pub search: Option<String>,
    pub has_video: Option<bool>,
    pub sort: Option<String>,
}

impl ListQuery {
    pub fn page(page: u32, limit: u32) -> Self {
        Self {
            page,
            limit,
            ..Default::default()
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_video(mut self) -> Self {
        self.has_video = Some(true);
        self
    }

    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Query-string pairs in the order the backend documents them.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(has_video) = self.has_video {
            pairs.push(("hasVideo", has_video.to_string()));
        }
        if let Some(sort) = &self.sort {
            pairs.push(("sort", sort.clone()));
        }
        pairs
    }
}
