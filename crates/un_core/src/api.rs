use async_trait::async_trait;
use crate::types::{Article, ListQuery, PageResult, SiteStats, Source, SourceStats};
use crate::Result;

/// Read-only access to the news backend.
///
/// Every implementation hands back normalized shapes; callers never see the
/// backend's envelope variations.
#[async_trait]
pub trait NewsApi: Send + Sync {
    /// List articles, optionally filtered by search text or video presence
    async fn list_articles(&self, query: &ListQuery) -> Result<PageResult>;

    /// List the articles filed under a category slug
    async fn articles_by_category(&self, slug: &str, page: u32, limit: u32) -> Result<PageResult>;

    /// Fetch a single article by id
    async fn article(&self, id: &str) -> Result<Article>;

    /// Most recent articles
    async fn recent_articles(&self, limit: u32) -> Result<Vec<Article>>;

    /// Most viewed articles
    async fn popular_articles(&self, limit: u32) -> Result<Vec<Article>>;

    /// Aggregate article counts
    async fn stats(&self) -> Result<SiteStats>;

    /// Known news sources
    async fn sources(&self) -> Result<Vec<Source>>;

    async fn source_stats(&self) -> Result<SourceStats>;
}
