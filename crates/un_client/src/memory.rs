use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::RwLock;
use un_core::{
    Article, CategoryCount, Error, ListQuery, NewsApi, PageResult, Result, SiteStats, Source,
    SourceStats,
};

/// In-process [`NewsApi`] backed by a list of articles.
///
/// Articles keep their insertion order, which doubles as the popularity
/// ranking. Paging follows the backend: `limit` items per page, at least one
/// page even when empty.
pub struct MemoryNewsApi {
    articles: RwLock<Vec<Article>>,
    sources: RwLock<Vec<Source>>,
    offline: AtomicBool,
    requests: AtomicUsize,
}

impl MemoryNewsApi {
    pub fn new() -> Self {
        Self::with_articles(Vec::new())
    }

    pub fn with_articles(articles: Vec<Article>) -> Self {
        Self {
            articles: RwLock::new(articles),
            sources: RwLock::new(Vec::new()),
            offline: AtomicBool::new(false),
            requests: AtomicUsize::new(0),
        }
    }

    pub async fn add_article(&self, article: Article) {
        let mut articles = self.articles.write().await;
        if let Some(existing) = articles.iter_mut().find(|a| a.id == article.id) {
            *existing = article;
        } else {
            articles.push(article);
        }
    }

    pub async fn add_source(&self, source: Source) {
        self.sources.write().await.push(source);
    }

    /// While offline every call fails with a 503.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Number of calls made so far, failed ones included.
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    fn begin(&self, what: &str) -> Result<()> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        if self.offline.load(Ordering::SeqCst) {
            return Err(Error::Status {
                status: 503,
                url: format!("memory://{what}"),
            });
        }
        Ok(())
    }

    fn paginate(matching: Vec<Article>, page: u32, limit: u32) -> PageResult {
        let limit = limit.max(1) as usize;
        let total_pages = matching.len().div_ceil(limit).max(1) as u32;
        let items = matching
            .into_iter()
            .skip((page.max(1) as usize - 1) * limit)
            .take(limit)
            .collect();
        PageResult::new(items, page, total_pages)
    }

    fn newest_first(mut articles: Vec<Article>) -> Vec<Article> {
        articles.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        articles
    }
}

impl Default for MemoryNewsApi {
    fn default() -> Self {
        Self::new()
    }
}

fn matches_search(article: &Article, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    article.title.to_lowercase().contains(&needle)
        || article.content.to_lowercase().contains(&needle)
        || article
            .summary
            .as_deref()
            .is_some_and(|s| s.to_lowercase().contains(&needle))
}

#[async_trait]
impl NewsApi for MemoryNewsApi {
    async fn list_articles(&self, query: &ListQuery) -> Result<PageResult> {
        self.begin("articles")?;
        let articles = self.articles.read().await;
        let mut matching: Vec<Article> = articles
            .iter()
            .filter(|a| query.search.as_deref().map_or(true, |s| matches_search(a, s)))
            .filter(|a| query.has_video.map_or(true, |v| a.has_video == v))
            .cloned()
            .collect();
        if query.sort.as_deref() != Some("views") {
            matching = Self::newest_first(matching);
        }
        Ok(Self::paginate(matching, query.page, query.limit))
    }

    async fn articles_by_category(&self, slug: &str, page: u32, limit: u32) -> Result<PageResult> {
        self.begin("articles/category")?;
        let articles = self.articles.read().await;
        let matching = articles
            .iter()
            .filter(|a| a.category == slug)
            .cloned()
            .collect();
        Ok(Self::paginate(Self::newest_first(matching), page, limit))
    }

    async fn article(&self, id: &str) -> Result<Article> {
        self.begin("articles")?;
        self.articles
            .read()
            .await
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("article {id}")))
    }

    async fn recent_articles(&self, limit: u32) -> Result<Vec<Article>> {
        self.begin("articles/recent")?;
        let articles = self.articles.read().await.clone();
        Ok(Self::newest_first(articles)
            .into_iter()
            .take(limit as usize)
            .collect())
    }

    async fn popular_articles(&self, limit: u32) -> Result<Vec<Article>> {
        self.begin("articles/popular")?;
        Ok(self
            .articles
            .read()
            .await
            .iter()
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn stats(&self) -> Result<SiteStats> {
        self.begin("articles/stats")?;
        let articles = self.articles.read().await;
        let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
        for article in articles.iter() {
            *counts.entry(article.category.as_str()).or_default() += 1;
        }
        Ok(SiteStats {
            total_articles: articles.len() as u64,
            categories_stats: counts
                .into_iter()
                .map(|(slug, count)| CategoryCount {
                    slug: slug.to_string(),
                    count,
                })
                .collect(),
        })
    }

    async fn sources(&self) -> Result<Vec<Source>> {
        self.begin("sources")?;
        Ok(self.sources.read().await.clone())
    }

    async fn source_stats(&self) -> Result<SourceStats> {
        self.begin("sources/stats")?;
        Ok(SourceStats {
            total_sources: self.sources.read().await.len() as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn article(id: usize, category: &str) -> Article {
        Article {
            id: format!("a{id}"),
            title: format!("Story {id}"),
            summary: Some(format!("Summary of story {id}")),
            content: String::new(),
            category: category.to_string(),
            published_at: Some(
                Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap() + Duration::hours(id as i64),
            ),
            image_url: None,
            author: None,
            source: None,
            is_ai_enhanced: false,
            has_video: id % 2 == 0,
            video_url: None,
            url: None,
            background: None,
            facts: vec![],
            tags: vec![],
        }
    }

    #[tokio::test]
    async fn test_category_pages() {
        let api = MemoryNewsApi::with_articles((0..15).map(|i| article(i, "palestine")).collect());
        let first = api.articles_by_category("palestine", 1, 10).await.unwrap();
        assert_eq!(first.items.len(), 10);
        assert_eq!(first.total_pages, 2);
        assert_eq!(first.items[0].id, "a14");
        let second = api.articles_by_category("palestine", 2, 10).await.unwrap();
        assert_eq!(second.items.len(), 5);
        assert_eq!(second.current_page, 2);
    }

    #[tokio::test]
    async fn test_empty_category_has_one_page() {
        let api = MemoryNewsApi::new();
        let page = api.articles_by_category("europe", 1, 10).await.unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[tokio::test]
    async fn test_filters() {
        let api = MemoryNewsApi::with_articles((0..6).map(|i| article(i, "europe")).collect());
        let videos = api.list_articles(&ListQuery::page(1, 20).with_video()).await.unwrap();
        assert_eq!(videos.items.len(), 3);
        let search = api
            .list_articles(&ListQuery::page(1, 20).with_search("STORY 4"))
            .await
            .unwrap();
        assert_eq!(search.items.len(), 1);
    }

    #[tokio::test]
    async fn test_offline_fails_and_counts() {
        let api = MemoryNewsApi::with_articles(vec![article(1, "africa")]);
        api.set_offline(true);
        assert!(matches!(api.stats().await, Err(Error::Status { status: 503, .. })));
        api.set_offline(false);
        assert_eq!(api.stats().await.unwrap().total_articles, 1);
        assert_eq!(api.request_count(), 2);
    }

    #[tokio::test]
    async fn test_missing_article() {
        let api = MemoryNewsApi::new();
        assert!(matches!(api.article("nope").await, Err(Error::NotFound(_))));
    }
}
