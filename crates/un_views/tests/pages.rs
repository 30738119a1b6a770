use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use std::sync::Arc;
use un_client::MemoryNewsApi;
use un_core::{
    Article, Error, ListQuery, NewsApi, PageResult, Result, SiteStats, Source, SourceStats,
};
use un_views::chrome::{Sidebar, SidebarTab};
use un_views::pages::{
    human_rights_page, ArticlePage, ArticleState, ArticleView, CategoryPage, HomePage, SearchPage,
    SearchView, VideosPage,
};
use un_views::{Feed, FeedController, PageRequest, SiteConfig, ViewStatus};

fn article(n: usize, category: &str) -> Article {
    Article {
        id: format!("{category}-{n}"),
        title: format!("{category} story {n}"),
        summary: Some(format!("What happened in story {n}.")),
        content: format!("Opening line of {n}.\n\nClosing line."),
        category: category.to_string(),
        published_at: Some(Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap() + Duration::minutes(n as i64)),
        image_url: None,
        author: None,
        source: None,
        is_ai_enhanced: false,
        has_video: false,
        video_url: None,
        url: None,
        background: None,
        facts: vec![],
        tags: vec![],
    }
}

fn memory(articles: Vec<Article>) -> Arc<MemoryNewsApi> {
    Arc::new(MemoryNewsApi::with_articles(articles))
}

#[tokio::test]
async fn test_category_pages_through_backend() {
    let api = memory((0..15).map(|n| article(n, "palestine")).collect());
    let mut page = CategoryPage::new(api.clone(), " Palestine ");
    assert_eq!(page.load().await, PageRequest::Loaded);

    let view = page.view(&SiteConfig::default());
    assert_eq!(view.feed.cards.len(), 10);
    assert_eq!(view.heading, "Palestine News");
    assert_eq!(view.showing.as_deref(), Some("Showing 10 articles"));
    let window = view.feed.pagination.expect("two pages offer navigation");
    assert!(window.pages.contains(&2));
    assert_eq!(window.next, Some(2));

    assert_eq!(page.request_page(2).await, PageRequest::Loaded);
    let view = page.view(&SiteConfig::default());
    assert_eq!(view.feed.cards.len(), 5);
    assert_eq!(view.feed.current_page, 2);
    assert_eq!(page.request_page(3).await, PageRequest::Ignored);
    assert_eq!(api.request_count(), 2);
}

#[tokio::test]
async fn test_opening_past_the_end_lands_on_last_page() {
    let api = memory((0..25).map(|n| article(n, "palestine")).collect());
    let mut page = CategoryPage::new(api, "palestine");
    assert_eq!(page.open(5).await, PageRequest::Loaded);
    assert_eq!(page.feed().pages().current_page, 3);
    assert_eq!(page.feed().pages().total_pages, 3);

    let view = page.view(&SiteConfig::default());
    let window = view.feed.pagination.expect("three pages offer navigation");
    assert_eq!(view.feed.current_page, window.current);
    assert_eq!(window.previous, Some(2));

}

#[tokio::test]
async fn test_previous_works_after_opening_past_the_end() {
    let api = memory((0..25).map(|n| article(n, "palestine")).collect());
    let mut feed = FeedController::new(api, Feed::Category("palestine".to_string()), 10);
    feed.open(5).await;
    assert_eq!(feed.previous_page().await, PageRequest::Loaded);
    assert_eq!(feed.pages().current_page, 2);
    assert_eq!(feed.articles().len(), 10);
    assert_eq!(feed.next_page().await, PageRequest::Loaded);
    assert_eq!(feed.articles().len(), 5);
}

#[tokio::test]
async fn test_unknown_category_is_empty_not_failed() {
    let api = memory(vec![article(1, "palestine")]);
    let mut page = CategoryPage::new(api, "atlantis");
    page.load().await;
    let view = page.view(&SiteConfig::default());
    assert_eq!(view.category.title, "atlantis");
    assert_eq!(view.feed.status, ViewStatus::Empty);
    assert!(view.feed.pagination.is_none());
    assert!(view.showing.is_none());
}

#[tokio::test]
async fn test_human_rights_uses_tragedy_feed() {
    let mut articles: Vec<Article> = (0..14).map(|n| article(n, "tragedy")).collect();
    articles.push(article(99, "europe"));
    let mut page = human_rights_page(memory(articles));
    page.load().await;
    assert_eq!(page.feed().articles().len(), 12);
    assert_eq!(page.feed().pages().total_pages, 2);
    assert_eq!(page.descriptor().title, "Human Rights");
}

#[tokio::test]
async fn test_home_fills_ticker_carousel_and_trending() {
    let api = memory((0..12).map(|n| article(n, "europe")).collect());
    let mut home = HomePage::new(api);
    assert_eq!(home.load().await, PageRequest::Loaded);

    let view = home.view(&SiteConfig::default());
    assert_eq!(view.breaking.len(), 5);
    assert_eq!(view.feed.cards.len(), 10);
    assert_eq!(view.trending.len(), 4);
    assert_eq!(view.trending[0].rank, 1);
    let featured = view.featured.expect("featured grid over loaded feed");
    assert_eq!(featured.side.len(), 2);
    assert_eq!(featured.lead.author.as_deref(), Some("Staff"));
    let carousel = view.carousel.expect("carousel over loaded feed");
    assert_eq!(carousel.slides.len(), 5);
    assert_eq!(carousel.slides[0].title, view.feed.cards[0].title);
    assert!(home.carousel().is_ticking());

    home.unmount();
    assert!(!home.carousel().is_ticking());
}

#[tokio::test]
async fn test_home_failure_reports_and_retries() {
    let api = memory((0..3).map(|n| article(n, "africa")).collect());
    api.set_offline(true);
    let mut home = HomePage::new(api.clone());
    assert_eq!(home.load().await, PageRequest::Failed);
    let view = home.view(&SiteConfig::default());
    assert!(view.feed.status.is_failed());
    assert!(view.carousel.is_none());
    assert!(view.breaking.is_empty());

    api.set_offline(false);
    assert_eq!(home.retry().await, PageRequest::Loaded);
    assert_eq!(home.feed().articles().len(), 3);
}

#[tokio::test]
async fn test_blank_search_never_fetches() {
    let api = memory(vec![article(1, "europe")]);
    let mut search = SearchPage::new(api.clone(), "   ");
    assert_eq!(search.load().await, PageRequest::Ignored);
    assert!(matches!(
        search.view(&SiteConfig::default()),
        SearchView::NoQuery { .. }
    ));
    assert_eq!(api.request_count(), 0);
}

#[tokio::test]
async fn test_search_filters_results() {
    let api = memory((0..4).map(|n| article(n, "europe")).collect());
    let mut search = SearchPage::new(api, "story 2");
    assert_eq!(search.load().await, PageRequest::Loaded);
    match search.view(&SiteConfig::default()) {
        SearchView::Results { query, feed, .. } => {
            assert_eq!(query, "story 2");
            assert_eq!(feed.cards.len(), 1);
        }
        other => panic!("expected results, got {other:?}"),
    }
}

#[tokio::test]
async fn test_videos_page_lists_only_video_articles() {
    let articles = (0..6)
        .map(|n| {
            let mut a = article(n, "culture");
            a.has_video = n < 2;
            a
        })
        .collect();
    let mut videos = VideosPage::new(memory(articles));
    videos.load().await;
    let view = videos.view(&SiteConfig::default());
    assert_eq!(view.status, ViewStatus::Ready);
    assert_eq!(view.cards.len(), 2);
    assert!(view.cards.iter().all(|c| c.image.src.ends_with("400x300")));
}

#[tokio::test]
async fn test_article_page_states() {
    let api = memory(vec![article(7, "economics")]);
    let mut page = ArticlePage::new(api.clone(), "economics-7");
    assert!(matches!(page.load().await, ArticleState::Loaded(_)));
    match page.view(&SiteConfig::default()) {
        ArticleView::Loaded(detail) => {
            assert_eq!(detail.title, "economics story 7");
            assert_eq!(detail.back_link.label, "Back to Economics");
        }
        other => panic!("expected article, got {other:?}"),
    }

    let mut missing = ArticlePage::new(api.clone(), "nope");
    assert_eq!(*missing.load().await, ArticleState::NotFound);

    api.set_offline(true);
    let mut broken = ArticlePage::new(api.clone(), "economics-7");
    assert!(matches!(broken.load().await, ArticleState::Failed(_)));
    api.set_offline(false);
    assert!(matches!(broken.retry().await, ArticleState::Loaded(_)));
}

/// Delegates to a memory backend but fails one endpoint.
struct PartlyDown(MemoryNewsApi, &'static str);

impl PartlyDown {
    fn refuse(&self, endpoint: &str) -> Result<()> {
        if self.1 == endpoint {
            return Err(Error::Status {
                status: 500,
                url: endpoint.to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl NewsApi for PartlyDown {
    async fn list_articles(&self, query: &ListQuery) -> Result<PageResult> {
        self.refuse("articles")?;
        self.0.list_articles(query).await
    }
    async fn articles_by_category(&self, slug: &str, page: u32, limit: u32) -> Result<PageResult> {
        self.0.articles_by_category(slug, page, limit).await
    }
    async fn article(&self, id: &str) -> Result<Article> {
        self.0.article(id).await
    }
    async fn recent_articles(&self, limit: u32) -> Result<Vec<Article>> {
        self.0.recent_articles(limit).await
    }
    async fn popular_articles(&self, limit: u32) -> Result<Vec<Article>> {
        self.0.popular_articles(limit).await
    }
    async fn stats(&self) -> Result<SiteStats> {
        self.0.stats().await
    }
    async fn sources(&self) -> Result<Vec<Source>> {
        self.refuse("sources")?;
        self.0.sources().await
    }
    async fn source_stats(&self) -> Result<SourceStats> {
        self.0.source_stats().await
    }
}

#[tokio::test]
async fn test_sidebar_widget_failure_is_isolated() {
    let backend = MemoryNewsApi::with_articles(
        (0..6)
            .map(|n| article(n, if n % 2 == 0 { "palestine" } else { "africa" }))
            .collect(),
    );
    backend
        .add_source(Source {
            id: None,
            name: "Anadolu".to_string(),
            country: Some("Turkey".to_string()),
            url: None,
            article_count: 3,
        })
        .await;
    let mut sidebar = Sidebar::new(Arc::new(PartlyDown(backend, "sources")));
    sidebar.load().await;

    let view = sidebar.view();
    assert!(view.sources.is_empty());
    assert_eq!(view.stats.sources, 1);
    assert_eq!(view.stats.articles, 6);
    assert_eq!(view.stats.categories, 2);
    assert_eq!(view.recent.len(), 4);
    assert_eq!(view.recent[0].id, "africa-5");
    assert_eq!(view.popular[0].id, "palestine-0");
    assert_eq!(view.most_popular.len(), 5);
    assert_eq!(view.most_popular[0].rank, 1);
    assert_eq!(view.most_popular[0].id, "palestine-0");
    assert_eq!(view.most_popular[4].id, "palestine-4");
    assert_eq!(view.categories[1].title, "Palestine");

    assert_eq!(sidebar.active_articles()[0].id, "africa-5");
    sidebar.select_tab(SidebarTab::Popular);
    assert_eq!(sidebar.active_articles()[0].id, "palestine-0");
}

#[tokio::test]
async fn test_most_popular_failure_keeps_other_widgets() {
    let backend = MemoryNewsApi::with_articles((0..6).map(|n| article(n, "asia")).collect());
    let mut sidebar = Sidebar::new(Arc::new(PartlyDown(backend, "articles")));
    sidebar.load().await;

    let view = sidebar.view();
    assert!(view.most_popular.is_empty());
    assert_eq!(view.recent.len(), 4);
    assert_eq!(view.popular.len(), 4);
    assert_eq!(view.stats.articles, 6);
}
