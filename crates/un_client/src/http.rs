use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;
use un_core::{
    Article, Error, ListQuery, NewsApi, PageResult, Result, SiteStats, Source, SourceStats,
};

use crate::config::ApiConfig;
use crate::envelope::{ArticleListEnvelope, PagedEnvelope, SourceListEnvelope};

/// [`NewsApi`] over the backend's REST endpoints.
#[derive(Debug, Clone)]
pub struct HttpNewsClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl HttpNewsClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("ummah-news/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: Vec<(&'static str, String)>,
    ) -> Result<T> {
        let url = self.config.endpoint(segments)?;
        debug!("GET {} {:?}", url, query);

        let response = self.http.get(url.clone()).query(&query).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(Error::NotFound(url.to_string()));
        }
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body)
            .map_err(|e| Error::MalformedResponse(format!("{}: {}", url, e)))
    }

    fn limit_pair(limit: u32) -> Vec<(&'static str, String)> {
        vec![("limit", limit.to_string())]
    }
}

#[async_trait]
impl NewsApi for HttpNewsClient {
    async fn list_articles(&self, query: &ListQuery) -> Result<PageResult> {
        let envelope: PagedEnvelope = self.get_json(&["articles"], query.to_pairs()).await?;
        Ok(envelope.into())
    }

    async fn articles_by_category(&self, slug: &str, page: u32, limit: u32) -> Result<PageResult> {
        let query = ListQuery::page(page, limit);
        let envelope: PagedEnvelope = self
            .get_json(&["articles", "category", slug], query.to_pairs())
            .await?;
        Ok(envelope.into())
    }

    async fn article(&self, id: &str) -> Result<Article> {
        self.get_json(&["articles", id], Vec::new()).await
    }

    async fn recent_articles(&self, limit: u32) -> Result<Vec<Article>> {
        let envelope: ArticleListEnvelope = self
            .get_json(&["articles", "recent"], Self::limit_pair(limit))
            .await?;
        Ok(envelope.into())
    }

    async fn popular_articles(&self, limit: u32) -> Result<Vec<Article>> {
        let envelope: ArticleListEnvelope = self
            .get_json(&["articles", "popular"], Self::limit_pair(limit))
            .await?;
        Ok(envelope.into())
    }

    async fn stats(&self) -> Result<SiteStats> {
        self.get_json(&["articles", "stats"], Vec::new()).await
    }

    async fn sources(&self) -> Result<Vec<Source>> {
        let envelope: SourceListEnvelope = self.get_json(&["sources"], Vec::new()).await?;
        Ok(envelope.into())
    }

    async fn source_stats(&self) -> Result<SourceStats> {
        self.get_json(&["sources", "stats"], Vec::new()).await
    }
}
