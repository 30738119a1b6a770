use std::time::Duration;
use un_core::{Error, Result};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Where and how to reach the news backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Url,
    pub timeout: Duration,
    pub page_size: u32,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Result<Self> {
        let mut url = Url::parse(base_url)
            .map_err(|e| Error::InvalidUrl(format!("{base_url}: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::InvalidUrl(format!(
                "{base_url}: only http and https are supported"
            )));
        }
        if url.cannot_be_a_base() {
            return Err(Error::InvalidUrl(format!("{base_url}: not a base URL")));
        }
        url.set_query(None);
        url.set_fragment(None);
        Ok(Self {
            base_url: url,
            timeout: DEFAULT_TIMEOUT,
            page_size: DEFAULT_PAGE_SIZE,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Result<Self> {
        if page_size == 0 {
            return Err(Error::Config("page size must be at least 1".to_string()));
        }
        self.page_size = page_size;
        Ok(self)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends path segments to the base URL, escaping each one.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            timeout: DEFAULT_TIMEOUT,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_segments() {
        let config = ApiConfig::new("https://news.example.com/api").unwrap();
        let url = config.endpoint(&["articles", "category", "middle-east"]).unwrap();
        assert_eq!(url.as_str(), "https://news.example.com/api/articles/category/middle-east");
    }

    #[test]
    fn test_trailing_slash_is_tolerated() {
        let config = ApiConfig::new("http://localhost:5000/api/").unwrap();
        let url = config.endpoint(&["articles"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/articles");
    }

    #[test]
    fn test_segments_are_escaped() {
        let config = ApiConfig::default();
        let url = config.endpoint(&["articles", "a b/c"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/articles/a%20b%2Fc");
    }

    #[test]
    fn test_rejects_bad_urls() {
        assert!(ApiConfig::new("not a url").is_err());
        assert!(ApiConfig::new("ftp://example.com/api").is_err());
        assert!(ApiConfig::new("mailto:news@example.com").is_err());
    }

    #[test]
    fn test_page_size_must_be_positive() {
        assert!(ApiConfig::default().with_page_size(0).is_err());
        assert_eq!(ApiConfig::default().with_page_size(12).unwrap().page_size, 12);
    }
}
