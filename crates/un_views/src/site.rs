/// Site-wide identity used by the SEO head and chrome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub site_url: String,
    pub site_name: String,
    pub default_image: Option<String>,
    pub twitter_handle: String,
}

impl SiteConfig {
    pub const DEFAULT_SITE_URL: &'static str = "https://ummah-news-hub.com";
    pub const DEFAULT_SITE_NAME: &'static str = "Ummah News Hub";
    pub const DEFAULT_TWITTER_HANDLE: &'static str = "@ummah_news";

    pub fn new(site_url: impl Into<String>, site_name: impl Into<String>) -> Self {
        Self {
            site_url: site_url.into().trim_end_matches('/').to_string(),
            site_name: site_name.into(),
            ..Self::default()
        }
    }

    pub fn with_default_image(mut self, image: impl Into<String>) -> Self {
        self.default_image = Some(image.into());
        self
    }

    pub fn with_twitter_handle(mut self, handle: impl Into<String>) -> Self {
        self.twitter_handle = handle.into();
        self
    }

    /// Falls back to `{site_url}/og-image.jpg`.
    pub fn default_image(&self) -> String {
        self.default_image
            .clone()
            .unwrap_or_else(|| format!("{}/og-image.jpg", self.site_url))
    }

    pub fn absolute(&self, path: &str) -> String {
        format!("{}{}", self.site_url, path)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_url: Self::DEFAULT_SITE_URL.to_string(),
            site_name: Self::DEFAULT_SITE_NAME.to_string(),
            default_image: None,
            twitter_handle: Self::DEFAULT_TWITTER_HANDLE.to_string(),
        }
    }
}
