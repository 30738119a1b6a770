//! Document head metadata: title, Open Graph, Twitter card and JSON-LD.

use serde::Serialize;
use serde_json::{json, Value};

use crate::site::SiteConfig;

const TAGLINE: &str = "Comprehensive Muslim Community News";
const ROBOTS: &str = "index, follow, max-snippet:-1, max-image-preview:large, max-video-preview:-1";
const THEME_COLOR: &str = "#dc3545";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetaKey {
    Name,
    Property,
    HttpEquiv,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaTag {
    pub key: MetaKey,
    pub name: String,
    pub content: String,
}

impl MetaTag {
    fn name(name: &str, content: impl Into<String>) -> Self {
        Self {
            key: MetaKey::Name,
            name: name.to_string(),
            content: content.into(),
        }
    }

    fn property(name: &str, content: impl Into<String>) -> Self {
        Self {
            key: MetaKey::Property,
            name: name.to_string(),
            content: content.into(),
        }
    }

    fn http_equiv(name: &str, content: impl Into<String>) -> Self {
        Self {
            key: MetaKey::HttpEquiv,
            name: name.to_string(),
            content: content.into(),
        }
    }
}

/// Extra metadata for `og:type = article` pages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleMeta {
    pub published_time: Option<String>,
    pub modified_time: Option<String>,
    pub author: Option<String>,
    pub section: Option<String>,
    pub tags: Vec<String>,
}

/// What a page wants in its head.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeoHead {
    pub title: Option<String>,
    pub description: String,
    pub keywords: Option<String>,
    pub image: Option<String>,
    pub path: Option<String>,
    pub article: Option<ArticleMeta>,
}

/// The rendered head, ready to be turned into tags.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeoTags {
    pub title: String,
    pub canonical: String,
    pub meta: Vec<MetaTag>,
    pub json_ld: Vec<Value>,
}

impl SeoTags {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.meta
            .iter()
            .find(|m| m.name == name)
            .map(|m| m.content.as_str())
    }
}

impl SeoHead {
    pub fn titled(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn at(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn render(&self, site: &SiteConfig) -> SeoTags {
        let full_title = match &self.title {
            Some(title) => format!("{} | {}", title, site.site_name),
            None => format!("{} - {}", site.site_name, TAGLINE),
        };
        let short_title = self.title.clone().unwrap_or_else(|| site.site_name.clone());
        let url = match &self.path {
            Some(path) => site.absolute(path),
            None => site.site_url.clone(),
        };
        let image = self.image.clone().unwrap_or_else(|| site.default_image());
        let author = self
            .article
            .as_ref()
            .and_then(|a| a.author.clone())
            .unwrap_or_else(|| site.site_name.clone());

        let mut meta = vec![MetaTag::name("description", &self.description)];
        if let Some(keywords) = &self.keywords {
            meta.push(MetaTag::name("keywords", keywords));
        }
        meta.push(MetaTag::name("author", &author));

        meta.extend([
            MetaTag::property("og:title", &short_title),
            MetaTag::property("og:description", &self.description),
            MetaTag::property("og:image", &image),
            MetaTag::property("og:url", &url),
            MetaTag::property(
                "og:type",
                if self.article.is_some() { "article" } else { "website" },
            ),
            MetaTag::property("og:site_name", &site.site_name),
            MetaTag::property("og:locale", "en_US"),
        ]);

        if let Some(article) = &self.article {
            meta.push(MetaTag::property("article:author", &author));
            if let Some(section) = &article.section {
                meta.push(MetaTag::property("article:section", section));
            }
            if let Some(published) = &article.published_time {
                meta.push(MetaTag::property("article:published_time", published));
            }
            if let Some(modified) = &article.modified_time {
                meta.push(MetaTag::property("article:modified_time", modified));
            }
            for tag in &article.tags {
                meta.push(MetaTag::property("article:tag", tag));
            }
        }

        meta.extend([
            MetaTag::name("twitter:card", "summary_large_image"),
            MetaTag::name("twitter:site", &site.twitter_handle),
            MetaTag::name("twitter:creator", &site.twitter_handle),
            MetaTag::name("twitter:title", &short_title),
            MetaTag::name("twitter:description", &self.description),
            MetaTag::name("twitter:image", &image),
            MetaTag::name("robots", ROBOTS),
            MetaTag::name("googlebot", "index, follow"),
            MetaTag::name("bingbot", "index, follow"),
            MetaTag::http_equiv("content-language", "en-US"),
            MetaTag::name("viewport", "width=device-width, initial-scale=1.0"),
            MetaTag::name("theme-color", THEME_COLOR),
        ]);

        let mut json_ld = Vec::new();
        if let Some(article) = &self.article {
            json_ld.push(json!({
                "@context": "https://schema.org",
                "@type": "NewsArticle",
                "headline": short_title,
                "description": self.description,
                "image": image,
                "author": {
                    "@type": "Person",
                    "name": article.author.clone().unwrap_or_else(|| format!("{} Staff", site.site_name)),
                },
                "publisher": {
                    "@type": "Organization",
                    "name": site.site_name,
                    "logo": { "@type": "ImageObject", "url": site.absolute("/logo.png") },
                },
                "datePublished": article.published_time,
                "dateModified": article.modified_time.as_ref().or(article.published_time.as_ref()),
                "mainEntityOfPage": { "@type": "WebPage", "@id": url },
                "articleSection": article.section,
                "keywords": article.tags.join(", "),
                "url": url,
            }));
        }
        json_ld.push(json!({
            "@context": "https://schema.org",
            "@type": "NewsMediaOrganization",
            "name": site.site_name,
            "url": site.site_url,
            "logo": site.absolute("/logo.png"),
            "description": "Comprehensive news platform covering the global Muslim community",
        }));

        SeoTags {
            title: full_title,
            canonical: url,
            meta,
            json_ld,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_head() {
        let tags = SeoHead::default().render(&SiteConfig::default());
        assert_eq!(tags.title, "Ummah News Hub - Comprehensive Muslim Community News");
        assert_eq!(tags.canonical, "https://ummah-news-hub.com");
        assert_eq!(tags.get("og:type"), Some("website"));
        assert_eq!(tags.get("og:image"), Some("https://ummah-news-hub.com/og-image.jpg"));
        assert!(tags.get("keywords").is_none());
        assert_eq!(tags.json_ld.len(), 1);
    }

    #[test]
    fn test_article_head() {
        let head = SeoHead {
            title: Some("Aid reaches Gaza".to_string()),
            description: "Convoy crossed at dawn".to_string(),
            image: Some("https://cdn.example.com/a.jpg".to_string()),
            path: Some("/article/42".to_string()),
            article: Some(ArticleMeta {
                published_time: Some("2026-01-05T12:00:00+00:00".to_string()),
                section: Some("palestine".to_string()),
                tags: vec!["aid".to_string(), "gaza".to_string()],
                ..ArticleMeta::default()
            }),
            ..SeoHead::default()
        };
        let tags = head.render(&SiteConfig::default());
        assert_eq!(tags.title, "Aid reaches Gaza | Ummah News Hub");
        assert_eq!(tags.canonical, "https://ummah-news-hub.com/article/42");
        assert_eq!(tags.get("og:type"), Some("article"));
        assert_eq!(tags.get("author"), Some("Ummah News Hub"));
        assert_eq!(tags.meta.iter().filter(|m| m.name == "article:tag").count(), 2);

        let ld = &tags.json_ld[0];
        assert_eq!(ld["@type"], "NewsArticle");
        assert_eq!(ld["author"]["name"], "Ummah News Hub Staff");
        assert_eq!(ld["dateModified"], "2026-01-05T12:00:00+00:00");
        assert_eq!(ld["keywords"], "aid, gaza");
    }
}
