use anyhow::{bail, Context};
use clap::Parser;
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, info};
use un_client::config::DEFAULT_PAGE_SIZE;
use un_client::{ApiConfig, HttpNewsClient};
use un_core::{taxonomy, NewsApi};
use un_views::chrome::Sidebar;
use un_views::pages::{
    human_rights_page, ArticlePage, ArticleView, CategoryPage, HomePage, SearchPage, VideosPage,
};
use un_views::{SiteConfig, ViewStatus};
use un_web::AppState;

mod duration;
mod logging;
mod render;

use duration::HumanDuration;

#[derive(Parser, Debug)]
#[command(author, version, about = "Ummah News Hub front end", long_about = None)]
pub struct Cli {
    /// Base URL of the news backend API.
    #[arg(long, env = "UMMAH_API_URL", default_value = un_client::config::DEFAULT_BASE_URL)]
    api_url: String,
    #[arg(long, env = "UMMAH_SITE_URL", default_value = SiteConfig::DEFAULT_SITE_URL)]
    site_url: String,
    #[arg(long, env = "UMMAH_SITE_NAME", default_value = SiteConfig::DEFAULT_SITE_NAME)]
    site_name: String,
    #[arg(long, env = "UMMAH_DEFAULT_IMAGE")]
    default_image: Option<String>,
    #[arg(long, env = "UMMAH_TWITTER_HANDLE", default_value = SiteConfig::DEFAULT_TWITTER_HANDLE)]
    twitter_handle: String,
    /// Per-request timeout (e.g. 10s, 1m, 500ms).
    #[arg(long, default_value = "10s")]
    timeout: HumanDuration,
    /// Articles per page for category listings.
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: u32,
    /// Print views as JSON instead of text.
    #[arg(long, global = true)]
    json: bool,
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Serve the view API over HTTP.
    Serve {
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
    Home {
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    Category {
        slug: String,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    Article {
        id: String,
    },
    Search {
        query: String,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    Videos,
    HumanRights {
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    Sidebar,
    /// List the known categories.
    Categories,
}

impl Cli {
    fn api_config(&self) -> un_core::Result<ApiConfig> {
        ApiConfig::new(&self.api_url)?
            .with_timeout(self.timeout.0)
            .with_page_size(self.page_size)
    }

    fn site_config(&self) -> SiteConfig {
        let site = SiteConfig::new(&self.site_url, &self.site_name)
            .with_twitter_handle(&self.twitter_handle);
        match &self.default_image {
            Some(image) => site.with_default_image(image),
            None => site,
        }
    }
}

fn emit<T: Serialize>(
    json: bool,
    view: &T,
    text: impl FnOnce(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(view)?);
    } else {
        println!("{}", text(view));
    }
    Ok(())
}

fn check(status: &ViewStatus) -> anyhow::Result<()> {
    if let ViewStatus::Failed { message } = status {
        bail!("{message}");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let config = cli.api_config().context("invalid API configuration")?;
    let site = cli.site_config();
    let page_size = config.page_size;
    info!("📰 Using news backend at {}", config.base_url());
    let api: Arc<dyn NewsApi> = Arc::new(HttpNewsClient::new(config)?);
    debug!("{:?}", cli.command);

    match cli.command {
        Commands::Serve { addr } => {
            un_web::serve(addr, AppState::new(api, site)).await?;
        }
        Commands::Home { page } => {
            let mut home = HomePage::new(api);
            home.open(page).await;
            home.unmount();
            let view = home.view(&site);
            emit(cli.json, &view, render::home)?;
            check(&view.feed.status)?;
        }
        Commands::Category { slug, page } => {
            let mut listing = CategoryPage::with_page_size(api, &slug, page_size);
            listing.open(page).await;
            let view = listing.view(&site);
            emit(cli.json, &view, render::category)?;
            check(&view.feed.status)?;
        }
        Commands::HumanRights { page } => {
            let mut listing = human_rights_page(api);
            listing.open(page).await;
            let view = listing.view(&site);
            emit(cli.json, &view, render::category)?;
            check(&view.feed.status)?;
        }
        Commands::Article { id } => {
            let mut article = ArticlePage::new(api, &id);
            article.load().await;
            let view = article.view(&site);
            match &view {
                ArticleView::Loaded(detail) => emit(cli.json, detail, |d| render::article(d))?,
                ArticleView::NotFound { message } | ArticleView::Failed { message } => {
                    bail!("{message}: {id}")
                }
                ArticleView::Loading => {}
            }
        }
        Commands::Search { query, page } => {
            let mut search = SearchPage::new(api, &query);
            if !search.has_query() {
                bail!("search query is empty");
            }
            search.open(page).await;
            emit(cli.json, &search.view(&site), render::search)?;
            if let Some(feed) = search.feed() {
                check(feed.status())?;
            }
        }
        Commands::Videos => {
            let mut videos = VideosPage::new(api);
            videos.load().await;
            let view = videos.view(&site);
            emit(cli.json, &view, |v| render::videos(&v.cards))?;
            check(&view.status)?;
        }
        Commands::Sidebar => {
            let mut sidebar = Sidebar::new(api);
            sidebar.load().await;
            emit(cli.json, &sidebar.view(), render::sidebar)?;
        }
        Commands::Categories => {
            emit(cli.json, &taxonomy::descriptors(), |d| render::categories(d))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_build_configs() {
        let cli = Cli::try_parse_from([
            "ummah",
            "--api-url",
            "https://news.example.org/api",
            "--site-url",
            "https://example.org/",
            "--timeout",
            "2s",
            "--page-size",
            "15",
            "category",
            "palestine",
            "--page",
            "2",
        ])
        .unwrap();
        let config = cli.api_config().unwrap();
        assert_eq!(config.page_size, 15);
        assert_eq!(config.timeout, std::time::Duration::from_secs(2));
        assert_eq!(cli.site_config().absolute("/x"), "https://example.org/x");
        assert!(matches!(cli.command, Commands::Category { page: 2, .. }));
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let cli = Cli::try_parse_from(["ummah", "--page-size", "0", "categories"]).unwrap();
        assert!(cli.api_config().is_err());
    }
}
