use std::sync::Arc;
use un_core::NewsApi;
use un_views::SiteConfig;

pub struct AppState {
    pub api: Arc<dyn NewsApi>,
    pub site: SiteConfig,
}

impl AppState {
    pub fn new(api: Arc<dyn NewsApi>, site: SiteConfig) -> Self {
        Self { api, site }
    }
}
