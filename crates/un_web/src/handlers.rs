use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use un_core::taxonomy;
use un_views::chrome::{chrome, Sidebar};
use un_views::pages::{
    human_rights_page, ArticlePage, ArticleView, CategoryPage, HomePage, SearchPage, VideosPage,
};

use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
}

impl PageParams {
    fn page(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub page: Option<u32>,
}

/// A failed backend fetch is reported as 502 with the view as body, so the
/// client can still render its retry state.
fn respond<T: Serialize>(failed: bool, view: T) -> Response {
    let code = if failed {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::OK
    };
    (code, Json(view)).into_response()
}

pub async fn home(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> Response {
    let mut page = HomePage::new(Arc::clone(&state.api));
    page.open(params.page()).await;
    let view = page.view(&state.site);
    page.unmount();
    respond(view.feed.status.is_failed(), view)
}

pub async fn category(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    Query(params): Query<PageParams>,
) -> Response {
    let mut page = CategoryPage::new(Arc::clone(&state.api), &slug);
    page.open(params.page()).await;
    let view = page.view(&state.site);
    respond(view.feed.status.is_failed(), view)
}

pub async fn human_rights(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> Response {
    let mut page = human_rights_page(Arc::clone(&state.api));
    page.open(params.page()).await;
    let view = page.view(&state.site);
    respond(view.feed.status.is_failed(), view)
}

pub async fn article(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    let mut page = ArticlePage::new(Arc::clone(&state.api), &id);
    page.load().await;
    let view = page.view(&state.site);
    let code = match &view {
        ArticleView::NotFound { .. } => StatusCode::NOT_FOUND,
        ArticleView::Failed { .. } => StatusCode::BAD_GATEWAY,
        ArticleView::Loading | ArticleView::Loaded(_) => StatusCode::OK,
    };
    (code, Json(view)).into_response()
}

pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Response {
    let mut page = SearchPage::new(Arc::clone(&state.api), params.q.as_deref().unwrap_or_default());
    page.open(params.page.unwrap_or(1)).await;
    let failed = page.feed().is_some_and(|f| f.status().is_failed());
    respond(failed, page.view(&state.site))
}

pub async fn videos(State(state): State<Arc<AppState>>) -> Response {
    let mut page = VideosPage::new(Arc::clone(&state.api));
    page.load().await;
    let view = page.view(&state.site);
    respond(view.status.is_failed(), view)
}

pub async fn sidebar(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut sidebar = Sidebar::new(Arc::clone(&state.api));
    sidebar.load().await;
    Json(sidebar.view())
}

pub async fn site_chrome(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(chrome(&state.site))
}

pub async fn categories() -> impl IntoResponse {
    Json(taxonomy::descriptors())
}
