pub mod article;
pub mod category;
pub mod home;
pub mod human_rights;
pub mod search;
pub mod videos;

pub use article::{ArticleBody, ArticleDetail, ArticlePage, ArticleState, ArticleView, VideoEmbed};
pub use category::{CategoryPage, CategoryView};
pub use home::{HomePage, HomeView, TickerItem};
pub use human_rights::{human_rights_page, HUMAN_RIGHTS_SLUG};
pub use search::{SearchPage, SearchView};
pub use videos::{VideosPage, VideosView};
