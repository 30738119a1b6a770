pub mod api;
pub mod error;
pub mod pagination;
pub mod taxonomy;
pub mod text;
pub mod types;

pub use api::NewsApi;
pub use error::{Error, Result};
pub use pagination::{compute_window, PageState, PageWindow};
pub use taxonomy::CategoryDescriptor;
pub use types::{
    Article, CategoryCount, ListQuery, PageResult, SiteStats, Source, SourceRef, SourceStats,
};

pub mod prelude {
    pub use crate::{Article, Error, NewsApi, PageResult, Result};
}
