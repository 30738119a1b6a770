//! View models and page controllers for the news front end.
//!
//! Controllers own their fetch state and expose a serializable view; nothing
//! here renders markup.

pub mod card;
pub mod carousel;
pub mod chrome;
pub mod featured;
pub mod feed;
pub mod pages;
pub mod site;
pub mod status;

pub use card::{render_card, render_cards, Badge, CardVariant, CardView};
pub use carousel::{Carousel, CarouselView};
pub use feed::{Feed, FeedController, FeedView, PageRequest};
pub use site::SiteConfig;
pub use status::ViewStatus;

pub mod prelude {
    pub use crate::chrome::{chrome, Sidebar};
    pub use crate::pages::{
        human_rights_page, ArticlePage, CategoryPage, HomePage, SearchPage, VideosPage,
    };
    pub use crate::{CardVariant, PageRequest, SiteConfig, ViewStatus};
}
