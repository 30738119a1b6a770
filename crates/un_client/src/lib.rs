pub mod config;
pub mod envelope;
pub mod http;
pub mod memory;

pub use config::ApiConfig;
pub use http::HttpNewsClient;
pub use memory::MemoryNewsApi;

pub mod prelude {
    pub use super::{ApiConfig, HttpNewsClient, MemoryNewsApi};
    pub use un_core::{Article, Error, NewsApi, Result};
}
