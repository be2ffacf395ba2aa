pub mod newsapi;
pub mod normalize;

pub use newsapi::NewsApiSource;
pub use normalize::{normalize_article, RawArticle, RawSource};

pub mod prelude {
    pub use super::newsapi::NewsApiSource;
    pub use sm_core::{Article, NewsSource, Result, Error};
}
