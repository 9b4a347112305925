//! Resolve Wikipedia pages through the MediaWiki `action=query` API.
//!
//! A [`Client`] turns a page id or title into a [`Page`], following redirects
//! when asked to and expanding disambiguation pages into their candidate
//! titles. [`Client::page_content`] adds the page's extract, and
//! [`Client::search`] runs a plain full-text search.
//!
//! ```no_run
//! # async fn run() -> wikipedia::Result<()> {
//! use wikipedia::{Client, PageOptions, SearchOptions};
//!
//! let client = Client::new()?;
//! let page = client
//!     .get_page_by_title("Mercury", PageOptions::follow_redirects())
//!     .await?;
//! for candidate in &page.disambiguation {
//!     println!("{candidate}");
//! }
//! let titles = client.search_titles("Barack Obama", SearchOptions::default()).await?;
//! println!("{titles:?}");
//! # Ok(())
//! # }
//! ```

use reqwest::header::InvalidHeaderValue;
use reqwest::{StatusCode, Url};

pub mod api;
mod boring_impls;
pub mod builder;
mod disambiguation;
pub mod page;
pub mod req;
pub mod res;
pub mod search;
pub mod types;
pub mod url;
pub mod util;

pub use builder::ClientBuilder;
pub use page::{Page, PageContent, PageOptions};
pub use req::PageSpec;
pub use res::SearchHit;
pub use search::{SearchOptions, SearchResults};

/// Handle to one wiki's `api.php`. Cheap to clone; clones share the
/// connection pool and nothing else.
#[derive(Clone, Debug)]
pub struct Client {
    client: reqwest::Client,
    url: Url,
    language: String,
    max_redirects: usize,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error("HTTP request failed with status {0}")]
    HttpStatus(StatusCode),
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("MediaWiki API returned error {code}: {info}")]
    MediaWiki { code: String, info: String },
    #[error("search query is empty")]
    EmptyQuery,
    #[error("page not found")]
    NotFound,
    #[error("page is a redirect, enable redirects in PageOptions to follow it")]
    RedirectNotAllowed,
    #[error("unexpected normalize response")]
    UnexpectedNormalize,
    #[error("unexpected redirect response")]
    UnexpectedRedirect,
    #[error("gave up after following {0} redirects")]
    TooManyRedirects(usize),
    #[error("disambiguation page not found")]
    DisambiguationNotFound,
    #[error(transparent)]
    InvalidUrl(#[from] ::url::ParseError),
    #[error("invalid language code {0:?}")]
    InvalidLanguage(String),
    #[error(transparent)]
    InvalidHeaderValue(#[from] InvalidHeaderValue),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

const UA: &str = concat!(
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION"),
    " (https://github.com/fee1-dead/wiki)"
);

impl Client {
    /// English Wikipedia with the default configuration.
    pub fn new() -> Result<Self> {
        ClientBuilder::new().build()
    }

    pub fn with_language(language: &str) -> Result<Self> {
        ClientBuilder::new().language(language).build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn api_url(&self) -> &Url {
        &self.url
    }

    pub fn max_redirects(&self) -> usize {
        self.max_redirects
    }
}

#[cfg(test)]
mod tests;
