use std::borrow::Cow;
use std::time::Duration;

use reqwest::header::HeaderValue;
use reqwest::Url;
use tracing::debug;

use crate::{Client, Error, Result, UA};

pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Configuration for a [`Client`]. Everything is validated in
/// [`build`](Self::build); the resulting client cannot be reconfigured.
#[derive(Clone, Debug)]
pub struct ClientBuilder {
    language: String,
    api_url: Option<String>,
    user_agent: Option<Cow<'static, str>>,
    timeout: Option<Duration>,
    max_redirects: usize,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_owned(),
            api_url: None,
            user_agent: None,
            timeout: Some(DEFAULT_TIMEOUT),
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }

    /// Language code used as the subdomain, e.g. `en` or `zh`.
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Use this `api.php` instead of `https://<language>.wikipedia.org/w/api.php`.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    pub fn user_agent(mut self, ua: impl Into<Cow<'static, str>>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Per-request timeout. `None` waits forever.
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// How many redirect hops a single lookup may follow.
    pub fn max_redirects(mut self, max_redirects: usize) -> Self {
        self.max_redirects = max_redirects;
        self
    }

    pub fn build(self) -> Result<Client> {
        if !is_valid_language(&self.language) {
            return Err(Error::InvalidLanguage(self.language));
        }

        let url: Url = match &self.api_url {
            Some(url) => url.parse()?,
            None => format!("https://{}.wikipedia.org/w/api.php", self.language).parse()?,
        };

        let ua = HeaderValue::from_str(self.user_agent.as_deref().unwrap_or(UA))?;

        let mut client = reqwest::Client::builder().user_agent(ua);
        if let Some(timeout) = self.timeout {
            client = client.timeout(timeout);
        }

        debug!("built client for {url}");

        Ok(Client {
            client: client.build()?,
            url,
            language: self.language,
            max_redirects: self.max_redirects,
        })
    }
}

fn is_valid_language(language: &str) -> bool {
    !language.is_empty()
        && !language.starts_with('-')
        && !language.ends_with('-')
        && language
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
}
