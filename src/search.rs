use tracing::instrument;

use crate::req::Main;
use crate::res::SearchHit;
use crate::{Client, Error, Result};

pub const DEFAULT_LIMIT: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    /// Maximum number of hits to return.
    pub limit: u32,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
        }
    }
}

impl SearchOptions {
    pub fn limit(limit: u32) -> Self {
        Self { limit }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResults {
    pub hits: Vec<SearchHit>,
    /// `searchinfo.totalhits`, when the wiki reports it.
    pub total_hits: Option<u64>,
}

impl Client {
    /// Full-text search. Only the first page of results is fetched.
    #[instrument(skip(self))]
    pub async fn search_with_info(
        &self,
        query: &str,
        options: SearchOptions,
    ) -> Result<SearchResults> {
        if query.is_empty() {
            return Err(Error::EmptyQuery);
        }

        let res = self.query(&Main::search(query, options.limit)).await?;
        Ok(SearchResults {
            hits: res.search,
            total_hits: res.searchinfo.map(|info| info.totalhits),
        })
    }

    pub async fn search(&self, query: &str, options: SearchOptions) -> Result<Vec<SearchHit>> {
        Ok(self.search_with_info(query, options).await?.hits)
    }

    pub async fn search_titles(&self, query: &str, options: SearchOptions) -> Result<Vec<String>> {
        let hits = self.search(query, options).await?;
        Ok(hits.into_iter().map(|hit| hit.title).collect())
    }
}
