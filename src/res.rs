//! Shapes of the JSON returned by `action=query`. Absent keys decode to their
//! empty defaults; only presence is checked for markers like `missing`.

use std::collections::BTreeMap;

use serde::de::IgnoredAny;
use serde::Deserialize;
use serde_json::Value;

use crate::types::MwTimestamp;

#[derive(Deserialize, Debug, Default)]
pub struct ApiResponse {
    pub error: Option<ApiError>,
    pub warnings: Option<Value>,
    pub batchcomplete: Option<Value>,
    #[serde(rename = "continue")]
    pub cont: Option<Value>,
    #[serde(default)]
    pub query: QueryResponse,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub info: String,
}

#[derive(Deserialize, Debug, Default)]
pub struct QueryResponse {
    /// Keyed by the stringified page id; missing pages get negative keys.
    #[serde(default)]
    pub pages: BTreeMap<String, PageRecord>,
    #[serde(default)]
    pub search: Vec<SearchHit>,
    pub searchinfo: Option<SearchInfo>,
    #[serde(default)]
    pub redirects: Vec<TitleHint>,
    #[serde(default)]
    pub normalized: Vec<TitleHint>,
}

/// A `from`/`to` pair found in `redirects` and `normalized`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TitleHint {
    pub from: String,
    pub to: String,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct PageRecord {
    #[serde(default)]
    pub pageid: u64,
    #[serde(default)]
    pub ns: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub fullurl: String,
    #[serde(default)]
    pub canonicalurl: String,
    pub contentmodel: Option<String>,
    pub pagelanguage: Option<String>,
    pub touched: Option<String>,
    pub lastrevid: Option<u64>,
    pub length: Option<u64>,
    pub missing: Option<IgnoredAny>,
    pub pageprops: Option<PageProps>,
    pub extract: Option<String>,
    #[serde(default)]
    pub revisions: Vec<Revision>,
}

impl PageRecord {
    pub fn is_missing(&self) -> bool {
        self.missing.is_some()
    }

    pub fn is_disambiguation(&self) -> bool {
        self.pageprops
            .as_ref()
            .is_some_and(|p| p.disambiguation.is_some())
    }

    /// `(revid, parentid)` of the first revision, zero when there is none.
    pub fn revision_ids(&self) -> (u64, u64) {
        self.revisions
            .first()
            .map_or((0, 0), |r| (r.revid, r.parentid))
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct PageProps {
    pub disambiguation: Option<IgnoredAny>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Revision {
    #[serde(default)]
    pub revid: u64,
    #[serde(default)]
    pub parentid: u64,
    /// Raw body, only present when `rvprop=content` was requested.
    #[serde(rename = "*", default)]
    pub content: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    #[serde(default)]
    pub ns: i64,
    pub title: String,
    #[serde(default)]
    pub pageid: u64,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub wordcount: u64,
    #[serde(default)]
    pub snippet: String,
    pub timestamp: Option<MwTimestamp>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchInfo {
    #[serde(default)]
    pub totalhits: u64,
}
