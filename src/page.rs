//! Page and content resolution.
//!
//! A lookup is classified as missing, a redirect, a disambiguation page or a
//! plain page. Redirects are followed hop by hop with a fresh request each
//! time, up to [`Client::max_redirects`]. Disambiguation pages cost one more
//! request for their body, from which the candidate titles are extracted.

use tracing::{debug, instrument};

use crate::disambiguation;
use crate::req::{Main, PageSpec};
use crate::res::{PageRecord, QueryResponse};
use crate::{Client, Error, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageOptions {
    /// Follow redirects instead of failing with [`Error::RedirectNotAllowed`].
    pub redirects: bool,
}

impl PageOptions {
    pub fn follow_redirects() -> Self {
        Self { redirects: true }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Page {
    pub id: u64,
    pub title: String,
    pub url: String,
    pub revision_id: u64,
    pub parent_id: u64,
    /// Candidate titles, only filled in for disambiguation pages.
    pub disambiguation: Vec<String>,
}

impl Page {
    pub fn is_disambiguation(&self) -> bool {
        !self.disambiguation.is_empty()
    }
}

impl From<&PageRecord> for Page {
    fn from(record: &PageRecord) -> Self {
        let (revision_id, parent_id) = record.revision_ids();
        Self {
            id: record.pageid,
            title: record.title.clone(),
            url: record.fullurl.clone(),
            revision_id,
            parent_id,
            disambiguation: Vec::new(),
        }
    }
}

/// A page together with its extract.
///
/// The revision ids come from the content lookup and may be newer than the
/// ones on `page`; the two are left as MediaWiki reported them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageContent {
    pub page: Page,
    pub content: String,
    pub revision_id: u64,
    pub parent_id: u64,
}

#[derive(Debug)]
enum Step {
    Page(Page),
    Disambiguation(PageRecord),
    Redirect(String),
}

/// Decides what a page-info lookup for `requested` resolved to.
fn inspect(
    query: QueryResponse,
    requested: &PageSpec,
    follow_redirects: bool,
) -> Result<Step> {
    let QueryResponse {
        pages,
        redirects,
        normalized,
        ..
    } = query;

    let record = pages.into_values().next().ok_or(Error::NotFound)?;
    if record.is_missing() {
        return Err(Error::NotFound);
    }

    if let Some(redirect) = redirects.into_iter().next() {
        if !follow_redirects {
            return Err(Error::RedirectNotAllowed);
        }

        // Id lookups have no requested title to check the hint against.
        let source = match requested {
            PageSpec::Title(title) => title.as_str(),
            PageSpec::Id(_) => record.title.as_str(),
        };

        let mut title = record.title.as_str();
        if let Some(normalize) = normalized.first() {
            if normalize.from != source {
                return Err(Error::UnexpectedNormalize);
            }
            title = &normalize.to;
        }

        if redirect.from == title {
            return Err(Error::UnexpectedRedirect);
        }

        return Ok(Step::Redirect(redirect.to));
    }

    if record.is_disambiguation() {
        return Ok(Step::Disambiguation(record));
    }

    Ok(Step::Page(Page::from(&record)))
}

impl Client {
    /// Resolves a page by id.
    pub async fn get_page(&self, id: u64, options: PageOptions) -> Result<Page> {
        self.get_page_by(PageSpec::Id(id), options).await
    }

    /// Resolves a page by title.
    pub async fn get_page_by_title(&self, title: &str, options: PageOptions) -> Result<Page> {
        self.get_page_by(PageSpec::Title(title.to_owned()), options).await
    }

    #[instrument(skip(self, spec), fields(spec = %spec))]
    pub async fn get_page_by(&self, spec: PageSpec, options: PageOptions) -> Result<Page> {
        let mut spec = spec;
        let mut follow_redirects = options.redirects;
        let mut hops = 0;

        loop {
            let query = self.query(&Main::page_info(spec.clone())).await?;
            match inspect(query, &spec, follow_redirects)? {
                Step::Page(page) => return Ok(page),
                Step::Disambiguation(record) => return self.disambiguate(record).await,
                Step::Redirect(target) => {
                    if hops == self.max_redirects {
                        return Err(Error::TooManyRedirects(hops));
                    }
                    hops += 1;
                    spec = PageSpec::Title(target);
                    debug!(hops, "following redirect to {spec}");
                    follow_redirects = true;
                }
            }
        }
    }

    async fn disambiguate(&self, record: PageRecord) -> Result<Page> {
        debug!("expanding disambiguation page {:?}", record.title);
        let query = self
            .query(&Main::disambiguation_content(record.title.as_str()))
            .await?;

        let markup = query
            .pages
            .get(&record.pageid.to_string())
            .and_then(|p| p.revisions.first())
            .map(|r| r.content.as_str())
            .filter(|markup| !markup.is_empty())
            .ok_or(Error::DisambiguationNotFound)?;

        Ok(Page {
            disambiguation: disambiguation::candidates(markup),
            ..Page::from(&record)
        })
    }

    /// Fetches the extract and latest revision ids of an already resolved page.
    #[instrument(skip(self, page), fields(id = page.id, title = %page.title))]
    pub async fn page_content(&self, page: Page) -> Result<PageContent> {
        let mut query = self.query(&Main::page_content(page.title.as_str())).await?;

        let record = query
            .pages
            .remove(&page.id.to_string())
            .ok_or(Error::NotFound)?;
        let (revision_id, parent_id) = record.revision_ids();

        Ok(PageContent {
            page,
            content: record.extract.unwrap_or_default(),
            revision_id,
            parent_id,
        })
    }

    pub async fn get_page_content(&self, id: u64, options: PageOptions) -> Result<PageContent> {
        let page = self.get_page(id, options).await?;
        self.page_content(page).await
    }

    pub async fn get_page_content_by_title(
        &self,
        title: &str,
        options: PageOptions,
    ) -> Result<PageContent> {
        let page = self.get_page_by_title(title, options).await?;
        self.page_content(page).await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::{inspect, Step};
    use crate::req::PageSpec;
    use crate::res::{PageRecord, QueryResponse, TitleHint};
    use crate::Error;

    fn record(id: u64, title: &str) -> PageRecord {
        PageRecord {
            pageid: id,
            title: title.to_owned(),
            fullurl: format!("https://en.wikipedia.org/wiki/{}", title.replace(' ', "_")),
            ..Default::default()
        }
    }

    fn response(record: PageRecord) -> QueryResponse {
        QueryResponse {
            pages: BTreeMap::from([(record.pageid.to_string(), record)]),
            ..Default::default()
        }
    }

    fn title(title: &str) -> PageSpec {
        PageSpec::Title(title.to_owned())
    }

    fn hint(from: &str, to: &str) -> TitleHint {
        TitleHint {
            from: from.to_owned(),
            to: to.to_owned(),
        }
    }

    #[test]
    fn empty_page_map_is_not_found() {
        let res = inspect(QueryResponse::default(), &PageSpec::Id(1), true);
        assert!(matches!(res, Err(Error::NotFound)));
    }

    #[test]
    fn redirect_needs_opt_in() {
        let mut query = response(record(2, "Target"));
        query.redirects.push(hint("Source", "Target"));
        assert!(matches!(
            inspect(query, &title("Source"), false),
            Err(Error::RedirectNotAllowed)
        ));
    }

    #[test]
    fn normalized_request_is_redirected() {
        let mut query = response(record(2, "Target"));
        query.normalized.push(hint("source_page", "Source page"));
        query.redirects.push(hint("Source", "Target"));
        match inspect(query, &title("source_page"), true) {
            Ok(Step::Redirect(to)) => assert_eq!(to, "Target"),
            other => panic!("expected a redirect, got {other:?}"),
        }

        let mut query = response(record(2, "Target"));
        query.normalized.push(hint("source_page", "Source page"));
        query.redirects.push(hint("Source page", "Target"));
        assert!(matches!(
            inspect(query, &title("source_page"), true),
            Err(Error::UnexpectedRedirect)
        ));
    }

    #[test]
    fn redirect_from_itself_is_rejected() {
        let mut query = response(record(2, "Loop"));
        query.redirects.push(hint("Loop", "Elsewhere"));
        assert!(matches!(
            inspect(query, &title("Loop"), true),
            Err(Error::UnexpectedRedirect)
        ));
    }

    #[test]
    fn normalize_must_match_requested_title() {
        let mut query = response(record(2, "Target"));
        query.normalized.push(hint("Target", "Target"));
        query.redirects.push(hint("Source", "Target"));
        assert!(matches!(
            inspect(query, &title("Source"), true),
            Err(Error::UnexpectedNormalize)
        ));
    }

    #[test]
    fn id_lookups_check_normalize_against_the_record() {
        let mut query = response(record(2, "Target"));
        query.normalized.push(hint("Target", "Target"));
        query.redirects.push(hint("Source", "Target"));
        match inspect(query, &PageSpec::Id(2), true) {
            Ok(Step::Redirect(to)) => assert_eq!(to, "Target"),
            other => panic!("expected a redirect, got {other:?}"),
        }

        let mut query = response(record(2, "Target"));
        query.normalized.push(hint("Source", "Source"));
        query.redirects.push(hint("Source", "Target"));
        assert!(matches!(
            inspect(query, &PageSpec::Id(2), true),
            Err(Error::UnexpectedNormalize)
        ));
    }

    #[test]
    fn plain_page_uses_first_revision() {
        let mut rec = record(7, "Plain");
        rec.revisions = vec![
            crate::res::Revision {
                revid: 20,
                parentid: 19,
                content: String::new(),
            },
            crate::res::Revision {
                revid: 10,
                parentid: 9,
                content: String::new(),
            },
        ];
        match inspect(response(rec), &PageSpec::Id(7), false) {
            Ok(Step::Page(page)) => {
                assert_eq!(page.id, 7);
                assert_eq!((page.revision_id, page.parent_id), (20, 19));
                assert!(!page.is_disambiguation());
            }
            other => panic!("expected a page, got {other:?}"),
        }
    }
}
