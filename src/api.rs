use std::future::Future;
use std::pin::Pin;

use reqwest::Url;
use tracing::{debug, trace, warn};

use crate::req::Main;
use crate::res::{ApiError, ApiResponse, QueryResponse};
use crate::url::WriteUrlParams;
use crate::{Client, Error, Result};

pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

pub fn mkurl(mut url: Url, m: &Main) -> Url {
    let mut q = crate::url::Simple::default();
    if let Err(e) = m.ser(&mut q) {
        match e {}
    }
    url.set_query(Some(&q.0));
    url
}

pub trait RequestBuilderExt: Sized {
    /// Sends the request and decodes the envelope. A non-2xx status, a body
    /// that is not JSON and an `error` object each map to their own [`Error`].
    fn send_and_report_err(self) -> BoxFuture<Result<ApiResponse>>;
}

impl RequestBuilderExt for reqwest::RequestBuilder {
    fn send_and_report_err(self) -> BoxFuture<Result<ApiResponse>> {
        Box::pin(async move {
            let r = self.send().await?;
            let status = r.status();
            if !status.is_success() {
                return Err(Error::HttpStatus(status));
            }
            let body = r.text().await?;
            let mut res: ApiResponse = serde_json::from_str(&body)?;
            if let Some(ApiError { code, info }) = res.error.take() {
                return Err(Error::MediaWiki { code, info });
            }
            Ok(res)
        })
    }
}

impl Client {
    pub fn mkurl(&self, m: &Main) -> Url {
        mkurl(self.url.clone(), m)
    }

    /// Issues a single GET for `m` and hands back the `query` section.
    pub async fn query(&self, m: &Main) -> Result<QueryResponse> {
        let url = self.mkurl(m);
        debug!("GET {url}");
        let res = self.client.get(url).send_and_report_err().await?;
        if let Some(warnings) = &res.warnings {
            warn!("API warnings: {warnings}");
        }
        trace!(
            pages = res.query.pages.len(),
            hits = res.query.search.len(),
            redirects = res.query.redirects.len(),
            "decoded response"
        );
        Ok(res.query)
    }
}
