use mockito::{Matcher, ServerGuard};

use crate::Client;

mod client;

const API_PATH: &str = "/w/api.php";

fn test_client(server: &ServerGuard) -> Client {
    Client::builder()
        .api_url(format!("{}{API_PATH}", server.url()))
        .build()
        .unwrap()
}

/// Matches a query string containing every one of `pairs`.
fn params(pairs: &[(&str, &str)]) -> Matcher {
    Matcher::AllOf(
        pairs
            .iter()
            .map(|(k, v)| Matcher::UrlEncoded((*k).to_owned(), (*v).to_owned()))
            .collect(),
    )
}

fn page_info_by_title(title: &str) -> Matcher {
    params(&[
        ("action", "query"),
        ("prop", "info|pageprops"),
        ("inprop", "url"),
        ("ppprop", "disambiguation"),
        ("titles", title),
        ("format", "json"),
    ])
}
