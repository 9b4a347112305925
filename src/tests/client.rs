use std::time::Duration;

use mockito::Server;
use serde_json::json;

use super::{params, API_PATH};
use crate::builder::{DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT};
use crate::{Client, ClientBuilder, Error, PageOptions};

#[test]
fn defaults_to_english_wikipedia() {
    let client = Client::new().unwrap();
    assert_eq!(client.language(), "en");
    assert_eq!(client.api_url().as_str(), "https://en.wikipedia.org/w/api.php");
    assert_eq!(client.max_redirects(), DEFAULT_MAX_REDIRECTS);
    assert_eq!(DEFAULT_TIMEOUT, Duration::from_secs(30));
}

#[test]
fn language_picks_the_subdomain() {
    let client = Client::with_language("zh").unwrap();
    assert_eq!(client.language(), "zh");
    assert_eq!(client.api_url().as_str(), "https://zh.wikipedia.org/w/api.php");

    let client = Client::builder().language("zh-yue").build().unwrap();
    assert_eq!(client.api_url().host_str(), Some("zh-yue.wikipedia.org"));
}

#[test]
fn invalid_languages_are_rejected() {
    for language in ["", "en.evil.com/", "-en", "en-", "e n"] {
        let err = Client::with_language(language).unwrap_err();
        assert!(
            matches!(&err, Error::InvalidLanguage(l) if l == language),
            "{language:?}: {err:?}"
        );
    }
}

#[test]
fn invalid_configuration_is_rejected() {
    let err = ClientBuilder::new().api_url("not a url").build().unwrap_err();
    assert!(matches!(err, Error::InvalidUrl(_)), "{err:?}");

    let err = ClientBuilder::new()
        .user_agent("bad\nagent")
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::InvalidHeaderValue(_)), "{err:?}");
}

#[tokio::test]
async fn custom_user_agent_and_limits_are_used() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", API_PATH)
        .match_header("user-agent", "lookup-test/1.0")
        .match_query(params(&[("titles", "Hop"), ("prop", "info|pageprops")]))
        .with_body(
            json!({
                "query": {
                    "redirects": [{ "from": "Start", "to": "Hop" }],
                    "pages": { "5": { "pageid": 5, "ns": 0, "title": "Hop" } }
                }
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let client = Client::builder()
        .api_url(format!("{}{API_PATH}", server.url()))
        .user_agent("lookup-test/1.0")
        .timeout(Some(Duration::from_secs(5)))
        .max_redirects(0)
        .build()
        .unwrap();
    assert_eq!(client.max_redirects(), 0);

    let err = client
        .get_page_by_title("Hop", PageOptions::follow_redirects())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::TooManyRedirects(0)), "{err:?}");
    mock.assert_async().await;
}
