use httpmock::Method::GET;
use newsapi_rs::{ALL, NewsError};

use crate::common::{client_for, setup_server};

#[test]
fn headlines_reject_unknown_country_and_category() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/top-headlines");
        then.status(200).body(r#"{"status":"ok","totalResults":0,"articles":[]}"#);
    });

    let client = client_for(&server);

    let err = client.top_headlines("zz", ALL, ALL, None, 20, 1).unwrap_err();
    assert!(matches!(err, NewsError::Validation { param: "country", .. }), "got {err:?}");

    let err = client
        .headlines()
        .country("us")
        .category("sports")
        .fetch()
        .unwrap_err();
    assert!(matches!(err, NewsError::Validation { param: "category", .. }), "got {err:?}");

    mock.assert_calls(0);
}

#[test]
fn sources_filter_is_not_validated() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/top-headlines")
            .query_param("sources", "some-unlisted-source");
        then.status(200).body(r#"{"status":"ok","totalResults":0,"articles":[]}"#);
    });

    let client = client_for(&server);
    let page = client
        .headlines()
        .sources("some-unlisted-source")
        .fetch()
        .unwrap();

    mock.assert();
    assert!(page.articles.is_empty());
    assert_eq!(page.total_results, 0);
}
