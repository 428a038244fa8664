use httpmock::Method::GET;
use newsapi_rs::{ALL, NewsError};

use crate::common::{API_KEY, client_for, fixture, setup_server};

#[test]
fn non_200_maps_to_api_error_with_code_and_message() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/sources");
        then.status(401)
            .header("content-type", "application/json")
            .body(fixture("error", "apiKeyInvalid"));
    });

    let client = client_for(&server);
    let err = client.sources(ALL, ALL, ALL).unwrap_err();
    mock.assert();

    match err {
        NewsError::Api {
            status,
            code,
            message,
            url,
        } => {
            assert_eq!(status, 401);
            assert_eq!(code, "apiKeyInvalid");
            assert_eq!(message, "bad key");
            assert!(url.contains("/sources"));
            assert!(!url.contains(API_KEY), "key leaked into {url}");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[test]
fn server_error_is_not_retried() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/top-headlines");
        then.status(500)
            .header("content-type", "application/json")
            .body(r#"{"status":"error","code":"unexpectedError","message":"boom"}"#);
    });

    let client = client_for(&server);
    let err = client.top_headlines("us", ALL, ALL, None, 20, 1).unwrap_err();

    mock.assert_calls(1);
    assert!(matches!(err, NewsError::Api { status: 500, .. }), "got {err:?}");
}

#[test]
fn non_json_body_is_a_parse_error_whatever_the_status() {
    let server = setup_server();

    let ok_mock = server.mock(|when, then| {
        when.method(GET).path("/ok-but-html");
        then.status(200).body("<html>nope</html>");
    });
    let err_mock = server.mock(|when, then| {
        when.method(GET).path("/broken");
        then.status(502).body("Bad Gateway");
    });

    let client = client_for(&server);

    let err = client
        .request("ok-but-html", Vec::<(&str, Option<&str>)>::new())
        .unwrap_err();
    assert!(matches!(err, NewsError::Json(_)), "got {err:?}");

    let err = client
        .request("broken", Vec::<(&str, Option<&str>)>::new())
        .unwrap_err();
    assert!(matches!(err, NewsError::Json(_)), "got {err:?}");

    ok_mock.assert();
    err_mock.assert();
}

#[test]
fn error_body_without_code_still_maps_to_api_error() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/sources");
        then.status(429).body("{}");
    });

    let client = client_for(&server);
    let err = client.sources(ALL, ALL, ALL).unwrap_err();
    mock.assert();

    match err {
        NewsError::Api {
            status,
            code,
            message,
            ..
        } => {
            assert_eq!(status, 429);
            assert!(code.is_empty());
            assert!(message.is_empty());
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}
