use httpmock::Method::GET;
use newsapi_rs::ALL;

use crate::common::{API_KEY, client_for, fixture, setup_server};

#[test]
fn offline_sources_uses_recorded_fixture() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/sources")
            .query_param("apikey", API_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("sources", "all"));
    });

    let client = client_for(&server);
    let sources = client.sources(ALL, ALL, ALL).unwrap();

    mock.assert();

    assert_eq!(sources.len(), 4);
    let ids: Vec<_> = sources.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["abc-news", "bbc-news", "bloomberg", "le-monde"]);
    assert_eq!(sources[1].country.as_deref(), Some("gb"));
    assert_eq!(sources[3].language.as_deref(), Some("fr"));
}

#[test]
fn offline_sources_builder_forwards_filters() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/sources")
            .query_param("category", "business")
            .query_param("language", "en")
            .query_param("country", "us")
            .query_param("apikey", API_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("sources", "category_business"));
    });

    let client = client_for(&server);
    let sources = client
        .sources_builder()
        .category("business")
        .language("en")
        .country("us")
        .fetch()
        .unwrap();

    mock.assert();
    assert_eq!(sources.len(), 2);
    assert!(sources.iter().all(|s| s.category.as_deref() == Some("business")));
}

#[test]
fn raw_sources_keep_every_field() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/sources");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("sources", "all"));
    });

    let client = client_for(&server);
    let raw = client.sources_raw(ALL, ALL, ALL).unwrap();

    mock.assert();
    assert_eq!(raw.len(), 4);
    for record in &raw {
        for key in ["id", "name", "description", "url", "category", "language", "country"] {
            assert!(record.contains_key(key), "missing {key}");
        }
    }
}

#[test]
fn missing_sources_field_is_a_data_error() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/sources");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"status":"ok"}"#);
    });

    let client = client_for(&server);
    let err = client.sources(ALL, ALL, ALL).unwrap_err();

    mock.assert();
    assert!(matches!(err, newsapi_rs::NewsError::Data(_)), "got {err:?}");
}
