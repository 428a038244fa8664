use httpmock::Method::GET;
use newsapi_rs::{ALL, NewsError, SourceFields, SourcesInfo};
use serde_json::json;

use crate::common::{client_for, fixture, setup_server};

fn mock_all_sources(server: &httpmock::MockServer) -> httpmock::Mock<'_> {
    server.mock(|when, then| {
        when.method(GET).path("/sources");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("sources", "all"));
    })
}

#[test]
fn single_field_returns_flat_values() {
    let server = setup_server();
    let mock = mock_all_sources(&server);

    let client = client_for(&server);
    let info = client.sources_info("id", ALL, ALL, ALL).unwrap();

    mock.assert();
    assert_eq!(
        info,
        SourcesInfo::Values(vec![
            json!("abc-news"),
            json!("bbc-news"),
            json!("bloomberg"),
            json!("le-monde"),
        ])
    );
}

#[test]
fn many_fields_return_restricted_maps_in_order() {
    let server = setup_server();
    let mock = mock_all_sources(&server);

    let client = client_for(&server);
    let records = client
        .sources_info(["id", "name"], ALL, ALL, ALL)
        .unwrap()
        .into_records()
        .unwrap();

    mock.assert();
    assert_eq!(records.len(), 4);
    for r in &records {
        assert_eq!(r.len(), 2);
        assert!(r.contains_key("id") && r.contains_key("name"));
    }
    assert_eq!(records[0]["name"], json!("ABC News"));
    assert_eq!(records[3]["id"], json!("le-monde"));
}

#[test]
fn builder_projection_matches_client_projection() {
    let server = setup_server();
    let mock = mock_all_sources(&server);

    let client = client_for(&server);
    let via_builder = client
        .sources_builder()
        .fetch_info(SourceFields::Many(vec!["url".into()]))
        .unwrap();

    mock.assert();
    assert_eq!(via_builder.len(), 4);
    assert!(via_builder.into_values().is_none());
}

#[test]
fn unknown_field_is_reported() {
    let server = setup_server();
    let mock = mock_all_sources(&server);

    let client = client_for(&server);
    let err = client.sources_info(["id", "logo"], ALL, ALL, ALL).unwrap_err();

    mock.assert();
    match err {
        NewsError::MissingField { field } => assert_eq!(field, "logo"),
        other => panic!("expected MissingField, got {other:?}"),
    }
}

#[test]
fn records_keep_requested_field_order() {
    let server = setup_server();
    let mock = mock_all_sources(&server);

    let client = client_for(&server);
    let records = client
        .sources_info(["name", "country", "id"], ALL, ALL, ALL)
        .unwrap()
        .into_records()
        .unwrap();

    mock.assert();
    for r in &records {
        let keys: Vec<_> = r.keys().map(String::as_str).collect();
        assert_eq!(keys, ["name", "country", "id"]);
    }
    assert_eq!(
        serde_json::to_string(&records[1]).unwrap(),
        r#"{"name":"BBC News","country":"gb","id":"bbc-news"}"#
    );
}
