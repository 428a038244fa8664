use httpmock::Method::GET;
use newsapi_rs::ALL;

use crate::common::{API_KEY, client_for, fixture, setup_server};

#[test]
fn offline_headlines_uses_recorded_fixture() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/top-headlines")
            .query_param("country", "us")
            .query_param("pageSize", "20")
            .query_param("page", "1")
            .query_param("apikey", API_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("top-headlines", "country_us"));
    });

    let client = client_for(&server);
    let page = client.top_headlines("us", ALL, ALL, None, 20, 1).unwrap();

    mock.assert();

    assert_eq!(page.status, "ok");
    assert_eq!(page.total_results, 34);
    assert_eq!(page.articles.len(), 2);

    let first = &page.articles[0];
    assert_eq!(first.source.id.as_deref(), Some("bloomberg"));
    assert_eq!(first.author.as_deref(), Some("Jane Doe"));
    assert!(first.published_at.is_some());

    let second = &page.articles[1];
    assert_eq!(second.source.id, None);
    assert_eq!(second.source.name, "Example Daily");
    assert_eq!(second.content, None);
}

#[test]
fn offline_headlines_builder_configures_request() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/top-headlines")
            .query_param("category", "business")
            .query_param("sources", "bloomberg,abc-news")
            .query_param("q", "inflation")
            .query_param("pageSize", "5")
            .query_param("page", "3");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("top-headlines", "country_us"));
    });

    let client = client_for(&server);
    let page = client
        .headlines()
        .category("business")
        .sources("bloomberg,abc-news")
        .q("inflation")
        .page_size(5)
        .page(3)
        .fetch()
        .unwrap();

    mock.assert();
    assert!(!page.articles.is_empty());
}

#[test]
fn articles_without_title_are_kept() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/top-headlines");
        then.status(200)
            .header("content-type", "application/json")
            .body(
                r#"{"status":"ok","totalResults":2,"articles":[
                    {"source":{"id":null,"name":"A"},"title":"First"},
                    {"source":{"id":null,"name":"B"},"title":null}
                ]}"#,
            );
    });

    let client = client_for(&server);
    let page = client.headlines().fetch().unwrap();

    mock.assert();
    assert_eq!(page.total_results, 2);
    assert_eq!(page.articles.len(), 2);
    assert_eq!(page.articles[0].title.as_deref(), Some("First"));
    assert_eq!(page.articles[1].title, None);
    assert_eq!(page.articles[1].source.name, "B");
}
