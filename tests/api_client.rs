mod common;

use std::thread;
use std::time::Duration;

use common::mock_backend::MockBackend;
use common::test_client;
use serde_json::json;

fn home_params() -> Vec<(String, String)> {
    vec![
        ("category".to_string(), "trending".to_string()),
        ("limit".to_string(), "24".to_string()),
    ]
}

#[test]
fn identical_requests_within_ttl_hit_the_cache() {
    let backend = MockBackend::spawn();
    backend.set_json("/home", json!([]));
    let mut client = test_client(&backend.base_url(), Duration::from_secs(30));

    client.get_json("/home", &home_params()).unwrap();
    client.get_json("/home", &home_params()).unwrap();

    assert_eq!(backend.hits("/home"), 1);
}

#[test]
fn param_order_does_not_defeat_the_cache() {
    let backend = MockBackend::spawn();
    backend.set_json("/home", json!([]));
    let mut client = test_client(&backend.base_url(), Duration::from_secs(30));

    let mut reversed = home_params();
    reversed.reverse();
    client.get_json("/home", &home_params()).unwrap();
    client.get_json("/home", &reversed).unwrap();

    assert_eq!(backend.hits("/home"), 1);
}

#[test]
fn distinct_params_are_distinct_requests() {
    let backend = MockBackend::spawn();
    backend.set_json("/home", json!([]));
    let mut client = test_client(&backend.base_url(), Duration::from_secs(30));

    client.get_json("/home", &home_params()).unwrap();
    let other = vec![
        ("category".to_string(), "popular".to_string()),
        ("limit".to_string(), "24".to_string()),
    ];
    client.get_json("/home", &other).unwrap();

    assert_eq!(backend.hits("/home"), 2);
}

#[test]
fn expired_entry_goes_back_to_the_network() {
    let backend = MockBackend::spawn();
    backend.set_json("/home", json!([]));
    let mut client = test_client(&backend.base_url(), Duration::from_millis(100));

    client.get_json("/home", &home_params()).unwrap();
    thread::sleep(Duration::from_millis(150));
    client.get_json("/home", &home_params()).unwrap();

    assert_eq!(backend.hits("/home"), 2);
}

#[test]
fn status_200_returns_the_parsed_body() {
    let backend = MockBackend::spawn();
    backend.set_json("/ping", json!({"a": 1}));
    let mut client = test_client(&backend.base_url(), Duration::from_secs(30));

    let value = client.get_json("/ping", &[]).unwrap();
    assert_eq!(value, json!({"a": 1}));
}

#[test]
fn status_404_maps_to_an_http_error() {
    let backend = MockBackend::spawn();
    backend.set_error("/movie/id/1", 404, "movie not found");
    let mut client = test_client(&backend.base_url(), Duration::from_secs(30));

    let err = client.movie_detail(1).unwrap_err();
    assert_eq!(err.to_string(), "HTTP 404: movie not found");
}

#[test]
fn error_bodies_are_truncated_for_display() {
    let backend = MockBackend::spawn();
    let long_body = "x".repeat(1000);
    backend.set_error("/home", 500, &long_body);
    let mut client = test_client(&backend.base_url(), Duration::from_secs(30));

    let err = client.get_json("/home", &[]).unwrap_err();
    // "HTTP 500: " prefix plus at most 300 chars of body.
    assert_eq!(err.to_string().chars().count(), 10 + 300);
}

#[test]
fn unreachable_backend_is_a_transport_error() {
    // Nothing listens on port 1.
    let mut client = test_client("http://127.0.0.1:1", Duration::from_secs(30));

    let err = client.get_json("/home", &[]).unwrap_err();
    assert!(err.to_string().starts_with("Request failed: "));
}

#[test]
fn malformed_body_is_a_transport_error() {
    let backend = MockBackend::spawn();
    backend.set_error("/broken", 200, "not json at all");
    let mut client = test_client(&backend.base_url(), Duration::from_secs(30));

    let err = client.get_json("/broken", &[]).unwrap_err();
    assert!(err.to_string().starts_with("Request failed: "));
}

#[test]
fn failed_outcomes_are_cached_like_successes() {
    let backend = MockBackend::spawn();
    backend.set_error("/home", 500, "flaky");
    let mut client = test_client(&backend.base_url(), Duration::from_secs(30));

    assert!(client.get_json("/home", &[]).is_err());
    assert!(client.get_json("/home", &[]).is_err());

    assert_eq!(backend.hits("/home"), 1);
}

#[test]
fn typed_wrappers_deserialize_listings() {
    let backend = MockBackend::spawn();
    backend.set_json(
        "/tmdb/search",
        json!([{"tmdb_id": 27205, "title": "Inception", "poster_url": null}]),
    );
    let mut client = test_client(&backend.base_url(), Duration::from_secs(30));

    let listings = client.search_listings("Inception").unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].tmdb_id, Some(27205));
    assert_eq!(listings[0].title.as_deref(), Some("Inception"));
}
