//! Shared test utilities.

#![allow(dead_code)]

pub mod mock_backend;

use std::path::PathBuf;
use std::time::Duration;

use moviedeck::api::ApiClient;
use moviedeck::config::Config;
use moviedeck::location::LocationCarrier;
use moviedeck::ui::app::App;
use moviedeck::ui::nav::NavState;
use tempfile::TempDir;

pub fn test_client(base_url: &str, cache_ttl: Duration) -> ApiClient {
    ApiClient::new(base_url, Duration::from_secs(5), cache_ttl).expect("build client")
}

/// App wired to a backend URL, with its location carrier on a temp file
/// so tests can assert what gets stored.
pub fn test_app(base_url: &str, nav: NavState) -> (App, TempDir, PathBuf) {
    let dir = TempDir::new().expect("temp dir");
    let location_path = dir.path().join("location");
    let api = test_client(base_url, Duration::from_secs(30));
    let app = App::new(
        api,
        LocationCarrier::at(location_path.clone()),
        &Config::default(),
        nav,
    );
    (app, dir, location_path)
}
