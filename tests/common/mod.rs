//! Common test utilities for integration tests.
//!
//! A wiremock server stands in for the commit API.
//!
//! Note: Each integration test file compiles as a separate crate,
//! so not all helpers are used in every test file. We suppress
//! dead_code warnings at the module level.

#![allow(dead_code)]
#![allow(unused_imports)]

use serde_json::{Value, json};
use tokio::runtime::Handle;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use commit_deck::app::App;
use commit_deck::config::Config;

/// One commit as the server would send it
pub fn commit_json(n: usize, project: &str) -> Value {
    json!({
        "_id": format!("c{n:02}"),
        "project": project,
        "lifecycle": "development",
        "action": "add",
        "type": "feat",
        "header": format!("feat({project}): change {n}"),
        "description": format!("change {n}"),
        "createdAt": format!("2024-03-{:02}T10:00:00Z", n),
    })
}

/// `n` commits, ids `c01..`, alternating between two projects
pub fn commits(n: usize) -> Vec<Value> {
    (1..=n)
        .map(|i| commit_json(i, if i % 2 == 0 { "api" } else { "web" }))
        .collect()
}

pub fn ok(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": data }))
}

pub fn rejected(reason: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "success": false, "error": reason }))
}

/// `GET /commits` answers with `body` for every request
pub async fn mount_list(server: &MockServer, body: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/commits"))
        .respond_with(body)
        .mount(server)
        .await;
}

pub fn config_for(server: &MockServer) -> Config {
    Config {
        api_url: server.uri(),
        ..Config::default()
    }
}

/// App pointed at `server`, with the initial load already settled
pub async fn settled_app(server: &MockServer) -> App {
    let mut app = App::new(&config_for(server), Handle::current()).expect("client should build");
    app.settle().await;
    app
}
