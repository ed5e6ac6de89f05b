#![allow(dead_code)]

use std::time::Duration;

use feed_engine::{ApiClient, ApiConfig};
use serde_json::{json, Value};
use wiremock::MockServer;

pub fn episode_json(id: u32, character_ids: &[u32], base: &str) -> Value {
    json!({
        "id": id,
        "name": format!("Episode {id}"),
        "air_date": "December 2, 2013",
        "episode": format!("S01E{id:02}"),
        "characters": character_ids
            .iter()
            .map(|c| format!("{base}/character/{c}"))
            .collect::<Vec<_>>(),
        "url": format!("{base}/episode/{id}"),
        "created": "2017-11-10T12:56:33.798Z"
    })
}

pub fn character_json(id: u32) -> Value {
    json!({
        "id": id,
        "name": format!("Character {id}"),
        "status": if id % 2 == 0 { "Dead" } else { "Alive" },
        "species": "Human",
        "type": "",
        "gender": "Male",
        "origin": { "name": "Earth (C-137)", "url": "" },
        "location": { "name": "Citadel of Ricks", "url": "" },
        "image": format!("https://example.com/avatar/{id}.jpeg"),
        "episode": [],
        "url": "",
        "created": "2017-11-04T18:48:46.250Z"
    })
}

pub fn page_json(results: Vec<Value>, next: Option<String>) -> Value {
    json!({
        "info": { "count": results.len(), "pages": 1, "next": next, "prev": null },
        "results": results
    })
}

pub fn config_for(server: &MockServer, timeout: Duration, cache: Duration) -> ApiConfig {
    ApiConfig::new(format!("{}/api", server.uri()), timeout, cache).expect("valid config")
}

/// Client against `server` with a generous timeout and caching disabled.
pub fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(config_for(server, Duration::from_secs(5), Duration::ZERO))
        .expect("client builds")
}

pub async fn request_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .map(|requests| requests.len())
        .unwrap_or(0)
}
