//! Shared fixtures for integration tests
//!
//! Provides a fake control panel built on wiremock plus a recording clock,
//! so full nightly runs can be exercised without a real panel or real
//! wall-clock waits.

#![allow(dead_code)] // Not every test file uses every fixture

use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use panel_nightly::clock::Clock;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Clock that records requested delays instead of sleeping.
#[derive(Clone, Default)]
pub struct RecordingClock {
    delays: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recorded_seconds(&self) -> Vec<u64> {
        self.delays
            .lock()
            .unwrap()
            .iter()
            .map(|d| d.as_secs())
            .collect()
    }
}

impl Clock for RecordingClock {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        self.delays.lock().unwrap().push(duration);
        std::future::ready(())
    }
}

/// Fake control panel that answers the management API endpoints.
pub struct MockPanel {
    pub server: MockServer,
}

impl MockPanel {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn base_url(&self) -> String {
        self.server.uri()
    }

    /// Overview listing the given `(uuid, remarks)` daemons.
    pub async fn mock_overview(&self, daemons: &[(&str, &str)]) {
        let remote: Vec<_> = daemons
            .iter()
            .map(|(uuid, remarks)| json!({"uuid": uuid, "remarks": remarks}))
            .collect();

        Mock::given(method("GET"))
            .and(path("/api/overview"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": 200,
                "data": {"remote": remote}
            })))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_overview_error(&self, status_code: u16) {
        Mock::given(method("GET"))
            .and(path("/api/overview"))
            .respond_with(ResponseTemplate::new(status_code))
            .mount(&self.server)
            .await;
    }

    /// Instance listing for one daemon.
    pub async fn mock_instances(&self, daemon_id: &str, instance_ids: &[&str]) {
        let items: Vec<_> = instance_ids
            .iter()
            .map(|id| json!({"instanceUuid": id}))
            .collect();

        Mock::given(method("GET"))
            .and(path("/api/service/remote_service_instances"))
            .and(query_param("daemonId", daemon_id))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": 200,
                "data": {"data": items, "page": 1, "pageSize": 10}
            })))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_instances_error(&self, daemon_id: &str, status_code: u16) {
        Mock::given(method("GET"))
            .and(path("/api/service/remote_service_instances"))
            .and(query_param("daemonId", daemon_id))
            .respond_with(ResponseTemplate::new(status_code))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_command(&self, status_code: u16) {
        Mock::given(method("GET"))
            .and(path("/api/protected_instance/command"))
            .respond_with(ResponseTemplate::new(status_code).set_body_json(json!({
                "status": status_code,
                "data": true
            })))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_stop(&self, status_code: u16) {
        Mock::given(method("GET"))
            .and(path("/api/protected_instance/stop"))
            .respond_with(ResponseTemplate::new(status_code).set_body_json(json!({
                "status": status_code,
                "data": true
            })))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_start(&self, status_code: u16) {
        Mock::given(method("GET"))
            .and(path("/api/protected_instance/open"))
            .respond_with(ResponseTemplate::new(status_code).set_body_json(json!({
                "status": status_code,
                "data": true
            })))
            .mount(&self.server)
            .await;
    }

    /// Every request the panel received, in arrival order, as
    /// `(path, query)` pairs for sequence assertions.
    pub async fn received(&self) -> Vec<(String, String)> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|r| {
                (
                    r.url.path().to_string(),
                    r.url.query().unwrap_or_default().to_string(),
                )
            })
            .collect()
    }
}
