use std::fmt;
use std::sync::Arc;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{info, warn};

use crate::config::Config;

/// Failure classes at the control-API boundary. Transport problems,
/// non-success HTTP statuses, and undecodable bodies all fold into one
/// "operation unavailable" outcome, but keep their cause so callers can
/// pattern-match instead of null-checking.
#[derive(Debug)]
pub enum ApiError {
    /// Transport-level failure before any HTTP status was received
    Network {
        operation: &'static str,
        reason: String,
    },

    /// The panel answered with a non-success HTTP status
    Status {
        operation: &'static str,
        status: StatusCode,
    },

    /// The response body could not be decoded into the expected shape
    Parse {
        operation: &'static str,
        reason: String,
    },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network { operation, reason } => {
                write!(f, "Network error during {}: {}", operation, reason)
            }
            ApiError::Status { operation, status } => {
                write!(f, "Panel returned {} during {}", status, operation)
            }
            ApiError::Parse { operation, reason } => {
                write!(f, "Invalid panel response during {}: {}", operation, reason)
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// A remote host/agent managing one or more server instances.
#[derive(Debug, Clone, Deserialize)]
pub struct Daemon {
    pub uuid: String,
    pub remarks: String,
}

/// A single managed server process, identified within its daemon.
#[derive(Debug, Clone, Deserialize)]
pub struct Instance {
    #[serde(rename = "instanceUuid")]
    pub instance_uuid: String,
}

#[derive(Debug, Deserialize)]
struct OverviewResponse {
    data: OverviewData,
}

#[derive(Debug, Deserialize)]
struct OverviewData {
    remote: Vec<Daemon>,
}

#[derive(Debug, Deserialize)]
struct InstanceListResponse {
    data: InstancePage,
}

#[derive(Debug, Deserialize)]
struct InstancePage {
    data: Vec<Instance>,
}

pub struct PanelClient {
    config: Arc<Config>,
    client: Client,
}

impl PanelClient {
    pub fn new(config: Arc<Config>) -> Self {
        // No request timeout beyond the transport defaults
        let client = Client::new();

        Self { config, client }
    }

    /// Issues one authenticated GET and decodes the JSON body. Every failure
    /// path is logged here before the tagged error is handed back.
    async fn get<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.config.panel_url, path);

        let response = match self
            .client
            .get(&url)
            .header("Content-Type", "application/json")
            .query(&[("apikey", self.config.api_key.as_str())])
            .query(params)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("Network error during {}: {}", operation, e);
                return Err(ApiError::Network {
                    operation,
                    reason: e.to_string(),
                });
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!("Panel returned {} during {}", status, operation);
            return Err(ApiError::Status { operation, status });
        }

        match response.json::<T>().await {
            Ok(body) => Ok(body),
            Err(e) => {
                warn!("Invalid panel response during {}: {}", operation, e);
                Err(ApiError::Parse {
                    operation,
                    reason: e.to_string(),
                })
            }
        }
    }

    /// Fetches the set of known daemons from the panel overview.
    pub async fn list_daemons(&self) -> Result<Vec<Daemon>, ApiError> {
        let overview: OverviewResponse = self.get("daemon overview", "/api/overview", &[]).await?;
        Ok(overview.data.remote)
    }

    /// Fetches one page of instances belonging to a daemon, optionally
    /// filtered by instance name and status.
    pub async fn list_instances(
        &self,
        daemon_id: &str,
        page: u32,
        page_size: u32,
        name_filter: &str,
        status_filter: &str,
    ) -> Result<Vec<Instance>, ApiError> {
        let page = page.to_string();
        let page_size = page_size.to_string();
        let params = [
            ("daemonId", daemon_id),
            ("page", page.as_str()),
            ("page_size", page_size.as_str()),
            ("instance_name", name_filter),
            ("status", status_filter),
        ];

        let listing: InstanceListResponse = self
            .get(
                "instance listing",
                "/api/service/remote_service_instances",
                &params,
            )
            .await?;
        Ok(listing.data.data)
    }

    /// Dispatches a console command to a running instance. Fire-and-forget:
    /// the response body is not interpreted beyond success.
    pub async fn send_command(
        &self,
        daemon_id: &str,
        instance_id: &str,
        command: &str,
    ) -> Result<(), ApiError> {
        let params = [
            ("uuid", instance_id),
            ("daemonId", daemon_id),
            ("command", command),
        ];

        self.get::<serde_json::Value>("command dispatch", "/api/protected_instance/command", &params)
            .await?;
        info!("Sent command '{}' to instance {}", command, instance_id);
        Ok(())
    }

    /// Stops an instance. Completion of the HTTP call is treated as success;
    /// the panel is not polled to confirm the instance actually stopped.
    pub async fn stop_instance(&self, daemon_id: &str, instance_id: &str) -> Result<(), ApiError> {
        let params = [("uuid", instance_id), ("daemonId", daemon_id)];

        self.get::<serde_json::Value>("stop instance", "/api/protected_instance/stop", &params)
            .await?;
        info!("Stopped instance {}", instance_id);
        Ok(())
    }

    /// Starts an instance. Same confirmation contract as [`Self::stop_instance`].
    pub async fn start_instance(&self, daemon_id: &str, instance_id: &str) -> Result<(), ApiError> {
        let params = [("uuid", instance_id), ("daemonId", daemon_id)];

        self.get::<serde_json::Value>("start instance", "/api/protected_instance/open", &params)
            .await?;
        info!("Started instance {}", instance_id);
        Ok(())
    }
}
