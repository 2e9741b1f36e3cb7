//! Request lifecycle manager: performs the monitor-creation call and records
//! its outcome

use std::sync::Arc;

use crate::api::{
    CreateMonitorRequest, HealthResponse, MonitorResult, CREATE_MONITOR_PATH, HEALTH_PATH,
};
use crate::config::ServerConfig;
use crate::error::FALLBACK_FAILURE_MESSAGE;
use crate::io::HttpClient;
use crate::state::{RequestState, StateHandle};

/// Owns the request state and the outbound call to the backend.
///
/// Every failure ends up as [`RequestState::Failed`]; nothing is returned to
/// the caller as an error.
pub struct LifecycleManager {
    server: ServerConfig,
    http: Arc<dyn HttpClient>,
    state: StateHandle,
}

impl std::fmt::Debug for LifecycleManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LifecycleManager")
            .field("base_url", &self.server.base_url)
            .finish()
    }
}

impl LifecycleManager {
    pub fn new(server: &ServerConfig, http: Arc<dyn HttpClient>, state: StateHandle) -> Self {
        tracing::debug!("Created LifecycleManager for {}", server.base_url);
        Self {
            server: server.clone(),
            http,
            state,
        }
    }

    pub fn state(&self) -> &StateHandle {
        &self.state
    }

    pub fn base_url(&self) -> &str {
        &self.server.base_url
    }

    /// Submit `description` and wait for the outcome.
    ///
    /// Enters `Pending` first, replacing any earlier result, then returns the
    /// state committed when the call finished.
    pub async fn create_monitor(&self, description: &str) -> RequestState {
        self.state.write().await.begin();
        self.resolve(description).await
    }

    /// Perform the call for a request that is already `Pending` and commit
    /// its outcome.
    pub(crate) async fn resolve(&self, description: &str) -> RequestState {
        let outcome = self.request(description).await.map_err(|e| {
            tracing::warn!("Monitor creation failed: {}", e);
            e.failure_message()
        });

        self.commit(outcome).await
    }

    /// Settle a `Pending` request whose call never produced an outcome
    pub(crate) async fn abandon(&self) -> RequestState {
        self.commit(Err(FALLBACK_FAILURE_MESSAGE.to_string())).await
    }

    async fn commit(&self, outcome: Result<MonitorResult, String>) -> RequestState {
        let mut state = self.state.write().await;
        state.complete(outcome);
        tracing::info!("Monitor request finished: {}", *state);
        state.clone()
    }

    async fn request(&self, description: &str) -> crate::Result<MonitorResult> {
        let url = self.server.url_for(CREATE_MONITOR_PATH);
        let body = serde_json::to_value(CreateMonitorRequest {
            description: description.to_string(),
        })?;

        tracing::debug!("Creating monitor at {}", url);
        let response = self.http.post_json(&url, &body).await?;

        if !response.is_success() {
            tracing::debug!("Non-success response: status={}", response.status);
            return Err(crate::ScoutError::Status(response.status));
        }

        let result: MonitorResult = serde_json::from_str(&response.body)?;
        tracing::debug!("Monitor created: {:?}", result.monitor_id);
        Ok(result)
    }

    /// Ask the backend whether it is up. Does not touch the request state.
    pub async fn check_health(&self) -> crate::Result<bool> {
        let url = self.server.url_for(HEALTH_PATH);
        let response = self.http.get(&url).await?;
        if !response.is_success() {
            return Err(crate::ScoutError::Status(response.status));
        }
        let health: HealthResponse = serde_json::from_str(&response.body)?;
        tracing::debug!("Health check at {} -> {}", url, health.status);
        Ok(health.status == "ok")
    }
}
