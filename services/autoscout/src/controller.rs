//! Input controller: holds the description being typed and gates submission

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::error::FALLBACK_FAILURE_MESSAGE;
use crate::lifecycle::LifecycleManager;
use crate::state::RequestState;

/// Why a submission did not start a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The description is empty or whitespace-only
    Empty,
    /// A request from this controller is still in flight
    Pending,
}

/// What a call to [`InputController::submit`] did
#[derive(Debug)]
pub enum Submission {
    Ignored(IgnoreReason),
    /// A request was started; the handle resolves to the committed state
    Started(JoinHandle<RequestState>),
}

impl Submission {
    pub fn is_started(&self) -> bool {
        matches!(self, Submission::Started(_))
    }

    /// Wait for a started request to finish. `None` only if nothing was
    /// started; a started request always settles to a final state.
    pub async fn outcome(self) -> Option<RequestState> {
        match self {
            Submission::Ignored(_) => None,
            Submission::Started(handle) => Some(handle.await.unwrap_or_else(|e| {
                tracing::error!("Monitor request task failed: {}", e);
                RequestState::Failed(FALLBACK_FAILURE_MESSAGE.to_string())
            })),
        }
    }
}

/// Owns the description value and hands trimmed descriptions to the
/// [`LifecycleManager`]
pub struct InputController {
    description: String,
    manager: Arc<LifecycleManager>,
}

impl std::fmt::Debug for InputController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputController")
            .field("description", &self.description)
            .field("manager", &self.manager)
            .finish()
    }
}

impl InputController {
    pub fn new(manager: Arc<LifecycleManager>) -> Self {
        Self {
            description: String::new(),
            manager,
        }
    }

    pub fn manager(&self) -> &Arc<LifecycleManager> {
        &self.manager
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Replace the description with what the user has typed so far
    pub fn set_description(&mut self, value: impl Into<String>) {
        self.description = value.into();
    }

    /// Whether the submit affordance should be enabled
    pub async fn can_submit(&self) -> bool {
        !self.description.trim().is_empty() && !self.manager.state().read().await.is_pending()
    }

    /// Submit the trimmed description.
    ///
    /// Does nothing for blank input or while a request is pending. Otherwise
    /// the state is `Pending` by the time this returns and the request runs
    /// in a background task. The description is left as typed.
    pub async fn submit(&self) -> Submission {
        let trimmed = self.description.trim();
        if trimmed.is_empty() {
            tracing::debug!("Ignoring submission of blank description");
            return Submission::Ignored(IgnoreReason::Empty);
        }

        {
            let mut state = self.manager.state().write().await;
            if state.is_pending() {
                tracing::debug!("Ignoring submission while a request is pending");
                return Submission::Ignored(IgnoreReason::Pending);
            }
            state.begin();
        }

        tracing::info!("Submitting monitor description ({} chars)", trimmed.len());
        let manager = Arc::clone(&self.manager);
        let description = trimmed.to_string();
        Submission::Started(tokio::spawn(async move {
            let request = tokio::spawn({
                let manager = Arc::clone(&manager);
                async move { manager.resolve(&description).await }
            });
            match request.await {
                Ok(state) => state,
                Err(e) => {
                    tracing::error!("Monitor request task failed: {}", e);
                    manager.abandon().await
                }
            }
        }))
    }
}
