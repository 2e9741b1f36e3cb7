//! Request lifecycle state shared between the input controller and the
//! lifecycle manager

use std::fmt;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::api::MonitorResult;

/// Where the current submission stands. Exactly one variant is active.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Pending,
    Succeeded(MonitorResult),
    Failed(String),
}

impl RequestState {
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestState::Pending)
    }

    /// Enter `Pending`, dropping any earlier result or error
    pub fn begin(&mut self) {
        *self = RequestState::Pending;
    }

    /// Leave `Pending` with the outcome of the in-flight request.
    ///
    /// Returns false, leaving the state untouched, if no request was pending.
    pub fn complete(&mut self, outcome: std::result::Result<MonitorResult, String>) -> bool {
        if !self.is_pending() {
            tracing::warn!("Ignoring request outcome while in state {}", self);
            return false;
        }
        *self = match outcome {
            Ok(result) => RequestState::Succeeded(result),
            Err(message) => RequestState::Failed(message),
        };
        true
    }

    pub fn result(&self) -> Option<&MonitorResult> {
        match self {
            RequestState::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl fmt::Display for RequestState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestState::Idle => write!(f, "Idle"),
            RequestState::Pending => write!(f, "Pending"),
            RequestState::Succeeded(_) => write!(f, "Succeeded"),
            RequestState::Failed(_) => write!(f, "Failed"),
        }
    }
}

/// Thread-safe shared state handle
pub type StateHandle = Arc<RwLock<RequestState>>;

pub fn new_state_handle() -> StateHandle {
    Arc::new(RwLock::new(RequestState::Idle))
}
