//! BDD test world for the autoscout client

use std::sync::Arc;

use autoscout::render::View;
use autoscout::{InputController, RequestState, Submission};
use cucumber::World;

use crate::backend::ScriptedBackend;

#[derive(Debug, Default, World)]
pub struct ScoutWorld {
    pub backend: Option<Arc<ScriptedBackend>>,
    pub controller: Option<InputController>,

    // Submissions that have not been awaited yet, oldest first
    pub in_flight: Vec<Submission>,
    pub last_ignored: Option<autoscout::IgnoreReason>,
    pub last_state: Option<RequestState>,
    pub view: Option<View>,
}

impl ScoutWorld {
    pub fn controller(&mut self) -> &mut InputController {
        self.controller.as_mut().expect("controller not set")
    }

    pub fn backend(&self) -> &ScriptedBackend {
        self.backend.as_ref().expect("backend not set")
    }

    pub async fn current_state(&self) -> RequestState {
        let controller = self.controller.as_ref().expect("controller not set");
        controller.manager().state().read().await.clone()
    }
}
