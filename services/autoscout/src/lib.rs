//! AutoScout - natural-language website monitor client
//!
//! Sends a free-text description of something to track to the monitor
//! backend and displays the parsed monitor it created, or why it failed.

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod io;
pub mod lifecycle;
pub mod render;
pub mod state;

pub use config::{load_config, Config};
pub use controller::{IgnoreReason, InputController, Submission};
pub use error::{Result, ScoutError};
pub use lifecycle::LifecycleManager;
pub use state::RequestState;

use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::io::{HttpClient, ReqwestHttpClient};

/// Wire up a controller talking to the backend named in `config`
pub fn build_controller(config: &Config) -> Result<InputController> {
    let http: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::new(config.request.timeout())?);
    Ok(controller_with_client(config, http))
}

/// Same as [`build_controller`] with a caller-supplied HTTP client
pub fn controller_with_client(config: &Config, http: Arc<dyn HttpClient>) -> InputController {
    let state = state::new_state_handle();
    let manager = LifecycleManager::new(&config.server, http, state);
    InputController::new(Arc::new(manager))
}

/// Type `description`, submit it, and wait for the outcome.
///
/// Returns `None` when the submission was ignored.
pub async fn submit_once(
    controller: &mut InputController,
    description: &str,
) -> Option<RequestState> {
    controller.set_description(description);
    controller.submit().await.outcome().await
}

/// Read descriptions line by line from `input`, submitting each one and
/// writing the rendered outcome to `output`. Returns at end of input.
pub async fn run_interactive<R, W>(
    controller: &mut InputController,
    input: R,
    output: &mut W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    loop {
        let submit_enabled = controller.can_submit().await;
        let current = controller.manager().state().read().await.clone();
        let view = render::render(&current, submit_enabled);
        output
            .write_all(format!("{}> ", view.submit_label()).as_bytes())
            .await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            output.write_all(b"\n").await?;
            break;
        };

        controller.set_description(line);
        let submission = controller.submit().await;
        if !submission.is_started() {
            continue;
        }

        let pending = render::render(&RequestState::Pending, false);
        output.write_all(pending.to_string().as_bytes()).await?;

        if let Some(state) = submission.outcome().await {
            let view = render::render(&state, controller.can_submit().await);
            output.write_all(view.to_string().as_bytes()).await?;
        }
        output.flush().await?;
    }
    tracing::debug!("Input closed, leaving interactive mode");
    Ok(())
}
