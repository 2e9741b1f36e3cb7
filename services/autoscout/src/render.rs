//! Terminal rendering of the request state

use std::fmt;

use crate::api::MonitorResult;
use crate::state::RequestState;

pub const SUBMIT_LABEL: &str = "Start Monitoring";
pub const LOADING_LABEL: &str = "Creating Monitor...";

/// Everything the display needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub loading: bool,
    pub submit_enabled: bool,
    pub error: Option<String>,
    pub result: Option<ResultPanel>,
}

/// The success panel
#[derive(Debug, Clone, PartialEq)]
pub struct ResultPanel {
    pub title: String,
    pub monitor_id: String,
    pub interval: String,
    /// Labeled extracted fields; absent ones are not listed
    pub extracted: Vec<(&'static str, String)>,
}

impl View {
    /// Text for the submit affordance
    pub fn submit_label(&self) -> &'static str {
        if self.loading {
            LOADING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }
}

/// Project `state` into a view. `submit_enabled` comes from
/// [`crate::controller::InputController::can_submit`].
pub fn render(state: &RequestState, submit_enabled: bool) -> View {
    View {
        loading: state.is_pending(),
        submit_enabled,
        error: state.error().map(str::to_string),
        result: state.result().map(result_panel),
    }
}

fn result_panel(result: &MonitorResult) -> ResultPanel {
    let interval = match result.interval {
        Some(seconds) => format!("Every {} seconds", seconds),
        None => "unknown".to_string(),
    };
    let extracted: Vec<(&'static str, String)> = result
        .parsed
        .as_ref()
        .map(|parsed| {
            parsed
                .entries()
                .into_iter()
                .map(|(label, value)| (label, value.to_string()))
                .collect()
        })
        .unwrap_or_default();

    ResultPanel {
        title: result.message.clone().unwrap_or_default(),
        monitor_id: result.monitor_id.clone().unwrap_or_default(),
        interval,
        extracted,
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.loading {
            writeln!(f, "{}", LOADING_LABEL)?;
        }
        if let Some(error) = &self.error {
            writeln!(f, "Error: {}", error)?;
        }
        if let Some(panel) = &self.result {
            write!(f, "{}", panel)?;
        }
        Ok(())
    }
}

impl fmt::Display for ResultPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "  Monitor ID:     {}", self.monitor_id)?;
        writeln!(f, "  Check Interval: {}", self.interval)?;
        if !self.extracted.is_empty() {
            writeln!(f, "  Extracted Information")?;
            for (label, value) in &self.extracted {
                writeln!(f, "    {}: {}", label, value)?;
            }
        }
        Ok(())
    }
}
