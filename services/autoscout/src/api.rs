//! Wire types for the monitor-creation backend
//!
//! Responses are decoded leniently: any key the backend leaves out decodes
//! as `None` instead of failing the whole payload.

use serde::{Deserialize, Deserializer, Serialize};

/// Path of the monitor-creation endpoint, relative to the backend base URL
pub const CREATE_MONITOR_PATH: &str = "/create_monitor";

/// Path of the backend health probe
pub const HEALTH_PATH: &str = "/";

/// Body of `POST /create_monitor`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateMonitorRequest {
    pub description: String,
}

/// Successful answer from `POST /create_monitor`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MonitorResult {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub monitor_id: Option<String>,
    /// Check interval in seconds
    #[serde(default)]
    pub interval: Option<f64>,
    #[serde(default, deserialize_with = "lenient_parsed")]
    pub parsed: Option<ParsedFields>,
}

/// Attributes the backend extracted from the description
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParsedFields {
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub condition: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub interval: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub url: Option<String>,
}

impl ParsedFields {
    /// Present fields in display order, paired with their labels.
    /// Empty strings count as absent.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("Description", &self.description),
            ("URL", &self.url),
            ("Condition", &self.condition),
            ("Requested Interval", &self.interval),
        ]
        .into_iter()
        .filter_map(|(label, value)| {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(|v| (label, v))
        })
        .collect()
    }
}

/// Body of `GET /`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub status: String,
}

/// Accepts strings as-is and stringifies other scalars; null and nested
/// values decode as absent.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// Only a JSON object carries extracted fields; any other shape decodes as
/// absent.
fn lenient_parsed<'de, D>(deserializer: D) -> Result<Option<ParsedFields>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        object @ serde_json::Value::Object(_) => serde_json::from_value(object)
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}
