//! BDD step definitions for request state transitions

use autoscout::api::ParsedFields;
use autoscout::RequestState;
use cucumber::then;

use crate::world::ScoutWorld;

fn parsed_field<'a>(parsed: &'a ParsedFields, name: &str) -> Option<&'a str> {
    match name {
        "description" => parsed.description.as_deref(),
        "condition" => parsed.condition.as_deref(),
        "interval" => parsed.interval.as_deref(),
        "url" => parsed.url.as_deref(),
        other => panic!("Unknown parsed field: {}", other),
    }
}

async fn succeeded(world: &ScoutWorld) -> autoscout::api::MonitorResult {
    match world.current_state().await {
        RequestState::Succeeded(result) => result,
        other => panic!("expected Succeeded, got {other:?}"),
    }
}

#[then(expr = "the state is {word}")]
async fn state_is(world: &mut ScoutWorld, expected: String) {
    assert_eq!(world.current_state().await.to_string(), expected);
}

#[then(expr = "the state is Failed with message {string}")]
async fn failed_with(world: &mut ScoutWorld, message: String) {
    assert_eq!(world.current_state().await, RequestState::Failed(message));
}

#[then(expr = "the failure message contains {string}")]
async fn failure_contains(world: &mut ScoutWorld, needle: String) {
    let state = world.current_state().await;
    let message = state.error().expect("state is not Failed");
    assert!(message.contains(&needle), "{message}");
}

#[then(expr = "the result has message {string}, monitor id {string} and interval {int}")]
async fn result_has(world: &mut ScoutWorld, message: String, monitor_id: String, interval: u32) {
    let result = succeeded(world).await;
    assert_eq!(result.message, Some(message));
    assert_eq!(result.monitor_id, Some(monitor_id));
    assert_eq!(result.interval, Some(f64::from(interval)));
}

#[then(expr = "the parsed {word} is {string}")]
async fn parsed_is(world: &mut ScoutWorld, field: String, value: String) {
    let result = succeeded(world).await;
    let parsed = result.parsed.unwrap_or_default();
    assert_eq!(parsed_field(&parsed, &field), Some(value.as_str()));
}

#[then(expr = "the parsed {word} is absent")]
async fn parsed_absent(world: &mut ScoutWorld, field: String) {
    let result = succeeded(world).await;
    let parsed = result.parsed.unwrap_or_default();
    assert_eq!(parsed_field(&parsed, &field), None);
}

#[then("the completed request reported success")]
fn completed_success(world: &mut ScoutWorld) {
    let state = world.last_state.as_ref().expect("no completed request");
    assert!(state.result().is_some(), "{state:?}");
}

#[then(expr = "the completed request reported failure {string}")]
fn completed_failure(world: &mut ScoutWorld, message: String) {
    let state = world.last_state.as_ref().expect("no completed request");
    assert_eq!(state.error(), Some(message.as_str()));
}
