//! BDD step definitions for the scripted backend

use std::sync::Arc;

use autoscout::io::HttpClient;
use autoscout::{controller_with_client, Config};
use cucumber::gherkin::Step;
use cucumber::{given, then, when};

use crate::backend::{Reply, ScriptedBackend};
use crate::world::ScoutWorld;

fn use_reply(world: &mut ScoutWorld, reply: Reply) {
    if let Some(backend) = &world.backend {
        backend.set_reply(reply);
        return;
    }
    let backend = Arc::new(ScriptedBackend::new(reply));
    let http: Arc<dyn HttpClient> = backend.clone();
    world.controller = Some(controller_with_client(&Config::default(), http));
    world.backend = Some(backend);
}

#[given(expr = "the backend responds with status {int} and body:")]
fn responds_with_body(world: &mut ScoutWorld, status: u16, step: &Step) {
    let body = step.docstring.clone().expect("docstring body missing");
    use_reply(world, Reply::Status(status, body));
}

#[given(expr = "the backend responds with status {int}")]
fn responds_with_status(world: &mut ScoutWorld, status: u16) {
    use_reply(world, Reply::Status(status, String::new()));
}

#[given(expr = "the backend is unreachable with message {string}")]
fn unreachable_with_message(world: &mut ScoutWorld, message: String) {
    use_reply(world, Reply::Transport(message));
}

#[given("the backend is unreachable with no message")]
fn unreachable_without_message(world: &mut ScoutWorld) {
    use_reply(world, Reply::Transport(String::new()));
}

#[given("the backend holds its responses")]
fn holds_responses(world: &mut ScoutWorld) {
    world.backend().hold_responses();
}

#[when("the backend releases a response")]
fn releases_response(world: &mut ScoutWorld) {
    world.backend().release_one();
}

#[then(expr = "the backend received {int} request(s)")]
fn received_requests(world: &mut ScoutWorld, count: usize) {
    assert_eq!(world.backend().calls(), count);
}

#[then("the backend received no requests")]
fn received_no_requests(world: &mut ScoutWorld) {
    assert_eq!(world.backend().calls(), 0);
}

#[then(expr = "the backend received the description {string}")]
fn received_description(world: &mut ScoutWorld, description: String) {
    let bodies = world.backend().bodies();
    let last = bodies.last().expect("no request received");
    assert_eq!(last, &serde_json::json!({ "description": description }));
}
