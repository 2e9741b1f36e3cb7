//! BDD step definitions for the rendered display

use autoscout::render::{render, LOADING_LABEL};
use cucumber::{then, when};

use crate::world::ScoutWorld;

#[when("the display is rendered")]
async fn display_rendered(world: &mut ScoutWorld) {
    let state = world.current_state().await;
    let submit_enabled = world.controller().can_submit().await;
    world.view = Some(render(&state, submit_enabled));
}

fn display(world: &ScoutWorld) -> String {
    world.view.as_ref().expect("display not rendered").to_string()
}

#[then(expr = "the display shows {string}")]
fn display_shows(world: &mut ScoutWorld, text: String) {
    let shown = display(world);
    assert!(shown.contains(&text), "{shown}");
}

#[then(expr = "the display does not show {string}")]
fn display_hides(world: &mut ScoutWorld, text: String) {
    let shown = display(world);
    assert!(!shown.contains(&text), "{shown}");
}

#[then("the display shows a loading indicator")]
fn loading_shown(world: &mut ScoutWorld) {
    let view = world.view.as_ref().expect("display not rendered");
    assert!(view.loading);
    assert_eq!(view.submit_label(), LOADING_LABEL);
}

#[then("the display shows no result or error")]
fn nothing_shown(world: &mut ScoutWorld) {
    let view = world.view.as_ref().expect("display not rendered");
    assert!(view.result.is_none());
    assert!(view.error.is_none());
}
