//! When steps for work order lifecycle BDD scenarios.

use super::world::{WorkOrderWorld, run_async};
use rstest_bdd_macros::when;
use scrivener::work_order::{domain::WorkStatus, services::TransitionWorkOrderRequest};

fn request_status(
    world: &mut WorkOrderWorld,
    name: &str,
    status: &str,
    note: Option<&str>,
) -> Result<(), eyre::Report> {
    let actor = world.user(name)?;
    let target = WorkStatus::try_from(status)
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let mut request = TransitionWorkOrderRequest::new(world.order()?.id(), target);
    if let Some(text) = note {
        request = request.with_note(text);
    }

    let result = run_async(world.service.transition(&actor, request));
    if let Ok(ref updated) = result {
        world.order = Some(updated.clone());
    }
    world.last_result = Some(result);
    Ok(())
}

#[when(r#""{name}" requests status "{status}" with note "{note}""#)]
fn requests_status_with_note(
    world: &mut WorkOrderWorld,
    name: String,
    status: String,
    note: String,
) -> Result<(), eyre::Report> {
    request_status(world, &name, &status, Some(&note))
}

#[when(r#""{name}" requests status "{status}" with an empty note"#)]
fn requests_status_with_empty_note(
    world: &mut WorkOrderWorld,
    name: String,
    status: String,
) -> Result<(), eyre::Report> {
    request_status(world, &name, &status, Some(""))
}

#[when(r#""{name}" requests status "{status}" without a note"#)]
fn requests_status_without_note(
    world: &mut WorkOrderWorld,
    name: String,
    status: String,
) -> Result<(), eyre::Report> {
    request_status(world, &name, &status, None)
}
