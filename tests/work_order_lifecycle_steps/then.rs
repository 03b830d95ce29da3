//! Then steps for work order lifecycle BDD scenarios.

use super::world::{WorkOrderWorld, run_async};
use rstest_bdd_macros::then;
use scrivener::work_order::domain::WorkStatus;

#[then(r#"the work order status is "{status}""#)]
fn work_order_status_is(world: &WorkOrderWorld, status: String) -> Result<(), eyre::Report> {
    let expected = WorkStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let order = world.order()?;
    let reader = world.user("Wren")?;
    let stored = run_async(world.service.get(&reader, order.id()))?;

    if stored.status() != expected {
        return Err(eyre::eyre!(
            "expected status {expected}, found {}",
            stored.status()
        ));
    }
    Ok(())
}

#[then(r#"the request fails with "{kind}""#)]
fn request_fails_with(world: &WorkOrderWorld, kind: String) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing request result"))?;

    match result {
        Err(err) if err.kind().as_str() == kind => Ok(()),
        other => Err(eyre::eyre!("expected {kind} failure, got {other:?}")),
    }
}

#[then(r#"the writer query is "{query}""#)]
fn writer_query_is(world: &WorkOrderWorld, query: String) -> Result<(), eyre::Report> {
    let order = world.order()?;
    if order.writer_query() != Some(query.as_str()) {
        return Err(eyre::eyre!(
            "expected writer query {query:?}, found {:?}",
            order.writer_query()
        ));
    }
    Ok(())
}

#[then("the writer query is cleared")]
fn writer_query_is_cleared(world: &WorkOrderWorld) -> Result<(), eyre::Report> {
    let order = world.order()?;
    if let Some(query) = order.writer_query() {
        return Err(eyre::eyre!("expected no writer query, found {query:?}"));
    }
    Ok(())
}

#[then(r#"the cancel reason is "{reason}""#)]
fn cancel_reason_is(world: &WorkOrderWorld, reason: String) -> Result<(), eyre::Report> {
    let order = world.order()?;
    if order.marketing_cancel_reason() != Some(reason.as_str()) {
        return Err(eyre::eyre!(
            "expected cancel reason {reason:?}, found {:?}",
            order.marketing_cancel_reason()
        ));
    }
    Ok(())
}
