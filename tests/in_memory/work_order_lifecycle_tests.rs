//! End-to-end lifecycle tests against the in-memory adapters.

use super::helpers::{agency, create_order};
use eyre::{bail, ensure};
use scrivener::{
    failure::FailureKind,
    work_order::{
        domain::{StatusOverride, WorkOrderPatch, WorkStatus},
        services::TransitionWorkOrderRequest,
    },
};

#[tokio::test(flavor = "multi_thread")]
async fn query_then_delivery_then_terminal() -> eyre::Result<()> {
    let agency = agency().await?;
    let order = create_order(&agency, &agency.meera, 5).await?;

    let queried = agency
        .lifecycle
        .transition(
            &agency.wren,
            TransitionWorkOrderRequest::new(order.id(), WorkStatus::HasQuery)
                .with_note("Is APA fine?"),
        )
        .await?;
    ensure!(queried.writer_query() == Some("Is APA fine?"), "query recorded");

    let done = agency
        .lifecycle
        .transition(
            &agency.wren,
            TransitionWorkOrderRequest::new(order.id(), WorkStatus::Done),
        )
        .await?;
    ensure!(done.status() == WorkStatus::Done, "order delivered");
    ensure!(done.writer_query().is_none(), "query cleared on delivery");

    for actor in [&agency.wren, &agency.meera, &agency.admin] {
        match agency
            .lifecycle
            .transition(
                actor,
                TransitionWorkOrderRequest::new(order.id(), WorkStatus::Cancelled)
                    .with_note("Too late"),
            )
            .await
        {
            Err(err) if err.kind() == FailureKind::InvalidState => {}
            other => bail!("expected InvalidState for {}, got {other:?}", actor.role()),
        }
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn only_the_owner_cancels() -> eyre::Result<()> {
    let agency = agency().await?;
    let order = create_order(&agency, &agency.meera, 5).await?;

    let by_colleague = agency
        .lifecycle
        .transition(
            &agency.karan,
            TransitionWorkOrderRequest::new(order.id(), WorkStatus::Cancelled)
                .with_note("Budget cut"),
        )
        .await;
    ensure!(
        by_colleague.as_ref().err().map(|err| err.kind()) == Some(FailureKind::Forbidden),
        "non-owner cancel should be forbidden, got {by_colleague:?}"
    );

    let cancelled = agency
        .lifecycle
        .transition(
            &agency.meera,
            TransitionWorkOrderRequest::new(order.id(), WorkStatus::Cancelled)
                .with_note("Budget cut"),
        )
        .await?;
    ensure!(
        cancelled.marketing_cancel_reason() == Some("Budget cut"),
        "reason recorded"
    );

    let stored = agency.lifecycle.get(&agency.wren, order.id()).await?;
    ensure!(stored == cancelled, "cancellation persisted");
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_cancel_reason_leaves_order_pending() -> eyre::Result<()> {
    let agency = agency().await?;
    let order = create_order(&agency, &agency.meera, 5).await?;

    let result = agency
        .lifecycle
        .transition(
            &agency.meera,
            TransitionWorkOrderRequest::new(order.id(), WorkStatus::Cancelled).with_note(""),
        )
        .await;
    ensure!(
        result.as_ref().err().map(|err| err.kind()) == Some(FailureKind::MissingInput),
        "expected MissingInput, got {result:?}"
    );

    let stored = agency.lifecycle.get(&agency.meera, order.id()).await?;
    ensure!(stored.status() == WorkStatus::Pending, "order still pending");
    ensure!(stored == order, "order unchanged");
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn admin_corrects_and_reassigns() -> eyre::Result<()> {
    let agency = agency().await?;
    let order = create_order(&agency, &agency.meera, 5).await?;

    let corrected = agency
        .lifecycle
        .update_details(
            &agency.admin,
            order.id(),
            WorkOrderPatch::new()
                .with_word_count(2_400)
                .with_marketing_person(agency.karan.id())
                .with_status_override(
                    StatusOverride::new(WorkStatus::HasQuery).with_writer_query("Need outline"),
                ),
        )
        .await?;
    ensure!(corrected.is_owned_by(agency.karan.id()), "ownership moved");
    ensure!(corrected.writer_query() == Some("Need outline"), "query set");

    let old_owner = agency
        .lifecycle
        .transition(
            &agency.meera,
            TransitionWorkOrderRequest::new(order.id(), WorkStatus::Cancelled)
                .with_note("Mine"),
        )
        .await;
    ensure!(
        old_owner.as_ref().err().map(|err| err.kind()) == Some(FailureKind::Forbidden),
        "previous owner lost cancel rights, got {old_owner:?}"
    );
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn writer_cannot_edit_details() -> eyre::Result<()> {
    let agency = agency().await?;
    let order = create_order(&agency, &agency.meera, 5).await?;

    let result = agency
        .lifecycle
        .update_details(
            &agency.wren,
            order.id(),
            WorkOrderPatch::new().with_word_count(10),
        )
        .await;

    ensure!(
        result.as_ref().err().map(|err| err.kind()) == Some(FailureKind::Forbidden),
        "expected Forbidden, got {result:?}"
    );
    Ok(())
}
