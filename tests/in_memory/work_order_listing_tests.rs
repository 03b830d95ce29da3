//! Listing and capability tests against the in-memory adapters.

use super::helpers::{agency, create_order};
use chrono::{Duration, Utc};
use eyre::ensure;
use scrivener::work_order::{
    domain::{WorkOrderFilter, WorkStatus},
    services::TransitionWorkOrderRequest,
};

#[tokio::test(flavor = "multi_thread")]
async fn every_role_sees_every_order_in_creation_order() -> eyre::Result<()> {
    let agency = agency().await?;
    let first = create_order(&agency, &agency.meera, 3).await?;
    let second = create_order(&agency, &agency.karan, 9).await?;

    for actor in [&agency.admin, &agency.meera, &agency.karan, &agency.wren] {
        let listed = agency
            .lifecycle
            .list(actor, &WorkOrderFilter::new())
            .await?;
        let ids: Vec<_> = listed.iter().map(|order| order.id()).collect();
        ensure!(
            ids == vec![first.id(), second.id()],
            "{} saw {ids:?}",
            actor.role()
        );
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn filters_compose() -> eyre::Result<()> {
    let agency = agency().await?;
    let soon = create_order(&agency, &agency.meera, 2).await?;
    let later = create_order(&agency, &agency.meera, 20).await?;
    let other_owner = create_order(&agency, &agency.karan, 2).await?;
    agency
        .lifecycle
        .transition(
            &agency.wren,
            TransitionWorkOrderRequest::new(later.id(), WorkStatus::Done),
        )
        .await?;

    let pending = agency
        .lifecycle
        .list(
            &agency.admin,
            &WorkOrderFilter::new().with_status(WorkStatus::Pending),
        )
        .await?;
    ensure!(
        pending.iter().map(|order| order.id()).collect::<Vec<_>>()
            == vec![soon.id(), other_owner.id()],
        "status filter"
    );

    let meera_this_week = agency
        .lifecycle
        .list(
            &agency.admin,
            &WorkOrderFilter::new()
                .with_marketing_person(agency.meera.id())
                .with_deadline_to(Utc::now() + Duration::days(7)),
        )
        .await?;
    ensure!(
        meera_this_week.iter().map(|order| order.id()).collect::<Vec<_>>() == vec![soon.id()],
        "owner and deadline filters"
    );
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn capabilities_follow_role_and_ownership() -> eyre::Result<()> {
    let agency = agency().await?;
    create_order(&agency, &agency.meera, 3).await?;
    let filter = WorkOrderFilter::new();

    let for_writer = agency
        .lifecycle
        .list_with_capabilities(&agency.wren, &filter)
        .await?;
    let for_colleague = agency
        .lifecycle
        .list_with_capabilities(&agency.karan, &filter)
        .await?;
    let for_admin = agency
        .lifecycle
        .list_with_capabilities(&agency.admin, &filter)
        .await?;

    let writer = for_writer
        .first()
        .ok_or_else(|| eyre::eyre!("missing listing"))?;
    let colleague = for_colleague
        .first()
        .ok_or_else(|| eyre::eyre!("missing listing"))?;
    let admin = for_admin
        .first()
        .ok_or_else(|| eyre::eyre!("missing listing"))?;

    ensure!(
        writer.capabilities.transitions == vec![WorkStatus::Done, WorkStatus::HasQuery],
        "writer transitions"
    );
    ensure!(!writer.capabilities.can_edit_details, "writer cannot edit");
    ensure!(colleague.capabilities.transitions.is_empty(), "colleague has no transitions");
    ensure!(!colleague.capabilities.can_edit_details, "colleague cannot edit");
    ensure!(admin.capabilities.can_delete, "admin can delete");
    ensure!(admin.capabilities.can_override_status, "admin can override");
    Ok(())
}
