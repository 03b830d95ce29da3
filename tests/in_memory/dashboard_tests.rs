//! Administrator dashboard tests against the in-memory adapters.

use super::helpers::{agency, create_order};
use eyre::ensure;
use scrivener::{dashboard::DashboardSummary, failure::FailureKind};

#[tokio::test(flavor = "multi_thread")]
async fn dashboard_counts_users_and_orders() -> eyre::Result<()> {
    let agency = agency().await?;
    let order = create_order(&agency, &agency.meera, 4).await?;
    create_order(&agency, &agency.karan, 4).await?;
    agency.lifecycle.delete(&agency.admin, order.id()).await?;

    let summary = agency.dashboard.summary(&agency.admin).await?;

    ensure!(
        summary
            == DashboardSummary {
                admins: 1,
                marketing: 2,
                writers: 1,
                total_work_orders: 1,
            },
        "got {summary:?}"
    );
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn dashboard_is_hidden_from_marketing() -> eyre::Result<()> {
    let agency = agency().await?;

    let result = agency.dashboard.summary(&agency.meera).await;

    ensure!(
        result.as_ref().err().map(|err| err.kind()) == Some(FailureKind::Forbidden),
        "expected Forbidden, got {result:?}"
    );
    Ok(())
}
