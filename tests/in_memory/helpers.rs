//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use chrono::{Duration, Utc};
use eyre::WrapErr;
use mockable::DefaultClock;
use scrivener::{
    dashboard::DashboardService,
    identity::{
        adapters::memory::InMemoryUserDirectory,
        domain::{EmailAddress, Role, User, UserName},
        ports::UserDirectory,
        services::{IdentityService, RegisterUserRequest},
    },
    work_order::{
        adapters::memory::InMemoryWorkOrderRepository,
        domain::{CategoryType, WorkOrder},
        services::{CreateWorkOrderRequest, WorkOrderLifecycleService},
    },
};

/// Lifecycle service wired to in-memory adapters.
pub type Lifecycle =
    WorkOrderLifecycleService<InMemoryWorkOrderRepository, InMemoryUserDirectory, DefaultClock>;

/// Services and seeded accounts for one test.
pub struct Agency {
    pub identity: IdentityService<InMemoryUserDirectory, DefaultClock>,
    pub lifecycle: Lifecycle,
    pub dashboard: DashboardService<InMemoryUserDirectory, InMemoryWorkOrderRepository>,
    pub admin: User,
    pub meera: User,
    pub karan: User,
    pub wren: User,
}

/// Builds the services and registers one admin, two marketing users, and a
/// writer.
///
/// # Errors
///
/// Returns an error if seeding the directory fails.
pub async fn agency() -> eyre::Result<Agency> {
    let directory = Arc::new(InMemoryUserDirectory::new());
    let work_orders = Arc::new(InMemoryWorkOrderRepository::new());
    let clock = Arc::new(DefaultClock);

    let admin = User::new(
        UserName::new("Root")?,
        EmailAddress::new("root@example.com")?,
        Role::Admin,
        &DefaultClock,
    );
    directory
        .store(&admin)
        .await
        .wrap_err("bootstrap administrator")?;

    let identity = IdentityService::new(Arc::clone(&directory), Arc::clone(&clock));
    let register = |name: &'static str, role: Role| {
        identity.register_user(
            &admin,
            RegisterUserRequest::new(name, format!("{}@example.com", name.to_lowercase()), role),
        )
    };
    let meera = register("Meera", Role::Marketing).await?;
    let karan = register("Karan", Role::Marketing).await?;
    let wren = register("Wren", Role::Writer).await?;

    Ok(Agency {
        lifecycle: WorkOrderLifecycleService::new(
            Arc::clone(&work_orders),
            Arc::clone(&directory),
            clock,
        ),
        dashboard: DashboardService::new(directory, work_orders),
        identity,
        admin,
        meera,
        karan,
        wren,
    })
}

/// A valid creation request due in `days` days.
#[must_use]
pub fn student_request(days: i64) -> CreateWorkOrderRequest {
    CreateWorkOrderRequest::new(
        1_000,
        200_000,
        CategoryType::Student,
        "Asha",
        "+91 98765 43210",
        Utc::now() + Duration::days(days),
    )
}

/// Creates a student work order owned by `owner`.
///
/// # Errors
///
/// Returns an error if creation fails.
pub async fn create_order(agency: &Agency, owner: &User, days: i64) -> eyre::Result<WorkOrder> {
    agency
        .lifecycle
        .create(owner, student_request(days))
        .await
        .wrap_err("create work order")
}
