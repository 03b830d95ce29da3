//! Adapter wiring and seeded records for `PostgreSQL` integration tests.

pub use super::cluster::{BoxError, PostgresCluster, TemporaryDatabase, postgres_cluster};
use chrono::{DateTime, Duration, Utc};
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use eyre::eyre;
use scrivener::identity::{
    adapters::postgres::PostgresUserDirectory,
    domain::{EmailAddress, PersistedUserData, Role, User, UserId, UserName},
    ports::UserDirectory,
};
use scrivener::work_order::{
    adapters::postgres::PostgresWorkOrderRepository,
    domain::{
        ClientContact, PersistedWorkOrderData, PriceInRs, WordCount, WorkCategory, WorkCode,
        WorkOrder, WorkOrderId, WorkStatus,
    },
};
use std::sync::Arc;

/// SQL creating the `users` table.
pub const CREATE_USERS_SQL: &str =
    include_str!("../../migrations/2026-01-05-000000_create_users/up.sql");

/// SQL creating the `work_orders` table.
pub const CREATE_WORK_ORDERS_SQL: &str =
    include_str!("../../migrations/2026-01-05-000001_create_work_orders/up.sql");

/// Template database name for the pre-migrated schema.
pub const TEMPLATE_DB: &str = "scrivener_test_template";

/// 2030-03-17T17:46:40Z; seeded records are placed relative to it.
const BASE_TIMESTAMP: i64 = 1_900_000_000;

/// Both adapters over one freshly migrated database.
///
/// `database` is declared last so the pools close before it is dropped.
pub struct PostgresAgency {
    /// User directory under test.
    pub directory: Arc<PostgresUserDirectory>,
    /// Work order repository under test.
    pub repository: Arc<PostgresWorkOrderRepository>,
    /// Temporary database backing both adapters.
    pub database: TemporaryDatabase,
}

/// Migrates the template if needed and wires both adapters to a copy of it.
///
/// # Errors
///
/// Returns an error if template creation, database setup or pool
/// construction fails.
pub fn postgres_agency(cluster: PostgresCluster) -> eyre::Result<PostgresAgency> {
    cluster
        .ensure_template(TEMPLATE_DB, apply_migrations)
        .map_err(|err| eyre!(err))?;
    let database = cluster
        .temporary_database(TEMPLATE_DB)
        .map_err(|err| eyre!(err))?;

    let manager = ConnectionManager::<PgConnection>::new(database.url());
    let pool = Pool::builder().max_size(2).build(manager)?;
    Ok(PostgresAgency {
        directory: Arc::new(PostgresUserDirectory::new(pool.clone())),
        repository: Arc::new(PostgresWorkOrderRepository::new(pool)),
        database,
    })
}

fn apply_migrations(url: &str) -> Result<(), BoxError> {
    let mut conn = PgConnection::establish(url)?;
    conn.batch_execute(CREATE_USERS_SQL)?;
    conn.batch_execute(CREATE_WORK_ORDERS_SQL)?;
    Ok(())
}

/// Timestamp `minutes` after the seed base, at whole-second precision so it
/// survives a `timestamptz` round trip unchanged.
///
/// # Errors
///
/// Returns an error if the offset leaves chrono's range.
pub fn at(minutes: i64) -> eyre::Result<DateTime<Utc>> {
    DateTime::from_timestamp(BASE_TIMESTAMP, 0)
        .map(|base| base + Duration::minutes(minutes))
        .ok_or_else(|| eyre!("seed timestamp out of range"))
}

/// Builds a user registered at `at(minute)`.
///
/// # Errors
///
/// Returns an error if the name or email is invalid.
pub fn seeded_user(name: &str, role: Role, minute: i64) -> eyre::Result<User> {
    let registered_at = at(minute)?;
    Ok(User::from_persisted(PersistedUserData {
        id: UserId::new(),
        name: UserName::new(name)?,
        email: EmailAddress::new(format!("{name}@example.com"))?,
        role,
        is_active: true,
        created_at: registered_at,
        updated_at: registered_at,
    }))
}

/// Builds and stores an active marketing user who can own work orders.
///
/// # Errors
///
/// Returns an error if the user is invalid or cannot be stored.
pub async fn stored_marketing_user(agency: &PostgresAgency, name: &str) -> eyre::Result<User> {
    let user = seeded_user(name, Role::Marketing, 0)?;
    agency.directory.store(&user).await?;
    Ok(user)
}

/// Builds a work order with the side fields its status implies.
///
/// # Errors
///
/// Returns an error if a seeded scalar is invalid.
pub fn seeded_order(
    owner: UserId,
    category: WorkCategory,
    status: WorkStatus,
    deadline: DateTime<Utc>,
    created_at: DateTime<Utc>,
) -> eyre::Result<WorkOrder> {
    let id = WorkOrderId::new();
    Ok(WorkOrder::from_persisted(PersistedWorkOrderData {
        id,
        work_code: WorkCode::generate(id, created_at),
        marketing_person_id: owner,
        category,
        word_count: WordCount::new(1_500)?,
        price: PriceInRs::from_paise(450_000)?,
        client: ClientContact::new("Asha", "+91 98765 43210")?,
        deadline,
        status,
        marketing_cancel_reason: (status == WorkStatus::Cancelled)
            .then(|| "Client withdrew".to_owned()),
        writer_query: (status == WorkStatus::HasQuery).then(|| "Which tone?".to_owned()),
        created_at,
        updated_at: created_at,
    }))
}
