//! `PostgreSQL` repository implementation for work order storage.

use super::{
    models::{NewWorkOrderRow, WorkOrderChangeset, WorkOrderRow},
    schema::work_orders,
};
use crate::identity::domain::UserId;
use crate::work_order::{
    domain::{
        CategoryType, ClientContact, PersistedWorkOrderData, PriceInRs, WordCount, WorkCategory,
        WorkCode, WorkOrder, WorkOrderFilter, WorkOrderId, WorkStatus,
    },
    ports::{WorkOrderRepository, WorkOrderRepositoryError, WorkOrderRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by work order adapters.
pub type WorkOrderPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed work order repository.
#[derive(Debug, Clone)]
pub struct PostgresWorkOrderRepository {
    pool: WorkOrderPgPool,
}

impl PostgresWorkOrderRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: WorkOrderPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> WorkOrderRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> WorkOrderRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(WorkOrderRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(WorkOrderRepositoryError::persistence)?
    }
}

#[async_trait]
impl WorkOrderRepository for PostgresWorkOrderRepository {
    async fn store(&self, order: &WorkOrder) -> WorkOrderRepositoryResult<()> {
        let work_order_id = order.id();
        let work_code = order.work_code().clone();
        let new_row = to_new_row(order)?;

        self.run_blocking(move |connection| {
            diesel::insert_into(work_orders::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
                        if is_work_code_unique_violation(info.as_ref()) =>
                    {
                        WorkOrderRepositoryError::DuplicateWorkCode(work_code.clone())
                    }
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        WorkOrderRepositoryError::DuplicateWorkOrder(work_order_id)
                    }
                    _ => WorkOrderRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, order: &WorkOrder) -> WorkOrderRepositoryResult<()> {
        let work_order_id = order.id();
        let changeset = WorkOrderChangeset::from(to_new_row(order)?);

        self.run_blocking(move |connection| {
            let updated_count = diesel::update(
                work_orders::table.filter(work_orders::id.eq(work_order_id.into_inner())),
            )
            .set(&changeset)
            .execute(connection)
            .map_err(WorkOrderRepositoryError::persistence)?;

            if updated_count == 0 {
                return Err(WorkOrderRepositoryError::NotFound(work_order_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: WorkOrderId) -> WorkOrderRepositoryResult<Option<WorkOrder>> {
        self.run_blocking(move |connection| {
            let row = work_orders::table
                .filter(work_orders::id.eq(id.into_inner()))
                .select(WorkOrderRow::as_select())
                .first::<WorkOrderRow>(connection)
                .optional()
                .map_err(WorkOrderRepositoryError::persistence)?;
            row.map(row_to_work_order).transpose()
        })
        .await
    }

    async fn list(&self, filter: &WorkOrderFilter) -> WorkOrderRepositoryResult<Vec<WorkOrder>> {
        let predicates = *filter;
        self.run_blocking(move |connection| {
            let mut query = work_orders::table
                .select(WorkOrderRow::as_select())
                .into_boxed();
            if let Some(status) = predicates.status() {
                query = query.filter(work_orders::status.eq(status.as_str()));
            }
            if let Some(owner) = predicates.marketing_person() {
                query = query.filter(work_orders::marketing_person_id.eq(owner.into_inner()));
            }
            if let Some(category) = predicates.category() {
                query = query.filter(work_orders::category_type.eq(category.as_str()));
            }
            if let Some(from) = predicates.deadline_from() {
                query = query.filter(work_orders::deadline.ge(from));
            }
            if let Some(to) = predicates.deadline_to() {
                query = query.filter(work_orders::deadline.le(to));
            }

            let rows = query
                .order((work_orders::created_at.asc(), work_orders::id.asc()))
                .load::<WorkOrderRow>(connection)
                .map_err(WorkOrderRepositoryError::persistence)?;
            rows.into_iter().map(row_to_work_order).collect()
        })
        .await
    }

    async fn count(&self) -> WorkOrderRepositoryResult<u64> {
        self.run_blocking(move |connection| {
            let total = work_orders::table
                .count()
                .get_result::<i64>(connection)
                .map_err(WorkOrderRepositoryError::persistence)?;
            u64::try_from(total).map_err(WorkOrderRepositoryError::persistence)
        })
        .await
    }

    async fn delete(&self, id: WorkOrderId) -> WorkOrderRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted_count =
                diesel::delete(work_orders::table.filter(work_orders::id.eq(id.into_inner())))
                    .execute(connection)
                    .map_err(WorkOrderRepositoryError::persistence)?;
            if deleted_count == 0 {
                return Err(WorkOrderRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn to_new_row(order: &WorkOrder) -> WorkOrderRepositoryResult<NewWorkOrderRow> {
    let word_count =
        i32::try_from(order.word_count().value()).map_err(WorkOrderRepositoryError::persistence)?;
    let price_in_paise =
        i64::try_from(order.price().paise()).map_err(WorkOrderRepositoryError::persistence)?;

    Ok(NewWorkOrderRow {
        id: order.id().into_inner(),
        work_code: order.work_code().as_str().to_owned(),
        marketing_person_id: order.marketing_person_id().into_inner(),
        category_type: order.category().kind().as_str().to_owned(),
        other_description: order.category().other_description().map(str::to_owned),
        word_count,
        price_in_paise,
        client_name: order.client().name().to_owned(),
        client_phone: order.client().phone().to_owned(),
        deadline: order.deadline(),
        status: order.status().as_str().to_owned(),
        marketing_cancel_reason: order.marketing_cancel_reason().map(str::to_owned),
        writer_query: order.writer_query().map(str::to_owned),
        created_at: order.created_at(),
        updated_at: order.updated_at(),
    })
}

fn row_to_work_order(row: WorkOrderRow) -> WorkOrderRepositoryResult<WorkOrder> {
    let WorkOrderRow {
        id,
        work_code,
        marketing_person_id,
        category_type,
        other_description,
        word_count: persisted_word_count,
        price_in_paise: persisted_price,
        client_name,
        client_phone,
        deadline,
        status: persisted_status,
        marketing_cancel_reason,
        writer_query,
        created_at,
        updated_at,
    } = row;

    let kind = CategoryType::try_from(category_type.as_str())
        .map_err(WorkOrderRepositoryError::persistence)?;
    let category = WorkCategory::from_parts(kind, other_description)
        .map_err(WorkOrderRepositoryError::persistence)?;
    let word_count =
        u32::try_from(persisted_word_count).map_err(WorkOrderRepositoryError::persistence)?;
    let price_in_paise =
        u64::try_from(persisted_price).map_err(WorkOrderRepositoryError::persistence)?;
    let status = WorkStatus::try_from(persisted_status.as_str())
        .map_err(WorkOrderRepositoryError::persistence)?;

    let data = PersistedWorkOrderData {
        id: WorkOrderId::from_uuid(id),
        work_code: WorkCode::from_persisted(work_code),
        marketing_person_id: UserId::from_uuid(marketing_person_id),
        category,
        word_count: WordCount::new(word_count).map_err(WorkOrderRepositoryError::persistence)?,
        price: PriceInRs::from_paise(price_in_paise)
            .map_err(WorkOrderRepositoryError::persistence)?,
        client: ClientContact::new(client_name, client_phone)
            .map_err(WorkOrderRepositoryError::persistence)?,
        deadline,
        status,
        marketing_cancel_reason,
        writer_query,
        created_at,
        updated_at,
    };
    Ok(WorkOrder::from_persisted(data))
}

fn is_work_code_unique_violation(info: &dyn DatabaseErrorInformation) -> bool {
    info.constraint_name()
        .is_some_and(|name| name == "work_orders_work_code_key")
}
