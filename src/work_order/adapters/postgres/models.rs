//! Diesel row models for work order persistence.

use super::schema::work_orders;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for work order records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = work_orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct WorkOrderRow {
    /// Work order identifier.
    pub id: uuid::Uuid,
    /// Human-readable work code.
    pub work_code: String,
    /// Owning marketing user.
    pub marketing_person_id: uuid::Uuid,
    /// Category discriminant.
    pub category_type: String,
    /// Description of an `other` category.
    pub other_description: Option<String>,
    /// Number of words to write.
    pub word_count: i32,
    /// Price in paise.
    pub price_in_paise: i64,
    /// Client name.
    pub client_name: String,
    /// Client phone number.
    pub client_phone: String,
    /// Delivery deadline.
    pub deadline: DateTime<Utc>,
    /// Lifecycle status.
    pub status: String,
    /// Reason recorded at cancellation.
    pub marketing_cancel_reason: Option<String>,
    /// Open writer query.
    pub writer_query: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for work order records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = work_orders)]
pub struct NewWorkOrderRow {
    /// Work order identifier.
    pub id: uuid::Uuid,
    /// Human-readable work code.
    pub work_code: String,
    /// Owning marketing user.
    pub marketing_person_id: uuid::Uuid,
    /// Category discriminant.
    pub category_type: String,
    /// Description of an `other` category.
    pub other_description: Option<String>,
    /// Number of words to write.
    pub word_count: i32,
    /// Price in paise.
    pub price_in_paise: i64,
    /// Client name.
    pub client_name: String,
    /// Client phone number.
    pub client_phone: String,
    /// Delivery deadline.
    pub deadline: DateTime<Utc>,
    /// Lifecycle status.
    pub status: String,
    /// Reason recorded at cancellation.
    pub marketing_cancel_reason: Option<String>,
    /// Open writer query.
    pub writer_query: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Full-record changeset; `None` clears nullable columns.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = work_orders)]
#[diesel(treat_none_as_null = true)]
pub struct WorkOrderChangeset {
    /// Owning marketing user.
    pub marketing_person_id: uuid::Uuid,
    /// Category discriminant.
    pub category_type: String,
    /// Description of an `other` category.
    pub other_description: Option<String>,
    /// Number of words to write.
    pub word_count: i32,
    /// Price in paise.
    pub price_in_paise: i64,
    /// Client name.
    pub client_name: String,
    /// Client phone number.
    pub client_phone: String,
    /// Delivery deadline.
    pub deadline: DateTime<Utc>,
    /// Lifecycle status.
    pub status: String,
    /// Reason recorded at cancellation.
    pub marketing_cancel_reason: Option<String>,
    /// Open writer query.
    pub writer_query: Option<String>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<NewWorkOrderRow> for WorkOrderChangeset {
    fn from(row: NewWorkOrderRow) -> Self {
        Self {
            marketing_person_id: row.marketing_person_id,
            category_type: row.category_type,
            other_description: row.other_description,
            word_count: row.word_count,
            price_in_paise: row.price_in_paise,
            client_name: row.client_name,
            client_phone: row.client_phone,
            deadline: row.deadline,
            status: row.status,
            marketing_cancel_reason: row.marketing_cancel_reason,
            writer_query: row.writer_query,
            updated_at: row.updated_at,
        }
    }
}
