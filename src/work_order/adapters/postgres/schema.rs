//! Diesel schema for work order persistence.

diesel::table! {
    /// Work orders and their lifecycle state.
    work_orders (id) {
        /// Work order identifier.
        id -> Uuid,
        /// Human-readable work code; unique.
        #[max_length = 32]
        work_code -> Varchar,
        /// Owning marketing user.
        marketing_person_id -> Uuid,
        /// Category discriminant in canonical string form.
        #[max_length = 20]
        category_type -> Varchar,
        /// Free-text description of an `other` category.
        other_description -> Nullable<Text>,
        /// Number of words to write.
        word_count -> Int4,
        /// Price in paise.
        price_in_paise -> Int8,
        /// Client name.
        #[max_length = 255]
        client_name -> Varchar,
        /// Client phone number.
        #[max_length = 32]
        client_phone -> Varchar,
        /// Delivery deadline.
        deadline -> Timestamptz,
        /// Lifecycle status in canonical string form.
        #[max_length = 20]
        status -> Varchar,
        /// Reason recorded at cancellation.
        marketing_cancel_reason -> Nullable<Text>,
        /// Open writer query.
        writer_query -> Nullable<Text>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
