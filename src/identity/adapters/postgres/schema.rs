//! Diesel schema for user persistence.

diesel::table! {
    /// User accounts.
    users (id) {
        /// User identifier.
        id -> Uuid,
        /// Display name.
        #[max_length = 255]
        name -> Varchar,
        /// Lower-cased login email; unique.
        #[max_length = 320]
        email -> Varchar,
        /// Role in canonical string form.
        #[max_length = 20]
        role -> Varchar,
        /// Whether the account may act.
        is_active -> Bool,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
