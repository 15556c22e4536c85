//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Task name with directives stripped.
        name -> Text,
        /// Optional free-text description.
        description -> Nullable<Text>,
        /// Optional deadline.
        deadline -> Nullable<Timestamptz>,
        /// Lifecycle status.
        #[max_length = 20]
        status -> Varchar,
        /// Priority level.
        #[max_length = 20]
        priority -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Latest mutation timestamp.
        changed_at -> Nullable<Timestamptz>,
    }
}
