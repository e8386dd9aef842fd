//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tasks (code) {
        /// Unique task code chosen by the creator.
        #[max_length = 16]
        code -> Varchar,
        /// Optional free-text summary.
        #[max_length = 2500]
        summary -> Nullable<Varchar>,
        /// Whether the summary must be hidden from non-owners.
        has_sensitive_data -> Bool,
        /// Closing timestamp; null while the task is open.
        closed_date -> Nullable<Timestamptz>,
        /// Owning user identifier.
        user_id -> Uuid,
    }
}
