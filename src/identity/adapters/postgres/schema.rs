//! Diesel schema for user and role lookup.

diesel::table! {
    /// Role reference data.
    user_roles (id) {
        /// Role identifier.
        id -> Uuid,
        /// Role description, for example `Manager`.
        #[max_length = 64]
        description -> Varchar,
    }
}

diesel::table! {
    /// Employees known to the system.
    users (id) {
        /// User identifier.
        id -> Uuid,
        /// Employee number used for lookup.
        #[max_length = 32]
        employee_number -> Varchar,
        /// Display name.
        #[max_length = 255]
        name -> Varchar,
        /// Role assigned to the user.
        user_role_id -> Uuid,
    }
}

diesel::joinable!(users -> user_roles (user_role_id));
diesel::allow_tables_to_appear_in_same_query!(users, user_roles);
