//! Diesel table definitions.
//!
//! Mirrors `backend/migrations`. Internal to the persistence adapter.

diesel::table! {
    /// Stored events with their derived flags and lifecycle status.
    events (id) {
        /// Serial primary key.
        id -> Int4,
        name -> Text,
        description -> Text,
        begin_enrollment_date_time -> Timestamp,
        close_enrollment_date_time -> Timestamp,
        begin_event_date_time -> Timestamp,
        end_event_date_time -> Timestamp,
        /// Venue; NULL for online events.
        location -> Nullable<Text>,
        base_price -> Int4,
        max_price -> Int4,
        limit_of_enrollment -> Int4,
        offline -> Bool,
        free -> Bool,
        /// One of the SCREAMING_SNAKE_CASE status names.
        event_status -> Text,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Login accounts.
    accounts (id) {
        /// Serial primary key.
        id -> Int4,
        /// Normalised (lower-case) address, unique.
        email -> Text,
        /// `sha256$<salt>$<digest>` encoded hash.
        password_hash -> Text,
        roles -> Array<Text>,
        created_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(events, accounts);
