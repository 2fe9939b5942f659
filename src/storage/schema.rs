// Table definitions mirror migrations/2026-08-06-000001_create_dashboard_tables.
// Regenerate with `diesel print-schema --database-url=$DATABASE_URL` after
// editing migrations.

diesel::table! {
    users (id) {
        id -> Varchar,
        email -> Nullable<Varchar>,
        display_name -> Nullable<Varchar>,
        avatar_url -> Nullable<Varchar>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    stock_data (id) {
        id -> Uuid,
        symbol -> Varchar,
        name -> Varchar,
        price -> Float8,
        change -> Float8,
        change_percent -> Float8,
        volume -> Int8,
        market_cap -> Nullable<Float8>,
        sector -> Nullable<Varchar>,
        last_updated -> Timestamptz,
    }
}

diesel::table! {
    watchlist_items (id) {
        id -> Uuid,
        user_id -> Varchar,
        symbol -> Varchar,
        name -> Varchar,
        sector -> Nullable<Varchar>,
        added_at -> Timestamptz,
    }
}

diesel::joinable!(watchlist_items -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(users, stock_data, watchlist_items);
