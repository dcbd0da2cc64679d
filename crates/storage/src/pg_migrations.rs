//! PostgreSQL schema migrations for carpatlas storage.

use anyhow::Result;
use sqlx::PgPool;

/// Run all PostgreSQL migrations. Every statement is idempotent.
pub async fn run_pg_migrations(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS locations (
            id BIGSERIAL PRIMARY KEY,
            canonical_name TEXT NOT NULL,
            latitude DOUBLE PRECISION,
            longitude DOUBLE PRECISION,
            elevation DOUBLE PRECISION,
            location_type TEXT,
            description TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            CHECK ((latitude IS NULL) = (longitude IS NULL))
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS location_names (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL CHECK (btrim(name) <> ''),
            location_id BIGINT NOT NULL REFERENCES locations (id),
            UNIQUE (name, location_id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_location_names_name ON location_names (name)")
        .execute(pool)
        .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_location_names_location ON location_names (location_id)",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS routes (
            id BIGSERIAL PRIMARY KEY,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS route_stops (
            route_id BIGINT NOT NULL REFERENCES routes (id),
            stop_index INTEGER NOT NULL CHECK (stop_index >= 0),
            location_id BIGINT NOT NULL REFERENCES locations (id),
            display_name TEXT,
            PRIMARY KEY (route_id, stop_index)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS reports (
            id BIGSERIAL PRIMARY KEY,
            title TEXT NOT NULL,
            author TEXT NOT NULL,
            trip_type TEXT NOT NULL,
            difficulty TEXT,
            season TEXT NOT NULL,
            year INTEGER NOT NULL,
            url TEXT NOT NULL,
            file_url TEXT,
            route_id BIGINT NOT NULL REFERENCES routes (id),
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            UNIQUE (title, author, year, url)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS location_difficulties (
            id BIGSERIAL PRIMARY KEY,
            location_id BIGINT NOT NULL REFERENCES locations (id),
            difficulty TEXT NOT NULL,
            season TEXT NOT NULL,
            report_id BIGINT NOT NULL REFERENCES reports (id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_location_difficulties_location
             ON location_difficulties (location_id)",
    )
    .execute(pool)
    .await?;

    tracing::debug!("PostgreSQL migrations applied");
    Ok(())
}
