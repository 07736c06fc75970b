//! Table bootstrap
//!
//! The store creates its tables on startup when they are missing. Product
//! references on leads and events are plain nullable columns with no
//! foreign-key constraint; deleting a product leaves them dangling.

use deadpool_postgres::Pool;

use crate::store::error::Result;

const CREATE_TABLES: &str = "
CREATE TABLE IF NOT EXISTS products (
    id              SERIAL PRIMARY KEY,
    name            TEXT NOT NULL,
    name_ar         TEXT,
    description     TEXT,
    description_ar  TEXT,
    price           DOUBLE PRECISION NOT NULL,
    original_price  DOUBLE PRECISION,
    offer           TEXT,
    images          TEXT[],
    status          TEXT NOT NULL DEFAULT 'active',
    created_at      TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at      TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE TABLE IF NOT EXISTS leads (
    id          SERIAL PRIMARY KEY,
    name        TEXT NOT NULL,
    phone       TEXT NOT NULL,
    email       TEXT,
    product_id  INTEGER,
    source      TEXT NOT NULL,
    status      TEXT NOT NULL DEFAULT 'new',
    notes       TEXT,
    created_at  TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at  TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE TABLE IF NOT EXISTS analytics_events (
    id          SERIAL PRIMARY KEY,
    event_type  TEXT NOT NULL,
    product_id  INTEGER,
    created_at  TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

/// Create the store's tables if they do not exist yet
pub async fn init(pool: &Pool) -> Result<()> {
    let conn = pool.get().await?;
    conn.batch_execute(CREATE_TABLES).await?;
    Ok(())
}
