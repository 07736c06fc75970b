use deadpool_postgres::Pool;
use tokio_postgres::Row;

use crate::models::{Lead, LeadSource, LeadStatus, NewLead};
use crate::store::error::{Error, Result};

const LEAD_COLUMNS: &str =
    "id, name, phone, email, product_id, source, status, notes, created_at, updated_at";

pub(crate) fn lead_from_row(row: &Row) -> Result<Lead> {
    let source: String = row.try_get("source")?;
    let source = LeadSource::parse(&source)
        .ok_or_else(|| Error::Corrupt(format!("unknown lead source '{}'", source)))?;

    let status: String = row.try_get("status")?;
    let status = LeadStatus::parse(&status)
        .ok_or_else(|| Error::Corrupt(format!("unknown lead status '{}'", status)))?;

    Ok(Lead {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        phone: row.try_get("phone")?,
        email: row.try_get("email")?,
        product_id: row.try_get("product_id")?,
        source,
        status,
        notes: row.try_get("notes")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

/// List all leads, newest first
pub async fn list(pool: &Pool) -> Result<Vec<Lead>> {
    let conn = pool.get().await?;
    let sql = format!("SELECT {} FROM leads ORDER BY created_at DESC", LEAD_COLUMNS);
    let rows = conn.query(&sql, &[]).await?;
    rows.iter().map(lead_from_row).collect()
}

/// Fetch a single lead by id
pub async fn get(pool: &Pool, id: i32) -> Result<Option<Lead>> {
    let conn = pool.get().await?;
    let sql = format!("SELECT {} FROM leads WHERE id = $1", LEAD_COLUMNS);
    let row = conn.query_opt(&sql, &[&id]).await?;
    row.as_ref().map(lead_from_row).transpose()
}

/// Insert a new lead and return the stored record
pub async fn create(pool: &Pool, data: &NewLead) -> Result<Lead> {
    let conn = pool.get().await?;
    let sql = format!(
        "INSERT INTO leads (name, phone, email, product_id, source, status, notes) \
         VALUES ($1, $2, $3, $4, $5, $6, $7) \
         RETURNING {}",
        LEAD_COLUMNS
    );
    let row = conn
        .query_one(
            &sql,
            &[
                &data.name,
                &data.phone,
                &data.email,
                &data.product_id,
                &data.source.as_str(),
                &data.status.as_str(),
                &data.notes,
            ],
        )
        .await?;
    lead_from_row(&row)
}

/// Replace a lead's fields, bumping `updated_at`
///
/// Returns `None` when the id does not exist.
pub async fn update(pool: &Pool, id: i32, data: &NewLead) -> Result<Option<Lead>> {
    let conn = pool.get().await?;
    let sql = format!(
        "UPDATE leads SET \
         name = $1, phone = $2, email = $3, product_id = $4, source = $5, status = $6, \
         notes = $7, updated_at = now() \
         WHERE id = $8 \
         RETURNING {}",
        LEAD_COLUMNS
    );
    let row = conn
        .query_opt(
            &sql,
            &[
                &data.name,
                &data.phone,
                &data.email,
                &data.product_id,
                &data.source.as_str(),
                &data.status.as_str(),
                &data.notes,
                &id,
            ],
        )
        .await?;
    row.as_ref().map(lead_from_row).transpose()
}

/// Delete a lead; deleting a missing id is not an error
pub async fn delete(pool: &Pool, id: i32) -> Result<()> {
    let conn = pool.get().await?;
    conn.execute("DELETE FROM leads WHERE id = $1", &[&id])
        .await?;
    Ok(())
}

/// Count all leads
pub async fn count(pool: &Pool) -> Result<i64> {
    let conn = pool.get().await?;
    let row = conn.query_one("SELECT COUNT(*) FROM leads", &[]).await?;
    Ok(row.get(0))
}

/// The five most recently created leads
pub async fn recent(pool: &Pool, limit: i64) -> Result<Vec<Lead>> {
    let conn = pool.get().await?;
    let sql = format!(
        "SELECT {} FROM leads ORDER BY created_at DESC LIMIT $1",
        LEAD_COLUMNS
    );
    let rows = conn.query(&sql, &[&limit]).await?;
    rows.iter().map(lead_from_row).collect()
}
