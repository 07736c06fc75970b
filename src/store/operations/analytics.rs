use deadpool_postgres::Pool;

use crate::models::{
    AnalyticsSummary, LeadSource, LeadStatus, NewEvent, SourceCount, StatusCount,
};
use crate::store::error::{Error, Result};
use crate::store::operations::{leads, products};

/// Event type recorded for dashboard visits
pub const PAGE_VIEW: &str = "page_view";

/// Event type recorded when a lead is created
pub const LEAD_CREATED: &str = "lead_created";

/// Record an analytics event
pub async fn track(pool: &Pool, event: &NewEvent) -> Result<()> {
    let conn = pool.get().await?;
    conn.execute(
        "INSERT INTO analytics_events (event_type, product_id) VALUES ($1, $2)",
        &[&event.event_type, &event.product_id],
    )
    .await?;
    Ok(())
}

/// Leads per hundred visits, rounded to one decimal; 0.0 when there are no visits
pub fn conversion_rate(visits: i64, leads: i64) -> f64 {
    if visits <= 0 {
        return 0.0;
    }
    let rate = (leads as f64 / visits as f64) * 100.0;
    (rate * 10.0).round() / 10.0
}

/// Aggregate the dashboard summary
pub async fn summary(pool: &Pool) -> Result<AnalyticsSummary> {
    let conn = pool.get().await?;
    let row = conn
        .query_one(
            "SELECT COUNT(*) FROM analytics_events WHERE event_type = $1",
            &[&PAGE_VIEW],
        )
        .await?;
    let total_visits: i64 = row.get(0);
    drop(conn);

    let total_leads = leads::count(pool).await?;
    let total_products = products::count(pool).await?;
    let recent_leads = leads::recent(pool, 5).await?;

    let conn = pool.get().await?;
    let rows = conn
        .query(
            "SELECT status, COUNT(*) FROM leads GROUP BY status ORDER BY status",
            &[],
        )
        .await?;
    let leads_by_status = rows
        .iter()
        .map(|row| {
            let status: String = row.try_get(0)?;
            let status = LeadStatus::parse(&status)
                .ok_or_else(|| Error::Corrupt(format!("unknown lead status '{}'", status)))?;
            Ok(StatusCount {
                status,
                count: row.try_get(1)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let rows = conn
        .query(
            "SELECT source, COUNT(*) FROM leads GROUP BY source ORDER BY source",
            &[],
        )
        .await?;
    let leads_by_source = rows
        .iter()
        .map(|row| {
            let source: String = row.try_get(0)?;
            let source = LeadSource::parse(&source)
                .ok_or_else(|| Error::Corrupt(format!("unknown lead source '{}'", source)))?;
            Ok(SourceCount {
                source,
                count: row.try_get(1)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(AnalyticsSummary {
        total_visits,
        total_leads,
        total_products,
        conversion_rate: conversion_rate(total_visits, total_leads),
        recent_leads,
        leads_by_status,
        leads_by_source,
    })
}
