// /api/analytics handlers

use std::convert::Infallible;

use warp::http::StatusCode;
use warp::reply::{Reply, Response};

use crate::handlers::{error_reply, json_with_status};
use crate::models::NewEvent;
use crate::store::Store;

pub async fn get_summary(store: Store) -> Result<Response, Infallible> {
    match store.analytics_summary().await {
        Ok(summary) => Ok(json_with_status(&summary, StatusCode::OK).into_response()),
        Err(e) => {
            tracing::error!(error = %e, "error fetching analytics");
            Ok(
                error_reply(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch analytics")
                    .into_response(),
            )
        }
    }
}

pub async fn track_event(event: NewEvent, store: Store) -> Result<Response, Infallible> {
    match store.track(&event).await {
        Ok(()) => Ok(json_with_status(
            &serde_json::json!({ "success": true }),
            StatusCode::CREATED,
        )
        .into_response()),
        Err(e) => {
            tracing::error!(error = %e, "error tracking event");
            Ok(
                error_reply(StatusCode::INTERNAL_SERVER_ERROR, "Failed to track event")
                    .into_response(),
            )
        }
    }
}
