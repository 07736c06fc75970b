// /api/leads handlers

use std::convert::Infallible;

use warp::http::StatusCode;
use warp::reply::{Reply, Response};

use crate::handlers::{error_reply, json_with_status};
use crate::models::NewLead;
use crate::store::Store;

pub async fn list_leads(store: Store) -> Result<Response, Infallible> {
    match store.leads().await {
        Ok(leads) => Ok(json_with_status(&leads, StatusCode::OK).into_response()),
        Err(e) => {
            tracing::error!(error = %e, "error fetching leads");
            Ok(
                error_reply(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch leads")
                    .into_response(),
            )
        }
    }
}

pub async fn get_lead(id: i32, store: Store) -> Result<Response, Infallible> {
    match store.lead(id).await {
        Ok(Some(lead)) => Ok(json_with_status(&lead, StatusCode::OK).into_response()),
        Ok(None) => Ok(error_reply(StatusCode::NOT_FOUND, "Lead not found").into_response()),
        Err(e) => {
            tracing::error!(error = %e, id, "error fetching lead");
            Ok(
                error_reply(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch lead")
                    .into_response(),
            )
        }
    }
}

pub async fn create_lead(data: NewLead, store: Store) -> Result<Response, Infallible> {
    match store.create_lead(&data).await {
        Ok(lead) => Ok(json_with_status(&lead, StatusCode::CREATED).into_response()),
        Err(e) => {
            tracing::error!(error = %e, "error creating lead");
            Ok(
                error_reply(StatusCode::INTERNAL_SERVER_ERROR, "Failed to create lead")
                    .into_response(),
            )
        }
    }
}

pub async fn update_lead(id: i32, data: NewLead, store: Store) -> Result<Response, Infallible> {
    match store.update_lead(id, &data).await {
        Ok(Some(lead)) => Ok(json_with_status(&lead, StatusCode::OK).into_response()),
        Ok(None) => Ok(error_reply(StatusCode::NOT_FOUND, "Lead not found").into_response()),
        Err(e) => {
            tracing::error!(error = %e, id, "error updating lead");
            Ok(
                error_reply(StatusCode::INTERNAL_SERVER_ERROR, "Failed to update lead")
                    .into_response(),
            )
        }
    }
}

pub async fn delete_lead(id: i32, store: Store) -> Result<Response, Infallible> {
    match store.delete_lead(id).await {
        Ok(()) => Ok(
            warp::reply::with_status(warp::reply::reply(), StatusCode::NO_CONTENT).into_response(),
        ),
        Err(e) => {
            tracing::error!(error = %e, id, "error deleting lead");
            Ok(
                error_reply(StatusCode::INTERNAL_SERVER_ERROR, "Failed to delete lead")
                    .into_response(),
            )
        }
    }
}
