// /api/products handlers

use std::convert::Infallible;

use warp::http::StatusCode;
use warp::reply::{Reply, Response};

use crate::handlers::{error_reply, json_with_status};
use crate::models::NewProduct;
use crate::store::Store;

pub async fn list_products(store: Store) -> Result<Response, Infallible> {
    match store.products().await {
        Ok(products) => Ok(json_with_status(&products, StatusCode::OK).into_response()),
        Err(e) => {
            tracing::error!(error = %e, "error fetching products");
            Ok(
                error_reply(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch products")
                    .into_response(),
            )
        }
    }
}

pub async fn get_product(id: i32, store: Store) -> Result<Response, Infallible> {
    match store.product(id).await {
        Ok(Some(product)) => Ok(json_with_status(&product, StatusCode::OK).into_response()),
        Ok(None) => Ok(error_reply(StatusCode::NOT_FOUND, "Product not found").into_response()),
        Err(e) => {
            tracing::error!(error = %e, id, "error fetching product");
            Ok(
                error_reply(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch product")
                    .into_response(),
            )
        }
    }
}

pub async fn create_product(data: NewProduct, store: Store) -> Result<Response, Infallible> {
    match store.create_product(&data).await {
        Ok(product) => Ok(json_with_status(&product, StatusCode::CREATED).into_response()),
        Err(e) => {
            tracing::error!(error = %e, "error creating product");
            Ok(
                error_reply(StatusCode::INTERNAL_SERVER_ERROR, "Failed to create product")
                    .into_response(),
            )
        }
    }
}

pub async fn update_product(
    id: i32,
    data: NewProduct,
    store: Store,
) -> Result<Response, Infallible> {
    match store.update_product(id, &data).await {
        Ok(Some(product)) => Ok(json_with_status(&product, StatusCode::OK).into_response()),
        Ok(None) => Ok(error_reply(StatusCode::NOT_FOUND, "Product not found").into_response()),
        Err(e) => {
            tracing::error!(error = %e, id, "error updating product");
            Ok(
                error_reply(StatusCode::INTERNAL_SERVER_ERROR, "Failed to update product")
                    .into_response(),
            )
        }
    }
}

pub async fn delete_product(id: i32, store: Store) -> Result<Response, Infallible> {
    match store.delete_product(id).await {
        Ok(()) => Ok(
            warp::reply::with_status(warp::reply::reply(), StatusCode::NO_CONTENT).into_response(),
        ),
        Err(e) => {
            tracing::error!(error = %e, id, "error deleting product");
            Ok(
                error_reply(StatusCode::INTERNAL_SERVER_ERROR, "Failed to delete product")
                    .into_response(),
            )
        }
    }
}
