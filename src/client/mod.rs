//! Typed client for the TagerPro API
//!
//! The Rust counterpart of the mobile app's data layer: request/response
//! calls for the CRUD and analytics surface, and a streaming consumer for
//! the generation endpoints (`stream`/`session`).

mod session;
mod stream;

pub use session::GenerationSession;
pub use stream::{read_events, GenerationEvent, GenerationStream};

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::models::{AnalyticsSummary, Lead, NewEvent, NewLead, NewProduct, Product};
use crate::prompt::GenerationRequest;

/// Errors raised by the API client
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server replied with a non-success status
    #[error("HTTP error (status {status}): {body}")]
    Http { status: u16, body: String },

    /// The requested record does not exist
    #[error("not found")]
    NotFound,

    /// Connection or protocol failure
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Client for a TagerPro backend
///
/// # Example
///
/// ```no_run
/// use tagerpro::client::ApiClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = ApiClient::new("http://localhost:3030")?;
///     let products = client.products().await?;
///     println!("{} products", products.len());
///     Ok(())
/// }
/// ```
pub struct ApiClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the backend at `base_url`
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http_client = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(5))
            .build()?;

        let base_url: String = base_url.into();
        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Map a non-success status to an error, reading the body for context
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Http {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self.http_client.get(self.url(path)).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let response = self
            .http_client
            .post(self.url(path))
            .json(body)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let response = self
            .http_client
            .put(self.url(path))
            .json(body)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn delete(&self, path: &str) -> Result<(), ClientError> {
        let response = self.http_client.delete(self.url(path)).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    /// List all products
    pub async fn products(&self) -> Result<Vec<Product>, ClientError> {
        self.get_json("/api/products").await
    }

    /// Fetch one product
    pub async fn product(&self, id: i32) -> Result<Product, ClientError> {
        self.get_json(&format!("/api/products/{}", id)).await
    }

    /// Create a product
    pub async fn create_product(&self, data: &NewProduct) -> Result<Product, ClientError> {
        self.post_json("/api/products", data).await
    }

    /// Replace a product
    pub async fn update_product(&self, id: i32, data: &NewProduct) -> Result<Product, ClientError> {
        self.put_json(&format!("/api/products/{}", id), data).await
    }

    /// Delete a product
    pub async fn delete_product(&self, id: i32) -> Result<(), ClientError> {
        self.delete(&format!("/api/products/{}", id)).await
    }

    /// List all leads
    pub async fn leads(&self) -> Result<Vec<Lead>, ClientError> {
        self.get_json("/api/leads").await
    }

    /// Fetch one lead
    pub async fn lead(&self, id: i32) -> Result<Lead, ClientError> {
        self.get_json(&format!("/api/leads/{}", id)).await
    }

    /// Create a lead
    pub async fn create_lead(&self, data: &NewLead) -> Result<Lead, ClientError> {
        self.post_json("/api/leads", data).await
    }

    /// Replace a lead
    pub async fn update_lead(&self, id: i32, data: &NewLead) -> Result<Lead, ClientError> {
        self.put_json(&format!("/api/leads/{}", id), data).await
    }

    /// Delete a lead
    pub async fn delete_lead(&self, id: i32) -> Result<(), ClientError> {
        self.delete(&format!("/api/leads/{}", id)).await
    }

    /// Fetch the dashboard summary
    pub async fn analytics_summary(&self) -> Result<AnalyticsSummary, ClientError> {
        self.get_json("/api/analytics").await
    }

    /// Record an analytics event
    pub async fn track(&self, event: &NewEvent) -> Result<(), ClientError> {
        let _: serde_json::Value = self.post_json("/api/analytics/track", event).await?;
        Ok(())
    }

    /// Start a generation and stream accumulated-text updates
    ///
    /// A connect failure or a non-success status before streaming returns
    /// `Err` — exactly one terminal failure, zero update events. Pair the
    /// returned stream with a [`GenerationSession`] to get
    /// cancel-before-start semantics.
    pub async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationStream, ClientError> {
        let mut body = serde_json::Map::new();
        for (name, value) in &request.fields {
            body.insert(name.clone(), serde_json::Value::String(value.clone()));
        }
        body.insert(
            "language".to_string(),
            serde_json::Value::String(request.language.as_str().to_string()),
        );

        let response = self
            .http_client
            .post(self.url(request.tool.endpoint()))
            .header("Accept", "text/event-stream")
            .json(&serde_json::Value::Object(body))
            .send()
            .await?;
        let response = Self::check(response).await?;

        Ok(stream::read_events(response.bytes_stream()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::{GenerationTool, Language};

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ApiClient::new("http://localhost:3030/").unwrap();
        assert_eq!(client.url("/api/products"), "http://localhost:3030/api/products");
    }

    #[tokio::test]
    async fn test_generate_connect_failure_is_terminal() {
        // Nothing listens on this port; the failure must surface as a
        // single Err before any update event exists
        let client = ApiClient::new("http://127.0.0.1:9").unwrap();
        let request = GenerationRequest::new(GenerationTool::Description, Language::En)
            .field("productName", "Mug");

        let result = client.generate(request).await;
        assert!(matches!(result, Err(ClientError::Transport(_))));
    }
}
