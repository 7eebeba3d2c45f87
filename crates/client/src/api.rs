//! The storefront backend client.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use quikcart_auth::{Credentials, Session};
use quikcart_core::{CartEntry, Product, ProductId};
use quikcart_search::SearchOutcome;

use crate::config::Config;
use crate::error::ApiError;

/// Failure body the backend sends with non-2xx statuses.
#[derive(Debug, Deserialize)]
struct FailureBody {
    #[allow(dead_code)]
    success: bool,
    message: String,
}

/// Successful login body.
#[derive(Debug, Deserialize)]
struct LoginBody {
    token: String,
    username: String,
    balance: u64,
}

/// `POST /cart` request body.
#[derive(Debug, Serialize)]
struct CartUpsert<'a> {
    #[serde(rename = "productId")]
    product_id: &'a ProductId,
    qty: u32,
}

/// JSON-over-HTTP client for the storefront backend.
///
/// One instance per process is enough; `reqwest::Client` pools connections
/// internally. Calls are independent: no ordering is imposed between them,
/// and nothing in flight is ever cancelled, so the last response to arrive
/// wins at the caller.
pub struct StorefrontClient {
    http: reqwest::Client,
    endpoint: String,
}

impl StorefrontClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
        }
    }

    /// `GET /products`: the full catalog.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, ApiError> {
        let url = format!("{}/products", self.endpoint);
        let resp = self.http.get(&url).send().await?;
        let resp = Self::check(resp).await?;
        let products: Vec<Product> = resp.json().await?;
        tracing::debug!(count = products.len(), "fetched catalog");
        Ok(products)
    }

    /// `GET /products/search?value=<query>`.
    ///
    /// Infallible by design: the three failure modes are outcomes the caller
    /// branches on, not errors to propagate.
    pub async fn search_products(&self, query: &str) -> SearchOutcome {
        let url = format!("{}/products/search", self.endpoint);
        let resp = match self.http.get(&url).query(&[("value", query)]).send().await {
            Ok(resp) => resp,
            Err(err) => {
                tracing::warn!(query, error = %err, "search got no response");
                return SearchOutcome::Unreachable;
            }
        };

        match resp.status() {
            StatusCode::NOT_FOUND => SearchOutcome::NotFound,
            status if status.is_success() => match resp.json::<Vec<Product>>().await {
                Ok(products) => SearchOutcome::Results(products),
                Err(err) => {
                    tracing::warn!(query, error = %err, "search response was not valid JSON");
                    SearchOutcome::Unreachable
                }
            },
            _ => SearchOutcome::ServerError(Self::failure_message(resp).await),
        }
    }

    /// `GET /cart`: the server-authoritative cart, bearer-token auth.
    pub async fn fetch_cart(&self, token: &str) -> Result<Vec<CartEntry>, ApiError> {
        let url = format!("{}/cart", self.endpoint);
        let resp = self.http.get(&url).bearer_auth(token).send().await?;
        let resp = Self::check(resp).await?;
        Ok(resp.json().await?)
    }

    /// `POST /cart` with `{productId, qty}`: add a product or set its
    /// quantity. Returns the updated cart list, which replaces the local one
    /// wholesale.
    pub async fn upsert_cart(
        &self,
        token: &str,
        product_id: &ProductId,
        quantity: u32,
    ) -> Result<Vec<CartEntry>, ApiError> {
        let url = format!("{}/cart", self.endpoint);
        let body = CartUpsert {
            product_id,
            qty: quantity,
        };
        let resp = self
            .http
            .post(&url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;
        let resp = Self::check(resp).await?;
        tracing::debug!(product_id = %product_id, quantity, "cart upserted");
        Ok(resp.json().await?)
    }

    /// `POST /auth/register`.
    pub async fn register(&self, credentials: &Credentials) -> Result<(), ApiError> {
        let url = format!("{}/auth/register", self.endpoint);
        let resp = self.http.post(&url).json(credentials).send().await?;
        Self::check(resp).await?;
        Ok(())
    }

    /// `POST /auth/login`: yields the session the rest of the app holds.
    pub async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        let url = format!("{}/auth/login", self.endpoint);
        let resp = self.http.post(&url).json(credentials).send().await?;
        let resp = Self::check(resp).await?;
        let body: LoginBody = resp.json().await?;
        Ok(Session {
            username: body.username,
            token: body.token,
            balance: body.balance,
        })
    }

    /// Map a failure status to the error taxonomy; pass successes through.
    async fn check(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        match status {
            StatusCode::BAD_REQUEST => Err(ApiError::BadRequest(Self::failure_message(resp).await)),
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthenticated),
            StatusCode::NOT_FOUND => Err(ApiError::NotFound),
            _ => Err(ApiError::ServerError(Self::failure_message(resp).await)),
        }
    }

    /// Best-effort extraction of the `{success: false, message}` body.
    async fn failure_message(resp: reqwest::Response) -> String {
        let status = resp.status();
        match resp.json::<FailureBody>().await {
            Ok(body) => body.message,
            Err(_) => format!("unexpected status {status}"),
        }
    }
}
