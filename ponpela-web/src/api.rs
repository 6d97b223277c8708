//! Client for the remote product API.
use crate::dom;
use ponpela_core::Product;
use ponpela_core::constants::DEFAULT_SHOP_API;
use serde_json::Value;
use thiserror::Error;
use web_sys::Response;

#[derive(Debug, Error)]
pub enum ShopError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("invalid product payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Fetches products from the store endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopClient {
    base: String,
}

impl Default for ShopClient {
    fn default() -> Self {
        Self::new(option_env!("PONPELA_SHOP_API").unwrap_or(DEFAULT_SHOP_API))
    }
}

impl ShopClient {
    #[must_use]
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn products_url(&self) -> &str {
        &self.base
    }

    #[must_use]
    pub fn product_url(&self, id: u64) -> String {
        format!("{}/product/{id}", self.base)
    }

    /// Fetch the full product collection.
    ///
    /// # Errors
    /// Returns [`ShopError`] when the request fails, the server answers with a
    /// non-success status, or the body is not a JSON array.
    #[allow(clippy::future_not_send)]
    pub async fn fetch_products(&self) -> Result<Vec<Product>, ShopError> {
        log::info!("fetching products from {}", self.base);
        let text = get_text(&self.base).await?;
        let products = decode_products(&text)?;
        log::info!("received {} products", products.len());
        Ok(products)
    }

    /// Fetch a single product.
    ///
    /// # Errors
    /// Returns [`ShopError`] on request, status or decode failure.
    #[allow(clippy::future_not_send)]
    pub async fn fetch_product(&self, id: u64) -> Result<Product, ShopError> {
        let text = get_text(&self.product_url(id)).await?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[allow(clippy::future_not_send)]
async fn get_text(url: &str) -> Result<String, ShopError> {
    let response: Response = dom::fetch_response(url)
        .await
        .map_err(|err| ShopError::Network(dom::js_error_message(&err)))?;
    if !response.ok() {
        return Err(ShopError::Status(response.status()));
    }
    dom::response_text(&response)
        .await
        .map_err(|err| ShopError::Network(dom::js_error_message(&err)))
}

/// Decode a product array, skipping entries that do not describe a product.
///
/// # Errors
/// Returns an error when the payload is not a JSON array.
pub fn decode_products(raw: &str) -> Result<Vec<Product>, serde_json::Error> {
    let entries: Vec<Value> = serde_json::from_str(raw)?;
    Ok(entries
        .into_iter()
        .filter_map(|entry| {
            serde_json::from_value::<Product>(entry)
                .map_err(|e| log::warn!("skipping malformed product: {e}"))
                .ok()
        })
        .collect())
}
