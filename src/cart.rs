use reqwest::{header::CONTENT_TYPE, Client, Url};
use tracing::{event, Level};

use crate::{
    domain::{CartAddRequest, Identifier},
    error::StorefrontError,
    notifier::Notifier,
};

pub const CART_ADD_PATH: &str = "/cart/add";
pub const ADDED_MESSAGE: &str = "Товар добавлен!";
pub const ERROR_PREFIX: &str = "Ошибка: ";

/// Posts "add book to cart" requests to the cart service. No cookies are attached.
pub struct CartAdder<N: Notifier> {
    http: Client,
    endpoint: Url,
    notifier: N,
}

impl<N: Notifier> CartAdder<N> {
    pub fn new(cart_service_url: &Url, notifier: N) -> Result<Self, StorefrontError> {
        let endpoint = cart_service_url
            .join(CART_ADD_PATH)
            .map_err(|e| StorefrontError::Config(format!("cart endpoint: {}", e)))?;

        Ok(CartAdder {
            http: Client::builder().build()?,
            endpoint: endpoint,
            notifier: notifier,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Sends one request and shows one alert. Transport failures are only logged.
    pub async fn add_to_cart(&self, book_id: Identifier, user_id: Identifier) {
        event!(Level::DEBUG, %book_id, %user_id, "add to cart invoked");

        let request = CartAddRequest {
            book_id: book_id,
            user_id: user_id,
        };

        match self.send(&request).await {
            Ok(None) => self.notifier.alert(ADDED_MESSAGE),
            Ok(Some(body)) => self.notifier.alert(&format!("{}{}", ERROR_PREFIX, body)),
            Err(e) => {
                event!(Level::ERROR, "{}{}", ERROR_PREFIX, e);
            }
        }
    }

    /// `Ok(None)` on 2xx, `Ok(Some(body))` with the plain-text error body otherwise.
    async fn send(&self, request: &CartAddRequest) -> Result<Option<String>, StorefrontError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(serde_json::to_vec(request)?)
            .send()
            .await?;

        if response.status().is_success() {
            return Ok(None);
        }

        let status = response.status();
        let body = response.text().await?;
        event!(Level::WARN, status = status.as_u16(), "cart service rejected request");

        Ok(Some(body))
    }
}
