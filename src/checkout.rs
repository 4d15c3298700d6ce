use std::sync::Arc;

use reqwest::{cookie::Jar, header::CONTENT_TYPE, Client, Url};
use tracing::{event, Level};

use crate::{
    domain::{CheckoutRequest, CheckoutResponse},
    dtos::ApiError,
    error::StorefrontError,
    form::{FormSource, PAYMENT_METHOD_FIELD, SHIPPING_ADDRESS_FIELD},
    notifier::Notifier,
};

pub const CHECKOUT_PATH: &str = "/checkout";
pub const AUTH_COOKIE: &str = "auth_token";
pub const ORDER_PLACED_PREFIX: &str = "Заказ успешно оформлен! Номер заказа: ";
pub const CHECKOUT_FAILED_PREFIX: &str = "Ошибка при оформлении заказа: ";

/// Submits the checkout form to the order service with credentials included.
pub struct CheckoutSubmitter<F: FormSource, N: Notifier> {
    http: Client,
    endpoint: Url,
    form: F,
    notifier: N,
}

impl<F: FormSource, N: Notifier> CheckoutSubmitter<F, N> {
    /// The client keeps a cookie store for the checkout service, seeded with `auth_token` when given.
    pub fn new(
        checkout_service_url: &Url,
        auth_token: Option<&str>,
        form: F,
        notifier: N,
    ) -> Result<Self, StorefrontError> {
        let endpoint = checkout_service_url
            .join(CHECKOUT_PATH)
            .map_err(|e| StorefrontError::Config(format!("checkout endpoint: {}", e)))?;

        let jar = Jar::default();
        if let Some(token) = auth_token {
            jar.add_cookie_str(&format!("{}={}", AUTH_COOKIE, token), &endpoint);
        }

        let http = Client::builder()
            .cookie_provider(Arc::new(jar))
            .build()?;

        Ok(CheckoutSubmitter {
            http: http,
            endpoint: endpoint,
            form: form,
            notifier: notifier,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Reads the form, submits it and alerts the outcome.
    ///
    /// Only a missing form field is returned to the caller; it aborts before any request is made.
    pub async fn checkout(&self) -> Result<(), StorefrontError> {
        let request = CheckoutRequest {
            payment_method: self.read_field(PAYMENT_METHOD_FIELD)?,
            shipping_address: self.read_field(SHIPPING_ADDRESS_FIELD)?,
        };

        match self.submit(&request).await {
            Ok(response) => {
                self.notifier
                    .alert(&format!("{}{}", ORDER_PLACED_PREFIX, response.order_id));
            }
            Err(e) => {
                event!(Level::ERROR, "Ошибка: {}", e);
                self.notifier
                    .alert(&format!("{}{}", CHECKOUT_FAILED_PREFIX, e));
            }
        }

        Ok(())
    }

    fn read_field(&self, id: &'static str) -> Result<String, StorefrontError> {
        self.form.field(id).ok_or(StorefrontError::MissingField(id))
    }

    async fn submit(&self, request: &CheckoutRequest) -> Result<CheckoutResponse, StorefrontError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(serde_json::to_vec(request)?)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let api_error: ApiError = serde_json::from_str(&body)?;
            event!(Level::WARN, status = status.as_u16(), "checkout service rejected order");
            return Err(StorefrontError::Rejected(api_error.message()));
        }

        let result: CheckoutResponse = serde_json::from_str(&body)?;
        event!(Level::INFO, "Успех: {}", body);

        Ok(result)
    }
}
