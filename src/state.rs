use std::sync::Arc;

use crate::{
    cart::CartAdder,
    checkout::CheckoutSubmitter,
    config::Settings,
    error::StorefrontError,
    form::FormFields,
    notifier::ConsoleNotifier,
};

#[derive(Clone)]
pub struct AppState {
    pub cart_adder: Arc<CartAdder<ConsoleNotifier>>,
    pub checkout_submitter: Arc<CheckoutSubmitter<FormFields, ConsoleNotifier>>,
}

impl AppState {
    pub fn new(settings: &Settings, form: FormFields) -> Result<Self, StorefrontError> {
        let cart_adder = Arc::new(CartAdder::new(&settings.cart_service_url, ConsoleNotifier)?);
        let checkout_submitter = Arc::new(CheckoutSubmitter::new(
            &settings.checkout_service_url,
            settings.auth_token.as_deref(),
            form,
            ConsoleNotifier,
        )?);

        Ok(AppState {
            cart_adder: cart_adder,
            checkout_submitter: checkout_submitter,
        })
    }
}
