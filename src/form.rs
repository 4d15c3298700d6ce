use std::collections::HashMap;

pub const PAYMENT_METHOD_FIELD: &str = "payment_method";
pub const SHIPPING_ADDRESS_FIELD: &str = "shipping_address";

/// Current values of the page's input elements, looked up by element id.
pub trait FormSource {
    fn field(&self, id: &str) -> Option<String>;
}

#[derive(Debug, Clone, Default)]
pub struct FormFields {
    fields: HashMap<String, String>,
}

impl FormFields {
    pub fn new() -> Self {
        FormFields {
            fields: HashMap::new(),
        }
    }

    pub fn with(mut self, id: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(id.into(), value.into());
        self
    }

    pub fn checkout_form(payment_method: impl Into<String>, shipping_address: impl Into<String>) -> Self {
        FormFields::new()
            .with(PAYMENT_METHOD_FIELD, payment_method)
            .with(SHIPPING_ADDRESS_FIELD, shipping_address)
    }
}

impl FormSource for FormFields {
    fn field(&self, id: &str) -> Option<String> {
        self.fields.get(id).cloned()
    }
}
