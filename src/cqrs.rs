use serde::{Deserialize, Serialize};

use crate::{
    cart::CartAdder,
    checkout::CheckoutSubmitter,
    domain::Identifier,
    error::StorefrontError,
    form::FormSource,
    notifier::Notifier,
};

// traits
pub trait Command{}

pub trait CommandHandler<C: Command>{
    async fn handle(&self, input: &C) -> Result<(), StorefrontError>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddToCartCommand {
    pub book_id: Identifier,
    pub user_id: Identifier,
}
impl Command for AddToCartCommand{}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckoutCommand{
}
impl Command for CheckoutCommand{}

impl<N: Notifier> CommandHandler<AddToCartCommand> for CartAdder<N> {
    async fn handle(&self, input: &AddToCartCommand) -> Result<(), StorefrontError> {
        self.add_to_cart(input.book_id.clone(), input.user_id.clone()).await;
        Ok(())
    }
}

impl<F: FormSource, N: Notifier> CommandHandler<CheckoutCommand> for CheckoutSubmitter<F, N> {
    async fn handle(&self, _input: &CheckoutCommand) -> Result<(), StorefrontError> {
        self.checkout().await
    }
}
