pub mod cart;
pub mod checkout;
pub mod config;
pub mod cqrs;
pub mod domain;
pub mod dtos;
pub mod error;
pub mod form;
pub mod notifier;
pub mod state;
pub mod telemetry;

#[cfg(test)]
mod testing;
