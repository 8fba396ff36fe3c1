//! Outbound client for the third-party form relay

mod client;
mod error;
mod traits;

pub use client::{RelayClient, DEFAULT_RELAY_URL};
pub use error::RelayError;
pub use traits::RelayClientTrait;

#[cfg(test)]
pub use traits::MockRelayClientTrait;
