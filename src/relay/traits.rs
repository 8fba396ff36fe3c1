//! Trait abstraction for the relay client to enable mocking in tests

use super::error::RelayError;
use crate::state::Inquiry;
use async_trait::async_trait;

/// Anything that can deliver an inquiry to the site owner
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RelayClientTrait: Send + Sync {
    /// Post one inquiry. Any 2xx response is success.
    async fn submit(&self, inquiry: &Inquiry) -> Result<(), RelayError>;
}
