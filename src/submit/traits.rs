//! Trait abstraction for the submit step to enable mocking in tests

use crate::state::Registration;
use anyhow::Result;
use async_trait::async_trait;

/// Receives registrations that passed the full schema.
///
/// Implementations are the place to send the data somewhere. An error leaves
/// the form editable and is shown to the user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitHandler: Send + Sync {
    /// Handle one validated registration
    async fn submit(&self, registration: &Registration) -> Result<()>;
}
