//! Submit handler that logs the submitted data

use super::traits::SubmitHandler;
use crate::state::Registration;
use anyhow::{Context, Result};
use async_trait::async_trait;

/// Logs each registration as JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSubmitHandler;

impl LogSubmitHandler {
    pub fn new() -> Self {
        Self
    }

    fn render(registration: &Registration) -> Result<String> {
        serde_json::to_string(registration).context("Failed to serialize registration")
    }
}

#[async_trait]
impl SubmitHandler for LogSubmitHandler {
    async fn submit(&self, registration: &Registration) -> Result<()> {
        let data = Self::render(registration)?;
        tracing::info!(%data, "Registration submitted");
        Ok(())
    }
}
