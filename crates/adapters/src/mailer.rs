// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Outbound notification sender

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("recipient rejected: {0}")]
    Rejected(String),
    #[error("transport error: {0}")]
    Transport(String),
}

/// Adapter trait for outbound email delivery
///
/// Callers treat delivery as best-effort: an `Err` is logged and the loop
/// moves on to the next recipient. Implementations must not retry.
#[async_trait]
pub trait Mailer: Clone + Send + Sync + 'static {
    /// Send one HTML email
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<(), MailError>;
}

/// Development transport that logs instead of delivering
#[derive(Clone, Debug, Default)]
pub struct LogMailer;

impl LogMailer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<(), MailError> {
        tracing::info!(to, subject, body_bytes = html_body.len(), "mail (log transport)");
        Ok(())
    }
}

#[cfg(test)]
#[path = "mailer_tests.rs"]
mod tests;
