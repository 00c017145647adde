// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Observer contract for event consumers

use crate::event::Event;
use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Errors an observer may surface to the dispatch loop
///
/// The bus logs these and moves on; they never reach the publisher.
#[derive(Debug, Error)]
pub enum ObserverError {
    #[error("mail delivery failed: {0}")]
    Mail(String),
    #[error("preference store failed: {0}")]
    Store(String),
    #[error("{0}")]
    Other(String),
}

/// A registered consumer of published events
///
/// Observers are held as `Arc<dyn Observer>`; registration identity is the
/// allocation, so the same `Arc` registers at most once. Activity is
/// interior-mutable: an inactive observer stays registered but is skipped
/// by dispatch.
#[async_trait]
pub trait Observer: Send + Sync {
    /// React to one published event
    async fn on_event(&self, event: &Event) -> Result<(), ObserverError>;

    /// Stable name used for logs and the diagnostic surface
    fn name(&self) -> &str;

    fn is_active(&self) -> bool;

    fn set_active(&self, active: bool);
}

/// Diagnostic projection of a registered observer
#[derive(Debug, Clone, Serialize)]
pub struct ObserverInfo {
    pub name: String,
    pub active: bool,
}
