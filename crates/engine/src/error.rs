// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for catalog operations

use forecourt_adapters::StoreError;
use forecourt_core::ClientId;
use thiserror::Error;

/// Errors surfaced by subscription management
///
/// Unlike event delivery, these are returned to the caller: a failed
/// subscribe or unsubscribe must not look like a success.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("client not found: {0}")]
    ClientNotFound(ClientId),
}
