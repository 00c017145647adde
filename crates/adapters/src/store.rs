// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subscription persistence and client lookup seams
//!
//! The production store is a database owned by the CRUD side of the
//! backend; this core only reads and upserts through these traits. The
//! in-memory implementations back tests and local wiring.

use async_trait::async_trait;
use forecourt_core::{ClientId, SubscriberPreference, SubscriptionCategory};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("subscription not found for client {0}")]
    NotFound(ClientId),
    #[error("backend error: {0}")]
    Backend(String),
}

/// Persistent store of per-client subscription preferences
///
/// Rows are keyed by `(client, category)`; upsert and delete are
/// idempotent.
#[async_trait]
pub trait SubscriptionStore: Clone + Send + Sync + 'static {
    async fn find_by_client_and_category(
        &self,
        client: ClientId,
        category: SubscriptionCategory,
    ) -> Result<Option<SubscriberPreference>, StoreError>;

    async fn upsert(
        &self,
        category: SubscriptionCategory,
        pref: SubscriberPreference,
    ) -> Result<(), StoreError>;

    async fn delete(
        &self,
        client: ClientId,
        category: SubscriptionCategory,
    ) -> Result<(), StoreError>;

    /// All active subscriptions for a category
    async fn find_active_by_category(
        &self,
        category: SubscriptionCategory,
    ) -> Result<Vec<SubscriberPreference>, StoreError>;

    async fn count_active_by_category(
        &self,
        category: SubscriptionCategory,
    ) -> Result<usize, StoreError>;
}

/// Client id → email lookup, owned by the client CRUD side
#[async_trait]
pub trait ClientDirectory: Clone + Send + Sync + 'static {
    async fn email_of(&self, client: ClientId) -> Result<Option<String>, StoreError>;
}

/// In-memory subscription store
#[derive(Clone, Default)]
pub struct MemoryStore {
    rows: Arc<Mutex<HashMap<(ClientId, SubscriptionCategory), SubscriberPreference>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl SubscriptionStore for MemoryStore {
    async fn find_by_client_and_category(
        &self,
        client: ClientId,
        category: SubscriptionCategory,
    ) -> Result<Option<SubscriberPreference>, StoreError> {
        let rows = self.rows.lock().unwrap_or_else(|e| e.into_inner());
        Ok(rows.get(&(client, category)).cloned())
    }

    async fn upsert(
        &self,
        category: SubscriptionCategory,
        pref: SubscriberPreference,
    ) -> Result<(), StoreError> {
        let mut rows = self.rows.lock().unwrap_or_else(|e| e.into_inner());
        rows.insert((pref.client_id, category), pref);
        Ok(())
    }

    async fn delete(
        &self,
        client: ClientId,
        category: SubscriptionCategory,
    ) -> Result<(), StoreError> {
        let mut rows = self.rows.lock().unwrap_or_else(|e| e.into_inner());
        rows.remove(&(client, category));
        Ok(())
    }

    async fn find_active_by_category(
        &self,
        category: SubscriptionCategory,
    ) -> Result<Vec<SubscriberPreference>, StoreError> {
        let rows = self.rows.lock().unwrap_or_else(|e| e.into_inner());
        let mut prefs: Vec<SubscriberPreference> = rows
            .iter()
            .filter(|((_, c), _)| *c == category)
            .map(|(_, pref)| pref.clone())
            .collect();
        // Stable order for deterministic fan-out
        prefs.sort_by_key(|p| p.client_id);
        Ok(prefs)
    }

    async fn count_active_by_category(
        &self,
        category: SubscriptionCategory,
    ) -> Result<usize, StoreError> {
        let rows = self.rows.lock().unwrap_or_else(|e| e.into_inner());
        Ok(rows.keys().filter(|(_, c)| *c == category).count())
    }
}

/// In-memory client directory
#[derive(Clone, Default)]
pub struct MemoryDirectory {
    emails: Arc<Mutex<HashMap<ClientId, String>>>,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, client: ClientId, email: impl Into<String>) {
        let mut emails = self.emails.lock().unwrap_or_else(|e| e.into_inner());
        emails.insert(client, email.into());
    }
}

#[async_trait]
impl ClientDirectory for MemoryDirectory {
    async fn email_of(&self, client: ClientId) -> Result<Option<String>, StoreError> {
        let emails = self.emails.lock().unwrap_or_else(|e| e.into_inner());
        Ok(emails.get(&client).cloned())
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
