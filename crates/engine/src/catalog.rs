// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Store-backed subscription catalog
//!
//! Maps event types to subscription categories and resolves which
//! subscribers an event concerns. Preference writes go through the
//! external store; store failures are returned to the caller, never
//! swallowed.

use crate::error::CatalogError;
use forecourt_adapters::{ClientDirectory, SubscriptionStore};
use forecourt_core::{
    category_for, ClientId, EventType, SubscriberPreference, SubscriptionCategory,
};

pub struct SubscriptionCatalog<S: SubscriptionStore, D: ClientDirectory> {
    store: S,
    directory: D,
}

impl<S: SubscriptionStore, D: ClientDirectory> Clone for SubscriptionCatalog<S, D> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            directory: self.directory.clone(),
        }
    }
}

impl<S: SubscriptionStore, D: ClientDirectory> SubscriptionCatalog<S, D> {
    pub fn new(store: S, directory: D) -> Self {
        Self { store, directory }
    }

    /// Subscribers with the category active and email notifications on
    ///
    /// The store is expected to pre-filter by active subscription; the
    /// category and channel checks are repeated here anyway.
    pub async fn subscribers_for(
        &self,
        category: SubscriptionCategory,
    ) -> Result<Vec<SubscriberPreference>, CatalogError> {
        let prefs = self.store.find_active_by_category(category).await?;
        Ok(prefs
            .into_iter()
            .filter(|pref| pref.is_subscribed_to(category) && pref.email_enabled)
            .collect())
    }

    /// Subscribers interested in an event type; empty for unmapped types
    pub async fn subscribers_for_event(
        &self,
        event_type: EventType,
    ) -> Result<Vec<SubscriberPreference>, CatalogError> {
        match category_for(event_type) {
            Some(category) => self.subscribers_for(category).await,
            None => {
                tracing::debug!(event = event_type.name(), "no category mapping");
                Ok(Vec::new())
            }
        }
    }

    /// Create or reactivate a subscription; idempotent per (client, category)
    ///
    /// When the preference carries no email address, the client directory
    /// resolves one; a client unknown to the directory is an error.
    pub async fn subscribe(
        &self,
        client_id: ClientId,
        category: SubscriptionCategory,
        mut pref: SubscriberPreference,
    ) -> Result<(), CatalogError> {
        pref.client_id = client_id;
        if pref.client_email.is_empty() {
            match self.directory.email_of(client_id).await? {
                Some(email) => pref.client_email = email,
                None => return Err(CatalogError::ClientNotFound(client_id)),
            }
        }
        pref.active_categories.insert(category);
        self.store.upsert(category, pref).await?;
        tracing::info!(client = %client_id, category = ?category, "subscription upserted");
        Ok(())
    }

    /// Remove a subscription; no-op if absent
    pub async fn unsubscribe(
        &self,
        client_id: ClientId,
        category: SubscriptionCategory,
    ) -> Result<(), CatalogError> {
        self.store.delete(client_id, category).await?;
        tracing::info!(client = %client_id, category = ?category, "subscription removed");
        Ok(())
    }

    /// Replace the preferences stored under (client, category)
    pub async fn update_preferences(
        &self,
        client_id: ClientId,
        category: SubscriptionCategory,
        pref: SubscriberPreference,
    ) -> Result<(), CatalogError> {
        // Same upsert semantics as subscribe
        self.subscribe(client_id, category, pref).await
    }

    /// Whether a client holds a subscription covering this event type
    pub async fn is_subscribed(
        &self,
        client_id: ClientId,
        event_type: EventType,
    ) -> Result<bool, CatalogError> {
        match category_for(event_type) {
            None => Ok(false),
            Some(category) => Ok(self
                .store
                .find_by_client_and_category(client_id, category)
                .await?
                .is_some()),
        }
    }

    pub async fn count_subscribers(
        &self,
        category: SubscriptionCategory,
    ) -> Result<usize, CatalogError> {
        Ok(self.store.count_active_by_category(category).await?)
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
