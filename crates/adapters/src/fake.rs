// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake adapters for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use crate::mailer::{MailError, Mailer};
use crate::store::{StoreError, SubscriptionStore};
use async_trait::async_trait;
use forecourt_core::{ClientId, SubscriberPreference, SubscriptionCategory};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Recorded outbound email
#[derive(Debug, Clone)]
pub struct MailCall {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Fake mailer that records sends and can fail per recipient
#[derive(Clone, Default)]
pub struct FakeMailer {
    calls: Arc<Mutex<Vec<MailCall>>>,
    fail_to: Arc<Mutex<HashSet<String>>>,
}

impl FakeMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every send to this address fail
    pub fn fail_for(&self, to: &str) {
        self.fail_to
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(to.to_string());
    }

    /// All recorded sends, in order
    pub fn calls(&self) -> Vec<MailCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Recorded sends to one address
    pub fn sent_to(&self, to: &str) -> Vec<MailCall> {
        self.calls()
            .into_iter()
            .filter(|call| call.to == to)
            .collect()
    }
}

#[async_trait]
impl Mailer for FakeMailer {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<(), MailError> {
        if self
            .fail_to
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains(to)
        {
            return Err(MailError::Rejected(to.to_string()));
        }
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(MailCall {
                to: to.to_string(),
                subject: subject.to_string(),
                body: html_body.to_string(),
            });
        Ok(())
    }
}

/// Store whose every operation fails, for error-path tests
#[derive(Clone, Default)]
pub struct FailingStore;

impl FailingStore {
    pub fn new() -> Self {
        Self
    }

    fn error() -> StoreError {
        StoreError::Backend("store offline".to_string())
    }
}

#[async_trait]
impl SubscriptionStore for FailingStore {
    async fn find_by_client_and_category(
        &self,
        _client: ClientId,
        _category: SubscriptionCategory,
    ) -> Result<Option<SubscriberPreference>, StoreError> {
        Err(Self::error())
    }

    async fn upsert(
        &self,
        _category: SubscriptionCategory,
        _pref: SubscriberPreference,
    ) -> Result<(), StoreError> {
        Err(Self::error())
    }

    async fn delete(
        &self,
        _client: ClientId,
        _category: SubscriptionCategory,
    ) -> Result<(), StoreError> {
        Err(Self::error())
    }

    async fn find_active_by_category(
        &self,
        _category: SubscriptionCategory,
    ) -> Result<Vec<SubscriberPreference>, StoreError> {
        Err(Self::error())
    }

    async fn count_active_by_category(
        &self,
        _category: SubscriptionCategory,
    ) -> Result<usize, StoreError> {
        Err(Self::error())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
