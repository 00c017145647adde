// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! forecourt-adapters: integration seams for the event core
//!
//! This crate defines the traits the observers depend on — the outbound
//! mailer, the persistent subscription store, and the client directory —
//! together with in-memory implementations used for wiring and tests.
//! The real SMTP transport and the real database live outside this
//! workspace; nothing here should grow delivery or persistence logic.

pub mod mailer;
pub mod store;

#[cfg(any(test, feature = "test-support"))]
pub mod fake;

pub use mailer::{LogMailer, MailError, Mailer};
pub use store::{
    ClientDirectory, MemoryDirectory, MemoryStore, StoreError, SubscriptionStore,
};

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FailingStore, FakeMailer, MailCall};
