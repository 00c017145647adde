// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! forecourt-engine: observers and producers for the catalog event core
//!
//! This crate plugs concrete consumers into the `forecourt-core` bus:
//! - `BroadcastObserver` sends operational alerts to a configured list
//! - `TargetedSubscriptionObserver` resolves subscribers through the
//!   `SubscriptionCatalog` and sends personalized notifications
//! - `CatalogEvents` is the facade domain code calls to publish events

pub mod broadcast;
pub mod catalog;
pub mod error;
pub mod producer;
pub mod targeted;

mod templates;

pub use broadcast::{register_broadcast, BroadcastConfig, BroadcastObserver};
pub use catalog::SubscriptionCatalog;
pub use error::CatalogError;
pub use producer::CatalogEvents;
pub use targeted::{TargetedConfig, TargetedSubscriptionObserver};
