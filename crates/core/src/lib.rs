// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! forecourt-core: Event core for the Forecourt dealership backend
//!
//! This crate provides:
//! - The catalog event model (`Event`, `EventType`) and its payload schema
//! - A synchronous publish/subscribe `EventBus` with fault-isolated dispatch
//! - A bounded, age- and count-evicted `EventHistory`
//! - The subscription model and preference filter matcher

pub mod clock;

pub mod bus;
pub mod event;
pub mod history;
pub mod observer;
pub mod subscription;

// Re-exports
pub use bus::{BusStats, EventBus, LastEvent};
pub use clock::{Clock, FakeClock, SystemClock};
pub use event::{Event, EventType};
pub use history::{EventHistory, HistoryConfig};
pub use observer::{Observer, ObserverError, ObserverInfo};
pub use subscription::{
    category_for, ClientId, EmailFrequency, SubscriberPreference, SubscriptionCategory,
};
