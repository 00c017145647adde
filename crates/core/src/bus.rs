// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event bus: observer registry and synchronous fan-out
//!
//! Dispatch is synchronous per publish call: `publish` resolves only after
//! every active observer has run. There is no queue, no retry, and no
//! delivery timeout; a slow observer adds latency to the producer's call
//! path. Each observer failure is caught and logged so one bad consumer
//! never starves the rest.

use crate::clock::Clock;
use crate::event::Event;
use crate::history::{EventHistory, HistoryConfig};
use crate::observer::{Observer, ObserverInfo};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

/// Diagnostic snapshot consumed by health/test tooling
#[derive(Debug, Clone, Serialize)]
pub struct BusStats {
    pub registered_observers: usize,
    pub observers: Vec<ObserverInfo>,
    pub total_events: usize,
    pub events_by_type: HashMap<String, u64>,
    pub last_event: Option<LastEvent>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LastEvent {
    pub event_type: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// The event bus owns the observer registry and the rolling history
pub struct EventBus<C: Clock> {
    observers: Arc<RwLock<Vec<Arc<dyn Observer>>>>,
    history: Arc<Mutex<EventHistory<C>>>,
}

impl<C: Clock> EventBus<C> {
    pub fn new(clock: C) -> Self {
        Self::with_history_config(clock, HistoryConfig::default())
    }

    pub fn with_history_config(clock: C, config: HistoryConfig) -> Self {
        Self {
            observers: Arc::new(RwLock::new(Vec::new())),
            history: Arc::new(Mutex::new(EventHistory::with_config(clock, config))),
        }
    }

    /// Register an observer; registering the same instance twice is a no-op
    pub fn register(&self, observer: Arc<dyn Observer>) {
        let mut observers = self.observers.write().unwrap_or_else(|e| e.into_inner());
        if observers.iter().any(|o| Arc::ptr_eq(o, &observer)) {
            tracing::debug!(observer = observer.name(), "already registered");
            return;
        }
        tracing::info!(
            observer = observer.name(),
            total = observers.len() + 1,
            "observer registered"
        );
        observers.push(observer);
    }

    /// Remove an observer by instance identity; no-op if absent
    pub fn unregister(&self, observer: &Arc<dyn Observer>) {
        let mut observers = self.observers.write().unwrap_or_else(|e| e.into_inner());
        let before = observers.len();
        observers.retain(|o| !Arc::ptr_eq(o, observer));
        if observers.len() < before {
            tracing::info!(observer = observer.name(), "observer removed");
        }
    }

    /// Remove every registered observer
    pub fn clear_observers(&self) {
        let mut observers = self.observers.write().unwrap_or_else(|e| e.into_inner());
        let count = observers.len();
        observers.clear();
        tracing::info!(count, "all observers cleared");
    }

    /// Publish one event to every currently active observer
    ///
    /// The registry snapshot is taken once at the start of the call, so
    /// concurrent register/unregister is never reflected mid-dispatch.
    /// Infallible by contract: the return conveys nothing about delivery.
    pub async fn publish(&self, event: Event) {
        {
            let mut history = self.history.lock().unwrap_or_else(|e| e.into_inner());
            history.record(event.clone());
        }

        let snapshot: Vec<Arc<dyn Observer>> = {
            let observers = self.observers.read().unwrap_or_else(|e| e.into_inner());
            observers.clone()
        };

        if snapshot.is_empty() {
            tracing::debug!(event = event.event_type.name(), "no observers to notify");
            return;
        }

        for observer in snapshot {
            if !observer.is_active() {
                continue;
            }
            if let Err(error) = observer.on_event(&event).await {
                tracing::error!(
                    observer = observer.name(),
                    event = event.event_type.name(),
                    error = %error,
                    "observer failed"
                );
            }
        }
    }

    pub fn observer_count(&self) -> usize {
        self.observers
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    /// Name and activity of every registered observer, in registration order
    pub fn observers(&self) -> Vec<ObserverInfo> {
        self.observers
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .map(|o| ObserverInfo {
                name: o.name().to_string(),
                active: o.is_active(),
            })
            .collect()
    }

    /// Toggle the first observer with the given name; false if none matches
    pub fn set_observer_active(&self, name: &str, active: bool) -> bool {
        let observers = self.observers.read().unwrap_or_else(|e| e.into_inner());
        match observers.iter().find(|o| o.name() == name) {
            Some(observer) => {
                observer.set_active(active);
                tracing::info!(observer = name, active, "observer toggled");
                true
            }
            None => false,
        }
    }

    /// Last `limit` recorded events in insertion order
    pub fn recent_events(&self, limit: usize) -> Vec<Event> {
        self.history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .recent(limit)
    }

    pub fn stats(&self) -> BusStats {
        let observers = self.observers();
        let history = self.history.lock().unwrap_or_else(|e| e.into_inner());
        BusStats {
            registered_observers: observers.len(),
            observers,
            total_events: history.len(),
            events_by_type: history.counts_by_type(),
            last_event: history.last().map(|event| LastEvent {
                event_type: event.event_type.name().to_string(),
                message: event.message.clone(),
                timestamp: event.timestamp,
            }),
        }
    }
}

impl<C: Clock> Clone for EventBus<C> {
    fn clone(&self) -> Self {
        Self {
            observers: Arc::clone(&self.observers),
            history: Arc::clone(&self.history),
        }
    }
}

#[cfg(test)]
#[path = "bus_tests.rs"]
mod tests;
