// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bounded rolling cache of recently published events
//!
//! Two independent eviction policies apply: the ordered buffer is trimmed
//! by count (oldest batch dropped once the cap is exceeded) and the
//! `(type, timestamp)` lookup map is purged by age on every record. The
//! history is observability-only; it is never a source of truth for
//! redelivery and does not survive a restart.

use crate::clock::Clock;
use crate::event::{Event, EventType};
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

/// Eviction tuning for the history cache
#[derive(Debug, Clone)]
pub struct HistoryConfig {
    /// Buffer cap; exceeding it triggers a batched trim
    pub max_entries: usize,
    /// How many of the oldest entries one trim removes
    pub trim_batch: usize,
    /// Age beyond which recent-lookup entries are purged
    pub recent_ttl: Duration,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_entries: 1000,
            trim_batch: 100,
            recent_ttl: Duration::hours(24),
        }
    }
}

/// Rolling event cache owned by the bus
pub struct EventHistory<C: Clock> {
    config: HistoryConfig,
    clock: C,
    events: Vec<Event>,
    recent: HashMap<(EventType, DateTime<Utc>), Event>,
}

impl<C: Clock> EventHistory<C> {
    pub fn new(clock: C) -> Self {
        Self::with_config(clock, HistoryConfig::default())
    }

    pub fn with_config(clock: C, config: HistoryConfig) -> Self {
        Self {
            config,
            clock,
            events: Vec::new(),
            recent: HashMap::new(),
        }
    }

    /// Record one published event
    pub fn record(&mut self, event: Event) {
        let key = (event.event_type, event.timestamp);
        self.events.push(event.clone());

        // Batched trim amortizes eviction cost over many records
        if self.events.len() > self.config.max_entries {
            let batch = self.config.trim_batch.min(self.events.len());
            self.events.drain(..batch);
            tracing::debug!(trimmed = batch, remaining = self.events.len(), "history trimmed");
        }

        self.recent.insert(key, event);

        // Entries strictly older than the TTL are purged; an entry exactly
        // at the cutoff survives.
        let cutoff = self.clock.now() - self.config.recent_ttl;
        self.recent.retain(|(_, ts), _| *ts >= cutoff);
    }

    /// Last `limit` events in insertion order
    pub fn recent(&self, limit: usize) -> Vec<Event> {
        let start = self.events.len().saturating_sub(limit);
        self.events[start..].to_vec()
    }

    pub fn last(&self) -> Option<&Event> {
        self.events.last()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Size of the age-bounded `(type, timestamp)` lookup map
    pub fn recent_lookup_len(&self) -> usize {
        self.recent.len()
    }

    /// Event counts keyed by `EventType::name()`
    pub fn counts_by_type(&self) -> HashMap<String, u64> {
        let mut counts: HashMap<String, u64> = HashMap::new();
        for event in &self.events {
            *counts.entry(event.event_type.name().to_string()).or_default() += 1;
        }
        counts
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
