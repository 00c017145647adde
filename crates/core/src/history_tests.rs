// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::clock::FakeClock;

fn event_at(clock: &FakeClock, message: &str) -> Event {
    Event::new(EventType::CatalogUpdated, message, clock.now())
}

#[test]
fn record_appends_in_order() {
    let clock = FakeClock::new();
    let mut history = EventHistory::new(clock.clone());

    for i in 0..5 {
        clock.advance(Duration::seconds(1));
        history.record(event_at(&clock, &format!("evt-{i}")));
    }

    let recent = history.recent(3);
    assert_eq!(recent.len(), 3);
    assert_eq!(recent[0].message, "evt-2");
    assert_eq!(recent[2].message, "evt-4");
    assert_eq!(history.last().map(|e| e.message.as_str()), Some("evt-4"));
}

#[test]
fn recent_with_large_limit_returns_everything() {
    let clock = FakeClock::new();
    let mut history = EventHistory::new(clock.clone());

    history.record(event_at(&clock, "only"));

    assert_eq!(history.recent(100).len(), 1);
}

#[test]
fn count_eviction_trims_oldest_batch() {
    let clock = FakeClock::new();
    let mut history = EventHistory::new(clock.clone());

    for i in 0..1001 {
        clock.advance(Duration::seconds(1));
        history.record(event_at(&clock, &format!("evt-{i}")));
    }

    // One batched trim of 100, not element-by-element eviction
    assert!(history.len() <= 1000);
    assert_eq!(history.len(), 901);
    let survivors = history.recent(history.len());
    assert_eq!(survivors[0].message, "evt-100");
}

#[test]
fn age_eviction_purges_stale_lookup_entries() {
    let clock = FakeClock::new();
    let mut history = EventHistory::new(clock.clone());

    history.record(event_at(&clock, "old"));
    assert_eq!(history.recent_lookup_len(), 1);

    clock.advance(Duration::hours(25));
    history.record(event_at(&clock, "fresh"));

    // The stale entry is gone from the lookup map but the buffer keeps it
    assert_eq!(history.recent_lookup_len(), 1);
    assert_eq!(history.len(), 2);
}

#[test]
fn age_eviction_keeps_entry_exactly_at_cutoff() {
    let clock = FakeClock::new();
    let mut history = EventHistory::new(clock.clone());

    history.record(event_at(&clock, "boundary"));

    clock.advance(Duration::hours(24));
    history.record(event_at(&clock, "fresh"));

    assert_eq!(history.recent_lookup_len(), 2);
}

#[test]
fn counts_by_type_groups_by_name() {
    let clock = FakeClock::new();
    let mut history = EventHistory::new(clock.clone());

    clock.advance(Duration::seconds(1));
    history.record(Event::new(EventType::VehicleAdded, "a", clock.now()));
    clock.advance(Duration::seconds(1));
    history.record(Event::new(EventType::VehicleAdded, "b", clock.now()));
    clock.advance(Duration::seconds(1));
    history.record(Event::new(EventType::OrderCreated, "c", clock.now()));

    let counts = history.counts_by_type();
    assert_eq!(counts.get("vehicle:added"), Some(&2));
    assert_eq!(counts.get("order:created"), Some(&1));
}

#[test]
fn custom_config_controls_trim() {
    let clock = FakeClock::new();
    let config = HistoryConfig {
        max_entries: 10,
        trim_batch: 4,
        recent_ttl: Duration::hours(24),
    };
    let mut history = EventHistory::with_config(clock.clone(), config);

    for i in 0..11 {
        clock.advance(Duration::seconds(1));
        history.record(event_at(&clock, &format!("evt-{i}")));
    }

    assert_eq!(history.len(), 7);
    assert_eq!(history.recent(7)[0].message, "evt-4");
}
