// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end wiring: producer -> bus -> observers -> mail.
//!
//! These tests assemble the full stack with in-memory adapters and a fake
//! clock and verify who gets mailed for a given published event.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::Arc;

use forecourt_adapters::{FakeMailer, MemoryDirectory, MemoryStore};
use forecourt_core::{ClientId, EventBus, FakeClock, SubscriberPreference, SubscriptionCategory};
use forecourt_engine::{
    register_broadcast, BroadcastConfig, CatalogEvents, SubscriptionCatalog, TargetedConfig,
    TargetedSubscriptionObserver,
};

struct Stack {
    events: CatalogEvents<FakeClock>,
    catalog: SubscriptionCatalog<MemoryStore, MemoryDirectory>,
    targeted_mail: FakeMailer,
    broadcast_mail: FakeMailer,
}

fn stack() -> Stack {
    let clock = FakeClock::new();
    let bus = EventBus::new(clock.clone());

    let catalog = SubscriptionCatalog::new(MemoryStore::new(), MemoryDirectory::new());
    let targeted_mail = FakeMailer::new();
    bus.register(Arc::new(TargetedSubscriptionObserver::new(
        catalog.clone(),
        targeted_mail.clone(),
        TargetedConfig::default(),
    )));

    let broadcast_mail = FakeMailer::new();
    register_broadcast(
        &bus,
        broadcast_mail.clone(),
        BroadcastConfig {
            enabled: true,
            recipients: vec!["ops@forecourt.example".to_string()],
        },
    );

    Stack {
        events: CatalogEvents::new(bus, clock),
        catalog,
        targeted_mail,
        broadcast_mail,
    }
}

async fn subscribe(
    stack: &Stack,
    id: u64,
    category: SubscriptionCategory,
    configure: impl FnOnce(&mut SubscriberPreference),
) {
    let mut pref = SubscriberPreference::new(ClientId(id), format!("s{id}@example.com"));
    configure(&mut pref);
    stack.catalog.subscribe(ClientId(id), category, pref).await.unwrap();
}

#[tokio::test]
async fn on_sale_event_reaches_only_the_matching_subscriber() {
    let stack = stack();

    // S1: promotions, cars up to 45k
    subscribe(&stack, 1, SubscriptionCategory::Promotions, |p| {
        p.vehicle_types.insert("CAR".to_string());
        p.max_price = Some(45_000.0);
    })
    .await;
    // S2: same subscription, tighter price cap
    subscribe(&stack, 2, SubscriptionCategory::Promotions, |p| {
        p.vehicle_types.insert("CAR".to_string());
        p.max_price = Some(35_000.0);
    })
    .await;
    // S3: not subscribed to promotions at all
    subscribe(&stack, 3, SubscriptionCategory::OrderNotifications, |_| {}).await;

    stack
        .events
        .vehicle_on_sale(1, "Model X", 50_000.0, 40_000.0, Some("CAR"), None)
        .await;

    assert_eq!(stack.targeted_mail.sent_to("s1@example.com").len(), 1);
    assert!(stack.targeted_mail.sent_to("s2@example.com").is_empty());
    assert!(stack.targeted_mail.sent_to("s3@example.com").is_empty());

    // The same publish also produces one operational alert
    let alerts = stack.broadcast_mail.sent_to("ops@forecourt.example");
    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].subject.contains("Model X"));
}

#[tokio::test]
async fn significant_price_drop_escalates_to_promotion_subscribers() {
    let stack = stack();

    subscribe(&stack, 1, SubscriptionCategory::PriceDrops, |_| {}).await;
    subscribe(&stack, 2, SubscriptionCategory::Promotions, |_| {}).await;

    // 10% drop: both audiences hear about it
    stack
        .events
        .price_changed(1, "Model X", 50_000.0, 45_000.0, None, None)
        .await;

    assert_eq!(stack.targeted_mail.sent_to("s1@example.com").len(), 1);
    assert_eq!(stack.targeted_mail.sent_to("s2@example.com").len(), 1);
}

#[tokio::test]
async fn small_price_drop_notifies_nobody() {
    let stack = stack();

    subscribe(&stack, 1, SubscriptionCategory::PriceDrops, |_| {}).await;
    subscribe(&stack, 2, SubscriptionCategory::Promotions, |_| {}).await;

    // 2% drop stays below the 5% threshold
    stack
        .events
        .price_changed(1, "Model X", 50_000.0, 49_000.0, None, None)
        .await;

    assert!(stack.targeted_mail.calls().is_empty());
    // Price changes are not on the broadcast allow-list either
    assert!(stack.broadcast_mail.calls().is_empty());
}

#[tokio::test]
async fn bus_stats_reflect_published_traffic() {
    let stack = stack();

    stack.events.vehicle_added(1, "Model X", 45_000.0, None, None).await;
    stack.events.vehicle_added(2, "Model Y", 55_000.0, None, None).await;
    stack.events.order_created(1, "buyer@example.com", 45_000.0).await;

    let stats = stack.events.bus().stats();
    assert_eq!(stats.registered_observers, 2);
    assert_eq!(stats.total_events, 3);
    assert_eq!(stats.events_by_type.get("vehicle:added"), Some(&2));
    assert_eq!(stats.events_by_type.get("order:created"), Some(&1));
    assert_eq!(
        stats.last_event.unwrap().event_type,
        "order:created".to_string()
    );
}

#[tokio::test]
async fn deactivated_observer_misses_traffic_until_reactivated() {
    let stack = stack();
    subscribe(&stack, 1, SubscriptionCategory::NewVehicles, |_| {}).await;

    let bus = stack.events.bus();
    assert!(bus.set_observer_active("targeted-subscriptions", false));
    stack.events.vehicle_added(1, "Model X", 45_000.0, None, None).await;
    assert!(stack.targeted_mail.calls().is_empty());

    assert!(bus.set_observer_active("targeted-subscriptions", true));
    stack.events.vehicle_added(2, "Model Y", 55_000.0, None, None).await;
    assert_eq!(stack.targeted_mail.sent_to("s1@example.com").len(), 1);
}
