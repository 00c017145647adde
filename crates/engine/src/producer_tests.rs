// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use forecourt_core::FakeClock;

fn events() -> CatalogEvents<FakeClock> {
    let clock = FakeClock::new();
    CatalogEvents::new(EventBus::new(clock.clone()), clock)
}

#[tokio::test]
async fn vehicle_added_carries_schema_keys_and_event_id() {
    let events = events();

    events
        .vehicle_added(7, "Model X", 45_000.0, Some("SUV"), Some("Tesla"))
        .await;

    let recent = events.bus().recent_events(1);
    let event = &recent[0];
    assert_eq!(event.event_type, EventType::VehicleAdded);
    assert_eq!(event.u64_value("vehicleId"), Some(7));
    assert_eq!(event.str_value("vehicleName"), Some("Model X"));
    assert_eq!(event.f64_value("price"), Some(45_000.0));
    assert_eq!(event.str_value("vehicleType"), Some("SUV"));
    assert_eq!(event.str_value("brand"), Some("Tesla"));
    assert!(!event.str_value("eventId").unwrap_or_default().is_empty());
}

#[tokio::test]
async fn optional_keys_are_omitted_when_absent() {
    let events = events();

    events.vehicle_added(7, "Model X", 45_000.0, None, None).await;

    let recent = events.bus().recent_events(1);
    assert!(recent[0].str_value("vehicleType").is_none());
    assert!(recent[0].str_value("brand").is_none());
}

#[tokio::test]
async fn on_sale_computes_discount_and_savings() {
    let events = events();

    events
        .vehicle_on_sale(7, "Model X", 50_000.0, 40_000.0, None, None)
        .await;

    let recent = events.bus().recent_events(1);
    assert_eq!(recent[0].f64_value("discount"), Some(20.0));
    assert_eq!(recent[0].f64_value("savings"), Some(10_000.0));
}

#[tokio::test]
async fn price_changed_records_signed_difference() {
    let events = events();

    events
        .price_changed(7, "Model X", 40_000.0, 42_000.0, None, None)
        .await;

    let recent = events.bus().recent_events(1);
    assert_eq!(recent[0].event_type, EventType::VehiclePriceChanged);
    assert_eq!(recent[0].f64_value("priceDifference"), Some(2_000.0));
}

#[tokio::test]
async fn stock_change_can_be_negative() {
    let events = events();

    events.stock_updated(7, "Model X", 10, 4).await;

    let recent = events.bus().recent_events(1);
    assert_eq!(recent[0].f64_value("stockChange"), Some(-6.0));
}

#[tokio::test]
async fn events_are_timestamped_by_the_clock() {
    let clock = FakeClock::new();
    let events = CatalogEvents::new(EventBus::new(clock.clone()), clock.clone());

    events.order_created(1, "buyer@example.com", 30_000.0).await;

    let recent = events.bus().recent_events(1);
    assert_eq!(recent[0].timestamp, clock.now());
}

#[tokio::test]
async fn generic_publish_keeps_payload_and_stamps_id() {
    let events = events();

    let mut payload = HashMap::new();
    payload.insert("component".to_string(), Value::from("importer"));
    events
        .publish(EventType::MaintenanceMode, "Maintenance window", payload)
        .await;

    let recent = events.bus().recent_events(1);
    assert_eq!(recent[0].event_type, EventType::MaintenanceMode);
    assert_eq!(recent[0].str_value("component"), Some("importer"));
    assert!(recent[0].str_value("eventId").is_some());
}

#[tokio::test]
async fn distinct_events_get_distinct_ids() {
    let events = events();

    events.special_offer_added("Summer clearance", 15.0).await;
    events.special_offer_added("Summer clearance", 15.0).await;

    let recent = events.bus().recent_events(2);
    let first = recent[0].str_value("eventId").unwrap_or_default().to_string();
    let second = recent[1].str_value("eventId").unwrap_or_default().to_string();
    assert_ne!(first, second);
}
