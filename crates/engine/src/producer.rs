// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event producer facade
//!
//! Domain code publishes through this facade instead of constructing
//! events by hand, so every event carries the payload keys observers
//! expect plus a unique `eventId`. All methods resolve once dispatch
//! completes, matching the bus's synchronous contract.

use forecourt_core::{Clock, Event, EventBus, EventType};
use serde_json::Value;
use std::collections::HashMap;
use uuid::Uuid;

pub struct CatalogEvents<C: Clock> {
    bus: EventBus<C>,
    clock: C,
}

impl<C: Clock> Clone for CatalogEvents<C> {
    fn clone(&self) -> Self {
        Self {
            bus: self.bus.clone(),
            clock: self.clock.clone(),
        }
    }
}

impl<C: Clock> CatalogEvents<C> {
    pub fn new(bus: EventBus<C>, clock: C) -> Self {
        Self { bus, clock }
    }

    pub fn bus(&self) -> &EventBus<C> {
        &self.bus
    }

    fn event(&self, event_type: EventType, message: impl Into<String>) -> Event {
        Event::new(event_type, message, self.clock.now())
            .with_entry("eventId", Uuid::new_v4().to_string())
    }

    /// Publish an arbitrary event with a caller-supplied payload
    ///
    /// The schema keys for the type still apply; this exists for event
    /// types without a dedicated helper.
    pub async fn publish(
        &self,
        event_type: EventType,
        message: impl Into<String>,
        payload: HashMap<String, Value>,
    ) {
        let event_id = Uuid::new_v4().to_string();
        let event = Event::new(event_type, message, self.clock.now())
            .with_payload(payload)
            .with_entry("eventId", event_id);
        self.bus.publish(event).await;
    }

    pub async fn vehicle_added(
        &self,
        vehicle_id: u64,
        name: &str,
        price: f64,
        vehicle_type: Option<&str>,
        brand: Option<&str>,
    ) {
        let mut event = self
            .event(EventType::VehicleAdded, format!("New vehicle: {name}"))
            .with_entry("vehicleId", vehicle_id)
            .with_entry("vehicleName", name)
            .with_entry("price", price);
        if let Some(vehicle_type) = vehicle_type {
            event = event.with_entry("vehicleType", vehicle_type);
        }
        if let Some(brand) = brand {
            event = event.with_entry("brand", brand);
        }
        self.bus.publish(event).await;
    }

    pub async fn vehicle_removed(&self, vehicle_id: u64, name: &str) {
        let event = self
            .event(EventType::VehicleRemoved, format!("Vehicle removed: {name}"))
            .with_entry("vehicleId", vehicle_id)
            .with_entry("vehicleName", name);
        self.bus.publish(event).await;
    }

    pub async fn vehicle_on_sale(
        &self,
        vehicle_id: u64,
        name: &str,
        old_price: f64,
        new_price: f64,
        vehicle_type: Option<&str>,
        brand: Option<&str>,
    ) {
        let discount = if old_price > 0.0 {
            (old_price - new_price) / old_price * 100.0
        } else {
            0.0
        };
        let mut event = self
            .event(EventType::VehicleOnSale, format!("Vehicle on sale: {name}"))
            .with_entry("vehicleId", vehicle_id)
            .with_entry("vehicleName", name)
            .with_entry("oldPrice", old_price)
            .with_entry("newPrice", new_price)
            .with_entry("discount", discount)
            .with_entry("savings", old_price - new_price);
        if let Some(vehicle_type) = vehicle_type {
            event = event.with_entry("vehicleType", vehicle_type);
        }
        if let Some(brand) = brand {
            event = event.with_entry("brand", brand);
        }
        self.bus.publish(event).await;
    }

    /// Publishes the raw price change; any promotion escalation happens
    /// inside the targeted observer, not here
    pub async fn price_changed(
        &self,
        vehicle_id: u64,
        name: &str,
        old_price: f64,
        new_price: f64,
        vehicle_type: Option<&str>,
        brand: Option<&str>,
    ) {
        let mut event = self
            .event(
                EventType::VehiclePriceChanged,
                format!("Price changed: {name}"),
            )
            .with_entry("vehicleId", vehicle_id)
            .with_entry("vehicleName", name)
            .with_entry("oldPrice", old_price)
            .with_entry("newPrice", new_price)
            .with_entry("priceDifference", new_price - old_price);
        if let Some(vehicle_type) = vehicle_type {
            event = event.with_entry("vehicleType", vehicle_type);
        }
        if let Some(brand) = brand {
            event = event.with_entry("brand", brand);
        }
        self.bus.publish(event).await;
    }

    pub async fn stock_updated(&self, vehicle_id: u64, name: &str, old_stock: u64, new_stock: u64) {
        let event = self
            .event(
                EventType::VehicleStockUpdated,
                format!("Stock updated: {name}"),
            )
            .with_entry("vehicleId", vehicle_id)
            .with_entry("vehicleName", name)
            .with_entry("oldStock", old_stock)
            .with_entry("newStock", new_stock)
            .with_entry("stockChange", new_stock as i64 - old_stock as i64);
        self.bus.publish(event).await;
    }

    pub async fn order_created(&self, order_id: u64, customer_email: &str, total_amount: f64) {
        let event = self
            .event(EventType::OrderCreated, format!("New order: #{order_id}"))
            .with_entry("orderId", order_id)
            .with_entry("customerEmail", customer_email)
            .with_entry("totalAmount", total_amount);
        self.bus.publish(event).await;
    }

    pub async fn order_status_changed(&self, order_id: u64, old_status: &str, new_status: &str) {
        let event = self
            .event(
                EventType::OrderStatusChanged,
                format!("Order #{order_id}: {old_status} -> {new_status}"),
            )
            .with_entry("orderId", order_id)
            .with_entry("oldStatus", old_status)
            .with_entry("newStatus", new_status);
        self.bus.publish(event).await;
    }

    pub async fn order_delivered(&self, order_id: u64, customer_name: &str) {
        let event = self
            .event(
                EventType::OrderDelivered,
                format!("Order delivered: #{order_id}"),
            )
            .with_entry("orderId", order_id)
            .with_entry("customerName", customer_name);
        self.bus.publish(event).await;
    }

    pub async fn client_registered(&self, client_id: u64, name: &str, email: &str) {
        let event = self
            .event(
                EventType::ClientRegistered,
                format!("New client: {name}"),
            )
            .with_entry("clientId", client_id)
            .with_entry("clientName", name)
            .with_entry("clientEmail", email);
        self.bus.publish(event).await;
    }

    pub async fn catalog_updated(&self, update_type: &str, description: &str) {
        let event = self
            .event(EventType::CatalogUpdated, format!("Catalog updated: {update_type}"))
            .with_entry("updateType", update_type)
            .with_entry("description", description);
        self.bus.publish(event).await;
    }

    pub async fn special_offer_added(&self, offer_name: &str, discount: f64) {
        let event = self
            .event(
                EventType::SpecialOfferAdded,
                format!("Special offer: {offer_name}"),
            )
            .with_entry("offerName", offer_name)
            .with_entry("discount", discount);
        self.bus.publish(event).await;
    }

    pub async fn system_error(&self, error_code: &str, error_message: &str) {
        let event = self
            .event(
                EventType::SystemError,
                format!("System error: {error_code}"),
            )
            .with_entry("errorCode", error_code)
            .with_entry("errorMessage", error_message);
        self.bus.publish(event).await;
    }
}

#[cfg(test)]
#[path = "producer_tests.rs"]
mod tests;
