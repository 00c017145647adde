// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Catalog event model
//!
//! Events are immutable after publication: producers build them with the
//! `with_*` methods, hand them to the bus, and observers only ever see
//! `&Event`.
//!
//! The payload is a free-form JSON map so that new event types can be added
//! without touching the bus, but the keys each producer writes are fixed.
//! Observers must tolerate missing optional keys.
//!
//! | EventType            | required keys                                | optional keys                              |
//! |----------------------|----------------------------------------------|--------------------------------------------|
//! | `VehicleAdded`       | vehicleId, vehicleName, price                | vehicleType, brand, description, eventId   |
//! | `VehicleOnSale`      | vehicleId, vehicleName, oldPrice, newPrice, discount | vehicleType, brand, promotionName, savings, eventId |
//! | `VehiclePriceChanged`| vehicleId, vehicleName, oldPrice, newPrice   | vehicleType, brand, priceDifference, eventId |
//! | `VehicleStockUpdated`| vehicleId, vehicleName, oldStock, newStock   | vehicleType, price, stockChange, eventId   |
//! | `OrderCreated`       | orderId, customerEmail, totalAmount          | vehicleName, orderNumber, status, eventId  |
//! | `OrderStatusChanged` | orderId, oldStatus, newStatus                | customerEmail, orderNumber, eventId        |
//! | `OrderDelivered`     | orderId, customerName                        | deliveryAddress, status, eventId           |
//! | `ClientRegistered`   | clientId, clientName, clientEmail            | clientType, eventId                        |
//! | `CatalogUpdated`     | updateType, description                      | vehicleCount, updatedBy, eventId           |
//! | `SpecialOfferAdded`  | offerName, discount                          | description, validUntil, eventId           |
//! | `SystemError`        | errorCode, errorMessage                      | component, severity, eventId               |

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Default `source` tag for events produced by this process
pub const DEFAULT_SOURCE: &str = "forecourt";

/// Closed set of catalog event types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    // Vehicle events
    VehicleAdded,
    VehicleRemoved,
    VehicleOnSale,
    VehiclePriceChanged,
    VehicleStockUpdated,

    // Order events
    OrderCreated,
    OrderStatusChanged,
    OrderCancelled,
    OrderDelivered,

    // Client events
    ClientRegistered,
    ClientUpdated,
    ClientPurchased,

    // Catalog events
    CatalogUpdated,
    SpecialOfferAdded,
    CatalogSearchPerformed,

    // System events
    SystemError,
    MaintenanceMode,
    BackupCompleted,

    // Cart events
    CartItemAdded,
    CartItemRemoved,
    CartCheckout,
}

impl EventType {
    /// Stable `category:action` name used in logs and diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            EventType::VehicleAdded => "vehicle:added",
            EventType::VehicleRemoved => "vehicle:removed",
            EventType::VehicleOnSale => "vehicle:on-sale",
            EventType::VehiclePriceChanged => "vehicle:price-changed",
            EventType::VehicleStockUpdated => "vehicle:stock-updated",
            EventType::OrderCreated => "order:created",
            EventType::OrderStatusChanged => "order:status-changed",
            EventType::OrderCancelled => "order:cancelled",
            EventType::OrderDelivered => "order:delivered",
            EventType::ClientRegistered => "client:registered",
            EventType::ClientUpdated => "client:updated",
            EventType::ClientPurchased => "client:purchased",
            EventType::CatalogUpdated => "catalog:updated",
            EventType::SpecialOfferAdded => "catalog:special-offer",
            EventType::CatalogSearchPerformed => "catalog:search",
            EventType::SystemError => "system:error",
            EventType::MaintenanceMode => "system:maintenance",
            EventType::BackupCompleted => "system:backup-completed",
            EventType::CartItemAdded => "cart:item-added",
            EventType::CartItemRemoved => "cart:item-removed",
            EventType::CartCheckout => "cart:checkout",
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single catalog occurrence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub event_type: EventType,
    pub message: String,
    #[serde(default)]
    pub payload: HashMap<String, Value>,
    pub timestamp: DateTime<Utc>,
    pub source: String,
}

impl Event {
    pub fn new(
        event_type: EventType,
        message: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            event_type,
            message: message.into(),
            payload: HashMap::new(),
            timestamp,
            source: DEFAULT_SOURCE.to_string(),
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Replace the whole payload map
    pub fn with_payload(mut self, payload: HashMap<String, Value>) -> Self {
        self.payload = payload;
        self
    }

    /// Add a single payload entry
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.payload.insert(key.into(), value.into());
        self
    }

    /// String payload value, if present and a string
    pub fn str_value(&self, key: &str) -> Option<&str> {
        self.payload.get(key).and_then(Value::as_str)
    }

    /// Numeric payload value as f64 (accepts any JSON number)
    pub fn f64_value(&self, key: &str) -> Option<f64> {
        self.payload.get(key).and_then(Value::as_f64)
    }

    /// Numeric payload value as u64
    pub fn u64_value(&self, key: &str) -> Option<u64> {
        self.payload.get(key).and_then(Value::as_u64)
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
