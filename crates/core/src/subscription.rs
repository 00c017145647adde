// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subscription model: categories, the event-type mapping, and the
//! per-client preference filter

use crate::event::EventType;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Client identifier as assigned by the external client directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClientId(pub u64);

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Coarse-grained interest groups a client can opt into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubscriptionCategory {
    CatalogUpdates,
    NewVehicles,
    Promotions,
    PriceDrops,
    OrderNotifications,
    StockAlerts,
    Maintenance,
    Newsletter,
}

/// How often a subscriber wants email
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmailFrequency {
    #[default]
    Immediate,
    DailyDigest,
    WeeklyDigest,
}

/// Fixed many-to-one mapping from event types to subscription categories
///
/// Event types absent from this table never trigger targeted fan-out; they
/// may still reach the broadcast observer.
pub fn category_for(event_type: EventType) -> Option<SubscriptionCategory> {
    match event_type {
        EventType::VehicleAdded => Some(SubscriptionCategory::NewVehicles),
        EventType::VehicleOnSale => Some(SubscriptionCategory::Promotions),
        EventType::VehiclePriceChanged => Some(SubscriptionCategory::PriceDrops),
        EventType::CatalogUpdated => Some(SubscriptionCategory::CatalogUpdates),
        EventType::SpecialOfferAdded => Some(SubscriptionCategory::Promotions),
        _ => None,
    }
}

/// One client's notification preferences
///
/// The optional filters narrow which events within a subscribed category
/// actually produce a notification. An absent filter is unconstrained; a
/// present filter must be satisfied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriberPreference {
    pub client_id: ClientId,
    pub client_email: String,
    #[serde(default)]
    pub active_categories: HashSet<SubscriptionCategory>,

    // Channel toggles
    #[serde(default = "default_true")]
    pub email_enabled: bool,
    #[serde(default)]
    pub sms_enabled: bool,
    #[serde(default)]
    pub push_enabled: bool,

    // Filters
    #[serde(default)]
    pub vehicle_types: HashSet<String>,
    #[serde(default)]
    pub min_price: Option<f64>,
    #[serde(default)]
    pub max_price: Option<f64>,
    #[serde(default)]
    pub brands: HashSet<String>,

    #[serde(default)]
    pub frequency: EmailFrequency,
}

fn default_true() -> bool {
    true
}

impl SubscriberPreference {
    pub fn new(client_id: ClientId, client_email: impl Into<String>) -> Self {
        Self {
            client_id,
            client_email: client_email.into(),
            active_categories: HashSet::new(),
            email_enabled: true,
            sms_enabled: false,
            push_enabled: false,
            vehicle_types: HashSet::new(),
            min_price: None,
            max_price: None,
            brands: HashSet::new(),
            frequency: EmailFrequency::Immediate,
        }
    }

    pub fn is_subscribed_to(&self, category: SubscriptionCategory) -> bool {
        self.active_categories.contains(&category)
    }

    /// Evaluate the vehicle filters against one event's attributes
    ///
    /// All present filters must hold (AND). A set filter never matches an
    /// unknown attribute: a configured price bound fails when the event
    /// carries no price, and likewise for vehicle type and brand.
    pub fn matches_vehicle_filter(
        &self,
        vehicle_type: Option<&str>,
        price: Option<f64>,
        brand: Option<&str>,
    ) -> bool {
        let type_ok = self.vehicle_types.is_empty()
            || vehicle_type.is_some_and(|t| self.vehicle_types.contains(t));

        let min_ok = match self.min_price {
            None => true,
            Some(min) => price.is_some_and(|p| p >= min),
        };
        let max_ok = match self.max_price {
            None => true,
            Some(max) => price.is_some_and(|p| p <= max),
        };

        let brand_ok =
            self.brands.is_empty() || brand.is_some_and(|b| self.brands.contains(b));

        type_ok && min_ok && max_ok && brand_ok
    }
}

#[cfg(test)]
#[path = "subscription_tests.rs"]
mod tests;
