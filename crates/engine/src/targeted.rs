// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Targeted per-subscriber notification observer
//!
//! Resolves the subscription category for vehicle and promotion events,
//! evaluates each subscriber's preference filters, and mails every match.
//! Price changes get special handling: only a drop at or above the
//! configured threshold notifies anyone, and such a drop is additionally
//! escalated to the promotions audience.

use crate::catalog::SubscriptionCatalog;
use crate::templates;
use async_trait::async_trait;
use forecourt_adapters::{ClientDirectory, Mailer, SubscriptionStore};
use forecourt_core::{
    category_for, Event, EventType, Observer, ObserverError, SubscriptionCategory,
};
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Clone)]
pub struct TargetedConfig {
    /// Price-drop percentage at or above which a change escalates to a
    /// promotion. Inclusive: a drop of exactly this value escalates.
    pub price_drop_threshold: f64,
}

impl Default for TargetedConfig {
    fn default() -> Self {
        Self {
            price_drop_threshold: 5.0,
        }
    }
}

pub struct TargetedSubscriptionObserver<M, S, D>
where
    M: Mailer,
    S: SubscriptionStore,
    D: ClientDirectory,
{
    catalog: SubscriptionCatalog<S, D>,
    mailer: M,
    config: TargetedConfig,
    active: AtomicBool,
}

impl<M, S, D> TargetedSubscriptionObserver<M, S, D>
where
    M: Mailer,
    S: SubscriptionStore,
    D: ClientDirectory,
{
    pub fn new(catalog: SubscriptionCatalog<S, D>, mailer: M, config: TargetedConfig) -> Self {
        Self {
            catalog,
            mailer,
            config,
            active: AtomicBool::new(true),
        }
    }

    /// Price to match against: sale and price-change events carry the new
    /// price; other events carry a plain `price` key
    fn match_price(event: &Event) -> Option<f64> {
        match event.event_type {
            EventType::VehicleOnSale | EventType::VehiclePriceChanged => {
                event.f64_value("newPrice")
            }
            _ => event.f64_value("price"),
        }
    }

    async fn notify_matches(
        &self,
        event: &Event,
        category: SubscriptionCategory,
    ) -> Result<(), ObserverError> {
        let subscribers = self
            .catalog
            .subscribers_for(category)
            .await
            .map_err(|e| ObserverError::Store(e.to_string()))?;

        let vehicle_type = event.str_value("vehicleType");
        let price = Self::match_price(event);
        let brand = event.str_value("brand");

        let mut sent = 0usize;
        for pref in &subscribers {
            if !pref.matches_vehicle_filter(vehicle_type, price, brand) {
                continue;
            }
            let (subject, body) = Self::compose(event, category);
            match self.mailer.send(&pref.client_email, &subject, &body).await {
                Ok(()) => sent += 1,
                Err(error) => {
                    tracing::warn!(
                        recipient = pref.client_email.as_str(),
                        event = event.event_type.name(),
                        error = %error,
                        "targeted notification failed"
                    );
                }
            }
        }

        tracing::debug!(
            event = event.event_type.name(),
            category = ?category,
            candidates = subscribers.len(),
            sent,
            "targeted fan-out complete"
        );
        Ok(())
    }

    fn compose(event: &Event, category: SubscriptionCategory) -> (String, String) {
        match category {
            SubscriptionCategory::Promotions | SubscriptionCategory::PriceDrops => {
                let name = event
                    .str_value("vehicleName")
                    .or_else(|| event.str_value("offerName"))
                    .unwrap_or("our catalog");
                (
                    format!("Limited-time offer: {name}"),
                    templates::promotion_body(event),
                )
            }
            _ => {
                let name = event.str_value("vehicleName").unwrap_or("a new arrival");
                (
                    format!("New vehicle available: {name}"),
                    templates::new_vehicle_body(event),
                )
            }
        }
    }

    async fn handle_price_change(&self, event: &Event) -> Result<(), ObserverError> {
        let (Some(old_price), Some(new_price)) =
            (event.f64_value("oldPrice"), event.f64_value("newPrice"))
        else {
            return Ok(());
        };
        if new_price >= old_price {
            return Ok(());
        }

        let drop_pct = (old_price - new_price) / old_price * 100.0;
        if drop_pct < self.config.price_drop_threshold {
            tracing::debug!(
                drop_pct,
                threshold = self.config.price_drop_threshold,
                "price drop below threshold, ignoring"
            );
            return Ok(());
        }

        // Significant drop: notify price-drop watchers, then escalate to
        // the promotions audience as if the vehicle went on sale.
        self.notify_matches(event, SubscriptionCategory::PriceDrops)
            .await?;
        self.notify_matches(event, SubscriptionCategory::Promotions)
            .await
    }
}

#[async_trait]
impl<M, S, D> Observer for TargetedSubscriptionObserver<M, S, D>
where
    M: Mailer,
    S: SubscriptionStore,
    D: ClientDirectory,
{
    async fn on_event(&self, event: &Event) -> Result<(), ObserverError> {
        match event.event_type {
            EventType::VehiclePriceChanged => self.handle_price_change(event).await,
            EventType::VehicleAdded | EventType::VehicleOnSale | EventType::SpecialOfferAdded => {
                match category_for(event.event_type) {
                    Some(category) => self.notify_matches(event, category).await,
                    None => Ok(()),
                }
            }
            _ => Ok(()),
        }
    }

    fn name(&self) -> &str {
        "targeted-subscriptions"
    }

    fn is_active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }

    fn set_active(&self, active: bool) {
        self.active.store(active, Ordering::Relaxed);
        tracing::info!(observer = "targeted-subscriptions", active, "activity changed");
    }
}

#[cfg(test)]
#[path = "targeted_tests.rs"]
mod tests;
