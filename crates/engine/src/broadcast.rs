// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Broadcast observer for operational alerts
//!
//! Watches a fixed allow-list of event types and mails every address on
//! the configured recipient list. One recipient's failure never blocks
//! the others.

use crate::templates;
use async_trait::async_trait;
use forecourt_adapters::Mailer;
use forecourt_core::{Clock, Event, EventBus, EventType, Observer, ObserverError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

const SUBJECT_PREFIX: &str = "[Forecourt] ";

/// Event types that produce an operational alert
const ALERTED_TYPES: [EventType; 6] = [
    EventType::VehicleAdded,
    EventType::VehicleOnSale,
    EventType::OrderCreated,
    EventType::OrderDelivered,
    EventType::ClientRegistered,
    EventType::SystemError,
];

#[derive(Debug, Clone)]
pub struct BroadcastConfig {
    /// When false the observer is never registered at all
    pub enabled: bool,
    pub recipients: Vec<String>,
}

impl Default for BroadcastConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            recipients: vec!["admin@forecourt.example".to_string()],
        }
    }
}

pub struct BroadcastObserver<M: Mailer> {
    mailer: M,
    recipients: Vec<String>,
    active: AtomicBool,
}

impl<M: Mailer> BroadcastObserver<M> {
    pub fn new(mailer: M, recipients: Vec<String>) -> Self {
        Self {
            mailer,
            recipients,
            active: AtomicBool::new(true),
        }
    }

    fn subject(event: &Event) -> String {
        let rest = match event.event_type {
            EventType::VehicleAdded => format!(
                "New vehicle - {}",
                event.str_value("vehicleName").unwrap_or("unknown")
            ),
            EventType::VehicleOnSale => format!(
                "PROMOTION - {}",
                event.str_value("vehicleName").unwrap_or("unknown")
            ),
            EventType::OrderCreated => format!(
                "New order #{}",
                event.u64_value("orderId").unwrap_or_default()
            ),
            EventType::OrderDelivered => format!(
                "Order delivered #{}",
                event.u64_value("orderId").unwrap_or_default()
            ),
            EventType::ClientRegistered => "New client registered".to_string(),
            EventType::SystemError => "SYSTEM ALERT - error detected".to_string(),
            other => format!("Notification - {}", other.name()),
        };
        format!("{SUBJECT_PREFIX}{rest}")
    }
}

#[async_trait]
impl<M: Mailer> Observer for BroadcastObserver<M> {
    async fn on_event(&self, event: &Event) -> Result<(), ObserverError> {
        if !ALERTED_TYPES.contains(&event.event_type) {
            return Ok(());
        }

        let subject = Self::subject(event);
        let body = templates::alert_body(event);

        for recipient in &self.recipients {
            if let Err(error) = self.mailer.send(recipient, &subject, &body).await {
                tracing::warn!(
                    recipient,
                    event = event.event_type.name(),
                    error = %error,
                    "operational alert failed"
                );
            }
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "broadcast"
    }

    fn is_active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }

    fn set_active(&self, active: bool) {
        self.active.store(active, Ordering::Relaxed);
        tracing::info!(observer = "broadcast", active, "activity changed");
    }
}

/// Wire the broadcast observer onto the bus unless disabled by config
pub fn register_broadcast<M: Mailer, C: Clock>(
    bus: &EventBus<C>,
    mailer: M,
    config: BroadcastConfig,
) -> Option<Arc<BroadcastObserver<M>>> {
    if !config.enabled {
        tracing::info!("broadcast observer disabled by configuration");
        return None;
    }
    let observer = Arc::new(BroadcastObserver::new(mailer, config.recipients));
    bus.register(observer.clone());
    Some(observer)
}

#[cfg(test)]
#[path = "broadcast_tests.rs"]
mod tests;
