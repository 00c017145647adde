// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTML email bodies
//!
//! Jinja2-style templates rendered per send. All payload extraction
//! happens here in Rust so the templates only ever see plain strings.

use forecourt_core::Event;
use minijinja::{context, Environment};

const ALERT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<body>
  <h2>Forecourt — {{ event_type }}</h2>
  <p>{{ message }}</p>
  <ul>
{% for key, value in payload | dictsort %}    <li><strong>{{ key }}</strong>: {{ value }}</li>
{% endfor %}  </ul>
  <p><small>{{ source }} &middot; {{ timestamp }}</small></p>
</body>
</html>
"#;

const NEW_VEHICLE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<body>
  <h2>New vehicle available</h2>
  <h3>{{ vehicle_name }}</h3>
  <p><strong>Type:</strong> {{ vehicle_type }}</p>
  <p><strong>Brand:</strong> {{ brand }}</p>
  <p><strong>Price:</strong> {{ price }}</p>
  <p>This vehicle matches your subscription preferences.</p>
  <p><small>To change your preferences, visit your account.</small></p>
</body>
</html>
"#;

const PROMOTION_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<body>
  <h2>Limited-time offer</h2>
  <h3>{{ name }}</h3>
  <p><strong>Was:</strong> {{ old_price }}</p>
  <p><strong>Now:</strong> {{ new_price }}</p>
  <p><strong>Discount:</strong> {{ discount }}%</p>
  <p>This offer matches your subscription preferences.</p>
  <p><small>Offer reserved for catalog subscribers.</small></p>
</body>
</html>
"#;

fn render(template: &str, ctx: minijinja::Value) -> String {
    let env = Environment::new();
    match env
        .template_from_str(template)
        .and_then(|tmpl| tmpl.render(ctx))
    {
        Ok(html) => html,
        Err(error) => {
            tracing::warn!(error = %error, "email template render failed");
            String::new()
        }
    }
}

fn price_label(value: Option<f64>) -> String {
    match value {
        Some(price) => format!("{price:.0}"),
        None => "on request".to_string(),
    }
}

/// Operational alert body for the broadcast observer
pub(crate) fn alert_body(event: &Event) -> String {
    render(
        ALERT_TEMPLATE,
        context! {
            event_type => event.event_type.name(),
            message => &event.message,
            payload => &event.payload,
            source => &event.source,
            timestamp => event.timestamp.to_rfc3339(),
        },
    )
}

/// Personalized new-vehicle body for targeted notifications
pub(crate) fn new_vehicle_body(event: &Event) -> String {
    render(
        NEW_VEHICLE_TEMPLATE,
        context! {
            vehicle_name => event.str_value("vehicleName").unwrap_or("New arrival"),
            vehicle_type => event.str_value("vehicleType").unwrap_or("not specified"),
            brand => event.str_value("brand").unwrap_or("not specified"),
            price => price_label(event.f64_value("price")),
        },
    )
}

/// Personalized promotion body for targeted notifications
pub(crate) fn promotion_body(event: &Event) -> String {
    let name = event
        .str_value("vehicleName")
        .or_else(|| event.str_value("offerName"))
        .unwrap_or("Special offer");
    let discount = match event.f64_value("discount") {
        Some(pct) => format!("{pct:.1}"),
        None => "-".to_string(),
    };
    render(
        PROMOTION_TEMPLATE,
        context! {
            name,
            old_price => price_label(event.f64_value("oldPrice")),
            new_price => price_label(event.f64_value("newPrice")),
            discount,
        },
    )
}
