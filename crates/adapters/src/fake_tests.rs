// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[tokio::test]
async fn fake_mailer_records_calls() {
    let mailer = FakeMailer::new();

    mailer
        .send("a@example.com", "First", "<p>1</p>")
        .await
        .unwrap();
    mailer
        .send("b@example.com", "Second", "<p>2</p>")
        .await
        .unwrap();

    let calls = mailer.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].to, "a@example.com");
    assert_eq!(calls[0].subject, "First");
    assert_eq!(mailer.sent_to("b@example.com").len(), 1);
}

#[tokio::test]
async fn fake_mailer_fails_for_configured_recipient() {
    let mailer = FakeMailer::new();
    mailer.fail_for("bad@example.com");

    let result = mailer.send("bad@example.com", "Subject", "body").await;

    assert!(matches!(result, Err(MailError::Rejected(_))));
    assert!(mailer.calls().is_empty());
}

#[tokio::test]
async fn failing_store_errors_on_every_operation() {
    let store = FailingStore::new();

    let result = store
        .find_active_by_category(SubscriptionCategory::Promotions)
        .await;

    assert!(matches!(result, Err(StoreError::Backend(_))));
}
