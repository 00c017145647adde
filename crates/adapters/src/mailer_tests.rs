// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[tokio::test]
async fn log_mailer_always_succeeds() {
    let mailer = LogMailer::new();

    let result = mailer
        .send("someone@example.com", "Hello", "<p>body</p>")
        .await;

    assert!(result.is_ok());
}
