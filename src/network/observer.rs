// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Transfer observer trait
//!
//! The client has no implicit global logging dependency; callers inject
//! observers instead. Every hook defaults to a no-op, so implementors pick
//! only the events they care about.

use async_trait::async_trait;

use crate::error::Error;
use crate::http::Verb;

/// Observer notified around each transfer.
///
/// # Example
///
/// ```rust,no_run
/// use mustekala::{TransferObserver, Verb};
/// use async_trait::async_trait;
///
/// struct Counter;
///
/// #[async_trait]
/// impl TransferObserver for Counter {
///     async fn on_start(&self, verb: Verb, url: &str) {
///         println!("{} {}", verb, url);
///     }
/// }
/// ```
#[async_trait]
pub trait TransferObserver: Send + Sync {
    /// Called before the engine handle is created
    async fn on_start(&self, verb: Verb, url: &str) {
        let _ = (verb, url);
    }

    /// Called after a transfer completed at the transport level,
    /// whatever the HTTP status was
    async fn on_end(&self, verb: Verb, url: &str, status: u16) {
        let _ = (verb, url, status);
    }

    /// Called when the transfer failed at the transport level
    async fn on_error(&self, verb: Verb, url: &str, error: &Error) {
        let _ = (verb, url, error);
    }
}

/// Observer that reports transfers through `tracing`
#[derive(Debug, Default)]
pub struct TraceObserver;

#[async_trait]
impl TransferObserver for TraceObserver {
    async fn on_start(&self, verb: Verb, url: &str) {
        tracing::info!(method = %verb, url, "transfer start");
    }

    async fn on_end(&self, verb: Verb, url: &str, status: u16) {
        tracing::info!(method = %verb, url, status, "transfer end");
    }

    async fn on_error(&self, verb: Verb, url: &str, error: &Error) {
        tracing::warn!(method = %verb, url, error = %error, "transfer error");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Silent;

    impl TransferObserver for Silent {}

    #[tokio::test]
    async fn test_default_hooks_are_noops() {
        let observer = Silent;
        observer.on_start(Verb::Get, "http://example.com").await;
        observer.on_end(Verb::Get, "http://example.com", 200).await;
        observer
            .on_error(
                Verb::Get,
                "http://example.com",
                &Error::InvalidMethod("BREW".to_string()),
            )
            .await;
    }
}
