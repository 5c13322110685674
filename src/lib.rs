// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # Mustekala - Fluent HTTP Transfer Client
//!
//! A small outbound HTTP client in the spirit of the classic libcurl
//! wrappers: set transport options on a bag, fire one transfer, read the
//! interpreted outcome. Pure Rust over the reqwest engine.
//!
//! ## Features
//!
//! - Option bag: user-set options merged over fixed defaults at read time
//! - Closed verb set: GET, POST, PUT, DELETE, HEAD, PATCH, OPTIONS
//! - Simplified outcome contract: body for 2xx, fail for 400..=510,
//!   pass-through for everything else
//! - Raw redirects: 3xx statuses surface as-is unless following is enabled
//! - Header capture mode for HEAD and OPTIONS
//! - Injected observers instead of ambient logging
//!
//! ## Example
//!
//! ```rust,no_run
//! use mustekala::{Outcome, TransferClient, TransferOpt};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut client = TransferClient::new();
//!     client
//!         .set_option(TransferOpt::TimeoutSecs, 10)
//!         .add_header_line("x-api-key: secret");
//!
//!     match client.get("https://example.com").await? {
//!         Outcome::Body(text) => println!("{}", text),
//!         Outcome::Pass => println!("non-error status"),
//!         Outcome::Fail => eprintln!("request failed"),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod http;
pub mod network;

// Re-exports for convenience

// Errors
pub use error::{Error, Result};

// HTTP
pub use http::{OptValue, OptionBag, Outcome, TransferClient, TransferOpt, Verb};
pub use http::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

// Observation
pub use network::{TraceObserver, TransferObserver};

/// Mustekala version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
