// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP transfer layer
//!
//! A fluent option-setting client over the reqwest engine: configure
//! options, execute one transfer, interpret the status code.

mod client;
mod options;
mod outcome;
mod verb;

pub use client::TransferClient;
pub use options::{OptValue, OptionBag, TransferOpt};
pub use outcome::Outcome;
pub use verb::Verb;

/// Default user agent string
pub const DEFAULT_USER_AGENT: &str = concat!("mustekala/", env!("CARGO_PKG_VERSION"));

/// Default connect and overall timeout, in seconds
pub const DEFAULT_TIMEOUT_SECS: i64 = 30;

/// Default redirect hop limit when following is enabled
pub const DEFAULT_MAX_REDIRECTS: usize = 10;
