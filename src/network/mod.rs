// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Transfer observation
//!
//! Hooks invoked around each transfer for logging and profiling.

mod observer;

pub use observer::{TraceObserver, TransferObserver};
