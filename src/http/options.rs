// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Transport option bag
//!
//! A flat key-value store over the engine's configuration surface. User-set
//! entries are merged over a fixed default set at read time; user values win
//! on conflict.

use std::collections::HashMap;

use super::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

/// Enumerated transport options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransferOpt {
    /// User-agent header sent with every request
    UserAgent,
    /// Overall transfer timeout, in seconds
    TimeoutSecs,
    /// Connect-phase timeout, in seconds
    ConnectTimeoutSecs,
    /// Retain the response body in memory
    BufferBody,
    /// Prepend the status line and raw header lines to the captured text
    IncludeHeaders,
    /// Method actually sent on the wire
    CustomMethod,
    /// Skip the response body entirely
    NoBody,
    /// A body sink is installed for this transfer
    CaptureBody,
    /// Raw request body
    PostFields,
    /// Extra header lines in `"name: value"` form
    HeaderLines,
    /// Follow redirects instead of surfacing them raw
    FollowRedirects,
    /// Redirect hop limit when following is enabled
    MaxRedirects,
    /// Proxy URL for the transfer
    Proxy,
    /// Skip TLS certificate verification (dangerous!)
    AcceptInvalidCerts,
}

/// Option values
#[derive(Debug, Clone, PartialEq)]
pub enum OptValue {
    Bool(bool),
    Int(i64),
    Str(String),
    List(Vec<String>),
}

impl OptValue {
    /// Boolean payload, if this is a `Bool`
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Integer payload, if this is an `Int`
    pub fn as_int(&self) -> Option<i64> {
        match self {
            OptValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// String payload, if this is a `Str`
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// List payload, if this is a `List`
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            OptValue::List(l) => Some(l),
            _ => None,
        }
    }
}

impl From<bool> for OptValue {
    fn from(b: bool) -> Self {
        OptValue::Bool(b)
    }
}

impl From<i64> for OptValue {
    fn from(i: i64) -> Self {
        OptValue::Int(i)
    }
}

impl From<i32> for OptValue {
    fn from(i: i32) -> Self {
        OptValue::Int(i64::from(i))
    }
}

impl From<String> for OptValue {
    fn from(s: String) -> Self {
        OptValue::Str(s)
    }
}

impl From<&str> for OptValue {
    fn from(s: &str) -> Self {
        OptValue::Str(s.to_string())
    }
}

impl From<Vec<String>> for OptValue {
    fn from(l: Vec<String>) -> Self {
        OptValue::List(l)
    }
}

/// Option store with read-time merge over defaults
#[derive(Debug, Clone)]
pub struct OptionBag {
    defaults: HashMap<TransferOpt, OptValue>,
    user: HashMap<TransferOpt, OptValue>,
}

impl Default for OptionBag {
    fn default() -> Self {
        Self::new()
    }
}

impl OptionBag {
    /// Create a bag holding only the fixed defaults
    pub fn new() -> Self {
        let mut defaults = HashMap::new();
        defaults.insert(
            TransferOpt::UserAgent,
            OptValue::Str(DEFAULT_USER_AGENT.to_string()),
        );
        defaults.insert(TransferOpt::TimeoutSecs, OptValue::Int(DEFAULT_TIMEOUT_SECS));
        defaults.insert(
            TransferOpt::ConnectTimeoutSecs,
            OptValue::Int(DEFAULT_TIMEOUT_SECS),
        );
        defaults.insert(TransferOpt::BufferBody, OptValue::Bool(true));
        defaults.insert(TransferOpt::IncludeHeaders, OptValue::Bool(false));

        Self {
            defaults,
            user: HashMap::new(),
        }
    }

    /// Insert or overwrite one user entry. No key-legality validation.
    pub fn set(&mut self, key: TransferOpt, value: impl Into<OptValue>) -> &mut Self {
        self.user.insert(key, value.into());
        self
    }

    /// Remove one user entry if present; no-op otherwise
    pub fn unset(&mut self, key: TransferOpt) -> &mut Self {
        self.user.remove(&key);
        self
    }

    /// Remove all user entries; defaults remain
    pub fn clear(&mut self) {
        self.user.clear();
    }

    /// Effective merged value for a key, user winning over default
    pub fn get(&self, key: TransferOpt) -> Option<&OptValue> {
        self.user.get(&key).or_else(|| self.defaults.get(&key))
    }

    /// Full merged mapping, user entries overriding defaults
    pub fn effective(&self) -> HashMap<TransferOpt, OptValue> {
        let mut merged = self.defaults.clone();
        for (key, value) in &self.user {
            merged.insert(*key, value.clone());
        }
        merged
    }

    pub(crate) fn flag(&self, key: TransferOpt) -> bool {
        matches!(self.get(key), Some(OptValue::Bool(true)))
    }

    pub(crate) fn int(&self, key: TransferOpt) -> Option<i64> {
        self.get(key).and_then(OptValue::as_int)
    }

    pub(crate) fn text(&self, key: TransferOpt) -> Option<&str> {
        self.get(key).and_then(OptValue::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get_returns_value() {
        let mut bag = OptionBag::new();
        bag.set(TransferOpt::PostFields, "a=1");
        assert_eq!(
            bag.get(TransferOpt::PostFields),
            Some(&OptValue::Str("a=1".to_string()))
        );
    }

    #[test]
    fn test_user_value_overrides_default() {
        let mut bag = OptionBag::new();
        bag.set(TransferOpt::TimeoutSecs, 5);
        assert_eq!(bag.int(TransferOpt::TimeoutSecs), Some(5));
    }

    #[test]
    fn test_unset_falls_back_to_default() {
        let mut bag = OptionBag::new();
        bag.set(TransferOpt::UserAgent, "custom-agent");
        bag.unset(TransferOpt::UserAgent);
        assert_eq!(bag.text(TransferOpt::UserAgent), Some(DEFAULT_USER_AGENT));
    }

    #[test]
    fn test_unset_without_default_returns_none() {
        let mut bag = OptionBag::new();
        bag.set(TransferOpt::PostFields, "body");
        bag.unset(TransferOpt::PostFields);
        assert_eq!(bag.get(TransferOpt::PostFields), None);
    }

    #[test]
    fn test_clear_keeps_defaults() {
        let mut bag = OptionBag::new();
        bag.set(TransferOpt::NoBody, true);
        bag.set(TransferOpt::TimeoutSecs, 1);
        bag.clear();
        assert_eq!(bag.get(TransferOpt::NoBody), None);
        assert_eq!(bag.int(TransferOpt::TimeoutSecs), Some(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_effective_contains_every_default_unless_overridden() {
        let mut bag = OptionBag::new();
        bag.set(TransferOpt::UserAgent, "override");

        let merged = bag.effective();
        assert_eq!(
            merged.get(&TransferOpt::UserAgent),
            Some(&OptValue::Str("override".to_string()))
        );
        assert_eq!(
            merged.get(&TransferOpt::TimeoutSecs),
            Some(&OptValue::Int(DEFAULT_TIMEOUT_SECS))
        );
        assert_eq!(
            merged.get(&TransferOpt::ConnectTimeoutSecs),
            Some(&OptValue::Int(DEFAULT_TIMEOUT_SECS))
        );
        assert_eq!(
            merged.get(&TransferOpt::BufferBody),
            Some(&OptValue::Bool(true))
        );
        assert_eq!(
            merged.get(&TransferOpt::IncludeHeaders),
            Some(&OptValue::Bool(false))
        );
    }

    #[test]
    fn test_absent_key_is_none() {
        let bag = OptionBag::new();
        assert_eq!(bag.get(TransferOpt::Proxy), None);
        assert!(!bag.flag(TransferOpt::FollowRedirects));
    }
}
