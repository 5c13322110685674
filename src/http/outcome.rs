// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Status interpretation
//!
//! Maps the status code of a completed transfer into the simplified return
//! contract: a captured body for 2xx, `Fail` for 400..=510, `Pass` for
//! everything else. HEAD never carries body semantics and maps to `Pass`
//! on success. The 400..=510 range is inherited behavior, kept for
//! compatibility; callers needing the real status read it off the client.

use super::verb::Verb;

/// Result of one executed transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Success status with the captured response text (may be empty)
    Body(String),
    /// Pass-through non-error status: 1xx, 3xx, anything above 510, or a
    /// successful HEAD
    Pass,
    /// Client or server error status (400..=510)
    Fail,
}

impl Outcome {
    /// Interpret a recorded status code for the given verb
    pub fn from_status(verb: Verb, status: u16, text: &str) -> Self {
        match status {
            200..=299 if verb == Verb::Head => Outcome::Pass,
            200..=299 => Outcome::Body(text.to_string()),
            400..=510 => Outcome::Fail,
            _ => Outcome::Pass,
        }
    }

    /// Captured text, if the transfer produced one
    pub fn body(&self) -> Option<&str> {
        match self {
            Outcome::Body(text) => Some(text),
            _ => None,
        }
    }

    /// Consume the outcome, yielding the captured text if any
    pub fn into_body(self) -> Option<String> {
        match self {
            Outcome::Body(text) => Some(text),
            _ => None,
        }
    }

    /// Check for the pass-through case
    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Pass)
    }

    /// Check for the error-range case
    pub fn is_fail(&self) -> bool {
        matches!(self, Outcome::Fail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_returns_body() {
        let outcome = Outcome::from_status(Verb::Get, 200, "hello");
        assert_eq!(outcome, Outcome::Body("hello".to_string()));
        assert_eq!(outcome.body(), Some("hello"));
    }

    #[test]
    fn test_204_returns_empty_body_not_a_boolean() {
        let outcome = Outcome::from_status(Verb::Get, 204, "");
        assert_eq!(outcome, Outcome::Body(String::new()));
    }

    #[test]
    fn test_head_success_is_pass_never_a_body() {
        let outcome = Outcome::from_status(Verb::Head, 200, "ignored");
        assert!(outcome.is_pass());
        assert_eq!(outcome.body(), None);
    }

    #[test]
    fn test_error_range_boundaries() {
        assert!(Outcome::from_status(Verb::Get, 400, "").is_fail());
        assert!(Outcome::from_status(Verb::Get, 404, "").is_fail());
        assert!(Outcome::from_status(Verb::Get, 500, "").is_fail());
        assert!(Outcome::from_status(Verb::Get, 510, "").is_fail());
        // just outside the inherited range
        assert!(Outcome::from_status(Verb::Get, 399, "").is_pass());
        assert!(Outcome::from_status(Verb::Get, 511, "").is_pass());
    }

    #[test]
    fn test_redirect_passes_through() {
        assert!(Outcome::from_status(Verb::Get, 301, "").is_pass());
        assert!(Outcome::from_status(Verb::Get, 302, "").is_pass());
    }

    #[test]
    fn test_informational_passes_through() {
        assert!(Outcome::from_status(Verb::Get, 101, "").is_pass());
    }

    #[test]
    fn test_head_error_range_still_fails() {
        assert!(Outcome::from_status(Verb::Head, 404, "").is_fail());
    }

    #[test]
    fn test_options_success_keeps_body_semantics() {
        // only HEAD gets the boolean treatment on 2xx
        let outcome = Outcome::from_status(Verb::Options, 204, "allow: GET");
        assert_eq!(outcome.body(), Some("allow: GET"));
    }

    #[test]
    fn test_into_body() {
        assert_eq!(
            Outcome::from_status(Verb::Get, 200, "x").into_body(),
            Some("x".to_string())
        );
        assert_eq!(Outcome::Pass.into_body(), None);
    }
}
