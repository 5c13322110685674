// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP verb allow-list

use std::fmt;

use crate::error::{Error, Result};

/// The closed set of verbs the client will execute.
///
/// Anything outside this set is rejected before any network activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
    Head,
    Patch,
    Options,
}

impl Verb {
    /// All allowed verbs
    pub const ALL: [Verb; 7] = [
        Verb::Get,
        Verb::Post,
        Verb::Put,
        Verb::Delete,
        Verb::Head,
        Verb::Patch,
        Verb::Options,
    ];

    /// Parse a method string, case-insensitively
    pub fn parse(method: &str) -> Result<Self> {
        match method.to_ascii_uppercase().as_str() {
            "GET" => Ok(Verb::Get),
            "POST" => Ok(Verb::Post),
            "PUT" => Ok(Verb::Put),
            "DELETE" => Ok(Verb::Delete),
            "HEAD" => Ok(Verb::Head),
            "PATCH" => Ok(Verb::Patch),
            "OPTIONS" => Ok(Verb::Options),
            other => Err(Error::InvalidMethod(other.to_string())),
        }
    }

    /// Canonical uppercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
            Verb::Head => "HEAD",
            Verb::Patch => "PATCH",
            Verb::Options => "OPTIONS",
        }
    }

    /// Whether the response body is suppressed for this verb
    pub fn suppresses_body(&self) -> bool {
        matches!(self, Verb::Head | Verb::Options)
    }

    pub(crate) fn to_method(self) -> reqwest::Method {
        match self {
            Verb::Get => reqwest::Method::GET,
            Verb::Post => reqwest::Method::POST,
            Verb::Put => reqwest::Method::PUT,
            Verb::Delete => reqwest::Method::DELETE,
            Verb::Head => reqwest::Method::HEAD,
            Verb::Patch => reqwest::Method::PATCH,
            Verb::Options => reqwest::Method::OPTIONS,
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
