// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Transfer client implementation

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use bytes::BytesMut;
use futures::StreamExt;
use reqwest::header::{HeaderName, HeaderValue};
use reqwest::redirect::Policy;

use super::options::{OptValue, OptionBag, TransferOpt};
use super::outcome::Outcome;
use super::verb::Verb;
use super::DEFAULT_MAX_REDIRECTS;
use crate::error::{Error, Result};
use crate::network::TransferObserver;

/// Fluent HTTP transfer client.
///
/// Holds the transport option bag and the state of the last completed
/// transfer. One instance per concurrent caller; the option bag and
/// response state belong to the instance and are overwritten on every
/// request.
///
/// # Example
///
/// ```rust,no_run
/// use mustekala::{Outcome, TransferClient, TransferOpt};
///
/// # async fn run() -> mustekala::Result<()> {
/// let mut client = TransferClient::new();
/// client.set_option(TransferOpt::TimeoutSecs, 10);
///
/// match client.get("https://example.com").await? {
///     Outcome::Body(text) => println!("{}", text),
///     Outcome::Pass => println!("non-error status"),
///     Outcome::Fail => eprintln!("request failed"),
/// }
/// # Ok(())
/// # }
/// ```
pub struct TransferClient {
    options: OptionBag,
    response: Option<String>,
    response_code: Option<u16>,
    observers: Vec<Arc<dyn TransferObserver>>,
}

impl Default for TransferClient {
    fn default() -> Self {
        Self::new()
    }
}

impl TransferClient {
    /// Create a client holding only the default options
    pub fn new() -> Self {
        Self {
            options: OptionBag::new(),
            response: None,
            response_code: None,
            observers: Vec::new(),
        }
    }

    /// Register an observer notified around each transfer
    pub fn add_observer(&mut self, observer: impl TransferObserver + 'static) -> &mut Self {
        self.observers.push(Arc::new(observer));
        self
    }

    // === Option surface ===

    /// Set a transport option
    pub fn set_option(&mut self, key: TransferOpt, value: impl Into<OptValue>) -> &mut Self {
        self.options.set(key, value);
        self
    }

    /// Unset a single transport option
    pub fn unset_option(&mut self, key: TransferOpt) -> &mut Self {
        self.options.unset(key);
        self
    }

    /// Unset all user-set options, excluding default options
    pub fn unset_options(&mut self) -> &mut Self {
        self.options.clear();
        self
    }

    /// Total reset of options and response state
    pub fn reset(&mut self) -> &mut Self {
        self.options.clear();
        self.response = None;
        self.response_code = None;
        self
    }

    /// Effective value for a single option, or `None` if unset everywhere
    pub fn get_option(&self, key: TransferOpt) -> Option<&OptValue> {
        self.options.get(key)
    }

    /// Full merged option mapping, user entries winning over defaults
    pub fn get_options(&self) -> HashMap<TransferOpt, OptValue> {
        self.options.effective()
    }

    /// Set the raw request body
    pub fn set_post_fields(&mut self, body: impl Into<String>) -> &mut Self {
        self.set_option(TransferOpt::PostFields, body.into())
    }

    /// Serialize a value as the JSON request body and tag the content type
    pub fn set_json<T: serde::Serialize>(&mut self, value: &T) -> Result<&mut Self> {
        let body = serde_json::to_string(value)?;
        self.set_option(TransferOpt::PostFields, body);
        self.add_header_line("content-type: application/json");
        Ok(self)
    }

    /// Append one `"name: value"` header line to the request
    pub fn add_header_line(&mut self, line: impl Into<String>) -> &mut Self {
        let mut lines = match self.options.get(TransferOpt::HeaderLines) {
            Some(OptValue::List(l)) => l.clone(),
            _ => Vec::new(),
        };
        lines.push(line.into());
        self.set_option(TransferOpt::HeaderLines, lines)
    }

    // === Response state ===

    /// Raw text captured by the last completed transfer
    pub fn response(&self) -> Option<&str> {
        self.response.as_deref()
    }

    /// Status code recorded by the last completed transfer
    pub fn response_code(&self) -> Option<u16> {
        self.response_code
    }

    // === Convenience verbs ===

    /// Start performing a GET request
    pub async fn get(&mut self, url: &str) -> Result<Outcome> {
        self.http_request("GET", url).await
    }

    /// Start performing a HEAD request
    pub async fn head(&mut self, url: &str) -> Result<Outcome> {
        self.http_request("HEAD", url).await
    }

    /// Start performing a POST request
    pub async fn post(&mut self, url: &str) -> Result<Outcome> {
        self.http_request("POST", url).await
    }

    /// Start performing a PUT request
    pub async fn put(&mut self, url: &str) -> Result<Outcome> {
        self.http_request("PUT", url).await
    }

    /// Start performing a DELETE request
    pub async fn delete(&mut self, url: &str) -> Result<Outcome> {
        self.http_request("DELETE", url).await
    }

    /// Start performing a PATCH request
    pub async fn patch(&mut self, url: &str) -> Result<Outcome> {
        self.http_request("PATCH", url).await
    }

    /// Start performing an OPTIONS request
    pub async fn options(&mut self, url: &str) -> Result<Outcome> {
        self.http_request("OPTIONS", url).await
    }

    // === Core operation ===

    /// Perform one HTTP transfer.
    ///
    /// The method string is normalized to uppercase and must be one of the
    /// allowed verbs; anything else fails with [`Error::InvalidMethod`]
    /// before any network activity. The URL is handed to the engine as-is.
    ///
    /// Method-specific options are finalized on the bag itself, so they
    /// remain visible through [`get_option`](Self::get_option) afterwards.
    pub async fn http_request(&mut self, method: &str, url: &str) -> Result<Outcome> {
        let verb = Verb::parse(method)?;

        self.set_option(TransferOpt::CustomMethod, verb.as_str());
        if verb.suppresses_body() {
            // header capture mode: no body sink is installed
            self.set_option(TransferOpt::NoBody, true)
                .set_option(TransferOpt::IncludeHeaders, true)
                .unset_option(TransferOpt::CaptureBody);
        } else {
            self.set_option(TransferOpt::CaptureBody, true);
        }

        tracing::debug!(method = %verb, url, "starting transfer");
        for observer in &self.observers {
            observer.on_start(verb, url).await;
        }

        let result = self.execute(verb, url).await;

        match &result {
            Ok((status, _)) => {
                tracing::debug!(method = %verb, url, status, "transfer complete");
                for observer in &self.observers {
                    observer.on_end(verb, url, *status).await;
                }
            }
            Err(error) => {
                tracing::debug!(method = %verb, url, error = %error, "transfer failed");
                for observer in &self.observers {
                    observer.on_error(verb, url, error).await;
                }
            }
        }

        // a transport failure leaves the previous response state untouched
        let (status, text) = result?;
        let outcome = Outcome::from_status(verb, status, &text);
        self.response_code = Some(status);
        self.response = Some(text);
        Ok(outcome)
    }

    /// Run one transfer against a per-call engine handle.
    ///
    /// The handle lives only for this call and is dropped on every exit
    /// path, success or error.
    async fn execute(&self, verb: Verb, url: &str) -> Result<(u16, String)> {
        let engine = self.build_engine()?;
        let mut request = engine.request(verb.to_method(), url);

        if let Some(lines) = self
            .options
            .get(TransferOpt::HeaderLines)
            .and_then(OptValue::as_list)
        {
            for line in lines {
                match parse_header_line(line) {
                    Some((name, value)) => request = request.header(name, value),
                    None => tracing::warn!(line = %line, "skipping malformed header line"),
                }
            }
        }

        if let Some(body) = self.options.text(TransferOpt::PostFields) {
            request = request.body(body.to_string());
        }

        let response = request.send().await?;
        let status = response.status().as_u16();

        let mut text = String::new();
        if self.options.flag(TransferOpt::IncludeHeaders) {
            text.push_str(&format_head(&response));
        }

        if self.options.flag(TransferOpt::NoBody) {
            // body suppressed: nothing further to read
        } else if self.options.flag(TransferOpt::CaptureBody)
            || self.options.flag(TransferOpt::BufferBody)
        {
            let mut accumulator = BytesMut::new();
            let mut stream = response.bytes_stream();
            while let Some(chunk) = stream.next().await {
                let chunk = chunk?;
                tracing::trace!(len = chunk.len(), "body chunk");
                accumulator.extend_from_slice(&chunk);
            }
            text.push_str(&String::from_utf8_lossy(&accumulator));
        } else {
            // buffering disabled: drain the body without retaining it
            let mut stream = response.bytes_stream();
            while let Some(chunk) = stream.next().await {
                chunk?;
            }
        }

        Ok((status, text))
    }

    /// Translate the effective option set into an engine handle
    fn build_engine(&self) -> Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder();

        if let Some(agent) = self.options.text(TransferOpt::UserAgent) {
            builder = builder.user_agent(agent);
        }
        if let Some(secs) = self.options.int(TransferOpt::TimeoutSecs) {
            builder = builder.timeout(Duration::from_secs(secs.max(0) as u64));
        }
        if let Some(secs) = self.options.int(TransferOpt::ConnectTimeoutSecs) {
            builder = builder.connect_timeout(Duration::from_secs(secs.max(0) as u64));
        }

        // redirects surface raw unless following is explicitly enabled
        let policy = if self.options.flag(TransferOpt::FollowRedirects) {
            let max = self
                .options
                .int(TransferOpt::MaxRedirects)
                .unwrap_or(DEFAULT_MAX_REDIRECTS as i64);
            Policy::limited(max.max(0) as usize)
        } else {
            Policy::none()
        };
        builder = builder.redirect(policy);

        if self.options.flag(TransferOpt::AcceptInvalidCerts) {
            builder = builder.danger_accept_invalid_certs(true);
        }

        if let Some(proxy_url) = self.options.text(TransferOpt::Proxy) {
            builder = builder.proxy(
                reqwest::Proxy::all(proxy_url)
                    .map_err(|e| Error::Config(format!("invalid proxy URL: {}", e)))?,
            );
        }

        builder.build().map_err(Error::from)
    }
}

/// Format the status line and raw header lines of a response
fn format_head(response: &reqwest::Response) -> String {
    let mut head = format!("{:?} {}\r\n", response.version(), response.status());
    for (name, value) in response.headers() {
        head.push_str(name.as_str());
        head.push_str(": ");
        head.push_str(&String::from_utf8_lossy(value.as_bytes()));
        head.push_str("\r\n");
    }
    head.push_str("\r\n");
    head
}

/// Split one `"name: value"` line into typed header parts
fn parse_header_line(line: &str) -> Option<(HeaderName, HeaderValue)> {
    let (name, value) = line.split_once(':')?;
    let name = HeaderName::try_from(name.trim()).ok()?;
    let value = HeaderValue::try_from(value.trim()).ok()?;
    Some((name, value))
}
