//! HTTP-based `TransitTimeSource` querying a public-transit trip planner.
//!
//! This module provides [`HttpTransitTimeSource`], an implementation of the
//! [`TransitTimeSource`] trait that requests the planner's trip-plan URL for
//! each `(pickup, dropoff)` pair and reads the duration of the first trip
//! option from the JSON body.
//!
//! # Architecture
//!
//! The [`TransitTimeSource`] trait is synchronous to keep the core library
//! embeddable in synchronous contexts. This source bridges the async HTTP
//! calls to the sync interface by blocking on a Tokio runtime internally.
//! Batches are issued concurrently with a bounded number of requests in
//! flight, and results come back in input order.
//!
//! # Example
//!
//! ```no_run
//! use swiftride_core::{Coordinate, TransitTimeSource};
//! use swiftride_data::transit::HttpTransitTimeSource;
//!
//! let source = HttpTransitTimeSource::new("https://planner.example.com")?;
//! let from = Coordinate::new(32.0853, 34.7818)?;
//! let to = Coordinate::new(32.1133, 34.8043)?;
//! let minutes = source.transit_minutes(&from, &to)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::future::Future;
use std::time::Duration;

use futures_util::stream::{self, StreamExt};
use log::debug;
use reqwest::Client;
use reqwest::header::ACCEPT;
use swiftride_core::transit::{
    DEFAULT_PLANNER_BASE_URL, DEFAULT_PLANNER_LANGUAGE, DEFAULT_PLANNER_REGION, TransitLinkBuilder,
    TransitLinkError, TransitPair,
};
use swiftride_core::{Coordinate, TransitTimeError, TransitTimeSource};
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};

use super::planner::TripPlanResponse;

/// Error type for [`HttpTransitTimeSource`] construction failures.
#[derive(Debug)]
pub enum ProviderBuildError {
    /// The planner base URL was rejected.
    InvalidBaseUrl(TransitLinkError),
    /// Failed to build the HTTP client.
    HttpClient(reqwest::Error),
    /// Failed to build the Tokio runtime.
    Runtime(std::io::Error),
}

impl std::fmt::Display for ProviderBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBaseUrl(err) => write!(f, "invalid transit planner URL: {err}"),
            Self::HttpClient(err) => write!(f, "failed to build HTTP client: {err}"),
            Self::Runtime(err) => write!(f, "failed to build Tokio runtime: {err}"),
        }
    }
}

impl std::error::Error for ProviderBuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidBaseUrl(err) => Some(err),
            Self::HttpClient(err) => Some(err),
            Self::Runtime(err) => Some(err),
        }
    }
}

/// Default user agent for planner requests.
pub const DEFAULT_USER_AGENT: &str = "swiftride-transit/0.1";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of planner requests in flight during a batch.
pub const DEFAULT_CONCURRENCY: usize = 4;

/// Configuration for [`HttpTransitTimeSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpTransitTimeSourceConfig {
    /// Base URL for the trip planner (e.g., `"https://moovitapp.com"`).
    pub base_url: String,
    /// Region path segment.
    pub region: String,
    /// Language path segment.
    pub language: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
    /// Maximum requests in flight during a batch; zero is treated as one.
    pub concurrency: usize,
}

impl Default for HttpTransitTimeSourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_PLANNER_BASE_URL.to_owned(),
            region: DEFAULT_PLANNER_REGION.to_owned(),
            language: DEFAULT_PLANNER_LANGUAGE.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

impl HttpTransitTimeSourceConfig {
    /// Create a new configuration with the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the region path segment.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Set the language path segment.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the batch concurrency.
    #[must_use]
    pub const fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }
}

/// HTTP-based transit time source.
///
/// This source implements the synchronous [`TransitTimeSource`] trait by
/// internally blocking on asynchronous HTTP requests. It owns a Tokio
/// runtime that is reused across calls.
///
/// # Runtime behaviour
///
/// When called from outside any Tokio runtime, the source uses its own
/// stored runtime. When called from within an existing multi-threaded Tokio
/// runtime, it uses that runtime's handle with
/// [`tokio::task::block_in_place`] to avoid nested runtime panics. Inside a
/// `current_thread` runtime it falls back to its own runtime.
pub struct HttpTransitTimeSource {
    client: Client,
    config: HttpTransitTimeSourceConfig,
    links: TransitLinkBuilder,
    runtime: Runtime,
}

impl std::fmt::Debug for HttpTransitTimeSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransitTimeSource")
            .field("client", &self.client)
            .field("config", &self.config)
            .field("links", &self.links)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish()
    }
}

impl HttpTransitTimeSource {
    /// Create a new source with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client or
    /// Tokio runtime fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(HttpTransitTimeSourceConfig::new(base_url))
    }

    /// Create a new source with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client or
    /// Tokio runtime fails to build.
    pub fn with_config(config: HttpTransitTimeSourceConfig) -> Result<Self, ProviderBuildError> {
        let links = TransitLinkBuilder::new(&config.base_url, &config.region, &config.language)
            .map_err(ProviderBuildError::InvalidBaseUrl)?;
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ProviderBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ProviderBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            links,
            runtime,
        })
    }

    /// The link builder used for request URLs.
    #[must_use]
    pub const fn links(&self) -> &TransitLinkBuilder {
        &self.links
    }

    fn concurrency(&self) -> usize {
        self.config.concurrency.max(1)
    }

    /// Fetch one transit duration asynchronously.
    async fn fetch_minutes_async(
        &self,
        from: &Coordinate,
        to: &Coordinate,
    ) -> Result<u32, TransitTimeError> {
        let url = self.links.link(from, to);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, &url))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err, &url))?;

        let plan: TripPlanResponse =
            response
                .json()
                .await
                .map_err(|err| TransitTimeError::ParseError {
                    message: err.to_string(),
                })?;

        let minutes = plan
            .first_duration()
            .ok_or_else(|| TransitTimeError::MissingDuration { url: url.clone() })?;
        debug!("planner reported {minutes} min for {url}");
        Ok(minutes)
    }

    /// Convert a reqwest error to a `TransitTimeError`.
    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &str) -> TransitTimeError {
        if error.is_timeout() {
            return TransitTimeError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return TransitTimeError::HttpError {
                url: url.to_owned(),
                status: status.as_u16(),
                message: error.to_string(),
            };
        }

        TransitTimeError::NetworkError {
            url: url.to_owned(),
            message: error.to_string(),
        }
    }

    /// Drive `future` to completion from synchronous code.
    ///
    /// `block_in_place` requires a multi-threaded runtime; for
    /// `current_thread` runtimes, or outside any runtime, the stored runtime
    /// is used.
    fn block_on<F: Future>(&self, future: F) -> F::Output {
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            _ => self.runtime.block_on(future),
        }
    }
}

impl TransitTimeSource for HttpTransitTimeSource {
    fn transit_minutes(
        &self,
        from: &Coordinate,
        to: &Coordinate,
    ) -> Result<u32, TransitTimeError> {
        self.block_on(self.fetch_minutes_async(from, to))
    }

    /// Fetch every pair with at most `concurrency` requests in flight.
    ///
    /// Results are returned in the order of `pairs`, whatever order the
    /// responses arrive in.
    fn transit_minutes_batch(&self, pairs: &[TransitPair]) -> Vec<Result<u32, TransitTimeError>> {
        debug!(
            "fetching {} transit durations, {} at a time",
            pairs.len(),
            self.concurrency()
        );
        let lookups = stream::iter(pairs)
            .map(|(from, to)| self.fetch_minutes_async(from, to))
            .buffered(self.concurrency())
            .collect::<Vec<_>>();
        self.block_on(lookups)
    }
}
