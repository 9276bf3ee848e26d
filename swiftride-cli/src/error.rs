//! Error types emitted by the SwiftRide CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use swiftride_core::PlanError;
use swiftride_core::transit::TransitLinkError;
use swiftride_data::transit::ProviderBuildError;
use thiserror::Error;

/// Errors emitted by the SwiftRide CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// The missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// The option naming the path.
        field: &'static str,
        /// The missing path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// The option naming the path.
        field: &'static str,
        /// The offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// The option naming the path.
        field: &'static str,
        /// The offending path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Reading the planning request file failed.
    #[error("failed to read planning request at {path:?}: {source}")]
    ReadPlanRequest {
        /// The request path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The configured trip-planner link settings were rejected.
    #[error("invalid transit planner settings for {base_url:?}: {source}")]
    InvalidTransitLinks {
        /// The configured base URL.
        base_url: String,
        /// Why it was rejected.
        #[source]
        source: TransitLinkError,
    },
    /// Constructing the live transit source failed.
    #[error("failed to build transit source for {base_url:?}: {source}")]
    BuildTransitSource {
        /// The configured base URL.
        base_url: String,
        /// Why construction failed.
        #[source]
        source: ProviderBuildError,
    },
    /// The planner rejected the request or failed internally.
    #[error("planning failed: {0}")]
    Plan(#[from] PlanError),
    /// Serialising the planning output failed.
    #[error("failed to serialise planning output: {0}")]
    SerialisePlanOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
