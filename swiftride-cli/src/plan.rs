//! Plan command implementation for the SwiftRide CLI.

use std::io::Write;
use std::time::Duration;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use swiftride_core::candidates::{CandidateGenerator, DEFAULT_CANDIDATE_COUNT};
use swiftride_core::transit::{
    DEFAULT_PLANNER_BASE_URL, DEFAULT_PLANNER_LANGUAGE, DEFAULT_PLANNER_REGION, TransitLinkBuilder,
};
use swiftride_core::{
    DEFAULT_SEARCH_LIMIT, RouteSearch, SearchLimits, TransitTimeEstimator,
    TransitTimeSource, TripPlanner,
};
use swiftride_data::transit::{
    DEFAULT_CONCURRENCY, DEFAULT_TIMEOUT_SECS, HttpTransitTimeSource, HttpTransitTimeSourceConfig,
};

use crate::{
    ARG_CANDIDATE_COUNT, ARG_PLAN_REQUEST, ARG_SEARCH_LIMIT, ARG_TRANSIT_BASE_URL,
    ARG_TRANSIT_CONCURRENCY, ARG_TRANSIT_LANGUAGE, ARG_TRANSIT_REGION, ARG_TRANSIT_TIMEOUT_SECS,
    CliError, ENV_PLAN_REQUEST,
};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Plan a trip from a JSON request containing `start`, \
                 `destination` and an optional `radius` in metres. Without a \
                 transit planner URL every transit leg is simulated from \
                 distance.",
    about = "Plan a hybrid scooter and transit trip"
)]
#[ortho_config(prefix = "SWIFTRIDE")]
pub(crate) struct PlanArgs {
    /// Path to a JSON file containing the planning request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Base URL of the live transit planner; omit to simulate transit.
    #[arg(long = ARG_TRANSIT_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) transit_base_url: Option<String>,
    /// Per-lookup timeout in seconds.
    #[arg(long = ARG_TRANSIT_TIMEOUT_SECS, value_name = "secs")]
    #[serde(default)]
    pub(crate) transit_timeout_secs: Option<u64>,
    /// Maximum transit lookups in flight.
    #[arg(long = ARG_TRANSIT_CONCURRENCY, value_name = "n")]
    #[serde(default)]
    pub(crate) transit_concurrency: Option<usize>,
    /// Planner region path segment.
    #[arg(long = ARG_TRANSIT_REGION, value_name = "region")]
    #[serde(default)]
    pub(crate) transit_region: Option<String>,
    /// Planner language path segment.
    #[arg(long = ARG_TRANSIT_LANGUAGE, value_name = "lang")]
    #[serde(default)]
    pub(crate) transit_language: Option<String>,
    /// Ring points generated around each end of the trip.
    #[arg(long = ARG_CANDIDATE_COUNT, value_name = "n")]
    #[serde(default)]
    pub(crate) candidate_count: Option<usize>,
    /// Leading candidates paired on each side.
    #[arg(long = ARG_SEARCH_LIMIT, value_name = "n")]
    #[serde(default)]
    pub(crate) search_limit: Option<usize>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlanConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Live transit planner, if any.
    pub(crate) transit_base_url: Option<String>,
    /// Per-lookup timeout.
    pub(crate) transit_timeout: Duration,
    /// Maximum lookups in flight.
    pub(crate) transit_concurrency: usize,
    /// Planner region path segment.
    pub(crate) transit_region: String,
    /// Planner language path segment.
    pub(crate) transit_language: String,
    /// Ring points per trip end.
    pub(crate) candidate_count: usize,
    /// Leading candidates paired per side.
    pub(crate) search_limit: usize,
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.request_path, ARG_PLAN_REQUEST)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match path.metadata() {
            Ok(metadata) if metadata.is_file() => Ok(()),
            Ok(_) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Base URL used for planner links.
    pub(crate) fn link_base_url(&self) -> &str {
        self.transit_base_url
            .as_deref()
            .unwrap_or(DEFAULT_PLANNER_BASE_URL)
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_REQUEST,
            env: ENV_PLAN_REQUEST,
        })?;

        Ok(Self {
            request_path,
            transit_base_url: args.transit_base_url,
            transit_timeout: Duration::from_secs(
                args.transit_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
            transit_concurrency: args.transit_concurrency.unwrap_or(DEFAULT_CONCURRENCY),
            transit_region: args
                .transit_region
                .unwrap_or_else(|| DEFAULT_PLANNER_REGION.to_owned()),
            transit_language: args
                .transit_language
                .unwrap_or_else(|| DEFAULT_PLANNER_LANGUAGE.to_owned()),
            candidate_count: args.candidate_count.unwrap_or(DEFAULT_CANDIDATE_COUNT),
            search_limit: args.search_limit.unwrap_or(DEFAULT_SEARCH_LIMIT),
        })
    }
}

/// Builds a planner for the current plan invocation.
pub(super) trait PlannerBuilder {
    fn build(&self, config: &PlanConfig) -> Result<TripPlanner, CliError>;
}

pub(super) struct DefaultPlannerBuilder;

impl DefaultPlannerBuilder {
    fn estimator(config: &PlanConfig) -> Result<TransitTimeEstimator, CliError> {
        let Some(base_url) = &config.transit_base_url else {
            info!("no transit planner configured; transit legs are simulated");
            return Ok(TransitTimeEstimator::simulated());
        };
        let source_config = HttpTransitTimeSourceConfig::new(base_url.clone())
            .with_timeout(config.transit_timeout)
            .with_region(config.transit_region.clone())
            .with_language(config.transit_language.clone())
            .with_concurrency(config.transit_concurrency);
        let source = HttpTransitTimeSource::with_config(source_config).map_err(|source| {
            CliError::BuildTransitSource {
                base_url: base_url.clone(),
                source,
            }
        })?;
        info!("querying transit planner at {base_url}");
        let source: Box<dyn TransitTimeSource> = Box::new(source);
        Ok(TransitTimeEstimator::with_source(source))
    }
}

impl PlannerBuilder for DefaultPlannerBuilder {
    fn build(&self, config: &PlanConfig) -> Result<TripPlanner, CliError> {
        let search = RouteSearch::new(Self::estimator(config)?);
        assemble_planner(config, search)
    }
}

/// Apply the configured links, limits and ring size around `search`.
pub(super) fn assemble_planner(
    config: &PlanConfig,
    search: RouteSearch,
) -> Result<TripPlanner, CliError> {
    let base_url = config.link_base_url();
    let links = TransitLinkBuilder::new(base_url, &config.transit_region, &config.transit_language)
        .map_err(|source| CliError::InvalidTransitLinks {
            base_url: base_url.to_owned(),
            source,
        })?;
    let search = search
        .with_links(links)
        .with_limits(SearchLimits::uniform(config.search_limit));
    Ok(TripPlanner::new(search).with_generator(CandidateGenerator::new(config.candidate_count)))
}

pub(super) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    let builder = DefaultPlannerBuilder;
    run_plan_with(args, &builder, &mut stdout)
}

/// Plan the request named by `args`, writing JSON to `writer`.
///
/// A found route is written as a response object and no route as `null`.
/// When planning fails the error body is written before the error is
/// returned.
pub(super) fn run_plan_with(
    args: PlanArgs,
    builder: &dyn PlannerBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_plan_config(args)?;
    let payload = load_plan_request(&config.request_path)?;
    let planner = builder.build(&config)?;
    match planner.plan_json(&payload) {
        Ok(response) => write_json(writer, &response),
        Err(err) => {
            write_json(writer, &err.to_body())?;
            Err(CliError::Plan(err))
        }
    }
}

fn resolve_plan_config(args: PlanArgs) -> Result<PlanConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Read the raw planning request from disk.
pub(super) fn load_plan_request(path: &Utf8Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::ReadPlanRequest {
        path: path.to_path_buf(),
        source,
    })
}

fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialisePlanOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

/// Decode command output back into a response; used by tests.
#[cfg(test)]
pub(crate) fn parse_output(output: &[u8]) -> Option<swiftride_core::PlanResponse> {
    serde_json::from_slice(output).ok().flatten()
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}
