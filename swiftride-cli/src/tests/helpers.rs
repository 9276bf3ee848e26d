//! Test helpers for writing request files and stubbing the planner.

use super::*;
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use swiftride_core::test_support::ConstantTransitTimeSource;
use swiftride_core::{RouteSearch, TransitTimeEstimator, TransitTimeSource, TripPlanner};
use tempfile::TempDir;

use crate::plan::{PlanConfig, PlannerBuilder, assemble_planner};

/// Tel Aviv to Ramat Aviv, the canonical request used across CLI tests.
pub(super) const TEL_AVIV_REQUEST: &[u8] = br#"{
    "start": {"lat": 32.0853, "lng": 34.7818},
    "destination": {"lat": 32.1133, "lng": 34.8043, "name": "Tel Aviv University"}
}"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write test file");
}

/// Temporary workspace rooted at a UTF-8 path.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }
}

/// Builds planners backed by a constant transit source.
#[derive(Debug, Clone, Copy)]
pub(super) struct StubPlannerBuilder {
    pub(super) minutes: u32,
}

impl PlannerBuilder for StubPlannerBuilder {
    fn build(&self, config: &PlanConfig) -> Result<TripPlanner, CliError> {
        let source: Box<dyn TransitTimeSource> =
            Box::new(ConstantTransitTimeSource::new(self.minutes));
        assemble_planner(
            config,
            RouteSearch::new(TransitTimeEstimator::with_source(source)),
        )
    }
}
