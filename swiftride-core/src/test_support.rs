//! Deterministic `TransitTimeSource` doubles used by unit and behaviour tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{Coordinate, TransitTimeError, TransitTimeSource};

/// Source returning the same duration for every pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstantTransitTimeSource {
    minutes: u32,
}

impl ConstantTransitTimeSource {
    /// Create a source answering `minutes` for every lookup.
    #[must_use]
    pub const fn new(minutes: u32) -> Self {
        Self { minutes }
    }
}

impl TransitTimeSource for ConstantTransitTimeSource {
    fn transit_minutes(&self, _from: &Coordinate, _to: &Coordinate) -> Result<u32, TransitTimeError> {
        Ok(self.minutes)
    }
}

/// Source failing every lookup with a fixed error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailingTransitTimeSource {
    error: TransitTimeError,
}

impl FailingTransitTimeSource {
    /// Create a source that always returns `error`.
    #[must_use]
    pub const fn new(error: TransitTimeError) -> Self {
        Self { error }
    }
}

impl TransitTimeSource for FailingTransitTimeSource {
    fn transit_minutes(&self, _from: &Coordinate, _to: &Coordinate) -> Result<u32, TransitTimeError> {
        Err(self.error.clone())
    }
}

/// Source answering from a fixed table of pairs.
///
/// Pairs missing from the table fail with
/// [`TransitTimeError::MissingDuration`], so the estimator simulates them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableTransitTimeSource {
    entries: Vec<((Coordinate, Coordinate), u32)>,
}

impl TableTransitTimeSource {
    /// Create a source from `(from, to) -> minutes` entries.
    #[must_use]
    pub const fn new(entries: Vec<((Coordinate, Coordinate), u32)>) -> Self {
        Self { entries }
    }
}

impl TransitTimeSource for TableTransitTimeSource {
    fn transit_minutes(&self, from: &Coordinate, to: &Coordinate) -> Result<u32, TransitTimeError> {
        self.entries
            .iter()
            .find(|((a, b), _)| a == from && b == to)
            .map(|(_, minutes)| *minutes)
            .ok_or_else(|| TransitTimeError::MissingDuration {
                url: format!("table://{from}/{to}"),
            })
    }
}

/// Wraps a source and counts the lookups passed through it.
#[derive(Debug, Default)]
pub struct CountingTransitTimeSource<S> {
    inner: S,
    calls: AtomicUsize,
}

impl<S> CountingTransitTimeSource<S> {
    /// Wrap `inner`.
    #[must_use]
    pub const fn new(inner: S) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of single lookups performed so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<S: TransitTimeSource> TransitTimeSource for CountingTransitTimeSource<S> {
    fn transit_minutes(&self, from: &Coordinate, to: &Coordinate) -> Result<u32, TransitTimeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.transit_minutes(from, to)
    }
}
