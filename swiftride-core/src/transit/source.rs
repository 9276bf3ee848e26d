//! The transit-time source trait.

use std::sync::Arc;

use crate::Coordinate;

use super::error::TransitTimeError;

/// A `(from, to)` pair submitted for a transit lookup.
pub type TransitPair = (Coordinate, Coordinate);

/// Fetch a public-transit duration between two coordinates.
///
/// Implementations may be slow or unreliable. Callers are expected to wrap
/// them in a [`TransitTimeEstimator`](super::TransitTimeEstimator), which
/// absorbs every error.
///
/// # Examples
///
/// ```rust
/// use swiftride_core::{Coordinate, TransitTimeError, TransitTimeSource};
///
/// struct FlatRate;
///
/// impl TransitTimeSource for FlatRate {
///     fn transit_minutes(
///         &self,
///         _from: &Coordinate,
///         _to: &Coordinate,
///     ) -> Result<u32, TransitTimeError> {
///         Ok(25)
///     }
/// }
///
/// let a = Coordinate::new(32.0, 34.0)?;
/// let b = Coordinate::new(32.1, 34.1)?;
/// assert_eq!(FlatRate.transit_minutes(&a, &b), Ok(25));
/// # Ok::<(), swiftride_core::CoordinateError>(())
/// ```
pub trait TransitTimeSource: Send + Sync {
    /// Return the transit duration from `from` to `to` in whole minutes.
    fn transit_minutes(&self, from: &Coordinate, to: &Coordinate)
    -> Result<u32, TransitTimeError>;

    /// Look up every pair, returning results in input order.
    ///
    /// The default runs the lookups one after another. Implementations may
    /// issue them concurrently but must preserve the order of `pairs`.
    fn transit_minutes_batch(&self, pairs: &[TransitPair]) -> Vec<Result<u32, TransitTimeError>> {
        pairs
            .iter()
            .map(|(from, to)| self.transit_minutes(from, to))
            .collect()
    }
}

impl<S: TransitTimeSource + ?Sized> TransitTimeSource for Box<S> {
    fn transit_minutes(
        &self,
        from: &Coordinate,
        to: &Coordinate,
    ) -> Result<u32, TransitTimeError> {
        (**self).transit_minutes(from, to)
    }

    fn transit_minutes_batch(&self, pairs: &[TransitPair]) -> Vec<Result<u32, TransitTimeError>> {
        (**self).transit_minutes_batch(pairs)
    }
}

impl<S: TransitTimeSource + ?Sized> TransitTimeSource for &S {
    fn transit_minutes(
        &self,
        from: &Coordinate,
        to: &Coordinate,
    ) -> Result<u32, TransitTimeError> {
        (**self).transit_minutes(from, to)
    }

    fn transit_minutes_batch(&self, pairs: &[TransitPair]) -> Vec<Result<u32, TransitTimeError>> {
        (**self).transit_minutes_batch(pairs)
    }
}

impl<S: TransitTimeSource + ?Sized> TransitTimeSource for Arc<S> {
    fn transit_minutes(
        &self,
        from: &Coordinate,
        to: &Coordinate,
    ) -> Result<u32, TransitTimeError> {
        (**self).transit_minutes(from, to)
    }

    fn transit_minutes_batch(&self, pairs: &[TransitPair]) -> Vec<Result<u32, TransitTimeError>> {
        (**self).transit_minutes_batch(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    use crate::test_support::TableTransitTimeSource;

    #[rstest]
    fn default_batch_preserves_input_order() {
        let a = Coordinate::new(0.0, 0.0).expect("valid");
        let b = Coordinate::new(0.0, 1.0).expect("valid");
        let source = TableTransitTimeSource::new(vec![
            ((a.clone(), b.clone()), 10),
            ((b.clone(), a.clone()), 20),
        ]);

        let results = source.transit_minutes_batch(&[(b.clone(), a.clone()), (a, b)]);

        assert_eq!(results, vec![Ok(20), Ok(10)]);
    }

    #[rstest]
    fn boxed_sources_delegate() {
        let source: Box<dyn TransitTimeSource> =
            Box::new(crate::test_support::ConstantTransitTimeSource::new(7));
        let a = Coordinate::new(0.0, 0.0).expect("valid");
        assert_eq!(source.transit_minutes(&a, &a), Ok(7));
    }
}
