//! Clickable trip-planner links for the transit segment.

use thiserror::Error;
use url::Url;

use crate::Coordinate;

/// Default trip-planner host.
pub const DEFAULT_PLANNER_BASE_URL: &str = "https://moovitapp.com";

/// Default planner region segment.
pub const DEFAULT_PLANNER_REGION: &str = "israel-1";

/// Default planner interface language.
pub const DEFAULT_PLANNER_LANGUAGE: &str = "he";

/// Customer identifier the planner expects on deep links.
const PLANNER_CUSTOMER_ID: &str = "4908";

/// Errors returned by [`TransitLinkBuilder::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitLinkError {
    /// The configured base URL could not be parsed.
    #[error("invalid trip planner base URL {base_url:?}: {message}")]
    InvalidBaseUrl {
        /// The rejected base URL.
        base_url: String,
        /// Parser diagnostic.
        message: String,
    },
    /// The base URL cannot carry a path (e.g. `mailto:`).
    #[error("trip planner base URL {base_url:?} cannot be a base")]
    CannotBeBase {
        /// The rejected base URL.
        base_url: String,
    },
}

/// Builds trip-planner URLs for a `(from, to)` transit segment.
///
/// The link embeds both coordinates as `tll=<lat>_<lng>` (from) and
/// `fll=<lat>_<lng>` (to). End users follow it to look up the segment
/// themselves; the live source requests the same URL.
///
/// # Examples
/// ```
/// use swiftride_core::{Coordinate, transit::TransitLinkBuilder};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let links = TransitLinkBuilder::default();
/// let from = Coordinate::new(32.0853, 34.7818)?;
/// let to = Coordinate::new(32.1133, 34.8043)?;
/// assert_eq!(
///     links.link(&from, &to),
///     "https://moovitapp.com/tripplan/israel-1/poi/he?tll=32.0853_34.7818&fll=32.1133_34.8043&customerId=4908&ref=5&poiType=Country",
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitLinkBuilder {
    trip_plan_url: String,
}

impl Default for TransitLinkBuilder {
    fn default() -> Self {
        Self {
            trip_plan_url: format!(
                "{DEFAULT_PLANNER_BASE_URL}/tripplan/{DEFAULT_PLANNER_REGION}/poi/{DEFAULT_PLANNER_LANGUAGE}"
            ),
        }
    }
}

impl TransitLinkBuilder {
    /// Create a builder for `base_url`, `region` and `language`.
    ///
    /// # Errors
    ///
    /// Returns an error when `base_url` is not an absolute URL that can
    /// carry a path.
    pub fn new(base_url: &str, region: &str, language: &str) -> Result<Self, TransitLinkError> {
        let mut url = Url::parse(base_url).map_err(|err| TransitLinkError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            message: err.to_string(),
        })?;
        url.path_segments_mut()
            .map_err(|()| TransitLinkError::CannotBeBase {
                base_url: base_url.to_owned(),
            })?
            .pop_if_empty()
            .extend(["tripplan", region, "poi", language]);
        url.set_query(None);
        url.set_fragment(None);
        Ok(Self {
            trip_plan_url: url.into(),
        })
    }

    /// The planner URL for the segment from `from` to `to`.
    #[must_use]
    pub fn link(&self, from: &Coordinate, to: &Coordinate) -> String {
        format!(
            "{}?tll={}_{}&fll={}_{}&customerId={PLANNER_CUSTOMER_ID}&ref=5&poiType=Country",
            self.trip_plan_url, from.lat, from.lng, to.lat, to.lng
        )
    }
}
