//! Edge and selection-mode types consumed by the greedy constructor.

use std::{cmp::Ordering, fmt};

/// An undirected weighted edge between two locations.
///
/// The core never canonicalises or de-duplicates edges: endpoints are kept
/// exactly as supplied so accepted edges can be reported back in input form.
///
/// # Examples
/// ```
/// use voraz_core::TourEdge;
///
/// let edge = TourEdge::new(0, 3, 12.5);
/// assert_eq!(edge.source(), 0);
/// assert_eq!(edge.target(), 3);
/// assert_eq!(edge.weight(), 12.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TourEdge {
    #[cfg_attr(feature = "serde", serde(rename = "u"))]
    source: usize,
    #[cfg_attr(feature = "serde", serde(rename = "v"))]
    target: usize,
    #[cfg_attr(feature = "serde", serde(rename = "w"))]
    weight: f64,
}

impl TourEdge {
    /// Creates an edge between `source` and `target` with the given weight.
    #[must_use]
    pub const fn new(source: usize, target: usize, weight: f64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the first endpoint as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the second endpoint as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }

    /// Returns the endpoints ordered as `(min, max)`.
    #[must_use]
    pub const fn canonical_pair(&self) -> (usize, usize) {
        if self.source <= self.target {
            (self.source, self.target)
        } else {
            (self.target, self.source)
        }
    }
}

/// Which end of the weight range the greedy constructor prefers.
///
/// `Min` yields the shortest-leaning tour, `Max` the longest-leaning one.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "UPPERCASE")
)]
pub enum SelectionMode {
    /// Consider edges in ascending weight order.
    Min,
    /// Consider edges in descending weight order.
    Max,
}

impl SelectionMode {
    /// Both modes, in the order results are conventionally presented.
    pub const ALL: [Self; 2] = [Self::Min, Self::Max];

    /// Returns the stable wire name (`"MIN"` or `"MAX"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Min => "MIN",
            Self::Max => "MAX",
        }
    }

    /// Orders two weights so that the preferred weight sorts first.
    ///
    /// Uses [`f64::total_cmp`], so the ordering is total even for values the
    /// caller should never supply.
    ///
    /// # Examples
    /// ```
    /// use std::cmp::Ordering;
    /// use voraz_core::SelectionMode;
    ///
    /// assert_eq!(SelectionMode::Min.compare(1.0, 2.0), Ordering::Less);
    /// assert_eq!(SelectionMode::Max.compare(1.0, 2.0), Ordering::Greater);
    /// ```
    #[must_use]
    pub fn compare(self, left: f64, right: f64) -> Ordering {
        match self {
            Self::Min => left.total_cmp(&right),
            Self::Max => right.total_cmp(&left),
        }
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
