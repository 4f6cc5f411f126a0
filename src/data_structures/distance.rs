use std::fmt;

use crate::data_structures::Weight;
use crate::{Error, Result};

/// A path length that is either a finite weight or "not reached".
///
/// The derived ordering places every `Finite` value strictly below `Infinite`,
/// so distances can be compared and stored in priority queues directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance<W> {
    Finite(W),
    Infinite,
}

impl<W: Weight> Distance<W> {
    /// Distance of a vertex to itself
    pub fn zero() -> Self {
        Distance::Finite(W::zero())
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self, Distance::Infinite)
    }

    pub fn is_finite(&self) -> bool {
        !self.is_infinite()
    }

    /// Returns the finite value, or `None` for `Infinite`
    pub fn finite(self) -> Option<W> {
        match self {
            Distance::Finite(w) => Some(w),
            Distance::Infinite => None,
        }
    }

    /// Extends this distance by one edge.
    ///
    /// `Infinite` absorbs any weight; finite sums that overflow are reported
    /// as `Error::WeightOverflow`.
    pub fn add_weight(self, weight: W) -> Result<Self> {
        match self {
            Distance::Infinite => Ok(Distance::Infinite),
            Distance::Finite(d) => d
                .checked_sum(weight)
                .map(Distance::Finite)
                .ok_or(Error::WeightOverflow),
        }
    }

    /// Adds two distances with `Infinite` absorbing everything
    pub fn checked_add(self, other: Distance<W>) -> Result<Self> {
        match other {
            Distance::Infinite => Ok(Distance::Infinite),
            Distance::Finite(w) => self.add_weight(w),
        }
    }
}

impl<W: Weight> Default for Distance<W> {
    fn default() -> Self {
        Distance::Infinite
    }
}

impl<W: Weight> From<W> for Distance<W> {
    fn from(weight: W) -> Self {
        Distance::Finite(weight)
    }
}

impl<W: Weight + fmt::Display> fmt::Display for Distance<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(w) => write!(f, "{}", w),
            Distance::Infinite => write!(f, "∞"),
        }
    }
}
