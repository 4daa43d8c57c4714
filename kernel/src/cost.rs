//! Total-ordered cost scalar.
//!
//! Path costs and heuristic estimates are non-negative reals with `+∞` as the
//! "unreached" / "blocked" sentinel. `f64` is only partially ordered, so every
//! priority structure in the planner keys on [`Cost`], which orders by
//! [`f64::total_cmp`]. Under that order `+∞` sorts after every finite value and
//! is never selected as a minimum while a finite alternative exists.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;

/// A path cost or heuristic value with a total order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cost(f64);

impl Cost {
    /// Zero cost.
    pub const ZERO: Self = Self(0.0);
    /// The "unreached" sentinel.
    pub const INFINITY: Self = Self(f64::INFINITY);

    /// Wrap a raw value. No validation; callers at the collaborator boundary
    /// check for negative and NaN values before wrapping.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// The raw value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// `true` unless the value is `±∞` or NaN.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// `true` for values a domain or heuristic may legally return:
    /// non-negative, possibly `+∞`, never NaN.
    #[must_use]
    pub fn is_valid_estimate(value: f64) -> bool {
        !value.is_nan() && value >= 0.0
    }
}

impl PartialEq for Cost {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Add for Cost {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl From<f64> for Cost {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == f64::INFINITY {
            f.write_str("Infinity")
        } else {
            write!(f, "{:?}", self.0)
        }
    }
}
