//! Provider success rate.

use std::cmp::Ordering;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Successful launches out of total launches.
///
/// The rate is a fraction in `[0, 1]`. A provider that never launched has the
/// sentinel rate `0.0` and ranks equal to any other zero rate. Comparison is
/// exact: `a/b` against `c/d` is decided by `a*d` against `c*b`, never by
/// rounded floats.
///
/// Equality follows the same rule, so it compares rates and not counts:
/// `1/3 == 2/6`, and every zero-launch value equals `0/n`. Compare the
/// `successes` and `launches` fields directly when the counts matter.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reliability {
    pub successes: usize,
    pub launches: usize,
}

impl Reliability {
    /// `successes` is clamped to `launches`.
    #[must_use]
    pub fn new(successes: usize, launches: usize) -> Self {
        Self {
            successes: successes.min(launches),
            launches,
        }
    }

    /// The rate as a float in `[0, 1]`. `0.0` for zero launches.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fraction(&self) -> f64 {
        if self.launches == 0 {
            return 0.0;
        }
        if self.successes == self.launches {
            return 1.0;
        }
        self.successes as f64 / self.launches as f64
    }

    #[must_use]
    pub const fn is_fully_reliable(&self) -> bool {
        self.launches > 0 && self.successes == self.launches
    }

    /// Numerator and denominator with the zero-launch sentinel as `0/1`.
    fn ratio(self) -> (u128, u128) {
        if self.launches == 0 {
            (0, 1)
        } else {
            (self.successes as u128, self.launches as u128)
        }
    }
}

impl PartialEq for Reliability {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Reliability {}

impl PartialOrd for Reliability {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Reliability {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = self.ratio();
        let (c, d) = other.ratio();
        (a * d).cmp(&(c * b))
    }
}

impl Serialize for Reliability {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Reliability", 3)?;
        state.serialize_field("successes", &self.successes)?;
        state.serialize_field("launches", &self.launches)?;
        state.serialize_field("fraction", &self.fraction())?;
        state.end()
    }
}
