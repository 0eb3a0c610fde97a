use std::fmt;

use rand::{Rng, RngCore};

use crate::error::{Error, Result};

/// An inclusive `[min, max]` range for how many things a unit produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountRange {
    min: usize,
    max: usize,
}

impl CountRange {
    pub fn exactly(n: usize) -> Self {
        Self { min: n, max: n }
    }

    /// Builds a range from two bounds given in either order.
    pub fn between(a: usize, b: usize) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Resolves the `n` / `n_min` / `n_max` triple: the range spans the
    /// smallest and largest of whichever values are given, or is `None` when
    /// none are.
    pub fn from_bounds(
        n: Option<usize>,
        n_min: Option<usize>,
        n_max: Option<usize>,
    ) -> Option<Self> {
        let given = [n, n_min, n_max].into_iter().flatten();
        let min = given.clone().min()?;
        let max = given.max()?;
        Some(Self { min, max })
    }

    /// Same as [`CountRange::from_bounds`] for untyped input; negative values
    /// fail with [`Error::InvalidCount`].
    pub fn from_signed(
        n: Option<i64>,
        n_min: Option<i64>,
        n_max: Option<i64>,
    ) -> Result<Option<Self>> {
        Ok(Self::from_bounds(
            non_negative("n", n)?,
            non_negative("n_min", n_min)?,
            non_negative("n_max", n_max)?,
        ))
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    /// Draws a count uniformly from the range.
    pub fn sample(&self, rng: &mut dyn RngCore) -> usize {
        if self.min == self.max {
            self.min
        } else {
            rng.gen_range(self.min..=self.max)
        }
    }
}

impl fmt::Display for CountRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n=[{}, {}]", self.min, self.max)
    }
}

/// How many defects to apply. An unset bound stands for every matchable
/// position of the seed and is only resolved once the seed is known.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefectCount {
    min: Option<usize>,
    max: Option<usize>,
}

impl DefectCount {
    /// Every matchable position.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn exactly(n: usize) -> Self {
        Self {
            min: Some(n),
            max: Some(n),
        }
    }

    /// Builds a count from two bounds given in either order.
    pub fn between(a: usize, b: usize) -> Self {
        Self {
            min: Some(a.min(b)),
            max: Some(a.max(b)),
        }
    }

    /// At least `n`, up to every matchable position.
    pub fn at_least(n: usize) -> Self {
        Self {
            min: Some(n),
            max: None,
        }
    }

    /// Every matchable position, but never more than `n`.
    pub fn at_most(n: usize) -> Self {
        Self {
            min: None,
            max: Some(n),
        }
    }

    /// Resolves the `n` / `n_min` / `n_max` triple. A given `n` fixes both
    /// bounds to the span of all given values; otherwise `n_min` and `n_max`
    /// are kept as they are and a missing one stays unset.
    pub fn from_bounds(n: Option<usize>, n_min: Option<usize>, n_max: Option<usize>) -> Self {
        if n.is_none() {
            return match (n_min, n_max) {
                (Some(min), Some(max)) => Self::between(min, max),
                (min, max) => Self { min, max },
            };
        }
        let range = CountRange::from_bounds(n, n_min, n_max);
        Self {
            min: range.map(|r| r.min),
            max: range.map(|r| r.max),
        }
    }

    /// Same as [`DefectCount::from_bounds`] for untyped input; negative values
    /// fail with [`Error::InvalidCount`].
    pub fn from_signed(n: Option<i64>, n_min: Option<i64>, n_max: Option<i64>) -> Result<Self> {
        Ok(Self::from_bounds(
            non_negative("n", n)?,
            non_negative("n_min", n_min)?,
            non_negative("n_max", n_max)?,
        ))
    }

    pub fn min(&self) -> Option<usize> {
        self.min
    }

    pub fn max(&self) -> Option<usize> {
        self.max
    }

    /// Resolves the bounds against `n_possible` matchable positions. Unset
    /// bounds become `n_possible`, both are clamped to it, and the lower
    /// bound never exceeds the upper one.
    pub fn resolve(&self, n_possible: usize) -> CountRange {
        let max = self.max.unwrap_or(n_possible).min(n_possible);
        let min = self.min.unwrap_or(n_possible).min(max);
        CountRange { min, max }
    }
}

impl From<CountRange> for DefectCount {
    fn from(range: CountRange) -> Self {
        Self::between(range.min, range.max)
    }
}

impl fmt::Display for DefectCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bound = |b: Option<usize>| b.map_or_else(|| "all".to_string(), |n| n.to_string());
        match (self.min, self.max) {
            (None, None) => write!(f, "n=all"),
            (min, max) => write!(f, "n=[{}, {}]", bound(min), bound(max)),
        }
    }
}

pub(crate) fn non_negative(field: &'static str, value: Option<i64>) -> Result<Option<usize>> {
    value
        .map(|v| usize::try_from(v).map_err(|_| Error::InvalidCount { field, value: v }))
        .transpose()
}
