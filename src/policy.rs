//! Caller-supplied aggregation configuration.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Default minimum share of the monthly total a category must reach to be
/// listed individually in a breakdown.
pub const DEFAULT_MIN_CONTRIBUTION: f64 = 0.05;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// Which category labels are dropped from aggregates (internal transfers and
/// the like) and how small a category may be before it folds into "Other".
///
/// A plain value passed into every report call; never process-wide state.
pub struct CategoryPolicy {
    pub excluded_categories: BTreeSet<String>,
    /// Fraction in `[0, 1)`; a category whose absolute share of the monthly
    /// total is below it merges into the "Other" bucket.
    pub min_contribution_fraction: f64,
}

impl Default for CategoryPolicy {
    fn default() -> Self {
        Self {
            excluded_categories: BTreeSet::new(),
            min_contribution_fraction: DEFAULT_MIN_CONTRIBUTION,
        }
    }
}

impl CategoryPolicy {
    /// Policy excluding the given labels, with the default threshold.
    pub fn excluding<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded_categories: labels.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_min_contribution(mut self, fraction: f64) -> Self {
        self.min_contribution_fraction = fraction;
        self
    }

    pub fn is_excluded(&self, category: &str) -> bool {
        self.excluded_categories.contains(category)
    }
}
