//! Ordering policy for repository listings.
//!
//! Sorting happens in two steps. The list is first ordered by the base
//! comparator of the chosen [`SortCriterion`]: newest first for the
//! timestamp criteria, alphabetical for `full_name`. Then, if the direction
//! is [`SortDirection::Desc`], the sorted list is reversed.
//!
//! The two steps compose literally. For timestamps this means `asc` yields
//! newest first and `desc` yields oldest first. Clients depend on this
//! ordering, so it is kept as is.

use std::cmp::Ordering;
use std::fmt;

use crate::listing::RepositorySummary;

#[cfg(test)]
#[path = "sorting_tests.rs"]
mod tests;

/// The field a repository listing is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortCriterion {
    Created,
    Updated,
    Pushed,
    #[default]
    FullName,
}

impl SortCriterion {
    /// Parses a `sort` query value.
    ///
    /// Matching is exact. Unrecognized and empty values fall back to
    /// [`SortCriterion::FullName`].
    pub fn parse(value: &str) -> Self {
        match value {
            "created" => SortCriterion::Created,
            "updated" => SortCriterion::Updated,
            "pushed" => SortCriterion::Pushed,
            _ => SortCriterion::FullName,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortCriterion::Created => "created",
            SortCriterion::Updated => "updated",
            SortCriterion::Pushed => "pushed",
            SortCriterion::FullName => "full_name",
        }
    }
}

impl fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the sorted listing is reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Parses a `direction` query value. Only the exact value `desc` selects
    /// [`SortDirection::Desc`].
    pub fn parse(value: &str) -> Self {
        if value == "desc" {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Orders `repositories` in place.
///
/// The sort is stable, so entries that compare equal keep their upstream
/// order (before a `desc` reversal).
pub fn sort_repositories(
    repositories: &mut [RepositorySummary],
    criterion: SortCriterion,
    direction: SortDirection,
) {
    match criterion {
        // Newest first. Missing timestamps compare as the oldest.
        SortCriterion::Created => repositories.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortCriterion::Updated => repositories.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
        SortCriterion::Pushed => repositories.sort_by(|a, b| b.pushed_at.cmp(&a.pushed_at)),
        SortCriterion::FullName => repositories.sort_by(|a, b| compare_names(&a.name, &b.name)),
    }

    if direction == SortDirection::Desc {
        repositories.reverse();
    }
}

/// Collation-style name comparison.
///
/// Names are compared case-insensitively first. Names that differ only in
/// case put the lowercase form first, e.g. `alpha < Alpha < beta`.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));

    // ASCII orders uppercase before lowercase, so the tie-break is reversed.
    folded.then_with(|| b.cmp(a))
}
