//! Translation between HTTP types and domain types
//!
//! Query strings arrive as optional raw strings. Translation never fails:
//! absent or unrecognized values fall back to the domain defaults
//! (`full_name`, ascending).

use gateway_core::{SortCriterion, SortDirection};

use crate::models::request::ListRepositoriesQuery;

/// Convert the listing query to the domain sort parameters.
pub fn http_list_query_to_domain(query: &ListRepositoriesQuery) -> (SortCriterion, SortDirection) {
    let criterion = query
        .sort
        .as_deref()
        .map(SortCriterion::parse)
        .unwrap_or_default();

    let direction = query
        .direction
        .as_deref()
        .map(SortDirection::parse)
        .unwrap_or_default();

    (criterion, direction)
}

#[cfg(test)]
#[path = "translation_tests.rs"]
mod tests;
