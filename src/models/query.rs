use crate::models::pagination::{
    DEFAULT_PAGE, DEFAULT_PAGE_SIZE, DEFAULT_SORT_BY, DEFAULT_SORT_DIRECTION, Pagination,
};
use serde::{Deserialize, Serialize};
#[cfg(feature = "utoipa")]
use utoipa::{IntoParams, ToSchema};

/// Raw pagination query parameters, as bound from a request query string.
///
/// Accepts both the snake_case names and the camelCase aliases used by front-end
/// clients (`size`, `sort`, `sortBy`, `sortDirection`). Missing values take the
/// [`Pagination`] defaults on conversion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema, IntoParams))]
#[cfg_attr(feature = "utoipa", into_params(parameter_in = Query))]
pub struct PaginationQuery {
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default, alias = "size")]
    pub page_size: Option<i64>,
    #[serde(default, alias = "sort", alias = "sortBy")]
    pub sort_by: Option<String>,
    #[serde(default, alias = "sortDirection")]
    pub sort_direction: Option<String>,
}

impl From<PaginationQuery> for Pagination {
    fn from(query: PaginationQuery) -> Self {
        Pagination::new(
            query.page.unwrap_or(DEFAULT_PAGE),
            query.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
        .with_sort_by(Some(
            query.sort_by.unwrap_or_else(|| DEFAULT_SORT_BY.to_string()),
        ))
        .with_sort_direction(Some(
            query
                .sort_direction
                .unwrap_or_else(|| DEFAULT_SORT_DIRECTION.to_string()),
        ))
    }
}
