use crate::models::{Pagination, SortInfo};
use crate::utils::sort::create_sort;
use serde::{Deserialize, Serialize};
#[cfg(feature = "utoipa")]
use utoipa::ToSchema;

/// Query-layer view of a [`Pagination`].
///
/// `page` is a zero-indexed page number, not a row offset: a data-access layer that
/// needs rows to skip computes `page * size` itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub struct Pageable {
    pub page: i64,
    pub size: i64,
    pub sort: Vec<SortInfo>,
}

impl Pageable {
    /// Key-value rendering: `{"page": .., "size": .., "sort": [{"field", "direction"}]}`.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "page": self.page,
            "size": self.size,
            "sort": crate::utils::sort::to_sort_dict(&self.sort),
        })
    }
}

/// Converts the 1-indexed request page into `(page_index, page_size)`.
///
/// Pages below 1 are clamped to index 0.
pub fn create_pageable_params(pagination: &Pagination) -> (i64, i64) {
    if pagination.page() < 1 {
        tracing::debug!(page = pagination.page(), "Page below 1, using first page");
    }
    let page_index = pagination.page().max(1) - 1;
    (page_index, pagination.page_size())
}

/// Same as [`create_pageable_params`] plus the sort list built from `sort_by`/`sort_direction`.
pub fn create_pageable_with_sort(pagination: &Pagination) -> (i64, i64, Vec<SortInfo>) {
    let (page_index, page_size) = create_pageable_params(pagination);
    let sort = create_sort(pagination.sort_by(), pagination.sort_direction());
    (page_index, page_size, sort)
}

/// Record form of [`create_pageable_with_sort`].
pub fn create_pageable_dict(pagination: &Pagination) -> Pageable {
    let (page, size, sort) = create_pageable_with_sort(pagination);
    Pageable { page, size, sort }
}

impl From<&Pagination> for Pageable {
    fn from(pagination: &Pagination) -> Self {
        create_pageable_dict(pagination)
    }
}
