use crate::models::Pagination;
use serde::{Deserialize, Serialize};
#[cfg(feature = "utoipa")]
use utoipa::ToSchema;

/// Standard success envelope: `{"data": .., "pagination": ..}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub struct ApiResponse<T> {
    pub data: Option<T>,
    pub pagination: Option<Pagination>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: Option<T>) -> Self {
        Self {
            data,
            pagination: None,
        }
    }

    pub fn empty() -> Self {
        Self::ok(None)
    }
}

impl<T> ApiResponse<Vec<T>> {
    pub fn ok_with_pagination(data: Vec<T>, pagination: Pagination) -> Self {
        Self {
            data: Some(data),
            pagination: Some(pagination),
        }
    }

    /// Paginated response for one page of results; records `total_elements` on the
    /// pagination when the count is known.
    pub fn ok_from_page(
        page: Vec<T>,
        mut pagination: Pagination,
        total_elements: Option<i64>,
    ) -> Self {
        if let Some(total) = total_elements {
            pagination.set_total_elements(total);
        }
        Self::ok_with_pagination(page, pagination)
    }
}

impl<T> Default for ApiResponse<T> {
    fn default() -> Self {
        Self::empty()
    }
}
