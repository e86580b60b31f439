use serde::{Deserialize, Serialize};
#[cfg(feature = "utoipa")]
use utoipa::ToSchema;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const DEFAULT_SORT_BY: &str = "created_at";
pub const DEFAULT_SORT_DIRECTION: &str = "desc";

/// Pagination state of a single request.
///
/// `page` is 1-indexed. `total_pages` is derived from `total_elements` and `page_size`
/// and is only ever written by [`Pagination::set_total_elements`] (or the equivalent
/// derivation done on construction and deserialisation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
#[serde(from = "RawPagination")]
pub struct Pagination {
    page: i64,
    page_size: i64,
    sort_by: Option<String>,
    sort_direction: Option<String>,
    total_elements: Option<i64>,
    total_pages: Option<i64>,
}

#[derive(Deserialize)]
#[serde(default)]
struct RawPagination {
    page: i64,
    page_size: i64,
    sort_by: Option<String>,
    sort_direction: Option<String>,
    total_elements: Option<i64>,
}

impl Default for RawPagination {
    fn default() -> Self {
        let Pagination {
            page,
            page_size,
            sort_by,
            sort_direction,
            total_elements,
            ..
        } = Pagination::default();
        Self {
            page,
            page_size,
            sort_by,
            sort_direction,
            total_elements,
        }
    }
}

impl From<RawPagination> for Pagination {
    fn from(raw: RawPagination) -> Self {
        let pagination = Pagination::new(raw.page, raw.page_size)
            .with_sort_by(raw.sort_by)
            .with_sort_direction(raw.sort_direction);
        match raw.total_elements {
            Some(total) => pagination.with_total_elements(total),
            None => pagination,
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            sort_by: Some(DEFAULT_SORT_BY.to_string()),
            sort_direction: Some(DEFAULT_SORT_DIRECTION.to_string()),
            total_elements: None,
            total_pages: None,
        }
    }
}

impl Pagination {
    /// Pagination for `page` of `page_size` items, with the default sort.
    pub fn new(page: i64, page_size: i64) -> Self {
        Self {
            page,
            page_size,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_sort_by(mut self, sort_by: Option<String>) -> Self {
        self.sort_by = sort_by;
        self
    }

    #[must_use]
    pub fn with_sort_direction(mut self, sort_direction: Option<String>) -> Self {
        self.sort_direction = sort_direction;
        self
    }

    #[must_use]
    pub fn with_total_elements(mut self, total_elements: i64) -> Self {
        self.set_total_elements(total_elements);
        self
    }

    /// Records the element count and recomputes `total_pages` when the page size allows it.
    pub fn set_total_elements(&mut self, total_elements: i64) {
        let total = if total_elements < 0 {
            tracing::debug!(total_elements, "Negative element count, using 0");
            0
        } else {
            total_elements
        };
        self.total_elements = Some(total);
        if self.page_size > 0 {
            let size = self.page_size;
            self.total_pages = Some(total / size + i64::from(total % size != 0));
        } else {
            tracing::debug!(
                page_size = self.page_size,
                "Non-positive page size, total pages left unset"
            );
        }
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    pub fn sort_by(&self) -> Option<&str> {
        self.sort_by.as_deref()
    }

    pub fn sort_direction(&self) -> Option<&str> {
        self.sort_direction.as_deref()
    }

    pub fn total_elements(&self) -> Option<i64> {
        self.total_elements
    }

    pub fn total_pages(&self) -> Option<i64> {
        self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let pagination = Pagination::default();
        assert_eq!(pagination.page(), 1);
        assert_eq!(pagination.page_size(), 10);
        assert_eq!(pagination.sort_by(), Some("created_at"));
        assert_eq!(pagination.sort_direction(), Some("desc"));
        assert_eq!(pagination.total_elements(), None);
        assert_eq!(pagination.total_pages(), None);
    }

    #[test]
    fn test_set_total_elements_rounds_up() {
        let mut pagination = Pagination::new(1, 10);
        pagination.set_total_elements(95);
        assert_eq!(pagination.total_elements(), Some(95));
        assert_eq!(pagination.total_pages(), Some(10));

        pagination.set_total_elements(100);
        assert_eq!(pagination.total_pages(), Some(10));

        pagination.set_total_elements(0);
        assert_eq!(pagination.total_pages(), Some(0));
    }

    #[test]
    fn test_huge_total_does_not_overflow() {
        let pagination = Pagination::new(1, 10).with_total_elements(i64::MAX);
        assert_eq!(pagination.total_pages(), Some(i64::MAX / 10 + 1));

        let single = Pagination::new(1, 1).with_total_elements(i64::MAX);
        assert_eq!(single.total_pages(), Some(i64::MAX));

        let whole = Pagination::new(1, i64::MAX).with_total_elements(i64::MAX);
        assert_eq!(whole.total_pages(), Some(1));
    }

    #[test]
    fn test_deserialize_huge_total() {
        let pagination: Pagination = serde_json::from_value(json!({
            "page_size": 10,
            "total_elements": i64::MAX,
        }))
        .unwrap();
        assert_eq!(pagination.total_pages(), Some(i64::MAX / 10 + 1));
    }

    #[test]
    fn test_set_total_elements_is_idempotent() {
        let mut once = Pagination::new(3, 7);
        once.set_total_elements(50);
        let mut twice = Pagination::new(3, 7);
        twice.set_total_elements(50);
        twice.set_total_elements(50);
        assert_eq!(once, twice);
        assert_eq!(twice.total_pages(), Some(8));
    }

    #[test]
    fn test_zero_page_size_leaves_total_pages_unset() {
        let mut pagination = Pagination::new(1, 0);
        pagination.set_total_elements(95);
        assert_eq!(pagination.total_elements(), Some(95));
        assert_eq!(pagination.total_pages(), None);

        let negative = Pagination::new(1, -5).with_total_elements(95);
        assert_eq!(negative.total_pages(), None);
    }

    #[test]
    fn test_negative_total_is_clamped() {
        let pagination = Pagination::new(1, 10).with_total_elements(-3);
        assert_eq!(pagination.total_elements(), Some(0));
        assert_eq!(pagination.total_pages(), Some(0));
    }

    #[test]
    fn test_deserialize_derives_total_pages() {
        let pagination: Pagination = serde_json::from_value(json!({
            "page": 2,
            "page_size": 20,
            "total_elements": 41,
            "total_pages": 999,
        }))
        .unwrap();
        assert_eq!(pagination.page(), 2);
        assert_eq!(pagination.total_pages(), Some(3));
        assert_eq!(pagination.sort_by(), Some("created_at"));
    }

    #[test]
    fn test_serialize() {
        let pagination = Pagination::new(2, 5)
            .with_sort_by(Some("name".to_string()))
            .with_sort_direction(None)
            .with_total_elements(11);
        assert_eq!(
            serde_json::to_value(&pagination).unwrap(),
            json!({
                "page": 2,
                "page_size": 5,
                "sort_by": "name",
                "sort_direction": null,
                "total_elements": 11,
                "total_pages": 3,
            })
        );
    }
}
