use crate::models::{SortDirection, SortInfo};
use serde_json::json;

/// Parses a sort expression such as `"name:asc,createdAt:desc"`.
///
/// Segments are separated by `,` and each one is either `field` or `field:direction`.
/// Blank segments are skipped, unknown directions fall back to ascending and the input
/// order is kept, duplicates included.
///
/// ```
/// use sucrim::SortInfo;
/// use sucrim::utils::parse_sort;
///
/// assert_eq!(
///     parse_sort(Some("name:asc,createdAt:desc")),
///     vec![SortInfo::asc("name"), SortInfo::desc("createdAt")]
/// );
/// assert!(parse_sort(None).is_empty());
/// ```
pub fn parse_sort(sort: Option<&str>) -> Vec<SortInfo> {
    let Some(sort) = sort else {
        return Vec::new();
    };

    sort.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| match segment.split_once(':') {
            Some((field, direction)) => {
                SortInfo::new(field.trim(), SortDirection::parse_lenient(direction))
            }
            None => SortInfo::asc(segment),
        })
        .collect()
}

/// Builds the sort list from a sort column and a separate direction toggle.
///
/// When `sort_by` contains `,` or `:` it is a full sort expression and goes through
/// [`parse_sort`], ignoring `default_direction`. Otherwise it names one field, sorted by
/// `default_direction` (ascending when absent or invalid).
pub fn create_sort(sort_by: Option<&str>, default_direction: Option<&str>) -> Vec<SortInfo> {
    let Some(sort_by) = sort_by.filter(|s| !s.trim().is_empty()) else {
        return Vec::new();
    };

    if sort_by.contains([',', ':']) {
        return parse_sort(Some(sort_by));
    }

    // The toggle is matched as given: a padded value such as " desc " is not a direction.
    let direction = default_direction
        .and_then(SortDirection::parse)
        .unwrap_or_default();
    vec![SortInfo::new(sort_by.trim(), direction)]
}

/// Renders sorts as `{"field": .., "direction": ..}` records for key-value consumers.
pub fn to_sort_dict(sorts: &[SortInfo]) -> Vec<serde_json::Value> {
    sorts
        .iter()
        .map(|sort| json!({"field": sort.field, "direction": sort.direction.as_str()}))
        .collect()
}
