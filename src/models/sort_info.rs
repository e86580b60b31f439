use crate::errors::ServiceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "utoipa")]
use utoipa::ToSchema;

pub const ASC: &str = "asc";
pub const DESC: &str = "desc";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => ASC,
            SortDirection::Desc => DESC,
        }
    }

    /// Case-insensitive parse. Surrounding whitespace is not accepted: `None` for
    /// anything but `asc` or `desc`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            ASC => Some(SortDirection::Asc),
            DESC => Some(SortDirection::Desc),
            _ => None,
        }
    }

    /// Trims, then parses like [`SortDirection::parse`], but never fails: unknown values
    /// become `Asc`.
    pub fn parse_lenient(value: &str) -> Self {
        Self::parse(value.trim()).unwrap_or_else(|| {
            tracing::debug!(direction = %value, "Unknown sort direction, using asc");
            SortDirection::Asc
        })
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            ServiceError::bad_request(format!("invalid sort direction '{s}', expected asc or desc"))
                .with_process("Sort Parsing")
        })
    }
}

/// A single ordering instruction: sort by `field` in `direction`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub struct SortInfo {
    pub field: String,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortInfo {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Desc)
    }
}
