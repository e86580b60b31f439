use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "utoipa")]
use utoipa::ToSchema;

/// Audit fields shared by persisted resources.
///
/// Embed it with `#[serde(flatten)]` to expose the four fields at the top level of a DTO.
/// Timestamps serialise as RFC 3339 strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub struct BaseAuditDto {
    /// Who created the record.
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Who last updated the record.
    #[serde(default)]
    pub updated_by: Option<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl BaseAuditDto {
    /// Audit of a record created by `by` at `at`; the update pair starts equal to it.
    pub fn created(by: impl Into<String>, at: DateTime<Utc>) -> Self {
        let by = by.into();
        Self {
            created_by: Some(by.clone()),
            created_at: Some(at),
            updated_by: Some(by),
            updated_at: Some(at),
        }
    }

    /// Marks the record as updated by `by` at `at`, leaving the creation pair untouched.
    pub fn touch(&mut self, by: impl Into<String>, at: DateTime<Utc>) {
        self.updated_by = Some(by.into());
        self.updated_at = Some(at);
    }
}
