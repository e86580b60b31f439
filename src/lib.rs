mod errors;
pub use errors::*;

pub mod models;
pub use models::{BaseAuditDto, Pagination, PaginationQuery, SortDirection, SortInfo};

mod response;
pub use response::*;

pub mod utils;

#[cfg(feature = "axum")]
mod rest;
