mod sort_info;
pub use sort_info::*;
mod pagination;
pub use pagination::*;
mod query;
pub use query::*;
mod audit;
pub use audit::*;
