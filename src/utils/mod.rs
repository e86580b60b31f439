mod sort;
pub use sort::*;
mod pageable;
pub use pageable::*;
