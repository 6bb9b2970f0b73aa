pub mod cache;
pub mod diagnostics;
pub mod store;
