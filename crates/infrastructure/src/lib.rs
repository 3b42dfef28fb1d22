pub mod adapter;
pub mod cache;

pub use adapter::*;
pub use cache::*;
