pub mod adapter;
pub mod app_config;
pub mod redis;

pub use adapter::*;
pub use app_config::*;
pub use redis::*;
