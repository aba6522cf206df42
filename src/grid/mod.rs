pub mod builder;
pub mod config;
pub mod types;
