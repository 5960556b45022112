pub mod config;
pub mod dashboard_service;

pub use config::*;
pub use dashboard_service::*;
