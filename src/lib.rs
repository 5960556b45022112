//! Derived display series for financial price charts.
//!
//! A raw OHLC [`Series`](domain::market_data::Series) plus a
//! [`DisplayConfig`](domain::chart::DisplayConfig) goes through the
//! [`SeriesTransformer`](domain::market_data::services::SeriesTransformer)
//! and comes out as a [`DerivedView`](domain::chart::DerivedView): moving
//! average overlays, per-bar direction tags, volume bars and a summary.

use crate::domain::logging::{LogComponent, get_logger};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod time_utils;

pub use application::{DashboardConfig, DashboardService, InstrumentPanel};
pub use domain::chart::{ChartType, DerivedView, Direction, DisplayConfig, Summary};
pub use domain::errors::{AppError, AppResult, TransformError};
pub use domain::market_data::services::SeriesTransformer;
pub use domain::market_data::{PriceBar, ReferenceMode, Series};

/// Installs the stderr logger (level from `PRICE_CHART_LOG`) and the system clock.
pub fn init_logging() {
    domain::logging::init_time_provider(Box::new(infrastructure::SystemTimeProvider::new()));
    let logger = infrastructure::ConsoleLogger::from_env();
    let level = logger.min_level();
    domain::logging::init_logger(Box::new(logger));

    get_logger().info(
        LogComponent::Presentation("Initialize"),
        &format!("Logging initialized at {}", level),
    );
}
