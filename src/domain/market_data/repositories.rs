use crate::domain::errors::RepositoryError;
use crate::domain::market_data::{LookbackPeriod, Series, Symbol, TimeInterval};

/// What to ask the data provider for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesRequest {
    pub symbol: Symbol,
    pub period: LookbackPeriod,
    pub interval: TimeInterval,
}

/// Source of raw price series.
///
/// An unknown symbol may be reported either as an error or as an empty
/// series; callers treat both as "no data".
pub trait MarketDataRepository {
    fn fetch_series(&self, request: &SeriesRequest) -> Result<Series, RepositoryError>;
}
