use crate::domain::errors::RepositoryError;
use crate::domain::logging::LogComponent;
use crate::domain::market_data::repositories::{MarketDataRepository, SeriesRequest};
use crate::domain::market_data::{Series, Symbol};
use crate::infrastructure::bar_records::parse_series;
use crate::log_debug;
use std::collections::HashMap;

/// In-memory provider serving pre-loaded series per symbol
#[derive(Debug, Clone, Default)]
pub struct StaticRepository {
    entries: HashMap<Symbol, Result<Series, RepositoryError>>,
}

impl StaticRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series(mut self, symbol: &str, series: Series) -> Self {
        self.entries.insert(Symbol::from(symbol), Ok(series));
        self
    }

    /// Registers a failure returned for every request on `symbol`
    pub fn with_failure(mut self, symbol: &str, error: RepositoryError) -> Self {
        self.entries.insert(Symbol::from(symbol), Err(error));
        self
    }

    pub fn with_json(self, symbol: &str, json: &str) -> Result<Self, RepositoryError> {
        let series = parse_series(json)?;
        Ok(self.with_series(symbol, series))
    }

    pub fn symbols(&self) -> Vec<&Symbol> {
        self.entries.keys().collect()
    }
}

impl MarketDataRepository for StaticRepository {
    fn fetch_series(&self, request: &SeriesRequest) -> Result<Series, RepositoryError> {
        log_debug!(
            LogComponent::Infrastructure("StaticRepository"),
            "fetch {} period={} interval={}",
            request.symbol,
            request.period,
            request.interval
        );
        match self.entries.get(&request.symbol) {
            Some(entry) => entry.clone(),
            None => Err(RepositoryError::NotFound(request.symbol.value().to_string())),
        }
    }
}
