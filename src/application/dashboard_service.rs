use crate::application::config::DashboardConfig;
use crate::domain::{
    chart::{DerivedView, DisplayConfig},
    errors::AppResult,
    logging::LogComponent,
    market_data::{
        Instrument, Series,
        repositories::{MarketDataRepository, SeriesRequest},
        services::{DataValidationService, SeriesTransformer},
    },
};
use crate::{log_error, log_info, log_warn};
use serde::Serialize;

/// One instrument's chart, ready for the renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstrumentPanel {
    pub instrument: Instrument,
    pub view: DerivedView,
    /// Data-quality problems found in the provider output
    pub data_issues: Vec<String>,
}

/// Application service building every panel of a dashboard page
pub struct DashboardService<R: MarketDataRepository> {
    repository: R,
    transformer: SeriesTransformer,
    validator: DataValidationService,
}

impl<R: MarketDataRepository> DashboardService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            transformer: SeriesTransformer::new(),
            validator: DataValidationService::new(),
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Panels in the configured instrument order.
    ///
    /// Provider failures never fail the page: the affected panel comes back
    /// with an unavailable summary.
    pub fn load_panels(&self, config: &DashboardConfig) -> AppResult<Vec<InstrumentPanel>> {
        config.validate()?;
        log_info!(
            LogComponent::Application("DashboardService"),
            "🚀 Loading {} instruments, period={} interval={}",
            config.instruments.len(),
            config.period,
            config.interval()
        );

        config
            .instruments
            .iter()
            .map(|instrument| self.load_panel(instrument, config))
            .collect()
    }

    pub fn load_panel(&self, instrument: &Instrument, config: &DashboardConfig) -> AppResult<InstrumentPanel> {
        let request = SeriesRequest {
            symbol: instrument.symbol.clone(),
            period: config.period,
            interval: config.interval(),
        };
        let series = self.fetch_or_empty(&request);
        let data_issues: Vec<String> =
            self.validator.collect_issues(&series).iter().map(ToString::to_string).collect();
        if !data_issues.is_empty() {
            log_warn!(
                LogComponent::Application("DashboardService"),
                "{} has {} data issues, first: {}",
                instrument.symbol,
                data_issues.len(),
                data_issues[0]
            );
        }

        let view = self.render_view(series, &config.display_for(instrument))?;
        Ok(InstrumentPanel { instrument: instrument.clone(), view, data_issues })
    }

    /// Derives a view for an already fetched series
    pub fn render_view(&self, series: Series, display: &DisplayConfig) -> AppResult<DerivedView> {
        Ok(self.transformer.derive(series, display)?)
    }

    fn fetch_or_empty(&self, request: &SeriesRequest) -> Series {
        match self.repository.fetch_series(request) {
            Ok(series) => {
                if series.is_empty() {
                    log_warn!(LogComponent::Application("DashboardService"), "no data for {}", request.symbol);
                }
                series
            }
            Err(e) => {
                log_error!(LogComponent::Application("DashboardService"), "Failed to load {}: {}", request.symbol, e);
                Series::empty()
            }
        }
    }
}
