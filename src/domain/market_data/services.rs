use crate::domain::chart::{
    Color, DerivedView, Direction, DisplayConfig, MaOverlaySpec, MovingAverageOverlay, Summary, SummaryStats,
    VolumeBar,
};
use crate::domain::errors::{TransformError, ValidationError};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::indicator_engine::trailing_sma;
use crate::domain::market_data::{MaPeriod, Price, PriceBar, ReferenceMode, Series, Volume};
use crate::log_trace;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Domain service deriving display series from a raw price series
///
/// Every method is a pure function of its arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeriesTransformer;

impl SeriesTransformer {
    pub fn new() -> Self {
        Self
    }

    /// Trailing simple moving average of closes, aligned with `series`.
    ///
    /// Index `i` is `None` while fewer than `period` closes are available.
    /// A zero period is a caller error.
    pub fn compute_moving_average(&self, series: &Series, period: usize) -> Result<Vec<Option<Price>>, TransformError> {
        Ok(self.moving_average(series, MaPeriod::new(period)?))
    }

    pub fn moving_average(&self, series: &Series, period: MaPeriod) -> Vec<Option<Price>> {
        trailing_sma(&series.closes(), period)
    }

    /// Up/down tag per bar.
    ///
    /// A bar with a full candle is classified by its own open and close,
    /// the first bar included. Close-only bars compare against the previous
    /// close; the first bar then has no reference and is `Neutral`.
    pub fn classify_direction(&self, series: &Series) -> Vec<Direction> {
        let bars = series.bars();
        bars.iter()
            .enumerate()
            .map(|(i, bar)| match bar.is_bullish() {
                Some(true) => Direction::Up,
                Some(false) => Direction::Down,
                None if i == 0 => Direction::Neutral,
                None => Direction::from_change(bar.close.value() - bars[i - 1].close.value()),
            })
            .collect()
    }

    /// Summary figures; an empty series is `Summary::Unavailable`.
    pub fn summarize(&self, series: &Series, mode: ReferenceMode) -> Summary {
        let bars = series.bars();
        let (Some(first), Some(last)) = (bars.first(), bars.last()) else {
            return Summary::Unavailable;
        };

        let reference = match mode {
            ReferenceMode::FirstBar => first.close,
            ReferenceMode::OffsetBars(n) => bars[bars.len() - 1 - n.min(bars.len() - 1)].close,
        };

        let (low, high) = series.price_range().unwrap_or((first.close, first.close));
        let mean = bars.iter().map(|bar| bar.close.value()).sum::<f64>() / bars.len() as f64;
        let volume_total = bars
            .iter()
            .filter_map(|bar| bar.volume)
            .fold(None, |acc: Option<f64>, v| Some(acc.unwrap_or(0.0) + v.value()))
            .map(Volume::from);

        Summary::Available(SummaryStats::new(last.close, reference, high, low, Price::from(mean), volume_total))
    }

    /// Full view for one render
    pub fn derive(&self, series: Series, config: &DisplayConfig) -> Result<DerivedView, TransformError> {
        config.validate()?;

        let directions = self.classify_direction(&series);
        let overlays = if config.show_moving_averages {
            self.overlays(&series, &config.moving_averages)
        } else {
            Vec::new()
        };
        let volume = (config.show_volume && series.has_volume()).then(|| volume_bars(series.bars(), &directions));
        let summary = self.summarize(&series, config.reference_mode);

        log_trace!(
            LogComponent::Domain("SeriesTransformer"),
            "derived {} bars, {} overlays, available={}",
            series.len(),
            overlays.len(),
            summary.is_available()
        );

        Ok(DerivedView {
            instrument: config.instrument.clone(),
            currency: config.currency.clone(),
            chart_type: config.chart_type.effective(series.has_ohlc()),
            series,
            overlays,
            directions,
            volume,
            summary,
        })
    }

    fn overlay(&self, series: &Series, index: usize, spec: &MaOverlaySpec) -> MovingAverageOverlay {
        MovingAverageOverlay {
            label: spec.display_label(),
            period: spec.period,
            color: Color::OVERLAYS[index % Color::OVERLAYS.len()],
            values: self.moving_average(series, spec.period),
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn overlays(&self, series: &Series, specs: &[MaOverlaySpec]) -> Vec<MovingAverageOverlay> {
        specs.iter().enumerate().map(|(i, spec)| self.overlay(series, i, spec)).collect()
    }

    #[cfg(feature = "parallel")]
    fn overlays(&self, series: &Series, specs: &[MaOverlaySpec]) -> Vec<MovingAverageOverlay> {
        specs.par_iter().enumerate().map(|(i, spec)| self.overlay(series, i, spec)).collect()
    }
}

fn volume_bars(bars: &[PriceBar], directions: &[Direction]) -> Vec<VolumeBar> {
    bars.iter()
        .zip(directions)
        .filter_map(|(bar, &direction)| {
            bar.volume.map(|volume| VolumeBar { timestamp: bar.timestamp, volume, direction })
        })
        .collect()
}

/// Domain service reporting data-quality issues
#[derive(Debug, Clone, Copy, Default)]
pub struct DataValidationService;

impl DataValidationService {
    pub fn new() -> Self {
        Self
    }

    pub fn validate_bar(&self, bar: &PriceBar) -> Result<(), ValidationError> {
        let timestamp = bar.timestamp.value();
        let prices = [Some(bar.close), bar.open, bar.high, bar.low];
        if prices.iter().flatten().any(|price| !price.is_finite()) {
            return Err(ValidationError::NonFinitePrice { timestamp });
        }

        if let Some(volume) = bar.volume {
            if !(volume.value() >= 0.0) {
                return Err(ValidationError::NegativeVolume { timestamp, volume: volume.value() });
            }
        }

        if let Some(candle) = bar.ohlc() {
            if candle.high < candle.low {
                return Err(ValidationError::OhlcLogicViolation {
                    timestamp,
                    reason: "High price cannot be lower than low price".to_string(),
                });
            }
            if !candle.is_valid() {
                return Err(ValidationError::OhlcLogicViolation {
                    timestamp,
                    reason: "Open and close must lie within the low..high range".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Timestamps must be strictly increasing.
    pub fn validate_sequence(&self, series: &Series) -> Result<(), ValidationError> {
        match series.bars().windows(2).position(|pair| pair[1].timestamp <= pair[0].timestamp) {
            Some(i) => Err(ValidationError::InvalidSequence { index: i + 1 }),
            None => Ok(()),
        }
    }

    /// Every problem in the series, bars first
    pub fn collect_issues(&self, series: &Series) -> Vec<ValidationError> {
        let mut issues: Vec<ValidationError> =
            series.bars().iter().filter_map(|bar| self.validate_bar(bar).err()).collect();
        if let Err(e) = self.validate_sequence(series) {
            issues.push(e);
        }
        issues
    }
}
