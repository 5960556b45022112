use super::value_objects::{ChartType, Color, Direction};
use crate::domain::errors::TransformError;
use crate::domain::market_data::{MaPeriod, Price, Series, Timestamp, Volume};
use serde::Serialize;

/// Moving average line aligned index-for-index with the series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovingAverageOverlay {
    pub label: String,
    pub period: MaPeriod,
    pub color: Color,
    /// `None` until `period` closes are available
    pub values: Vec<Option<Price>>,
}

impl MovingAverageOverlay {
    pub fn first_defined_index(&self) -> Option<usize> {
        self.values.iter().position(Option::is_some)
    }
}

/// Volume bar colored by the direction of its price bar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolumeBar {
    pub timestamp: Timestamp,
    pub volume: Volume,
    pub direction: Direction,
}

/// Summary figures of a non-empty series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStats {
    pub current: Price,
    pub reference: Price,
    pub change_abs: f64,
    change_pct: Option<f64>,
    pub high: Price,
    pub low: Price,
    pub mean: Price,
    pub volume_total: Option<Volume>,
}

impl SummaryStats {
    pub(crate) fn new(
        current: Price,
        reference: Price,
        high: Price,
        low: Price,
        mean: Price,
        volume_total: Option<Volume>,
    ) -> Self {
        let change_abs = current.value() - reference.value();
        let change_pct = if reference.value() == 0.0 {
            None
        } else {
            Some(change_abs / reference.value() * 100.0)
        };
        Self { current, reference, change_abs, change_pct, high, low, mean, volume_total }
    }

    /// Percent change against the reference bar
    pub fn change_pct(&self) -> Result<f64, TransformError> {
        self.change_pct.ok_or(TransformError::DivisionUndefined)
    }

    /// Badge direction: sign of the percent change, of the absolute change when the percent is undefined
    pub fn trend(&self) -> Direction {
        Direction::from_change(self.change_pct.unwrap_or(self.change_abs))
    }
}

/// Summary of a series; empty or missing data is `Unavailable`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Summary {
    Unavailable,
    Available(SummaryStats),
}

impl Summary {
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    pub fn stats(&self) -> Option<&SummaryStats> {
        match self {
            Self::Available(stats) => Some(stats),
            Self::Unavailable => None,
        }
    }
}

/// Everything a renderer needs to draw one instrument panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedView {
    pub instrument: String,
    pub currency: String,
    pub chart_type: ChartType,
    pub series: Series,
    pub overlays: Vec<MovingAverageOverlay>,
    pub directions: Vec<Direction>,
    pub volume: Option<Vec<VolumeBar>>,
    pub summary: Summary,
}

impl DerivedView {
    pub fn is_available(&self) -> bool {
        self.summary.is_available()
    }

    pub fn overlay(&self, period: usize) -> Option<&MovingAverageOverlay> {
        self.overlays.iter().find(|overlay| overlay.period.get() == period)
    }
}
