use crate::domain::errors::TransformError;
use crate::domain::market_data::{MaPeriod, ReferenceMode};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

/// Value Object - Chart type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, EnumString, AsRefStr, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartType {
    #[default]
    #[display(fmt = "Candlestick")]
    #[strum(serialize = "candlestick")]
    Candlestick,
    #[display(fmt = "Line")]
    #[strum(serialize = "line")]
    Line,
    #[display(fmt = "OHLC")]
    #[strum(serialize = "ohlc-bar", serialize = "ohlc")]
    OhlcBar,
}

impl ChartType {
    pub fn requires_ohlc(&self) -> bool {
        matches!(self, Self::Candlestick | Self::OhlcBar)
    }

    /// Candle kinds degrade to a line when the series has no candles.
    pub fn effective(&self, has_ohlc: bool) -> Self {
        if self.requires_ohlc() && !has_ohlc { Self::Line } else { *self }
    }
}

/// Value Object - coloring tag of one bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[display(fmt = "up")]
    Up,
    #[display(fmt = "down")]
    Down,
    #[display(fmt = "neutral")]
    Neutral,
}

impl Direction {
    pub fn from_change(change: f64) -> Self {
        if change < 0.0 { Self::Down } else { Self::Up }
    }

    pub fn color(&self) -> Color {
        match self {
            Self::Up => Color::UP,
            Self::Down => Color::DOWN,
            Self::Neutral => Color::NEUTRAL,
        }
    }
}

/// Value Object - Color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub const fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    pub fn to_hex(&self) -> u32 {
        let r = (self.r * 255.0).round() as u32;
        let g = (self.g * 255.0).round() as u32;
        let b = (self.b * 255.0).round() as u32;
        (r << 16) | (g << 8) | b
    }

    /// `#RRGGBB`, as chart widgets expect it
    pub fn to_css(&self) -> String {
        format!("#{:06X}", self.to_hex())
    }

    pub const UP: Color = Color::from_hex(0x26A69A);
    pub const DOWN: Color = Color::from_hex(0xE53935);
    pub const NEUTRAL: Color = Color::from_hex(0x888888);
    pub const WATERMARK: Color = Color::new(100.0 / 255.0, 100.0 / 255.0, 100.0 / 255.0, 0.08);
    /// Overlay colors, cycled by overlay index
    pub const OVERLAYS: [Color; 2] = [Color::from_hex(0x2196F3), Color::from_hex(0xFF9800)];
}

impl Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

/// One requested moving average overlay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaOverlaySpec {
    pub period: MaPeriod,
    #[serde(default)]
    pub label: Option<String>,
}

impl MaOverlaySpec {
    pub fn new(period: usize) -> Result<Self, TransformError> {
        Ok(Self { period: MaPeriod::new(period)?, label: None })
    }

    pub fn labeled(period: usize, label: &str) -> Result<Self, TransformError> {
        Ok(Self { period: MaPeriod::new(period)?, label: Some(label.to_string()) })
    }

    /// Explicit label, `MA{period}` otherwise
    pub fn display_label(&self) -> String {
        self.label.clone().unwrap_or_else(|| format!("MA{}", self.period))
    }
}

/// Per-render display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub chart_type: ChartType,
    pub show_volume: bool,
    pub show_moving_averages: bool,
    pub moving_averages: Vec<MaOverlaySpec>,
    pub currency: String,
    pub instrument: String,
    pub reference_mode: ReferenceMode,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            chart_type: ChartType::Candlestick,
            show_volume: true,
            show_moving_averages: false,
            moving_averages: default_overlays(),
            currency: "USD".to_string(),
            instrument: String::new(),
            reference_mode: ReferenceMode::FirstBar,
        }
    }
}

fn default_overlays() -> Vec<MaOverlaySpec> {
    [(20, "MA20"), (50, "MA50")]
        .into_iter()
        .filter_map(|(period, label)| MaOverlaySpec::labeled(period, label).ok())
        .collect()
}

impl DisplayConfig {
    pub fn for_instrument(instrument: &str, currency: &str) -> Self {
        Self { instrument: instrument.to_string(), currency: currency.to_string(), ..Default::default() }
    }

    pub fn with_chart_type(mut self, chart_type: ChartType) -> Self {
        self.chart_type = chart_type;
        self
    }

    pub fn with_volume(mut self, show: bool) -> Self {
        self.show_volume = show;
        self
    }

    /// Replaces the overlay list and turns overlays on.
    pub fn with_moving_averages(mut self, overlays: Vec<MaOverlaySpec>) -> Self {
        self.show_moving_averages = true;
        self.moving_averages = overlays;
        self
    }

    pub fn with_reference_mode(mut self, mode: ReferenceMode) -> Self {
        self.reference_mode = mode;
        self
    }

    /// Overlays must be requested with at least one period.
    pub fn validate(&self) -> Result<(), TransformError> {
        if self.show_moving_averages && self.moving_averages.is_empty() {
            return Err(TransformError::InvalidConfiguration(
                "moving averages enabled without any period".to_string(),
            ));
        }
        Ok(())
    }
}
