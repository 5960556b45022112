use crate::domain::errors::TransformError;
use chrono::{DateTime, Utc};
use derive_more::{Constructor, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::num::NonZeroUsize;
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Value Object - Price
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Deref, Constructor, Serialize, Deserialize)]
pub struct Price(f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Value Object - Volume
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Deref, Constructor, Serialize, Deserialize)]
pub struct Volume(f64);

impl Volume {
    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Value Object - Timestamp in milliseconds since the Unix epoch
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into, Deref, Constructor, Serialize, Deserialize,
)]
pub struct Timestamp(u64);

impl Timestamp {
    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn as_f64(&self) -> f64 {
        self.0 as f64
    }

    pub fn from_millis(value: u64) -> Self {
        Self(value)
    }

    /// Pre-epoch instants are clamped to zero.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt.timestamp_millis().max(0) as u64)
    }

    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.0 as i64)
    }
}

/// Value Object - full candle prices of one bar
#[derive(Debug, Clone, Copy, PartialEq, Constructor, Serialize, Deserialize)]
pub struct OHLC {
    pub open: Price,
    pub high: Price,
    pub low: Price,
    pub close: Price,
}

impl OHLC {
    /// `low <= min(open, close) <= max(open, close) <= high`
    pub fn is_valid(&self) -> bool {
        self.high >= self.open
            && self.high >= self.close
            && self.high >= self.low
            && self.low <= self.open
            && self.low <= self.close
    }
}

/// Value Object - moving average window length, never zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
#[display(fmt = "{}", _0)]
pub struct MaPeriod(NonZeroUsize);

impl MaPeriod {
    pub fn new(period: usize) -> Result<Self, TransformError> {
        NonZeroUsize::new(period)
            .map(Self)
            .ok_or_else(|| TransformError::InvalidConfiguration(format!("moving average period must be positive, got {}", period)))
    }

    pub fn get(&self) -> usize {
        self.0.get()
    }
}

impl TryFrom<usize> for MaPeriod {
    type Error = TransformError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MaPeriod> for usize {
    fn from(period: MaPeriod) -> Self {
        period.get()
    }
}

/// Which bar the price change is measured against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceMode {
    /// First bar of the fetched window
    #[default]
    FirstBar,
    /// `n` bars before the last one, clamped to the first bar
    OffsetBars(usize),
}

/// Value Object - ticker symbol as understood by the data provider
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Display, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[display(fmt = "{}", _0)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(symbol: String) -> Result<Self, String> {
        let trimmed = symbol.trim();
        if trimmed.is_empty() {
            return Err("Symbol cannot be empty".to_string());
        }
        Ok(Self(trimmed.to_uppercase()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Symbol {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self(value.trim().to_uppercase())
    }
}

/// Value Object - instrument shown on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instrument {
    pub symbol: Symbol,
    pub name: String,
    #[serde(default)]
    pub currency: String,
}

impl Instrument {
    pub fn new(symbol: &str, name: &str, currency: &str) -> Self {
        let symbol = Symbol::from(symbol);
        let name = if name.trim().is_empty() { symbol.value().to_string() } else { name.to_string() };
        Self { symbol, name, currency: currency.to_string() }
    }

    /// Preset tickers with their default selection flag
    pub fn presets() -> Vec<(Instrument, bool)> {
        vec![
            (Self::new("^GSPC", "S&P 500", "USD"), true),
            (Self::new("BTC-USD", "Bitcoin", "USD"), true),
            (Self::new("GC=F", "Gold", "USD"), true),
            (Self::new("^DJI", "Dow Jones", "USD"), false),
            (Self::new("^IXIC", "NASDAQ", "USD"), false),
            (Self::new("ETH-USD", "Ethereum", "USD"), false),
            (Self::new("CL=F", "Crude Oil", "USD"), false),
            (Self::new("AAPL", "Apple", "USD"), false),
            (Self::new("TSLA", "Tesla", "USD"), false),
            (Self::new("EURUSD=X", "EUR/USD", ""), false),
        ]
    }

    pub fn default_selection() -> Vec<Instrument> {
        Self::presets().into_iter().filter(|(_, on)| *on).map(|(i, _)| i).collect()
    }
}

/// Value Object - sampling interval requested from the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, AsRefStr, Serialize, Deserialize)]
pub enum TimeInterval {
    #[strum(serialize = "5m")]
    #[serde(rename = "5m")]
    FiveMinutes,

    #[strum(serialize = "15m")]
    #[serde(rename = "15m")]
    FifteenMinutes,

    #[strum(serialize = "30m")]
    #[serde(rename = "30m")]
    ThirtyMinutes,

    #[strum(serialize = "1h")]
    #[serde(rename = "1h")]
    OneHour,

    #[strum(serialize = "1d")]
    #[serde(rename = "1d")]
    OneDay,

    #[strum(serialize = "1wk")]
    #[serde(rename = "1wk")]
    OneWeek,
}

/// Value Object - how far back the dashboard looks
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, StrumDisplay, EnumIter, EnumString, AsRefStr, Serialize, Deserialize,
)]
pub enum LookbackPeriod {
    #[strum(serialize = "1d")]
    #[serde(rename = "1d")]
    OneDay,

    #[strum(serialize = "5d")]
    #[serde(rename = "5d")]
    FiveDays,

    #[strum(serialize = "7d")]
    #[serde(rename = "7d")]
    SevenDays,

    #[default]
    #[strum(serialize = "1mo")]
    #[serde(rename = "1mo")]
    OneMonth,

    #[strum(serialize = "3mo")]
    #[serde(rename = "3mo")]
    ThreeMonths,

    #[strum(serialize = "6mo")]
    #[serde(rename = "6mo")]
    SixMonths,

    #[strum(serialize = "1y")]
    #[serde(rename = "1y")]
    OneYear,
}

impl LookbackPeriod {
    pub fn default_interval(&self) -> TimeInterval {
        match self {
            Self::OneDay => TimeInterval::FiveMinutes,
            Self::FiveDays => TimeInterval::FifteenMinutes,
            Self::SevenDays | Self::OneMonth => TimeInterval::OneHour,
            Self::ThreeMonths | Self::SixMonths => TimeInterval::OneDay,
            Self::OneYear => TimeInterval::OneWeek,
        }
    }
}
