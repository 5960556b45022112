pub use super::value_objects::{OHLC, Price, Timestamp, Volume};
use serde::{Deserialize, Serialize};

/// Domain entity - one sample of a price series
///
/// `close` is always present. Line-only sources leave `open`, `high` and
/// `low` empty, which disables the candle-based derivations for that bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub timestamp: Timestamp,
    pub open: Option<Price>,
    pub high: Option<Price>,
    pub low: Option<Price>,
    pub close: Price,
    pub volume: Option<Volume>,
}

impl PriceBar {
    pub fn new(timestamp: Timestamp, ohlc: OHLC, volume: Option<Volume>) -> Self {
        Self {
            timestamp,
            open: Some(ohlc.open),
            high: Some(ohlc.high),
            low: Some(ohlc.low),
            close: ohlc.close,
            volume,
        }
    }

    /// Bar from a close-only source
    pub fn close_only(timestamp: Timestamp, close: Price) -> Self {
        Self { timestamp, open: None, high: None, low: None, close, volume: None }
    }

    /// Full candle, if the source provided one
    pub fn ohlc(&self) -> Option<OHLC> {
        match (self.open, self.high, self.low) {
            (Some(open), Some(high), Some(low)) => Some(OHLC::new(open, high, low, self.close)),
            _ => None,
        }
    }

    pub fn has_ohlc(&self) -> bool {
        self.ohlc().is_some()
    }

    /// High of the bar, the close when the source has none
    pub fn high_or_close(&self) -> Price {
        self.high.unwrap_or(self.close)
    }

    pub fn low_or_close(&self) -> Price {
        self.low.unwrap_or(self.close)
    }

    pub fn is_bullish(&self) -> Option<bool> {
        self.ohlc().map(|candle| candle.close >= candle.open)
    }
}

/// Domain entity - price series ordered by ascending timestamp
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series {
    bars: Vec<PriceBar>,
}

impl Series {
    /// Keeps the order the bars arrive in.
    pub fn new(bars: Vec<PriceBar>) -> Self {
        Self { bars }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Orders provider output by timestamp; bars sharing a timestamp keep their relative order.
    pub fn sorted(mut bars: Vec<PriceBar>) -> Self {
        bars.sort_by_key(|bar| bar.timestamp);
        Self { bars }
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn first(&self) -> Option<&PriceBar> {
        self.bars.first()
    }

    pub fn latest(&self) -> Option<&PriceBar> {
        self.bars.last()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|bar| bar.close.value()).collect()
    }

    /// True when at least one bar carries a full candle
    pub fn has_ohlc(&self) -> bool {
        self.bars.iter().any(PriceBar::has_ohlc)
    }

    pub fn has_volume(&self) -> bool {
        self.bars.iter().any(|bar| bar.volume.is_some())
    }

    /// Lowest low and highest high, falling back to closes per bar
    pub fn price_range(&self) -> Option<(Price, Price)> {
        let first = self.bars.first()?;
        let init = (first.low_or_close(), first.high_or_close());
        Some(self.bars.iter().fold(init, |(min, max), bar| {
            let low = bar.low_or_close();
            let high = bar.high_or_close();
            (if low < min { low } else { min }, if high > max { high } else { max })
        }))
    }
}

impl From<Vec<PriceBar>> for Series {
    fn from(bars: Vec<PriceBar>) -> Self {
        Self::new(bars)
    }
}

impl FromIterator<PriceBar> for Series {
    fn from_iter<I: IntoIterator<Item = PriceBar>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
