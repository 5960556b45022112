#![allow(dead_code)]

use price_chart_series::domain::market_data::{OHLC, Price, PriceBar, Series, Timestamp, Volume};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const HOUR_MS: u64 = 60 * 60 * 1000;

pub fn make_bar(ts: u64, open: f64, high: f64, low: f64, close: f64, volume: Option<f64>) -> PriceBar {
    PriceBar::new(
        Timestamp::from_millis(ts),
        OHLC::new(Price::from(open), Price::from(high), Price::from(low), Price::from(close)),
        volume.map(Volume::from),
    )
}

/// Close-only hourly series
pub fn series_from_closes(closes: &[f64]) -> Series {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| PriceBar::close_only(Timestamp::from_millis(i as u64 * HOUR_MS), Price::from(close)))
        .collect()
}

/// Hourly candles with the given opens and closes; wicks one unit outside the body
pub fn series_from_open_close(opens: &[f64], closes: &[f64]) -> Series {
    opens
        .iter()
        .zip(closes)
        .enumerate()
        .map(|(i, (&open, &close))| {
            make_bar(i as u64 * HOUR_MS, open, open.max(close) + 1.0, open.min(close) - 1.0, close, Some(1_000.0))
        })
        .collect()
}

/// Hourly random walk with a 5% drop applied to the last 15% of samples
pub fn random_walk(days: usize, start_price: f64, volatility: f64, seed: u64) -> Series {
    let mut rng = StdRng::seed_from_u64(seed);
    let len = days * 24;
    let mut prices = Vec::with_capacity(len);
    let mut price = start_price;
    for _ in 0..len {
        prices.push(price);
        if volatility > 0.0 {
            price *= 1.0 + rng.random_range(-volatility..=volatility);
        }
    }

    let drop_from = (len as f64 * 0.85) as usize;
    for p in prices.iter_mut().skip(drop_from) {
        *p *= 0.95;
    }
    series_from_closes(&prices)
}

/// Random-walk candles with volume, consistent OHLC on every bar
pub fn random_candles(len: usize, seed: u64) -> Series {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut close: f64 = 100.0;
    (0..len)
        .map(|i| {
            let open = close;
            close = open * (1.0 + rng.random_range(-0.02..=0.02));
            let high = open.max(close) * (1.0 + rng.random_range(0.0..=0.01));
            let low = open.min(close) * (1.0 - rng.random_range(0.0..=0.01));
            let volume = rng.random_range(1_000.0..=5_000.0);
            make_bar(i as u64 * HOUR_MS, open, high, low, close, Some(volume))
        })
        .collect()
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
