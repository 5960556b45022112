use super::{MaPeriod, Price};
use std::collections::VecDeque;

/// Trailing window of closes feeding a simple moving average
#[derive(Debug, Clone)]
pub struct RollingMean {
    win: VecDeque<f64>,
    period: usize,
}

impl RollingMean {
    pub fn new(period: MaPeriod) -> Self {
        Self {
            win: VecDeque::with_capacity(period.get()),
            period: period.get(),
        }
    }

    /// Push the next close; returns the mean once the window is full.
    #[inline]
    pub fn push(&mut self, close: f64) -> Option<Price> {
        self.win.push_back(close);
        if self.win.len() > self.period {
            self.win.pop_front();
        }
        if self.win.len() < self.period {
            return None;
        }
        // Summed from the window on every step so the value equals the plain trailing mean.
        let sum: f64 = self.win.iter().sum();
        Some(Price::from(sum / self.period as f64))
    }

    pub fn period(&self) -> usize {
        self.period
    }
}

/// Aligned trailing SMA over `closes`
pub fn trailing_sma(closes: &[f64], period: MaPeriod) -> Vec<Option<Price>> {
    let mut engine = RollingMean::new(period);
    closes.iter().map(|&close| engine.push(close)).collect()
}
