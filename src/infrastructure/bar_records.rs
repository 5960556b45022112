use crate::domain::errors::RepositoryError;
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{Price, PriceBar, Series, Timestamp, Volume};
use crate::log_debug;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;

/// Date column: epoch milliseconds or a textual date
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DateField {
    Millis(u64),
    Text(String),
}

impl DateField {
    pub fn to_timestamp(&self) -> Result<Timestamp, RepositoryError> {
        match self {
            DateField::Millis(ms) => Ok(Timestamp::from_millis(*ms)),
            DateField::Text(text) => parse_date_text(text.trim()).map(Timestamp::from_datetime),
        }
    }
}

fn parse_date_text(text: &str) -> Result<DateTime<Utc>, RepositoryError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S") {
        return Ok(naive.and_utc());
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| RepositoryError::ParseError(format!("unrecognised date '{}'", text)))
}

/// One row of a history table as exported by the provider
#[derive(Debug, Clone, Deserialize)]
pub struct BarRecordDto {
    #[serde(alias = "Date", alias = "Datetime")]
    pub date: DateField,
    #[serde(default, alias = "Open")]
    pub open: Option<f64>,
    #[serde(default, alias = "High")]
    pub high: Option<f64>,
    #[serde(default, alias = "Low")]
    pub low: Option<f64>,
    #[serde(default, alias = "Close", alias = "price")]
    pub close: Option<f64>,
    #[serde(default, alias = "Volume")]
    pub volume: Option<f64>,
}

impl BarRecordDto {
    /// Converts the row into a domain bar; rows without a close yield `None`.
    pub fn to_domain_bar(&self) -> Result<Option<PriceBar>, RepositoryError> {
        let Some(close) = self.close else {
            return Ok(None);
        };
        let timestamp = self.date.to_timestamp()?;
        Ok(Some(PriceBar {
            timestamp,
            open: self.open.map(Price::from),
            high: self.high.map(Price::from),
            low: self.low.map(Price::from),
            close: Price::from(close),
            volume: self.volume.map(Volume::from),
        }))
    }
}

/// Decodes a JSON array of records into a series ordered by timestamp
pub fn parse_series(json: &str) -> Result<Series, RepositoryError> {
    let records: Vec<BarRecordDto> =
        serde_json::from_str(json).map_err(|e| RepositoryError::ParseError(e.to_string()))?;
    let total = records.len();

    let mut bars = Vec::with_capacity(total);
    for record in &records {
        if let Some(bar) = record.to_domain_bar()? {
            bars.push(bar);
        }
    }

    if bars.len() < total {
        log_debug!(
            LogComponent::Infrastructure("BarRecords"),
            "skipped {} rows without a close",
            total - bars.len()
        );
    }

    Ok(Series::sorted(bars))
}
