mod common;

use common::{random_candles, series_from_closes, series_from_open_close};
use price_chart_series::domain::chart::{ChartType, Color, Direction, DisplayConfig, MaOverlaySpec, Summary};
use price_chart_series::domain::errors::TransformError;
use price_chart_series::domain::market_data::services::SeriesTransformer;
use price_chart_series::domain::market_data::{ReferenceMode, Series};
use std::str::FromStr;

fn ma_config(periods: &[usize]) -> DisplayConfig {
    let overlays = periods.iter().map(|&p| MaOverlaySpec::new(p).unwrap()).collect();
    DisplayConfig::for_instrument("Bitcoin", "USD").with_moving_averages(overlays)
}

#[test]
fn overlays_follow_requested_periods() {
    let series = random_candles(120, 3);
    let view = SeriesTransformer::new().derive(series.clone(), &ma_config(&[20, 50])).unwrap();

    assert_eq!(view.overlays.len(), 2);
    let ma20 = view.overlay(20).unwrap();
    assert_eq!(ma20.label, "MA20");
    assert_eq!(ma20.color, Color::OVERLAYS[0]);
    assert_eq!(ma20.values.len(), series.len());
    assert_eq!(ma20.first_defined_index(), Some(19));
    assert_eq!(view.overlay(50).unwrap().first_defined_index(), Some(49));
    assert_eq!(view.overlay(50).unwrap().color, Color::OVERLAYS[1]);
    assert!(view.overlay(200).is_none());
}

#[test]
fn overlays_hidden_unless_enabled() {
    let config = DisplayConfig::default();
    assert!(!config.show_moving_averages);
    let view = SeriesTransformer::new().derive(random_candles(60, 1), &config).unwrap();
    assert!(view.overlays.is_empty());
}

#[test]
fn short_history_gives_absent_overlay() {
    let view = SeriesTransformer::new().derive(random_candles(10, 2), &ma_config(&[20])).unwrap();
    assert!(view.overlays[0].values.iter().all(Option::is_none));
    assert!(view.is_available());
}

#[test]
fn candle_kinds_degrade_to_line_without_ohlc() {
    let close_only = series_from_closes(&[1.0, 2.0, 3.0]);
    let svc = SeriesTransformer::new();
    for kind in [ChartType::Candlestick, ChartType::OhlcBar, ChartType::Line] {
        let config = DisplayConfig::default().with_chart_type(kind);
        assert_eq!(svc.derive(close_only.clone(), &config).unwrap().chart_type, ChartType::Line);
    }

    let candles = series_from_open_close(&[1.0, 2.0], &[2.0, 1.0]);
    let config = DisplayConfig::default().with_chart_type(ChartType::OhlcBar);
    assert_eq!(svc.derive(candles, &config).unwrap().chart_type, ChartType::OhlcBar);
}

#[test]
fn volume_bars_take_bar_direction() {
    let series = series_from_open_close(&[10.0, 12.0], &[12.0, 10.0]);
    let view = SeriesTransformer::new().derive(series, &DisplayConfig::default()).unwrap();
    let volume = view.volume.expect("volume requested and present");
    assert_eq!(volume.len(), 2);
    assert_eq!(volume[0].direction, Direction::Up);
    assert_eq!(volume[1].direction, Direction::Down);
}

#[test]
fn volume_absent_when_disabled_or_missing() {
    let svc = SeriesTransformer::new();
    let candles = series_from_open_close(&[1.0], &[2.0]);
    let hidden = svc.derive(candles, &DisplayConfig::default().with_volume(false)).unwrap();
    assert!(hidden.volume.is_none());

    let no_volume = svc.derive(series_from_closes(&[1.0, 2.0]), &DisplayConfig::default()).unwrap();
    assert!(no_volume.volume.is_none());
}

#[test]
fn empty_series_renders_unavailable_view() {
    let view = SeriesTransformer::new().derive(Series::empty(), &ma_config(&[5])).unwrap();
    assert_eq!(view.summary, Summary::Unavailable);
    assert!(view.directions.is_empty());
    assert!(view.overlays[0].values.is_empty());
    assert_eq!(view.chart_type, ChartType::Line);
}

#[test]
fn enabling_overlays_without_periods_is_rejected() {
    let config = DisplayConfig::default().with_moving_averages(Vec::new());
    let err = SeriesTransformer::new().derive(series_from_closes(&[1.0]), &config).unwrap_err();
    assert!(matches!(err, TransformError::InvalidConfiguration(_)));
}

#[test]
fn reference_mode_flows_into_summary() {
    let closes: Vec<f64> = (1..=30).map(f64::from).collect();
    let config = DisplayConfig::default().with_reference_mode(ReferenceMode::OffsetBars(24));
    let view = SeriesTransformer::new().derive(series_from_closes(&closes), &config).unwrap();
    assert_eq!(view.summary.stats().unwrap().reference.value(), 6.0);
}

#[test]
fn overlay_recomputed_from_view_closes_matches() {
    let svc = SeriesTransformer::new();
    let view = svc.derive(random_candles(80, 11), &ma_config(&[7])).unwrap();
    let replay = svc.compute_moving_average(&series_from_closes(&view.series.closes()), 7).unwrap();
    assert_eq!(view.overlays[0].values, replay);
}

#[test]
fn chart_type_parses_from_settings_strings() {
    assert_eq!(ChartType::from_str("candlestick").unwrap(), ChartType::Candlestick);
    assert_eq!(ChartType::from_str("line").unwrap(), ChartType::Line);
    assert_eq!(ChartType::from_str("ohlc").unwrap(), ChartType::OhlcBar);
    assert_eq!(ChartType::from_str("ohlc-bar").unwrap(), ChartType::OhlcBar);
    assert!(ChartType::from_str("renko").is_err());
}

#[test]
fn view_serializes_for_renderer() {
    let series = series_from_closes(&[0.0, 2.0]);
    let view = SeriesTransformer::new().derive(series, &ma_config(&[2])).unwrap();
    let json = serde_json::to_value(&view).unwrap();

    assert_eq!(json["chart_type"], "line");
    assert_eq!(json["directions"], serde_json::json!(["neutral", "up"]));
    assert_eq!(json["overlays"][0]["values"], serde_json::json!([null, 1.0]));
    assert_eq!(json["overlays"][0]["color"], "#2196F3");
    assert_eq!(json["summary"]["status"], "available");
    assert!(json["summary"]["change_pct"].is_null());
    assert_eq!(json["series"][1]["close"], 2.0);
}
