mod common;

use common::{HOUR_MS, make_bar, random_candles, series_from_closes};
use price_chart_series::application::{DashboardConfig, DashboardService};
use price_chart_series::domain::chart::{ChartType, Summary};
use price_chart_series::domain::errors::{AppError, ConfigError, RepositoryError};
use price_chart_series::domain::market_data::{Instrument, Series};
use price_chart_series::infrastructure::StaticRepository;

fn config_for(instruments: &[(&str, &str)]) -> DashboardConfig {
    DashboardConfig {
        instruments: instruments.iter().map(|(s, n)| Instrument::new(s, n, "USD")).collect(),
        ..DashboardConfig::default()
    }
}

#[test]
fn panels_keep_configured_order() {
    let repo = StaticRepository::new()
        .with_series("BTC-USD", random_candles(48, 1))
        .with_series("GC=F", random_candles(48, 2))
        .with_series("^GSPC", random_candles(48, 3));
    let service = DashboardService::new(repo);
    let config = config_for(&[("GC=F", "Gold"), ("^GSPC", "S&P 500"), ("BTC-USD", "Bitcoin")]);

    let panels = service.load_panels(&config).unwrap();
    let names: Vec<&str> = panels.iter().map(|p| p.view.instrument.as_str()).collect();
    assert_eq!(names, ["Gold", "S&P 500", "Bitcoin"]);
    assert!(panels.iter().all(|p| p.view.is_available()));
    assert!(panels.iter().all(|p| p.data_issues.is_empty()));
    assert!(panels.iter().all(|p| p.view.currency == "USD"));
}

#[test]
fn provider_failure_yields_unavailable_panel() {
    let repo = StaticRepository::new()
        .with_series("AAPL", random_candles(24, 4))
        .with_failure("TSLA", RepositoryError::NetworkError("timeout".to_string()));
    let service = DashboardService::new(repo);
    let config = config_for(&[("TSLA", "Tesla"), ("AAPL", "Apple"), ("NOPE", "")]);

    let panels = service.load_panels(&config).unwrap();
    assert_eq!(panels.len(), 3);
    assert_eq!(panels[0].view.summary, Summary::Unavailable);
    assert!(panels[0].view.series.is_empty());
    assert!(panels[1].view.is_available());
    assert_eq!(panels[2].view.summary, Summary::Unavailable);
    assert_eq!(panels[2].view.instrument, "NOPE");
}

#[test]
fn data_issues_are_reported_but_chart_still_renders() {
    let bars = vec![
        make_bar(0, 10.0, 11.0, 9.0, 10.5, Some(100.0)),
        make_bar(HOUR_MS, 10.5, 9.0, 11.0, 10.0, Some(100.0)),
        make_bar(HOUR_MS, 10.0, 10.5, 9.5, 10.2, Some(-1.0)),
    ];
    let repo = StaticRepository::new().with_series("ETH-USD", Series::new(bars));
    let service = DashboardService::new(repo);

    let panels = service.load_panels(&config_for(&[("ETH-USD", "Ethereum")])).unwrap();
    let panel = &panels[0];
    assert_eq!(panel.data_issues.len(), 3);
    assert!(panel.data_issues[0].contains("OHLC logic violation"));
    assert!(panel.data_issues[1].contains("negative volume"));
    assert!(panel.data_issues[2].contains("index 2"));
    assert!(panel.view.is_available());
}

#[test]
fn close_only_provider_renders_line_chart() {
    let repo = StaticRepository::new().with_series("EURUSD=X", series_from_closes(&[1.08, 1.09, 1.07]));
    let service = DashboardService::new(repo);
    let mut config = config_for(&[("EURUSD=X", "EUR/USD")]);
    config.display.chart_type = ChartType::Candlestick;

    let panels = service.load_panels(&config).unwrap();
    assert_eq!(panels[0].view.chart_type, ChartType::Line);
    assert!(panels[0].view.volume.is_none());
}

#[test]
fn invalid_config_fails_before_fetching() {
    let service = DashboardService::new(StaticRepository::new());
    let mut config = DashboardConfig::default();
    config.auto_refresh.enabled = true;
    config.auto_refresh.interval_secs = 5;

    let err = service.load_panels(&config).unwrap_err();
    assert_eq!(err, AppError::Config(ConfigError::RefreshOutOfRange(5)));
}

#[test]
fn repository_loaded_from_json() {
    let json = r#"[
        {"Date": "2024-01-02", "Open": 10, "High": 12, "Low": 9, "Close": 11, "Volume": 500},
        {"Date": "2024-01-01", "Open": 9, "High": 10.5, "Low": 8, "Close": 10, "Volume": 400}
    ]"#;
    let repo = StaticRepository::new().with_json("gc=f", json).unwrap();
    let service = DashboardService::new(repo);

    let panels = service.load_panels(&config_for(&[("GC=F", "Gold")])).unwrap();
    let stats = panels[0].view.summary.stats().unwrap().clone();
    assert_eq!(stats.current.value(), 11.0);
    assert_eq!(stats.reference.value(), 10.0);
    assert_eq!(stats.volume_total.unwrap().value(), 900.0);
    assert_eq!(service.repository().symbols().len(), 1);
}

#[test]
fn maximal_reference_offset_from_config_renders() {
    let json = r#"{"display": {"reference_mode": {"offset_bars": 18446744073709551615}}}"#;
    let mut config = DashboardConfig::from_json(json).unwrap();
    config.instruments = vec![Instrument::new("BTC-USD", "Bitcoin", "USD")];
    let repo = StaticRepository::new().with_series("BTC-USD", series_from_closes(&[100.0, 120.0]));

    let panels = DashboardService::new(repo).load_panels(&config).unwrap();
    let stats = panels[0].view.summary.stats().unwrap();
    assert_eq!(stats.reference.value(), 100.0);
    assert_eq!(stats.change_pct(), Ok(20.0));
}
