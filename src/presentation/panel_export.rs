use super::price_badge::{PriceBadge, StatisticsCaption, UNAVAILABLE_TEXT};
use crate::application::InstrumentPanel;
use crate::domain::chart::Color;
use crate::domain::errors::{AppError, AppResult};
use serde::Serialize;

/// Large translucent instrument name drawn behind the series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Watermark {
    pub text: String,
    pub color: Color,
    pub opacity: f32,
}

/// Renderer input for one panel
#[derive(Debug, Clone, Serialize)]
pub struct PanelPayload<'a> {
    #[serde(flatten)]
    pub panel: &'a InstrumentPanel,
    pub watermark: Watermark,
    pub badge: Option<PriceBadge>,
    pub statistics: Option<StatisticsCaption>,
    /// Set when the panel should show a placeholder instead of a chart
    pub placeholder: Option<&'static str>,
}

impl<'a> PanelPayload<'a> {
    pub fn new(panel: &'a InstrumentPanel) -> Self {
        let summary = &panel.view.summary;
        Self {
            panel,
            watermark: Watermark {
                text: panel.view.instrument.clone(),
                color: Color::WATERMARK,
                opacity: Color::WATERMARK.a,
            },
            badge: PriceBadge::from_summary(summary, &panel.view.currency),
            statistics: StatisticsCaption::from_summary(summary),
            placeholder: (!summary.is_available()).then_some(UNAVAILABLE_TEXT),
        }
    }
}

/// JSON array of panel payloads
pub fn panels_to_json(panels: &[InstrumentPanel]) -> AppResult<String> {
    let payloads: Vec<PanelPayload<'_>> = panels.iter().map(PanelPayload::new).collect();
    serde_json::to_string(&payloads).map_err(|e| AppError::Serialization(e.to_string()))
}
