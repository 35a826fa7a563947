//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! Components never mutate the selection directly; they send a `Message` to
//! the selection loop (see `crate::selection`).

use crate::js_bridge::JsChartSurface;
use dioxus::prelude::*;
use smhi_api::SearchResults;
use smhi_data::{ChartRenderer, Orchestrator};

/// DOM id for the chart container div.
pub const CHART_CONTAINER_ID: &str = "city-temperature-chart";

/// Shared application state for the temperature chart app.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Selected city and period, plus fetch sequencing
    pub orchestrator: Signal<Orchestrator>,
    /// Owner of the one live Chart.js instance
    pub renderer: Signal<ChartRenderer<JsChartSurface>>,
    /// True while any chart fetch is outstanding
    pub loading: Signal<bool>,
    /// Banner message for the last failed fetch
    pub error_msg: Signal<Option<String>>,
    pub search_query: Signal<String>,
    pub search_results: Signal<SearchResults>,
    /// True while a search request is outstanding
    pub searching: Signal<bool>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    ///
    /// Starts in the loading state: the all-cities fetch is issued on mount.
    pub fn new() -> Self {
        Self {
            orchestrator: Signal::new(Orchestrator::new()),
            renderer: Signal::new(ChartRenderer::new(JsChartSurface::new(CHART_CONTAINER_ID))),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            search_query: Signal::new(String::new()),
            search_results: Signal::new(SearchResults::Idle),
            searching: Signal::new(false),
        }
    }

    /// Whether a city (rather than the all-cities view) is selected.
    pub fn has_city(&self) -> bool {
        self.orchestrator.read().selection().city.is_some()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
