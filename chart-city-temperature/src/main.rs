//! Swedish City Temperature Trends
//!
//! Browse or search Swedish weather stations and chart their monthly mean
//! temperatures with Chart.js.
//!
//! Data flow:
//! 1. On mount: the selection loop issues the all-cities fetch.
//! 2. Buttons and search results send `Message`s to the loop, which asks the
//!    `Orchestrator` for a fetch ticket and runs it in its own task.
//! 3. Each settled ticket is composed into a `ChartSpec` and presented to the
//!    `ChartRenderer`, which redraws unless a newer result is already shown.

use dioxus::prelude::*;
use log::{error, info};
use smhi_api::{ApiClient, ClientConfig, ClientError, DataFetcher, SearchController};
use smhi_chart_ui::components::{
    ChartContainer, ChartHeader, CitySearch, ErrorDisplay, MajorCityButtons, PeriodToggle,
};
use smhi_chart_ui::selection::use_selection_loop;
use smhi_chart_ui::state::{AppState, CHART_CONTAINER_ID};
use smhi_chart_ui::{config, js_bridge};

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("city-temperature-root"))
        .launch(App);
}

/// Build the backend clients for the page's origin.
fn connect() -> Result<(DataFetcher, SearchController), ClientError> {
    let base = config::browser_api_base();
    let api = ApiClient::new(ClientConfig::new(&base)?)?;
    info!("Using temperature API at {}", base);
    Ok((DataFetcher::new(api.clone()), SearchController::new(api)))
}

#[component]
fn App() -> Element {
    use_context_provider(AppState::new);
    let connection = use_hook(connect);

    match connection {
        Ok((fetcher, search)) => rsx! {
            TemperatureBrowser { fetcher, search }
        },
        Err(e) => {
            error!("Cannot reach temperature API: {:?}", e);
            rsx! {
                ErrorDisplay { message: e.user_message() }
            }
        }
    }
}

#[component]
fn TemperatureBrowser(fetcher: DataFetcher, search: SearchController) -> Element {
    let mut state = use_context::<AppState>();
    use_context_provider(|| search.clone());
    // Chart.js bootstrap (one-time)
    use_hook(js_bridge::init_charts);
    use_selection_loop(state, fetcher);

    let title = state.orchestrator.read().title();
    let loading = (state.loading)();
    let error_msg = (state.error_msg)();

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            h2 {
                style: "margin: 8px 0;",
                "Swedish City Temperatures"
            }

            CitySearch {}
            MajorCityButtons {}
            PeriodToggle {}

            if let Some(message) = error_msg {
                ErrorDisplay {
                    message,
                    on_dismiss: move |_| state.error_msg.set(None),
                }
            }

            ChartHeader {
                title,
                unit_description: "Monthly mean temperature (°C)".to_string(),
            }

            ChartContainer {
                id: CHART_CONTAINER_ID.to_string(),
                loading,
                height: 450,
            }

            p {
                style: "font-size: 11px; color: #888; text-align: center; margin-top: 4px;",
                "Source: SMHI open data. Gaps mark months without observations."
            }
        }
    }
}
