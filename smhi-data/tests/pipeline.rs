//! Selection → fetch → compose → render, against a mocked backend.

use smhi_api::{
    ApiClient, City, ClientConfig, DataFetcher, Period, SearchController, SearchResults,
};
use smhi_data::{
    ChartRenderer, ChartSpec, ChartStatus, ChartTitle, DrawingSurface, FetchTicket, Message,
    Orchestrator, RenderOutcome,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Default)]
struct Recorder {
    charts: Vec<ChartSpec>,
    live: bool,
}

impl DrawingSurface for Recorder {
    fn draw(&mut self, spec: &ChartSpec) {
        assert!(!self.live, "drew over a live chart");
        self.charts.push(spec.clone());
        self.live = true;
    }

    fn dispose(&mut self) {
        self.live = false;
    }
}

fn api_client(server: &MockServer) -> ApiClient {
    let config = ClientConfig::new(&format!("{}/api", server.uri())).unwrap();
    ApiClient::new(config).unwrap()
}

async fn run(
    fetcher: &DataFetcher,
    renderer: &mut ChartRenderer<Recorder>,
    ticket: FetchTicket,
) -> RenderOutcome {
    let result = fetcher.fetch(ticket.selection()).await;
    renderer.present(ticket.settle(result))
}

fn twelve_months() -> Vec<&'static str> {
    vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"]
}

#[tokio::test]
async fn test_select_city_recent() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/graph/city/Stockholm"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "months": twelve_months(),
            "city": "Stockholm",
            "temperatures": [-2.8, -3.1, 0.2, 5.1, 10.8, 15.6, 18.2, 17.0, 12.4, 7.0, 2.2, -1.0]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = DataFetcher::new(api_client(&mock_server));
    let mut renderer = ChartRenderer::new(Recorder::default());
    let mut orchestrator = Orchestrator::new();

    let ticket = orchestrator
        .handle(Message::MajorCitySelected(City::shortcut("Stockholm", 97400)))
        .unwrap();
    assert_eq!(run(&fetcher, &mut renderer, ticket).await, RenderOutcome::Drawn);

    let chart = &renderer.surface().charts[0];
    assert_eq!(
        chart.title,
        ChartTitle::Single("Temperature Data for Stockholm (Recent)".into())
    );
    assert_eq!(chart.datasets.len(), 1);
    assert_eq!(chart.x_axis_label, "Month");
    assert!(!fetcher.is_loading());
}

#[tokio::test]
async fn test_search_without_matches_leaves_chart() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/cities/search/sto"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let search = SearchController::new(api_client(&mock_server));
    let renderer = ChartRenderer::new(Recorder::default());

    let results = SearchResults::from_outcome(search.search("sto").await);
    assert!(results.matches().is_empty());
    assert_eq!(results.message(), Some("No matching cities found"));
    assert!(renderer.surface().charts.is_empty());
}

#[tokio::test]
async fn test_not_found_clears_chart_with_detail() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/graph/cities"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "months": ["2024-01"],
            "cities": { "Stockholm": [-2.5] },
            "average": [-2.5]
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/graph/city/X"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({ "detail": "No station data for X" })),
        )
        .mount(&mock_server)
        .await;

    let fetcher = DataFetcher::new(api_client(&mock_server));
    let mut renderer = ChartRenderer::new(Recorder::default());
    let mut orchestrator = Orchestrator::new();

    let start = orchestrator.start();
    assert_eq!(run(&fetcher, &mut renderer, start).await, RenderOutcome::Drawn);
    assert!(renderer.is_live());

    let ticket = orchestrator.select(City::shortcut("X", 1));
    let outcome = run(&fetcher, &mut renderer, ticket).await;
    assert_eq!(outcome, RenderOutcome::Cleared("No station data for X".into()));
    assert!(!renderer.is_live());

    let status = outcome.status(None, fetcher.is_loading());
    assert_eq!(
        status,
        ChartStatus {
            error: Some("No station data for X".into()),
            loading: false,
        }
    );
}

#[tokio::test]
async fn test_toggle_to_historical_adds_time_range_line() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/graph/city/Ume%C3%A5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "months": twelve_months(),
            "city": "Umeå",
            "temperatures": [null, null, null, null, null, null, null, null, null, null, null, null]
        })))
        .mount(&mock_server)
        .await;

    let months: Vec<String> = (0..48)
        .map(|i| format!("{}-{:02}", 2021 + i / 12, i % 12 + 1))
        .collect();
    let temperatures = vec![1.5; 48];
    Mock::given(method("GET"))
        .and(path("/api/graph/historical/Ume%C3%A5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "months": months,
            "city": "Umeå",
            "temperatures": temperatures,
            "station_name": "Umeå Flygplats",
            "station_id": 140480,
            "period": "historical",
            "time_range": { "start": "2021-01", "end": "2024-12" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = DataFetcher::new(api_client(&mock_server));
    let mut renderer = ChartRenderer::new(Recorder::default());
    let mut orchestrator = Orchestrator::new();

    let ticket = orchestrator.select(City::shortcut("Umeå", 140480));
    run(&fetcher, &mut renderer, ticket).await;

    let ticket = orchestrator
        .handle(Message::PeriodSelected(Period::Historical))
        .unwrap();
    assert_eq!(run(&fetcher, &mut renderer, ticket).await, RenderOutcome::Drawn);

    let chart = renderer.surface().charts.last().unwrap();
    assert_eq!(
        chart.title.lines(),
        vec![
            "Temperature Data for Umeå (Historical)",
            "2021-01 – 2024-12"
        ]
    );
    assert_eq!(chart.x_axis_label, "Year-Month");
    assert_eq!(chart.datasets[0].label, "Umeå (Umeå Flygplats)");
    assert!(chart.tick_policy.is_some());
}

#[tokio::test]
async fn test_late_response_for_old_selection_is_dropped() {
    let mock_server = MockServer::start().await;
    for (city, encoded) in [("Stockholm", "Stockholm"), ("Malmö", "Malm%C3%B6")] {
        Mock::given(method("GET"))
            .and(path(format!("/api/graph/city/{}", encoded)))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "months": ["Jan"],
                "city": city,
                "temperatures": [0.0]
            })))
            .mount(&mock_server)
            .await;
    }

    let fetcher = DataFetcher::new(api_client(&mock_server));
    let mut renderer = ChartRenderer::new(Recorder::default());
    let mut orchestrator = Orchestrator::new();

    let first = orchestrator.select(City::shortcut("Stockholm", 97400));
    let second = orchestrator.select(City::shortcut("Malmö", 53430));

    // Both fetches overlap; the older one settles last
    let (old, new) = tokio::join!(
        fetcher.fetch(first.selection()),
        fetcher.fetch(second.selection())
    );
    assert_eq!(renderer.present(second.settle(new)), RenderOutcome::Drawn);
    assert_eq!(renderer.present(first.settle(old)), RenderOutcome::Stale);

    let charts = &renderer.surface().charts;
    assert_eq!(charts.len(), 1);
    assert_eq!(charts[0].datasets[0].label, "Malmö");
}
