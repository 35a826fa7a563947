//! Free-text city search with a pickable result list.

use super::LoadingSpinner;
use crate::state::AppState;
use dioxus::prelude::*;
use log::debug;
use smhi_api::{validate_query, City, SearchController, SearchResults};
use smhi_data::Message;

/// Validate the current query and, if acceptable, search in the background.
///
/// Responses are applied in arrival order.
fn start_search(mut state: AppState, search: SearchController) {
    let query = state.search_query.peek().clone();
    if let Err(e) = validate_query(&query) {
        state.search_results.set(SearchResults::from_outcome(Err(e)));
        return;
    }

    state.searching.set(true);
    spawn(async move {
        let outcome = search.search(&query).await;
        state.search_results.set(SearchResults::from_outcome(outcome));
        state.searching.set(false);
    });
}

/// Search box and results. Disabled while a chart or search request is
/// outstanding.
#[component]
pub fn CitySearch() -> Element {
    let mut state = use_context::<AppState>();
    let search = use_context::<SearchController>();
    let query = (state.search_query)();
    let busy = (state.loading)() || (state.searching)();
    let results = state.search_results.read().clone();

    let search_on_enter = search.clone();
    let on_keydown = move |evt: KeyboardEvent| {
        if evt.key() == Key::Enter {
            start_search(state, search_on_enter.clone());
        }
    };
    let on_click = move |_| start_search(state, search.clone());

    rsx! {
        div {
            style: "margin: 8px 0;",
            div {
                style: "display: flex; gap: 8px;",
                input {
                    r#type: "text",
                    placeholder: "Search for a city or station...",
                    value: "{query}",
                    disabled: busy,
                    style: "flex: 1; padding: 6px 8px; border: 1px solid #BDBDBD; border-radius: 4px;",
                    oninput: move |evt: Event<FormData>| state.search_query.set(evt.value()),
                    onkeydown: on_keydown,
                }
                button {
                    disabled: busy,
                    style: "padding: 6px 12px; cursor: pointer;",
                    onclick: on_click,
                    "Search"
                }
            }
            if (state.searching)() {
                LoadingSpinner { message: "Searching...".to_string() }
            }
            if let Some(message) = results.message() {
                p {
                    style: "margin: 6px 0; font-size: 13px; color: #666;",
                    "{message}"
                }
            }
            if !results.matches().is_empty() {
                ul {
                    style: "list-style: none; margin: 6px 0; padding: 0; border: 1px solid #E0E0E0; border-radius: 4px; max-height: 240px; overflow-y: auto;",
                    for (index, city) in results.matches().iter().enumerate() {
                        CityResult { key: "{city.id}", city: city.clone(), index }
                    }
                }
            }
        }
    }
}

/// One search candidate. Clicking it selects the city and clears the list.
#[component]
fn CityResult(city: City, index: usize) -> Element {
    let mut state = use_context::<AppState>();
    let selector = use_coroutine_handle::<Message>();

    let on_click = move |_| {
        let picked = state.search_results.write().take(index);
        if let Some(city) = picked {
            debug!("Picked search result {} ({})", city.name, city.id);
            selector.send(Message::SearchResultSelected(city));
        }
    };

    let details = station_details(&city);

    rsx! {
        li {
            style: "padding: 6px 10px; border-bottom: 1px solid #F0F0F0; cursor: pointer;",
            onclick: on_click,
            span { style: "font-weight: bold;", "{city.name}" }
            if !details.is_empty() {
                span {
                    style: "margin-left: 8px; font-size: 12px; color: #888;",
                    "{details}"
                }
            }
        }
    }
}

/// Secondary text for a station: height above sea level and whether it still reports.
fn station_details(city: &City) -> String {
    let mut parts = Vec::new();
    if let Some(height) = city.height {
        parts.push(format!("{:.0} m", height));
    }
    if !city.active {
        parts.push("inactive".to_string());
    }
    parts.join(", ")
}
