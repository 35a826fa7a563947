//! Shortcut buttons for the all-cities view and the five major cities.

use super::button_style;
use crate::state::AppState;
use dioxus::prelude::*;
use smhi_api::City;
use smhi_data::Message;

#[component]
pub fn MajorCityButtons() -> Element {
    let state = use_context::<AppState>();
    let selector = use_coroutine_handle::<Message>();
    let selected = state
        .orchestrator
        .read()
        .selection()
        .city
        .as_ref()
        .map(|c| c.name.clone());

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; flex-wrap: wrap; gap: 6px;",
            button {
                style: button_style(selected.is_none()),
                onclick: move |_| selector.send(Message::AllCitiesRequested),
                "All Cities"
            }
            for city in City::major_cities() {
                button {
                    key: "{city.id}",
                    style: button_style(selected.as_deref() == Some(city.name.as_str())),
                    onclick: {
                        let city = city.clone();
                        move |_| selector.send(Message::MajorCitySelected(city.clone()))
                    },
                    "{city.name}"
                }
            }
        }
    }
}
