//! Period switch, shown once a city is selected.

use super::button_style;
use crate::state::AppState;
use dioxus::prelude::*;
use smhi_api::Period;
use smhi_data::Message;

#[component]
pub fn PeriodToggle() -> Element {
    let state = use_context::<AppState>();
    let selector = use_coroutine_handle::<Message>();

    if !state.has_city() {
        return rsx! {};
    }
    let active = state.orchestrator.read().period();

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 6px; align-items: center;",
            span { style: "font-weight: bold; margin-right: 4px;", "Period:" }
            for (period, label) in Period::ALL.map(|p| (p, p.label())) {
                button {
                    key: "{label}",
                    style: button_style(period == active),
                    onclick: move |_| selector.send(Message::PeriodSelected(period)),
                    "{label}"
                }
            }
        }
    }
}
