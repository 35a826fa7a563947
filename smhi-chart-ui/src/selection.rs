//! The selection loop: turns `Message`s from components into fetches.
//!
//! Components hold a `Coroutine<Message>` handle and `send` intents; only this
//! loop touches the `Orchestrator`. Each ticket's fetch runs in its own task,
//! so a slow response never blocks a newer selection. Ordering is restored at
//! the renderer, which drops results older than the one on screen.

use crate::state::AppState;
use dioxus::prelude::*;
use futures::StreamExt;
use log::debug;
use smhi_api::DataFetcher;
use smhi_data::{FetchTicket, Message, RenderOutcome};

/// Start the loop and issue the initial all-cities fetch.
///
/// The returned coroutine is also provided as context, so descendants can
/// call `use_coroutine_handle::<Message>()`.
pub fn use_selection_loop(state: AppState, fetcher: DataFetcher) -> Coroutine<Message> {
    use_coroutine(move |mut rx: UnboundedReceiver<Message>| {
        let fetcher = fetcher.clone();
        let mut state = state;
        async move {
            let start = state.orchestrator.write().start();
            spawn(run_fetch(state, fetcher.clone(), start));

            while let Some(message) = rx.next().await {
                debug!("Selection message: {:?}", message);
                let ticket = state.orchestrator.write().handle(message);
                if let Some(ticket) = ticket {
                    spawn(run_fetch(state, fetcher.clone(), ticket));
                }
            }
        }
    })
}

/// Fetch one ticket and hand the result to the renderer.
async fn run_fetch(mut state: AppState, fetcher: DataFetcher, ticket: FetchTicket) {
    state.loading.set(true);
    let result = fetcher.fetch(ticket.selection()).await;
    let settled = ticket.settle(result);

    let outcome = state.renderer.write().present(settled);
    if outcome == RenderOutcome::Stale {
        debug!("Result #{} superseded", ticket.seq());
    }
    let current = state.error_msg.peek().clone();
    let status = outcome.status(current, fetcher.is_loading());
    state.error_msg.set(status.error);
    state.loading.set(status.loading);
}
