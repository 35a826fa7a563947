//! Shared Dioxus components and Chart.js bridge for SMHI temperature charts.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the Chart.js line chart via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (search, city buttons, period toggle, ...)
//! - `config`: API base URL for the page the app is served from
//! - `selection`: the message loop driving fetches and rendering

pub mod components;
pub mod config;
pub mod js_bridge;
pub mod selection;
pub mod state;
