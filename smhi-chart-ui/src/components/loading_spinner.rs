//! Loading indicator component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    #[props(default = "Loading data...".to_string())]
    pub message: String,
}

/// Inline busy indicator with a short message.
#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 8px; padding: 8px 0; color: #666; font-size: 13px;",
            span {
                style: "display: inline-block; width: 12px; height: 12px; border: 2px solid #BDBDBD; border-top-color: #1976D2; border-radius: 50%;",
            }
            "{props.message}"
        }
    }
}
