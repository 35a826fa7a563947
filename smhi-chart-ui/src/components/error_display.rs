//! Error banner component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Shows a dismiss button when set
    #[props(default)]
    pub on_dismiss: Option<EventHandler<()>>,
}

/// Displays a user-facing error message in a styled box.
///
/// The message sits alone in `.error-message`, exactly as given.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            div {
                strong { "Error: " }
                span {
                    class: "error-message",
                    "{props.message}"
                }
            }
            if let Some(on_dismiss) = props.on_dismiss {
                button {
                    style: "border: none; background: transparent; color: #C62828; font-size: 16px; cursor: pointer;",
                    title: "Dismiss",
                    onclick: move |_| on_dismiss.call(()),
                    "×"
                }
            }
        }
    }
}
