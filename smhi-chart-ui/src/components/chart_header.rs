//! Chart header component with title and Y-axis unit explanation.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Current selection title, e.g. "Temperature Data for Malmö (Historical)"
    pub title: String,
    /// Y-axis unit explanation (e.g., "Monthly mean temperature (°C)")
    #[props(default = String::new())]
    pub unit_description: String,
}

/// Header for the chart section. Also sets the document title.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        document::Title { "{props.title}" }
        div {
            style: "margin-bottom: 8px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "{props.title}"
            }
            if !props.unit_description.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "Y-axis: {props.unit_description}"
                }
            }
        }
    }
}
