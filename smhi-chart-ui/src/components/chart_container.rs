//! Chart container component with loading state.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the chart container (Chart.js draws into a canvas inside it)
    pub id: String,
    /// Whether a fetch for the chart is outstanding
    #[props(default = false)]
    pub loading: bool,
    /// Chart height in pixels
    #[props(default = 450)]
    pub height: u32,
}

/// A fixed-height container for the Chart.js canvas with a loading overlay.
///
/// The inner div is always mounted so the chart bridge can find it, even
/// while the first fetch is in flight.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "height: {}px; position: relative; width: 100%;",
        props.height
    );

    rsx! {
        div {
            style: "{style}",
            if props.loading {
                div {
                    style: "position: absolute; top: 8px; right: 8px; padding: 4px 8px; background: rgba(255,255,255,0.85); border-radius: 4px; font-size: 12px; color: #666; z-index: 1;",
                    "Loading temperature data..."
                }
            }
            div {
                id: "{props.id}",
                style: "width: 100%; height: 100%;",
            }
        }
    }
}
