//! Reusable Dioxus RSX components for the temperature chart app.

mod chart_container;
mod chart_header;
mod city_search;
mod error_display;
mod loading_spinner;
mod major_city_buttons;
mod period_toggle;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use city_search::CitySearch;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use major_city_buttons::MajorCityButtons;
pub use period_toggle::PeriodToggle;

/// Inline style for a toggle-like button.
pub(crate) fn button_style(active: bool) -> &'static str {
    if active {
        "padding: 6px 12px; border: 1px solid #1565C0; border-radius: 4px; background: #1976D2; color: white; cursor: pointer;"
    } else {
        "padding: 6px 12px; border: 1px solid #BDBDBD; border-radius: 4px; background: white; color: #333; cursor: pointer;"
    }
}
