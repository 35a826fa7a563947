//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The Chart.js glue lives in `assets/js/temperature-chart.js` and is loaded at
//! runtime once Chart.js itself is available. It is evaluated as globals
//! (no ES modules) and exposed via `window.*`. This module provides safe Rust
//! wrappers that serialize chart specs and call those globals.

use log::error;
use smhi_data::{ChartSpec, DrawingSurface};

// Embed the chart JS at compile time
static TEMPERATURE_CHART_JS: &str = include_str!("../assets/js/temperature-chart.js");

/// Chart.js build injected when the host page does not provide one.
const CHART_JS_URL: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('SMHI JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote `s` as a JS string literal.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

/// Initialize the chart script with a wait-for-Chart.js polling loop.
///
/// Injects a Chart.js `<script>` tag when the page has none. The chart
/// functions are evaluated at global scope via indirect eval once `Chart` is
/// defined, then promoted to `window.*`.
pub fn init_charts() {
    let store_js = format!(
        "window.__smhiChartScripts = {};",
        js_string(TEMPERATURE_CHART_JS)
    );
    let _ = js_sys::eval(&store_js);

    let init_js = format!(
        r#"
        (function() {{
            if (typeof Chart === 'undefined' && !document.getElementById('smhi-chartjs')) {{
                var script = document.createElement('script');
                script.id = 'smhi-chartjs';
                script.src = {url};
                document.head.appendChild(script);
            }}
            var waitForChart = setInterval(function() {{
                if (typeof Chart !== 'undefined') {{
                    clearInterval(waitForChart);
                    (0, eval)(window.__smhiChartScripts);
                    delete window.__smhiChartScripts;
                    if (typeof renderTemperatureChart !== 'undefined') window.renderTemperatureChart = renderTemperatureChart;
                    if (typeof destroyTemperatureChart !== 'undefined') window.destroyTemperatureChart = destroyTemperatureChart;
                    window.__smhiChartsReady = true;
                    console.log('SMHI charts initialized');
                }}
            }}, 100);
        }})();
        "#,
        url = js_string(CHART_JS_URL),
    );
    let _ = js_sys::eval(&init_js);
}

/// Render `spec` into the container with id `container_id`.
///
/// Polls until the chart script is ready and the container exists. Each call
/// bumps a generation counter, so a pending draw is abandoned as soon as a
/// newer draw or a destroy is requested.
pub fn render_temperature_chart(container_id: &str, spec: &ChartSpec) {
    let spec_json = match serde_json::to_string(spec) {
        Ok(json) => json,
        Err(e) => {
            error!("Failed to serialize chart spec: {}", e);
            return;
        }
    };
    let id = js_string(container_id);
    let spec_literal = js_string(&spec_json);
    call_js(&format!(
        r#"
        (function() {{
            var gen = window.__smhiChartGen = (window.__smhiChartGen || 0) + 1;
            var poll = setInterval(function() {{
                if (gen !== window.__smhiChartGen) {{
                    clearInterval(poll);
                    return;
                }}
                if (window.__smhiChartsReady &&
                    typeof window.renderTemperatureChart !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.renderTemperatureChart({id}, {spec_literal});
                    }} catch(e) {{ console.error('[SMHI] renderTemperatureChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy the chart in the given container and cancel any pending draw.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "window.__smhiChartGen = (window.__smhiChartGen || 0) + 1; \
         if (window.destroyTemperatureChart) window.destroyTemperatureChart({id});",
        id = js_string(container_id)
    ));
}

/// A Chart.js canvas inside a container div.
#[derive(Debug, Clone, PartialEq)]
pub struct JsChartSurface {
    container_id: String,
}

impl JsChartSurface {
    pub fn new(container_id: &str) -> Self {
        Self {
            container_id: container_id.to_string(),
        }
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }
}

impl DrawingSurface for JsChartSurface {
    fn draw(&mut self, spec: &ChartSpec) {
        render_temperature_chart(&self.container_id, spec);
    }

    fn dispose(&mut self) {
        destroy_chart(&self.container_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_string_escapes_quotes_and_newlines() {
        assert_eq!(js_string("it's"), "\"it's\"");
        assert_eq!(js_string("a\"b\nc"), "\"a\\\"b\\nc\"");
        assert_eq!(js_string("Umeå"), "\"Umeå\"");
    }
}
