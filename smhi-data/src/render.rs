//! Owns the single live chart and decides which results may replace it.

use crate::chart::ChartSpec;
use crate::session::Settled;
use log::{debug, info};

/// Something a chart can be drawn on: a canvas in the browser, a recorder
/// in tests.
pub trait DrawingSurface {
    /// Draw `spec`. Called only when no chart is live.
    fn draw(&mut self, spec: &ChartSpec);
    /// Tear down the live chart. Safe to call when nothing is drawn.
    fn dispose(&mut self);
}

/// What `present` did with a settled fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOutcome {
    Drawn,
    /// The chart was cleared; the message goes in the error banner.
    Cleared(String),
    /// An older fetch than the one already shown; ignored.
    Stale,
}

/// Error banner and loading indicator after a fetch has been presented.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartStatus {
    pub error: Option<String>,
    pub loading: bool,
}

impl RenderOutcome {
    /// Status following this outcome.
    ///
    /// A drawn chart clears the banner and a cleared one shows its message
    /// verbatim. A stale result leaves `current_error` as it was. `loading`
    /// is whether any other fetch is still outstanding.
    pub fn status(self, current_error: Option<String>, loading: bool) -> ChartStatus {
        let error = match self {
            RenderOutcome::Drawn => None,
            RenderOutcome::Cleared(message) => Some(message),
            RenderOutcome::Stale => current_error,
        };
        ChartStatus { error, loading }
    }
}

#[derive(Debug)]
pub struct ChartRenderer<S> {
    surface: S,
    live: bool,
    last_accepted: Option<u64>,
}

impl<S: DrawingSurface> ChartRenderer<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            live: false,
            last_accepted: None,
        }
    }

    /// Replace whatever is shown with `spec`.
    pub fn render(&mut self, spec: &ChartSpec) {
        self.clear();
        self.surface.draw(spec);
        self.live = true;
    }

    pub fn clear(&mut self) {
        if self.live {
            self.surface.dispose();
            self.live = false;
        }
    }

    /// Apply a settled fetch unless a newer one has already been applied.
    pub fn present(&mut self, settled: Settled) -> RenderOutcome {
        let seq = settled.seq();
        if self.last_accepted.is_some_and(|last| seq < last) {
            debug!("Dropping stale result #{} (showing #{:?})", seq, self.last_accepted);
            return RenderOutcome::Stale;
        }
        self.last_accepted = Some(seq);

        match settled {
            Settled::Chart { spec, .. } => {
                info!("Rendering chart #{} with {} datasets", seq, spec.datasets.len());
                self.render(&spec);
                RenderOutcome::Drawn
            }
            Settled::Failed { message, .. } => {
                self.clear();
                RenderOutcome::Cleared(message)
            }
        }
    }

    pub fn is_live(&self) -> bool {
        self.live
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
