//! Selection state, chart composition and render gating.
//!
//! This crate turns what the user asked for into chart-ready data:
//! - `session`: the `Orchestrator` state machine issuing sequenced fetch tickets
//! - `compose`: pure payload → `ChartSpec` transformation
//! - `palette`: deterministic dataset colors
//! - `render`: `ChartRenderer`, which owns the one live chart on a drawing surface
//!
//! Nothing here touches the network or the DOM, so the whole pipeline is
//! testable natively.

pub mod chart;
pub mod compose;
pub mod palette;
pub mod render;
pub mod session;

pub use chart::{ChartDataset, ChartSpec, ChartTitle, Emphasis, Rgb, TickPolicy};
pub use compose::compose;
pub use render::{ChartRenderer, ChartStatus, DrawingSurface, RenderOutcome};
pub use session::{FetchTicket, Message, Orchestrator, Settled};
