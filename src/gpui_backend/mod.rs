//! GPUI integration for gpui_scatter.
//!
//! This module provides a GPUI view that paints a [`Scatter`](crate::scatter::Scatter)
//! and routes pointer enter, leave, and click events to the mark under the
//! cursor.

mod config;
mod paint;
mod state;
mod view;

pub use config::ScatterViewConfig;
pub use view::{GpuiScatterView, ScatterHandle};
