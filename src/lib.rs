//! gpui_scatter renders scatter series for GPUI.
//! Points arrive already projected into screen space; the crate turns them into
//! interactive marks, an optional connecting line, and draw commands.

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod events;
pub mod geom;
pub mod gpui_backend;
pub mod hit;
pub mod legend;
pub mod point;
pub mod render;
pub mod scatter;
pub mod selector;
pub mod style;
pub mod symbol;
pub mod visual;

pub use config::{ActiveShapeConfig, LineConfig, ScatterConfig};
pub use error::{ConfigError, ParseColorError, ParseLegendTypeError, ParseSymbolError};
pub use events::{LeaveCallback, MarkHandlers, PointCallback, PointerEvent, ScatterHandlers};
pub use geom::{ScreenPoint, ScreenRect};
pub use gpui_backend::{GpuiScatterView, ScatterHandle, ScatterViewConfig};
pub use hit::hit_test;
pub use legend::{LegendEntry, LegendType};
pub use point::{DEFAULT_SYMBOL_SIZE, Payload, ScatterPoint, ZValue};
pub use render::{LineStyle, RenderCommand, RenderList, ShapeStyle, build_render_list};
pub use scatter::Scatter;
pub use selector::{ActiveShape, LineRenderer, LineSelector, LineType, MarkRenderer, ShapeSelector};
pub use style::{Color, Paint, Presentation};
pub use symbol::{SymbolGeometry, SymbolKind};
pub use visual::{CurveMark, Layer, LineProps, MarkProps, SymbolMark, Visual};
