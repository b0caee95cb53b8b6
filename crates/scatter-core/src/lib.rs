// File: crates/scatter-core/src/lib.rs
// Summary: Core library entry point; exports the data model, scales, scene and chart renderer.

pub mod axis;
pub mod chart;
pub mod config;
pub mod error;
pub mod geometry;
pub mod legend;
pub mod record;
pub mod scale;
pub mod scene;
pub mod source;
pub mod svg;
pub mod theme;
pub mod tooltip;
pub mod view;

pub use axis::Axis;
pub use chart::{ChartRenderer, RenderOutput};
pub use config::ChartConfig;
pub use error::{ChartError, DataLoadError, ValidationError};
pub use geometry::Point;
pub use legend::{Category, Legend};
pub use record::{Place, RaceRecord, RaceTime, RawRecord, RawRow};
pub use scale::{ElapsedScale, ScaleTransform, YearScale};
pub use scene::{Element, Scene};
pub use source::{load_records, DataSource, InvalidRecordPolicy};
pub use theme::{Color, Theme};
pub use tooltip::{HoverHandler, PointerEvent, TooltipContent, TooltipState};
pub use view::ChartView;
