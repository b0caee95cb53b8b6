// File: crates/scatter-core/src/view.rs
// Summary: Rendered chart plus its interaction state: marker hit-testing, hover dispatch, tooltip fade.

use std::time::Duration;

use crate::chart::RenderOutput;
use crate::config::ChartConfig;
use crate::geometry::Point;
use crate::scale::{ElapsedScale, YearScale};
use crate::scene::{Element, Scene};
use crate::tooltip::{HoverHandler, PointerEvent, TooltipState};

/// A marker's hit area and the handler bound to it.
pub struct MarkerBinding {
    /// Position of the record in the rendered dataset.
    pub index: usize,
    /// Center in surface coordinates.
    pub center: Point,
    pub radius: f64,
    pub handler: Box<dyn HoverHandler>,
}

impl MarkerBinding {
    pub fn contains(&self, p: Point) -> bool {
        self.center.distance_sq(p) <= self.radius * self.radius
    }
}

pub struct ChartView {
    scene: Scene,
    config: ChartConfig,
    x_scale: YearScale,
    y_scale: ElapsedScale,
    markers: Vec<MarkerBinding>,
    tooltip: TooltipState,
    hovered: Option<usize>,
}

impl ChartView {
    pub fn new(scene: Scene, config: ChartConfig, out: RenderOutput) -> Self {
        let tooltip = TooltipState::new(config.tooltip.clone());
        Self {
            scene,
            config,
            x_scale: out.x_scale,
            y_scale: out.y_scale,
            markers: out.markers,
            tooltip,
            hovered: None,
        }
    }

    pub fn scene(&self) -> &Scene { &self.scene }
    pub fn config(&self) -> &ChartConfig { &self.config }
    pub fn x_scale(&self) -> &YearScale { &self.x_scale }
    pub fn y_scale(&self) -> &ElapsedScale { &self.y_scale }
    pub fn markers(&self) -> &[MarkerBinding] { &self.markers }
    pub fn tooltip(&self) -> &TooltipState { &self.tooltip }
    pub fn hovered(&self) -> Option<usize> { self.hovered }

    pub fn marker_center(&self, marker: usize) -> Option<Point> {
        self.markers.get(marker).map(|m| m.center)
    }

    /// Topmost marker under `p`. Later markers are drawn above earlier ones.
    pub fn hit_test(&self, p: Point) -> Option<usize> {
        self.markers.iter().rposition(|m| m.contains(p))
    }

    /// Route an event to the handler bound to its marker.
    pub fn dispatch(&mut self, evt: PointerEvent) {
        let Some(binding) = self.markers.get(evt.marker()) else {
            log::debug!("pointer event for unknown marker {}", evt.marker());
            return;
        };
        match evt {
            PointerEvent::Enter { marker, at } => {
                binding.handler.on_enter(&mut self.tooltip, at);
                self.hovered = Some(marker);
            }
            PointerEvent::Leave { marker } => {
                binding.handler.on_leave(&mut self.tooltip);
                if self.hovered == Some(marker) {
                    self.hovered = None;
                }
            }
        }
    }

    /// Translate a raw pointer position into enter/leave events.
    pub fn pointer_moved(&mut self, p: Point) {
        let hit = self.hit_test(p);
        if hit == self.hovered {
            return;
        }
        if let Some(prev) = self.hovered {
            self.dispatch(PointerEvent::Leave { marker: prev });
        }
        if let Some(marker) = hit {
            self.dispatch(PointerEvent::Enter { marker, at: p });
        }
    }

    /// The pointer left the surface.
    pub fn pointer_exited(&mut self) {
        if let Some(prev) = self.hovered {
            self.dispatch(PointerEvent::Leave { marker: prev });
        }
    }

    pub fn advance(&mut self, dt: Duration) {
        self.tooltip.advance(dt);
    }

    /// The live tooltip, positioned where the last hover put it.
    pub fn tooltip_element(&self) -> Option<Element> {
        self.tooltip.to_element(&self.config)
    }
}
