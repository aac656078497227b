//! Translates raw pointer and wheel input into engine calls.
//!
//! The controller owns the drag gesture and nothing else. Geometry is passed
//! in by reference and new placements are handed back, so the caller decides
//! when to commit them.

use crate::config::ViewerConfig;
use crate::engine::{self, ZoomAnchor};
use crate::state::{DragSession, Geometry, Gesture, Placement, Point, Size};

pub const DOM_DELTA_LINE: u32 = 1;
pub const DOM_DELTA_PAGE: u32 = 2;
const LINE_HEIGHT_PX: f64 = 16.0;

/// A wheel event reduced to what the viewer needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelInput {
    /// Pointer position in container-local coordinates.
    pub x: f64,
    pub y: f64,
    pub delta_x: f64,
    pub delta_y: f64,
    pub delta_mode: u32,
    /// ctrl or meta held.
    pub pan_modifier: bool,
}

/// Convert line/page deltas to pixels.
pub fn normalize_wheel_delta(input: &WheelInput, container: Size) -> (f64, f64) {
    match input.delta_mode {
        DOM_DELTA_LINE => (input.delta_x * LINE_HEIGHT_PX, input.delta_y * LINE_HEIGHT_PX),
        DOM_DELTA_PAGE => (input.delta_x * container.width, input.delta_y * container.height),
        _ => (input.delta_x, input.delta_y),
    }
}

/// Wheel with ctrl/meta pans (trackpad convention); plain wheel zooms at the pointer.
pub fn wheel(g: &Geometry, cfg: &ViewerConfig, input: &WheelInput) -> Placement {
    let (dx, dy) = normalize_wheel_delta(input, g.container);
    if input.pan_modifier {
        engine::pan(
            g,
            cfg,
            -dx * cfg.wheel_pan_sensitivity,
            -dy * cfg.wheel_pan_sensitivity,
        )
    } else {
        let target = g.scale() - dy * cfg.wheel_zoom_sensitivity;
        engine::zoom_to(g, cfg, target, ZoomAnchor::At(Point::new(input.x, input.y)))
    }
}

/// Zoom in or out by one `zoom_step`, anchored at the placement center.
pub fn step_zoom(g: &Geometry, cfg: &ViewerConfig, zoom_in: bool) -> Placement {
    let factor = if zoom_in { cfg.zoom_step } else { 1.0 / cfg.zoom_step };
    engine::zoom_to(g, cfg, g.scale() * factor, ZoomAnchor::PlacementCenter)
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Interaction {
    pub gesture: Gesture,
    /// Set when a drag ends; swallows the click the browser fires next.
    suppress_click: bool,
}

impl Interaction {
    /// IDLE -> ARMED. Any previous session is replaced.
    pub fn pointer_down(&mut self, g: &Geometry, x: f64, y: f64) {
        self.suppress_click = false;
        if !g.is_ready() {
            self.gesture = Gesture::Idle;
            return;
        }
        self.gesture = Gesture::Armed(DragSession {
            anchor_left: g.placement.left,
            anchor_top: g.placement.top,
            pointer_x: x,
            pointer_y: y,
        });
        log::debug!("gesture armed at ({x}, {y})");
    }

    /// Returns the new placement while dragging. The offset is always taken
    /// from the session start so missed move events cannot cause drift.
    pub fn pointer_move(&mut self, g: &Geometry, cfg: &ViewerConfig, x: f64, y: f64) -> Option<Placement> {
        let session = match self.gesture {
            Gesture::Idle => return None,
            Gesture::Armed(s) => {
                let (dx, dy) = s.delta(x, y);
                if dx.abs() < cfg.drag_threshold && dy.abs() < cfg.drag_threshold {
                    return None;
                }
                log::debug!("drag started");
                self.gesture = Gesture::Dragging(s);
                s
            }
            Gesture::Dragging(s) => s,
        };
        let (dx, dy) = session.delta(x, y);
        Some(engine::pan_from(g, cfg, session.anchor_left, session.anchor_top, dx, dy))
    }

    /// Any state -> IDLE. Returns true when the gesture was a drag.
    pub fn pointer_up(&mut self) -> bool {
        let was_drag = self.gesture.is_dragging();
        if was_drag {
            log::debug!("drag ended");
        }
        self.gesture = Gesture::Idle;
        self.suppress_click = was_drag;
        was_drag
    }

    /// Whether a click with the given multi-click `detail` should toggle
    /// fit/1:1. Only even counts (the second click of a pair) toggle, and a
    /// click that ends a drag never does.
    pub fn accept_double_click(&mut self, detail: i32) -> bool {
        if std::mem::take(&mut self.suppress_click) {
            return false;
        }
        detail > 0 && detail % 2 == 0
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }
}
