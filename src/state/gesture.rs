// Pointer gesture bookkeeping for drag-to-pan.

/// Captured at pointer-down, discarded at pointer-up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub anchor_left: f64,
    pub anchor_top: f64,
    pub pointer_x: f64,
    pub pointer_y: f64,
}

impl DragSession {
    /// Pointer displacement from the session start.
    pub fn delta(&self, x: f64, y: f64) -> (f64, f64) {
        (x - self.pointer_x, y - self.pointer_y)
    }
}

/// IDLE -> ARMED -> DRAGGING -> IDLE.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Gesture {
    #[default]
    Idle,
    Armed(DragSession),
    Dragging(DragSession),
}

impl Gesture {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Gesture::Dragging(_))
    }
}
