// Geometry of the viewed image: container, natural size, placement, rotation.

/// Width/height pair in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    pub fn swapped(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }
}

/// A point in container-local coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The image's rendered rectangle in container-local coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Placement {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Placement {
    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Fractional position of `p` inside the rectangle (0..1 when inside).
    pub fn ratio_of(&self, p: Point) -> (f64, f64) {
        ((p.x - self.left) / self.width, (p.y - self.top) / self.height)
    }
}

/// Derived per render; never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    Fit,
    ActualSize,
    Custom,
}

/// Authoritative geometry record.
///
/// `natural` and `placement` are only meaningful once `loaded` is set.
/// `rotation` accumulates in steps of 90 and is never reduced in storage.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Geometry {
    pub container: Size,
    pub natural: Size,
    pub placement: Placement,
    pub rotation: i32,
    pub loaded: bool,
}

impl Geometry {
    /// True when transform operations have something to act on.
    pub fn is_ready(&self) -> bool {
        self.loaded
            && !self.container.is_empty()
            && !self.natural.is_empty()
            && self.placement.width > 0.0
            && self.placement.height > 0.0
    }

    /// Current scale relative to the natural size, 0 before load.
    pub fn scale(&self) -> f64 {
        if self.natural.width > 0.0 {
            self.placement.width / self.natural.width
        } else {
            0.0
        }
    }

    /// Rotation reduced to 0, 90, 180 or 270.
    pub fn display_rotation(&self) -> i32 {
        self.rotation.rem_euclid(360)
    }

    pub fn is_quarter_turned(&self) -> bool {
        self.rotation.rem_euclid(180) != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_geometry_is_not_ready() {
        let g = Geometry::default();
        assert!(!g.is_ready());
        assert_eq!(g.scale(), 0.0);
    }

    #[test]
    fn loaded_but_unmeasured_container_is_not_ready() {
        let g = Geometry {
            natural: Size::new(100.0, 50.0),
            placement: Placement { left: 0.0, top: 0.0, width: 100.0, height: 50.0 },
            loaded: true,
            ..Default::default()
        };
        assert!(!g.is_ready());
        assert_eq!(g.scale(), 1.0);
    }

    #[test]
    fn display_rotation_handles_accumulation() {
        let mut g = Geometry::default();
        g.rotation = 450;
        assert_eq!(g.display_rotation(), 90);
        assert!(g.is_quarter_turned());
        g.rotation = 720;
        assert_eq!(g.display_rotation(), 0);
        assert!(!g.is_quarter_turned());
    }

    #[test]
    fn ratio_of_center_is_half() {
        let p = Placement { left: 10.0, top: 20.0, width: 200.0, height: 100.0 };
        assert_eq!(p.ratio_of(p.center()), (0.5, 0.5));
    }
}
