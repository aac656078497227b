//! Placement math for zoom, fit, pan and rotation.
//!
//! Every function here is pure: it reads a [`Geometry`] snapshot and returns
//! the new value without touching anything else. When the geometry is not
//! ready (image not loaded or container unmeasured) the current value is
//! returned unchanged.

use crate::config::ViewerConfig;
use crate::state::{Geometry, Placement, Point, Size, ViewMode};

/// Where a zoom is anchored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ZoomAnchor {
    /// Center the image in the container at the target scale.
    AlignCenter,
    /// Keep this container point over the same image content.
    At(Point),
    /// Keep the current placement center fixed.
    PlacementCenter,
}

impl From<Option<Point>> for ZoomAnchor {
    fn from(p: Option<Point>) -> Self {
        p.map_or(ZoomAnchor::PlacementCenter, ZoomAnchor::At)
    }
}

/// Render-time box of the `<img>` element inside the placement wrapper.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageBox {
    pub width: f64,
    pub height: f64,
    pub rotation: i32,
}

fn bounded_scale(g: &Geometry, cfg: &ViewerConfig, scale: f64) -> f64 {
    scale.max(cfg.min_width / g.natural.width).min(cfg.max_scale)
}

/// Largest scale at which the whole image fits inside the container minus
/// the fit margin, bounded by the width floor and the scale ceiling.
pub fn fit_scale(g: &Geometry, cfg: &ViewerConfig) -> f64 {
    if g.natural.is_empty() {
        return 0.0;
    }
    let raw = ((g.container.width - cfg.fit_margin) / g.natural.width)
        .min((g.container.height - cfg.fit_margin) / g.natural.height);
    bounded_scale(g, cfg, raw)
}

pub fn zoom_to(g: &Geometry, cfg: &ViewerConfig, target_scale: f64, anchor: ZoomAnchor) -> Placement {
    if !g.is_ready() || !target_scale.is_finite() {
        return g.placement;
    }
    let rect = g.placement;
    let natural = g.natural;

    let anchor = match anchor {
        ZoomAnchor::AlignCenter => {
            let scale = bounded_scale(g, cfg, target_scale);
            let width = scale * natural.width;
            let height = scale * natural.height;
            return Placement {
                left: (g.container.width - width) / 2.0,
                top: (g.container.height - height) / 2.0,
                width,
                height,
            };
        }
        ZoomAnchor::At(p) => p,
        ZoomAnchor::PlacementCenter => rect.center(),
    };

    let (ratio_x, ratio_y) = rect.ratio_of(anchor);
    let mut offset_w = target_scale * natural.width - rect.width;
    offset_w = offset_w.max(cfg.min_width - rect.width);
    offset_w = offset_w.min(natural.width * cfg.max_scale - rect.width);
    let offset_h = offset_w / (rect.width / rect.height);

    Placement {
        left: rect.left - ratio_x * offset_w,
        top: rect.top - ratio_y * offset_h,
        width: rect.width + offset_w,
        height: rect.height + offset_h,
    }
}

pub fn fit_to_window(g: &Geometry, cfg: &ViewerConfig) -> Placement {
    zoom_to(g, cfg, fit_scale(g, cfg), ZoomAnchor::AlignCenter)
}

pub fn is_at_fit(g: &Geometry, cfg: &ViewerConfig) -> bool {
    let fit = fit_scale(g, cfg);
    g.is_ready() && fit > 0.0 && (g.scale() / fit - 1.0).abs() < cfg.fit_tolerance
}

/// At fit scale: zoom to 1:1 around `anchor`. Otherwise: fit.
pub fn toggle_fit_and_actual_size(g: &Geometry, cfg: &ViewerConfig, anchor: Option<Point>) -> Placement {
    if is_at_fit(g, cfg) {
        zoom_to(g, cfg, 1.0, anchor.into())
    } else {
        fit_to_window(g, cfg)
    }
}

/// Move the placement so its top-left is `origin + (dx, dy)`, keeping at
/// least `edge_margin` pixels of the image reachable inside the container.
pub fn pan_from(g: &Geometry, cfg: &ViewerConfig, origin_left: f64, origin_top: f64, dx: f64, dy: f64) -> Placement {
    if !g.is_ready() {
        return g.placement;
    }
    let rect = g.placement;
    let left = (origin_left + dx)
        .max(-rect.width + cfg.edge_margin)
        .min(g.container.width - cfg.edge_margin);
    let top = (origin_top + dy)
        .max(-rect.height + cfg.edge_margin)
        .min(g.container.height - cfg.edge_margin);
    Placement { left, top, ..rect }
}

pub fn pan(g: &Geometry, cfg: &ViewerConfig, dx: f64, dy: f64) -> Placement {
    pan_from(g, cfg, g.placement.left, g.placement.top, dx, dy)
}

/// Turn by 90°. The natural size swaps axes and the placement swaps its
/// width/height about its center, so scale and aspect stay consistent.
pub fn rotate90(g: &Geometry) -> Geometry {
    if !g.is_ready() {
        return *g;
    }
    let center = g.placement.center();
    let width = g.placement.height;
    let height = g.placement.width;
    Geometry {
        natural: g.natural.swapped(),
        rotation: g.rotation + 90,
        placement: Placement {
            left: center.x - width / 2.0,
            top: center.y - height / 2.0,
            width,
            height,
        },
        ..*g
    }
}

/// Keep the current scale and move the placement so its center sits at the
/// same fractional container position it had in `previous`.
pub fn recenter(g: &Geometry, cfg: &ViewerConfig, previous: Size) -> Placement {
    if !g.is_ready() {
        return g.placement;
    }
    if previous.is_empty() {
        return fit_to_window(g, cfg);
    }
    let rect = g.placement;
    let center = rect.center();
    let fx = center.x / previous.width;
    let fy = center.y / previous.height;
    Placement {
        left: fx * g.container.width - rect.width / 2.0,
        top: fy * g.container.height - rect.height / 2.0,
        ..rect
    }
}

pub fn view_mode(g: &Geometry, cfg: &ViewerConfig) -> ViewMode {
    if !g.is_ready() {
        return ViewMode::Custom;
    }
    if is_at_fit(g, cfg) {
        ViewMode::Fit
    } else if (g.scale() - 1.0).abs() < 1e-6 {
        ViewMode::ActualSize
    } else {
        ViewMode::Custom
    }
}

pub fn zoom_percent(g: &Geometry) -> u32 {
    (g.scale() * 100.0).round().max(0.0) as u32
}

/// The `<img>` box swaps back to unrotated axes on quarter turns so the
/// rotated content fills the placement.
pub fn image_box(g: &Geometry) -> ImageBox {
    let p = g.placement;
    let (width, height) = if g.is_quarter_turned() {
        (p.height, p.width)
    } else {
        (p.width, p.height)
    };
    ImageBox {
        width,
        height,
        rotation: g.rotation,
    }
}
