//! Tunable constants for the viewer.
//!
//! Everything here has a sensible default, so a host only needs to supply the
//! fields it wants to change.

use serde::{Deserialize, Serialize};

use crate::error::ViewerError;

/// What happens to the placement when the container changes size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizePolicy {
    /// Throw away the current zoom and fit the image again.
    #[default]
    Refit,
    /// Keep the current scale and keep the image center at the same
    /// fractional position of the container.
    Recenter,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Padding (px) subtracted from the container when computing the fit scale.
    pub fit_margin: f64,
    /// Smallest rendered width (px) a zoom may produce.
    pub min_width: f64,
    /// Largest scale relative to the natural size.
    pub max_scale: f64,
    /// Sliver (px) of the image that must stay inside the container when panning.
    pub edge_margin: f64,
    /// Pointer displacement (px) that turns a press into a drag.
    pub drag_threshold: f64,
    /// Scale change per wheel delta unit.
    pub wheel_zoom_sensitivity: f64,
    /// Pan distance per wheel delta unit when ctrl/meta is held.
    pub wheel_pan_sensitivity: f64,
    /// Relative tolerance used to decide whether the view is at fit scale.
    pub fit_tolerance: f64,
    /// Multiplicative factor for the zoom in/out buttons and keys.
    pub zoom_step: f64,
    pub resize_policy: ResizePolicy,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            fit_margin: 50.0,
            min_width: 50.0,
            max_scale: 10.0,
            edge_margin: 20.0,
            drag_threshold: 5.0,
            wheel_zoom_sensitivity: 0.001,
            wheel_pan_sensitivity: 0.15,
            fit_tolerance: 0.01,
            zoom_step: 1.25,
            resize_policy: ResizePolicy::Refit,
        }
    }
}

impl ViewerConfig {
    /// Parse a (possibly partial) JSON override and validate the result.
    pub fn from_json(raw: &str) -> Result<Self, ViewerError> {
        let cfg: ViewerConfig =
            serde_json::from_str(raw).map_err(|e| ViewerError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ViewerError> {
        let non_negative = [
            ("fit_margin", self.fit_margin),
            ("edge_margin", self.edge_margin),
            ("drag_threshold", self.drag_threshold),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ViewerError::Config(format!("{name} must be >= 0, got {value}")));
            }
        }
        let positive = [
            ("min_width", self.min_width),
            ("wheel_zoom_sensitivity", self.wheel_zoom_sensitivity),
            ("wheel_pan_sensitivity", self.wheel_pan_sensitivity),
            ("fit_tolerance", self.fit_tolerance),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ViewerError::Config(format!("{name} must be > 0, got {value}")));
            }
        }
        if !self.max_scale.is_finite() || self.max_scale < 1.0 {
            return Err(ViewerError::Config(format!(
                "max_scale must be >= 1, got {}",
                self.max_scale
            )));
        }
        if !self.zoom_step.is_finite() || self.zoom_step <= 1.0 {
            return Err(ViewerError::Config(format!(
                "zoom_step must be > 1, got {}",
                self.zoom_step
            )));
        }
        Ok(())
    }
}
