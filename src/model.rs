//! Viewer state and the actions that drive it.
//! All DOM events end up here as [`ViewerAction`]s; `reduce` is the only
//! place geometry changes.

use std::rc::Rc;
use yew::Reducible;

use crate::config::{ResizePolicy, ViewerConfig};
use crate::controller::{self, Interaction, WheelInput};
use crate::engine;
use crate::error::ViewerError;
use crate::state::{Geometry, Placement, Point, Size, ViewMode};

#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadStatus {
    /// No source supplied yet.
    #[default]
    Idle,
    Loading,
    Loaded,
    /// Stays here until the host supplies a new `src`.
    Failed(ViewerError),
}

/// Background treatments cycled by the toolbar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Background {
    #[default]
    Black,
    White,
    Grid,
}

impl Background {
    pub fn next(self) -> Self {
        match self {
            Background::Black => Background::White,
            Background::White => Background::Grid,
            Background::Grid => Background::Black,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Background::Black => "black",
            Background::White => "white",
            Background::Grid => "grid",
        }
    }

    /// Inline CSS for the container.
    pub fn css(self) -> &'static str {
        match self {
            Background::Black => "background:#000;",
            Background::White => "background:#fff;",
            Background::Grid => {
                "background-color:#fff; background-image:linear-gradient(45deg,#ccc 25%,transparent 25%),linear-gradient(-45deg,#ccc 25%,transparent 25%),linear-gradient(45deg,transparent 75%,#ccc 75%),linear-gradient(-45deg,transparent 75%,#ccc 75%); background-size:20px 20px; background-position:0 0,0 10px,10px -10px,-10px 0;"
            }
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewerState {
    pub config: ViewerConfig,
    pub src: Option<String>,
    pub status: LoadStatus,
    pub geometry: Geometry,
    pub interaction: Interaction,
    pub background: Background,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewerAction {
    SetConfig(ViewerConfig),
    BeginLoad { src: String },
    ImageLoaded { src: String, natural: Size },
    ImageFailed { src: String, error: ViewerError },
    Resize { container: Size },
    /// Client coordinates; only deltas matter for dragging.
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp,
    /// Container-local coordinates with the browser's multi-click count.
    Click { x: f64, y: f64, detail: i32 },
    Wheel(WheelInput),
    ToggleFit { anchor: Option<Point> },
    FitToWindow,
    ZoomIn,
    ZoomOut,
    Rotate,
    CycleBackground,
}

impl ViewerState {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.status == LoadStatus::Loaded
    }

    pub fn view_mode(&self) -> ViewMode {
        engine::view_mode(&self.geometry, &self.config)
    }

    pub fn zoom_percent(&self) -> u32 {
        engine::zoom_percent(&self.geometry)
    }

    /// Label naming what the fit/1:1 toggle will do next.
    pub fn toggle_label(&self) -> &'static str {
        if self.view_mode() == ViewMode::Fit { "1:1" } else { "Fit" }
    }

    pub fn is_dragging(&self) -> bool {
        self.interaction.is_dragging()
    }

    fn is_current(&self, src: &str) -> bool {
        self.src.as_deref() == Some(src)
    }

    fn set_placement(&mut self, placement: Placement) {
        self.geometry.placement = placement;
    }

    fn refit(&mut self) {
        let p = engine::fit_to_window(&self.geometry, &self.config);
        self.set_placement(p);
    }
}

impl Reducible for ViewerState {
    type Action = ViewerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use ViewerAction::*;
        let mut new = (*self).clone();
        match action {
            SetConfig(config) => {
                if config == new.config {
                    return self;
                }
                new.config = config;
            }
            BeginLoad { src } => {
                log::info!("loading image {src}");
                let container = new.geometry.container;
                new.geometry = Geometry {
                    container,
                    ..Default::default()
                };
                new.interaction = Interaction::default();
                new.src = Some(src);
                new.status = LoadStatus::Loading;
            }
            ImageLoaded { src, natural } => {
                if !new.is_current(&src) || new.status != LoadStatus::Loading {
                    log::debug!("ignoring stale load result for {src}");
                    return self;
                }
                if natural.is_empty() {
                    let error = ViewerError::InvalidImage { src };
                    log::warn!("{error}");
                    new.status = LoadStatus::Failed(error);
                    return Rc::new(new);
                }
                log::info!("image loaded: {}x{}", natural.width, natural.height);
                new.geometry.natural = natural;
                new.geometry.placement = Placement {
                    width: natural.width,
                    height: natural.height,
                    ..new.geometry.placement
                };
                new.geometry.loaded = true;
                new.status = LoadStatus::Loaded;
                new.refit();
            }
            ImageFailed { src, error } => {
                if !new.is_current(&src) {
                    return self;
                }
                log::warn!("{error}");
                new.geometry.loaded = false;
                new.status = LoadStatus::Failed(error);
            }
            Resize { container } => {
                let previous = new.geometry.container;
                if previous == container {
                    return self;
                }
                new.geometry.container = container;
                match new.config.resize_policy {
                    ResizePolicy::Refit => {
                        log::debug!("container resized to {}x{}, refitting", container.width, container.height);
                        new.refit();
                    }
                    ResizePolicy::Recenter => {
                        let p = engine::recenter(&new.geometry, &new.config, previous);
                        new.set_placement(p);
                    }
                }
            }
            PointerDown { x, y } => {
                let geometry = new.geometry;
                new.interaction.pointer_down(&geometry, x, y);
            }
            PointerMove { x, y } => {
                let geometry = new.geometry;
                match new.interaction.pointer_move(&geometry, &new.config, x, y) {
                    Some(p) => new.set_placement(p),
                    None if new.interaction == self.interaction => return self,
                    None => {}
                }
            }
            PointerUp => {
                new.interaction.pointer_up();
                if new.interaction == self.interaction {
                    return self;
                }
            }
            Click { x, y, detail } => {
                if !new.interaction.accept_double_click(detail) {
                    return Rc::new(new);
                }
                let p = engine::toggle_fit_and_actual_size(&new.geometry, &new.config, Some(Point::new(x, y)));
                new.set_placement(p);
            }
            Wheel(input) => {
                let p = controller::wheel(&new.geometry, &new.config, &input);
                new.set_placement(p);
            }
            ToggleFit { anchor } => {
                let p = engine::toggle_fit_and_actual_size(&new.geometry, &new.config, anchor);
                new.set_placement(p);
            }
            FitToWindow => new.refit(),
            ZoomIn => {
                let p = controller::step_zoom(&new.geometry, &new.config, true);
                new.set_placement(p);
            }
            ZoomOut => {
                let p = controller::step_zoom(&new.geometry, &new.config, false);
                new.set_placement(p);
            }
            Rotate => {
                new.geometry = engine::rotate90(&new.geometry);
            }
            CycleBackground => {
                new.background = new.background.next();
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SRC: &str = "https://example.com/photo.jpg";

    fn run(state: ViewerState, actions: impl IntoIterator<Item = ViewerAction>) -> ViewerState {
        let mut rc = Rc::new(state);
        for a in actions {
            rc = rc.reduce(a);
        }
        (*rc).clone()
    }

    fn loaded_state() -> ViewerState {
        run(
            ViewerState::default(),
            [
                ViewerAction::Resize { container: Size::new(800.0, 600.0) },
                ViewerAction::BeginLoad { src: SRC.into() },
                ViewerAction::ImageLoaded {
                    src: SRC.into(),
                    natural: Size::new(2000.0, 1000.0),
                },
            ],
        )
    }

    #[test]
    fn load_fits_to_window() {
        let s = loaded_state();
        assert!(s.is_loaded());
        assert!(s.geometry.loaded);
        let p = s.geometry.placement;
        assert_eq!((p.left, p.top, p.width, p.height), (25.0, 112.5, 750.0, 375.0));
        assert_eq!(s.view_mode(), ViewMode::Fit);
        assert_eq!(s.toggle_label(), "1:1");
        assert_eq!(s.zoom_percent(), 38);
    }

    #[test]
    fn load_before_measurement_fits_on_first_resize() {
        let s = run(
            ViewerState::default(),
            [
                ViewerAction::BeginLoad { src: SRC.into() },
                ViewerAction::ImageLoaded {
                    src: SRC.into(),
                    natural: Size::new(2000.0, 1000.0),
                },
            ],
        );
        assert_eq!(s.geometry.placement.width, 2000.0);
        let s = run(s, [ViewerAction::Resize { container: Size::new(800.0, 600.0) }]);
        assert_eq!(s.geometry.placement.width, 750.0);
    }

    #[test]
    fn failure_keeps_viewer_unloaded_until_new_src() {
        let s = run(
            ViewerState::default(),
            [
                ViewerAction::Resize { container: Size::new(800.0, 600.0) },
                ViewerAction::BeginLoad { src: "bad.png".into() },
                ViewerAction::ImageFailed {
                    src: "bad.png".into(),
                    error: ViewerError::ImageLoad { src: "bad.png".into() },
                },
                ViewerAction::Rotate,
                ViewerAction::ZoomIn,
                ViewerAction::PointerDown { x: 1.0, y: 1.0 },
                ViewerAction::PointerMove { x: 50.0, y: 50.0 },
            ],
        );
        assert!(!s.geometry.loaded);
        assert!(matches!(s.status, LoadStatus::Failed(ViewerError::ImageLoad { .. })));
        assert_eq!(s.geometry.placement, Placement::default());
        assert_eq!(s.geometry.rotation, 0);

        let s = run(
            s,
            [
                ViewerAction::BeginLoad { src: SRC.into() },
                ViewerAction::ImageLoaded {
                    src: SRC.into(),
                    natural: Size::new(400.0, 300.0),
                },
            ],
        );
        assert!(s.is_loaded());
        assert!(s.geometry.is_ready());
    }

    #[test]
    fn stale_results_are_ignored() {
        let s = run(
            ViewerState::default(),
            [
                ViewerAction::Resize { container: Size::new(800.0, 600.0) },
                ViewerAction::BeginLoad { src: "old.png".into() },
                ViewerAction::BeginLoad { src: SRC.into() },
                ViewerAction::ImageLoaded {
                    src: "old.png".into(),
                    natural: Size::new(10.0, 10.0),
                },
                ViewerAction::ImageFailed {
                    src: "old.png".into(),
                    error: ViewerError::ImageLoad { src: "old.png".into() },
                },
            ],
        );
        assert_eq!(s.status, LoadStatus::Loading);
        assert!(!s.geometry.loaded);
    }

    #[test]
    fn zero_sized_image_is_invalid() {
        let s = run(
            ViewerState::default(),
            [
                ViewerAction::BeginLoad { src: SRC.into() },
                ViewerAction::ImageLoaded {
                    src: SRC.into(),
                    natural: Size::new(0.0, 120.0),
                },
            ],
        );
        assert_eq!(
            s.status,
            LoadStatus::Failed(ViewerError::InvalidImage { src: SRC.into() })
        );
    }

    #[test]
    fn double_click_toggles_between_fit_and_actual_size() {
        let s = loaded_state();
        let s = run(
            s,
            [
                ViewerAction::Click { x: 400.0, y: 300.0, detail: 1 },
                ViewerAction::Click { x: 400.0, y: 300.0, detail: 2 },
            ],
        );
        assert_eq!(s.view_mode(), ViewMode::ActualSize);
        assert_eq!(s.geometry.placement.left, -600.0);
        assert_eq!(s.toggle_label(), "Fit");

        // Third click of a triple-click does not toggle back.
        let s = run(s, [ViewerAction::Click { x: 400.0, y: 300.0, detail: 3 }]);
        assert_eq!(s.view_mode(), ViewMode::ActualSize);

        let s = run(
            s,
            [
                ViewerAction::Click { x: 10.0, y: 10.0, detail: 1 },
                ViewerAction::Click { x: 10.0, y: 10.0, detail: 2 },
            ],
        );
        assert_eq!(s.view_mode(), ViewMode::Fit);
    }

    #[test]
    fn drag_pans_and_swallows_click() {
        let s = loaded_state();
        let s = run(
            s,
            [
                ViewerAction::PointerDown { x: 500.0, y: 500.0 },
                ViewerAction::PointerMove { x: 503.0, y: 502.0 },
            ],
        );
        assert_eq!(s.geometry.placement.left, 25.0);
        assert!(!s.is_dragging());

        let s = run(
            s,
            [
                ViewerAction::PointerMove { x: 530.0, y: 480.0 },
                ViewerAction::PointerMove { x: 550.0, y: 490.0 },
            ],
        );
        assert!(s.is_dragging());
        assert_eq!(s.geometry.placement.left, 75.0);
        assert_eq!(s.geometry.placement.top, 102.5);

        let s = run(
            s,
            [
                ViewerAction::PointerUp,
                ViewerAction::Click { x: 0.0, y: 0.0, detail: 2 },
            ],
        );
        assert!(!s.is_dragging());
        assert_eq!(s.view_mode(), ViewMode::Fit);
        assert_eq!(s.geometry.placement.left, 75.0);
    }

    #[test]
    fn idle_pointer_move_returns_same_state() {
        let s = Rc::new(loaded_state());
        let next = s.clone().reduce(ViewerAction::PointerMove { x: 5.0, y: 5.0 });
        assert!(Rc::ptr_eq(&s, &next));
    }

    #[test]
    fn resize_policies() {
        let s = loaded_state();
        let s = run(
            s,
            [
                ViewerAction::ZoomIn,
                ViewerAction::Resize { container: Size::new(1600.0, 1200.0) },
            ],
        );
        assert_eq!(s.view_mode(), ViewMode::Fit);
        assert_eq!(s.geometry.placement.width, 1550.0);

        let mut s = loaded_state();
        s.config.resize_policy = ResizePolicy::Recenter;
        let s = run(s, [ViewerAction::Resize { container: Size::new(1600.0, 1200.0) }]);
        assert_eq!(s.geometry.placement.width, 750.0);
        assert_eq!(s.geometry.placement.center(), Point::new(800.0, 600.0));
    }

    #[test]
    fn rotate_and_background_cycle() {
        let s = run(
            loaded_state(),
            [ViewerAction::Rotate, ViewerAction::CycleBackground],
        );
        assert_eq!(s.geometry.rotation, 90);
        assert_eq!(s.geometry.natural, Size::new(1000.0, 2000.0));
        assert_eq!(s.background, Background::White);
        let s = run(s, [ViewerAction::CycleBackground, ViewerAction::CycleBackground]);
        assert_eq!(s.background, Background::Black);
    }

    #[test]
    fn begin_load_resets_geometry_but_keeps_container() {
        let s = run(
            loaded_state(),
            [ViewerAction::Rotate, ViewerAction::BeginLoad { src: "next.png".into() }],
        );
        assert_eq!(s.status, LoadStatus::Loading);
        assert_eq!(s.geometry.rotation, 0);
        assert!(!s.geometry.loaded);
        assert_eq!(s.geometry.container, Size::new(800.0, 600.0));
    }

    #[test]
    fn background_cycle_visits_every_treatment() {
        let mut bg = Background::default();
        let mut names = Vec::new();
        for _ in 0..3 {
            names.push(bg.name());
            bg = bg.next();
        }
        assert_eq!(names, ["black", "white", "grid"]);
        assert_eq!(bg, Background::Black);
    }
}
