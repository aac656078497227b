pub mod app;
pub mod image_viewer;
pub mod viewer_toolbar;
pub mod zoom_readout;

pub use app::App;
