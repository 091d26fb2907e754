//! # RadiantKit Visualizer
//!
//! Renders generated pipe layouts to SVG: an animated installation replay
//! for small rooms and a static drawing for large ones.

pub mod animation;
pub mod palette;
pub mod svg_renderer;

pub use animation::{AnimationPlan, FrameState, Progress};
pub use palette::{segment_color, ColorMap, Rgb, RETURN_COLOR, SUPPLY_COLOR};
pub use svg_renderer::{write_svg, LayoutRenderer, RenderMode, Rendering};
