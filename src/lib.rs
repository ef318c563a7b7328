//! Freehand drawing with a tracked hand.
//!
//! A [`StrokeBuilder`] is driven once per frame by the host. It reads pinch state and a
//! bone position from a [`tracking::HandTracker`] and extrudes lines through a
//! [`render::PolylineRenderer`] while the pinch is held.

mod color;
pub use color::*;

mod config;
pub use config::{
	ConfigError, DrawConfig, DEFAULT_CAP_VERTICES, DEFAULT_LINE_WIDTH, DEFAULT_MATERIAL,
	DEFAULT_MIN_DISTANCE_BEFORE_NEW_POINT, DEFAULT_MIN_PINCH_STRENGTH,
};

mod engine;
pub use engine::*;

pub mod geom;
pub mod render;
pub mod tracking;
