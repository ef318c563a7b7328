mod recording;
pub use recording::*;

use crate::color::Color;
use glam::Vec3;

/// Everything a renderer needs to create a new line.
#[derive(Clone, Debug, PartialEq)]
pub struct LineDescriptor<'a> {
	pub label: &'a str,
	pub material: &'a str,
	pub width: f32,
	pub color: Color,
	/// Emissive highlight, if enabled.
	pub emission: Option<Color>,
	pub cap_vertices: u32,
}

/// Line-drawing primitive provided by the host.
///
/// A freshly created line holds a single position at the origin. Positions are in world
/// space and the same width is used along the whole line.
pub trait PolylineRenderer {
	type Line;

	fn create_line(&mut self, descriptor: &LineDescriptor<'_>) -> Self::Line;

	/// Resizes the line, keeping existing positions. New positions start at the origin.
	fn set_point_count(&mut self, line: &Self::Line, count: usize);

	fn set_point(&mut self, line: &Self::Line, index: usize, position: Vec3);

	fn set_width(&mut self, line: &Self::Line, width: f32);

	fn set_color(&mut self, line: &Self::Line, color: Color);

	fn set_emission(&mut self, line: &Self::Line, color: Color);
}

impl<R: PolylineRenderer + ?Sized> PolylineRenderer for &mut R {
	type Line = R::Line;

	fn create_line(&mut self, descriptor: &LineDescriptor<'_>) -> Self::Line {
		(**self).create_line(descriptor)
	}

	fn set_point_count(&mut self, line: &Self::Line, count: usize) {
		(**self).set_point_count(line, count)
	}

	fn set_point(&mut self, line: &Self::Line, index: usize, position: Vec3) {
		(**self).set_point(line, index, position)
	}

	fn set_width(&mut self, line: &Self::Line, width: f32) {
		(**self).set_width(line, width)
	}

	fn set_color(&mut self, line: &Self::Line, color: Color) {
		(**self).set_color(line, color)
	}

	fn set_emission(&mut self, line: &Self::Line, color: Color) {
		(**self).set_emission(line, color)
	}
}
