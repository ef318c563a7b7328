use super::{LineDescriptor, PolylineRenderer};
use crate::color::Color;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LineId(usize);

impl LineId {
	pub fn index(self) -> usize {
		self.0
	}
}

/// State of one line as last set by the builder.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedLine {
	pub label: String,
	pub material: String,
	pub width: f32,
	pub color: Color,
	pub emission: Option<Color>,
	pub cap_vertices: u32,
	pub positions: Vec<Vec3>,
}

/// Keeps every line in memory instead of drawing it.
#[derive(Clone, Debug, Default)]
pub struct RecordingRenderer {
	lines: Vec<RecordedLine>,
}

impl RecordingRenderer {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn lines(&self) -> &[RecordedLine] {
		&self.lines
	}

	/// `None` if `id` was not handed out by this renderer.
	pub fn line(&self, id: LineId) -> Option<&RecordedLine> {
		self.lines.get(id.0)
	}

	fn line_mut(&mut self, id: &LineId) -> Option<&mut RecordedLine> {
		let line = self.lines.get_mut(id.0);
		debug_assert!(line.is_some(), "unknown line {id:?}");
		line
	}
}

impl PolylineRenderer for RecordingRenderer {
	type Line = LineId;

	fn create_line(&mut self, descriptor: &LineDescriptor<'_>) -> LineId {
		let id = LineId(self.lines.len());
		self.lines.push(RecordedLine {
			label: descriptor.label.to_owned(),
			material: descriptor.material.to_owned(),
			width: descriptor.width,
			color: descriptor.color,
			emission: descriptor.emission,
			cap_vertices: descriptor.cap_vertices,
			positions: vec![Vec3::ZERO],
		});
		id
	}

	fn set_point_count(&mut self, line: &LineId, count: usize) {
		if let Some(line) = self.line_mut(line) {
			line.positions.resize(count, Vec3::ZERO);
		}
	}

	fn set_point(&mut self, line: &LineId, index: usize, position: Vec3) {
		let Some(line) = self.line_mut(line) else {
			return;
		};
		debug_assert!(index < line.positions.len(), "point {index} out of range");
		if let Some(p) = line.positions.get_mut(index) {
			*p = position;
		}
	}

	fn set_width(&mut self, line: &LineId, width: f32) {
		if let Some(line) = self.line_mut(line) {
			line.width = width;
		}
	}

	fn set_color(&mut self, line: &LineId, color: Color) {
		if let Some(line) = self.line_mut(line) {
			line.color = color;
		}
	}

	fn set_emission(&mut self, line: &LineId, color: Color) {
		if let Some(line) = self.line_mut(line) {
			line.emission = Some(color);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use glam::vec3;

	fn descriptor() -> LineDescriptor<'static> {
		LineDescriptor {
			label: "line",
			material: "default_line",
			width: 0.01,
			color: Color::WHITE,
			emission: None,
			cap_vertices: 5,
		}
	}

	#[test]
	fn test_create_line() {
		let mut renderer = RecordingRenderer::new();
		let a = renderer.create_line(&descriptor());
		let b = renderer.create_line(&descriptor());
		assert_ne!(a, b);
		assert_eq!(renderer.lines().len(), 2);
		assert_eq!(renderer.line(a).unwrap().positions, vec![Vec3::ZERO]);
		assert_eq!(renderer.line(b).unwrap().label, "line");
	}

	#[test]
	fn test_resize_keeps_positions() {
		let mut renderer = RecordingRenderer::new();
		let line = renderer.create_line(&descriptor());
		renderer.set_point(&line, 0, vec3(1.0, 0.0, 0.0));
		renderer.set_point_count(&line, 3);
		renderer.set_point(&line, 2, vec3(0.0, 0.0, 1.0));
		assert_eq!(
			renderer.line(line).unwrap().positions,
			vec![vec3(1.0, 0.0, 0.0), Vec3::ZERO, vec3(0.0, 0.0, 1.0)]
		);
	}

	#[test]
	fn test_style() {
		let mut renderer = RecordingRenderer::new();
		let line = renderer.create_line(&descriptor());
		let red = Color::rgb(1.0, 0.0, 0.0);
		renderer.set_width(&line, 0.5);
		renderer.set_color(&line, red);
		renderer.set_emission(&line, red);
		let recorded = renderer.line(line).unwrap();
		assert_eq!(recorded.width, 0.5);
		assert_eq!(recorded.color, red);
		assert_eq!(recorded.emission, Some(red));
	}

	#[test]
	fn test_unknown_line_id() {
		let mut other = RecordingRenderer::new();
		other.create_line(&descriptor());
		let foreign = other.create_line(&descriptor());

		let mut renderer = RecordingRenderer::new();
		renderer.create_line(&descriptor());
		assert!(renderer.line(foreign).is_none());
		assert_eq!(foreign.index(), 1);
	}
}
