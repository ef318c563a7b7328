use crate::color::Color;
use crate::geom::Aabb;
use crate::render::PolylineRenderer;
use crate::tracking::Hand;
use glam::Vec3;
use itertools::Itertools;

/// One continuous polyline, drawn during a single pinch.
#[derive(Debug, Clone)]
pub struct Stroke<L> {
	label: String,
	hand: Hand,
	line: L,
	points: Vec<Vec3>,
	width: f32,
	color: Color,
	emission: Option<Color>,
}

impl<L> Stroke<L> {
	pub fn label(&self) -> &str {
		&self.label
	}

	pub fn hand(&self) -> Hand {
		self.hand
	}

	/// Renderer handle owned by this stroke.
	pub fn line(&self) -> &L {
		&self.line
	}

	/// Recorded points in the order they were drawn. The renderer additionally shows a
	/// duplicate of the last one.
	pub fn points(&self) -> &[Vec3] {
		&self.points
	}

	pub fn last_point(&self) -> Option<Vec3> {
		self.points.last().copied()
	}

	pub fn len(&self) -> usize {
		self.points.len()
	}

	pub fn is_empty(&self) -> bool {
		self.points.is_empty()
	}

	pub fn width(&self) -> f32 {
		self.width
	}

	pub fn color(&self) -> Color {
		self.color
	}

	pub fn emission(&self) -> Option<Color> {
		self.emission
	}

	/// Arc length of the polyline through the recorded points.
	pub fn length(&self) -> f32 {
		self
			.points
			.iter()
			.tuple_windows()
			.map(|(a, b)| a.distance(*b))
			.sum()
	}

	pub fn bounds(&self) -> Aabb {
		Aabb::containing(self.points.iter().copied())
	}
}

/// The stroke currently being extended. Only one exists per builder at a time.
#[derive(Debug)]
pub(crate) struct ActiveStroke<L> {
	stroke: Stroke<L>,
}

impl<L> ActiveStroke<L> {
	pub fn new(
		label: String,
		hand: Hand,
		line: L,
		width: f32,
		color: Color,
		emission: Option<Color>,
	) -> Self {
		Self {
			stroke: Stroke {
				label,
				hand,
				line,
				points: Vec::new(),
				width,
				color,
				emission,
			},
		}
	}

	pub fn stroke(&self) -> &Stroke<L> {
		&self.stroke
	}

	/// Writes the point at the end of the line and repeats it one slot further, so the line
	/// always ends on a zero-length segment. A stroke with one point is therefore visible.
	pub fn add_point<R>(&mut self, renderer: &mut R, point: Vec3)
	where
		R: PolylineRenderer<Line = L>,
	{
		let index = self.stroke.points.len();
		let line = &self.stroke.line;
		renderer.set_point(line, index, point);
		renderer.set_point_count(line, index + 2);
		renderer.set_point(line, index + 1, point);
		self.stroke.points.push(point);
	}

	pub fn set_width<R>(&mut self, renderer: &mut R, width: f32)
	where
		R: PolylineRenderer<Line = L>,
	{
		renderer.set_width(&self.stroke.line, width);
		self.stroke.width = width;
	}

	/// Recolors the line and turns on its emissive highlight. Returns `false`, leaving the line
	/// untouched, once anything has been drawn.
	pub fn recolor<R>(&mut self, renderer: &mut R, color: Color) -> bool
	where
		R: PolylineRenderer<Line = L>,
	{
		if !self.stroke.is_empty() {
			return false;
		}
		renderer.set_color(&self.stroke.line, color);
		renderer.set_emission(&self.stroke.line, color);
		self.stroke.color = color;
		self.stroke.emission = Some(color);
		true
	}

	pub fn finish(self) -> Stroke<L> {
		self.stroke
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::render::{LineDescriptor, LineId, RecordingRenderer};
	use approx::assert_abs_diff_eq;
	use glam::vec3;

	fn active(renderer: &mut RecordingRenderer) -> ActiveStroke<LineId> {
		let line = renderer.create_line(&LineDescriptor {
			label: "test",
			material: "default_line",
			width: 0.01,
			color: Color::WHITE,
			emission: None,
			cap_vertices: 5,
		});
		ActiveStroke::new("test".into(), Hand::Left, line, 0.01, Color::WHITE, None)
	}

	#[test]
	fn test_add_point_duplicates_terminal() {
		let mut renderer = RecordingRenderer::new();
		let mut stroke = active(&mut renderer);
		let a = vec3(1.0, 0.0, 0.0);
		let b = vec3(2.0, 0.0, 0.0);

		stroke.add_point(&mut renderer, a);
		assert_eq!(stroke.stroke().points(), &[a]);
		assert_eq!(renderer.line(*stroke.stroke().line()).unwrap().positions, vec![a, a]);

		stroke.add_point(&mut renderer, b);
		assert_eq!(stroke.stroke().points(), &[a, b]);
		assert_eq!(
			renderer.line(*stroke.stroke().line()).unwrap().positions,
			vec![a, b, b]
		);
	}

	#[test]
	fn test_recolor_only_while_empty() {
		let mut renderer = RecordingRenderer::new();
		let mut stroke = active(&mut renderer);
		let red = Color::rgb(1.0, 0.0, 0.0);
		let blue = Color::rgb(0.0, 0.0, 1.0);

		assert!(stroke.recolor(&mut renderer, red));
		stroke.add_point(&mut renderer, Vec3::ONE);
		assert!(!stroke.recolor(&mut renderer, blue));

		let line = renderer.line(*stroke.stroke().line()).unwrap();
		assert_eq!(line.color, red);
		assert_eq!(line.emission, Some(red));
		assert_eq!(stroke.finish().color(), red);
	}

	#[test]
	fn test_length_and_bounds() {
		let mut renderer = RecordingRenderer::new();
		let mut stroke = active(&mut renderer);
		assert_eq!(stroke.stroke().length(), 0.0);
		assert!(stroke.stroke().bounds().is_empty());

		for p in [
			vec3(0.0, 0.0, 0.0),
			vec3(3.0, 4.0, 0.0),
			vec3(3.0, 4.0, 1.0),
		] {
			stroke.add_point(&mut renderer, p);
		}
		let stroke = stroke.finish();
		assert_abs_diff_eq!(stroke.length(), 6.0);
		assert_eq!(stroke.bounds().max(), vec3(3.0, 4.0, 1.0));
		assert_eq!(stroke.last_point(), Some(vec3(3.0, 4.0, 1.0)));
	}
}
