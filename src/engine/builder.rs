use super::stroke::{ActiveStroke, Stroke};
use crate::color::Color;
use crate::config::{check_non_negative, ConfigError, DrawConfig};
use crate::render::{LineDescriptor, PolylineRenderer};
use crate::tracking::{HandState, HandTracker};
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
	Idle,
	Drawing,
}

/// What a single tick did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickOutcome {
	/// The tracked bone is not available yet. Nothing else was evaluated.
	AwaitingBone,
	/// Not pinching and nothing to finish.
	Idle,
	/// A new stroke was created. `point` is set if it got its first point on the same tick.
	Started { point: Option<Vec3> },
	Extended { point: Vec3 },
	/// Still pinching, but the hand has not moved far enough for a new point.
	Holding,
	/// The pinch was released and the active stroke was finished.
	Finished,
}

impl TickOutcome {
	pub fn appended(&self) -> Option<Vec3> {
		match *self {
			TickOutcome::Started { point } => point,
			TickOutcome::Extended { point } => Some(point),
			_ => None,
		}
	}
}

/// Turns pinches of a tracked hand into strokes.
///
/// The host calls [`StrokeBuilder::tick`] once per frame. While the configured finger is
/// pinched hard enough, the configured bone is followed and a point is appended every time it
/// has moved at least `min_distance_before_new_point` from the last point. Releasing the pinch
/// finishes the stroke; it stays rendered until the builder is dropped.
pub struct StrokeBuilder<T: HandTracker, R: PolylineRenderer> {
	config: DrawConfig,
	tracker: T,
	renderer: R,
	bone: Option<T::Bone>,
	active: Option<ActiveStroke<R::Line>>,
	strokes: Vec<Stroke<R::Line>>,
	// Shared by all strokes and never reset, so a new stroke only gets its first point once
	// the hand is far enough from where the previous one ended.
	last_point: Vec3,
	emissive: bool,
}

impl<T: HandTracker, R: PolylineRenderer> StrokeBuilder<T, R> {
	#[tracing::instrument(skip_all, err)]
	pub fn new(config: DrawConfig, tracker: T, renderer: R) -> Result<Self, ConfigError> {
		config.validate()?;
		Ok(Self {
			config,
			tracker,
			renderer,
			bone: None,
			active: None,
			strokes: Vec::new(),
			last_point: Vec3::ZERO,
			emissive: false,
		})
	}

	pub fn config(&self) -> &DrawConfig {
		&self.config
	}

	pub fn tracker(&self) -> &T {
		&self.tracker
	}

	pub fn tracker_mut(&mut self) -> &mut T {
		&mut self.tracker
	}

	pub fn renderer(&self) -> &R {
		&self.renderer
	}

	pub fn phase(&self) -> Phase {
		if self.active.is_some() {
			Phase::Drawing
		} else {
			Phase::Idle
		}
	}

	pub fn is_bone_resolved(&self) -> bool {
		self.bone.is_some()
	}

	pub fn active_stroke(&self) -> Option<&Stroke<R::Line>> {
		self.active.as_ref().map(ActiveStroke::stroke)
	}

	/// Finished strokes, oldest first.
	pub fn strokes(&self) -> &[Stroke<R::Line>] {
		&self.strokes
	}

	pub fn last_point(&self) -> Vec3 {
		self.last_point
	}

	/// Number of strokes created so far, including the active one.
	pub fn stroke_count(&self) -> usize {
		self.strokes.len() + usize::from(self.active.is_some())
	}

	/// Polls the tracker and advances the state machine.
	pub fn tick(&mut self) -> TickOutcome {
		if self.bone.is_none() {
			self.bone = self.tracker.resolve_bone(self.config.bone);
			if self.bone.is_some() {
				tracing::debug!(bone = %self.config.bone, hand = %self.config.hand, "tracked bone resolved");
			}
		}
		let Some(bone) = &self.bone else {
			tracing::trace!(bone = %self.config.bone, "waiting for tracked bone");
			return TickOutcome::AwaitingBone;
		};
		let state = HandState::poll(&self.tracker, self.config.finger, bone);
		self.update(state)
	}

	/// Advances the state machine with a snapshot the host read itself.
	pub fn update(&mut self, state: HandState) -> TickOutcome {
		if !state.is_drawing(self.config.min_pinch_strength) {
			return match self.active.take() {
				Some(active) => {
					let stroke = active.finish();
					tracing::debug!(
						label = stroke.label(),
						points = stroke.len(),
						length = stroke.length(),
						"stroke finished"
					);
					self.strokes.push(stroke);
					TickOutcome::Finished
				}
				None => TickOutcome::Idle,
			};
		}

		let started = self.active.is_none();
		if started {
			self.start_stroke();
		}
		let point = self.extend(state.position);
		match (started, point) {
			(true, point) => TickOutcome::Started { point },
			(false, Some(point)) => TickOutcome::Extended { point },
			(false, None) => TickOutcome::Holding,
		}
	}

	fn start_stroke(&mut self) {
		let label = format!("stroke+{}_{}", self.config.hand, self.stroke_count());
		let width = self.config.line_width;
		let color = self.config.line_color;
		let emission = self.emissive.then_some(color);
		let line = self.renderer.create_line(&LineDescriptor {
			label: &label,
			material: &self.config.material,
			width,
			color,
			emission,
			cap_vertices: self.config.cap_vertices,
		});
		self.renderer.set_point_count(&line, 1);
		tracing::debug!(label = %label, width, "stroke started");
		self.active = Some(ActiveStroke::new(
			label,
			self.config.hand,
			line,
			width,
			color,
			emission,
		));
	}

	fn extend(&mut self, position: Vec3) -> Option<Vec3> {
		let active = self.active.as_mut()?;
		if position.distance(self.last_point) < self.config.min_distance_before_new_point {
			return None;
		}
		self.last_point = position;
		active.add_point(&mut self.renderer, position);
		tracing::trace!(?position, points = active.stroke().len(), "point appended");
		Some(position)
	}

	/// Sets the width of the active stroke and of every stroke started afterwards.
	pub fn set_line_width(&mut self, width: f32) -> Result<(), ConfigError> {
		let width = check_non_negative("line_width", width)?;
		if let Some(active) = &mut self.active {
			active.set_width(&mut self.renderer, width);
		}
		self.config.line_width = width;
		Ok(())
	}

	/// Sets the color of strokes started afterwards. The active stroke is recolored too, but
	/// only if nothing has been drawn into it yet.
	///
	/// A color picked while no point has been drawn yet (idle, or a stroke still holding only its
	/// placeholder) also turns on the emissive highlight for later strokes. A color picked
	/// mid-stroke does not.
	pub fn set_line_color(&mut self, color: Color) {
		let placeholder = match &mut self.active {
			Some(active) => {
				let recolored = active.recolor(&mut self.renderer, color);
				if recolored {
					tracing::debug!(label = active.stroke().label(), "active stroke recolored");
				}
				recolored
			}
			None => true,
		};
		self.config.line_color = color;
		self.emissive = placeholder;
	}

	pub fn set_min_distance(&mut self, distance: f32) -> Result<(), ConfigError> {
		self.config.min_distance_before_new_point =
			check_non_negative("min_distance_before_new_point", distance)?;
		Ok(())
	}
}
