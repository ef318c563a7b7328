use glam::Vec3;

/// Axis-aligned box. An empty box has `min > max` on every axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
	min: Vec3,
	max: Vec3,
}

impl Aabb {
	pub fn new(min: Vec3, max: Vec3) -> Self {
		Self { min, max }
	}

	pub fn empty() -> Self {
		Self::new(Vec3::MAX, Vec3::MIN)
	}

	pub fn is_empty(&self) -> bool {
		self.min.x > self.max.x && self.min.y > self.max.y && self.min.z > self.max.z
	}

	pub fn min(&self) -> Vec3 {
		self.min
	}

	pub fn max(&self) -> Vec3 {
		self.max
	}

	pub fn expanded_to_contain(self, point: Vec3) -> Self {
		Self::new(self.min.min(point), self.max.max(point))
	}

	pub fn containing(points: impl IntoIterator<Item = Vec3>) -> Self {
		points
			.into_iter()
			.fold(Self::empty(), |b, p| b.expanded_to_contain(p))
	}

	/// Closed on every face, unlike a half-open pixel box, so a single-point box contains its point.
	pub fn contains(&self, point: Vec3) -> bool {
		point.cmpge(self.min).all() && point.cmple(self.max).all()
	}

	pub fn size(&self) -> Vec3 {
		if self.is_empty() {
			Vec3::ZERO
		} else {
			self.max - self.min
		}
	}

	pub fn center(&self) -> Option<Vec3> {
		(!self.is_empty()).then(|| 0.5 * (self.min + self.max))
	}
}
