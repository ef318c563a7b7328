use crate::color::Color;
use crate::tracking::{BoneId, Finger, Hand};
use bon::Builder;
use thiserror::Error;

pub const DEFAULT_MIN_PINCH_STRENGTH: f32 = 0.5;
pub const DEFAULT_MIN_DISTANCE_BEFORE_NEW_POINT: f32 = 0.2;
pub const DEFAULT_LINE_WIDTH: f32 = 0.010;
pub const DEFAULT_CAP_VERTICES: u32 = 5;
pub const DEFAULT_MATERIAL: &str = "default_line";

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
	#[error("{name} must be finite, got {value}")]
	NotFinite { name: &'static str, value: f32 },

	#[error("{name} must not be negative, got {value}")]
	Negative { name: &'static str, value: f32 },

	#[error("{name} must be in [{min}, {max}], got {value}")]
	OutOfRange {
		name: &'static str,
		value: f32,
		min: f32,
		max: f32,
	},
}

static_assertions::assert_impl_all!(ConfigError: std::error::Error, Send, Sync);

/// Settings for a [`crate::StrokeBuilder`], fixed at construction except for the
/// values exposed through its setters.
#[derive(Builder, Clone, Debug, PartialEq)]
pub struct DrawConfig {
	/// Which hand the strokes are attributed to. Only used for labels.
	#[builder(default = Hand::Left)]
	pub hand: Hand,

	/// Finger whose pinch engages drawing.
	#[builder(default = Finger::Index)]
	pub finger: Finger,

	/// Skeleton bone whose position is followed.
	#[builder(default = BoneId::HandIndex1)]
	pub bone: BoneId,

	#[builder(default = DEFAULT_MIN_PINCH_STRENGTH)]
	pub min_pinch_strength: f32,

	#[builder(default = DEFAULT_MIN_DISTANCE_BEFORE_NEW_POINT)]
	pub min_distance_before_new_point: f32,

	#[builder(default = DEFAULT_LINE_WIDTH)]
	pub line_width: f32,

	#[builder(default)]
	pub line_color: Color,

	#[builder(default = DEFAULT_CAP_VERTICES)]
	pub cap_vertices: u32,

	/// Renderer-side material name handed to every new line.
	#[builder(into, default = DEFAULT_MATERIAL.to_owned())]
	pub material: String,
}

impl Default for DrawConfig {
	fn default() -> Self {
		Self::builder().build()
	}
}

pub(crate) fn check_unit_range(name: &'static str, value: f32) -> Result<f32, ConfigError> {
	if !value.is_finite() {
		return Err(ConfigError::NotFinite { name, value });
	}
	if !(0.0..=1.0).contains(&value) {
		return Err(ConfigError::OutOfRange {
			name,
			value,
			min: 0.0,
			max: 1.0,
		});
	}
	Ok(value)
}

/// Distances and widths have no upper bound; any finite value `>= 0` is taken as given.
pub(crate) fn check_non_negative(name: &'static str, value: f32) -> Result<f32, ConfigError> {
	if !value.is_finite() {
		return Err(ConfigError::NotFinite { name, value });
	}
	if value < 0.0 {
		return Err(ConfigError::Negative { name, value });
	}
	Ok(value)
}

impl DrawConfig {
	pub fn validate(&self) -> Result<(), ConfigError> {
		check_unit_range("min_pinch_strength", self.min_pinch_strength)?;
		check_non_negative(
			"min_distance_before_new_point",
			self.min_distance_before_new_point,
		)?;
		check_non_negative("line_width", self.line_width)?;
		Ok(())
	}
}
