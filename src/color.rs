use glam::Vec4;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("invalid color {input:?}: {reason}")]
pub struct ColorError {
	input: String,
	reason: String,
}

static_assertions::assert_impl_all!(ColorError: std::error::Error, Send, Sync);

/// Straight-alpha RGBA color in gamma-encoded sRGB, each channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
	rgba: Vec4,
}

impl Default for Color {
	fn default() -> Self {
		Self::WHITE
	}
}

impl Color {
	pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
	pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

	pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
		Self {
			rgba: Vec4::new(r, g, b, a),
		}
	}

	pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
		Self::new(r, g, b, 1.0)
	}

	/// Parses any CSS color string, e.g. `"#ff8800"`, `"rebeccapurple"` or `"hsl(120, 50%, 50%)"`.
	pub fn parse(input: &str) -> Result<Self, ColorError> {
		let color = csscolorparser::parse(input).map_err(|err| ColorError {
			input: input.to_owned(),
			reason: err.to_string(),
		})?;
		Ok(Self::new(
			color.r as f32,
			color.g as f32,
			color.b as f32,
			color.a as f32,
		))
	}

	pub fn red(&self) -> f32 {
		self.rgba.x
	}

	pub fn green(&self) -> f32 {
		self.rgba.y
	}

	pub fn blue(&self) -> f32 {
		self.rgba.z
	}

	pub fn alpha(&self) -> f32 {
		self.rgba.w
	}

	pub fn to_vec4(self) -> Vec4 {
		self.rgba
	}

	pub fn to_array(self) -> [f32; 4] {
		self.rgba.to_array()
	}
}

impl From<Vec4> for Color {
	fn from(rgba: Vec4) -> Self {
		Self { rgba }
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_abs_diff_eq;

	#[test]
	fn test_parse_hex() {
		let color = Color::parse("#ff0000").unwrap();
		assert_abs_diff_eq!(color.red(), 1.0);
		assert_abs_diff_eq!(color.green(), 0.0);
		assert_abs_diff_eq!(color.blue(), 0.0);
		assert_abs_diff_eq!(color.alpha(), 1.0);
	}

	#[test]
	fn test_parse_named_with_alpha() {
		let color = Color::parse("rgba(0, 0, 255, 0.5)").unwrap();
		assert_abs_diff_eq!(color.blue(), 1.0);
		assert_abs_diff_eq!(color.alpha(), 0.5, epsilon = 1e-3);
	}

	#[test]
	fn test_parse_rejects_garbage() {
		let err = Color::parse("not a color").unwrap_err();
		assert!(err.to_string().contains("not a color"));
	}
}
