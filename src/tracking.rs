//! Hand-tracking capability consumed by the stroke builder.
//!
//! The provider is supplied by the host: it knows how to read finger pinches and
//! locate skeleton bones. Bones may not be resolvable until the hand has been seen
//! at least once, so resolution is separate from reading a bone's position.

use derive_more::Display;
use glam::Vec3;
use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, Default, Display, PartialEq, Eq, Hash)]
pub enum Hand {
	#[default]
	Left,
	Right,
}

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum Finger {
	Thumb,
	Index,
	Middle,
	Ring,
	Pinky,
}

/// Skeleton bones of a tracked hand, ordered from the wrist outwards per finger.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum BoneId {
	HandWristRoot,
	HandForearmStub,
	HandThumb0,
	HandThumb1,
	HandThumb2,
	HandThumb3,
	HandIndex1,
	HandIndex2,
	HandIndex3,
	HandMiddle1,
	HandMiddle2,
	HandMiddle3,
	HandRing1,
	HandRing2,
	HandRing3,
	HandPinky0,
	HandPinky1,
	HandPinky2,
	HandPinky3,
	HandThumbTip,
	HandIndexTip,
	HandMiddleTip,
	HandRingTip,
	HandPinkyTip,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PinchState {
	pub is_pinching: bool,
	/// Normalized finger-to-thumb closure in `[0, 1]`.
	pub strength: f32,
}

pub trait HandTracker {
	/// Handle to a resolved skeleton bone.
	type Bone;

	fn pinch_state(&self, finger: Finger) -> PinchState;

	/// `None` while the skeleton is not yet available.
	fn resolve_bone(&self, id: BoneId) -> Option<Self::Bone>;

	fn bone_position(&self, bone: &Self::Bone) -> Vec3;
}

/// Per-tick snapshot of everything the stroke builder reads from the tracker.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HandState {
	pub is_pinching: bool,
	pub pinch_strength: f32,
	pub position: Vec3,
}

impl HandState {
	pub fn poll<T: HandTracker + ?Sized>(tracker: &T, finger: Finger, bone: &T::Bone) -> Self {
		let PinchState {
			is_pinching,
			strength,
		} = tracker.pinch_state(finger);
		Self {
			is_pinching,
			pinch_strength: strength,
			position: tracker.bone_position(bone),
		}
	}

	pub fn is_drawing(&self, min_pinch_strength: f32) -> bool {
		self.is_pinching && self.pinch_strength >= min_pinch_strength
	}
}

/// One frame of a [`ScriptedHand`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandFrame {
	/// `None` means the skeleton is not tracked during this frame.
	pub position: Option<Vec3>,
	pub pinch: PinchState,
}

impl HandFrame {
	pub fn untracked() -> Self {
		Self {
			position: None,
			pinch: PinchState::default(),
		}
	}

	pub fn open(position: Vec3) -> Self {
		Self {
			position: Some(position),
			pinch: PinchState::default(),
		}
	}

	pub fn pinched(position: Vec3, strength: f32) -> Self {
		Self {
			position: Some(position),
			pinch: PinchState {
				is_pinching: true,
				strength,
			},
		}
	}
}

/// Replays a fixed sequence of frames. Every tracked bone sits at the frame position and
/// every finger reports the frame pinch. The last frame is held once the script runs out.
#[derive(Clone, Debug, Default)]
pub struct ScriptedHand {
	frames: VecDeque<HandFrame>,
	current: Option<HandFrame>,
}

impl ScriptedHand {
	pub fn new(frames: impl IntoIterator<Item = HandFrame>) -> Self {
		let mut frames: VecDeque<_> = frames.into_iter().collect();
		let current = frames.pop_front();
		Self { frames, current }
	}

	pub fn push(&mut self, frame: HandFrame) {
		if self.current.is_none() {
			self.current = Some(frame);
		} else {
			self.frames.push_back(frame);
		}
	}

	/// Moves to the next frame. Returns `false` once the script is exhausted.
	pub fn advance(&mut self) -> bool {
		match self.frames.pop_front() {
			Some(frame) => {
				self.current = Some(frame);
				true
			}
			None => false,
		}
	}

	fn frame(&self) -> HandFrame {
		self.current.unwrap_or_else(HandFrame::untracked)
	}
}

impl HandTracker for ScriptedHand {
	type Bone = BoneId;

	fn pinch_state(&self, _finger: Finger) -> PinchState {
		self.frame().pinch
	}

	fn resolve_bone(&self, id: BoneId) -> Option<BoneId> {
		self.frame().position.map(|_| id)
	}

	fn bone_position(&self, _bone: &BoneId) -> Vec3 {
		self.frame().position.unwrap_or(Vec3::ZERO)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use glam::vec3;

	#[test]
	fn test_is_drawing_threshold() {
		let state = HandState {
			is_pinching: true,
			pinch_strength: 0.5,
			position: Vec3::ZERO,
		};
		assert!(state.is_drawing(0.5));
		assert!(!state.is_drawing(0.51));

		let released = HandState {
			is_pinching: false,
			..state
		};
		assert!(!released.is_drawing(0.0));
	}

	#[test]
	fn test_scripted_hand() {
		let mut hand = ScriptedHand::new([
			HandFrame::untracked(),
			HandFrame::pinched(vec3(1.0, 2.0, 3.0), 0.8),
		]);
		assert_eq!(hand.resolve_bone(BoneId::HandIndex1), None);
		assert!(hand.advance());

		let bone = hand.resolve_bone(BoneId::HandIndex1).unwrap();
		let state = HandState::poll(&hand, Finger::Index, &bone);
		assert_eq!(state.position, vec3(1.0, 2.0, 3.0));
		assert!(state.is_pinching);
		assert_eq!(state.pinch_strength, 0.8);

		assert!(!hand.advance());
		assert_eq!(hand.bone_position(&bone), vec3(1.0, 2.0, 3.0));
	}

	#[test]
	fn test_hand_display() {
		assert_eq!(Hand::Left.to_string(), "Left");
		assert_eq!(Hand::Right.to_string(), "Right");
	}
}
