use std::cell::Cell;

/// Run state of one `requestAnimationFrame` loop, shared between the frame
/// callback and the owner's cleanup.
#[derive(Debug)]
pub struct FrameLoop {
	running: Cell<bool>,
	pending: Cell<Option<i32>>,
}

impl FrameLoop {
	pub fn new() -> Self {
		Self {
			running: Cell::new(true),
			pending: Cell::new(None),
		}
	}

	pub fn is_running(&self) -> bool {
		self.running.get()
	}

	/// Record the id returned by `request_animation_frame`.
	pub fn scheduled(&self, id: i32) {
		self.pending.set(Some(id));
	}

	/// The requested frame has started.
	pub fn fired(&self) {
		self.pending.set(None);
	}

	/// Stop the loop. Returns the frame still queued, which must be cancelled.
	pub fn stop(&self) -> Option<i32> {
		self.running.set(false);
		self.pending.take()
	}
}

impl Default for FrameLoop {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn runs_until_stopped() {
		let frames = FrameLoop::new();
		assert!(frames.is_running());
		frames.scheduled(1);
		frames.fired();
		frames.scheduled(2);
		assert_eq!(frames.stop(), Some(2));
		assert!(!frames.is_running());
	}

	#[test]
	fn stop_hands_back_queued_frame_once() {
		let frames = FrameLoop::new();
		frames.scheduled(7);
		assert_eq!(frames.stop(), Some(7));
		assert_eq!(frames.stop(), None);
	}

	#[test]
	fn nothing_to_cancel_between_frames() {
		let frames = FrameLoop::new();
		frames.scheduled(3);
		frames.fired();
		assert_eq!(frames.stop(), None);
	}
}
