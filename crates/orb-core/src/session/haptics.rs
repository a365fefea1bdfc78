//! Haptic feedback sink invoked at interaction milestones.

use std::time::Duration;

/// Pulse fired when a mode button is selected.
pub const MODE_SELECT_PULSE: Duration = Duration::from_millis(20);
/// Pulse fired synchronously with a shake being acknowledged.
pub const SHAKE_ACK_PULSE: Duration = Duration::from_millis(50);
/// Pulse fired when the animation completes and a result is ready.
pub const RESULT_READY_PULSE: Duration = Duration::from_millis(150);

/// External vibration collaborator.
pub trait HapticSink: Send + Sync {
    fn pulse(&self, duration: Duration);
}

/// No-op sink for hosts without a vibration motor.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHaptics;

impl HapticSink for NullHaptics {
    fn pulse(&self, _duration: Duration) {}
}
