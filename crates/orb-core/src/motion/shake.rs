//! Derivative-based shake impulse detection.

use serde::{Deserialize, Serialize};

/// Tuning constants for the shake detector.
///
/// The threshold was chosen empirically to reject normal handling jitter
/// while catching an intentional shake. It is a tuned magic number; keep it
/// configurable instead of deriving a "correct" physical value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShakeConfig {
    /// Impulse magnitude above which a shake event fires.
    pub threshold: f32,
    /// Minimum milliseconds between impulse evaluations.
    pub min_interval_ms: u64,
}

impl Default for ShakeConfig {
    fn default() -> Self {
        Self {
            threshold: 800.0,
            min_interval_ms: 100,
        }
    }
}

/// A discrete shake signal with the timestamp of the sample that fired it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShakeEvent {
    pub timestamp_ms: u64,
    pub impulse: f32,
}

/// Detects shake impulses from raw 3-axis acceleration samples.
///
/// Evaluation is rate-limited: samples arriving less than the configured
/// interval after the previous evaluation are ignored here (they still feed
/// the tilt filter). On each eligible tick the impulse is the absolute
/// axis-sum delta against the one retained previous sample, scaled by the
/// elapsed time. This is a simple derivative detector, not a frequency-domain
/// gesture recognizer: it will false-positive on hard jolts and
/// false-negative on slow deliberate shakes.
#[derive(Debug, Clone, Default)]
pub struct ShakeDetector {
    config: ShakeConfig,
    last_eval_ms: u64,
    prev: [f32; 3],
}

impl ShakeDetector {
    /// Creates a detector with the given tuning constants.
    pub fn new(config: ShakeConfig) -> Self {
        Self {
            config,
            last_eval_ms: 0,
            prev: [0.0; 3],
        }
    }

    /// Observes one raw sample, returning a shake event when the impulse
    /// crosses the threshold.
    ///
    /// The retained previous sample is overwritten on every eligible tick,
    /// whether or not an event fired.
    pub fn observe(&mut self, x: f32, y: f32, z: f32, timestamp_ms: u64) -> Option<ShakeEvent> {
        let elapsed = timestamp_ms.saturating_sub(self.last_eval_ms);
        if elapsed <= self.config.min_interval_ms {
            return None;
        }
        self.last_eval_ms = timestamp_ms;

        let [px, py, pz] = self.prev;
        let impulse = (x + y + z - px - py - pz).abs() / elapsed as f32 * 10_000.0;
        self.prev = [x, y, z];

        if impulse > self.config.threshold {
            Some(ShakeEvent {
                timestamp_ms,
                impulse,
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_within_rate_limit_are_not_evaluated() {
        let mut detector = ShakeDetector::new(ShakeConfig::default());
        // First evaluation happens at t=150.
        assert!(detector.observe(0.0, 0.0, 0.0, 150).is_none());
        // A violent delta only 50ms later must not be evaluated at all.
        assert!(detector.observe(100.0, 100.0, 100.0, 200).is_none());
        // At t=300 the delta is evaluated against the t=150 sample.
        assert!(detector.observe(100.0, 100.0, 100.0, 300).is_some());
    }

    #[test]
    fn impulse_above_threshold_fires_exactly_once() {
        let mut detector = ShakeDetector::new(ShakeConfig::default());
        detector.observe(0.0, 0.0, 0.0, 150);
        let mut events = 0;
        // One big jump, then the hand holds still.
        for (i, sample) in [(40.0, 0.0, 0.0), (40.0, 0.0, 0.0), (40.0, 0.0, 0.0)]
            .iter()
            .enumerate()
        {
            let ts = 300 + i as u64 * 150;
            if detector
                .observe(sample.0, sample.1, sample.2, ts)
                .is_some()
            {
                events += 1;
            }
        }
        assert_eq!(events, 1);
    }

    #[test]
    fn gentle_handling_stays_below_threshold() {
        let mut detector = ShakeDetector::new(ShakeConfig::default());
        detector.observe(0.0, 9.8, 0.0, 150);
        // Slow drift across many ticks.
        for i in 1..20u64 {
            let wobble = 0.2 * (i % 3) as f32;
            assert!(
                detector
                    .observe(wobble, 9.8 + wobble, 0.0, 150 + i * 150)
                    .is_none()
            );
        }
    }

    #[test]
    fn impulse_scales_with_elapsed_time() {
        let mut fast = ShakeDetector::new(ShakeConfig::default());
        let mut slow = ShakeDetector::new(ShakeConfig::default());
        fast.observe(0.0, 0.0, 0.0, 150);
        slow.observe(0.0, 0.0, 0.0, 150);
        // Same delta, but spread over a long interval it decays below the
        // threshold: 30 / 150 * 10000 = 2000 vs 30 / 2000 * 10000 = 150.
        assert!(fast.observe(10.0, 10.0, 10.0, 300).is_some());
        assert!(slow.observe(10.0, 10.0, 10.0, 2150).is_none());
    }
}
