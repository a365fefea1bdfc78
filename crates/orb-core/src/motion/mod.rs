//! Motion input: tilt smoothing, shake detection and event routing.
//!
//! Raw accelerometer samples are consumed twice: continuously by the tilt
//! filter for the parallax offset, and on a rate-limited cadence by the
//! shake detector for the discrete shake event. Both paths are O(1) and
//! non-blocking so they can run directly on the sensor delivery thread.

pub mod route;
pub mod shake;
pub mod tilt;

pub use route::{ShakeRouter, ShakeSubscription};
pub use shake::{ShakeConfig, ShakeDetector, ShakeEvent};
pub use tilt::{TiltConfig, TiltFilter, TiltVector};

/// Bundles both consumers of the sample stream behind one entry point for
/// the sensor delivery path.
pub struct MotionPipeline {
    tilt: TiltFilter,
    shake: ShakeDetector,
    router: ShakeRouter,
}

impl MotionPipeline {
    pub fn new(tilt_config: TiltConfig, shake_config: ShakeConfig, router: ShakeRouter) -> Self {
        Self {
            tilt: TiltFilter::new(tilt_config),
            shake: ShakeDetector::new(shake_config),
            router,
        }
    }

    /// Handles one raw 3-axis sample: updates the tilt filter, runs the
    /// shake detector, and routes any resulting event to the active
    /// subscriber.
    pub fn handle_sample(&mut self, x: f32, y: f32, z: f32, timestamp_ms: u64) -> TiltVector {
        let tilt = self.tilt.update(x, y);
        if let Some(event) = self.shake.observe(x, y, z, timestamp_ms) {
            self.router.publish(event);
        }
        tilt
    }

    /// Returns the current smoothed tilt.
    pub fn tilt(&self) -> TiltVector {
        self.tilt.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_routes_shake_to_subscriber() {
        let router = ShakeRouter::new();
        let (_sub, mut rx) = router.subscribe();
        let mut pipeline =
            MotionPipeline::new(TiltConfig::default(), ShakeConfig::default(), router);

        pipeline.handle_sample(0.0, 0.0, 0.0, 150);
        pipeline.handle_sample(40.0, 0.0, 0.0, 300);

        assert!(rx.try_recv().is_ok());
    }

    #[test]
    fn intermediate_samples_still_update_tilt() {
        let router = ShakeRouter::new();
        let mut pipeline =
            MotionPipeline::new(TiltConfig::default(), ShakeConfig::default(), router);

        pipeline.handle_sample(0.0, 1.0, 0.0, 150);
        // 10ms later: inside the shake rate limit, but the tilt moves.
        let tilt = pipeline.handle_sample(0.0, 1.0, 0.0, 160);
        assert!(tilt.y > 0.0);
    }
}
