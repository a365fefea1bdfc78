//! Deterministic animation timeline driver.

use std::time::Duration;

/// A fixed sequence of frames played at a fixed interval.
///
/// Once started, the timeline always runs to completion: there is no early
/// termination and a second shake cannot interrupt it. Result resolution
/// only begins after the final frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTimeline {
    frame_count: u32,
    frame_interval: Duration,
}

impl Default for AnimationTimeline {
    fn default() -> Self {
        Self {
            frame_count: 125,
            frame_interval: Duration::from_millis(17),
        }
    }
}

impl AnimationTimeline {
    pub fn new(frame_count: u32, frame_interval: Duration) -> Self {
        Self {
            frame_count,
            frame_interval,
        }
    }

    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    /// Total wall-clock duration of one playback.
    pub fn duration(&self) -> Duration {
        self.frame_interval * self.frame_count
    }

    /// Plays every frame in order, invoking `on_frame` with the frame index
    /// and sleeping the fixed interval between frames.
    pub async fn play<F>(&self, mut on_frame: F)
    where
        F: FnMut(u32),
    {
        for frame in 0..self.frame_count {
            on_frame(frame);
            tokio::time::sleep(self.frame_interval).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn plays_every_frame_in_order() {
        let timeline = AnimationTimeline::new(10, Duration::from_millis(17));
        let mut frames = Vec::new();
        timeline.play(|f| frames.push(f)).await;
        assert_eq!(frames, (0..10).collect::<Vec<_>>());
    }

    #[tokio::test(start_paused = true)]
    async fn default_timeline_duration_matches_frame_grid() {
        let timeline = AnimationTimeline::default();
        assert_eq!(timeline.frame_count(), 125);
        assert_eq!(timeline.duration(), Duration::from_millis(17 * 125));
    }
}
