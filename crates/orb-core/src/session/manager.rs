//! The motion-driven interaction state machine.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::error::{OrbError, Result};
use crate::history::{HistoryItem, HistoryLog};
use crate::motion::{ShakeEvent, ShakeRouter, ShakeSubscription};
use crate::resolver::ResultResolver;
use crate::session::animation::AnimationTimeline;
use crate::session::event::SessionEvent;
use crate::session::haptics::{HapticSink, MODE_SELECT_PULSE, RESULT_READY_PULSE, SHAKE_ACK_PULSE};
use crate::session::mode::{InteractionState, Mode};
use crate::session::transcript::Transcriber;

/// Outcome of a mode selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeSelection {
    /// The mode was armed; the session now waits for a shake.
    Armed,
    /// Question mode was selected; recording starts when the user holds the
    /// input control.
    AwaitingRecording,
    /// Daily mode bypasses the shake machine entirely; the caller opens the
    /// daily reading flow and the session is left untouched.
    OpensDailyFlow,
}

/// Owns the active mode, the interaction state and the result of the last
/// completed cycle.
///
/// State transitions form a strict order per cycle: a mode selection arms
/// the machine, a shake starts the animation, animation completion resolves
/// the result. Shake events are honored only while waiting for one; the
/// subscription that delivers them is acquired on entering that state and
/// released on every exit path. Selecting a mode while a cycle is animating
/// or recording is rejected, so no second cycle can race the one in flight.
pub struct InteractionSession {
    state: InteractionState,
    mode: Mode,
    result_text: String,
    history: HistoryLog,
    timeline: AnimationTimeline,
    router: ShakeRouter,
    shake_sub: Option<ShakeSubscription>,
    shake_rx: Option<mpsc::UnboundedReceiver<ShakeEvent>>,
    resolver: Arc<dyn ResultResolver>,
    haptics: Arc<dyn HapticSink>,
    transcriber: Arc<dyn Transcriber>,
    events: Option<mpsc::UnboundedSender<SessionEvent>>,
    language_hint: String,
}

impl InteractionSession {
    pub fn new(
        resolver: Arc<dyn ResultResolver>,
        haptics: Arc<dyn HapticSink>,
        transcriber: Arc<dyn Transcriber>,
    ) -> Self {
        Self {
            state: InteractionState::Idle,
            mode: Mode::None,
            result_text: String::new(),
            history: HistoryLog::new(),
            timeline: AnimationTimeline::default(),
            router: ShakeRouter::new(),
            shake_sub: None,
            shake_rx: None,
            resolver,
            haptics,
            transcriber,
            events: None,
            language_hint: "en-US".to_string(),
        }
    }

    /// Overrides the animation timeline after construction.
    pub fn with_timeline(mut self, timeline: AnimationTimeline) -> Self {
        self.timeline = timeline;
        self
    }

    /// Sets the language hint passed to the transcriber.
    pub fn with_language_hint(mut self, hint: impl Into<String>) -> Self {
        self.language_hint = hint.into();
        self
    }

    /// Returns the router the sensor pipeline publishes shake events into.
    pub fn shake_router(&self) -> ShakeRouter {
        self.router.clone()
    }

    /// Attaches an event channel for the presentation layer and returns the
    /// receiving end.
    pub fn subscribe_events(&mut self) -> mpsc::UnboundedReceiver<SessionEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.events = Some(tx);
        rx
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn result_text(&self) -> &str {
        &self.result_text
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Selects a mode, starting a new interaction cycle.
    ///
    /// Daily mode never enters the machine. Reselecting while a cycle is
    /// animating or recording is rejected; the caller retries once the
    /// current cycle reaches the result state.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransition` when a cycle is in flight.
    pub fn select_mode(&mut self, mode: Mode) -> Result<ModeSelection> {
        if matches!(
            self.state,
            InteractionState::Animating | InteractionState::Recording
        ) {
            return Err(OrbError::invalid_transition(self.state, "select a mode"));
        }
        if mode == Mode::Daily {
            return Ok(ModeSelection::OpensDailyFlow);
        }

        self.mode = mode;
        self.result_text.clear();
        self.haptics.pulse(MODE_SELECT_PULSE);

        if mode.uses_voice_input() {
            Ok(ModeSelection::AwaitingRecording)
        } else {
            self.arm();
            Ok(ModeSelection::Armed)
        }
    }

    /// Starts voice capture while the user holds the input control.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransition` unless question mode is selected and no
    /// cycle is animating.
    pub async fn begin_recording(&mut self) -> Result<()> {
        if !self.mode.uses_voice_input() {
            return Err(OrbError::invalid_transition(self.state, "start recording"));
        }
        if matches!(
            self.state,
            InteractionState::Animating | InteractionState::Recording
        ) {
            return Err(OrbError::invalid_transition(self.state, "start recording"));
        }
        self.disarm();
        self.transcriber.start(&self.language_hint).await;
        self.set_state(InteractionState::Recording);
        Ok(())
    }

    /// Stops voice capture and arms the machine for a shake.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransition` when not recording.
    pub async fn end_recording(&mut self) -> Result<()> {
        if self.state != InteractionState::Recording {
            return Err(OrbError::invalid_transition(self.state, "stop recording"));
        }
        self.transcriber.stop().await;
        self.arm();
        Ok(())
    }

    /// Handles a shake event. Honored only while waiting for one; events in
    /// any other state are dropped without a state change.
    ///
    /// Returns true when the shake started the animation.
    pub fn on_shake(&mut self) -> bool {
        if self.state != InteractionState::WaitingForShake {
            debug!(state = %self.state, "shake ignored outside waiting state");
            return false;
        }
        self.haptics.pulse(SHAKE_ACK_PULSE);
        self.disarm();
        self.set_state(InteractionState::Animating);
        true
    }

    /// Awaits the next shake event while armed.
    ///
    /// Returns `None` when the session is not waiting for a shake.
    pub async fn next_shake(&mut self) -> Option<ShakeEvent> {
        match self.shake_rx.as_mut() {
            Some(rx) => rx.recv().await,
            None => None,
        }
    }

    /// Plays the animation timeline to completion, then resolves the result.
    ///
    /// On completion the long haptic pulse fires, the transcript is read
    /// exactly once, the resolver produces the result text, and a history
    /// item is prepended.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransition` when no animation was started.
    pub async fn run_animation(&mut self) -> Result<String> {
        if self.state != InteractionState::Animating {
            return Err(OrbError::invalid_transition(self.state, "run the animation"));
        }
        let events = self.events.clone();
        self.timeline
            .play(|index| {
                if let Some(tx) = &events {
                    let _ = tx.send(SessionEvent::Frame { index });
                }
            })
            .await;
        Ok(self.finish_cycle().await)
    }

    /// Drives one full cycle: waits for a qualifying shake, plays the
    /// animation, and returns the resolved result.
    ///
    /// # Errors
    ///
    /// Returns an error when the machine is not armed.
    pub async fn run_cycle(&mut self) -> Result<String> {
        if self.next_shake().await.is_none() {
            return Err(OrbError::invalid_transition(self.state, "wait for a shake"));
        }
        // A delivered event implies the armed state; on_shake accepts it.
        self.on_shake();
        self.run_animation().await
    }

    fn arm(&mut self) {
        let (sub, rx) = self.router.subscribe();
        self.shake_sub = Some(sub);
        self.shake_rx = Some(rx);
        self.set_state(InteractionState::WaitingForShake);
    }

    fn disarm(&mut self) {
        self.shake_sub = None;
        self.shake_rx = None;
    }

    async fn finish_cycle(&mut self) -> String {
        self.haptics.pulse(RESULT_READY_PULSE);
        let voice_text = if self.mode.uses_voice_input() {
            self.transcriber.latest_text().await
        } else {
            String::new()
        };
        let text = self.resolver.resolve(self.mode, &voice_text).await;
        info!(mode = %self.mode, "interaction cycle resolved");

        self.result_text = text.clone();
        let item = HistoryItem::new(self.mode, text.clone());
        self.history.prepend(item.clone());
        self.set_state(InteractionState::ShowingResult);
        self.emit(SessionEvent::ResultReady { text: text.clone() });
        self.emit(SessionEvent::HistoryAppended { item });
        text
    }

    fn set_state(&mut self, state: InteractionState) {
        self.state = state;
        self.emit(SessionEvent::StateChanged { state });
    }

    fn emit(&self, event: SessionEvent) {
        if let Some(tx) = &self.events {
            let _ = tx.send(event);
        }
    }
}
