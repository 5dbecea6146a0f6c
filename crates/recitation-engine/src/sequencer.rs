//! The recitation sequencer
//!
//! Drives ordered, gapless playback of one remote clip per verse. All
//! mutation happens on the caller's thread: backend events arrive over a
//! channel and are applied by `pump()` (or injected directly with
//! `handle_clip_event`). Every event carries the session token it was
//! issued under; events from superseded sessions are dropped on entry, so
//! no stale callback can restart a stopped session.

use crate::backend::{ClipBackend, ClipEvent, ClipEventKind, ClipUrlResolver, SessionToken};
use crate::events::EngineEvent;
use crate::repeat::RepeatMode;
use crate::session::{PlaybackPhase, PlaybackSession};
use crate::sleep::SleepTimer;
use crate::speed::RecitationSpeed;
use crossbeam_channel::{unbounded, Receiver, Sender};
use tilawah_core::{Duration, ReciterId, Timestamp, Verse, VerseKey};

/// Consecutive clip failures tolerated before stopping with a user notice
const MAX_CONSECUTIVE_ERRORS: u8 = 3;

/// Read-only view of the engine for the UI layer
#[derive(Debug, Clone, PartialEq)]
pub struct EngineSnapshot {
    pub phase: PlaybackPhase,
    pub current_index: Option<usize>,
    pub current_verse: Option<VerseKey>,
    pub elapsed_seconds: f64,
    pub total_seconds: f64,
    pub speed: RecitationSpeed,
    pub repeat: RepeatMode,
    pub sleep_remaining: Option<Duration>,
    pub consecutive_errors: u8,
}

/// Sequential clip playback with repeat policy, speed control, a sleep
/// timer and a bounded skip-on-error policy
pub struct RecitationSequencer<B: ClipBackend> {
    backend: B,
    resolver: Box<dyn ClipUrlResolver>,
    reciter: ReciterId,
    speed: RecitationSpeed,
    repeat: RepeatMode,
    session: Option<PlaybackSession>,
    sleep: Option<SleepTimer>,
    /// Phase reported while no session exists
    idle_phase: PlaybackPhase,
    next_token: u64,
    clip_tx: Sender<ClipEvent>,
    clip_rx: Receiver<ClipEvent>,
    notifications: Vec<EngineEvent>,
}

impl<B: ClipBackend> RecitationSequencer<B> {
    /// Creates a sequencer over a backend and a clip URL resolver
    pub fn new(backend: B, resolver: Box<dyn ClipUrlResolver>) -> Self {
        let (clip_tx, clip_rx) = unbounded();
        Self {
            backend,
            resolver,
            reciter: ReciterId::default(),
            speed: RecitationSpeed::default(),
            repeat: RepeatMode::default(),
            session: None,
            sleep: None,
            idle_phase: PlaybackPhase::Idle,
            next_token: 0,
            clip_tx,
            clip_rx,
            notifications: Vec::new(),
        }
    }

    /// Sender the backend uses to report clip events
    pub fn clip_event_sender(&self) -> Sender<ClipEvent> {
        self.clip_tx.clone()
    }

    /// Applies all queued backend events
    pub fn pump(&mut self) {
        while let Ok(event) = self.clip_rx.try_recv() {
            self.handle_clip_event(event);
        }
    }

    /// Drains notifications accumulated since the last call
    pub fn take_notifications(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.notifications)
    }

    // ----- commands -------------------------------------------------------

    /// Starts a new session playing `verses` from `start`
    ///
    /// Any existing session is torn down first. An empty sequence or an
    /// out-of-range start index fails silently into `Stopped`.
    pub fn play_from(&mut self, verses: Vec<Verse>, start: usize) {
        self.teardown_session();

        if verses.is_empty() || start >= verses.len() {
            log::warn!(
                "play_from rejected: {} verses, start index {}",
                verses.len(),
                start
            );
            self.idle_phase = PlaybackPhase::Stopped;
            return;
        }

        self.next_token += 1;
        let token = SessionToken::new(self.next_token);
        let session = PlaybackSession::new(
            token,
            verses,
            start,
            self.reciter.clone(),
            self.speed,
            self.repeat,
        );
        log::info!("{} playing from index {}", token, start);
        self.session = Some(session);
        self.load_current_clip();
    }

    /// Flips between playing and paused; no-op without an active clip
    pub fn toggle_play_pause(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match session.phase {
            PlaybackPhase::Playing => {
                self.backend.pause();
                session.phase = PlaybackPhase::Paused;
            }
            PlaybackPhase::Paused => {
                self.backend.play();
                // Speed is re-applied on every resume
                self.backend.set_rate(session.speed.as_f32());
                session.phase = PlaybackPhase::Playing;
            }
            _ => {}
        }
    }

    /// Stops playback, cancels pending loads and the sleep timer
    ///
    /// Idempotent; safe to call in any state.
    pub fn stop(&mut self) {
        self.teardown_session();
        self.sleep = None;
    }

    /// Seeks within the current clip, clamped to `[0, total]`
    pub fn seek(&mut self, seconds: f64) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if !session.has_active_clip() {
            return;
        }
        let clamped = seconds.clamp(0.0, session.total_secs);
        self.backend.seek(clamped);
        session.elapsed_secs = clamped;
    }

    /// Moves to the next verse; valid only while playing
    pub fn skip_next(&mut self) {
        self.skip_to(|cursor, len| (cursor + 1).min(len - 1));
    }

    /// Moves to the previous verse; valid only while playing
    pub fn skip_prev(&mut self) {
        self.skip_to(|cursor, _| cursor.saturating_sub(1));
    }

    /// Sets the playback rate, applied immediately and kept for the rest
    /// of the session and future sessions
    pub fn set_speed(&mut self, speed: RecitationSpeed) {
        self.speed = speed;
        if let Some(session) = self.session.as_mut() {
            session.speed = speed;
            if session.has_active_clip() {
                self.backend.set_rate(speed.as_f32());
            }
        }
    }

    /// Sets the repeat policy, effective at the next end-of-clip boundary
    pub fn set_repeat_mode(&mut self, repeat: RepeatMode) {
        self.repeat = repeat;
        if let Some(session) = self.session.as_mut() {
            // Re-resolve against the live sequence once, now; a failed
            // resolution is reported at the boundary.
            session.resolved_range = repeat.resolve(&session.verses).unwrap_or(None);
        }
    }

    /// Arms the sleep timer `minutes` from `now`
    pub fn set_sleep_timer(&mut self, minutes: u64, now: Timestamp) {
        self.sleep = Some(SleepTimer::starting_at(now, minutes));
        log::info!("Sleep timer armed for {} min", minutes);
    }

    /// Disarms the sleep timer without touching playback
    pub fn clear_sleep_timer(&mut self) {
        self.sleep = None;
    }

    /// Selects a reciter; a change during playback is a hard interrupt
    pub fn set_reciter(&mut self, reciter: ReciterId) {
        if reciter == self.reciter {
            return;
        }
        if self.session.is_some() {
            log::info!("Reciter changed mid-session, stopping playback");
            self.stop();
        }
        self.reciter = reciter;
    }

    /// Periodic driver: checks the sleep timer
    ///
    /// Expiry runs the same `stop()` as every other teardown, then emits
    /// [`EngineEvent::SleepTimerExpired`].
    pub fn tick(&mut self, now: Timestamp) {
        if let Some(timer) = self.sleep {
            if timer.is_expired(now) {
                self.stop();
                self.notifications.push(EngineEvent::SleepTimerExpired);
            }
        }
    }

    // ----- queries --------------------------------------------------------

    /// Current engine state for the UI
    pub fn snapshot(&self, now: Timestamp) -> EngineSnapshot {
        match self.session.as_ref() {
            Some(session) => EngineSnapshot {
                phase: session.phase,
                current_index: Some(session.cursor),
                current_verse: Some(session.current_key()),
                elapsed_seconds: session.elapsed_secs,
                total_seconds: session.total_secs,
                speed: session.speed,
                repeat: self.repeat,
                sleep_remaining: self.sleep.map(|t| t.remaining(now)),
                consecutive_errors: session.consecutive_errors,
            },
            None => EngineSnapshot {
                phase: self.idle_phase,
                current_index: None,
                current_verse: None,
                elapsed_seconds: 0.0,
                total_seconds: 0.0,
                speed: self.speed,
                repeat: self.repeat,
                sleep_remaining: self.sleep.map(|t| t.remaining(now)),
                consecutive_errors: 0,
            },
        }
    }

    /// The currently selected reciter
    pub fn reciter(&self) -> &ReciterId {
        &self.reciter
    }

    // ----- event handling -------------------------------------------------

    /// Applies one backend event; events from superseded sessions are
    /// discarded here
    pub fn handle_clip_event(&mut self, event: ClipEvent) {
        let live = self.session.as_ref().map(|s| s.token);
        if live != Some(event.token) {
            log::debug!("Dropping stale clip event from {}", event.token);
            return;
        }

        match event.kind {
            ClipEventKind::Ready { duration_secs } => self.on_clip_ready(duration_secs),
            ClipEventKind::Position { elapsed_secs } => {
                if let Some(session) = self.session.as_mut() {
                    if session.phase == PlaybackPhase::Playing {
                        session.elapsed_secs = elapsed_secs;
                    }
                }
            }
            ClipEventKind::Finished => self.on_clip_finished(),
            ClipEventKind::Failed { message } => self.on_clip_failed(&message),
        }
    }

    fn on_clip_ready(&mut self, duration_secs: f64) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        // Any successful clip start clears the transient-failure budget
        session.consecutive_errors = 0;
        session.total_secs = duration_secs;

        if session.phase == PlaybackPhase::Loading {
            self.backend.play();
            self.backend.set_rate(session.speed.as_f32());
            session.phase = PlaybackPhase::Playing;
            session.elapsed_secs = 0.0;
            let started = EngineEvent::VerseStarted {
                index: session.cursor,
                key: session.current_key(),
            };
            self.notifications.push(started);
        }
    }

    /// End-of-clip advance, the core transition
    fn on_clip_finished(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        // Single-verse loop replays the session's starting index, not the
        // cursor, so skips never shift the loop target.
        if self.repeat == RepeatMode::SingleVerse {
            session.cursor = session.anchor;
            self.load_current_clip();
            return;
        }

        // Range loop wraps when the cursor leaves the resolved range
        if matches!(self.repeat, RepeatMode::Range { .. }) {
            if let Some(range) = session.resolved_range {
                if session.cursor == range.end {
                    session.cursor = range.start;
                    self.load_current_clip();
                    return;
                }
            }
        }

        if session.cursor + 1 < session.len() {
            session.cursor += 1;
            self.load_current_clip();
            return;
        }

        // Sequence exhausted
        match self.repeat {
            RepeatMode::Off | RepeatMode::SingleVerse => {
                log::info!("{} played to the end", session.token);
                self.teardown_session();
                self.notifications.push(EngineEvent::PlaybackEnded);
            }
            RepeatMode::WholeSequence => {
                session.cursor = 0;
                self.load_current_clip();
            }
            RepeatMode::Range { start, end } => match session.resolved_range {
                Some(range) => {
                    session.cursor = range.start;
                    self.load_current_clip();
                }
                None => {
                    // Configuration inconsistent: report, do not guess
                    log::warn!("Repeat range {}..{} does not resolve; stopping", start, end);
                    self.teardown_session();
                    self.notifications
                        .push(EngineEvent::RepeatRangeInvalid { start, end });
                }
            },
        }
    }

    fn on_clip_failed(&mut self, message: &str) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.consecutive_errors += 1;
        log::warn!(
            "{} clip {} failed ({}/{}): {}",
            session.token,
            session.cursor,
            session.consecutive_errors,
            MAX_CONSECUTIVE_ERRORS,
            message
        );

        if session.consecutive_errors >= MAX_CONSECUTIVE_ERRORS {
            // A fully broken voice-set would otherwise skip forever
            let reciter = session.reciter.clone();
            self.teardown_session();
            self.notifications
                .push(EngineEvent::PlaybackFailed { reciter });
            return;
        }

        // Transient blip: skip ahead silently
        if session.cursor + 1 < session.len() {
            session.cursor += 1;
            self.load_current_clip();
        } else {
            self.teardown_session();
            self.notifications.push(EngineEvent::PlaybackEnded);
        }
    }

    // ----- internals ------------------------------------------------------

    fn skip_to(&mut self, target: impl Fn(usize, usize) -> usize) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.phase != PlaybackPhase::Playing {
            return;
        }
        let next = target(session.cursor, session.len());
        if next == session.cursor {
            return;
        }
        session.cursor = next;
        self.load_current_clip();
    }

    /// Tears down the current clip and loads the one under the cursor.
    /// Preserves the session; the phase becomes Loading until Ready.
    fn load_current_clip(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let url = self
            .resolver
            .clip_url(&session.reciter, session.current_verse().global_number);
        session.phase = PlaybackPhase::Loading;
        session.elapsed_secs = 0.0;
        session.total_secs = 0.0;
        self.backend.release();
        self.backend.load(session.token, &url);
    }

    /// Releases the backend and drops the session. The next-token counter
    /// is what invalidates any in-flight callbacks.
    fn teardown_session(&mut self) {
        if self.session.take().is_some() {
            self.backend.release();
            self.idle_phase = PlaybackPhase::Stopped;
        }
    }
}
