//! Notifications surfaced to the UI layer

use tilawah_core::{ReciterId, VerseKey};

/// Events the host UI should react to
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// A new verse started playing
    VerseStarted { index: usize, key: VerseKey },
    /// The sequence played to its natural end
    PlaybackEnded,
    /// Three consecutive clip failures; the session was stopped
    PlaybackFailed { reciter: ReciterId },
    /// The sleep timer fired and stopped playback
    SleepTimerExpired,
    /// The configured repeat range no longer resolves; playback stopped
    RepeatRangeInvalid { start: u32, end: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_compare() {
        assert_eq!(EngineEvent::PlaybackEnded, EngineEvent::PlaybackEnded);
        assert_ne!(
            EngineEvent::PlaybackEnded,
            EngineEvent::SleepTimerExpired
        );
    }
}
