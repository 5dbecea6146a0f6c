//! Audio clip addressing
//!
//! One clip per verse, addressed by reciter edition and global verse
//! number. Pure URL construction; whether the clip exists is the
//! player's problem.

use recitation_engine::ClipUrlResolver;
use tilawah_core::ReciterId;

/// CDN base for verse-by-verse recitation clips
pub const CLIP_CDN_BASE: &str = "https://cdn.islamic.network/quran/audio";

/// Default clip bitrate in kbps
pub const DEFAULT_BITRATE: u16 = 128;

/// Builds the clip URL for a verse
pub fn clip_url(reciter: &ReciterId, global_number: u32) -> String {
    format!(
        "{}/{}/{}/{}.mp3",
        CLIP_CDN_BASE, DEFAULT_BITRATE, reciter, global_number
    )
}

/// [`ClipUrlResolver`] over the public clip CDN
#[derive(Debug, Clone)]
pub struct CdnClips {
    bitrate: u16,
}

impl CdnClips {
    /// Resolver at the default bitrate
    pub fn new() -> Self {
        Self {
            bitrate: DEFAULT_BITRATE,
        }
    }

    /// Resolver at a specific bitrate (the CDN serves 32..=192)
    pub fn with_bitrate(bitrate: u16) -> Self {
        Self { bitrate }
    }
}

impl Default for CdnClips {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipUrlResolver for CdnClips {
    fn clip_url(&self, reciter: &ReciterId, global_number: u32) -> String {
        format!(
            "{}/{}/{}/{}.mp3",
            CLIP_CDN_BASE, self.bitrate, reciter, global_number
        )
    }
}
