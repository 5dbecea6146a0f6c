//! Content API collaborators for Tilawah
//!
//! Verse text comes from the public alquran.cloud API; recitation clips
//! come from its CDN, one clip per verse. This crate owns both addresses:
//! the [`ContentSource`] implementation for text and the
//! [`CdnClips`] resolver the recitation engine uses for audio.

mod client;
mod clips;
mod error;
mod traits;

pub use client::QuranCloudSource;
pub use clips::{clip_url, CdnClips, CLIP_CDN_BASE, DEFAULT_BITRATE};
pub use error::{ContentError, ContentResult};
pub use traits::ContentSource;
